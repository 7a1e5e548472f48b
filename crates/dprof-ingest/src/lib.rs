//! Format adapters that normalize heterogeneous sources into a common
//! (header row, record matrix) shape.
//!
//! Each adapter implements [`FormatAdapter`]: a `supports` predicate over
//! the file name and a `parse` that turns raw bytes into a [`RawTable`].
//! Adapters live in a fixed-order [`AdapterRegistry`]; the first claimant
//! wins. Shared logic (source decoding, cell coercion) lives in plain
//! functions rather than a base type.

pub mod coerce;
pub mod csv_ingest;
pub mod encoding;
pub mod fixed_width;
pub mod json;
pub mod registry;
pub mod sheet;
pub mod text;
pub mod xml;

pub use coerce::{coerce_cell, coerce_text};
pub use csv_ingest::CsvAdapter;
pub use encoding::decode_source;
pub use json::JsonAdapter;
pub use registry::{AdapterRegistry, FormatAdapter, RawTable};
pub use sheet::SpreadsheetAdapter;
pub use text::{DelimitedTextAdapter, detect_delimiter};
pub use xml::XmlAdapter;
