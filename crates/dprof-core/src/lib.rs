//! Field inference and the end-to-end profiling pipeline.
//!
//! Adapters (dprof-ingest) normalize a source into matrix form; this crate
//! validates the matrix, samples it, derives one [`FieldMetadata`] per
//! column, and assembles the final [`AnalysisResult`]. Every call is a
//! pure function of its input plus the call-time timestamp; nothing
//! persists across calls.
//!
//! [`FieldMetadata`]: dprof_model::FieldMetadata
//! [`AnalysisResult`]: dprof_model::AnalysisResult

pub mod analysis;
pub mod pipeline;

pub use analysis::{
    detect_data_type, detect_pattern, field_length, infer_fields, is_field_unique,
    normalize_field_name,
};
pub use pipeline::{profile_bytes, profile_table};
