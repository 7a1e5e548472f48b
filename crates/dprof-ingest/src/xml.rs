//! XML adapter. The payload is parsed into a generic element tree; the
//! root's first repeating child element is taken as the record
//! collection, and attributes merge into the same key namespace as child
//! elements.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use dprof_model::{CellValue, ProfileError, ProfileOptions, Result, SourceFormat};

use crate::coerce::coerce_cell;
use crate::encoding::decode_source;
use crate::registry::{FormatAdapter, RawTable, has_extension};

pub struct XmlAdapter;

impl XmlAdapter {
    pub const EXTENSIONS: &'static [&'static str] = &[".xml"];
}

impl FormatAdapter for XmlAdapter {
    fn format(&self) -> SourceFormat {
        SourceFormat::Xml
    }

    fn supports(&self, file_name: &str) -> bool {
        has_extension(file_name, Self::EXTENSIONS)
    }

    fn parse(&self, input: &[u8], options: &ProfileOptions) -> Result<RawTable> {
        let content = decode_source(input, options.encoding.as_deref())?;
        let root = parse_tree(&content)?;

        // The record collection is the first child element name of the root.
        let record_name = root
            .children
            .first()
            .map(|(name, _)| name.clone())
            .ok_or(ProfileError::MissingRecordCollection)?;
        let records: Vec<&Element> = root
            .children
            .iter()
            .filter(|(name, _)| *name == record_name)
            .map(|(_, element)| element)
            .collect();
        if records.is_empty() {
            return Err(ProfileError::EmptySource(
                "XML source must contain at least one record".to_string(),
            ));
        }
        tracing::debug!(collection = %record_name, rows = records.len(), "parsed XML source");

        // Headers come from the first record: attributes first, then child
        // elements, in document order, lower-cased.
        let mut headers: Vec<String> = Vec::new();
        let first = records[0];
        for (name, _) in &first.attrs {
            push_unique(&mut headers, name.to_lowercase());
        }
        for (name, _) in &first.children {
            push_unique(&mut headers, name.to_lowercase());
        }

        let rows = records
            .iter()
            .map(|record| {
                headers
                    .iter()
                    .map(|header| coerce_cell(header, record.value_of(header)))
                    .collect()
            })
            .collect();

        Ok(RawTable {
            format: SourceFormat::Xml,
            headers,
            records: rows,
        })
    }
}

/// A parsed element: attributes, child elements in document order, and
/// accumulated text content.
#[derive(Debug, Default)]
struct Element {
    attrs: Vec<(String, String)>,
    children: Vec<(String, Element)>,
    text: String,
}

impl Element {
    /// Look up `key` (already lower-cased) among attributes and child
    /// elements, case-insensitively. A matching child collapses to its
    /// text content; a missing key yields null.
    fn value_of(&self, key: &str) -> CellValue {
        for (name, value) in &self.attrs {
            if name.to_lowercase() == key {
                return CellValue::Text(value.clone());
            }
        }
        for (name, child) in &self.children {
            if name.to_lowercase() == key {
                return CellValue::Text(child.text.clone());
            }
        }
        CellValue::Null
    }
}

fn push_unique(headers: &mut Vec<String>, name: String) {
    if !headers.contains(&name) {
        headers.push(name);
    }
}

fn invalid(error: impl std::fmt::Display) -> ProfileError {
    ProfileError::invalid_format("xml", error.to_string())
}

fn element_from_start(start: &BytesStart<'_>) -> Result<(String, Element)> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::default();
    for attr in start.attributes() {
        let attr = attr.map_err(invalid)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(invalid)?.into_owned();
        element.attrs.push((key, value));
    }
    Ok((name, element))
}

/// Parse the document into its root element, failing on malformed markup
/// or a missing root.
fn parse_tree(content: &str) -> Result<Element> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    // Virtual top-level element holding the document root as its child.
    let mut stack: Vec<(String, Element)> = vec![(String::new(), Element::default())];

    loop {
        match reader.read_event().map_err(invalid)? {
            Event::Start(start) => {
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                let child = element_from_start(&start)?;
                push_child(&mut stack, child)?;
            }
            Event::Text(text) => {
                let content = text.xml_content().map_err(invalid)?;
                if let Some((_, element)) = stack.last_mut() {
                    element.text.push_str(&content);
                }
            }
            Event::End(_) => {
                let finished = stack
                    .pop()
                    .ok_or_else(|| invalid("unbalanced closing tag"))?;
                push_child(&mut stack, finished)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let (_, document) = stack
        .pop()
        .filter(|_| stack.is_empty())
        .ok_or_else(|| invalid("unclosed element"))?;
    document
        .children
        .into_iter()
        .next()
        .map(|(_, root)| root)
        .ok_or_else(|| invalid("document has no root element"))
}

fn push_child(stack: &mut Vec<(String, Element)>, child: (String, Element)) -> Result<()> {
    let (_, parent) = stack
        .last_mut()
        .ok_or_else(|| invalid("unbalanced closing tag"))?;
    parent.children.push(child);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PEOPLE: &[u8] = br#"<?xml version="1.0"?>
        <people>
            <person>
                <name>Alice</name>
                <age>30</age>
            </person>
            <person>
                <name>Bob</name>
                <age>25</age>
            </person>
        </people>"#;

    #[test]
    fn repeating_child_is_the_record_collection() {
        let table = XmlAdapter.parse(PEOPLE, &ProfileOptions::default()).unwrap();
        assert_eq!(table.headers, vec!["name", "age"]);
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[0][0], CellValue::Text("Alice".to_string()));
    }

    #[test]
    fn attributes_merge_into_the_key_namespace() {
        let payload = br#"<items><item sku="A01"><qty>2</qty></item></items>"#;
        let table = XmlAdapter
            .parse(payload, &ProfileOptions::default())
            .unwrap();
        assert_eq!(table.headers, vec!["sku", "qty"]);
        assert_eq!(table.records[0][0], CellValue::Text("A01".to_string()));
    }

    #[test]
    fn missing_child_keys_yield_null() {
        let payload = br#"<rows><row><a>1</a><b>x</b></row><row><a>2</a></row></rows>"#;
        let table = XmlAdapter
            .parse(payload, &ProfileOptions::default())
            .unwrap();
        assert_eq!(table.records[1][1], CellValue::Null);
    }

    #[test]
    fn root_without_children_is_missing_record_collection() {
        let error = XmlAdapter
            .parse(b"<empty>just text</empty>", &ProfileOptions::default())
            .unwrap_err();
        assert!(matches!(error, ProfileError::MissingRecordCollection));
    }

    #[test]
    fn malformed_markup_is_invalid_format() {
        let error = XmlAdapter
            .parse(b"<a><b></a>", &ProfileOptions::default())
            .unwrap_err();
        assert!(matches!(error, ProfileError::InvalidFormat { format, .. } if format == "xml"));
    }

    #[test]
    fn id_elements_stay_strings_and_numbers_convert() {
        let payload =
            br#"<users><user><user_id>0042</user_id><score>87.5</score></user></users>"#;
        let table = XmlAdapter
            .parse(payload, &ProfileOptions::default())
            .unwrap();
        assert_eq!(table.records[0][0], CellValue::Text("0042".to_string()));
        assert_eq!(table.records[0][1], CellValue::Number(87.5));
    }
}
