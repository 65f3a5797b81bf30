//! Reader for XML document collections.
//!
//! A collection is a sequence of `<DOC id="...">` elements. Only the text of the
//! `<HEADLINE>` and `<TEXT>` sections is indexed; `<DATELINE>` and any other
//! section are skipped.

use crate::error::{Result, SearchError};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub id: String,
    /// Headline and body text, in document order.
    pub fragments: Vec<String>,
}

pub fn parse_file(path: &Path) -> Result<Vec<RawDocument>> {
    let file = File::open(path).map_err(|e| SearchError::from_io(path, e))?;
    parse_reader(BufReader::new(file))
}

/// Parse a collection and return its documents sorted by id.
pub fn parse_reader<R: BufRead>(input: R) -> Result<Vec<RawDocument>> {
    let mut reader = Reader::from_reader(input);
    let mut buf = Vec::new();
    let mut docs: Vec<RawDocument> = Vec::new();
    let mut current: Option<RawDocument> = None;
    // open HEADLINE/TEXT elements, and open excluded sections nested in them
    let mut indexed_depth = 0usize;
    let mut excluded_depth = 0usize;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| SearchError::Collection(format!("at byte {}: {e}", reader.buffer_position())))?;
        match event {
            Event::Start(e) => match e.name().as_ref() {
                b"DOC" => {
                    if let Some(doc) = current.take() {
                        docs.push(doc);
                    }
                    current = Some(RawDocument { id: doc_id(&e)?, fragments: Vec::new() });
                    indexed_depth = 0;
                    excluded_depth = 0;
                }
                b"HEADLINE" | b"TEXT" => indexed_depth += 1,
                b"DATELINE" => excluded_depth += 1,
                _ => {}
            },
            Event::Empty(e) if e.name().as_ref() == b"DOC" => {
                if let Some(doc) = current.take() {
                    docs.push(doc);
                }
                docs.push(RawDocument { id: doc_id(&e)?, fragments: Vec::new() });
            }
            Event::End(e) => match e.name().as_ref() {
                b"DOC" => {
                    if let Some(doc) = current.take() {
                        docs.push(doc);
                    }
                }
                b"HEADLINE" | b"TEXT" => indexed_depth = indexed_depth.saturating_sub(1),
                b"DATELINE" => excluded_depth = excluded_depth.saturating_sub(1),
                _ => {}
            },
            Event::Text(t) => {
                if let Some(doc) = current.as_mut().filter(|_| indexed_depth > 0 && excluded_depth == 0) {
                    let text = t.unescape().map_err(|e| SearchError::Collection(e.to_string()))?;
                    if !text.trim().is_empty() {
                        doc.fragments.push(text.into_owned());
                    }
                }
            }
            Event::CData(t) => {
                if let Some(doc) = current.as_mut().filter(|_| indexed_depth > 0 && excluded_depth == 0) {
                    let text = String::from_utf8(t.into_inner().into_owned())
                        .map_err(|e| SearchError::Collection(e.to_string()))?;
                    if !text.trim().is_empty() {
                        doc.fragments.push(text);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    if let Some(doc) = current.take() {
        docs.push(doc);
    }

    docs.sort_by(|a, b| a.id.cmp(&b.id));
    for pair in docs.windows(2) {
        if pair[0].id == pair[1].id {
            tracing::warn!(doc_id = %pair[0].id, "duplicate document id in collection");
        }
    }
    Ok(docs)
}

fn doc_id(start: &BytesStart<'_>) -> Result<String> {
    let attr = start
        .try_get_attribute("id")
        .map_err(|e| SearchError::Collection(e.to_string()))?
        .ok_or_else(|| SearchError::Collection("<DOC> element without an id attribute".into()))?;
    let value = attr.unescape_value().map_err(|e| SearchError::Collection(e.to_string()))?;
    Ok(value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<collection>
<DOC id="NYT_2" type="story">
<HEADLINE>Storm &amp; Surge</HEADLINE>
<DATELINE>MIAMI</DATELINE>
<TEXT>
<P>The hurricane moved north.</P>
<P><![CDATA[Residents left.]]></P>
</TEXT>
</DOC>
<DOC id="NYT_1" type="story">
<HEADLINE>Philadelphia</HEADLINE>
<TEXT><P>Quiet day.</P></TEXT>
</DOC>
</collection>
"#;

    #[test]
    fn collects_headline_and_text_sorted_by_id() {
        let docs = parse_reader(SAMPLE.as_bytes()).unwrap();
        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["NYT_1", "NYT_2"]);
        assert_eq!(docs[0].fragments, vec!["Philadelphia", "Quiet day."]);
        assert_eq!(
            docs[1].fragments,
            vec!["Storm & Surge", "The hurricane moved north.", "Residents left."]
        );
    }

    #[test]
    fn dateline_is_excluded() {
        let docs = parse_reader(SAMPLE.as_bytes()).unwrap();
        assert!(docs.iter().flat_map(|d| &d.fragments).all(|f| !f.contains("MIAMI")));
    }

    #[test]
    fn doc_without_id_is_rejected() {
        let err = parse_reader("<c><DOC><TEXT>x</TEXT></DOC></c>".as_bytes()).unwrap_err();
        assert!(matches!(err, SearchError::Collection(_)));
    }

    #[test]
    fn malformed_xml_is_rejected() {
        let err = parse_reader("<c><DOC id=\"a\"><TEXT>x</HEADLINE></DOC></c>".as_bytes()).unwrap_err();
        assert!(matches!(err, SearchError::Collection(_)));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = parse_file(Path::new("/definitely/not/here.xml")).unwrap_err();
        assert!(matches!(err, SearchError::NotFound(_)));
    }
}
