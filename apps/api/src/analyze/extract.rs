//! Plain-text extraction from admitted documents. Runs entirely in memory;
//! an unreadable or empty document stops the flow before any LLM call.

use std::io::{Cursor, Read};

use tracing::warn;

use crate::analyze::upload::DocumentKind;
use crate::errors::AppError;

pub fn extract_text(kind: DocumentKind, data: &[u8]) -> Result<String, AppError> {
    let text = match kind {
        DocumentKind::Pdf => extract_pdf(data)?,
        DocumentKind::Docx => extract_docx(data)?,
    };

    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "The document appears to contain no text".to_string(),
        ));
    }
    Ok(text)
}

fn extract_pdf(data: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| {
        warn!("PDF text extraction failed: {e}");
        AppError::UnprocessableEntity("Could not read text from the PDF".to_string())
    })
}

/// A DOCX file is a zip container; the document body lives in
/// `word/document.xml`. Text runs are `<w:t>` elements, paragraphs `<w:p>`.
fn extract_docx(data: &[u8]) -> Result<String, AppError> {
    let unreadable = |detail: String| {
        warn!("DOCX extraction failed: {detail}");
        AppError::UnprocessableEntity("Could not read text from the DOCX file".to_string())
    };

    let mut archive =
        zip::ZipArchive::new(Cursor::new(data)).map_err(|e| unreadable(e.to_string()))?;
    let mut entry = archive
        .by_name("word/document.xml")
        .map_err(|e| unreadable(e.to_string()))?;
    let mut xml = String::new();
    entry
        .read_to_string(&mut xml)
        .map_err(|e| unreadable(e.to_string()))?;

    Ok(document_xml_text(&xml))
}

/// Collects the character data of every `<w:t>` run, one line per `<w:p>`
/// paragraph. Deliberately narrow: only text runs are read, so table and
/// style markup (`<w:tbl>`, `<w:tc>`, ...) never leaks into the output.
fn document_xml_text(xml: &str) -> String {
    let mut lines = Vec::new();
    for paragraph in xml.split("</w:p>") {
        let mut line = String::new();
        for chunk in paragraph.split("<w:t").skip(1) {
            // `<w:t` also prefixes `<w:tbl>`/`<w:tc>`/`<w:tr>` — only accept
            // an actual text run: `>`, attributes, or self-closing.
            if !matches!(chunk.chars().next(), Some('>') | Some(' ') | Some('/')) {
                continue;
            }
            let Some(gt) = chunk.find('>') else { continue };
            let (attrs, rest) = chunk.split_at(gt);
            if attrs.ends_with('/') {
                continue; // self-closing, no text
            }
            let body = &rest[1..];
            if let Some(end) = body.find("</w:t>") {
                line.push_str(&decode_entities(&body[..end]));
            }
        }
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    lines.join("\n")
}

fn decode_entities(s: &str) -> String {
    // &amp; last, so already-decoded ampersands are not reprocessed
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::analyze::upload::DocumentKind;

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut writer = zip::ZipWriter::new(Cursor::new(&mut buf));
            let options = zip::write::SimpleFileOptions::default();
            writer.start_file("word/document.xml", options).unwrap();
            writer.write_all(document_xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        buf
    }

    #[test]
    fn text_runs_join_within_a_paragraph() {
        let xml = r#"<w:p><w:r><w:t>Hello </w:t></w:r><w:r><w:t>world</w:t></w:r></w:p>"#;
        assert_eq!(document_xml_text(xml), "Hello world");
    }

    #[test]
    fn paragraphs_become_lines() {
        let xml = "<w:p><w:t>Skills</w:t></w:p><w:p><w:t>React, Redis</w:t></w:p>";
        assert_eq!(document_xml_text(xml), "Skills\nReact, Redis");
    }

    #[test]
    fn table_markup_is_not_mistaken_for_text_runs() {
        let xml = "<w:tbl><w:tr><w:tc><w:p><w:t>cell</w:t></w:p></w:tc></w:tr></w:tbl>";
        assert_eq!(document_xml_text(xml), "cell");
    }

    #[test]
    fn preserved_space_attribute_is_handled() {
        let xml = r#"<w:p><w:t xml:space="preserve">lead </w:t><w:t>tail</w:t></w:p>"#;
        assert_eq!(document_xml_text(xml), "lead tail");
    }

    #[test]
    fn self_closing_runs_contribute_nothing() {
        let xml = "<w:p><w:t/><w:t>only</w:t></w:p>";
        assert_eq!(document_xml_text(xml), "only");
    }

    #[test]
    fn entities_are_decoded() {
        let xml = "<w:p><w:t>C&amp;C, a &lt;b&gt;</w:t></w:p>";
        assert_eq!(document_xml_text(xml), "C&C, a <b>");
    }

    #[test]
    fn docx_round_trip_through_container() {
        let bytes = docx_bytes("<w:p><w:t>Five years of Node.js</w:t></w:p>");
        let text = extract_text(DocumentKind::Docx, &bytes).unwrap();
        assert_eq!(text, "Five years of Node.js");
    }

    #[test]
    fn garbage_container_is_unprocessable() {
        let err = extract_text(DocumentKind::Docx, b"not a zip archive").unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn container_without_document_xml_is_unprocessable() {
        let mut buf = Vec::new();
        {
            let mut writer = zip::ZipWriter::new(Cursor::new(&mut buf));
            let options = zip::write::SimpleFileOptions::default();
            writer.start_file("unrelated.txt", options).unwrap();
            writer.write_all(b"hi").unwrap();
            writer.finish().unwrap();
        }
        let err = extract_text(DocumentKind::Docx, &buf).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn empty_document_is_unprocessable() {
        let bytes = docx_bytes("<w:p><w:t>   </w:t></w:p>");
        let err = extract_text(DocumentKind::Docx, &bytes).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
