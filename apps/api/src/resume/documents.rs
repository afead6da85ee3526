//! Document text extraction for uploaded resumes (PDF and DOCX).

use std::borrow::Cow;
use std::io::{Cursor, Read};
use std::sync::LazyLock;

use regex::{Captures, Regex};
use thiserror::Error;

/// Upload ceiling enforced before any decoding happens.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const DOCX_BODY_PART: &str = "word/document.xml";

/// Paragraph ends and text runs inside `word/document.xml`.
static DOCX_TOKEN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"(?s)<w:t(?:\s[^>]*)?>(.*?)</w:t>|</w:p>|<w:br\s*/>|<w:tab\s*/>"));

/// Decimal and hex character references plus the five predefined entities.
static XML_ENTITY: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(r"&(?:#([0-9]{1,7})|#[xX]([0-9A-Fa-f]{1,6})|(lt|gt|quot|apos|amp));")
});

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("PDF extraction error: {0}")]
    Pdf(String),

    #[error("DOCX extraction error: {0}")]
    Docx(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Resolves the kind from a file name's extension, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }
}

/// Decodes a document into plain text. CPU-bound; callers on the async runtime
/// should go through [`extract_text_blocking`].
pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> Result<String, DocumentError> {
    match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| DocumentError::Pdf(e.to_string())),
        DocumentKind::Docx => extract_docx_text(bytes),
    }
}

/// Runs [`extract_text`] on the blocking pool. A panic inside the PDF decoder is
/// reported as an extraction error rather than taking the request down.
pub async fn extract_text_blocking(
    kind: DocumentKind,
    bytes: Vec<u8>,
) -> Result<String, DocumentError> {
    tokio::task::spawn_blocking(move || extract_text(kind, &bytes))
        .await
        .map_err(|e| match kind {
            DocumentKind::Pdf => DocumentError::Pdf(format!("decoder aborted: {e}")),
            DocumentKind::Docx => DocumentError::Docx(format!("decoder aborted: {e}")),
        })?
}

fn extract_docx_text(bytes: &[u8]) -> Result<String, DocumentError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| DocumentError::Docx(format!("not a zip container: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY_PART)
        .map_err(|e| DocumentError::Docx(format!("missing {DOCX_BODY_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| DocumentError::Docx(format!("unreadable {DOCX_BODY_PART}: {e}")))?;

    docx_xml_to_text(&xml)
}

/// One output line per `<w:p>` paragraph, matching how word processors lay text out.
fn docx_xml_to_text(xml: &str) -> Result<String, DocumentError> {
    let token = DOCX_TOKEN
        .as_ref()
        .map_err(|e| DocumentError::Docx(e.to_string()))?;
    let entity = XML_ENTITY
        .as_ref()
        .map_err(|e| DocumentError::Docx(e.to_string()))?;

    let mut text = String::with_capacity(xml.len() / 4);
    for caps in token.captures_iter(xml) {
        match caps.get(1) {
            Some(run) => text.push_str(&unescape_xml(entity, run.as_str())),
            None => match caps.get(0).map(|m| m.as_str()) {
                Some("</w:p>") => text.push('\n'),
                Some(tag) if tag.starts_with("<w:tab") => text.push('\t'),
                _ => text.push('\n'),
            },
        }
    }
    Ok(text)
}

/// Single pass, so `&amp;lt;` decodes to `&lt;` and not `<`. References that name
/// no valid character are left as written.
fn unescape_xml<'a>(entity: &Regex, s: &'a str) -> Cow<'a, str> {
    entity.replace_all(s, |caps: &Captures| {
        let decoded = if let Some(dec) = caps.get(1) {
            dec.as_str().parse::<u32>().ok().and_then(char::from_u32)
        } else if let Some(hex) = caps.get(2) {
            u32::from_str_radix(hex.as_str(), 16)
                .ok()
                .and_then(char::from_u32)
        } else {
            match caps.get(3).map(|m| m.as_str()) {
                Some("lt") => Some('<'),
                Some("gt") => Some('>'),
                Some("quot") => Some('"'),
                Some("apos") => Some('\''),
                Some("amp") => Some('&'),
                _ => None,
            }
        };
        match decoded {
            Some(c) => c.to_string(),
            None => caps[0].to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn build_docx(document_xml: &str) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            let options = zip::write::FileOptions::default();
            writer.start_file(DOCX_BODY_PART, options).unwrap();
            writer.write_all(document_xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        buf.into_inner()
    }

    #[test]
    fn test_kind_from_file_name() {
        assert_eq!(DocumentKind::from_file_name("cv.pdf"), Some(DocumentKind::Pdf));
        assert_eq!(
            DocumentKind::from_file_name("My.Resume.DOCX"),
            Some(DocumentKind::Docx)
        );
        assert_eq!(DocumentKind::from_file_name("notes.txt"), None);
        assert_eq!(DocumentKind::from_file_name("pdf"), None);
    }

    #[test]
    fn test_docx_paragraphs_become_lines() {
        let xml = r#"<w:document><w:body>
            <w:p><w:r><w:t>Jane</w:t></w:r><w:r><w:t xml:space="preserve"> Doe</w:t></w:r></w:p>
            <w:p><w:r><w:t>jane@example.com</w:t></w:r></w:p>
        </w:body></w:document>"#;
        let text = extract_text(DocumentKind::Docx, &build_docx(xml)).unwrap();
        assert_eq!(text, "Jane Doe\njane@example.com\n");
    }

    #[test]
    fn test_docx_entities_are_unescaped() {
        let xml = "<w:p><w:r><w:t>R&amp;D &lt;Lead&gt;</w:t></w:r></w:p>";
        assert_eq!(docx_xml_to_text(xml).unwrap(), "R&D <Lead>\n");
    }

    #[test]
    fn test_docx_character_references_are_decoded() {
        let xml = "<w:p><w:r><w:t>O&#8217;Brien &#x2019;24 &#X41;</w:t></w:r></w:p>";
        assert_eq!(docx_xml_to_text(xml).unwrap(), "O\u{2019}Brien \u{2019}24 A\n");
    }

    #[test]
    fn test_docx_entities_decode_in_one_pass() {
        let xml = "<w:p><w:r><w:t>&amp;lt; &#xD800; &bogus;</w:t></w:r></w:p>";
        assert_eq!(docx_xml_to_text(xml).unwrap(), "&lt; &#xD800; &bogus;\n");
    }

    #[test]
    fn test_docx_without_body_part_is_rejected() {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            writer
                .start_file("other.xml", zip::write::FileOptions::default())
                .unwrap();
            writer.finish().unwrap();
        }
        let err = extract_text(DocumentKind::Docx, &buf.into_inner()).unwrap_err();
        assert!(matches!(err, DocumentError::Docx(_)));
    }

    #[tokio::test]
    async fn test_garbage_bytes_are_not_a_pdf() {
        let err = extract_text_blocking(DocumentKind::Pdf, b"definitely not a pdf".to_vec())
            .await
            .unwrap_err();
        assert!(matches!(err, DocumentError::Pdf(_)));
    }

    #[test]
    fn test_garbage_bytes_are_not_a_docx() {
        let err = extract_text(DocumentKind::Docx, b"definitely not a zip").unwrap_err();
        assert!(matches!(err, DocumentError::Docx(_)));
    }
}
