//! Profile document extraction — turns an uploaded résumé into plain text
//! before it reaches the matcher.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Content type wins; the file extension is the fallback for generic
    /// types such as `application/octet-stream`.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        let mime = content_type
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().to_ascii_lowercase());
        match mime.as_deref() {
            Some("application/pdf") => return Some(DocumentKind::Pdf),
            Some("text/plain") => return Some(DocumentKind::PlainText),
            _ => {}
        }

        let extension = file_name
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("pdf") => Some(DocumentKind::Pdf),
            Some("txt") => Some(DocumentKind::PlainText),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported document type: {0}")]
    Unsupported(String),

    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Document is not valid UTF-8 text")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Extraction task failed: {0}")]
    Task(tokio::task::JoinError),
}

/// Extracts text and collapses all whitespace runs to single spaces.
///
/// PDF parsing is CPU-bound and runs on the blocking pool.
pub async fn extract_profile_text(bytes: Bytes, kind: DocumentKind) -> Result<String, ExtractError> {
    let raw = match kind {
        DocumentKind::PlainText => String::from_utf8(bytes.to_vec())?,
        DocumentKind::Pdf => tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
        })
        .await
        .map_err(|e| {
            if e.is_panic() {
                ExtractError::Pdf("malformed document".to_string())
            } else {
                ExtractError::Task(e)
            }
        })??,
    };

    let text = collapse_whitespace(&raw);
    debug!(kind = ?kind, chars = text.chars().count(), "Extracted profile text");
    Ok(text)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_content_type() {
        assert_eq!(
            DocumentKind::detect(Some("application/pdf"), None),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::detect(Some("text/plain; charset=utf-8"), Some("cv.pdf")),
            Some(DocumentKind::PlainText)
        );
    }

    #[test]
    fn test_detect_falls_back_to_extension() {
        assert_eq!(
            DocumentKind::detect(Some("application/octet-stream"), Some("Resume.PDF")),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(DocumentKind::detect(None, Some("notes.txt")), Some(DocumentKind::PlainText));
    }

    #[test]
    fn test_detect_rejects_unknown() {
        assert_eq!(DocumentKind::detect(Some("image/png"), Some("photo.png")), None);
        assert_eq!(DocumentKind::detect(None, None), None);
    }

    #[tokio::test]
    async fn test_plain_text_whitespace_collapsed() {
        let text = extract_profile_text(
            Bytes::from_static(b"Rust engineer\n\n  tokio\taxum  "),
            DocumentKind::PlainText,
        )
        .await
        .unwrap();
        assert_eq!(text, "Rust engineer tokio axum");
    }

    #[tokio::test]
    async fn test_invalid_utf8_rejected() {
        let result =
            extract_profile_text(Bytes::from_static(&[0xff, 0xfe, 0x00]), DocumentKind::PlainText).await;
        assert!(matches!(result, Err(ExtractError::Encoding(_))));
    }

    #[tokio::test]
    async fn test_garbage_pdf_is_an_error() {
        let result = extract_profile_text(Bytes::from_static(b"not a pdf"), DocumentKind::Pdf).await;
        assert!(matches!(result, Err(ExtractError::Pdf(_))));
    }
}
