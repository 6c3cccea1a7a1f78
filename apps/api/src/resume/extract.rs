//! Document text extraction. Uploads are staged to a temporary file that is
//! removed when the request completes; nothing uploaded is persisted.

use std::io::Write;

use axum::extract::Multipart;
use bytes::Bytes;

use crate::errors::AppError;

/// Reads the `file` field from a multipart upload.
pub async fn read_upload(multipart: &mut Multipart) -> Result<Bytes, AppError> {
    let mut file_bytes: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
            file_bytes = Some(bytes);
        }
    }

    file_bytes.ok_or_else(|| AppError::Validation("missing multipart field 'file'".to_string()))
}

/// Extracts text from an uploaded PDF. The temp file is dropped (and deleted)
/// on return. An empty extraction result is the caller's problem to treat as
/// fatal; this only fails when the document itself cannot be read.
pub async fn extract_document_text(bytes: Bytes) -> Result<String, AppError> {
    // CPU-bound extraction — spawn_blocking to avoid blocking the async executor.
    tokio::task::spawn_blocking(move || {
        let mut tmp = tempfile::NamedTempFile::new()
            .map_err(|e| AppError::Internal(anyhow::Error::new(e).context("creating temp file")))?;
        tmp.write_all(&bytes)
            .and_then(|_| tmp.flush())
            .map_err(|e| AppError::Internal(anyhow::Error::new(e).context("staging upload")))?;

        pdf_extract::extract_text(tmp.path())
            .map_err(|e| AppError::Extraction(format!("PDF extraction error: {e}")))
    })
    .await
    .map_err(|e| {
        AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}"))
    })?
}

/// First `max` characters with an ellipsis when truncated, used for the
/// response preview.
pub fn preview(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_garbage_bytes_fail_with_extraction_error() {
        let bytes = Bytes::from_static(b"definitely not a pdf");
        let err = extract_document_text(bytes).await.unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
        assert!(err.to_string().contains("extraction"));
    }

    #[test]
    fn test_preview_truncates_long_text_with_ellipsis() {
        let text = "x".repeat(600);
        let p = preview(&text, 500);
        assert_eq!(p.chars().count(), 503);
        assert!(p.ends_with("..."));
    }

    #[test]
    fn test_preview_keeps_short_text_verbatim() {
        assert_eq!(preview("short resume", 500), "short resume");
    }
}
