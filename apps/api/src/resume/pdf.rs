//! PDF text extraction. Never fails: any error (or panic inside the extractor)
//! yields an empty string.

use std::path::PathBuf;

use bytes::Bytes;
use tracing::warn;

/// Extracts the text of every page of the PDF at `path`.
pub async fn extract_text_from_path(path: impl Into<PathBuf>) -> String {
    let path = path.into();
    let display = path.display().to_string();
    run_extractor(&display, move || {
        pdf_extract::extract_text(&path).map_err(|e| e.to_string())
    })
    .await
}

/// Extracts the text of every page of an in-memory PDF.
pub async fn extract_text_from_bytes(bytes: Bytes) -> String {
    run_extractor("<upload>", move || {
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| e.to_string())
    })
    .await
}

async fn run_extractor<F>(source: &str, extract: F) -> String
where
    F: FnOnce() -> Result<String, String> + Send + 'static,
{
    match tokio::task::spawn_blocking(extract).await {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!("Error extracting text from PDF {source}: {e}");
            String::new()
        }
        Err(e) => {
            warn!("PDF extractor aborted on {source}: {e}");
            String::new()
        }
    }
}
