//! Text extraction from the directory PDF using pdftotext.
//!
//! The published document is protected with a fixed user password;
//! poppler's tools decrypt it on the fly when the password is passed
//! with `-upw`, so no separate decryption step is needed. Pages are
//! extracted one at a time and joined with a newline, preserving the
//! page order of the document.

use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// External tools required for extraction.
pub fn required_tools() -> &'static [&'static str] {
    &["pdftotext", "pdfinfo"]
}

/// Handle command output, extracting stdout on success or returning an
/// appropriate error.
fn handle_cmd_output(
    result: std::io::Result<std::process::Output>,
    tool_name: &str,
    error_prefix: &str,
) -> Result<String, ExtractionError> {
    match result {
        Ok(output) => {
            if output.status.success() {
                Ok(String::from_utf8_lossy(&output.stdout).to_string())
            } else {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(ExtractionError::ExtractionFailed(format!(
                    "{}: {}",
                    error_prefix, stderr
                )))
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ExtractionError::ToolNotFound(tool_name.to_string()))
        }
        Err(e) => Err(ExtractionError::Io(e)),
    }
}

/// Errors that can occur during text extraction.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("External tool not found: {0}")]
    ToolNotFound(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Text extractor that uses the poppler command line tools.
#[derive(Debug, Default)]
pub struct PdfTextExtractor {
    /// User password for protected documents.
    password: Option<String>,
}

impl PdfTextExtractor {
    /// Create a new text extractor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user password passed to the poppler tools.
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = Some(password.to_string());
        self
    }

    /// Extract the text of every page, joined with a newline.
    pub fn extract_text(&self, file_path: &Path) -> Result<String, ExtractionError> {
        let Some(page_count) = self.page_count(file_path) else {
            // Page count unavailable, extract the whole document at once.
            tracing::debug!("pdfinfo gave no page count, extracting in one pass");
            return self.run_pdftotext(file_path, None);
        };

        let mut pages: Vec<String> = Vec::with_capacity(page_count as usize);
        for page in 1..=page_count {
            pages.push(self.run_pdftotext(file_path, Some(page))?);
        }
        Ok(pages.join("\n"))
    }

    /// Run pdftotext, optionally restricted to a single page.
    fn run_pdftotext(&self, file_path: &Path, page: Option<u32>) -> Result<String, ExtractionError> {
        let mut cmd = Command::new("pdftotext");
        cmd.args(["-layout", "-enc", "UTF-8"]);
        if let Some(page) = page {
            let page_str = page.to_string();
            cmd.args(["-f", &page_str, "-l", &page_str]);
        }
        if let Some(password) = &self.password {
            cmd.args(["-upw", password]);
        }
        let output = cmd
            .arg(file_path)
            .arg("-") // Output to stdout
            .output();

        let error_prefix = match page {
            Some(page) => format!("pdftotext failed on page {}", page),
            None => "pdftotext failed".to_string(),
        };
        handle_cmd_output(output, "pdftotext (install poppler-utils)", &error_prefix)
    }

    /// Get the page count of the document.
    fn page_count(&self, file_path: &Path) -> Option<u32> {
        let mut cmd = Command::new("pdfinfo");
        if let Some(password) = &self.password {
            cmd.args(["-upw", password]);
        }
        let output = cmd.arg(file_path).output().ok()?;

        if !output.status.success() {
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        for line in stdout.lines() {
            if line.starts_with("Pages:") {
                return line.split_whitespace().nth(1).and_then(|s| s.parse().ok());
            }
        }
        None
    }
}
