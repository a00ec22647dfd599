//! Async export of the paginated projection to a downloadable file.
//!
//! Rendering goes through the HTML backend and, when a converter is on PATH,
//! an external `wkhtmltopdf` process. At most one export runs at a time; a
//! second request while one is in flight is refused rather than queued, and
//! an in-flight export cannot be cancelled.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use tokio::process::Command;
use tracing::{error, info, warn};

use sadna_core::{AppConfig, QuoteSnapshot};

use crate::backends::html::HtmlSurface;
use crate::layout::render_quote_page;
use crate::surface::PageSize;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("an export is already in progress")]
    Busy,
    #[error("conversion error: {0}")]
    Conversion(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Fixed operator-facing notice; the underlying cause stays in the logs.
    /// The export is retryable once the busy flag clears.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Busy => "ייצוא קודם עדיין בתהליך, נסה שוב בעוד רגע.",
            Self::Conversion(_) | Self::Io(_) => "יצירת הקובץ נכשלה. נסה שוב.",
        }
    }
}

/// The produced document: a real PDF when a converter is available,
/// otherwise the print-ready HTML itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportArtifact {
    Pdf { filename: String, bytes: Vec<u8> },
    Html { filename: String, bytes: Vec<u8> },
}

impl ExportArtifact {
    pub fn filename(&self) -> &str {
        match self {
            Self::Pdf { filename, .. } | Self::Html { filename, .. } => filename,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            Self::Pdf { bytes, .. } | Self::Html { bytes, .. } => bytes,
        }
    }

    /// Write the artifact under `dir` and return the full path.
    pub async fn save_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let path = dir.join(self.filename());
        tokio::fs::write(&path, self.bytes()).await?;
        Ok(path)
    }
}

/// Build a download filename from the client name and issue date; anything
/// that could break a path (spaces included) becomes an underscore.
pub fn derive_filename(business_name: &str, date: NaiveDate, extension: &str) -> String {
    let safe: String = business_name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    format!("Quote-{safe}-{}.{extension}", date.format("%Y-%m-%d"))
}

pub struct QuoteExporter {
    wkhtmltopdf_path: Option<PathBuf>,
    in_flight: AtomicBool,
}

impl QuoteExporter {
    pub fn new() -> Self {
        let wkhtmltopdf_path = which::which("wkhtmltopdf").ok();
        match &wkhtmltopdf_path {
            Some(path) => info!(path = %path.display(), "wkhtmltopdf found"),
            None => warn!("wkhtmltopdf not found in PATH - exports fall back to HTML"),
        }
        Self { wkhtmltopdf_path, in_flight: AtomicBool::new(false) }
    }

    /// Whether an export is currently in flight; the triggering control
    /// should present a busy state while this holds.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Render and convert the paginated projection.
    pub async fn export(
        &self,
        snapshot: &QuoteSnapshot,
        config: &AppConfig,
    ) -> Result<ExportArtifact, ExportError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(ExportError::Busy);
        }
        let result = self.export_inner(snapshot, config).await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn export_inner(
        &self,
        snapshot: &QuoteSnapshot,
        config: &AppConfig,
    ) -> Result<ExportArtifact, ExportError> {
        let issued = snapshot.prepared_at.date_naive();
        let quote_number =
            format!("{}-{}", issued.year(), rand::thread_rng().gen_range(0..1000));

        let mut surface = HtmlSurface::new(PageSize::A4);
        render_quote_page(snapshot, config, &quote_number, &mut surface);
        let html = surface.finish();

        if let Some(converter) = &self.wkhtmltopdf_path {
            match convert_html_to_pdf(&html, converter).await {
                Ok(bytes) => {
                    return Ok(ExportArtifact::Pdf {
                        filename: derive_filename(&snapshot.client.business_name, issued, "pdf"),
                        bytes,
                    });
                }
                Err(e) => {
                    warn!(error = %e, "PDF conversion failed, falling back to HTML");
                }
            }
        }

        Ok(ExportArtifact::Html {
            filename: derive_filename(&snapshot.client.business_name, issued, "html"),
            bytes: html.into_bytes(),
        })
    }
}

impl Default for QuoteExporter {
    fn default() -> Self {
        Self::new()
    }
}

async fn convert_html_to_pdf(html: &str, converter: &Path) -> Result<Vec<u8>, ExportError> {
    let temp_dir = std::env::temp_dir();
    let stamp: u64 = rand::thread_rng().gen();
    let html_path = temp_dir.join(format!("quote_{stamp:016x}.html"));
    let pdf_path = temp_dir.join(format!("quote_{stamp:016x}.pdf"));

    tokio::fs::write(&html_path, html).await?;

    let output = Command::new(converter)
        .arg("--page-size")
        .arg("A4")
        .arg("--margin-top")
        .arg("0mm")
        .arg("--margin-bottom")
        .arg("0mm")
        .arg("--margin-left")
        .arg("0mm")
        .arg("--margin-right")
        .arg("0mm")
        .arg("--encoding")
        .arg("utf-8")
        .arg(&html_path)
        .arg(&pdf_path)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        error!(stderr = %stderr, "wkhtmltopdf failed");
        let _ = tokio::fs::remove_file(&html_path).await;
        return Err(ExportError::Conversion(stderr.into_owned()));
    }

    let pdf_bytes = tokio::fs::read(&pdf_path).await?;

    let _ = tokio::fs::remove_file(&html_path).await;
    let _ = tokio::fs::remove_file(&pdf_path).await;

    info!(size = pdf_bytes.len(), "PDF generated");
    Ok(pdf_bytes)
}
