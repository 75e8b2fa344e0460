//! Where and how a conversion result is written.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use eink_pack::{PackedImage, Ticket};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::ImageError;
use crate::services::carray::{sanitize_c_name, write_c_array};
use crate::services::converter::ConversionService;
use crate::services::image_io::write_preview;

/// File format of the packed buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Raw bytes, exactly the packed buffer
    Bin,
    /// C header with a `PROGMEM` array
    C,
}

impl OutputFormat {
    /// `.h` and `.c` files get a C header, everything else raw bytes
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("h" | "c") => OutputFormat::C,
            _ => OutputFormat::Bin,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Bin => "bin",
            OutputFormat::C => "h",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bin" | "raw" => Ok(OutputFormat::Bin),
            "c" | "h" | "header" => Ok(OutputFormat::C),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Resolved output locations for one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlan {
    pub path: PathBuf,
    pub format: OutputFormat,
    /// C array name (header output only)
    pub name: String,
    pub preview: Option<PathBuf>,
}

impl OutputPlan {
    /// Fill in whatever the caller left out from the input path.
    ///
    /// An explicit format wins over the output extension; without an output
    /// path the input path gets the format's extension.
    pub fn for_input(
        input: &Path,
        output: Option<PathBuf>,
        format: Option<OutputFormat>,
        name: Option<String>,
        preview: Option<PathBuf>,
    ) -> Self {
        let format = format
            .or_else(|| output.as_deref().map(OutputFormat::from_path))
            .unwrap_or(OutputFormat::Bin);
        let path = output.unwrap_or_else(|| input.with_extension(format.extension()));
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = sanitize_c_name(name.as_deref().unwrap_or(&stem));
        Self {
            path,
            format,
            name,
            preview,
        }
    }
}

/// Sizes of what was written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteReport {
    pub output_bytes: usize,
    pub preview_bytes: Option<usize>,
}

/// Write the buffer (and preview, if planned)
pub fn write_outputs(image: &PackedImage, plan: &OutputPlan) -> Result<WriteReport, ImageError> {
    let output_bytes = match plan.format {
        OutputFormat::Bin => {
            fs::write(&plan.path, image.buffer())?;
            image.buffer().len()
        }
        OutputFormat::C => {
            let header = write_c_array(&plan.name, image.buffer(), image.meta());
            fs::write(&plan.path, &header)?;
            header.len()
        }
    };
    tracing::debug!(path = %plan.path.display(), bytes = output_bytes, "Wrote output");

    let preview_bytes = match plan.preview {
        Some(ref path) => Some(write_preview(path, image)?),
        None => None,
    };

    Ok(WriteReport {
        output_bytes,
        preview_bytes,
    })
}

/// Single writer for results that finish concurrently (watch mode).
///
/// Writes run one at a time, and each ticket is checked again right before
/// its write, so a result superseded while queued or while an earlier write
/// was running never reaches the disk.
#[derive(Clone)]
pub struct OutputWriter {
    sender: mpsc::Sender<(Ticket, PackedImage)>,
}

impl OutputWriter {
    /// Start the writer task. Its handle yields the number of results
    /// written once every `OutputWriter` clone is dropped.
    pub fn spawn(service: ConversionService, plan: OutputPlan) -> (Self, JoinHandle<usize>) {
        let (sender, mut receiver) = mpsc::channel::<(Ticket, PackedImage)>(16);
        let plan = Arc::new(plan);

        let handle = tokio::spawn(async move {
            let mut written = 0;
            while let Some((ticket, image)) = receiver.recv().await {
                if !service.is_current(ticket) {
                    tracing::debug!(ticket = ticket.get(), "Skipping superseded output");
                    continue;
                }
                let job_plan = Arc::clone(&plan);
                match tokio::task::spawn_blocking(move || write_outputs(&image, &job_plan)).await {
                    Ok(Ok(report)) => {
                        written += 1;
                        tracing::info!(
                            ticket = ticket.get(),
                            path = %plan.path.display(),
                            bytes = report.output_bytes,
                            "Wrote output"
                        );
                    }
                    Ok(Err(e)) => tracing::error!(error = %e, "Failed to write output"),
                    Err(e) => tracing::error!(error = %e, "Output task failed"),
                }
            }
            written
        });

        (Self { sender }, handle)
    }

    /// Queue a finished conversion. `false` once the writer has stopped.
    pub async fn send(&self, ticket: Ticket, image: PackedImage) -> bool {
        self.sender.send((ticket, image)).await.is_ok()
    }
}
