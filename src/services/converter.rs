//! Background conversions where only the newest request counts.
//!
//! Every submission takes a ticket from a shared [`RequestSequencer`] and
//! runs on tokio's blocking pool. Submissions are never cancelled; when one
//! finishes after a newer one was submitted, its result (or error) is
//! dropped.

use std::sync::Arc;

use eink_pack::{convert, ConvertParams, DitherError, PackedImage, RequestSequencer, Rgba, Target, Ticket};
use tokio::task::JoinHandle;

use crate::error::{ConvertError, ImageError};
use crate::models::Selection;
use crate::services::image_io::DecodedImage;

/// Everything one conversion needs, owned so it can move to a worker
#[derive(Debug, Clone)]
pub struct ConversionJob {
    pub pixels: Vec<Rgba>,
    pub width: usize,
    pub height: usize,
    pub target: Target,
    pub mode_id: String,
    pub params: ConvertParams,
}

impl ConversionJob {
    /// Job for a decoded frame on a selected board mode.
    ///
    /// The frame must already be the board's display size.
    pub fn new(image: DecodedImage, selection: &Selection<'_>) -> Result<Self, ImageError> {
        image.check_size(selection.board.display_width, selection.board.display_height)?;
        Ok(Self {
            pixels: image.pixels,
            width: image.width as usize,
            height: image.height as usize,
            target: selection.target.clone(),
            mode_id: selection.mode.id.clone(),
            params: selection.params.clone(),
        })
    }

    fn run(&self) -> Result<PackedImage, DitherError> {
        convert(
            &self.pixels,
            self.width,
            self.height,
            &self.target,
            &self.mode_id,
            &self.params,
        )
    }
}

/// A submitted conversion
pub struct PendingConversion {
    ticket: Ticket,
    handle: JoinHandle<Result<PackedImage, DitherError>>,
    sequencer: Arc<RequestSequencer>,
}

impl PendingConversion {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Wait for the worker to finish.
    ///
    /// `Ok(None)` means a newer conversion was submitted in the meantime.
    pub async fn wait(self) -> Result<Option<PackedImage>, ConvertError> {
        let result = self
            .handle
            .await
            .map_err(|e| ConvertError::Task(e.to_string()))?;

        if !self.sequencer.is_current(self.ticket) {
            tracing::debug!(ticket = self.ticket.get(), "Conversion superseded");
            return Ok(None);
        }
        let image = result?;
        Ok(self.sequencer.accept(self.ticket, image))
    }
}

/// Runs conversions off the caller's task
#[derive(Clone, Default)]
pub struct ConversionService {
    sequencer: Arc<RequestSequencer>,
}

impl ConversionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a conversion. Must be called from within a tokio runtime.
    pub fn submit(&self, job: ConversionJob) -> PendingConversion {
        let ticket = self.sequencer.issue();
        tracing::debug!(
            ticket = ticket.get(),
            mode = %job.mode_id,
            width = job.width,
            height = job.height,
            "Submitting conversion"
        );
        let handle = tokio::task::spawn_blocking(move || job.run());
        PendingConversion {
            ticket,
            handle,
            sequencer: Arc::clone(&self.sequencer),
        }
    }

    /// Submit and wait in one step
    pub async fn convert(&self, job: ConversionJob) -> Result<Option<PackedImage>, ConvertError> {
        self.submit(job).wait().await
    }

    pub fn latest(&self) -> Option<Ticket> {
        self.sequencer.latest()
    }

    /// Whether no conversion was submitted after `ticket`
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.sequencer.is_current(ticket)
    }
}
