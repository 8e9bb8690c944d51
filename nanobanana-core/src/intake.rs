//! File intake and preview controller
//!
//! [`IntakeState`] is the plain state machine: events mutate it and the view
//! reads it. [`IntakeController`] wraps it for async use, dispatching decodes
//! to a blocking worker and publishing every change to subscribers.
//!
//! Selections are numbered. Only the result of the newest pending request is
//! applied; anything else that completes is dropped as stale.

use crate::{
    config::IntakeConfig,
    error::{IntakeError, Result},
    media::{format_file_size, SelectedFile},
    preview::{decode_off_thread, DataUriDecoder, Preview, PreviewDecoder},
};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Identifier handed out for each accepted selection
pub type RequestId = u64;

/// Main state of the controller. The drag-hover flag is tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Empty,
    Decoding,
    HasPreview,
}

/// How a finished decode was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The preview is now the one on display
    Applied,
    /// A newer selection or a clear arrived first; the result was dropped
    Superseded,
}

/// Ephemeral UI state of the upload widget
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntakeState {
    dragging: bool,
    preview: Option<Preview>,
    pending: Option<RequestId>,
    last_request: RequestId,
    error: Option<String>,
}

impl IntakeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match (self.pending, &self.preview) {
            (Some(_), _) => Phase::Decoding,
            (None, Some(_)) => Phase::HasPreview,
            (None, None) => Phase::Empty,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The preview on display, kept while a replacement is decoding
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn pending(&self) -> Option<RequestId> {
        self.pending
    }

    /// Inline message for the last rejected selection
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Validate a selection and register it as the pending request.
    ///
    /// A rejected selection still counts as the newest request: a decode
    /// already in flight is superseded and the inline error stays visible.
    pub fn begin_select(&mut self, file: &SelectedFile, config: &IntakeConfig) -> Result<RequestId> {
        if let Err(e) = validate(file, config) {
            self.reject(&e);
            return Err(e);
        }

        self.last_request += 1;
        self.pending = Some(self.last_request);
        self.error = None;
        debug!("Request {} pending for {}", self.last_request, file.name());
        Ok(self.last_request)
    }

    /// Apply the outcome of a decode started by [`IntakeState::begin_select`]
    pub fn finish(&mut self, request: RequestId, result: Result<Preview>) -> Result<Completion> {
        if self.pending != Some(request) {
            debug!(
                "Dropping stale result of request {} (pending: {:?})",
                request, self.pending
            );
            return Ok(Completion::Superseded);
        }

        self.pending = None;
        match result {
            Ok(preview) => {
                self.preview = Some(preview);
                self.error = None;
                Ok(Completion::Applied)
            }
            Err(e) => {
                self.record(&e);
                Err(e)
            }
        }
    }

    /// Forget the file, its preview and any decode still in flight
    pub fn clear(&mut self) {
        self.preview = None;
        self.pending = None;
        self.error = None;
    }

    /// Turn away a selection that never reached the decoder, such as one that
    /// failed validation or could not be read. Silent errors change nothing.
    pub fn reject(&mut self, err: &IntakeError) {
        if !err.is_user_visible() {
            return;
        }
        self.last_request += 1;
        self.pending = None;
        self.record(err);
    }

    fn record(&mut self, err: &IntakeError) {
        if err.is_user_visible() {
            self.error = Some(err.to_string());
        }
    }
}

/// Check a file against the configured allow-list and ceiling
pub fn validate(file: &SelectedFile, config: &IntakeConfig) -> Result<()> {
    if !config.validate {
        return Ok(());
    }

    match file.kind() {
        Some(kind) if config.accepts(kind) => {}
        _ => {
            return Err(IntakeError::UnsupportedType {
                media_type: file.media_type().to_string(),
                accepted: config.accepted_mime_types(),
            })
        }
    }

    validate_size(file.len(), config)
}

/// Check a byte length against the ceiling, before the bytes are even loaded
pub fn validate_size(len: u64, config: &IntakeConfig) -> Result<()> {
    if config.validate && len > config.max_bytes {
        return Err(IntakeError::Oversize {
            size: format_file_size(len),
            max: format_file_size(config.max_bytes),
        });
    }

    Ok(())
}

struct Shared {
    state: Mutex<IntakeState>,
    updates: watch::Sender<IntakeState>,
    config: IntakeConfig,
    decoder: Arc<dyn PreviewDecoder>,
}

/// Async front of the intake state machine. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct IntakeController {
    shared: Arc<Shared>,
}

impl IntakeController {
    /// Create a controller decoding into data URIs
    pub fn new(config: IntakeConfig) -> Self {
        Self::with_decoder(config, DataUriDecoder)
    }

    pub fn with_decoder<D: PreviewDecoder>(config: IntakeConfig, decoder: D) -> Self {
        let (updates, _) = watch::channel(IntakeState::new());
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(IntakeState::new()),
                updates,
                config,
                decoder: Arc::new(decoder),
            }),
        }
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.shared.config
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> IntakeState {
        self.shared.state.lock().clone()
    }

    /// Receiver notified after every state change
    pub fn subscribe(&self) -> watch::Receiver<IntakeState> {
        self.shared.updates.subscribe()
    }

    pub fn begin_drag(&self) {
        self.update(IntakeState::begin_drag);
    }

    pub fn end_drag(&self) {
        self.update(IntakeState::end_drag);
    }

    /// Handle a drop: only the first file is taken, an empty drop is ignored
    pub async fn accept_drop<I>(&self, files: I) -> Result<Completion>
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        self.end_drag();

        let mut files = files.into_iter();
        let Some(file) = files.next() else {
            debug!("Ignoring drop without files");
            return Err(IntakeError::EmptyDrop);
        };

        let ignored = files.count();
        if ignored > 0 {
            debug!("Ignoring {} extra dropped file(s)", ignored);
        }

        self.select_file(file).await
    }

    /// Validate and decode a file, replacing the current preview on success
    pub async fn select_file(&self, file: SelectedFile) -> Result<Completion> {
        let request = match self.update(|state| state.begin_select(&file, &self.shared.config)) {
            Ok(request) => request,
            Err(e) => {
                warn!("Rejected {}: {}", file.name(), e);
                return Err(e);
            }
        };

        let name = file.name().to_string();
        let result = decode_off_thread(self.shared.decoder.clone(), file).await;

        let completion = self.update(|state| state.finish(request, result));
        match &completion {
            Ok(Completion::Applied) => info!("Showing preview of {}", name),
            Ok(Completion::Superseded) => debug!("Preview of {} superseded", name),
            Err(e) => warn!("Could not preview {}: {}", name, e),
        }
        completion
    }

    pub fn clear(&self) {
        self.update(IntakeState::clear);
    }

    /// Record a failure that happened before a file could be selected, e.g.
    /// a read error in the picker
    pub fn report(&self, err: &IntakeError) {
        warn!("Could not take file: {}", err);
        self.update(|state| state.reject(err));
    }

    fn update<R>(&self, f: impl FnOnce(&mut IntakeState) -> R) -> R {
        let mut state = self.shared.state.lock();
        let out = f(&mut state);
        self.shared.updates.send_replace(state.clone());
        out
    }
}
