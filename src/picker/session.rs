//! One picker session: a worker thread and a one-shot channel back.

use super::{PhotoPicker, PickOutcome, PickRequest, PickedImage, PickerError};
use crate::imaging::{decode, pad};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};

/// A running pick. Yields exactly one [`PickOutcome`].
///
/// The picker, decode and pad all run on a worker thread; the outcome is
/// handed back over a channel to whichever thread owns the selection state.
pub struct PickerSession {
    receiver: Receiver<PickOutcome>,
    delivered: bool,
}

impl PickerSession {
    /// Start a session on a new worker thread.
    ///
    /// `max_pixels` bounds the padded canvas of the pick (0 = unlimited).
    pub fn begin<P: PhotoPicker>(picker: Arc<P>, max_pixels: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let worker_tx = tx.clone();
        let spawned = std::thread::Builder::new()
            .name("photo-picker".into())
            .spawn(move || {
                let outcome = run_pick(picker.as_ref(), max_pixels);
                // Receiver gone means the session was dropped; nobody to tell
                let _ = worker_tx.send(outcome);
            });

        if let Err(e) = spawned {
            log::warn!("could not start picker thread: {e}");
            let _ = tx.send(PickOutcome::Failed(PickerError::Unavailable(e.to_string())));
        }

        Self {
            receiver: rx,
            delivered: false,
        }
    }

    /// Block until the session ends.
    ///
    /// A session already drained by [`try_outcome`](Self::try_outcome) has
    /// nothing left to deliver and reports [`PickerError::Disconnected`].
    pub fn wait(self) -> PickOutcome {
        if self.delivered {
            return PickOutcome::Failed(PickerError::Disconnected);
        }
        self.receiver.recv().unwrap_or_else(|_| disconnected())
    }

    /// Poll without blocking, for hosts that drive their own event loop.
    ///
    /// Returns `Some` exactly once; every later call returns `None`.
    pub fn try_outcome(&mut self) -> Option<PickOutcome> {
        if self.delivered {
            return None;
        }
        let outcome = match self.receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => disconnected(),
        };
        self.delivered = true;
        Some(outcome)
    }
}

fn disconnected() -> PickOutcome {
    log::warn!("picker ended without delivering a result");
    PickOutcome::Failed(PickerError::Disconnected)
}

/// Run one pick synchronously: ask the host, keep the first asset, pad it.
///
/// Never panics on bad input; every failure becomes [`PickOutcome::Failed`].
pub(crate) fn run_pick<P: PhotoPicker + ?Sized>(picker: &P, max_pixels: u64) -> PickOutcome {
    let assets = match picker.pick(&PickRequest::single_image()) {
        Ok(assets) => assets,
        Err(e) => {
            log::warn!("picker failed: {e}");
            return PickOutcome::Failed(e);
        }
    };

    let extra = assets.len().saturating_sub(1);
    let Some(asset) = assets.into_iter().next() else {
        log::info!("picker cancelled");
        return PickOutcome::Cancelled;
    };
    if extra > 0 {
        log::warn!("picker returned {extra} extra asset(s); using only the first");
    }

    let padded = decode(&asset.bytes, max_pixels).and_then(|original| {
        let dims = original.dimensions();
        pad(&original).map(|image| (dims, image))
    });

    match padded {
        Ok((original, image)) => {
            log::info!(
                "picked {} ({original}) → {}x{}",
                asset.source_hint,
                image.width(),
                image.height()
            );
            PickOutcome::Selected(PickedImage {
                source_hint: asset.source_hint,
                original,
                image,
            })
        }
        Err(e) => {
            log::warn!("could not use {}: {e}", asset.source_hint);
            PickOutcome::Failed(PickerError::Imaging(e))
        }
    }
}
