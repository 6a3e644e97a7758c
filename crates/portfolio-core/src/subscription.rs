//! Scroll listener lifecycle
//!
//! The view attaches one scroll listener when it mounts and must detach it
//! when it unmounts. [`ScrollSubscription`] owns the detach step and runs it
//! on drop, so a listener can't outlive the view that registered it.

use std::fmt;

use crate::navigation::NavMessage;
use crate::prelude::*;

/// Callback invoked once per scroll event
pub type ScrollHandler = Box<dyn Fn()>;

/// Something that emits scroll events (the browser window, or a fake in tests)
pub trait ScrollSource {
    /// Register `handler`; it stays attached until the returned guard is released.
    fn subscribe(&self, handler: ScrollHandler) -> ScrollSubscription;
}

/// Guard for an attached scroll listener.
///
/// Detaches on [`release`](Self::release) or drop, whichever comes first.
#[must_use = "dropping the subscription detaches the listener immediately"]
pub struct ScrollSubscription {
    detach: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl ScrollSubscription {
    pub fn new(detach: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.detach.is_some()
    }

    /// Detach the listener now. Later calls and the eventual drop are no-ops.
    pub fn release(&mut self) {
        if let Some(detach) = self.detach.take() {
            debug!("Detaching scroll listener");
            detach();
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// Attach a listener that feeds [`NavMessage::Scrolled`] into `dispatch` on
/// every scroll event, for as long as the returned guard is held.
pub fn mount<S, F>(source: &S, dispatch: F) -> ScrollSubscription
where
    S: ScrollSource + ?Sized,
    F: Fn(NavMessage) + 'static,
{
    debug!("Attaching scroll listener");
    source.subscribe(Box::new(move || dispatch(NavMessage::Scrolled)))
}
