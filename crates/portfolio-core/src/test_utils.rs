//! Synthetic viewport and scroll source for unit tests

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::section::SectionId;
use crate::subscription::{ScrollHandler, ScrollSource, ScrollSubscription};
use crate::viewport::{SectionBounds, ViewportGeometry};

/// Fixed document layout with a settable scroll offset.
///
/// Records every smooth-scroll request instead of moving.
#[derive(Debug, Default)]
pub struct StaticLayout {
    sections: HashMap<SectionId, SectionBounds>,
    scroll_y: Cell<f64>,
    scroll_requests: RefCell<Vec<f64>>,
}

impl StaticLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, section: SectionId, top: f64, height: f64) -> Self {
        self.sections
            .insert(section, SectionBounds::new(top, height));
        self
    }

    /// Five stacked 600-unit sections in declared order
    pub fn full_page() -> Self {
        SectionId::ALL
            .into_iter()
            .enumerate()
            .fold(Self::new(), |layout, (i, section)| {
                layout.with_section(section, i as f64 * 600.0, 600.0)
            })
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub fn scroll_requests(&self) -> Vec<f64> {
        self.scroll_requests.borrow().clone()
    }
}

impl ViewportGeometry for StaticLayout {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn section_bounds(&self, section: SectionId) -> Option<SectionBounds> {
        self.sections.get(&section).copied()
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.scroll_requests.borrow_mut().push(top);
    }
}

/// In-memory scroll event source.
///
/// `emit()` calls every handler still attached, like the browser dispatching
/// a `scroll` event to its listeners.
#[derive(Clone, Default)]
pub struct FakeScrollSource {
    listeners: Rc<RefCell<Vec<(Arc<AtomicBool>, ScrollHandler)>>>,
}

impl FakeScrollSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self) {
        for (attached, handler) in self.listeners.borrow().iter() {
            if attached.load(Ordering::SeqCst) {
                handler();
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|(attached, _)| attached.load(Ordering::SeqCst))
            .count()
    }
}

impl ScrollSource for FakeScrollSource {
    fn subscribe(&self, handler: ScrollHandler) -> ScrollSubscription {
        let attached = Arc::new(AtomicBool::new(true));
        self.listeners
            .borrow_mut()
            .push((Arc::clone(&attached), handler));
        ScrollSubscription::new(move || attached.store(false, Ordering::SeqCst))
    }
}
