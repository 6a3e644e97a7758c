//! Navigation state for the fixed header (Model + update in TEA pattern)
//!
//! Two pieces of view-local state live here: the section currently in view
//! and whether the mobile menu is open. They change only through the
//! operations below, each driven by a discrete browser event.

use crate::prelude::*;
use crate::section::SectionId;
use crate::viewport::{active_section_at, ViewportGeometry};

/// Nav bar state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    /// Section highlighted in the nav bar
    pub active_section: SectionId,

    /// Mobile menu visibility (no visible effect on wide layouts)
    pub menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, section: SectionId) -> bool {
        self.active_section == section
    }

    /// Recompute the active section from the current scroll offset.
    ///
    /// Leaves the state untouched when no section contains the lookahead
    /// position. Returns `true` if the active section changed.
    pub fn handle_scroll<V>(&mut self, viewport: &V) -> bool
    where
        V: ViewportGeometry + ?Sized,
    {
        match active_section_at(viewport) {
            Some(section) if section != self.active_section => {
                trace!("Active section {} -> {}", self.active_section, section);
                self.active_section = section;
                true
            }
            _ => false,
        }
    }

    /// Navigate by DOM id.
    ///
    /// Unknown ids are a silent no-op, same as a section missing from the
    /// document. Returns `true` if a scroll was requested.
    pub fn scroll_to_section<V>(&mut self, id: &str, viewport: &V) -> bool
    where
        V: ViewportGeometry + ?Sized,
    {
        match id.parse::<SectionId>() {
            Ok(section) => self.scroll_to(section, viewport),
            Err(e) => {
                debug!("Ignoring navigation: {}", e);
                false
            }
        }
    }

    /// Smooth-scroll to `section`, highlight it right away and close the menu.
    pub fn scroll_to<V>(&mut self, section: SectionId, viewport: &V) -> bool
    where
        V: ViewportGeometry + ?Sized,
    {
        let Some(bounds) = viewport.section_bounds(section) else {
            debug!("Section '{}' not in document, ignoring navigation", section);
            return false;
        };

        let target = bounds.scroll_target();
        debug!("Scrolling to '{}' at {}", section, target);
        viewport.smooth_scroll_to(target);

        self.active_section = section;
        self.close_menu();
        true
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

/// Events the nav bar reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMessage {
    /// Browser `scroll` event
    Scrolled,

    /// Nav button or call-to-action click
    Navigate(SectionId),

    /// Mobile menu button click
    ToggleMenu,
}

/// Apply a message to the nav state.
///
/// Returns `false` when the state is untouched, so the caller can skip
/// notifying the view.
pub fn update<V>(state: &mut NavState, message: NavMessage, viewport: &V) -> bool
where
    V: ViewportGeometry + ?Sized,
{
    match message {
        NavMessage::Scrolled => state.handle_scroll(viewport),
        NavMessage::Navigate(section) => state.scroll_to(section, viewport),
        NavMessage::ToggleMenu => {
            state.toggle_menu();
            true
        }
    }
}
