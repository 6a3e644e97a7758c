//! # portfolio-core - Navigation and Content
//!
//! Browser-independent half of the portfolio site. The `website` crate
//! renders; this crate decides which section is active, where to scroll, and
//! what text to show.
//!
//! ## Public API
//!
//! ### Sections (`section`)
//! - [`SectionId`] - The five page sections, in declared order
//!
//! ### Viewport (`viewport`)
//! - [`ViewportGeometry`] - Scroll offset, section bounds, smooth scroll request
//! - [`SectionBounds`] - Vertical extent of a section
//! - [`active_section_at()`] - First section containing the lookahead position
//!
//! ### Navigation (`navigation`)
//! - [`NavState`] - Active section and mobile menu flag
//! - [`NavMessage`], [`update()`] - Message dispatch for scroll and click events
//!
//! ### Listener Lifecycle (`subscription`)
//! - [`ScrollSource`] - Anything that emits scroll events
//! - [`ScrollSubscription`] - Guard that detaches the listener on drop
//! - [`mount()`] - Attach a scroll listener feeding [`NavMessage::Scrolled`]
//!
//! ### Content (`content`)
//! - [`PortfolioContent`] - Profile, skills, projects and contact data from TOML
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`], [`ResultExt`]

pub mod content;
pub mod error;
pub mod navigation;
pub mod section;
pub mod subscription;
pub mod viewport;

#[cfg(test)]
pub(crate) mod test_utils;

/// Prelude for common imports used throughout the portfolio crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use content::{
    About, Contact, Footer, PortfolioContent, Profile, Project, ProjectShowcase, SkillGroup,
    Skills, SocialLinks,
};
pub use error::{Error, Result, ResultExt};
pub use navigation::{update, NavMessage, NavState};
pub use section::SectionId;
pub use subscription::{mount, ScrollHandler, ScrollSource, ScrollSubscription};
pub use viewport::{
    active_section_at, SectionBounds, ViewportGeometry, HEADER_OFFSET, SCROLL_LOOKAHEAD,
};
