//! Archi Concept interaction core (engine-agnostic).
//!
//! Owned controllers for every behavior on the portfolio page. Controllers
//! consume host events (viewport intersections, frame ticks, clicks, key
//! presses, scroll offsets, form fields) and return [`Effect`]s for the
//! host to apply. Nothing here touches a browser API, so the web adapter
//! and native tests drive the same code.

pub mod config;
pub mod contact;
pub mod count_up;
pub mod easing;
pub mod effects;
pub mod error;
pub mod filter;
pub mod ids;
pub mod lightbox;
pub mod nav;
pub mod parallax;
pub mod reveal;

// Re-exports for adapters
pub use config::{
    ContactConfig, CountUpConfig, LightboxConfig, NavConfig, ParallaxConfig, RevealConfig,
    SiteConfig,
};
pub use contact::{encode_uri_component, ContactBridge, ContactSubmission, MailtoMessage};
pub use count_up::{count_at, parse_count_target, CountFrame, CountUp, CountUpBoard};
pub use easing::ease_out_cubic;
pub use effects::{Effect, IntersectionReport, ScrollPolicy, Target};
pub use error::{InteractionError, Result};
pub use filter::{FilterToken, ProjectFilter, FADE_IN_KEYFRAMES};
pub use ids::{ElementId, IdAllocator};
pub use lightbox::{CloseTrigger, Lightbox, LightboxState};
pub use nav::{anchor_selector, scroll_offset, Navigation, SmoothScroll};
pub use parallax::Parallax;
pub use reveal::{RevealStyle, VisibilityTrigger, WatchState};
