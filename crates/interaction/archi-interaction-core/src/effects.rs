//! Output contracts from the controllers.
//!
//! Controllers never touch the document. They return the visual changes for
//! one event as a list of [`Effect`]s and the adapter applies them in order.

use serde::Serialize;

use crate::ids::ElementId;

/// Element an effect applies to. Registered elements are addressed by
/// handle; singleton page parts by role.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum Target {
    Element(ElementId),
    Nav,
    NavToggle,
    NavMenu,
    Lightbox,
    LightboxImage,
    HeroImage,
    CtaBackground,
    SubmitButton,
    ContactForm,
}

/// Body overflow policy.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub enum ScrollPolicy {
    #[default]
    Free,
    Locked,
}

impl ScrollPolicy {
    /// Value for the body's inline `overflow` style.
    pub fn as_css(self) -> &'static str {
        match self {
            ScrollPolicy::Free => "",
            ScrollPolicy::Locked => "hidden",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[non_exhaustive]
pub enum Effect {
    AddClass {
        target: Target,
        class: &'static str,
    },
    RemoveClass {
        target: Target,
        class: &'static str,
    },
    /// Set an inline style property; an empty value clears it.
    SetStyle {
        target: Target,
        property: &'static str,
        value: String,
    },
    SetText {
        target: Target,
        text: String,
    },
    SetImage {
        target: Target,
        src: String,
        alt: String,
    },
    BodyScroll(ScrollPolicy),
    /// Stop intersection notifications for this element.
    Unobserve(ElementId),
    /// Smooth-scroll the window to an absolute offset.
    ScrollTo {
        top: f64,
    },
    /// Hand a URI to the browser (used for the mailto bridge).
    OpenUri(String),
    ResetForm,
}

/// Viewport intersection notification for one registered element.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct IntersectionReport {
    pub target: ElementId,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionReport {
    pub fn new(target: ElementId, is_intersecting: bool, ratio: f64) -> Self {
        Self {
            target,
            is_intersecting,
            ratio,
        }
    }

    /// Observers report the crossing ratio with some rounding, so a small
    /// slack is allowed below the threshold.
    pub fn crosses(&self, threshold: f64) -> bool {
        const RATIO_SLACK: f64 = 1e-3;
        self.is_intersecting && self.ratio + RATIO_SLACK >= threshold
    }
}
