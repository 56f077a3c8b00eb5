//! Modal image viewer for project cards.

use log::debug;
use serde::Serialize;

use crate::config::LightboxConfig;
use crate::effects::{Effect, ScrollPolicy, Target};

pub const OPEN_CLASS: &str = "active";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub enum LightboxState {
    #[default]
    Closed,
    Open { src: String, alt: String },
}

/// What asked the lightbox to close.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum CloseTrigger {
    CloseControl,
    /// Click on the overlay itself, outside the image.
    Backdrop,
    Escape,
}

#[derive(Debug)]
pub struct Lightbox {
    state: LightboxState,
    low_res_token: String,
    high_res_token: String,
}

impl Lightbox {
    pub fn new(cfg: &LightboxConfig) -> Self {
        Self {
            state: LightboxState::Closed,
            low_res_token: cfg.low_res_token.clone(),
            high_res_token: cfg.high_res_token.clone(),
        }
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    /// High resolution variant of a thumbnail URL. URLs without the
    /// thumbnail token are returned unchanged.
    pub fn high_res_src(&self, src: &str) -> String {
        src.replacen(&self.low_res_token, &self.high_res_token, 1)
    }

    /// Open on the clicked card's thumbnail. Opening while already open
    /// swaps the image.
    pub fn open(&mut self, thumb_src: &str, alt: &str) -> Vec<Effect> {
        let src = self.high_res_src(thumb_src);
        debug!("lightbox open {src}");
        self.state = LightboxState::Open {
            src: src.clone(),
            alt: alt.to_string(),
        };
        vec![
            Effect::SetImage {
                target: Target::LightboxImage,
                src,
                alt: alt.to_string(),
            },
            Effect::AddClass {
                target: Target::Lightbox,
                class: OPEN_CLASS,
            },
            Effect::BodyScroll(ScrollPolicy::Locked),
        ]
    }

    pub fn close(&mut self, trigger: CloseTrigger) -> Vec<Effect> {
        if !self.is_open() {
            return Vec::new();
        }
        debug!("lightbox close via {trigger:?}");
        self.state = LightboxState::Closed;
        vec![
            Effect::RemoveClass {
                target: Target::Lightbox,
                class: OPEN_CLASS,
            },
            Effect::BodyScroll(ScrollPolicy::Free),
        ]
    }

    /// Click inside the overlay. Only clicks whose target is the overlay
    /// element itself close it; clicks on the image do not.
    pub fn on_overlay_click(&mut self, target_is_overlay: bool) -> Vec<Effect> {
        if target_is_overlay {
            self.close(CloseTrigger::Backdrop)
        } else {
            Vec::new()
        }
    }

    pub fn on_key(&mut self, key: &str) -> Vec<Effect> {
        if key == "Escape" {
            self.close(CloseTrigger::Escape)
        } else {
            Vec::new()
        }
    }
}
