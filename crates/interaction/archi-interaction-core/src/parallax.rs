//! Decorative parallax on the hero and call-to-action backgrounds.

use crate::config::ParallaxConfig;
use crate::effects::{Effect, Target};

#[derive(Debug, Clone)]
pub struct Parallax {
    hero_scale_factor: f64,
    hero_translate_factor: f64,
    cta_translate_factor: f64,
}

impl Parallax {
    pub fn new(cfg: &ParallaxConfig) -> Self {
        Self {
            hero_scale_factor: cfg.hero_scale_factor,
            hero_translate_factor: cfg.hero_translate_factor,
            cta_translate_factor: cfg.cta_translate_factor,
        }
    }

    /// Hero transform while the hero is still on screen.
    pub fn hero_transform(&self, scrolled: f64, viewport_height: f64) -> Option<String> {
        if scrolled >= viewport_height {
            return None;
        }
        Some(format!(
            "scale({}) translateY({}px)",
            1.0 + scrolled * self.hero_scale_factor,
            scrolled * self.hero_translate_factor
        ))
    }

    /// CTA background transform while the section overlaps the viewport.
    pub fn cta_transform(&self, top: f64, bottom: f64, viewport_height: f64) -> Option<String> {
        if top < viewport_height && bottom > 0.0 {
            Some(format!(
                "translateY({}px)",
                (top - viewport_height) * self.cta_translate_factor
            ))
        } else {
            None
        }
    }

    /// Effects for one scroll event. `cta_rect` is `(top, bottom)` of the
    /// CTA section when present.
    pub fn on_scroll(
        &self,
        scrolled: f64,
        viewport_height: f64,
        cta_rect: Option<(f64, f64)>,
    ) -> Vec<Effect> {
        let mut effects = Vec::with_capacity(2);
        if let Some(value) = self.hero_transform(scrolled, viewport_height) {
            effects.push(Effect::SetStyle {
                target: Target::HeroImage,
                property: "transform",
                value,
            });
        }
        if let Some(value) =
            cta_rect.and_then(|(top, bottom)| self.cta_transform(top, bottom, viewport_height))
        {
            effects.push(Effect::SetStyle {
                target: Target::CtaBackground,
                property: "transform",
                value,
            });
        }
        effects
    }
}
