//! Site configuration.
//!
//! Every field has a default matching the production page, so hosts only
//! pass the values they want to override. Unknown fields are rejected to
//! catch typos in embedding pages.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{InteractionError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub reveal: RevealConfig,
    pub count_up: CountUpConfig,
    pub nav: NavConfig,
    pub lightbox: LightboxConfig,
    pub contact: ContactConfig,
    pub parallax: ParallaxConfig,
    /// Maximum level forwarded by the host logger (`off`, `error` .. `trace`).
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            reveal: RevealConfig::default(),
            count_up: CountUpConfig::default(),
            nav: NavConfig::default(),
            lightbox: LightboxConfig::default(),
            contact: ContactConfig::default(),
            parallax: ParallaxConfig::default(),
            log_level: "warn".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Visible ratio at which a watched element is revealed.
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { threshold: 0.1 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CountUpConfig {
    /// Visible ratio at which a counter starts.
    pub threshold: f64,
    pub duration_ms: f64,
}

impl Default for CountUpConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            duration_ms: 2000.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Scroll offset past which the bar gets the `scrolled` class.
    pub scrolled_offset: f64,
    /// Fixed header height subtracted from smooth-scroll targets.
    pub header_offset: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_offset: 100.0,
            header_offset: 80.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LightboxConfig {
    /// Query fragment of thumbnail URLs, replaced by `high_res_token` on open.
    pub low_res_token: String,
    pub high_res_token: String,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            low_res_token: "w=600".to_string(),
            high_res_token: "w=1600".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    pub recipient: String,
    pub success_label: String,
    pub success_color: String,
    pub feedback_ms: u32,
    /// Hand the composed `mailto:` link to the browser. Hosts that only want
    /// the button feedback (embedded previews, tests) turn this off.
    pub open_mail_client: bool,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: "archiconcept974@gmail.com".to_string(),
            success_label: "Message préparé !".to_string(),
            success_color: "#B8A88A".to_string(),
            feedback_ms: 3000,
            open_mail_client: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParallaxConfig {
    pub hero_scale_factor: f64,
    pub hero_translate_factor: f64,
    pub cta_translate_factor: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            hero_scale_factor: 0.0001,
            hero_translate_factor: 0.3,
            cta_translate_factor: 0.2,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: SiteConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| InteractionError::InvalidConfig {
                field: "log_level",
                reason: format!("unknown level {:?}", self.log_level),
            })
    }

    pub fn validate(&self) -> Result<()> {
        self.log_level_filter()?;
        check_ratio("reveal.threshold", self.reveal.threshold)?;
        check_ratio("count_up.threshold", self.count_up.threshold)?;
        if !(self.count_up.duration_ms.is_finite() && self.count_up.duration_ms > 0.0) {
            return Err(InteractionError::InvalidConfig {
                field: "count_up.duration_ms",
                reason: format!("must be a positive duration, got {}", self.count_up.duration_ms),
            });
        }
        check_finite("nav.scrolled_offset", self.nav.scrolled_offset)?;
        check_finite("nav.header_offset", self.nav.header_offset)?;
        check_finite("parallax.hero_scale_factor", self.parallax.hero_scale_factor)?;
        check_finite("parallax.hero_translate_factor", self.parallax.hero_translate_factor)?;
        check_finite("parallax.cta_translate_factor", self.parallax.cta_translate_factor)?;
        if self.lightbox.low_res_token.is_empty() {
            return Err(InteractionError::InvalidConfig {
                field: "lightbox.low_res_token",
                reason: "must not be empty".to_string(),
            });
        }
        if self.contact.recipient.trim().is_empty() {
            return Err(InteractionError::InvalidConfig {
                field: "contact.recipient",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn check_ratio(field: &'static str, v: f64) -> Result<()> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(InteractionError::InvalidConfig {
            field,
            reason: format!("ratio must be within [0, 1], got {v}"),
        })
    }
}

fn check_finite(field: &'static str, v: f64) -> Result<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(InteractionError::InvalidConfig {
            field,
            reason: format!("must be a finite number, got {v}"),
        })
    }
}
