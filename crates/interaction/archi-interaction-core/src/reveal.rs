//! Scroll-triggered reveals.
//!
//! Each watched element moves through `Unobserved -> Watching -> Revealed`
//! exactly once. `Revealed` is terminal: later reports are ignored and the
//! element is never hidden again when it scrolls away.

use hashbrown::HashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::RevealConfig;
use crate::effects::{Effect, IntersectionReport, Target};
use crate::ids::ElementId;

/// Class added to an element once it is revealed.
pub const VISIBLE_CLASS: &str = "visible";

/// Entrance animation an element is tagged with.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RevealStyle {
    FadeUp,
    FadeFromLeft,
    FadeFromRight,
}

impl RevealStyle {
    pub const ALL: [RevealStyle; 3] = [
        RevealStyle::FadeUp,
        RevealStyle::FadeFromLeft,
        RevealStyle::FadeFromRight,
    ];

    pub fn class_name(self) -> &'static str {
        match self {
            RevealStyle::FadeUp => "reveal",
            RevealStyle::FadeFromLeft => "reveal-left",
            RevealStyle::FadeFromRight => "reveal-right",
        }
    }

    pub fn from_class(class: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.class_name() == class)
    }

    /// CSS selector matching every reveal style.
    pub fn selector() -> String {
        Self::ALL
            .iter()
            .map(|s| format!(".{}", s.class_name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub enum WatchState {
    #[default]
    Unobserved,
    Watching,
    Revealed,
}

#[derive(Clone, Debug)]
struct Watched {
    style: RevealStyle,
    state: WatchState,
}

/// Fire-once visibility trigger over a set of watched elements.
#[derive(Debug)]
pub struct VisibilityTrigger {
    threshold: f64,
    watched: HashMap<ElementId, Watched>,
}

impl VisibilityTrigger {
    pub fn new(cfg: &RevealConfig) -> Self {
        Self {
            threshold: cfg.threshold,
            watched: HashMap::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Start watching an element. Returns false if the element was already
    /// registered; a revealed element is never put back to `Watching`.
    pub fn watch(&mut self, id: ElementId, style: RevealStyle) -> bool {
        if self.watched.contains_key(&id) {
            return false;
        }
        self.watched.insert(
            id,
            Watched {
                style,
                state: WatchState::Watching,
            },
        );
        true
    }

    pub fn state(&self, id: ElementId) -> WatchState {
        self.watched
            .get(&id)
            .map(|w| w.state)
            .unwrap_or(WatchState::Unobserved)
    }

    pub fn style(&self, id: ElementId) -> Option<RevealStyle> {
        self.watched.get(&id).map(|w| w.style)
    }

    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.state(id) == WatchState::Revealed
    }

    pub fn watching_count(&self) -> usize {
        self.count(WatchState::Watching)
    }

    pub fn revealed_count(&self) -> usize {
        self.count(WatchState::Revealed)
    }

    fn count(&self, state: WatchState) -> usize {
        self.watched.values().filter(|w| w.state == state).count()
    }

    /// Process one batch of intersection reports. Every element that crosses
    /// the threshold for the first time yields a reveal and an unobserve.
    pub fn on_intersections(&mut self, reports: &[IntersectionReport]) -> Vec<Effect> {
        let mut effects = Vec::new();
        for report in reports {
            let Some(entry) = self.watched.get_mut(&report.target) else {
                continue;
            };
            if entry.state != WatchState::Watching || !report.crosses(self.threshold) {
                continue;
            }
            entry.state = WatchState::Revealed;
            debug!(
                "reveal {:?} ({}) at ratio {:.3}",
                report.target,
                entry.style.class_name(),
                report.ratio
            );
            effects.push(Effect::AddClass {
                target: Target::Element(report.target),
                class: VISIBLE_CLASS,
            });
            effects.push(Effect::Unobserve(report.target));
        }
        effects
    }
}
