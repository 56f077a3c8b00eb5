//! Count-up animation for the trust figures.
//!
//! A counter is a restartable step function: the host calls
//! [`CountUp::step`] from its frame clock and stops scheduling once a frame
//! reports `done`. [`CountUpBoard`] ties counters to viewport entry.

use hashbrown::HashMap;
use indexmap::IndexMap;
use log::{debug, warn};
use serde::Serialize;

use crate::config::CountUpConfig;
use crate::easing::{ease_out_cubic, progress};
use crate::effects::{Effect, IntersectionReport, Target};
use crate::error::{InteractionError, Result};
use crate::ids::ElementId;

/// Value displayed `elapsed` time units into an animation towards `target`.
///
/// `floor(target * ease_out_cubic(elapsed / duration))`; the final value is
/// set to `target` exactly rather than trusting the float product.
pub fn count_at(target: u32, elapsed: f64, duration: f64) -> u32 {
    let p = progress(0.0, elapsed, duration);
    if p >= 1.0 {
        return target;
    }
    let v = (f64::from(target) * ease_out_cubic(p)).floor();
    // ease < 1 here, but keep the result inside [0, target] regardless.
    (v.max(0.0) as u32).min(target)
}

/// Parse a `data-count` attribute with integer-prefix semantics:
/// leading whitespace and a `+` sign are accepted, trailing text such as
/// `"+"` or `" ans"` is ignored.
pub fn parse_count_target(raw: &str) -> Result<u32> {
    let invalid = |reason| InteractionError::InvalidCountTarget {
        raw: raw.to_string(),
        reason,
    };
    let s = raw.trim_start();
    let s = match s.as_bytes().first() {
        Some(b'-') => return Err(invalid("negative targets are not supported")),
        Some(b'+') => &s[1..],
        _ => s,
    };
    let digits_end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    if digits_end == 0 {
        return Err(invalid("no leading digits"));
    }
    s[..digits_end]
        .parse::<u32>()
        .map_err(|_| invalid("target out of range"))
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CountFrame {
    pub value: u32,
    pub done: bool,
}

#[derive(Clone, Debug)]
pub struct CountUp {
    target: u32,
    duration: f64,
    start: f64,
    value: u32,
    done: bool,
}

impl CountUp {
    /// Animation towards `target` starting at time `start`.
    pub fn new(target: u32, duration: f64, start: f64) -> Self {
        Self {
            target,
            duration,
            start,
            value: 0,
            done: false,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance to frame time `now`. Stale timestamps never lower the value,
    /// and once done the counter stays pinned at its target.
    pub fn step(&mut self, now: f64) -> CountFrame {
        if !self.done {
            let next = count_at(self.target, now - self.start, self.duration);
            self.value = self.value.max(next);
            self.done = progress(self.start, now, self.duration) >= 1.0;
            if self.done {
                self.value = self.target;
            }
        }
        CountFrame {
            value: self.value,
            done: self.done,
        }
    }
}

/// Counters waiting for viewport entry plus the ones currently animating.
#[derive(Debug)]
pub struct CountUpBoard {
    threshold: f64,
    duration: f64,
    waiting: HashMap<ElementId, u32>,
    running: IndexMap<ElementId, CountUp>,
}

impl CountUpBoard {
    pub fn new(cfg: &CountUpConfig) -> Self {
        Self {
            threshold: cfg.threshold,
            duration: cfg.duration_ms,
            waiting: HashMap::new(),
            running: IndexMap::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Wait for `id` to enter the viewport, then count up to `target`.
    pub fn watch(&mut self, id: ElementId, target: u32) -> bool {
        if self.waiting.contains_key(&id) || self.running.contains_key(&id) {
            return false;
        }
        self.waiting.insert(id, target);
        true
    }

    /// Like [`watch`](Self::watch) but parses the raw attribute; elements
    /// with an unusable target are skipped with a warning.
    pub fn watch_attr(&mut self, id: ElementId, raw: &str) -> Result<u32> {
        match parse_count_target(raw) {
            Ok(target) => {
                self.watch(id, target);
                Ok(target)
            }
            Err(e) => {
                warn!("skipping counter {id:?}: {e}");
                Err(e)
            }
        }
    }

    pub fn is_waiting(&self, id: ElementId) -> bool {
        self.waiting.contains_key(&id)
    }

    pub fn is_running(&self, id: ElementId) -> bool {
        self.running.contains_key(&id)
    }

    /// True when no animation needs another frame.
    pub fn is_idle(&self) -> bool {
        self.running.is_empty()
    }

    /// Elements with an animation in flight, in start order.
    pub fn running(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.running.keys().copied()
    }

    pub fn value(&self, id: ElementId) -> Option<u32> {
        self.running.get(&id).map(CountUp::value)
    }

    /// Start counters that crossed the threshold at time `now`. Only
    /// `Unobserve` effects are returned; the element text is left alone until
    /// the next [`tick`](Self::tick), which shows 0 for any frame at or
    /// before `now`.
    pub fn on_intersections(&mut self, reports: &[IntersectionReport], now: f64) -> Vec<Effect> {
        let mut effects = Vec::new();
        for report in reports {
            if !report.crosses(self.threshold) {
                continue;
            }
            let Some(target) = self.waiting.remove(&report.target) else {
                continue;
            };
            debug!("count-up {:?} -> {} starting at {:.1}", report.target, target, now);
            self.running
                .insert(report.target, CountUp::new(target, self.duration, now));
            effects.push(Effect::Unobserve(report.target));
        }
        effects
    }

    /// Advance every running counter to frame time `now`. Finished counters
    /// are dropped after their final value is emitted.
    pub fn tick(&mut self, now: f64) -> Vec<Effect> {
        let mut effects = Vec::with_capacity(self.running.len());
        self.running.retain(|id, counter| {
            let frame = counter.step(now);
            effects.push(Effect::SetText {
                target: Target::Element(*id),
                text: frame.value.to_string(),
            });
            !frame.done
        });
        effects
    }

    /// Forget an element, cancelling its animation if one is running.
    pub fn remove(&mut self, id: ElementId) -> bool {
        let was_waiting = self.waiting.remove(&id).is_some();
        let was_running = self.running.shift_remove(&id).is_some();
        was_waiting || was_running
    }
}
