//! Navigation bar state and in-page smooth scrolling.

use log::debug;

use crate::config::NavConfig;
use crate::effects::{Effect, ScrollPolicy, Target};

pub const SCROLLED_CLASS: &str = "scrolled";
pub const OPEN_CLASS: &str = "active";

#[derive(Debug)]
pub struct Navigation {
    scrolled_offset: f64,
    menu_open: bool,
    scrolled: bool,
}

impl Navigation {
    pub fn new(cfg: &NavConfig) -> Self {
        Self {
            scrolled_offset: cfg.scrolled_offset,
            menu_open: false,
            scrolled: false,
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Window scrolled to `page_y`. Emits only when the bar changes state.
    pub fn on_scroll(&mut self, page_y: f64) -> Vec<Effect> {
        let scrolled = page_y > self.scrolled_offset;
        if scrolled == self.scrolled {
            return Vec::new();
        }
        self.scrolled = scrolled;
        let target = Target::Nav;
        let class = SCROLLED_CLASS;
        vec![if scrolled {
            Effect::AddClass { target, class }
        } else {
            Effect::RemoveClass { target, class }
        }]
    }

    /// Mobile menu toggle button.
    pub fn toggle(&mut self) -> Vec<Effect> {
        self.set_menu(!self.menu_open)
    }

    /// Any link inside the menu closes it.
    pub fn on_link_activated(&mut self) -> Vec<Effect> {
        if !self.menu_open {
            return Vec::new();
        }
        self.set_menu(false)
    }

    fn set_menu(&mut self, open: bool) -> Vec<Effect> {
        debug!("nav menu open={open}");
        self.menu_open = open;
        let mut effects = Vec::with_capacity(3);
        for target in [Target::NavToggle, Target::NavMenu] {
            effects.push(if open {
                Effect::AddClass {
                    target,
                    class: OPEN_CLASS,
                }
            } else {
                Effect::RemoveClass {
                    target,
                    class: OPEN_CLASS,
                }
            });
        }
        effects.push(Effect::BodyScroll(if open {
            ScrollPolicy::Locked
        } else {
            ScrollPolicy::Free
        }));
        effects
    }
}

/// Selector for an in-page anchor, or `None` for hrefs that do not point at
/// an element (`#` alone, external links).
pub fn anchor_selector(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(rest) if !rest.is_empty() => Some(href),
        _ => None,
    }
}

/// Absolute scroll offset that puts an element just below the fixed header.
#[inline]
pub fn scroll_offset(target_top: f64, page_y: f64, header_offset: f64) -> f64 {
    target_top + page_y - header_offset
}

#[derive(Debug, Clone)]
pub struct SmoothScroll {
    header_offset: f64,
}

impl SmoothScroll {
    pub fn new(cfg: &NavConfig) -> Self {
        Self {
            header_offset: cfg.header_offset,
        }
    }

    pub fn header_offset(&self) -> f64 {
        self.header_offset
    }

    /// `target_top` is the element's viewport-relative top edge.
    pub fn scroll_to(&self, target_top: f64, page_y: f64) -> Effect {
        Effect::ScrollTo {
            top: scroll_offset(target_top, page_y, self.header_offset),
        }
    }
}
