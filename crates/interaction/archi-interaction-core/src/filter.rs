//! Project grid filter.

use std::fmt;

use hashbrown::HashSet;
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use crate::effects::{Effect, Target};
use crate::ids::ElementId;

pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";

/// Entrance animation applied to items that are (re)shown.
pub const FADE_IN_ANIMATION: &str = "fadeIn 0.5s ease forwards";

/// Keyframes backing [`FADE_IN_ANIMATION`]; injected once into the page.
pub const FADE_IN_KEYFRAMES: &str = "
    @keyframes fadeIn {
        from {
            opacity: 0;
            transform: translateY(20px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }
";

/// Wildcard token that shows every project.
pub const WILDCARD: &str = "all";

/// Value of a filter button.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize)]
pub enum FilterToken {
    #[default]
    All,
    Category(String),
}

impl FilterToken {
    pub fn parse(raw: &str) -> Self {
        if raw == WILDCARD {
            FilterToken::All
        } else {
            FilterToken::Category(raw.to_string())
        }
    }

    /// Items without a category only match the wildcard.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            FilterToken::All => true,
            FilterToken::Category(c) => category == Some(c.as_str()),
        }
    }
}

impl fmt::Display for FilterToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterToken::All => f.write_str(WILDCARD),
            FilterToken::Category(c) => f.write_str(c),
        }
    }
}

/// Filter buttons and project cards, in document order.
#[derive(Debug, Default)]
pub struct ProjectFilter {
    buttons: IndexMap<ElementId, FilterToken>,
    items: IndexMap<ElementId, Option<String>>,
    active_button: Option<ElementId>,
    active: FilterToken,
    hidden: HashSet<ElementId>,
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_button(&mut self, id: ElementId, token: &str) {
        self.buttons.insert(id, FilterToken::parse(token));
    }

    /// Mark the button that starts out active in the markup.
    pub fn set_initial_button(&mut self, id: ElementId) {
        if let Some(token) = self.buttons.get(&id) {
            self.active = token.clone();
            self.active_button = Some(id);
        }
    }

    pub fn add_item(&mut self, id: ElementId, category: Option<&str>) {
        self.items.insert(id, category.map(str::to_string));
    }

    pub fn active(&self) -> &FilterToken {
        &self.active
    }

    pub fn active_button(&self) -> Option<ElementId> {
        self.active_button
    }

    pub fn is_hidden(&self, id: ElementId) -> bool {
        self.hidden.contains(&id)
    }

    pub fn visible_items(&self) -> Vec<ElementId> {
        self.items
            .keys()
            .copied()
            .filter(|id| !self.hidden.contains(id))
            .collect()
    }

    /// Handle a click on a filter button. Unknown buttons are ignored.
    pub fn select(&mut self, button: ElementId) -> Vec<Effect> {
        let Some(token) = self.buttons.get(&button).cloned() else {
            return Vec::new();
        };
        let mut effects: Vec<Effect> = self
            .buttons
            .keys()
            .map(|id| Effect::RemoveClass {
                target: Target::Element(*id),
                class: ACTIVE_CLASS,
            })
            .collect();
        effects.push(Effect::AddClass {
            target: Target::Element(button),
            class: ACTIVE_CLASS,
        });
        self.active_button = Some(button);
        effects.extend(self.apply(token));
        effects
    }

    /// Make `token` the active filter and update every item.
    pub fn apply(&mut self, token: FilterToken) -> Vec<Effect> {
        debug!("project filter -> {token}");
        let mut effects = Vec::with_capacity(self.items.len() * 2);
        for (id, category) in &self.items {
            let target = Target::Element(*id);
            if token.matches(category.as_deref()) {
                self.hidden.remove(id);
                effects.push(Effect::RemoveClass {
                    target,
                    class: HIDDEN_CLASS,
                });
                effects.push(Effect::SetStyle {
                    target,
                    property: "animation",
                    value: FADE_IN_ANIMATION.to_string(),
                });
            } else {
                self.hidden.insert(*id);
                effects.push(Effect::AddClass {
                    target,
                    class: HIDDEN_CLASS,
                });
            }
        }
        self.active = token;
        effects
    }
}
