//! Reveal-on-scroll wiring.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use log::debug;

use archi_interaction_core::{RevealStyle, SiteConfig, VisibilityTrigger};

use crate::dom::{intersection_observer, Page};

pub fn mount(page: &Rc<Page>, cfg: &SiteConfig) -> Result<()> {
    let targets = page.query_all(&RevealStyle::selector());
    if targets.is_empty() {
        return Ok(());
    }
    let trigger = Rc::new(RefCell::new(VisibilityTrigger::new(&cfg.reveal)));

    let page_c = Rc::clone(page);
    let trigger_c = Rc::clone(&trigger);
    let observer = intersection_observer(page, cfg.reveal.threshold, move |reports, observer| {
        let fx = trigger_c.borrow_mut().on_intersections(&reports);
        page_c.apply(fx, Some(&observer));
    })?;

    for el in targets {
        let class_list = el.class_list();
        let Some(style) = RevealStyle::ALL
            .into_iter()
            .find(|s| class_list.contains(s.class_name()))
        else {
            continue;
        };
        let id = page.register(&el);
        if trigger.borrow_mut().watch(id, style) {
            observer.observe(&el);
        }
    }
    debug!("watching {} reveal targets", trigger.borrow().watching_count());
    Ok(())
}
