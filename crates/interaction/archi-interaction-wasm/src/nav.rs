//! Navigation bar, mobile menu and in-page smooth scrolling.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use log::debug;
use web_sys::{Event, MouseEvent};

use archi_interaction_core::{anchor_selector, Navigation, SiteConfig, SmoothScroll, Target};

use crate::dom::{descendants, listen, Page};

pub fn mount(page: &Rc<Page>, cfg: &SiteConfig) -> Result<()> {
    let nav = page.bind_role(Target::Nav, page.by_id("nav"));
    let toggle = page.bind_role(Target::NavToggle, page.by_id("navToggle"));
    let menu = page.bind_role(Target::NavMenu, page.by_id("navMenu"));
    let state = Rc::new(RefCell::new(Navigation::new(&cfg.nav)));

    if nav.is_some() {
        let page_c = Rc::clone(page);
        let state_c = Rc::clone(&state);
        listen(page.window(), "scroll", move |_: Event| {
            let fx = state_c.borrow_mut().on_scroll(page_c.page_y_offset());
            page_c.apply(fx, None);
        })?;
    }

    if let Some(toggle) = &toggle {
        let page_c = Rc::clone(page);
        let state_c = Rc::clone(&state);
        listen(toggle, "click", move |_: MouseEvent| {
            let fx = state_c.borrow_mut().toggle();
            page_c.apply(fx, None);
        })?;
    }

    if let Some(menu) = &menu {
        for link in descendants(menu, "a") {
            let page_c = Rc::clone(page);
            let state_c = Rc::clone(&state);
            listen(&link, "click", move |_: MouseEvent| {
                let fx = state_c.borrow_mut().on_link_activated();
                page_c.apply(fx, None);
            })?;
        }
    }
    Ok(())
}

pub fn mount_smooth_scroll(page: &Rc<Page>, cfg: &SiteConfig) -> Result<()> {
    let scroller = SmoothScroll::new(&cfg.nav);
    for anchor in page.query_all("a[href^=\"#\"]") {
        let page_c = Rc::clone(page);
        let scroller = scroller.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        listen(&anchor, "click", move |e: MouseEvent| {
            e.prevent_default();
            let Some(target) = anchor_selector(&href).and_then(|sel| page_c.query(sel)) else {
                debug!("no scroll target for {href:?}");
                return;
            };
            let top = target.get_bounding_client_rect().top();
            let fx = scroller.scroll_to(top, page_c.page_y_offset());
            page_c.apply(vec![fx], None);
        })?;
    }
    Ok(())
}
