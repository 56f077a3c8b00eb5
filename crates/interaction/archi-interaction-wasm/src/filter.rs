//! Project filter buttons.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use web_sys::MouseEvent;

use archi_interaction_core::{ProjectFilter, FADE_IN_KEYFRAMES};

use crate::dom::{data_attr, js_err, listen, Page};

/// Add the `fadeIn` keyframes used by re-shown project cards.
pub fn inject_keyframes(page: &Page) -> Result<()> {
    let doc = page.document();
    let head = doc.head().ok_or_else(|| anyhow!("document has no <head>"))?;
    let style = doc.create_element("style").map_err(js_err)?;
    style.set_text_content(Some(FADE_IN_KEYFRAMES));
    head.append_child(&style).map_err(js_err)?;
    Ok(())
}

pub fn mount(page: &Rc<Page>) -> Result<()> {
    let buttons = page.query_all(".filter-btn");
    if buttons.is_empty() {
        return Ok(());
    }
    let mut filter = ProjectFilter::new();
    for card in page.query_all(".project-card") {
        let id = page.register(&card);
        filter.add_item(id, data_attr(&card, "category").as_deref());
    }
    let mut button_ids = Vec::with_capacity(buttons.len());
    for btn in &buttons {
        let id = page.register(btn);
        filter.add_button(id, &data_attr(btn, "filter").unwrap_or_default());
        if btn.class_list().contains("active") {
            filter.set_initial_button(id);
        }
        button_ids.push(id);
    }

    let filter = Rc::new(RefCell::new(filter));
    for (btn, id) in buttons.iter().zip(button_ids) {
        let page_c = Rc::clone(page);
        let filter_c = Rc::clone(&filter);
        listen(btn, "click", move |_: MouseEvent| {
            let fx = filter_c.borrow_mut().select(id);
            page_c.apply(fx, None);
        })?;
    }
    Ok(())
}
