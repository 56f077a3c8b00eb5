//! Project image lightbox.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlImageElement, KeyboardEvent, MouseEvent};

use archi_interaction_core::{CloseTrigger, Lightbox, SiteConfig, Target};

use crate::dom::{listen, Page};

pub fn mount(page: &Rc<Page>, cfg: &SiteConfig) -> Result<()> {
    let Some(overlay) = page.bind_role(Target::Lightbox, page.by_id("lightbox")) else {
        return Ok(());
    };
    page.bind_role(
        Target::LightboxImage,
        overlay.query_selector(".lightbox-img").ok().flatten(),
    );
    let close_btn = overlay.query_selector(".lightbox-close").ok().flatten();
    let state = Rc::new(RefCell::new(Lightbox::new(&cfg.lightbox)));

    for card in page.query_all(".project-card") {
        let Some(img) = card
            .query_selector("img")
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<HtmlImageElement>().ok())
        else {
            continue;
        };
        let page_c = Rc::clone(page);
        let state_c = Rc::clone(&state);
        listen(&card, "click", move |_: MouseEvent| {
            let fx = state_c.borrow_mut().open(&img.src(), &img.alt());
            page_c.apply(fx, None);
        })?;
    }

    if let Some(close_btn) = &close_btn {
        let page_c = Rc::clone(page);
        let state_c = Rc::clone(&state);
        listen(close_btn, "click", move |_: MouseEvent| {
            let fx = state_c.borrow_mut().close(CloseTrigger::CloseControl);
            page_c.apply(fx, None);
        })?;
    }

    {
        let page_c = Rc::clone(page);
        let state_c = Rc::clone(&state);
        let overlay_c = overlay.clone();
        listen(&overlay, "click", move |e: MouseEvent| {
            let overlay_js: &JsValue = overlay_c.as_ref();
            let on_overlay = e.target().is_some_and(|t| {
                let t: &JsValue = t.as_ref();
                t == overlay_js
            });
            let fx = state_c.borrow_mut().on_overlay_click(on_overlay);
            page_c.apply(fx, None);
        })?;
    }

    let page_c = Rc::clone(page);
    listen(page.document(), "keydown", move |e: KeyboardEvent| {
        let fx = state.borrow_mut().on_key(&e.key());
        page_c.apply(fx, None);
    })?;
    Ok(())
}
