//! Contact form submission through the user's mail client.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Event, FormData, HtmlFormElement};

use archi_interaction_core::{ContactBridge, ContactSubmission, SiteConfig, Target};

use crate::dom::{listen, Page};

const FIELDS: [&str; 5] = ["name", "email", "phone", "service", "message"];

fn read_fields(form: &HtmlFormElement) -> Option<ContactSubmission> {
    let data = FormData::new_with_form(form).ok()?;
    Some(ContactSubmission::from_fields(
        FIELDS
            .iter()
            .map(|k| (*k, data.get(k).as_string().unwrap_or_default())),
    ))
}

pub fn mount(page: &Rc<Page>, cfg: &SiteConfig) -> Result<()> {
    let Some(form) = page
        .by_id("contactForm")
        .and_then(|e| e.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(());
    };
    page.bind_role(Target::ContactForm, Some(form.clone().into()));
    let button = page.bind_role(
        Target::SubmitButton,
        form.query_selector("button[type=\"submit\"]").ok().flatten(),
    );
    let bridge = Rc::new(RefCell::new(ContactBridge::new(&cfg.contact)));
    // Dropping a `Timeout` cancels it, so each submit replaces the pending one.
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let page_c = Rc::clone(page);
    let form_c = form.clone();
    listen(&form, "submit", move |e: Event| {
        e.prevent_default();
        let Some(submission) = read_fields(&form_c) else {
            warn!("contact form data unavailable");
            return;
        };
        let label = button
            .as_ref()
            .and_then(|b| b.text_content())
            .unwrap_or_default();
        let fx = bridge.borrow_mut().submit(&submission, &label);
        page_c.apply(fx, None);

        let page_t = Rc::clone(&page_c);
        let bridge_t = Rc::clone(&bridge);
        let (delay, generation) = {
            let b = bridge.borrow();
            (b.feedback_ms(), b.generation())
        };
        let timeout = Timeout::new(delay, move || {
            let fx = bridge_t.borrow_mut().reset(generation);
            page_t.apply(fx, None);
        });
        *pending.borrow_mut() = Some(timeout);
    })?;
    Ok(())
}
