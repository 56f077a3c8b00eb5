//! Document lookups and effect application.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use hashbrown::HashMap;
use js_sys::Array;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, HtmlImageElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollToOptions, Window,
};

use archi_interaction_core::{Effect, ElementId, IdAllocator, IntersectionReport, Target};

/// Wrap a thrown JS value so it can travel through `anyhow`.
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{e:?}")
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| anyhow!("no global window"))
}

/// Elements registered with controllers plus the page's singleton parts.
pub struct Page {
    window: Window,
    document: Document,
    ids: RefCell<IdAllocator>,
    elements: RefCell<Vec<Element>>,
    roles: RefCell<HashMap<Target, Element>>,
}

impl Page {
    pub fn new() -> Result<Self> {
        let window = window()?;
        let document = window
            .document()
            .ok_or_else(|| anyhow!("window has no document"))?;
        Ok(Self {
            window,
            document,
            ids: RefCell::new(IdAllocator::new()),
            elements: RefCell::new(Vec::new()),
            roles: RefCell::new(HashMap::new()),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// All elements matching `selector`, in document order. Invalid
    /// selectors yield an empty list.
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            warn!("invalid selector {selector:?}");
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    pub fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    pub fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    /// Hand out a handle for `el`, reusing the existing one if the element
    /// was registered before.
    pub fn register(&self, el: &Element) -> ElementId {
        if let Some(id) = self.handle_of(el) {
            return id;
        }
        let id = self.ids.borrow_mut().alloc();
        self.elements.borrow_mut().push(el.clone());
        id
    }

    pub fn handle_of(&self, el: &Element) -> Option<ElementId> {
        self.elements
            .borrow()
            .iter()
            .position(|e| e == el)
            .map(|i| ElementId(i as u32))
    }

    pub fn element(&self, id: ElementId) -> Option<Element> {
        self.elements.borrow().get(id.0 as usize).cloned()
    }

    /// Bind a singleton role; `None` leaves the role unbound.
    pub fn bind_role(&self, role: Target, el: Option<Element>) -> Option<Element> {
        if let Some(el) = &el {
            self.roles.borrow_mut().insert(role, el.clone());
        }
        el
    }

    pub fn resolve(&self, target: Target) -> Option<Element> {
        match target {
            Target::Element(id) => self.element(id),
            role => self.roles.borrow().get(&role).cloned(),
        }
    }

    pub fn page_y_offset(&self) -> f64 {
        self.window.page_y_offset().unwrap_or(0.0)
    }

    pub fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    pub fn now(&self) -> f64 {
        self.window
            .performance()
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    /// Apply controller output in order. Effects whose target is missing
    /// from the page are skipped.
    pub fn apply(&self, effects: Vec<Effect>, observer: Option<&IntersectionObserver>) {
        for effect in effects {
            if let Err(e) = self.apply_one(effect, observer) {
                warn!("effect failed: {e}");
            }
        }
    }

    fn apply_one(&self, effect: Effect, observer: Option<&IntersectionObserver>) -> Result<()> {
        match effect {
            Effect::AddClass { target, class } => {
                if let Some(el) = self.resolve(target) {
                    el.class_list().add_1(class).map_err(js_err)?;
                }
            }
            Effect::RemoveClass { target, class } => {
                if let Some(el) = self.resolve(target) {
                    el.class_list().remove_1(class).map_err(js_err)?;
                }
            }
            Effect::SetStyle {
                target,
                property,
                value,
            } => {
                if let Some(el) = self.resolve(target).and_then(|e| e.dyn_into::<HtmlElement>().ok())
                {
                    set_style(&el, property, &value)?;
                }
            }
            Effect::SetText { target, text } => {
                if let Some(el) = self.resolve(target) {
                    el.set_text_content(Some(&text));
                }
            }
            Effect::SetImage { target, src, alt } => {
                if let Some(img) = self
                    .resolve(target)
                    .and_then(|e| e.dyn_into::<HtmlImageElement>().ok())
                {
                    img.set_src(&src);
                    img.set_alt(&alt);
                }
            }
            Effect::BodyScroll(policy) => {
                if let Some(body) = self.document.body() {
                    set_style(&body, "overflow", policy.as_css())?;
                }
            }
            Effect::Unobserve(id) => {
                if let (Some(observer), Some(el)) = (observer, self.element(id)) {
                    observer.unobserve(&el);
                }
            }
            Effect::ScrollTo { top } => {
                let opts = ScrollToOptions::new();
                opts.set_top(top);
                opts.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&opts);
            }
            Effect::OpenUri(uri) => {
                self.window.location().set_href(&uri).map_err(js_err)?;
            }
            Effect::ResetForm => {
                if let Some(form) = self
                    .resolve(Target::ContactForm)
                    .and_then(|e| e.dyn_into::<HtmlFormElement>().ok())
                {
                    form.reset();
                }
            }
            other => warn!("unhandled effect {other:?}"),
        }
        Ok(())
    }
}

fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<()> {
    let style = el.style();
    if value.is_empty() {
        style.remove_property(property).map_err(js_err)?;
    } else {
        style.set_property(property, value).map_err(js_err)?;
    }
    Ok(())
}

/// Read a `data-*` attribute.
pub fn data_attr(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(&format!("data-{name}"))
}

/// Descendants of `root` matching `selector`.
pub fn descendants(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach a page-lifetime listener. Events that are not an `E` are dropped.
pub fn listen<E>(target: &EventTarget, event: &str, mut handler: impl FnMut(E) + 'static) -> Result<()>
where
    E: JsCast + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    });
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

/// Build an intersection observer whose callback receives reports for
/// elements registered on `page`. Entries for unknown elements are dropped.
pub fn intersection_observer(
    page: &Rc<Page>,
    threshold: f64,
    mut on_reports: impl FnMut(Vec<IntersectionReport>, IntersectionObserver) + 'static,
) -> Result<IntersectionObserver> {
    let lookup = Rc::clone(page);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let reports: Vec<IntersectionReport> = entries
                .iter()
                .filter_map(|v| v.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let id = lookup.handle_of(&entry.target())?;
                    Some(IntersectionReport::new(
                        id,
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                    ))
                })
                .collect();
            if !reports.is_empty() {
                on_reports(reports, observer);
            }
        },
    );
    let init = IntersectionObserverInit::new();
    init.set_root_margin("0px");
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(js_err)?;
    callback.forget();
    Ok(observer)
}
