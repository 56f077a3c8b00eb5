#![cfg(target_arch = "wasm32")]
use archi_interaction_wasm::{abi_version, ArchiSite};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, Event, EventInit, HtmlElement, HtmlImageElement, HtmlInputElement,
    KeyboardEvent, KeyboardEventInit, MouseEvent, MouseEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r##"
<nav id="nav">
  <button id="navToggle">menu</button>
  <ul id="navMenu"><li><a id="menuLink" href="#projets">Projets</a></li></ul>
</nav>
<div class="filters">
  <button class="filter-btn active" data-filter="all">Tous</button>
  <button id="btnHouse" class="filter-btn" data-filter="maison">Maisons</button>
</div>
<section id="projets">
  <div id="card0" class="project-card reveal" data-category="maison">
    <img src="https://img.example.com/a.jpg?w=600&q=80" alt="Villa">
  </div>
  <div id="card1" class="project-card reveal-left" data-category="renovation">
    <img src="https://img.example.com/b.jpg?w=600" alt="Case">
  </div>
</section>
<div id="lightbox" class="lightbox">
  <span class="lightbox-close">x</span>
  <img class="lightbox-img" src="" alt="">
</div>
<span id="years" class="trust-number" data-count="25">0</span>
<a id="bareLink" href="#">haut</a>
<form id="contactForm">
  <input id="nameInput" name="name" value="Jane">
  <input name="email" value="jane@example.com">
  <select name="service"><option value="renovation" selected>Rénovation</option></select>
  <textarea name="message">Bonjour</textarea>
  <button id="send" type="submit">Envoyer</button>
</form>
"##;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn fresh_page() -> Document {
    let doc = document();
    doc.body().unwrap().set_inner_html(PAGE);
    doc.body().unwrap().style().remove_property("overflow").unwrap();
    doc
}

fn el(doc: &Document, id: &str) -> HtmlElement {
    doc.get_element_by_id(id).unwrap().dyn_into().unwrap()
}

fn has_class(e: &Element, class: &str) -> bool {
    e.class_list().contains(class)
}

fn body_overflow(doc: &Document) -> String {
    doc.body()
        .unwrap()
        .style()
        .get_property_value("overflow")
        .unwrap()
}

fn mounted_site() -> ArchiSite {
    let mut site = ArchiSite::new(JsValue::UNDEFINED).unwrap();
    site.mount().unwrap();
    site
}

fn mounted_site_with(config: &str) -> ArchiSite {
    let mut site = ArchiSite::new(js_sys::JSON::parse(config).unwrap()).unwrap();
    site.mount().unwrap();
    site
}

fn text(doc: &Document, id: &str) -> String {
    el(doc, id).text_content().unwrap_or_default()
}

fn cancelable_click() -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap()
}

fn submit_form(doc: &Document) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let ev = Event::new_with_event_init_dict("submit", &init).unwrap();
    el(doc, "contactForm").dispatch_event(&ev).unwrap();
    ev
}

fn background(doc: &Document, id: &str) -> String {
    el(doc, id)
        .style()
        .get_property_value("background-color")
        .unwrap()
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn construct_with_defaults_and_reject_bad_config() {
    assert!(ArchiSite::new(JsValue::NULL).is_ok());
    let bad = js_sys::JSON::parse(r#"{ "reveal": { "threshold": 2 } }"#).unwrap();
    assert!(ArchiSite::new(bad).is_err());
    let unknown = js_sys::JSON::parse(r#"{ "colour": "red" }"#).unwrap();
    assert!(ArchiSite::new(unknown).is_err());
}

#[wasm_bindgen_test]
fn mount_is_idempotent_and_tolerates_empty_page() {
    document().body().unwrap().set_inner_html("<p>vide</p>");
    let mut site = ArchiSite::new(JsValue::UNDEFINED).unwrap();
    site.mount().unwrap();
    site.mount().unwrap();
    assert!(site.mounted());
}

#[wasm_bindgen_test]
fn menu_toggle_locks_scroll_and_link_closes() {
    let doc = fresh_page();
    let _site = mounted_site();
    el(&doc, "navToggle").click();
    assert!(has_class(&el(&doc, "navMenu"), "active"));
    assert_eq!(body_overflow(&doc), "hidden");

    el(&doc, "menuLink").click();
    assert!(!has_class(&el(&doc, "navMenu"), "active"));
    assert_eq!(body_overflow(&doc), "");
}

#[wasm_bindgen_test]
fn filter_button_hides_other_categories() {
    let doc = fresh_page();
    let _site = mounted_site();
    el(&doc, "btnHouse").click();
    assert!(has_class(&el(&doc, "btnHouse"), "active"));
    assert!(!has_class(&el(&doc, "card0"), "hidden"));
    assert!(has_class(&el(&doc, "card1"), "hidden"));
}

#[wasm_bindgen_test]
fn lightbox_opens_high_res_and_closes_on_escape() {
    let doc = fresh_page();
    let _site = mounted_site();
    el(&doc, "card0").click();

    let overlay = el(&doc, "lightbox");
    assert!(has_class(&overlay, "active"));
    let img: HtmlImageElement = doc
        .query_selector(".lightbox-img")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    assert!(img.src().contains("w=1600"));
    assert_eq!(img.alt(), "Villa");
    assert_eq!(body_overflow(&doc), "hidden");

    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let ev = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    doc.dispatch_event(&ev).unwrap();
    assert!(!has_class(&overlay, "active"));
    assert_eq!(body_overflow(&doc), "");
}

#[wasm_bindgen_test]
fn lightbox_closes_on_backdrop_but_not_on_image() {
    let doc = fresh_page();
    let _site = mounted_site();
    el(&doc, "card1").click();
    let overlay = el(&doc, "lightbox");

    let img: HtmlElement = doc
        .query_selector(".lightbox-img")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    img.click();
    assert!(has_class(&overlay, "active"));

    overlay.click();
    assert!(!has_class(&overlay, "active"));
}

#[wasm_bindgen_test]
fn keyframes_are_injected() {
    let _doc = fresh_page();
    let _site = mounted_site();
    let styles = document().head().unwrap().inner_html();
    assert!(styles.contains("@keyframes fadeIn"));
}

#[wasm_bindgen_test]
async fn elements_in_view_are_revealed() {
    let doc = fresh_page();
    let _site = mounted_site();
    assert!(!has_class(&el(&doc, "card0"), "visible"));

    TimeoutFuture::new(300).await;
    assert!(has_class(&el(&doc, "card0"), "visible"));
    assert!(has_class(&el(&doc, "card1"), "visible"));
}

#[wasm_bindgen_test]
async fn counter_in_view_lands_on_its_target() {
    let doc = fresh_page();
    let _site = mounted_site_with(r#"{ "count_up": { "duration_ms": 100 } }"#);

    TimeoutFuture::new(600).await;
    assert_eq!(text(&doc, "years"), "25");
}

#[wasm_bindgen_test]
async fn detached_counter_stops_updating() {
    let doc = fresh_page();
    let _site = mounted_site_with(r#"{ "count_up": { "duration_ms": 2000 } }"#);
    let years = el(&doc, "years");

    TimeoutFuture::new(300).await;
    years.remove();
    let at_removal = years.text_content().unwrap_or_default();

    TimeoutFuture::new(2200).await;
    assert_eq!(years.text_content().unwrap_or_default(), at_removal);
    assert_ne!(at_removal, "25");
}

#[wasm_bindgen_test]
fn anchor_clicks_skip_the_default_jump() {
    let doc = fresh_page();
    let _site = mounted_site();

    let ev = cancelable_click();
    el(&doc, "menuLink").dispatch_event(&ev).unwrap();
    assert!(ev.default_prevented());

    // A bare `#` has nowhere to scroll but still must not jump.
    let ev = cancelable_click();
    el(&doc, "bareLink").dispatch_event(&ev).unwrap();
    assert!(ev.default_prevented());
}

#[wasm_bindgen_test]
async fn submit_shows_feedback_then_restores_and_resets_the_form() {
    let doc = fresh_page();
    let _site = mounted_site_with(
        r#"{ "contact": { "open_mail_client": false, "feedback_ms": 50 } }"#,
    );
    let name: HtmlInputElement = el(&doc, "nameInput").dyn_into().unwrap();
    name.set_value("Someone else");

    let ev = submit_form(&doc);
    assert!(ev.default_prevented());
    assert_eq!(text(&doc, "send"), "Message préparé !");
    assert!(!background(&doc, "send").is_empty());

    TimeoutFuture::new(250).await;
    assert_eq!(text(&doc, "send"), "Envoyer");
    assert_eq!(background(&doc, "send"), "");
    assert_eq!(name.value(), "Jane");
}

#[wasm_bindgen_test]
async fn resubmitting_restarts_the_feedback_timer() {
    let doc = fresh_page();
    let _site = mounted_site_with(
        r#"{ "contact": { "open_mail_client": false, "feedback_ms": 200 } }"#,
    );

    submit_form(&doc);
    TimeoutFuture::new(120).await;
    submit_form(&doc);

    // Past the first submit's deadline, inside the second's.
    TimeoutFuture::new(150).await;
    assert_eq!(text(&doc, "send"), "Message préparé !");

    TimeoutFuture::new(250).await;
    assert_eq!(text(&doc, "send"), "Envoyer");
}
