// =============================================================================
// NexusCorp Web - Browser Tests
// =============================================================================
// Run with `wasm-pack test --headless --firefox crates/web`.
// =============================================================================

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use leptos::mount::mount_to;
use leptos::prelude::*;
use nexus_common::contact::ACKNOWLEDGEMENT;
use nexus_common::{NoticeLevel, SiteConfig};
use nexus_web::components::NoticeHost;
use nexus_web::sections::ContactSection;
use nexus_web::{App, AppState};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{
    Element, Event, EventInit, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
};

wasm_bindgen_test_configure!(run_in_browser);

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn fresh_container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    document.body().unwrap().append_child(&container).unwrap();
    container
}

/// Let pending effects run.
async fn tick() {
    TimeoutFuture::new(0).await;
}

async fn sleep(ms: u32) {
    TimeoutFuture::new(ms).await;
}

fn config_with_duration(notice_duration_ms: u32) -> SiteConfig {
    SiteConfig {
        notice_duration_ms,
        ..SiteConfig::default()
    }
}

fn fill_and_submit_contact(root: &Element) {
    find::<HtmlInputElement>(root, "input[name='first-name']").set_value("Ada");
    find::<HtmlInputElement>(root, "input[name='last-name']").set_value("Lovelace");
    find::<HtmlInputElement>(root, "input[name='email']").set_value("ada@example.com");
    find::<HtmlTextAreaElement>(root, "textarea[name='message']").set_value("Hello");
    find::<HtmlFormElement>(root, "form.contact-form")
        .request_submit()
        .unwrap();
}

fn scroll_window_to(y: f64) {
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, y);
    // Deliver synchronously instead of waiting for the browser's own event
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
}

fn find<T: JsCast>(root: &Element, selector: &str) -> T {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .dyn_into()
        .unwrap()
}

fn count(root: &Element, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

fn fire_input(input: &HtmlInputElement, value: &str) {
    input.set_value(value);
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn test_sections_render_in_page_order() {
    nexus_web::init(&SiteConfig::default());
    let container = fresh_container();
    let _app = mount_to(container.clone(), App);
    tick().await;

    let sections = container.query_selector_all("section[id]").unwrap();
    let ids: Vec<String> = (0..sections.length())
        .filter_map(|i| sections.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|el| el.id())
        .collect();
    assert_eq!(
        ids,
        ["about", "services", "case-studies", "team", "blog", "contact"]
    );

    assert_eq!(count(&container, "article.case-study"), 1);
    assert_eq!(count(&container, "article.case-study.active"), 1);
    assert_eq!(count(&container, ".timeline-entry"), 4);
}

#[wasm_bindgen_test]
async fn test_blog_search_filters_as_you_type() {
    let container = fresh_container();
    let _app = mount_to(container.clone(), App);
    tick().await;

    let search: HtmlInputElement = find(&container, "input[name='blog-search']");
    assert_eq!(count(&container, "article.blog-post"), 3);

    fire_input(&search, "tech");
    tick().await;
    assert_eq!(count(&container, "article.blog-post"), 1);
    assert_eq!(count(&container, "article.blog-post[data-post='1']"), 1);

    fire_input(&search, "TEAM");
    tick().await;
    assert_eq!(count(&container, "article.blog-post[data-post='3']"), 1);
    assert_eq!(count(&container, "article.blog-post"), 1);

    fire_input(&search, "zzz");
    tick().await;
    assert_eq!(count(&container, "article.blog-post"), 0);
    assert_eq!(count(&container, ".blog-empty"), 1);

    fire_input(&search, "");
    tick().await;
    assert_eq!(count(&container, "article.blog-post"), 3);
    assert_eq!(count(&container, ".blog-empty"), 0);
}

#[wasm_bindgen_test]
async fn test_mobile_menu_opens_and_link_closes_it() {
    let container = fresh_container();
    let _app = mount_to(container.clone(), App);
    tick().await;

    let toggle: HtmlElement = find(&container, "button[aria-label='Toggle menu']");
    assert_eq!(count(&container, ".mobile-menu"), 0);

    toggle.click();
    tick().await;
    assert_eq!(count(&container, ".mobile-menu"), 1);
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));

    let link: HtmlElement = find(&container, ".mobile-menu a[href='#team']");
    link.click();
    tick().await;
    assert_eq!(count(&container, ".mobile-menu"), 0);

    toggle.click();
    tick().await;
    toggle.click();
    tick().await;
    assert_eq!(count(&container, ".mobile-menu"), 0);
}

#[wasm_bindgen_test]
async fn test_contact_submit_shows_one_acknowledgement() {
    let container = fresh_container();
    let _app = mount_to(container.clone(), App);
    tick().await;

    fill_and_submit_contact(&container);
    tick().await;

    assert_eq!(count(&container, ".notice"), 1);
    let message: HtmlElement = find(&container, ".notice .notice-message");
    assert_eq!(message.text_content().as_deref(), Some(ACKNOWLEDGEMENT));

    // Form is cleared after acknowledging
    let email: HtmlInputElement = find(&container, "input[name='email']");
    assert_eq!(email.value(), "");
}

#[wasm_bindgen_test]
async fn test_inert_controls_do_nothing() {
    let container = fresh_container();
    let _app = mount_to(container.clone(), App);
    tick().await;

    let newsletter: HtmlElement = find(&container, ".newsletter button");
    assert_eq!(newsletter.get_attribute("type").as_deref(), Some("button"));
    newsletter.click();

    let join: HtmlElement = find(&container, "#team button.join-team");
    assert_eq!(join.get_attribute("type").as_deref(), Some("button"));
    join.click();

    tick().await;
    assert_eq!(count(&container, ".notice"), 0);
}

#[wasm_bindgen_test]
async fn test_navbar_compacts_past_threshold_on_scroll() {
    let container = fresh_container();
    container.set_attribute("style", "min-height: 5000px").unwrap();
    let _app = mount_to(container.clone(), App);
    tick().await;

    let nav: Element = find(&container, "nav");
    assert_eq!(nav.get_attribute("data-compact").as_deref(), Some("false"));

    scroll_window_to(21.0);
    tick().await;
    assert_eq!(nav.get_attribute("data-compact").as_deref(), Some("true"));

    scroll_window_to(20.0);
    tick().await;
    assert_eq!(nav.get_attribute("data-compact").as_deref(), Some("false"));

    scroll_window_to(0.0);
}

#[wasm_bindgen_test]
async fn test_acknowledgement_dismisses_itself() {
    let container = fresh_container();
    let config = config_with_duration(50);
    let _app = mount_to(container.clone(), move || {
        provide_context(AppState::new(&config));
        view! {
            <NoticeHost />
            <ContactSection />
        }
    });
    tick().await;

    fill_and_submit_contact(&container);
    tick().await;
    assert_eq!(count(&container, ".notice"), 1);

    sleep(150).await;
    assert_eq!(count(&container, ".notice"), 0);
}

#[wasm_bindgen_test]
async fn test_each_timer_dismisses_only_its_own_notice() {
    let container = fresh_container();
    let config = config_with_duration(200);
    let _app = mount_to(container.clone(), move || {
        provide_context(AppState::new(&config));
        view! {
            <NoticeHost />
            <ContactSection />
        }
    });
    tick().await;

    fill_and_submit_contact(&container);
    sleep(100).await;
    fill_and_submit_contact(&container);
    tick().await;
    assert_eq!(count(&container, ".notice"), 2);

    // First timer has fired, second has not
    sleep(150).await;
    assert_eq!(count(&container, ".notice"), 1);
    assert_eq!(count(&container, ".notice[data-notice-id='notice-1']"), 1);

    sleep(150).await;
    assert_eq!(count(&container, ".notice"), 0);
}

#[wasm_bindgen_test]
async fn test_notice_style_follows_level_and_dismiss_button_works() {
    let container = fresh_container();
    let state = AppState::new(&config_with_duration(60_000));
    let _app = mount_to(container.clone(), move || {
        provide_context(state);
        view! { <NoticeHost /> }
    });
    tick().await;

    state
        .notices
        .post(|queue| queue.push(NoticeLevel::Info, "Heads up"))
        .unwrap();
    tick().await;
    assert_eq!(count(&container, ".notice.notice-info"), 1);
    assert_eq!(count(&container, ".notice.notice-success"), 0);

    let dismiss: HtmlElement = find(&container, ".notice button[aria-label='Dismiss']");
    dismiss.click();
    tick().await;
    assert_eq!(count(&container, ".notice"), 0);
}
