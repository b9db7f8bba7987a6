#![cfg(target_arch = "wasm32")]

use cosmic_wasm::page::device::{wants_performance_mode, PERFORMANCE_CLASS, REDUCED_MOTION_QUERY};
use cosmic_wasm::wasm::widgets::{
    CursorTrail, EasterEgg, Glitch, ImageViewer, PerformanceMode, ScrollReveal, SmoothScroll, Tabs,
};
use cosmic_wasm::wasm::{shutdown, App};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, KeyboardEventInit, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Fresh page fragment; anything the page-level app attached is torn down first.
fn fixture(html: &str) -> Element {
    shutdown();
    let doc = document();
    let root = doc.create_element("div").unwrap();
    root.set_inner_html(html);
    doc.body().unwrap().append_child(&root).unwrap();
    root
}

fn click(el: &Element) {
    el.dyn_ref::<HtmlElement>().unwrap().click();
}

fn key(doc: &Document, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    doc.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn tabs_switch_panels() {
    let root = fixture(
        r#"<button class="tab-btn active" data-tab="web">web</button>
           <button class="tab-btn" data-tab="games">games</button>
           <div class="projects-grid active" id="web"></div>
           <div class="projects-grid" id="games"></div>"#,
    );
    let doc = document();
    let _tabs = Tabs::start(&doc).unwrap();

    let games_btn = doc.query_selector("[data-tab=games]").unwrap().unwrap();
    click(&games_btn);

    assert!(games_btn.class_list().contains("active"));
    let web_btn = doc.query_selector("[data-tab=web]").unwrap().unwrap();
    assert!(!web_btn.class_list().contains("active"));
    assert!(doc.get_element_by_id("games").unwrap().class_list().contains("active"));
    assert!(!doc.get_element_by_id("web").unwrap().class_list().contains("active"));
    root.remove();
}

#[wasm_bindgen_test]
fn cursor_trail_is_capped() {
    let doc = document();
    let _root = fixture("");
    let window = web_sys::window().unwrap();
    let trail = CursorTrail::start(&window, &doc).unwrap();

    for i in 0..25 {
        let init = MouseEventInit::new();
        init.set_client_x(i);
        init.set_client_y(i);
        let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
        doc.dispatch_event(&event).unwrap();
    }

    assert_eq!(trail.live(), 20);
    assert_eq!(doc.query_selector_all(".cursor-trail").unwrap().length(), 20);
    assert!(doc.get_element_by_id("cursor-trail-style").is_some());
}

#[wasm_bindgen_test]
fn image_viewer_opens_and_closes() {
    let root = fixture(
        r#"<img class="project-screenshot" src="shot.png">
           <div id="imageViewer"><span class="image-viewer-close">x</span><img id="viewerImage"></div>"#,
    );
    let doc = document();
    let viewer = ImageViewer::start(&doc).unwrap();

    click(&doc.query_selector(".project-screenshot").unwrap().unwrap());
    assert!(viewer.is_open());
    let body = doc.body().unwrap();
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");

    key(&doc, "Escape");
    assert!(!viewer.is_open());
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "");

    click(&doc.query_selector(".project-screenshot").unwrap().unwrap());
    click(&doc.query_selector(".image-viewer-close").unwrap().unwrap());
    assert!(!viewer.is_open());
    root.remove();
}

#[wasm_bindgen_test]
fn image_viewer_closes_on_backdrop_only() {
    let root = fixture(
        r#"<img class="project-screenshot" src="shot.png">
           <div id="imageViewer"><span class="image-viewer-close">x</span><img id="viewerImage"></div>"#,
    );
    let doc = document();
    let viewer = ImageViewer::start(&doc).unwrap();
    let shot = doc.query_selector(".project-screenshot").unwrap().unwrap();

    click(&shot);
    // clicks on the image bubble up to the modal but must not close it
    click(&doc.get_element_by_id("viewerImage").unwrap());
    assert!(viewer.is_open());

    click(&doc.get_element_by_id("imageViewer").unwrap());
    assert!(!viewer.is_open());
    root.remove();
}

#[wasm_bindgen_test]
fn image_viewer_needs_its_modal() {
    let _root = fixture("");
    assert!(ImageViewer::start(&document()).is_err());
}

/// Cancelable, bubbling click; returns whether the default action survived.
fn cancelable_click(el: &Element) -> bool {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
    el.dispatch_event(&event).unwrap()
}

#[wasm_bindgen_test]
fn smooth_scroll_swallows_every_anchor() {
    let root = fixture(
        r##"<a id="to-target" href="#target">target</a>
            <a id="to-nowhere" href="#nowhere">nowhere</a>
            <a id="to-top" href="#">top</a>
            <div id="target"></div>"##,
    );
    let doc = document();
    let _scroll = SmoothScroll::start(&doc).unwrap();

    for id in ["to-target", "to-nowhere", "to-top"] {
        let anchor = doc.get_element_by_id(id).unwrap();
        assert!(!cancelable_click(&anchor), "{id} navigated");
    }
    root.remove();
}

#[wasm_bindgen_test]
fn scroll_reveal_shows_cards_in_view() {
    let root = fixture(
        r#"<div id="near" class="mission-card" style="position: fixed; top: 0; opacity: 0"></div>
           <div id="far" class="contact-card" style="position: fixed; top: 100000px; opacity: 0"></div>"#,
    );
    let doc = document();
    let window = web_sys::window().unwrap();
    let _reveal = ScrollReveal::start(&window, &doc).unwrap();

    let style = |id: &str| doc.get_element_by_id(id).unwrap().dyn_into::<HtmlElement>().unwrap().style();
    let near = style("near");
    assert_eq!(near.get_property_value("opacity").unwrap(), "1");
    let transform = near.get_property_value("transform").unwrap();
    assert!(transform.starts_with("translateY(0"), "{transform}");

    assert_eq!(style("far").get_property_value("opacity").unwrap(), "0");
    root.remove();
}

#[wasm_bindgen_test]
fn glitch_needs_a_headline() {
    let doc = document();
    let window = web_sys::window().unwrap();

    let _root = fixture("");
    assert!(!Glitch::start(&window, &doc).unwrap().is_active());

    let root = fixture(r#"<h1 class="glitch">title</h1>"#);
    assert!(Glitch::start(&window, &doc).unwrap().is_active());
    root.remove();
}

#[wasm_bindgen_test]
fn performance_mode_tags_the_body() {
    let _root = fixture("");
    let doc = document();
    let window = web_sys::window().unwrap();
    let body = doc.body().unwrap();
    body.class_list().remove_1(PERFORMANCE_CLASS).unwrap();

    let mode = PerformanceMode::start(&window, &doc).unwrap();

    let user_agent = window.navigator().user_agent().unwrap();
    let reduced_motion = window
        .match_media(REDUCED_MOTION_QUERY)
        .unwrap()
        .map(|mq| mq.matches())
        .unwrap_or(false);
    assert_eq!(mode.is_active(), wants_performance_mode(&user_agent, reduced_motion));
    assert_eq!(body.class_list().contains(PERFORMANCE_CLASS), mode.is_active());
}

#[wasm_bindgen_test]
fn konami_code_warps() {
    let _root = fixture("");
    let doc = document();
    let window = web_sys::window().unwrap();
    let _egg = EasterEgg::start(&window, &doc).unwrap();

    for k in cosmic_wasm::page::konami::KONAMI_CODE {
        key(&doc, k);
    }
    let animation = doc.body().unwrap().style().get_property_value("animation").unwrap();
    assert!(animation.contains("warpSpeed"), "{animation}");
    assert!(doc.get_element_by_id("warp-speed-style").is_some());
}

#[wasm_bindgen_test]
fn app_survives_a_bare_page() {
    let _root = fixture("");
    let window = web_sys::window().unwrap();
    let app = App::start(&window, &document());
    // no canvas on the test page
    assert!(!app.has_background());
    assert!(app.widget_names().contains(&"tabs"));
    assert!(!app.widget_names().contains(&"image viewer"));
    app.dispose();
}
