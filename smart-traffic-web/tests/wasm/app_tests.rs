use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;

use smart_traffic_web::app::App;
use smart_traffic_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_app() {
    smart_traffic_web::i18n::set_lang("en");
    Renderer::<App>::with_root(ensure_app_root()).render();
}

async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        let _ = dom::window().set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0);
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[wasm_bindgen_test]
async fn app_opens_on_prediction_tab() {
    render_app();
    next_frame().await;
    let doc = dom::document();
    assert!(doc.get_element_by_id("pred-origin").is_some());
    assert!(doc.get_element_by_id(smart_traffic_web::a11y::STATUS_REGION_ID).is_some());
}

#[wasm_bindgen_test]
async fn empty_prediction_shows_validation_message() {
    render_app();
    next_frame().await;
    let doc = dom::document();
    let submit = doc
        .query_selector(".prediction-form button[type='submit']")
        .expect("query submit")
        .expect("submit button exists")
        .dyn_into::<HtmlElement>()
        .expect("button is an element");
    submit.click();
    next_frame().await;
    let message = doc
        .query_selector(".validation-message")
        .expect("query message")
        .expect("validation message shown");
    assert!(
        message
            .text_content()
            .unwrap_or_default()
            .contains("source and destination")
    );
}

#[wasm_bindgen_test]
async fn routes_tab_shows_planner() {
    render_app();
    next_frame().await;
    let doc = dom::document();
    let tab = doc
        .get_element_by_id("tab-routes")
        .expect("routes tab")
        .dyn_into::<HtmlElement>()
        .expect("tab is an element");
    tab.click();
    next_frame().await;
    assert!(doc.get_element_by_id("find-routes").is_some());
    assert!(doc.get_element_by_id("traffic-alerts").is_some());
}

#[wasm_bindgen_test]
fn failing_alert_does_not_panic() {
    let win = dom::window();
    let original = js_sys::Reflect::get(&win, &"alert".into()).expect("read alert");
    let throwing = js_sys::Function::new_with_args("message", "throw new Error(message)");
    js_sys::Reflect::set(&win, &"alert".into(), &throwing).expect("stub alert");

    dom::alert("blocked");

    js_sys::Reflect::set(&win, &"alert".into(), &original).expect("restore alert");
}
