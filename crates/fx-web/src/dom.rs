use fx_core::REDUCED_MOTION_QUERY;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn body() -> anyhow::Result<web::HtmlElement> {
    window_document()
        .and_then(|d| d.body())
        .ok_or_else(|| anyhow::anyhow!("no document body"))
}

/// Create an element of `tag` with `class` (space-separated allowed).
pub fn create(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

pub fn append_to_body(el: &web::Element) -> anyhow::Result<()> {
    body()?
        .append_child(el)
        .map_err(|e| anyhow::anyhow!("append: {:?}", e))?;
    Ok(())
}

pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

#[inline]
pub fn remove_class(el: &web::Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Attach a page-lifetime listener.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Attach a passive page-lifetime listener (scroll handlers).
pub fn listen_passive(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Detach `el` once its CSS animation finishes.
pub fn remove_on_animation_end(el: &web::Element) {
    let target = el.clone();
    listen(el, "animationend", move |_: web::Event| target.remove());
}

pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    let closure = Closure::once(f);
    if let Some(w) = web::window() {
        let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        );
    }
    closure.forget();
}

pub fn set_interval(period_ms: i32, mut f: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || f()) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        let _ = w.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        );
    }
    closure.forget();
}

pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// `key in window`, used for capability probes.
pub fn window_has(key: &str) -> bool {
    web::window()
        .map(|w| js_sys::Reflect::has(&w, &key.into()).unwrap_or(false))
        .unwrap_or(false)
}

/// Viewport size in CSS pixels.
pub fn viewport_size() -> (f64, f64) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}
