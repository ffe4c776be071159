use crate::dom;
use fx_core::scroll::{
    destination_allows_transition, parallax_speed, parallax_transform, transition_href, ClickInfo,
    LinkInfo, RevealStrategy, UrlParts,
};
use fx_core::{scroll_ratio, Gradient, InitGuard, PAGE_TRANSITION_DELAY_MS, REVEAL_THRESHOLD};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Body background follows scroll progress through a gradient.
pub struct ColorTransition {
    guard: InitGuard,
    gradient: Gradient,
}

impl ColorTransition {
    pub fn new(gradient: Gradient) -> Self {
        Self {
            guard: InitGuard::new(),
            gradient,
        }
    }

    pub fn attach(&self, document: &web::Document, reduced_motion: bool) -> anyhow::Result<bool> {
        if !self.guard.claim() || reduced_motion {
            return Ok(false);
        }
        let body = dom::body()?;
        let root = document
            .document_element()
            .ok_or_else(|| anyhow::anyhow!("no document element"))?;
        let gradient = self.gradient.clone();
        let apply = move || {
            let (_, viewport_h) = dom::viewport_size();
            let ratio = scroll_ratio(dom::scroll_y(), f64::from(root.scroll_height()), viewport_h);
            let color = gradient.color_at(ratio).to_string();
            let _ = body.style().set_property("background-color", &color);
        };
        apply();
        if let Some(window) = web::window() {
            dom::listen_passive(&window, "scroll", apply);
        }
        Ok(true)
    }
}

/// Reveal-on-scroll, parallax and animated page transitions.
pub struct ScrollEffects {
    guard: InitGuard,
}

impl Default for ScrollEffects {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollEffects {
    pub fn new() -> Self {
        Self {
            guard: InitGuard::new(),
        }
    }

    pub fn attach(&self, document: &web::Document, reduced_motion: bool) -> anyhow::Result<bool> {
        if !self.guard.claim() {
            return Ok(false);
        }
        let observer_supported = dom::window_has("IntersectionObserver");
        wire_reveals(document, RevealStrategy::choose(observer_supported, reduced_motion));
        if reduced_motion {
            log::debug!("[scroll] reduced motion preferred; parallax and transitions off");
            return Ok(true);
        }
        wire_parallax(document);
        wire_page_transition(document)?;
        Ok(true)
    }
}

fn reveal_all(elements: &[web::Element]) {
    for el in elements {
        dom::add_class(el, "visible");
    }
}

fn wire_reveals(document: &web::Document, strategy: RevealStrategy) {
    let reveals = dom::query_all(document, ".reveal");
    if strategy == RevealStrategy::Immediate {
        reveal_all(&reveals);
        return;
    }
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::add_class(&target, "visible");
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for el in &reveals {
                observer.observe(el);
            }
            callback.forget();
        }
        Err(e) => {
            log::debug!("[scroll] IntersectionObserver failed ({:?}); revealing all", e);
            reveal_all(&reveals);
        }
    }
}

fn wire_parallax(document: &web::Document) {
    let layers: Vec<(web::Element, f64)> = dom::query_all(document, "[data-parallax]")
        .into_iter()
        .map(|el| {
            let speed = parallax_speed(el.get_attribute("data-parallax").as_deref());
            (el, speed)
        })
        .collect();
    if layers.is_empty() {
        return;
    }
    let apply = move || {
        let top = dom::scroll_y();
        for (el, speed) in &layers {
            dom::set_style(el, "transform", &parallax_transform(top, *speed));
        }
    };
    apply();
    if let Some(window) = web::window() {
        dom::listen_passive(&window, "scroll", apply);
    }
}

fn url_parts(url: &web::Url) -> UrlParts {
    UrlParts {
        origin: url.origin(),
        pathname: url.pathname(),
        search: url.search(),
        hash: url.hash(),
    }
}

fn link_info(link: &web::Element) -> LinkInfo {
    LinkInfo {
        href: link.get_attribute("href"),
        use_ajax: link.class_list().contains("use-ajax"),
        download: link.has_attribute("download"),
        target: link.get_attribute("target"),
        no_transition: link.has_attribute("data-no-transition"),
    }
}

/// Resolve the destination of an intercepted click, if it deserves a fade.
fn transition_destination(ev: &web::MouseEvent, here: &str) -> Option<String> {
    let click = ClickInfo {
        default_prevented: ev.default_prevented(),
        button: ev.button(),
        meta: ev.meta_key(),
        ctrl: ev.ctrl_key(),
        shift: ev.shift_key(),
        alt: ev.alt_key(),
    };
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let link = target.closest("a").ok().flatten()?;
    let info = link_info(&link);
    let href = transition_href(&click, &info)?;
    let dest = web::Url::new_with_base(href, here).ok()?;
    let current = web::Url::new(here).ok()?;
    destination_allows_transition(&url_parts(&dest), &url_parts(&current)).then(|| dest.href())
}

fn wire_page_transition(document: &web::Document) -> anyhow::Result<()> {
    let overlay = dom::create(document, "div", "page-transition")?;
    dom::append_to_body(&overlay)?;
    let body = dom::body()?;
    dom::listen(&body, "click", move |ev: web::MouseEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let Ok(here) = window.location().href() else {
            return;
        };
        let Some(dest) = transition_destination(&ev, &here) else {
            return;
        };
        ev.prevent_default();
        dom::add_class(&overlay, "active");
        dom::set_timeout(PAGE_TRANSITION_DELAY_MS, move || {
            if let Some(w) = web::window() {
                let _ = w.location().set_href(&dest);
            }
        });
    });
    Ok(())
}
