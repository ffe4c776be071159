use crate::dom;
use fx_core::InitGuard;
use web_sys as web;

const HOVER_TARGETS: [&str; 3] = ["a", "button", ".reveal"];

/// A decorative cursor that trails the pointer; off on touch devices.
#[derive(Default)]
pub struct CustomCursor {
    guard: InitGuard,
}

impl CustomCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, document: &web::Document) -> anyhow::Result<bool> {
        if !self.guard.claim() {
            return Ok(false);
        }
        if dom::window_has("ontouchstart") {
            log::debug!("[cursor] touch device; keeping the native cursor");
            return Ok(false);
        }
        let cursor = dom::create(document, "div", "custom-cursor")?;
        dom::append_to_body(&cursor)?;

        let follower = cursor.clone();
        dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
            dom::set_style(&follower, "left", &format!("{}px", ev.client_x()));
            dom::set_style(&follower, "top", &format!("{}px", ev.client_y()));
        });

        for selector in HOVER_TARGETS {
            for el in dom::query_all(document, selector) {
                let on = cursor.clone();
                dom::listen(&el, "mouseenter", move |_: web::Event| dom::add_class(&on, "active"));
                let off = cursor.clone();
                dom::listen(&el, "mouseleave", move |_: web::Event| {
                    dom::remove_class(&off, "active")
                });
            }
        }
        Ok(true)
    }
}
