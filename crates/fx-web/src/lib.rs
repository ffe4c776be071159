#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod cursor;
mod dom;
mod floating;
mod menu;
mod randomizer;
mod scroll;
mod settings;
mod smoke;
mod theme;

use theme::Theme;

thread_local! {
    static THEME: RefCell<Option<Rc<Theme>>> = const { RefCell::new(None) };
}

fn current_theme() -> Option<Rc<Theme>> {
    THEME.with(|t| t.borrow().clone())
}

/// Build and attach the theme once the DOM is parsed.
fn boot() {
    if current_theme().is_some() {
        return;
    }
    let Some(document) = dom::window_document() else {
        log::error!("boot: no document");
        return;
    };
    let theme = Rc::new(Theme::new(settings::load()));
    THEME.with(|t| *t.borrow_mut() = Some(theme.clone()));
    theme.attach(&document);
}

fn on_content_ready(document: &web::Document) {
    if document.ready_state() == "loading" {
        let ready = Closure::once(boot);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref());
        ready.forget();
    } else {
        boot();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("mulholland-fx starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    on_content_ready(&document);
    Ok(())
}

/// Stop the smoke animation loop. Returns false if it was not running.
#[wasm_bindgen]
pub fn stop_smoke() -> bool {
    current_theme().map(|t| t.stop_smoke()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn smoke_running() -> bool {
    current_theme().map(|t| t.smoke_running()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn menu_unlocked() -> bool {
    current_theme().map(|t| t.menu_unlocked()).unwrap_or(false)
}
