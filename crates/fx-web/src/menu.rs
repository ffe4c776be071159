use crate::dom;
use crate::smoke;
use fx_core::menu::{key_src, UnlockState, MENU_ITEMS};
use fx_core::{InitGuard, TRANSPARENT_PIXEL};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Drag the key onto the lock to reveal the floating navigation.
pub struct UnlockMenu {
    guard: InitGuard,
    base_path: String,
    state: Rc<Cell<UnlockState>>,
}

impl UnlockMenu {
    pub fn new(base_path: String) -> Self {
        Self {
            guard: InitGuard::new(),
            base_path,
            state: Rc::new(Cell::new(UnlockState::Locked)),
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.state.get().is_unlocked()
    }

    pub fn attach(&self, document: &web::Document) -> anyhow::Result<bool> {
        if !self.guard.claim() {
            return Ok(false);
        }
        smoke::ensure_canvas(document)?;
        let nav = self.build_nav(document)?;

        let lock = dom::create(document, "div", "")?;
        lock.set_id("lock");
        lock.set_text_content(Some("Place key"));
        dom::append_to_body(&lock)?;

        let key: web::HtmlImageElement = web::HtmlImageElement::new()
            .map_err(|e| anyhow::anyhow!("key image: {:?}", e))?;
        key.set_id("key");
        key.set_src(&key_src(&self.base_path));
        key.set_alt("Key");
        key.set_draggable(true);
        dom::append_to_body(&key)?;

        wire_key_drag(&key);
        self.wire_lock(&lock, &nav, &key);
        log::info!("[menu] unlock menu ready with {} items", MENU_ITEMS.len());
        Ok(true)
    }

    fn build_nav(&self, document: &web::Document) -> anyhow::Result<web::Element> {
        let nav = dom::create(document, "nav", "floating-menu hidden")?;
        nav.set_id("mainNav");
        let list = dom::create(document, "ul", "")?;
        for item in &MENU_ITEMS {
            let li = dom::create(document, "li", "nav-item")?;
            let _ = li.set_attribute("data-icon", item.icon);
            let link = dom::create(document, "a", "nav-link")?;
            let _ = link.set_attribute("href", item.href);
            link.set_text_content(Some(item.title));

            let icon = web::HtmlImageElement::new()
                .map_err(|e| anyhow::anyhow!("icon image: {:?}", e))?;
            icon.set_src(&item.icon_src(&self.base_path));
            icon.set_alt(&item.icon_alt());
            let _ = link.prepend_with_node_1(&icon);

            let _ = li.append_child(&link);
            let _ = list.append_child(&li);
        }
        let _ = nav.append_child(&list);
        dom::append_to_body(&nav)?;
        Ok(nav)
    }

    fn wire_lock(&self, lock: &web::Element, nav: &web::Element, key: &web::HtmlImageElement) {
        dom::listen(lock, "dragover", |ev: web::DragEvent| ev.prevent_default());

        let target = lock.clone();
        dom::listen(lock, "dragenter", move |ev: web::DragEvent| {
            ev.prevent_default();
            dom::add_class(&target, "dragover");
        });

        let target = lock.clone();
        dom::listen(lock, "dragleave", move |_: web::DragEvent| {
            dom::remove_class(&target, "dragover");
        });

        let state = self.state.clone();
        let (lock_el, nav, key) = (lock.clone(), nav.clone(), key.clone());
        dom::listen(lock, "drop", move |ev: web::DragEvent| {
            ev.prevent_default();
            dom::remove_class(&lock_el, "dragover");
            let mut s = state.get();
            if !s.unlock() {
                return;
            }
            state.set(s);
            dom::remove_class(&nav, "hidden");
            dom::add_class(&nav, "show");
            key.remove();
            lock_el.remove();
            log::info!("[menu] unlocked");
        });
    }
}

fn wire_key_drag(key: &web::HtmlImageElement) {
    let dragged = key.clone();
    dom::listen(key, "dragstart", move |ev: web::DragEvent| {
        // class is applied after the browser snapshots the drag image
        let later = dragged.clone();
        dom::set_timeout(0, move || dom::add_class(&later, "dragging"));
        if let (Some(dt), Ok(ghost)) = (ev.data_transfer(), web::HtmlImageElement::new()) {
            ghost.set_src(TRANSPARENT_PIXEL);
            dt.set_drag_image(&ghost, 0, 0);
        }
    });
    let dropped = key.clone();
    dom::listen(key, "dragend", move |_: web::DragEvent| dom::remove_class(&dropped, "dragging"));
}
