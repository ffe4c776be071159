use crate::dom;
use fx_core::randomizer::{hero_background, roll};
use fx_core::variation::{self, STYLE_QUERY_PARAM};
use fx_core::{InitGuard, ThemeConfig};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Random hero background, quote overlay and the occasional silhouette.
pub struct Randomizer {
    guard: InitGuard,
    config: Rc<ThemeConfig>,
    rng: RefCell<StdRng>,
}

impl Randomizer {
    pub fn new(config: Rc<ThemeConfig>, rng: StdRng) -> Self {
        Self {
            guard: InitGuard::new(),
            config,
            rng: RefCell::new(rng),
        }
    }

    pub fn attach(&self, document: &web::Document) -> anyhow::Result<bool> {
        if !self.guard.claim() {
            return Ok(false);
        }
        let rolled = roll(
            &self.config.images,
            &self.config.quotes,
            &mut *self.rng.borrow_mut(),
        );
        let Some(atmosphere) = rolled else {
            return Ok(false);
        };

        if let Some(root) = document
            .document_element()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        {
            let _ = root
                .style()
                .set_property("--hero-bg", &hero_background(&atmosphere.image));
        }

        let quote = dom::create(document, "div", "quote-overlay")?;
        quote.set_text_content(Some(&atmosphere.quote));
        dom::append_to_body(&quote)?;

        if atmosphere.show_silhouette {
            let sil = web::HtmlImageElement::new()
                .map_err(|e| anyhow::anyhow!("silhouette: {:?}", e))?;
            sil.set_class_name("silhouette");
            sil.set_src(&self.config.silhouette_src());
            dom::append_to_body(&sil)?;
            dom::remove_on_animation_end(&sil);
            log::debug!("[randomizer] silhouette summoned");
        }
        Ok(true)
    }
}

/// Applies a `theme-<variation>` class to the body.
pub struct Variations {
    guard: InitGuard,
    variations: Vec<String>,
    rng: RefCell<StdRng>,
}

impl Variations {
    pub fn new(variations: Vec<String>, rng: StdRng) -> Self {
        Self {
            guard: InitGuard::new(),
            variations,
            rng: RefCell::new(rng),
        }
    }

    pub fn attach(&self) -> anyhow::Result<Option<String>> {
        if !self.guard.claim() {
            return Ok(None);
        }
        let requested = requested_style();
        let Some(chosen) =
            variation::choose(&self.variations, requested.as_deref(), &mut *self.rng.borrow_mut())
        else {
            return Ok(None);
        };
        dom::add_class(&dom::body()?, &variation::body_class(chosen));
        log::info!("[variation] {}", chosen);
        Ok(Some(chosen.to_string()))
    }
}

fn requested_style() -> Option<String> {
    let search = web::window()?.location().search().ok()?;
    web::UrlSearchParams::new_with_str(&search)
        .ok()?
        .get(STYLE_QUERY_PARAM)
}
