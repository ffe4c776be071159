use crate::audio::AmbientAudio;
use crate::cursor::CustomCursor;
use crate::dom;
use crate::floating::FloatingWords;
use crate::menu::UnlockMenu;
use crate::randomizer::{Randomizer, Variations};
use crate::scroll::{ColorTransition, ScrollEffects};
use crate::smoke::SmokeEffect;
use fx_core::{InitGuard, ThemeConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;
use web_sys as web;

/// Every page behavior, each owning its own init guard and random source.
pub struct Theme {
    guard: InitGuard,
    variations: Variations,
    randomizer: Randomizer,
    menu: UnlockMenu,
    smoke: SmokeEffect,
    color: ColorTransition,
    scroll: ScrollEffects,
    cursor: CustomCursor,
    floating: FloatingWords,
    audio: AmbientAudio,
}

fn log_outcome(name: &str, result: anyhow::Result<bool>) {
    match result {
        Ok(true) => log::debug!("[theme] {} attached", name),
        Ok(false) => log::debug!("[theme] {} skipped", name),
        Err(e) => log::error!("[theme] {} failed: {:?}", name, e),
    }
}

impl Theme {
    pub fn new(config: ThemeConfig) -> Self {
        let config = Rc::new(config);
        Self {
            guard: InitGuard::new(),
            variations: Variations::new(config.variations.clone(), StdRng::from_entropy()),
            randomizer: Randomizer::new(config.clone(), StdRng::from_entropy()),
            menu: UnlockMenu::new(config.base_path.clone()),
            smoke: SmokeEffect::new(config.smoke.clone(), StdRng::from_entropy()),
            color: ColorTransition::new(config.gradient.clone()),
            scroll: ScrollEffects::new(),
            cursor: CustomCursor::new(),
            floating: FloatingWords::new(config.floating_messages.clone(), StdRng::from_entropy()),
            audio: AmbientAudio::new(config, StdRng::from_entropy()),
        }
    }

    /// Wire everything once. Failures stay local to the behavior that hit them.
    pub fn attach(&self, document: &web::Document) -> bool {
        if !self.guard.claim() {
            return false;
        }
        let reduced_motion = dom::prefers_reduced_motion();
        log::info!("[theme] attaching (reduced_motion={})", reduced_motion);
        log_outcome("variations", self.variations.attach().map(|v| v.is_some()));
        log_outcome("randomizer", self.randomizer.attach(document));
        log_outcome("menu", self.menu.attach(document));
        log_outcome("smoke", self.smoke.attach(document, reduced_motion));
        log_outcome("color", self.color.attach(document, reduced_motion));
        log_outcome("scroll", self.scroll.attach(document, reduced_motion));
        log_outcome("cursor", self.cursor.attach(document));
        log_outcome("floating", Ok(self.floating.attach(reduced_motion)));
        log_outcome("audio", self.audio.attach(document));
        true
    }

    pub fn stop_smoke(&self) -> bool {
        self.smoke.stop()
    }

    pub fn smoke_running(&self) -> bool {
        self.smoke.is_running()
    }

    pub fn menu_unlocked(&self) -> bool {
        self.menu.is_unlocked()
    }
}
