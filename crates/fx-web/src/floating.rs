use crate::dom;
use fx_core::floating::FloatingText;
use fx_core::{
    InitGuard, FLOATING_SEED_COUNT, FLOATING_SEED_STAGGER_MS, FLOATING_SPAWN_INTERVAL_MS,
};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;

struct Spawner {
    messages: Vec<String>,
    rng: StdRng,
}

impl Spawner {
    fn spawn(&mut self) -> anyhow::Result<()> {
        let Some(text) = FloatingText::random(&self.messages, &mut self.rng) else {
            return Ok(());
        };
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let span = dom::create(&document, "span", "floating-text")?;
        span.set_text_content(Some(&text.message));
        dom::add_class(&span, text.direction.class_name());
        dom::set_style(&span, "font-size", &text.font_size_css());
        dom::set_style(&span, "opacity", &text.opacity.to_string());
        dom::set_style(&span, text.direction.offset_property(), &text.offset_css());
        dom::set_style(&span, "animation-duration", &text.duration_css());
        dom::append_to_body(&span)?;
        dom::remove_on_animation_end(&span);
        Ok(())
    }
}

/// Words drifting across the viewport at random.
pub struct FloatingWords {
    guard: InitGuard,
    spawner: Rc<RefCell<Spawner>>,
}

impl FloatingWords {
    pub fn new(messages: Vec<String>, rng: StdRng) -> Self {
        Self {
            guard: InitGuard::new(),
            spawner: Rc::new(RefCell::new(Spawner { messages, rng })),
        }
    }

    pub fn attach(&self, reduced_motion: bool) -> bool {
        if !self.guard.claim() || reduced_motion {
            return false;
        }
        let spawn = {
            let spawner = self.spawner.clone();
            move || {
                if let Err(e) = spawner.borrow_mut().spawn() {
                    log::error!("[floating] spawn failed: {:?}", e);
                }
            }
        };
        for i in 0..FLOATING_SEED_COUNT {
            dom::set_timeout(i as i32 * FLOATING_SEED_STAGGER_MS, spawn.clone());
        }
        dom::set_interval(FLOATING_SPAWN_INTERVAL_MS, spawn);
        true
    }
}
