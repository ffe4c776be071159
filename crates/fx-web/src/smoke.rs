use crate::dom;
use fx_core::smoke::EDGE_COLOR;
use fx_core::{InitGuard, SmokeField, SmokeParams};
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const CANVAS_ID: &str = "smoke-canvas";
const CANVAS_CLASS: &str = "smoke-canvas";

/// Find `#smoke-canvas` or append a new one. Shared with the unlock menu.
pub fn ensure_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = match document.get_element_by_id(CANVAS_ID) {
        Some(el) => el,
        None => {
            let el = dom::create(document, "canvas", CANVAS_CLASS)?;
            el.set_id(CANVAS_ID);
            dom::append_to_body(&el)?;
            el
        }
    };
    // decorative layer: never steal clicks or drags
    dom::set_style(&el, "pointer-events", "none");
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", CANVAS_ID, e))
}

struct SmokeScene {
    field: SmokeField,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl SmokeScene {
    fn sync_size(&mut self) {
        let (w, h) = dom::viewport_size();
        self.canvas.set_width(w as u32);
        self.canvas.set_height(h as u32);
        self.field.resize(w as f32, h as f32);
    }

    fn frame(&mut self) {
        let w = f64::from(self.canvas.width());
        let h = f64::from(self.canvas.height());
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.field.step();
        for p in self.field.particles() {
            let (x, y, r) = (
                f64::from(p.position.x),
                f64::from(p.position.y),
                f64::from(p.radius),
            );
            let Ok(gradient) = self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
                continue;
            };
            let _ = gradient.add_color_stop(0.0, &p.center_color());
            let _ = gradient.add_color_stop(1.0, EDGE_COLOR);
            self.ctx.begin_path();
            #[allow(deprecated)]
            self.ctx.set_fill_style(&gradient);
            let _ = self.ctx.arc(x, y, r, 0.0, std::f64::consts::TAU);
            self.ctx.fill();
        }
    }
}

struct LoopInner {
    running: Cell<bool>,
    frame_id: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopInner {
    fn schedule(&self) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(tick) = self.tick.borrow().as_ref() {
            self.frame_id
                .set(w.request_animation_frame(tick.as_ref().unchecked_ref()).ok());
        }
    }
}

/// Owner of a running animation-frame loop.
pub struct SmokeHandle {
    inner: Rc<LoopInner>,
}

impl SmokeHandle {
    fn start(scene: Rc<RefCell<SmokeScene>>) -> Self {
        let inner = Rc::new(LoopInner {
            running: Cell::new(true),
            frame_id: Cell::new(None),
            tick: RefCell::new(None),
        });
        let weak: Weak<LoopInner> = Rc::downgrade(&inner);
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if !inner.running.get() {
                return;
            }
            scene.borrow_mut().frame();
            inner.schedule();
        }) as Box<dyn FnMut()>));
        inner.schedule();
        Self { inner }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    /// Cancel the pending frame and release the loop. Idempotent.
    pub fn stop(&self) -> bool {
        if !self.inner.running.replace(false) {
            return false;
        }
        if let (Some(w), Some(id)) = (web::window(), self.inner.frame_id.take()) {
            let _ = w.cancel_animation_frame(id);
        }
        self.inner.tick.borrow_mut().take();
        true
    }
}

/// Rising smoke behind the page content.
pub struct SmokeEffect {
    guard: InitGuard,
    params: SmokeParams,
    rng: RefCell<Option<StdRng>>,
    handle: RefCell<Option<SmokeHandle>>,
}

impl SmokeEffect {
    pub fn new(params: SmokeParams, rng: StdRng) -> Self {
        Self {
            guard: InitGuard::new(),
            params,
            rng: RefCell::new(Some(rng)),
            handle: RefCell::new(None),
        }
    }

    pub fn attach(&self, document: &web::Document, reduced_motion: bool) -> anyhow::Result<bool> {
        if !self.guard.claim() {
            return Ok(false);
        }
        if reduced_motion {
            log::debug!("[smoke] reduced motion preferred; not animating");
            return Ok(false);
        }
        let rng = self
            .rng
            .borrow_mut()
            .take()
            .ok_or_else(|| anyhow::anyhow!("smoke rng already consumed"))?;
        let canvas = ensure_canvas(document)?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let (w, h) = dom::viewport_size();
        let field = SmokeField::new(w as f32, h as f32, self.params.clone(), rng);
        let scene = Rc::new(RefCell::new(SmokeScene { field, canvas, ctx }));
        scene.borrow_mut().sync_size();

        if let Some(window) = web::window() {
            let scene_resize = scene.clone();
            dom::listen(&window, "resize", move |_: web::Event| {
                scene_resize.borrow_mut().sync_size();
            });
        }

        *self.handle.borrow_mut() = Some(SmokeHandle::start(scene));
        log::info!("[smoke] {} particles started", self.params.particle_count);
        Ok(true)
    }

    /// Tear the loop down; false if it was not running.
    pub fn stop(&self) -> bool {
        self.handle
            .borrow()
            .as_ref()
            .map(SmokeHandle::stop)
            .unwrap_or(false)
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .borrow()
            .as_ref()
            .is_some_and(SmokeHandle::is_running)
    }
}
