use crate::dom;
use fx_core::playback::{clamp_volume, mute_label};
use fx_core::{
    ImpulseResponse, InitGuard, PlaybackOutcome, ThemeConfig, TrackSelector,
    DEFAULT_AMBIENT_VOLUME, HOVER_SOUND, REVERB_WET_GAIN, TRANSITION_SOUND, VOLUME_STEP,
    WHISPER_SOUND,
};
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

const CONTROLLER_STYLE: [(&str, &str); 9] = [
    ("position", "fixed"),
    ("bottom", "1rem"),
    ("left", "1rem"),
    ("background", "rgba(0,0,0,0.6)"),
    ("color", "#fff"),
    ("padding", "0.5rem"),
    ("border-radius", "4px"),
    ("font-size", "0.9rem"),
    ("z-index", "10000"),
];

/// Live audio objects, built on the first click.
struct AudioRig {
    ctx: web::AudioContext,
    ambient: web::HtmlAudioElement,
    hover: web::HtmlAudioElement,
    transition: web::HtmlAudioElement,
    whisper: web::HtmlAudioElement,
}

struct AudioState {
    rig: RefCell<Option<AudioRig>>,
    selector: RefCell<TrackSelector>,
    volume: Cell<f64>,
    muted: Cell<bool>,
}

/// Ambient track through a synthesized reverb, plus effect sounds and a
/// small mute/volume controller.
pub struct AmbientAudio {
    guard: InitGuard,
    config: Rc<ThemeConfig>,
    rng: Rc<RefCell<StdRng>>,
    state: Rc<AudioState>,
}

impl AmbientAudio {
    pub fn new(config: Rc<ThemeConfig>, rng: StdRng) -> Self {
        let selector = config.audio.selector();
        Self {
            guard: InitGuard::new(),
            config,
            rng: Rc::new(RefCell::new(rng)),
            state: Rc::new(AudioState {
                rig: RefCell::new(None),
                selector: RefCell::new(selector),
                volume: Cell::new(DEFAULT_AMBIENT_VOLUME),
                muted: Cell::new(false),
            }),
        }
    }

    pub fn attach(&self, document: &web::Document) -> anyhow::Result<bool> {
        if !self.guard.claim() {
            return Ok(false);
        }
        self.build_controller(document)?;
        self.wire_first_click(document);
        self.wire_effect_sounds(document)?;
        log::info!("[audio] attached; waiting for first click");
        Ok(true)
    }

    fn build_controller(&self, document: &web::Document) -> anyhow::Result<()> {
        let controller = dom::create(document, "div", "audio-controller")?;
        for (prop, value) in CONTROLLER_STYLE {
            dom::set_style(&controller, prop, value);
        }
        let _ = controller.set_attribute("role", "region");
        let _ = controller.set_attribute("aria-label", "Audio controls");

        let mute_btn = dom::create(document, "button", "")?;
        mute_btn.set_text_content(Some(mute_label(false)));
        dom::set_style(&mute_btn, "margin-right", "0.5rem");
        {
            let state = self.state.clone();
            let btn = mute_btn.clone();
            dom::listen(&mute_btn, "click", move |_: web::Event| {
                let rig = state.rig.borrow();
                let Some(rig) = rig.as_ref() else {
                    return;
                };
                let muted = !state.muted.get();
                state.muted.set(muted);
                rig.ambient.set_muted(muted);
                btn.set_text_content(Some(mute_label(muted)));
            });
        }
        let _ = controller.append_child(&mute_btn);

        let slider: web::HtmlInputElement = dom::create(document, "input", "")?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("volume slider: {:?}", e))?;
        slider.set_type("range");
        slider.set_min("0");
        slider.set_max("1");
        slider.set_step(&VOLUME_STEP.to_string());
        slider.set_value(&DEFAULT_AMBIENT_VOLUME.to_string());
        let _ = slider.set_attribute("aria-label", "Volume");
        {
            let state = self.state.clone();
            let input = slider.clone();
            dom::listen(&slider, "input", move |_: web::Event| {
                let rig = state.rig.borrow();
                let Some(rig) = rig.as_ref() else {
                    return;
                };
                let volume = clamp_volume(input.value().parse().unwrap_or(DEFAULT_AMBIENT_VOLUME));
                state.volume.set(volume);
                rig.ambient.set_volume(volume);
            });
        }
        let _ = controller.append_child(&slider);
        dom::append_to_body(&controller)
    }

    fn wire_first_click(&self, document: &web::Document) {
        let handler: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let handler_self = handler.clone();
        let doc = document.clone();
        let config = self.config.clone();
        let rng = self.rng.clone();
        let state = self.state.clone();
        *handler.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(h) = handler_self.borrow().as_ref() {
                let _ = doc.remove_event_listener_with_callback("click", h.as_ref().unchecked_ref());
            }
            if state.rig.borrow().is_some() {
                return;
            }
            match build_rig(&config, &mut rng.borrow_mut(), &state) {
                Ok(rig) => {
                    let _ = rig.ctx.resume();
                    play_detached(rig.ambient.clone(), "ambient");
                    *state.rig.borrow_mut() = Some(rig);
                }
                // Missing Web Audio is expected on some hosts; stay silent.
                Err(e) => log::debug!("[audio] disabled: {:?}", e),
            }
        }) as Box<dyn FnMut()>));
        if let Some(h) = handler.borrow().as_ref() {
            let _ = document.add_event_listener_with_callback("click", h.as_ref().unchecked_ref());
        }
    }

    fn wire_effect_sounds(&self, document: &web::Document) -> anyhow::Result<()> {
        let state = self.state.clone();
        dom::listen(document, "mouseover", move |ev: web::MouseEvent| {
            let rig = state.rig.borrow();
            let Some(rig) = rig.as_ref() else {
                return;
            };
            if event_element(&ev).and_then(|el| el.closest("a, button").ok().flatten()).is_some() {
                rig.hover.set_current_time(0.0);
                play_detached(rig.hover.clone(), "hover");
            }
        });

        let state = self.state.clone();
        dom::listen(document, "transitionstart", move |ev: web::Event| {
            let rig = state.rig.borrow();
            let Some(rig) = rig.as_ref() else {
                return;
            };
            if event_element(&ev).is_some_and(|el| el.class_list().contains("page-transition")) {
                play_detached(rig.transition.clone(), "transition");
            }
        });

        let state = self.state.clone();
        let body = dom::body()?;
        dom::listen(&body, "animationstart", move |ev: web::Event| {
            let rig = state.rig.borrow();
            let Some(rig) = rig.as_ref() else {
                return;
            };
            if event_element(&ev).is_some_and(|el| el.class_list().contains("silhouette")) {
                rig.whisper.set_current_time(0.0);
                play_detached(rig.whisper.clone(), "whisper");
            }
        });
        Ok(())
    }
}

fn event_element(ev: &web::Event) -> Option<web::Element> {
    ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
}

fn build_rig(
    config: &ThemeConfig,
    rng: &mut StdRng,
    state: &Rc<AudioState>,
) -> anyhow::Result<AudioRig> {
    let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("AudioContext: {:?}", e))?;
    let active = state.selector.borrow().active().to_string();
    let ambient = web::HtmlAudioElement::new_with_src(&active)
        .map_err(|e| anyhow::anyhow!("ambient element: {:?}", e))?;
    ambient.set_cross_origin(Some("anonymous"));
    ambient.set_loop(true);
    ambient.set_volume(state.volume.get());
    dom::set_style(&ambient, "display", "none");
    wire_fallback(&ambient, state);
    dom::append_to_body(&ambient)?;

    // media element -> convolver -> wet -> destination
    let source = ctx
        .create_media_element_source(&ambient)
        .map_err(|e| anyhow::anyhow!("MediaElementSource: {:?}", e))?;
    let reverb =
        web::ConvolverNode::new(&ctx).map_err(|e| anyhow::anyhow!("ConvolverNode: {:?}", e))?;
    let impulse = ImpulseResponse::synthesize(ctx.sample_rate(), config.impulse, rng)?;
    reverb.set_buffer(Some(&impulse_buffer(&ctx, impulse)?));
    let wet = create_gain(&ctx, REVERB_WET_GAIN, "reverb wet")?;
    let _ = source.connect_with_audio_node(&reverb);
    let _ = reverb.connect_with_audio_node(&wet);
    let _ = wet.connect_with_audio_node(&ctx.destination());

    let effect = |relative: &str| {
        web::HtmlAudioElement::new_with_src(&config.asset(relative))
            .map_err(|e| anyhow::anyhow!("{}: {:?}", relative, e))
    };
    let rig = AudioRig {
        hover: effect(HOVER_SOUND)?,
        transition: effect(TRANSITION_SOUND)?,
        whisper: effect(WHISPER_SOUND)?,
        ambient,
        ctx,
    };
    log::info!(
        "[audio] reverb ready: {:.1}s decay={:.1} track={}",
        config.impulse.duration_sec,
        config.impulse.decay,
        active
    );
    Ok(rig)
}

/// Swap to the fallback track on the first load error only.
fn wire_fallback(ambient: &web::HtmlAudioElement, state: &Rc<AudioState>) {
    let state = state.clone();
    let el = ambient.clone();
    dom::listen(ambient, "error", move |_: web::Event| {
        let mut selector = state.selector.borrow_mut();
        match selector.on_load_error() {
            Some(next) => {
                log::debug!("[audio] track failed; falling back to {}", next);
                el.set_src(next);
                play_detached(el.clone(), "ambient fallback");
            }
            None => log::debug!("[audio] fallback track failed; giving up"),
        }
    });
}

fn impulse_buffer(ctx: &web::AudioContext, impulse: ImpulseResponse) -> anyhow::Result<web::AudioBuffer> {
    let sample_rate = impulse.sample_rate();
    let len = impulse.len() as u32;
    let mut channels = impulse.into_channels();
    let buffer = ctx
        .create_buffer(channels.len() as u32, len, sample_rate)
        .map_err(|e| anyhow::anyhow!("AudioBuffer: {:?}", e))?;
    for (i, data) in channels.iter_mut().enumerate() {
        let _ = buffer.copy_to_channel(data.as_mut_slice(), i as i32);
    }
    Ok(buffer)
}

fn create_gain(ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(ctx).map_err(|e| anyhow::anyhow!("{} GainNode: {:?}", label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

/// Start playback and report how it went.
pub async fn play(el: &web::HtmlMediaElement) -> PlaybackOutcome {
    let promise = match el.play() {
        Ok(p) => p,
        Err(_) => return PlaybackOutcome::LoadError,
    };
    match JsFuture::from(promise).await {
        Ok(_) => PlaybackOutcome::Started,
        Err(err) => {
            let name = err.dyn_ref::<web::DomException>().map(|e| e.name());
            PlaybackOutcome::from_rejection(name.as_deref())
        }
    }
}

/// Fire-and-forget playback; outcomes are only worth a debug line.
pub fn play_detached(el: web::HtmlAudioElement, label: &'static str) {
    spawn_local(async move {
        let outcome = play(&el).await;
        log::debug!("[audio] {} play: {:?}", label, outcome);
    });
}
