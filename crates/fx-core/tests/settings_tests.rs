// Host-side tests for settings parsing and default resolution.

use fx_core::settings::{coerce_strings, normalize_base_path, DEFAULT_QUOTES};
use fx_core::{Gradient, ThemeSettings, MAX_IMPULSE_DURATION_SEC, MAX_PARTICLE_COUNT};
use serde_json::json;

#[test]
fn base_path_gets_both_slashes() {
    assert_eq!(normalize_base_path(Some("themes/custom/md")), "/themes/custom/md/");
    assert_eq!(normalize_base_path(Some("/themes/md/")), "/themes/md/");
    assert_eq!(normalize_base_path(Some("")), "");
    assert_eq!(normalize_base_path(None), "");
}

#[test]
fn empty_settings_resolve_to_defaults() {
    let cfg = ThemeSettings::from_json("{}").unwrap().resolve(Some("themes/md"));
    assert_eq!(cfg.base_path, "/themes/md/");
    assert_eq!(cfg.images.len(), 3);
    assert_eq!(cfg.images[0], "/themes/md/images/bg.theatre.png");
    assert_eq!(cfg.quotes.len(), DEFAULT_QUOTES.len());
    assert_eq!(cfg.variations, ["gothic", "nightmare", "dreamscape", "labyrinth"]);
    assert_eq!(cfg.gradient, Gradient::default());
    assert_eq!(cfg.audio.primary, None);
    assert_eq!(cfg.audio.fallback, "/themes/md/audio/ambient_hum.wav");
    assert_eq!(cfg.impulse.duration_sec, 5.0);
    assert_eq!(cfg.impulse.decay, 3.5);
    assert_eq!(cfg.smoke.particle_count, 30);
}

#[test]
fn settings_theme_path_beats_host_path() {
    let cfg = ThemeSettings::from_json(r#"{"themePath":"/a/b"}"#)
        .unwrap()
        .resolve(Some("other"));
    assert_eq!(cfg.base_path, "/a/b/");
    assert_eq!(cfg.silhouette_src(), "/a/b/images/silhouette.png");
}

#[test]
fn overrides_are_coerced_and_filtered() {
    let raw = json!({
        "randomElements": {
            "images": ["/x.png", null, "", 42, false],
            "quotes": []
        }
    });
    let cfg = ThemeSettings::from_json(&raw.to_string()).unwrap().resolve(None);
    assert_eq!(cfg.images, ["/x.png", "42"]);
    assert_eq!(cfg.quotes.len(), DEFAULT_QUOTES.len());
}

#[test]
fn all_empty_overrides_fall_back() {
    let raw = json!({ "randomElements": { "images": [null, ""] } });
    let cfg = ThemeSettings::from_json(&raw.to_string()).unwrap().resolve(None);
    assert_eq!(cfg.images[0], "images/bg.theatre.png");
}

#[test]
fn invalid_color_stops_fall_back_to_default() {
    let raw = json!({ "colorStops": ["#000000", "nope"] });
    let cfg = ThemeSettings::from_json(&raw.to_string()).unwrap().resolve(None);
    assert_eq!(cfg.gradient, Gradient::default());
}

#[test]
fn custom_color_stops_are_used() {
    let raw = json!({ "colorStops": ["#000000", "#ffffff"] });
    let cfg = ThemeSettings::from_json(&raw.to_string()).unwrap().resolve(None);
    assert_eq!(cfg.gradient.stops().len(), 2);
}

#[test]
fn tuning_overrides_apply_when_positive() {
    let raw = json!({
        "reverb": { "duration": 2.5, "decay": -1.0 },
        "smoke": { "particleCount": 12 },
        "audioTrack": "https://cdn.example/track.mp3"
    });
    let cfg = ThemeSettings::from_json(&raw.to_string()).unwrap().resolve(None);
    assert_eq!(cfg.impulse.duration_sec, 2.5);
    assert_eq!(cfg.impulse.decay, 3.5);
    assert_eq!(cfg.smoke.particle_count, 12);
    assert_eq!(cfg.audio.primary.as_deref(), Some("https://cdn.example/track.mp3"));
}

#[test]
fn blank_audio_track_is_ignored() {
    let cfg = ThemeSettings::from_json(r#"{"audioTrack":"  "}"#).unwrap().resolve(None);
    assert_eq!(cfg.audio.primary, None);
}

#[test]
fn unknown_keys_are_ignored() {
    assert!(ThemeSettings::from_json(r#"{"somethingElse": 1}"#).is_ok());
}

#[test]
fn malformed_json_is_an_error() {
    assert!(ThemeSettings::from_json("{").is_err());
}

#[test]
fn mistyped_key_falls_back_alone() {
    let cfg = ThemeSettings::from_json(r#"{"colorStops": 3, "themePath": "/t"}"#)
        .unwrap()
        .resolve(None);
    assert_eq!(cfg.gradient, Gradient::default());
    assert_eq!(cfg.base_path, "/t/");
}

#[test]
fn null_sections_keep_the_theme_path() {
    let raw = json!({
        "themePath": "/themes/md",
        "randomElements": null,
        "reverb": null,
        "smoke": null
    });
    let cfg = ThemeSettings::from_json(&raw.to_string()).unwrap().resolve(None);
    assert_eq!(cfg.base_path, "/themes/md/");
    assert_eq!(cfg.images[0], "/themes/md/images/bg.theatre.png");
    assert_eq!(cfg.smoke.particle_count, 30);
}

#[test]
fn mistyped_reverb_value_keeps_its_sibling() {
    let raw = json!({ "reverb": { "duration": "5", "decay": 2.0 } });
    let cfg = ThemeSettings::from_json(&raw.to_string()).unwrap().resolve(None);
    assert_eq!(cfg.impulse.duration_sec, 5.0);
    assert_eq!(cfg.impulse.decay, 2.0);
}

#[test]
fn oversized_tuning_is_capped() {
    let raw = json!({
        "reverb": { "duration": 1.0e9 },
        "smoke": { "particleCount": 1_000_000 }
    });
    let cfg = ThemeSettings::from_json(&raw.to_string()).unwrap().resolve(None);
    assert_eq!(cfg.impulse.duration_sec, MAX_IMPULSE_DURATION_SEC);
    assert_eq!(cfg.smoke.particle_count, MAX_PARTICLE_COUNT);
}

#[test]
fn coerce_keeps_true_and_nonzero_numbers() {
    let out = coerce_strings(&[json!(true), json!(1.5), json!("a")]);
    assert_eq!(out, ["true", "1.5", "a"]);
}

#[test]
fn coerce_drops_every_falsy_value() {
    let out = coerce_strings(&[
        json!(0),
        json!(0.0),
        json!(false),
        json!(null),
        json!(""),
        json!("b"),
    ]);
    assert_eq!(out, ["b"]);
}
