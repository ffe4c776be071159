// Host-side tests for track selection and playback outcome mapping.

use fx_core::playback::{clamp_volume, mute_label};
use fx_core::{AudioSources, PlaybackOutcome, TrackSelector};

const FALLBACK: &str = "/themes/md/audio/ambient_hum.wav";

#[test]
fn primary_failure_switches_to_fallback_once() {
    let mut sel = TrackSelector::new(Some("https://cdn.example/a.mp3".into()), FALLBACK.into());
    assert_eq!(sel.active(), "https://cdn.example/a.mp3");
    assert!(sel.can_fall_back());
    assert_eq!(sel.on_load_error(), Some(FALLBACK));
    assert_eq!(sel.active(), FALLBACK);
    assert_eq!(sel.on_load_error(), None);
    assert_eq!(sel.active(), FALLBACK);
}

#[test]
fn no_primary_starts_on_fallback_without_retry() {
    let mut sel = AudioSources::new(None, FALLBACK.into()).selector();
    assert_eq!(sel.active(), FALLBACK);
    assert!(!sel.can_fall_back());
    assert_eq!(sel.on_load_error(), None);
}

#[test]
fn primary_equal_to_fallback_is_not_retried() {
    let mut sel = TrackSelector::new(Some(FALLBACK.into()), FALLBACK.into());
    assert_eq!(sel.on_load_error(), None);
}

#[test]
fn rejection_names_map_to_outcomes() {
    assert_eq!(
        PlaybackOutcome::from_rejection(Some("NotAllowedError")),
        PlaybackOutcome::DeniedByPolicy
    );
    assert_eq!(
        PlaybackOutcome::from_rejection(Some("NotSupportedError")),
        PlaybackOutcome::LoadError
    );
    assert_eq!(PlaybackOutcome::from_rejection(None), PlaybackOutcome::LoadError);
}

#[test]
fn volume_snaps_to_step_and_clamps() {
    assert!((clamp_volume(0.52) - 0.5).abs() < 1e-9);
    assert_eq!(clamp_volume(2.0), 1.0);
    assert_eq!(clamp_volume(-1.0), 0.0);
    assert_eq!(clamp_volume(f64::NAN), 0.0);
}

#[test]
fn mute_button_label_tracks_state() {
    assert_eq!(mute_label(true), "Unmute");
    assert_eq!(mute_label(false), "Mute");
}
