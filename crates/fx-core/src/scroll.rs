//! Decisions behind the reveal, parallax and page-transition effects.

use crate::constants::DEFAULT_PARALLAX_SPEED;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStrategy {
    /// Add `visible` as each element scrolls into view.
    Observe,
    /// Add `visible` to everything up front.
    Immediate,
}

impl RevealStrategy {
    pub fn choose(observer_supported: bool, reduced_motion: bool) -> Self {
        if observer_supported && !reduced_motion {
            RevealStrategy::Observe
        } else {
            RevealStrategy::Immediate
        }
    }
}

/// Speed factor from a `data-parallax` attribute; invalid or zero means default.
pub fn parallax_speed(attr: Option<&str>) -> f64 {
    attr.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v != 0.0)
        .unwrap_or(DEFAULT_PARALLAX_SPEED)
}

pub fn parallax_transform(scroll_top: f64, speed: f64) -> String {
    format!("translateY({}px)", scroll_top * speed)
}

/// Modifier state of the click that might trigger a transition.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClickInfo {
    pub default_prevented: bool,
    pub button: i16,
    pub meta: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl ClickInfo {
    pub fn is_plain_primary(&self) -> bool {
        !self.default_prevented
            && self.button == 0
            && !(self.meta || self.ctrl || self.shift || self.alt)
    }
}

/// What the clicked anchor says about itself.
#[derive(Clone, Debug, Default)]
pub struct LinkInfo {
    pub href: Option<String>,
    pub use_ajax: bool,
    pub download: bool,
    pub target: Option<String>,
    pub no_transition: bool,
}

const SKIPPED_PREFIXES: [&str; 3] = ["#", "mailto:", "javascript:"];

/// Pre-resolution filter. Returns the raw href when the link is a candidate
/// for an animated transition.
pub fn transition_href<'a>(click: &ClickInfo, link: &'a LinkInfo) -> Option<&'a str> {
    if !click.is_plain_primary() || link.use_ajax || link.download || link.no_transition {
        return None;
    }
    if matches!(link.target.as_deref(), Some(t) if !t.is_empty() && t != "_self") {
        return None;
    }
    let href = link.href.as_deref().filter(|h| !h.is_empty())?;
    if SKIPPED_PREFIXES.iter().any(|p| href.starts_with(p)) {
        return None;
    }
    Some(href)
}

/// The parts of a resolved URL that matter for the same-page check.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UrlParts {
    pub origin: String,
    pub pathname: String,
    pub search: String,
    pub hash: String,
}

/// Post-resolution filter: same origin, and not a hash hop within this page.
pub fn destination_allows_transition(dest: &UrlParts, here: &UrlParts) -> bool {
    if dest.origin != here.origin {
        return false;
    }
    let same_document = dest.pathname == here.pathname && dest.search == here.search;
    !(same_document && !dest.hash.is_empty())
}
