use rand::seq::SliceRandom;
use rand::Rng;

pub const DEFAULT_VARIATIONS: [&str; 4] = ["gothic", "nightmare", "dreamscape", "labyrinth"];

pub const STYLE_QUERY_PARAM: &str = "style";

/// A known variation named by the query string wins; otherwise pick one at random.
pub fn choose<'a, R: Rng + ?Sized>(
    variations: &'a [String],
    requested: Option<&str>,
    rng: &mut R,
) -> Option<&'a str> {
    if let Some(req) = requested {
        if let Some(v) = variations.iter().find(|v| v.as_str() == req) {
            return Some(v.as_str());
        }
    }
    variations.choose(rng).map(String::as_str)
}

pub fn body_class(variation: &str) -> String {
    format!("theme-{variation}")
}
