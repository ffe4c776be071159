//! Random background, quote and silhouette selection.

use crate::constants::SILHOUETTE_CHANCE;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Atmosphere {
    pub image: String,
    pub quote: String,
    pub show_silhouette: bool,
}

/// Roll one page's atmosphere. Returns `None` only if a list is empty.
pub fn roll<R: Rng + ?Sized>(
    images: &[String],
    quotes: &[String],
    rng: &mut R,
) -> Option<Atmosphere> {
    let image = images.choose(rng)?.clone();
    let quote = quotes.choose(rng)?.clone();
    let show_silhouette = rng.gen_bool(SILHOUETTE_CHANCE);
    Some(Atmosphere {
        image,
        quote,
        show_silhouette,
    })
}

/// Value for the `--hero-bg` custom property.
pub fn hero_background(image: &str) -> String {
    format!("url({image})")
}
