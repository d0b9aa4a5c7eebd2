//! Catalog items and the non-empty catalog they form.

use moviequiz_core::error::LoadError;
use moviequiz_core::rng::DeterministicRng;
use serde::Deserialize;

/// Size suffix requested for question images.
const RESIZED_IMAGE_SUFFIX: &str = "._V0_UX600_.jpg";

/// One movie from the remote catalog.
///
/// Field names follow the IMDb `MostPopularMovies` payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogItem {
    id: String,
    #[serde(rename = "fullTitle")]
    title: String,
    #[serde(rename = "imDbRating")]
    rating: String,
    #[serde(rename = "image")]
    image_url: String,
}

impl CatalogItem {
    /// Creates a catalog item.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        rating: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            rating: rating.into(),
            image_url: image_url.into(),
        }
    }

    /// Returns the catalog identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the rating exactly as the backend sent it.
    #[must_use]
    pub fn raw_rating(&self) -> &str {
        &self.rating
    }

    /// Returns the image URL exactly as the backend sent it.
    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Parses the rating, reading anything unparsable or non-finite as `0.0`.
    #[must_use]
    pub fn rating(&self) -> f32 {
        self.rating
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|value| value.is_finite())
            .unwrap_or(0.0)
    }

    /// Returns the image URL rewritten to request a 600px wide rendition.
    ///
    /// IMDb encodes the rendition after a `._` marker; URLs without one are
    /// returned unchanged.
    #[must_use]
    pub fn resized_image_url(&self) -> String {
        match self.image_url.split_once("._") {
            Some((base, _)) => format!("{base}{RESIZED_IMAGE_SUFFIX}"),
            None => self.image_url.clone(),
        }
    }
}

/// A catalog that always holds at least one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Builds a catalog from decoded items.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Decode` if `items` is empty.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, LoadError> {
        if items.is_empty() {
            return Err(LoadError::Decode("catalog contains no items".to_owned()));
        }
        Ok(Self { items })
    }

    /// Returns the number of items. Never zero.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the items in catalog order.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Picks an item uniformly at random.
    pub fn pick(&self, rng: &mut dyn DeterministicRng) -> &CatalogItem {
        let index = rng.next_index(self.items.len());
        // Out-of-range draws wrap rather than index past the end.
        &self.items[index % self.items.len()]
    }
}
