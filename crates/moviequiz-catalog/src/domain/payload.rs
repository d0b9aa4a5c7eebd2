//! Decoding of the `MostPopularMovies` response body.

use moviequiz_core::error::LoadError;
use serde::Deserialize;

use super::items::{Catalog, CatalogItem};

/// Wire shape of the catalog response. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct CatalogPayload {
    items: Vec<CatalogItem>,
}

/// Decodes a catalog response body.
///
/// # Errors
///
/// Returns `LoadError::Decode` if the body is not valid JSON, lacks the
/// `items` array, any item lacks a required field, or the list is empty.
pub fn decode_catalog(body: &[u8]) -> Result<Catalog, LoadError> {
    let payload: CatalogPayload = serde_json::from_slice(body)
        .map_err(|e| LoadError::Decode(format!("invalid catalog payload: {e}")))?;
    Catalog::new(payload.items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_MOVIES: &str = r#"{
        "items": [
            {
                "id": "tt9114286",
                "rank": "1",
                "title": "Black Panther: Wakanda Forever",
                "fullTitle": "Black Panther: Wakanda Forever (2022)",
                "year": "2022",
                "image": "https://m.media-amazon.com/images/M/MV5BNTM4.jpg",
                "crew": "Ryan Coogler (dir.), Letitia Wright",
                "imDbRating": "6.9",
                "imDbRatingCount": "95888"
            },
            {
                "id": "tt1630029",
                "fullTitle": "Avatar: The Way of Water (2022)",
                "image": "https://m.media-amazon.com/images/M/MV5BYjhi.jpg",
                "imDbRating": ""
            }
        ],
        "errorMessage": ""
    }"#;

    #[test]
    fn test_decode_keeps_every_item_in_order() {
        let catalog = decode_catalog(TWO_MOVIES.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        let first = &catalog.items()[0];
        assert_eq!(first.id(), "tt9114286");
        assert_eq!(first.title(), "Black Panther: Wakanda Forever (2022)");
        assert_eq!(first.raw_rating(), "6.9");
        assert_eq!(
            first.image_url(),
            "https://m.media-amazon.com/images/M/MV5BNTM4.jpg"
        );
        assert_eq!(catalog.items()[1].id(), "tt1630029");
    }

    #[test]
    fn test_decode_rejects_empty_items() {
        let result = decode_catalog(br#"{"items":[],"errorMessage":""}"#);
        assert_eq!(
            result,
            Err(LoadError::Decode("catalog contains no items".to_owned()))
        );
    }

    #[test]
    fn test_decode_rejects_item_missing_rating() {
        let body = br#"{"items":[{"id":"tt1","fullTitle":"X","image":"https://a/b.jpg"}]}"#;
        assert!(matches!(decode_catalog(body), Err(LoadError::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_missing_items_key() {
        assert!(matches!(
            decode_catalog(br#"{"errorMessage":""}"#),
            Err(LoadError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_rejects_non_json() {
        assert!(matches!(
            decode_catalog(b"<html>maintenance</html>"),
            Err(LoadError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_rejects_wrongly_typed_rating() {
        let body =
            br#"{"items":[{"id":"tt1","fullTitle":"X","imDbRating":8.1,"image":"https://a/b.jpg"}]}"#;
        assert!(matches!(decode_catalog(body), Err(LoadError::Decode(_))));
    }
}
