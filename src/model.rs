use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Root of a Takeout saved-places review export. The export is GeoJSON-like:
/// a feature collection where each feature is one saved or reviewed place.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewExport {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Properties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub location: Location,

    /// Star rating the user published, 0 when the place was saved without one.
    #[serde(default = "zero_rating")]
    pub five_star_rating_published: Number,

    #[serde(default)]
    pub review_text_published: String,
}

impl Default for Properties {
    fn default() -> Self {
        Self {
            location: Location::default(),
            five_star_rating_published: zero_rating(),
            review_text_published: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    #[serde(default = "unknown_name")]
    pub name: String,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            name: unknown_name(),
        }
    }
}

fn zero_rating() -> Number {
    Number::from(0)
}

fn unknown_name() -> String {
    "Unknown".to_string()
}

/// One flattened review in the output document.
///
/// Ratings are carried as `serde_json::Number` so an integer rating in the
/// export stays an integer in the output (`5`, never `5.0`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedReview {
    pub place: String,
    pub rating: Number,
    pub text: String,
}

/// Top-level output document: configured user metadata plus the extracted
/// reviews, in source order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasteProfile {
    pub user: String,
    pub style_keywords: Vec<String>,
    pub reviews: Vec<ExtractedReview>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_features_key() {
        let export: ReviewExport = serde_json::from_str("{}").unwrap();
        assert!(export.features.is_empty());
    }

    #[test]
    fn test_feature_defaults() {
        let feature: Feature = serde_json::from_str(r#"{"properties":{}}"#).unwrap();
        assert_eq!(feature.properties.location.name, "Unknown");
        assert_eq!(feature.properties.five_star_rating_published, Number::from(0));
        assert_eq!(feature.properties.review_text_published, "");
    }

    #[test]
    fn test_missing_properties() {
        let feature: Feature = serde_json::from_str("{}").unwrap();
        assert_eq!(feature.properties.location.name, "Unknown");
    }

    #[test]
    fn test_integer_rating_round_trip() {
        let review = ExtractedReview {
            place: "Cafe A".to_string(),
            rating: Number::from(5),
            text: String::new(),
        };
        let json = serde_json::to_string(&review).unwrap();
        assert!(json.contains("\"rating\":5"));
        assert!(!json.contains("5.0"));
    }

    #[test]
    fn test_extra_properties_ignored() {
        let json = r#"{
            "properties": {
                "location": {"name": "Cafe B", "address": "1 Main St"},
                "five_star_rating_published": 4,
                "review_text_published": "nice",
                "date": "2023-01-01T00:00:00Z"
            }
        }"#;
        let feature: Feature = serde_json::from_str(json).unwrap();
        assert_eq!(feature.properties.location.name, "Cafe B");
        assert_eq!(feature.properties.five_star_rating_published, Number::from(4));
    }
}
