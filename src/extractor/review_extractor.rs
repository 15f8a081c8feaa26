use crate::error::{ReviewSiftError, Result};
use crate::model::{ExtractedReview, Feature, ReviewExport};
use std::fs;
use std::path::Path;

/// Parse the full export into memory. The whole document is held at once;
/// Takeout review exports are small enough that streaming is not worth it.
pub fn load_export(path: &Path) -> Result<ReviewExport> {
    let content = fs::read_to_string(path).map_err(|e| ReviewSiftError::SourceRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ReviewSiftError::MalformedSource {
        path: path.to_path_buf(),
        source: e,
    })
}

#[derive(Debug, Clone)]
pub struct Extraction {
    pub reviews: Vec<ExtractedReview>,
    pub total_features: usize,
    pub dropped: usize,
}

impl Extraction {
    pub fn retained(&self) -> usize {
        self.reviews.len()
    }
}

pub struct ReviewExtractor {
    max_reviews: Option<usize>,
}

impl ReviewExtractor {
    pub fn new() -> Self {
        Self { max_reviews: None }
    }

    pub fn with_max_reviews(mut self, cap: Option<usize>) -> Self {
        self.max_reviews = cap;
        self
    }

    /// Filter and flatten the export, preserving source order.
    ///
    /// A feature survives when it was rated 4 stars or higher, or when the
    /// user wrote any review text. The cap, if set, truncates the retained
    /// sequence and does not change which features pass the predicate.
    pub fn extract(&self, export: &ReviewExport) -> Extraction {
        let total_features = export.features.len();

        let mut reviews: Vec<ExtractedReview> = export
            .features
            .iter()
            .filter(|f| Self::should_retain(f))
            .map(Self::flatten)
            .collect();

        let dropped = total_features - reviews.len();

        if let Some(cap) = self.max_reviews {
            reviews.truncate(cap);
        }

        Extraction {
            reviews,
            total_features,
            dropped,
        }
    }

    fn should_retain(feature: &Feature) -> bool {
        let props = &feature.properties;
        let rating = props.five_star_rating_published.as_f64().unwrap_or(0.0);
        rating >= 4.0 || !props.review_text_published.is_empty()
    }

    fn flatten(feature: &Feature) -> ExtractedReview {
        let props = &feature.properties;
        ExtractedReview {
            place: props.location.name.clone(),
            rating: props.five_star_rating_published.clone(),
            text: props.review_text_published.clone(),
        }
    }
}

impl Default for ReviewExtractor {
    fn default() -> Self {
        Self::new()
    }
}
