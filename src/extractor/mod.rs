pub mod review_extractor;
pub mod profile_writer;

pub use review_extractor::{load_export, Extraction, ReviewExtractor};
pub use profile_writer::{ConfigSnapshot, ExtractionReport, ProfileWriter};
