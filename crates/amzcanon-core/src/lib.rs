pub mod config;
pub mod logging;

pub mod activation;
pub mod asin;
pub mod canonicalize;
pub mod location;
pub mod navigator;
pub mod shape;

pub use asin::{extract_asin, match_asin, Asin, AsinMatch, AsinPattern};
pub use canonicalize::{canonical_url, plan, Canonicalizer, Decision};
pub use location::{LocationError, PageLocation};
pub use navigator::{Navigator, RecordingNavigator, WriterNavigator};
