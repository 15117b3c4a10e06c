//! URL domain - registered sites and their check history

pub mod actions;
pub mod errors;
pub mod models;
pub mod normalize;

pub use actions::{add_url, run_check, AddUrlOutcome};
pub use errors::{AddUrlError, CheckError, StoreError, UrlValidationError};
pub use models::{NewUrlCheck, Url, UrlCheck, UrlListing};
pub use normalize::{normalize, validate, MAX_URL_LENGTH};
