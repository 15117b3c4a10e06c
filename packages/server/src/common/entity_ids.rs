//! Typed ID definitions for all persisted entities.
//!
//! ```rust
//! use page_analyzer::common::{UrlCheckId, UrlId};
//!
//! let url_id = UrlId::from_i64(1);
//! let check_id = UrlCheckId::from_i64(1);
//!
//! // This would be a compile error:
//! // let wrong: UrlCheckId = url_id;
//! ```

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for registered sites (`urls` table).
pub struct Site;

/// Marker type for check history rows (`url_checks` table).
pub struct SiteCheck;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for registered URLs.
pub type UrlId = Id<Site>;

/// Typed ID for URL checks.
pub type UrlCheckId = Id<SiteCheck>;
