//! URL domain actions - business logic functions
//!
//! Routes call these with the shared `ServerDeps`; each returns a typed
//! outcome or error that the presentation layer turns into a response.

pub mod add_url;
pub mod run_check;

pub use add_url::*;
pub use run_check::*;
