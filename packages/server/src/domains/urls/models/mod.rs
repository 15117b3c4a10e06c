pub mod url;
pub mod url_check;

pub use url::*;
pub use url_check::*;
