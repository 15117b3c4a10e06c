// Page Analyzer - Core
//
// Registers sites, fetches them on demand and keeps a history of the SEO
// metadata (status code, h1, title, meta description) seen on each check.
//
// Domain logic lives in domains/, outbound infrastructure in kernel/, and the
// HTTP presentation layer in server/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
