// Domain modules
pub mod urls;
