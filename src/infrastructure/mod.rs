pub mod http;
pub mod importers;
