//! Remote catalog adapter over HTTP.

mod http_client;
pub mod mapper;
pub mod models;

pub use http_client::HttpCatalogClient;
