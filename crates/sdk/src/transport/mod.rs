//! Transport layer for the marketplace SDK.

pub mod http;

pub use http::HttpTransport;
