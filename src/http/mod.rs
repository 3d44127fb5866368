//! HTTP client layer — `IntradayHttp`.

pub mod client;

pub use client::IntradayHttp;
