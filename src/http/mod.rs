//! HTTP client layer — `GenelParaHttp` with request pacing.

pub mod client;
pub mod pacing;

pub use client::GenelParaHttp;
pub use pacing::Pacer;
