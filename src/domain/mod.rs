//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `query.rs` — Typed request parameters and their wire form
//! - `client.rs` — Sub-client with HTTP methods

pub mod rates;
