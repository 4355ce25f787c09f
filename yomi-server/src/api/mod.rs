//! HTTP API handlers for yomi-server

pub mod annotate;
pub mod health;

pub use annotate::{annotate, annotate_html};
pub use health::health_routes;
