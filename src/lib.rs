//! Irodori
//!
//! HTTP server and CLI for the Irodori illustration color tools: harmony
//! palette generation from a base color and hair-color extraction from
//! uploaded images. This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
