//! Picture renderer emitting rows into an output sink
//!
//! This module takes the geometry computed for a given size and produces the
//! framed diamond picture through repeated sink print calls.

pub mod config;
pub mod picture;

pub use config::RenderConfig;
pub use picture::DiamondRenderer;
