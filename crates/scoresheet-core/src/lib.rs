//! Core types and utilities for scoresheet cell extraction.
//!
//! This crate is intentionally small. It holds the lightweight grayscale
//! buffer types used by the line detector, pixel statistics used by the
//! exporter's header heuristic, and the logger shared by the binaries.

mod gray;
mod logger;
mod stats;

pub use gray::{gray_from_rgb, GrayImage, GrayImageView, PixelRect};
pub use stats::PixelStats;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
