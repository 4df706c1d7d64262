//! High-level facade crate for the `scoresheet-*` workspace.
//!
//! This crate provides:
//! - re-exports of the underlying stage crates,
//! - [`extract_moves`]: image file in, per-move PNG cells plus a JSON index out,
//! - [`ScoresheetConfig`]: JSON-loadable tuning for every stage,
//! - (feature `cli`) the `scoresheet-crop` binary.
//!
//! ## Quickstart
//!
//! ```no_run
//! use scoresheet::{extract_moves, ExtractRequest, ScoresheetConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let request = ExtractRequest::new("sheet.jpg", "./out");
//! let summary = extract_moves(&request, &ScoresheetConfig::default())?;
//! println!("wrote {} move cells", summary.records);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `scoresheet::core`: image views, pixel statistics, logger.
//! - `scoresheet::grid`: rule-line detection, cell grid, column roles.
//! - `scoresheet::export`: move images, JSON index, debug overlay.

pub use scoresheet_core as core;
pub use scoresheet_export as export;
pub use scoresheet_grid as grid;

mod config;
mod error;
mod pipeline;

pub use config::{ConfigError, ScoresheetConfig};
pub use error::ExtractError;
pub use pipeline::{
    extract_moves, extract_moves_with, load_image, process_image, ExtractRequest,
    ExtractionSummary,
};
