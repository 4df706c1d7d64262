use std::path::PathBuf;

use crate::ConfigError;
use scoresheet_export::ExportError;
use scoresheet_grid::GridError;

/// Fatal pipeline errors. Anything per-cell is recovered inside the exporter.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error("image not found: {}", .0.display())]
    ImageNotFound(PathBuf),

    #[error("failed to read image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
