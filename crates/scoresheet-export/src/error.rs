/// Errors that abort an export. Per-cell failures are recovered in place.
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error("moves_per_block must be in 1..={max}, got {got}")]
    MovesPerBlock { got: u32, max: u32 },
}
