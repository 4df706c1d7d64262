/// Errors returned by the grid stage.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error(
        "could not detect enough table lines (horizontal={horizontal}, vertical={vertical}, need at least 2 each)"
    )]
    InsufficientLines { horizontal: usize, vertical: usize },
}
