//! End-to-end extraction: image file -> lines -> grid -> roles -> files.

use std::path::{Path, PathBuf};

use image::{ImageError, ImageReader, RgbImage};
use scoresheet_export::{export_moves, write_debug_overlay, OutputLayout};
use scoresheet_grid::{
    build_grid, detect_lines_checked, ChessBlockClassifier, ColumnClassifier, ColumnRoleMap,
};
use serde::Serialize;

use crate::{ExtractError, ScoresheetConfig};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Inputs of one extraction run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractRequest {
    pub image_path: PathBuf,
    pub output_root: PathBuf,
    /// Prefix of every output file; defaults to the image file stem.
    pub base_name: Option<String>,
    /// Also write the detected-lines overlay.
    pub debug: bool,
}

impl ExtractRequest {
    pub fn new(image_path: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            image_path: image_path.into(),
            output_root: output_root.into(),
            base_name: None,
            debug: false,
        }
    }

    pub fn with_base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = Some(base_name.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn resolved_base_name(&self) -> String {
        self.base_name.clone().unwrap_or_else(|| {
            self.image_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "scoresheet".to_string())
        })
    }

    pub fn layout(&self) -> OutputLayout {
        OutputLayout::new(&self.output_root, self.resolved_base_name())
    }
}

/// What a run found and wrote.
#[derive(Clone, Debug, Serialize)]
pub struct ExtractionSummary {
    pub horizontal_lines: usize,
    pub vertical_lines: usize,
    pub grid_rows: usize,
    pub grid_columns: usize,
    pub roles: ColumnRoleMap,
    pub start_row: usize,
    pub records: usize,
    pub placeholders: usize,
    pub index_path: PathBuf,
    pub debug_path: Option<PathBuf>,
}

/// Read an image file into 8-bit RGB.
pub fn load_image(path: &Path) -> Result<RgbImage, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::ImageNotFound(path.to_path_buf()));
    }
    let decode_err = |source: ImageError| ExtractError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let img = ImageReader::open(path)
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)?;
    Ok(img.to_rgb8())
}

/// Run every stage on an already decoded image.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip_all, fields(width = image.width(), height = image.height()))
)]
pub fn process_image(
    image: &RgbImage,
    layout: &OutputLayout,
    config: &ScoresheetConfig,
    classifier: &dyn ColumnClassifier,
    debug: bool,
) -> Result<ExtractionSummary, ExtractError> {
    log::info!("detecting table structure");
    let lines = detect_lines_checked(image, &config.lines)?;

    log::info!("extracting table cells");
    let grid = build_grid(image, &lines.rows, &lines.cols, &config.grid);
    let roles = classifier.classify(&grid);

    log::info!("saving move cells");
    let outcome = export_moves(&grid, &roles, layout, &config.export)?;

    let debug_path = if debug {
        let path = layout.debug_lines_path();
        match write_debug_overlay(image, &lines, &path) {
            Ok(()) => Some(path),
            Err(err) => {
                log::warn!("failed to write debug overlay {}: {err}", path.display());
                None
            }
        }
    } else {
        None
    };

    Ok(ExtractionSummary {
        horizontal_lines: lines.rows.len(),
        vertical_lines: lines.cols.len(),
        grid_rows: grid.len(),
        grid_columns: grid.column_count(),
        roles,
        start_row: outcome.start_row,
        records: outcome.count(),
        placeholders: outcome.index.placeholder_count(),
        index_path: outcome.index_path,
        debug_path,
    })
}

/// [`extract_moves`] with a caller-supplied column classifier.
pub fn extract_moves_with(
    request: &ExtractRequest,
    config: &ScoresheetConfig,
    classifier: &dyn ColumnClassifier,
) -> Result<ExtractionSummary, ExtractError> {
    let image = load_image(&request.image_path)?;
    process_image(
        &image,
        &request.layout(),
        config,
        classifier,
        request.debug,
    )
}

/// Extract move cells from a scoresheet image using the standard two-block layout.
///
/// Fails on a missing or undecodable image, or when fewer than two lines
/// are found on either axis.
pub fn extract_moves(
    request: &ExtractRequest,
    config: &ScoresheetConfig,
) -> Result<ExtractionSummary, ExtractError> {
    extract_moves_with(request, config, &ChessBlockClassifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_defaults_to_file_stem() {
        let req = ExtractRequest::new("scans/game_12.jpeg", "out");
        assert_eq!(req.resolved_base_name(), "game_12");
        let req = req.with_base_name("custom");
        assert_eq!(req.resolved_base_name(), "custom");
        assert_eq!(
            req.layout().index_path(),
            PathBuf::from("out/debug/custom_index_map.json")
        );
    }

    #[test]
    fn missing_image_is_reported() {
        let err = load_image(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, ExtractError::ImageNotFound(_)));
        assert!(err.to_string().contains("image not found"));
    }

    #[test]
    fn garbage_file_fails_to_decode() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("noise.png");
        std::fs::write(&path, b"definitely not an image").unwrap();
        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, ExtractError::Decode { .. }));
    }
}
