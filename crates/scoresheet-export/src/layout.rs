use std::{fs, io, path::PathBuf};

use crate::Side;

/// Where one scoresheet's artifacts go under the output root:
///
/// ```text
/// <root>/output/<base>/<base>_<NN>_<w|b>.png
/// <root>/debug/<base>_index_map.json
/// <root>/debug/<base>_debug_lines.jpg
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
    base_name: String,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>, base_name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_name: base_name.into(),
        }
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn moves_dir(&self) -> PathBuf {
        self.root.join("output").join(&self.base_name)
    }

    pub fn debug_dir(&self) -> PathBuf {
        self.root.join("debug")
    }

    pub fn index_path(&self) -> PathBuf {
        self.debug_dir()
            .join(format!("{}_index_map.json", self.base_name))
    }

    pub fn debug_lines_path(&self) -> PathBuf {
        self.debug_dir()
            .join(format!("{}_debug_lines.jpg", self.base_name))
    }

    pub fn move_file_name(&self, n: u32, side: Side) -> String {
        format!("{}_{:02}_{}.png", self.base_name, n, side.suffix())
    }

    /// Index entry for a move file, relative to the root.
    pub fn relative_move_path(&self, file_name: &str) -> String {
        format!("output/{}/{}", self.base_name, file_name)
    }

    /// Create the move and debug directories.
    pub fn create_dirs(&self) -> io::Result<()> {
        fs::create_dir_all(self.moves_dir())?;
        fs::create_dir_all(self.debug_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_naming_scheme() {
        let layout = OutputLayout::new("/tmp/out", "game7");
        assert_eq!(layout.moves_dir(), PathBuf::from("/tmp/out/output/game7"));
        assert_eq!(
            layout.index_path(),
            PathBuf::from("/tmp/out/debug/game7_index_map.json")
        );
        assert_eq!(
            layout.debug_lines_path(),
            PathBuf::from("/tmp/out/debug/game7_debug_lines.jpg")
        );
        assert_eq!(layout.move_file_name(4, Side::White), "game7_04_w.png");
        assert_eq!(layout.move_file_name(40, Side::Black), "game7_40_b.png");
        assert_eq!(
            layout.relative_move_path("game7_04_w.png"),
            "output/game7/game7_04_w.png"
        );
    }

    #[test]
    fn create_dirs_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = OutputLayout::new(tmp.path().join("nested/out"), "g");
        layout.create_dirs().unwrap();
        layout.create_dirs().unwrap();
        assert!(layout.moves_dir().is_dir());
        assert!(layout.debug_dir().is_dir());
    }
}
