//! Column roles for the two-block chess scoresheet layout.

use crate::CellGrid;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic role of a grid column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    LeftNum,
    LeftWhite,
    LeftBlack,
    RightNum,
    RightWhite,
    RightBlack,
}

impl ColumnRole {
    pub const ALL: [ColumnRole; 6] = [
        ColumnRole::LeftNum,
        ColumnRole::LeftWhite,
        ColumnRole::LeftBlack,
        ColumnRole::RightNum,
        ColumnRole::RightWhite,
        ColumnRole::RightBlack,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ColumnRole::LeftNum => "left_num_col",
            ColumnRole::LeftWhite => "left_white_col",
            ColumnRole::LeftBlack => "left_black_col",
            ColumnRole::RightNum => "right_num_col",
            ColumnRole::RightWhite => "right_white_col",
            ColumnRole::RightBlack => "right_black_col",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Column index per role. Roles without a column are `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnRoleMap {
    slots: [Option<usize>; 6],
}

impl ColumnRoleMap {
    /// Fixed layout: `[num, white, black]` twice, left block first.
    pub fn two_block() -> Self {
        let mut map = Self::default();
        for (col, role) in ColumnRole::ALL.into_iter().enumerate() {
            map.slots[role.slot()] = Some(col);
        }
        map
    }

    pub fn with(mut self, role: ColumnRole, col: usize) -> Self {
        self.slots[role.slot()] = Some(col);
        self
    }

    #[inline]
    pub fn get(&self, role: ColumnRole) -> Option<usize> {
        self.slots[role.slot()]
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Assigned roles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ColumnRole, usize)> + '_ {
        ColumnRole::ALL
            .into_iter()
            .filter_map(|r| self.get(r).map(|c| (r, c)))
    }
}

impl fmt::Display for ColumnRoleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (role, col)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", role.key(), col)?;
        }
        f.write_str("}")
    }
}

impl Serialize for ColumnRoleMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(None)?;
        for (role, col) in self.iter() {
            map.serialize_entry(role.key(), &col)?;
        }
        map.end()
    }
}

/// Strategy that assigns roles to grid columns.
///
/// Alternate scoresheet templates plug in their own heuristics here without
/// touching the rest of the pipeline.
pub trait ColumnClassifier {
    fn classify(&self, grid: &CellGrid) -> ColumnRoleMap;
}

/// Classifier for the standard 2 x `[num, white, black]` chess scoresheet.
///
/// - 6 or more columns: fixed two-block mapping, extra columns ignored.
/// - 3 to 5 columns: single block anchored on the narrowest column, which is
///   taken as the move-number column; white and black follow it, wrapping.
/// - fewer than 3 columns: empty map.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChessBlockClassifier;

impl ColumnClassifier for ChessBlockClassifier {
    fn classify(&self, grid: &CellGrid) -> ColumnRoleMap {
        let Some(first) = grid.rows.first() else {
            return ColumnRoleMap::default();
        };
        let n = first.len();
        let map = if n >= 6 {
            ColumnRoleMap::two_block()
        } else if n >= 3 {
            let mut narrowest = 0;
            for (i, cell) in first.iter().enumerate() {
                if cell.width() < first[narrowest].width() {
                    narrowest = i;
                }
            }
            ColumnRoleMap::default()
                .with(ColumnRole::LeftNum, narrowest)
                .with(ColumnRole::LeftWhite, (narrowest + 1) % n)
                .with(ColumnRole::LeftBlack, (narrowest + 2) % n)
        } else {
            ColumnRoleMap::default()
        };
        log::info!("column roles: {map}");
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn grid_with_widths(widths: &[u32]) -> CellGrid {
        let row = widths.iter().map(|&w| Cell::placeholder(w, 30)).collect();
        CellGrid { rows: vec![row] }
    }

    #[test]
    fn six_columns_use_fixed_layout() {
        let map = ChessBlockClassifier.classify(&grid_with_widths(&[90, 20, 90, 90, 90, 15]));
        let cols: Vec<_> = map.iter().collect();
        assert_eq!(
            cols,
            vec![
                (ColumnRole::LeftNum, 0),
                (ColumnRole::LeftWhite, 1),
                (ColumnRole::LeftBlack, 2),
                (ColumnRole::RightNum, 3),
                (ColumnRole::RightWhite, 4),
                (ColumnRole::RightBlack, 5),
            ]
        );
    }

    #[test]
    fn extra_columns_are_ignored() {
        let map = ChessBlockClassifier.classify(&grid_with_widths(&[40; 9]));
        assert_eq!(map, ColumnRoleMap::two_block());
    }

    #[test]
    fn single_block_anchors_on_narrowest_column() {
        let map = ChessBlockClassifier.classify(&grid_with_widths(&[80, 80, 25, 80]));
        assert_eq!(map.get(ColumnRole::LeftNum), Some(2));
        assert_eq!(map.get(ColumnRole::LeftWhite), Some(3));
        assert_eq!(map.get(ColumnRole::LeftBlack), Some(0));
        assert_eq!(map.get(ColumnRole::RightWhite), None);
    }

    #[test]
    fn narrow_tie_picks_first() {
        let map = ChessBlockClassifier.classify(&grid_with_widths(&[30, 80, 30]));
        assert_eq!(map.get(ColumnRole::LeftNum), Some(0));
        assert_eq!(map.get(ColumnRole::LeftWhite), Some(1));
        assert_eq!(map.get(ColumnRole::LeftBlack), Some(2));
    }

    #[test]
    fn too_few_columns_give_empty_map() {
        assert!(ChessBlockClassifier
            .classify(&grid_with_widths(&[50, 50]))
            .is_empty());
        assert!(ChessBlockClassifier.classify(&CellGrid::default()).is_empty());
    }

    #[test]
    fn display_and_json_use_role_keys() {
        let map = ColumnRoleMap::default()
            .with(ColumnRole::LeftNum, 1)
            .with(ColumnRole::LeftWhite, 2);
        assert_eq!(map.to_string(), "{left_num_col: 1, left_white_col: 2}");
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"left_num_col":1,"left_white_col":2}"#
        );
    }
}
