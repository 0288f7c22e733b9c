use crate::error::{ErrorSeverity, GameError};

use super::common::{Facing, Position};

/// Contents of a single dungeon cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Tile {
    #[default]
    Floor,
    Wall,
    Encounter,
    Treasure,
    Stairs,
}

impl Tile {
    /// Layout glyph: `.` floor, `#` wall, `E` encounter, `T` treasure, `>` stairs.
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Self::Floor),
            '#' => Some(Self::Wall),
            'E' => Some(Self::Encounter),
            'T' => Some(Self::Treasure),
            '>' => Some(Self::Stairs),
            _ => None,
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Self::Floor => '.',
            Self::Wall => '#',
            Self::Encounter => 'E',
            Self::Treasure => 'T',
            Self::Stairs => '>',
        }
    }

    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Errors raised while building a dungeon layout.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("layout has no rows")]
    Empty,

    #[error("row {row} has width {width}, expected {expected}")]
    RaggedRow {
        row: usize,
        width: usize,
        expected: usize,
    },

    #[error("unknown glyph {glyph:?} at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },

    #[error("start tile (0, 0) must be passable")]
    BlockedStart,
}

impl GameError for MapError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "MAP_EMPTY",
            Self::RaggedRow { .. } => "MAP_RAGGED_ROW",
            Self::UnknownGlyph { .. } => "MAP_UNKNOWN_GLYPH",
            Self::BlockedStart => "MAP_BLOCKED_START",
        }
    }
}

/// Rectangular tile grid, row-major.
///
/// Serialized as its layout rows and rebuilt through
/// [`DungeonGrid::from_rows`], so restored grids pass the same checks.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<String>", into = "Vec<String>"))]
pub struct DungeonGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl DungeonGrid {
    /// Parses an ASCII layout. The party always enters at (0, 0).
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapError> {
        let expected = rows
            .first()
            .map(|row| row.as_ref().chars().count())
            .filter(|&width| width > 0)
            .ok_or(MapError::Empty)?;

        let mut tiles = Vec::with_capacity(expected * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let width = row.chars().count();
            if width != expected {
                return Err(MapError::RaggedRow {
                    row: y,
                    width,
                    expected,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let tile = Tile::from_glyph(glyph).ok_or(MapError::UnknownGlyph { glyph, x, y })?;
                tiles.push(tile);
            }
        }

        if !tiles[0].is_passable() {
            return Err(MapError::BlockedStart);
        }

        Ok(Self {
            width: expected,
            height: rows.len(),
            tiles,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, position: Position) -> Option<usize> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.index(position).is_some()
    }

    /// Tile at `position`, or `None` outside the grid.
    pub fn tile(&self, position: Position) -> Option<Tile> {
        self.index(position).map(|index| self.tiles[index])
    }

    /// Overwrites a tile. Returns the previous tile, or `None` outside the grid.
    pub fn set_tile(&mut self, position: Position, tile: Tile) -> Option<Tile> {
        let index = self.index(position)?;
        Some(std::mem::replace(&mut self.tiles[index], tile))
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Renders the grid back to layout rows.
    pub fn rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.width)
            .map(|row| row.iter().map(|tile| tile.glyph()).collect())
            .collect()
    }
}

impl TryFrom<Vec<String>> for DungeonGrid {
    type Error = MapError;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<DungeonGrid> for Vec<String> {
    fn from(grid: DungeonGrid) -> Self {
        grid.rows()
    }
}

/// The party's whereabouts inside the dungeon.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DungeonState {
    /// Dungeon level, starting at 1.
    pub depth: u32,
    pub grid: DungeonGrid,
    pub position: Position,
    pub facing: Facing,
}

impl DungeonState {
    /// Enters a level at the origin, facing north.
    pub fn enter(depth: u32, grid: DungeonGrid) -> Self {
        Self {
            depth,
            grid,
            position: Position::ORIGIN,
            facing: Facing::North,
        }
    }

    pub fn current_tile(&self) -> Option<Tile> {
        self.grid.tile(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_layout_rows() {
        let grid = DungeonGrid::from_rows(&["..E", "#T>"]).unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.tile(Position::new(2, 0)), Some(Tile::Encounter));
        assert_eq!(grid.tile(Position::new(0, 1)), Some(Tile::Wall));
        assert_eq!(grid.tile(Position::new(2, 1)), Some(Tile::Stairs));
        assert_eq!(grid.tile(Position::new(3, 0)), None);
        assert_eq!(grid.tile(Position::new(-1, 0)), None);
        assert_eq!(grid.rows(), vec!["..E".to_string(), "#T>".to_string()]);
    }

    #[test]
    fn rejects_malformed_layouts() {
        let empty: [&str; 0] = [];
        assert_eq!(DungeonGrid::from_rows(&empty), Err(MapError::Empty));
        assert!(matches!(
            DungeonGrid::from_rows(&["...", ".."]),
            Err(MapError::RaggedRow { row: 1, .. })
        ));
        assert!(matches!(
            DungeonGrid::from_rows(&["..?"]),
            Err(MapError::UnknownGlyph { glyph: '?', x: 2, y: 0 })
        ));
        assert_eq!(DungeonGrid::from_rows(&["#.."]), Err(MapError::BlockedStart));
    }

    #[test]
    fn set_tile_replaces_in_bounds_only() {
        let mut grid = DungeonGrid::from_rows(&[".T"]).unwrap();
        assert_eq!(grid.set_tile(Position::new(1, 0), Tile::Floor), Some(Tile::Treasure));
        assert_eq!(grid.count(Tile::Treasure), 0);
        assert_eq!(grid.set_tile(Position::new(5, 5), Tile::Floor), None);
    }
}
