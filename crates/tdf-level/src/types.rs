//! Grid geometry types.

use serde::{Deserialize, Serialize};

/// A tile coordinate on the level grid.
///
/// Serialized as a two-element array `[x, y]`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

/// Grid dimensions in tiles.
///
/// Serialized as a two-element array `[width, height]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<GridPos> for (i32, i32) {
    fn from(pos: GridPos) -> Self {
        (pos.x, pos.y)
    }
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Center tile of the grid (rounded toward the origin for even sizes).
    pub fn center(&self) -> GridPos {
        GridPos::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Whether the position lies within the grid bounds.
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }
}

impl From<(u32, u32)> for GridSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl From<GridSize> for (u32, u32) {
    fn from(size: GridSize) -> Self {
        (size.width, size.height)
    }
}
