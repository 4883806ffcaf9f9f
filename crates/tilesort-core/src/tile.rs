#![forbid(unsafe_code)]

//! The sortable unit.

/// A fixed-size tile with a comparable key.
///
/// `id` is the tile's identity (which picture it is); `key` is its size, the
/// only thing sorting looks at. Tiles are exchanged, never edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub id: usize,
    pub key: u32,
}

impl Tile {
    /// Create a tile.
    #[inline]
    #[must_use]
    pub const fn new(id: usize, key: u32) -> Self {
        Self { id, key }
    }
}
