#![forbid(unsafe_code)]

//! The ordered row of tiles being sorted.
//!
//! Order in the sequence *is* the displayed order. During a run the sequence
//! is only ever permuted: the sole mutators are [`Sequence::swap`] and
//! [`Sequence::set`], and every algorithm in this crate keeps the multiset
//! of tiles intact between steps.

use std::ops::Index;

use crate::tile::Tile;

/// An ordered, fixed-length row of [`Tile`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    tiles: Vec<Tile>,
}

impl Sequence {
    /// Wrap existing tiles.
    #[must_use]
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Create one tile per key; ids follow the iteration order.
    pub fn from_keys(keys: impl IntoIterator<Item = u32>) -> Self {
        let tiles = keys
            .into_iter()
            .enumerate()
            .map(|(id, key)| Tile::new(id, key))
            .collect();
        Self { tiles }
    }

    /// Number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the row is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Key of the tile at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn key(&self, index: usize) -> u32 {
        self.tiles[index].key
    }

    /// Exchange two tiles.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.tiles.swap(a, b);
    }

    /// Overwrite the tile at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn set(&mut self, index: usize, tile: Tile) {
        self.tiles[index] = tile;
    }

    /// Iterate tiles in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Borrow the tiles as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Tile] {
        &self.tiles
    }

    /// Keys in display order.
    pub fn keys(&self) -> Vec<u32> {
        self.tiles.iter().map(|t| t.key).collect()
    }

    /// Whether keys are in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        self.tiles.windows(2).all(|w| w[0].key <= w[1].key)
    }

    /// Whether `other` holds exactly the same tiles, in any order.
    pub fn is_permutation_of(&self, other: &Sequence) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut a = self.tiles.clone();
        let mut b = other.tiles.clone();
        a.sort_unstable_by_key(|t| (t.id, t.key));
        b.sort_unstable_by_key(|t| (t.id, t.key));
        a == b
    }
}

impl Index<usize> for Sequence {
    type Output = Tile;

    #[inline]
    fn index(&self, index: usize) -> &Tile {
        &self.tiles[index]
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

impl From<Vec<Tile>> for Sequence {
    fn from(tiles: Vec<Tile>) -> Self {
        Self::from_tiles(tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_keys_assigns_ids_in_order() {
        let seq = Sequence::from_keys([30, 10, 20]);
        let ids: Vec<usize> = seq.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(seq.keys(), vec![30, 10, 20]);
    }

    #[test]
    fn swap_keeps_tiles() {
        let original = Sequence::from_keys([3, 1, 2]);
        let mut seq = original.clone();
        seq.swap(0, 2);
        assert_eq!(seq.keys(), vec![2, 1, 3]);
        assert!(seq.is_permutation_of(&original));
    }

    #[test]
    fn set_can_break_permutation() {
        let original = Sequence::from_keys([3, 1, 2]);
        let mut seq = original.clone();
        let t = seq[0];
        seq.set(1, t);
        assert!(!seq.is_permutation_of(&original));
    }

    #[test]
    fn sorted_detection() {
        assert!(Sequence::default().is_sorted());
        assert!(Sequence::from_keys([1]).is_sorted());
        assert!(Sequence::from_keys([1, 1, 2]).is_sorted());
        assert!(!Sequence::from_keys([2, 1]).is_sorted());
    }

    #[test]
    fn permutation_distinguishes_identity() {
        let a = Sequence::from_tiles(vec![Tile::new(0, 5), Tile::new(1, 5)]);
        let b = Sequence::from_tiles(vec![Tile::new(0, 5), Tile::new(0, 5)]);
        assert!(!a.is_permutation_of(&b));
        assert!(!a.is_permutation_of(&Sequence::from_keys([5])));
    }

    #[test]
    #[should_panic]
    fn out_of_range_swap_panics() {
        let mut seq = Sequence::from_keys([1, 2]);
        seq.swap(0, 2);
    }
}
