#![forbid(unsafe_code)]

//! Render callback.

use tilesort_core::Sequence;

/// Redraws the tile row. Called after every step that changed what is shown.
///
/// Any `FnMut(&Sequence)` closure is a renderer.
pub trait Renderer {
    fn render(&mut self, sequence: &Sequence);
}

impl<F> Renderer for F
where
    F: FnMut(&Sequence),
{
    fn render(&mut self, sequence: &Sequence) {
        self(sequence)
    }
}

/// Renderer that keeps the key order of every frame it was asked to draw.
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    frames: Vec<Vec<u32>>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded frames, oldest first.
    pub fn frames(&self) -> &[Vec<u32>] {
        &self.frames
    }

    /// The most recent frame.
    pub fn last(&self) -> Option<&[u32]> {
        self.frames.last().map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl Renderer for FrameRecorder {
    fn render(&mut self, sequence: &Sequence) {
        self.frames.push(sequence.keys());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_renderers() {
        let mut seen = 0;
        {
            let mut r = |seq: &Sequence| seen += seq.len();
            r.render(&Sequence::from_keys([1, 2, 3]));
            r.render(&Sequence::from_keys([1]));
        }
        assert_eq!(seen, 4);
    }

    #[test]
    fn recorder_keeps_frames() {
        let mut rec = FrameRecorder::new();
        assert!(rec.is_empty());
        rec.render(&Sequence::from_keys([2, 1]));
        rec.render(&Sequence::from_keys([1, 2]));
        assert_eq!(rec.len(), 2);
        assert_eq!(rec.last(), Some(&[1, 2][..]));
        rec.clear();
        assert_eq!(rec.last(), None);
    }
}
