#![forbid(unsafe_code)]

//! Drawing the tile row as vertical bars.
//!
//! [`bar_rows`] is the pure layout: it turns keys into text rows, bottom
//! aligned, one bar per tile with a one-column gap. The renderers push those
//! rows to a writer.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use tilesort_core::Sequence;
use tilesort_runtime::Renderer;

/// Glyph used for bar cells.
pub const BAR: char = '█';

/// Columns between neighbouring bars.
const GAP: usize = 1;

/// Width of a single bar when `count` bars share `width` columns.
///
/// Never less than one; bars that do not fit are cut off on the right.
pub fn bar_width(count: usize, width: usize) -> usize {
    if count == 0 {
        return 0;
    }
    ((width + GAP) / count).saturating_sub(GAP).max(1)
}

/// Height of a bar for `key` when the tallest key fills `height` rows.
///
/// Rounds up so that every non-zero key stays visible.
pub fn bar_height(key: u32, max_key: u32, height: usize) -> usize {
    if max_key == 0 {
        return 0;
    }
    let scaled = u64::from(key) * height as u64;
    scaled.div_ceil(u64::from(max_key)) as usize
}

/// Lay `keys` out as `height` text rows of at most `width` columns, top row
/// first.
pub fn bar_rows(keys: &[u32], width: usize, height: usize) -> Vec<String> {
    let max_key = keys.iter().copied().max().unwrap_or(0);
    let bar = bar_width(keys.len(), width);
    let heights: Vec<usize> = keys
        .iter()
        .map(|&key| bar_height(key, max_key, height))
        .collect();

    (0..height)
        .map(|row| {
            let level = height - row;
            let mut line = String::with_capacity(width);
            let mut used = 0;
            for (i, &h) in heights.iter().enumerate() {
                let gap = if i == 0 { 0 } else { GAP };
                if used + gap + bar > width {
                    break;
                }
                line.extend(std::iter::repeat_n(' ', gap));
                let glyph = if h >= level { BAR } else { ' ' };
                line.extend(std::iter::repeat_n(glyph, bar));
                used += gap + bar;
            }
            line.truncate(line.trim_end().len());
            line
        })
        .collect()
}

/// Draws bars into a rectangular region of a terminal.
///
/// Write errors cannot leave [`Renderer::render`]; the first one is kept
/// until [`take_error`](Self::take_error) collects it.
#[derive(Debug)]
pub struct TerminalRenderer<W: Write> {
    out: W,
    top: u16,
    width: u16,
    height: u16,
    error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    /// Draw into `height` rows starting at row `top`, `width` columns wide.
    pub fn new(out: W, top: u16, width: u16, height: u16) -> Self {
        Self {
            out,
            top,
            width,
            height,
            error: None,
        }
    }

    /// Move or resize the drawing region.
    pub fn resize(&mut self, top: u16, width: u16, height: u16) {
        self.top = top;
        self.width = width;
        self.height = height;
    }

    /// The first write error since the last call, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    fn draw(&mut self, sequence: &Sequence) -> io::Result<()> {
        let rows = bar_rows(
            &sequence.keys(),
            usize::from(self.width),
            usize::from(self.height),
        );
        for (offset, row) in (0u16..).zip(rows) {
            queue!(
                self.out,
                MoveTo(0, self.top + offset),
                Clear(ClearType::CurrentLine),
                Print(row)
            )?;
        }
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, sequence: &Sequence) {
        if let Err(err) = self.draw(sequence)
            && self.error.is_none()
        {
            self.error = Some(err);
        }
    }
}

/// Prints every frame as one line of keys. Used by headless runs.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
    frames: u64,
    error: Option<io::Error>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            frames: 0,
            error: None,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, sequence: &Sequence) {
        let keys: Vec<String> = sequence.iter().map(|tile| tile.key.to_string()).collect();
        let written = writeln!(self.out, "{:>4}: {}", self.frames, keys.join(" "));
        self.frames += 1;
        if let Err(err) = written
            && self.error.is_none()
        {
            self.error = Some(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bar_width_shares_columns() {
        assert_eq!(bar_width(0, 80), 0);
        assert_eq!(bar_width(8, 80), 9);
        assert_eq!(bar_width(4, 7), 1);
        assert_eq!(bar_width(100, 10), 1);
    }

    #[test]
    fn bar_height_scales_and_rounds_up() {
        assert_eq!(bar_height(320, 320, 10), 10);
        assert_eq!(bar_height(40, 320, 10), 2);
        assert_eq!(bar_height(1, 1000, 10), 1);
        assert_eq!(bar_height(0, 0, 10), 0);
    }

    #[test]
    fn rows_are_bottom_aligned() {
        let rows = bar_rows(&[1, 3, 2], 5, 3);
        assert_eq!(
            rows,
            vec![
                "  █".to_string(),
                "  █ █".to_string(),
                "█ █ █".to_string(),
            ]
        );
    }

    #[test]
    fn rows_cut_off_what_does_not_fit() {
        let rows = bar_rows(&[1, 1, 1, 1], 3, 1);
        assert_eq!(rows, vec!["█ █".to_string()]);
    }

    #[test]
    fn empty_row() {
        assert_eq!(bar_rows(&[], 10, 2), vec![String::new(), String::new()]);
    }

    #[test]
    fn text_renderer_numbers_frames() {
        let mut r = TextRenderer::new(Vec::new());
        r.render(&Sequence::from_keys([2, 1]));
        r.render(&Sequence::from_keys([1, 2]));
        assert_eq!(r.frames(), 2);
        assert!(r.take_error().is_none());
        let text = String::from_utf8(r.into_inner()).unwrap();
        assert_eq!(text, "   0: 2 1\n   1: 1 2\n");
    }

    #[test]
    fn terminal_renderer_writes_each_row() {
        let mut r = TerminalRenderer::new(Vec::new(), 2, 3, 2);
        r.render(&Sequence::from_keys([1, 2]));
        assert!(r.take_error().is_none());
        let text = String::from_utf8_lossy(r.writer_mut()).into_owned();
        assert_eq!(text.matches(BAR).count(), 3);
        // MoveTo(0, 2) and MoveTo(0, 3), one-based on the wire.
        assert!(text.contains("\x1b[3;1H"));
        assert!(text.contains("\x1b[4;1H"));
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_are_kept_once() {
        let mut r = TerminalRenderer::new(Broken, 0, 4, 1);
        r.render(&Sequence::from_keys([1]));
        r.render(&Sequence::from_keys([1]));
        assert!(r.take_error().is_some());
        assert!(r.take_error().is_none());
    }
}
