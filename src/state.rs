/*
 *  state.rs
 *
 *  Soleri - split-flap without the clatter
 *  (c) 2026 Stuart Hunter
 *
 *  Per-vertex animation state: the (from, to) glyph-index pairs that
 *  drive the flip animation, plus dirty tracking for device upload.
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use log::debug;

use crate::geometry::VERTICES_PER_CELL;
use crate::glyphs::GlyphSet;

/// Fractional stagger added to each cell's target index so neighbouring
/// cells with the same glyph don't settle in perfect lockstep. Stays
/// well below 1.0, so it never changes which glyph a cell shows.
pub const TARGET_JITTER: f32 = 0.1;

const FLOATS_PER_PAIR: usize = 2;

/// The flat `(from, to)` buffer mirrored into the device stream buffer.
///
/// Two floats per vertex, sixteen vertices per cell, and every vertex of
/// a cell holds the same pair. The duplication exists purely so the
/// vertex shader reads animation state without any indirection; this
/// struct is the single writer and keeps the sixteen copies in step.
#[derive(Debug, Clone)]
pub struct CharacterBuffer {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
    glyph_count: usize,
    blank: f32,
    dirty: bool,
}

impl CharacterBuffer {
    /// All cells start blank and clean; the initial device buffer is
    /// created from this state, so nothing is pending upload.
    pub fn new(rows: usize, cols: usize, glyphs: &GlyphSet) -> Self {
        let blank = glyphs.blank_index() as f32;
        Self {
            data: vec![blank; FLOATS_PER_PAIR * VERTICES_PER_CELL * rows * cols],
            rows,
            cols,
            glyph_count: glyphs.len(),
            blank,
            dirty: false,
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Called once the device-side copy has been refreshed.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// The `(from, to)` pair of a cell, read from its first vertex slot.
    pub fn pair(&self, row: usize, col: usize) -> Option<(f32, f32)> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let base = self.cell_base(row, col);
        Some((self.data[base], self.data[base + 1]))
    }

    /// Re-encodes the whole grid for a new message.
    ///
    /// Rows beyond the grid are ignored, short input pads with blank
    /// cells, and characters missing from the glyph set render blank.
    /// Each cell's new `from` is its previous `to`; when the floored
    /// target index moves backwards through the glyph order the `from`
    /// is shifted down by the glyph count instead, so the flap always
    /// animates forward through the sequence and wraps rather than
    /// spinning in reverse.
    pub fn set_message<S: AsRef<str>>(&mut self, glyphs: &GlyphSet, lines: &[S]) {
        for j in 0..self.rows {
            let line = lines
                .get(j)
                .map(|l| l.as_ref().to_uppercase())
                .unwrap_or_default();
            let mut chars = line.chars();
            for i in 0..self.cols {
                let target = match chars.next() {
                    Some(c) => glyphs.index_of(c) as f32,
                    None => self.blank,
                };
                let to = target + rand::random::<f32>() * TARGET_JITTER;
                let (_, prev_to) = self.pair(j, i).unwrap_or((self.blank, self.blank));
                let from = if to.floor() < prev_to.floor() {
                    prev_to - self.glyph_count as f32
                } else {
                    prev_to
                };
                self.write_cell(j, i, from, to);
            }
        }
        self.dirty = true;
        debug!("message encoded for {}x{} board", self.rows, self.cols);
    }

    fn cell_base(&self, row: usize, col: usize) -> usize {
        (row * self.cols + col) * VERTICES_PER_CELL * FLOATS_PER_PAIR
    }

    fn write_cell(&mut self, row: usize, col: usize, from: f32, to: f32) {
        let base = self.cell_base(row, col);
        for v in 0..VERTICES_PER_CELL {
            self.data[base + v * FLOATS_PER_PAIR] = from;
            self.data[base + v * FLOATS_PER_PAIR + 1] = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyphs() -> GlyphSet {
        GlyphSet::new("ABC ")
    }

    fn all_pairs(buf: &CharacterBuffer, row: usize, col: usize) -> Vec<(f32, f32)> {
        let base = (row * buf.cols + col) * VERTICES_PER_CELL * FLOATS_PER_PAIR;
        (0..VERTICES_PER_CELL)
            .map(|v| {
                (
                    buf.data[base + v * FLOATS_PER_PAIR],
                    buf.data[base + v * FLOATS_PER_PAIR + 1],
                )
            })
            .collect()
    }

    #[test]
    fn starts_blank_and_clean() {
        let g = glyphs();
        let buf = CharacterBuffer::new(2, 3, &g);
        assert!(!buf.is_dirty());
        assert_eq!(buf.as_slice().len(), 2 * 16 * 2 * 3);
        assert!(buf.as_slice().iter().all(|&v| v == 3.0));
    }

    #[test]
    fn scenario_one_by_three() {
        let g = glyphs();
        let mut buf = CharacterBuffer::new(1, 3, &g);
        buf.set_message(&g, &["AB"]);
        assert!(buf.is_dirty());
        assert_eq!(buf.pair(0, 0).unwrap().1.floor(), 0.0); // A
        assert_eq!(buf.pair(0, 1).unwrap().1.floor(), 1.0); // B
        assert_eq!(buf.pair(0, 2).unwrap().1.floor(), 3.0); // blank
    }

    #[test]
    fn all_sixteen_vertices_agree() {
        let g = glyphs();
        let mut buf = CharacterBuffer::new(2, 2, &g);
        buf.set_message(&g, &["AB", "C"]);
        for row in 0..2 {
            for col in 0..2 {
                let pairs = all_pairs(&buf, row, col);
                assert!(pairs.iter().all(|&p| p == pairs[0]), "cell {row},{col}");
            }
        }
    }

    #[test]
    fn case_insensitive_lookup() {
        let g = glyphs();
        let mut lower = CharacterBuffer::new(1, 3, &g);
        let mut upper = CharacterBuffer::new(1, 3, &g);
        lower.set_message(&g, &["abc"]);
        upper.set_message(&g, &["ABC"]);
        for col in 0..3 {
            assert_eq!(
                lower.pair(0, col).unwrap().1.floor(),
                upper.pair(0, col).unwrap().1.floor()
            );
        }
    }

    #[test]
    fn oversized_input_is_clipped() {
        let g = glyphs();
        let mut buf = CharacterBuffer::new(1, 2, &g);
        buf.set_message(&g, &["ABCABCABC", "ignored", "also ignored"]);
        assert_eq!(buf.pair(0, 0).unwrap().1.floor(), 0.0);
        assert_eq!(buf.pair(0, 1).unwrap().1.floor(), 1.0);
        assert_eq!(buf.pair(0, 2), None);
    }

    #[test]
    fn unknown_characters_render_blank() {
        let g = glyphs();
        let mut buf = CharacterBuffer::new(1, 1, &g);
        buf.set_message(&g, &["#"]);
        assert_eq!(buf.pair(0, 0).unwrap().1.floor(), 3.0);
    }

    #[test]
    fn short_message_pads_blank_rows() {
        let g = glyphs();
        let mut buf = CharacterBuffer::new(3, 2, &g);
        buf.set_message(&g, &["AB"]);
        for row in 1..3 {
            for col in 0..2 {
                assert_eq!(buf.pair(row, col).unwrap().1.floor(), 3.0);
            }
        }
    }

    #[test]
    fn backward_target_wraps_forward() {
        let g = glyphs();
        let mut buf = CharacterBuffer::new(1, 1, &g);
        buf.set_message(&g, &["C"]);
        let (_, prev_to) = buf.pair(0, 0).unwrap();
        buf.set_message(&g, &["A"]);
        let (from, to) = buf.pair(0, 0).unwrap();
        assert_eq!(to.floor(), 0.0);
        // exact modular shift: previous `to` minus the glyph count
        assert_eq!(from, prev_to - g.len() as f32);
    }

    #[test]
    fn forward_target_keeps_previous_to() {
        let g = glyphs();
        let mut buf = CharacterBuffer::new(1, 1, &g);
        buf.set_message(&g, &["A"]);
        let (_, prev_to) = buf.pair(0, 0).unwrap();
        buf.set_message(&g, &["C"]);
        let (from, to) = buf.pair(0, 0).unwrap();
        assert_eq!(to.floor(), 2.0);
        assert_eq!(from, prev_to);
    }

    #[test]
    fn jitter_stays_fractional() {
        let g = glyphs();
        let mut buf = CharacterBuffer::new(1, 3, &g);
        for _ in 0..20 {
            buf.set_message(&g, &["ABC"]);
            for col in 0..3 {
                let (_, to) = buf.pair(0, col).unwrap();
                let frac = to - to.floor();
                assert!(frac >= 0.0);
                // rounding at the integer boundary can nudge past the
                // nominal jitter width, never past the next glyph
                assert!(frac < TARGET_JITTER + 1e-5);
            }
        }
    }
}
