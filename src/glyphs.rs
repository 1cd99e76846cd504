/*
 *  glyphs.rs
 *
 *  Soleri - split-flap without the clatter
 *  (c) 2026 Stuart Hunter
 *
 *  Ordered glyph set backing the texture atlas.
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

/// Glyph order of the stock atlas shipped with the demo assets.
/// The trailing space is the blank flap.
pub const DEFAULT_GLYPHS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789:.-?! ";

/// The ordered set of characters available in the texture atlas.
///
/// A glyph's index doubles as its atlas coordinate: the shader derives
/// the texture offset from the index alone. The last entry is reserved
/// as the blank flap, and every lookup that misses resolves to it, so
/// indexing never fails.
#[derive(Debug, Clone)]
pub struct GlyphSet {
    chars: Vec<char>,
}

impl GlyphSet {
    pub fn new(chars: &str) -> Self {
        Self { chars: chars.chars().collect() }
    }

    /// Number of glyphs in the set, blank included.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Index of the blank flap (always the last glyph).
    pub fn blank_index(&self) -> usize {
        self.chars.len().saturating_sub(1)
    }

    /// Atlas index for `c`; unknown characters fall back to blank.
    pub fn index_of(&self, c: char) -> usize {
        self.chars
            .iter()
            .position(|&g| g == c)
            .unwrap_or_else(|| self.blank_index())
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::new(DEFAULT_GLYPHS)
    }
}
