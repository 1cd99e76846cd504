/*
 *  board.rs
 *
 *  Soleri - split-flap without the clatter
 *  (c) 2026 Stuart Hunter
 *
 *  The split-flap board: mesh, animation state and device plumbing.
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

use log::{info, trace};
use thiserror::Error;

use crate::config::{BoardConfig, ConfigError};
use crate::device::error::DeviceError;
use crate::device::{AttributeLayout, BindSlots, BufferId, RenderDevice, TextureId};
use crate::geometry::build_mesh;
use crate::glyphs::GlyphSet;
use crate::state::CharacterBuffer;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("invalid board config: {0}")]
    Config(#[from] ConfigError),
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
}

/// A split-flap display board.
///
/// Construction builds the static cell mesh, allocates the device-side
/// vertex, index and character buffers, and leaves the board showing
/// all blanks. Afterwards it cycles through `set_message` / `update` /
/// `bind` / `draw` indefinitely, all on the thread owning the device
/// context. There is no teardown: device resource release belongs to
/// the embedding application.
pub struct Board {
    glyphs: GlyphSet,
    chars: CharacterBuffer,
    rows: usize,
    cols: usize,
    speed: f32,
    timing: f32,
    index_count: i32,
    texture: TextureId,
    vertex_buffer: BufferId,
    index_buffer: BufferId,
    character_buffer: BufferId,
}

impl Board {
    pub fn new(
        device: &mut dyn RenderDevice,
        texture: TextureId,
        config: &BoardConfig,
    ) -> Result<Self, BoardError> {
        config.validate()?;

        let glyphs = GlyphSet::new(&config.chars);
        let mesh = build_mesh(config.rows, config.cols);
        let chars = CharacterBuffer::new(config.rows, config.cols, &glyphs);
        info!(
            "building {}x{} board: {} vertices, {} indices, {} glyphs",
            config.rows,
            config.cols,
            mesh.vertex_count(),
            mesh.index_count(),
            glyphs.len()
        );

        let vertex_buffer = device.create_vertex_buffer(&mesh.vertices)?;
        let index_buffer = device.create_index_buffer(&mesh.indices)?;
        let character_buffer = device.create_stream_buffer(chars.as_slice())?;

        Ok(Self {
            glyphs,
            chars,
            rows: config.rows,
            cols: config.cols,
            speed: config.speed,
            timing: 0.0,
            index_count: mesh.index_count() as i32,
            texture,
            vertex_buffer,
            index_buffer,
            character_buffer,
        })
    }

    /// `(rows, cols)` of the grid.
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Re-encodes the character buffer for a new message. One string
    /// per row; excess rows and columns are clipped, short input pads
    /// blank, lookup is case-insensitive. Touches no device state; the
    /// changed buffer goes out on the next [`update`](Self::update).
    pub fn set_message<S: AsRef<str>>(&mut self, lines: &[S]) {
        self.chars.set_message(&self.glyphs, lines);
    }

    /// Advances the animation clock and flushes the character buffer to
    /// the device if a message update left it dirty. Issues no device
    /// call at all when clean.
    pub fn update(&mut self, device: &mut dyn RenderDevice, elapsed: f32) -> Result<(), BoardError> {
        self.timing = (self.timing + elapsed * self.speed).min(self.glyphs.len() as f32);
        if self.chars.is_dirty() {
            device.write_stream_buffer(self.character_buffer, self.chars.as_slice())?;
            self.chars.clear_dirty();
            trace!("character buffer uploaded ({} floats)", self.chars.as_slice().len());
        }
        Ok(())
    }

    /// Binds the atlas texture and the three owned buffers to the
    /// given attribute slots. Nothing is cached device-side between
    /// frames, so this must precede every [`draw`](Self::draw).
    pub fn bind(&self, device: &mut dyn RenderDevice, slots: &BindSlots) -> Result<(), BoardError> {
        device.bind_texture(self.texture)?;
        device.bind_attribute(slots.character, self.character_buffer, AttributeLayout::CHARACTER)?;
        device.bind_attribute(slots.position, self.vertex_buffer, AttributeLayout::POSITION)?;
        if let Some(texcoord) = slots.texcoord {
            device.bind_attribute(texcoord, self.vertex_buffer, AttributeLayout::TEXCOORD)?;
        }
        Ok(())
    }

    /// One indexed triangle draw covering every flap half on the board.
    pub fn draw(&self, device: &mut dyn RenderDevice) -> Result<(), BoardError> {
        device.draw_triangles(self.index_buffer, self.index_count)?;
        Ok(())
    }

    /// Accumulated animation progress, clamped to the glyph count. Fed
    /// to the flip shader as its progress uniform.
    pub fn timing(&self) -> f32 {
        self.timing
    }

    /// Restarts the animation clock, typically alongside a new page of
    /// content.
    pub fn reset_timing(&mut self) {
        self.timing = 0.0;
    }

    /// The `(from, to)` glyph pair a cell is animating through.
    pub fn cell_state(&self, row: usize, col: usize) -> Option<(f32, f32)> {
        self.chars.pair(row, col)
    }
}
