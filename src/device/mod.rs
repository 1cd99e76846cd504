/*
 *  device/mod.rs
 *
 *  Soleri - split-flap without the clatter
 *  (c) 2026 Stuart Hunter
 *
 *  Graphics device abstraction - the board's only path to the GPU.
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

pub mod error;

#[cfg(feature = "gl-backend")]
pub mod glow;

pub mod mock;

use error::DeviceError;

/// Opaque handle to a device-side buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(u32);

impl BufferId {
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn as_raw(self) -> u32 {
        self.0
    }
}

/// Opaque handle to a device-side texture (the glyph atlas).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(u32);

impl TextureId {
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn as_raw(self) -> u32 {
        self.0
    }
}

/// Shader attribute location, as reported by the embedding program.
pub type AttributeSlot = u32;

/// How an attribute reads from an interleaved float buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeLayout {
    /// Floats per vertex for this attribute.
    pub components: i32,
    /// Byte distance between consecutive vertices.
    pub stride: i32,
    /// Byte offset of the first component within a vertex.
    pub offset: i32,
}

impl AttributeLayout {
    /// `(from, to)` glyph-index pair, tightly packed.
    pub const CHARACTER: Self = Self { components: 2, stride: 8, offset: 0 };
    /// `(x, y, z)` at the front of the 20-byte vertex.
    pub const POSITION: Self = Self { components: 3, stride: 20, offset: 0 };
    /// `(u, v)` behind the position in the same vertex.
    pub const TEXCOORD: Self = Self { components: 2, stride: 20, offset: 12 };
}

/// Attribute locations the board binds its buffers to each frame.
///
/// The texture-coordinate slot is optional: a shader that derives uv
/// from the character index alone doesn't declare the attribute.
#[derive(Debug, Clone, Copy)]
pub struct BindSlots {
    pub character: AttributeSlot,
    pub position: AttributeSlot,
    pub texcoord: Option<AttributeSlot>,
}

/// Minimal graphics-device abstraction the board renders through.
///
/// Implementations map the opaque handles to real GPU objects. All
/// methods are fallible and failures propagate to the caller unchanged;
/// the board never retries or recovers a device error.
pub trait RenderDevice {
    /// Allocates an immutable vertex buffer from interleaved floats.
    fn create_vertex_buffer(&mut self, data: &[f32]) -> Result<BufferId, DeviceError>;

    /// Allocates an immutable 16-bit triangle index buffer.
    fn create_index_buffer(&mut self, data: &[u16]) -> Result<BufferId, DeviceError>;

    /// Allocates a stream buffer expected to be rewritten frequently.
    fn create_stream_buffer(&mut self, data: &[f32]) -> Result<BufferId, DeviceError>;

    /// Replaces the full contents of a stream buffer. The new data must
    /// match the allocated length.
    fn write_stream_buffer(&mut self, buffer: BufferId, data: &[f32]) -> Result<(), DeviceError>;

    /// Points a shader attribute at a region of a float buffer.
    fn bind_attribute(
        &mut self,
        slot: AttributeSlot,
        buffer: BufferId,
        layout: AttributeLayout,
    ) -> Result<(), DeviceError>;

    /// Binds the glyph-atlas texture to the sampler unit the shader
    /// reads from.
    fn bind_texture(&mut self, texture: TextureId) -> Result<(), DeviceError>;

    /// Issues one indexed triangle draw over `index_count` indices.
    fn draw_triangles(&mut self, indices: BufferId, index_count: i32) -> Result<(), DeviceError>;
}
