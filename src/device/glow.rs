/*
 *  device/glow.rs
 *
 *  Soleri - split-flap without the clatter
 *  (c) 2026 Stuart Hunter
 *
 *  OpenGL render device over the glow API.
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

use std::sync::Arc;

use glow::HasContext;
use log::debug;

use super::error::DeviceError;
use super::{AttributeLayout, AttributeSlot, BufferId, RenderDevice, TextureId};

/// [`RenderDevice`] backed by an OpenGL / WebGL2 context.
///
/// Owns a shared handle to the context and the GL objects it has
/// allocated. No GL state is assumed to survive between calls: the
/// board rebinds everything each frame, and every method here performs
/// its own `bind_buffer`. Resource release is left to context teardown,
/// matching the board's no-destructor contract.
pub struct GlowDevice {
    gl: Arc<glow::Context>,
    buffers: Vec<GlBuffer>,
    textures: Vec<glow::Texture>,
}

struct GlBuffer {
    raw: glow::Buffer,
    target: u32,
    /// Float capacity for stream buffers, 0 for static ones.
    stream_len: usize,
}

impl GlowDevice {
    pub fn new(gl: Arc<glow::Context>) -> Self {
        Self { gl, buffers: Vec::new(), textures: Vec::new() }
    }

    pub fn context(&self) -> &glow::Context {
        &self.gl
    }

    /// Registers an atlas texture created by the embedding application,
    /// returning the handle the board is constructed with.
    pub fn adopt_texture(&mut self, texture: glow::Texture) -> TextureId {
        self.textures.push(texture);
        TextureId::from_raw((self.textures.len() - 1) as u32)
    }

    fn alloc(&mut self, target: u32, bytes: &[u8], usage: u32, stream_len: usize) -> Result<BufferId, DeviceError> {
        let raw = unsafe { self.gl.create_buffer() }.map_err(DeviceError::Allocation)?;
        unsafe {
            self.gl.bind_buffer(target, Some(raw));
            self.gl.buffer_data_u8_slice(target, bytes, usage);
        }
        self.buffers.push(GlBuffer { raw, target, stream_len });
        let id = BufferId::from_raw((self.buffers.len() - 1) as u32);
        debug!("allocated gl buffer {:?}: {} bytes", id, bytes.len());
        Ok(id)
    }

    fn buffer(&self, id: BufferId) -> Result<&GlBuffer, DeviceError> {
        self.buffers
            .get(id.as_raw() as usize)
            .ok_or(DeviceError::UnknownBuffer(id))
    }
}

fn as_bytes<T: Copy>(data: &[T]) -> &[u8] {
    unsafe { std::slice::from_raw_parts(data.as_ptr() as *const u8, std::mem::size_of_val(data)) }
}

impl RenderDevice for GlowDevice {
    fn create_vertex_buffer(&mut self, data: &[f32]) -> Result<BufferId, DeviceError> {
        self.alloc(glow::ARRAY_BUFFER, as_bytes(data), glow::STATIC_DRAW, 0)
    }

    fn create_index_buffer(&mut self, data: &[u16]) -> Result<BufferId, DeviceError> {
        self.alloc(glow::ELEMENT_ARRAY_BUFFER, as_bytes(data), glow::STATIC_DRAW, 0)
    }

    fn create_stream_buffer(&mut self, data: &[f32]) -> Result<BufferId, DeviceError> {
        self.alloc(glow::ARRAY_BUFFER, as_bytes(data), glow::DYNAMIC_DRAW, data.len())
    }

    fn write_stream_buffer(&mut self, buffer: BufferId, data: &[f32]) -> Result<(), DeviceError> {
        let buf = self.buffer(buffer)?;
        if buf.stream_len != data.len() {
            return Err(DeviceError::SizeMismatch {
                expected: buf.stream_len,
                actual: data.len(),
            });
        }
        unsafe {
            self.gl.bind_buffer(buf.target, Some(buf.raw));
            self.gl.buffer_sub_data_u8_slice(buf.target, 0, as_bytes(data));
        }
        Ok(())
    }

    fn bind_attribute(
        &mut self,
        slot: AttributeSlot,
        buffer: BufferId,
        layout: AttributeLayout,
    ) -> Result<(), DeviceError> {
        let buf = self.buffer(buffer)?;
        unsafe {
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(buf.raw));
            self.gl.enable_vertex_attrib_array(slot);
            self.gl.vertex_attrib_pointer_f32(
                slot,
                layout.components,
                glow::FLOAT,
                false,
                layout.stride,
                layout.offset,
            );
        }
        Ok(())
    }

    fn bind_texture(&mut self, texture: TextureId) -> Result<(), DeviceError> {
        let tex = *self
            .textures
            .get(texture.as_raw() as usize)
            .ok_or(DeviceError::UnknownTexture(texture))?;
        unsafe {
            self.gl.active_texture(glow::TEXTURE0);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(tex));
        }
        Ok(())
    }

    fn draw_triangles(&mut self, indices: BufferId, index_count: i32) -> Result<(), DeviceError> {
        let buf = self.buffer(indices)?;
        unsafe {
            self.gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(buf.raw));
            self.gl
                .draw_elements(glow::TRIANGLES, index_count, glow::UNSIGNED_SHORT, 0);
        }
        Ok(())
    }
}
