/*
 *  device/mock.rs
 *
 *  Soleri - split-flap without the clatter
 *  (c) 2026 Stuart Hunter
 *
 *  Mock render device for testing without a GL context.
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

use super::error::DeviceError;
use super::{AttributeLayout, AttributeSlot, BufferId, RenderDevice, TextureId};

/// In-memory [`RenderDevice`] that records every operation.
///
/// Backs the test suite and hardware-free development: buffers live in
/// plain `Vec`s, and allocation, write, bind and draw activity is kept
/// for later inspection.
#[derive(Debug, Default)]
pub struct MockDevice {
    float_buffers: Vec<Vec<f32>>,
    index_buffers: Vec<Vec<u16>>,
    /// Number of stream-buffer writes issued, per buffer handle.
    pub stream_writes: Vec<(BufferId, usize)>,
    /// Attribute bindings in the order they were issued.
    pub bound_attributes: Vec<(AttributeSlot, BufferId, AttributeLayout)>,
    /// Texture bindings in the order they were issued.
    pub bound_textures: Vec<TextureId>,
    /// Index counts of the draws issued.
    pub draws: Vec<i32>,
    next_texture: u32,
}

impl MockDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stand-in atlas handle; the mock never inspects texel data.
    pub fn stub_texture(&mut self) -> TextureId {
        let id = TextureId::from_raw(self.next_texture);
        self.next_texture += 1;
        id
    }

    /// Current contents of a float buffer, if the handle is known.
    pub fn float_buffer(&self, buffer: BufferId) -> Option<&[f32]> {
        self.float_buffers
            .get(buffer.as_raw() as usize)
            .map(|b| b.as_slice())
    }

    /// Current contents of an index buffer, if the handle is known.
    pub fn index_buffer(&self, buffer: BufferId) -> Option<&[u16]> {
        self.index_buffers
            .get(buffer.as_raw() as usize)
            .map(|b| b.as_slice())
    }

    /// Total stream writes across all buffers.
    pub fn total_writes(&self) -> usize {
        self.stream_writes.len()
    }

    fn push_float_buffer(&mut self, data: &[f32]) -> BufferId {
        self.float_buffers.push(data.to_vec());
        BufferId::from_raw((self.float_buffers.len() - 1) as u32)
    }
}

impl RenderDevice for MockDevice {
    fn create_vertex_buffer(&mut self, data: &[f32]) -> Result<BufferId, DeviceError> {
        Ok(self.push_float_buffer(data))
    }

    fn create_index_buffer(&mut self, data: &[u16]) -> Result<BufferId, DeviceError> {
        // index handles share one id space with float buffers
        self.float_buffers.push(Vec::new());
        let id = BufferId::from_raw((self.float_buffers.len() - 1) as u32);
        while self.index_buffers.len() <= id.as_raw() as usize {
            self.index_buffers.push(Vec::new());
        }
        self.index_buffers[id.as_raw() as usize] = data.to_vec();
        Ok(id)
    }

    fn create_stream_buffer(&mut self, data: &[f32]) -> Result<BufferId, DeviceError> {
        Ok(self.push_float_buffer(data))
    }

    fn write_stream_buffer(&mut self, buffer: BufferId, data: &[f32]) -> Result<(), DeviceError> {
        let slot = self
            .float_buffers
            .get_mut(buffer.as_raw() as usize)
            .ok_or(DeviceError::UnknownBuffer(buffer))?;
        if slot.len() != data.len() {
            return Err(DeviceError::SizeMismatch {
                expected: slot.len(),
                actual: data.len(),
            });
        }
        slot.copy_from_slice(data);
        self.stream_writes.push((buffer, data.len()));
        Ok(())
    }

    fn bind_attribute(
        &mut self,
        slot: AttributeSlot,
        buffer: BufferId,
        layout: AttributeLayout,
    ) -> Result<(), DeviceError> {
        if self.float_buffers.get(buffer.as_raw() as usize).is_none() {
            return Err(DeviceError::UnknownBuffer(buffer));
        }
        self.bound_attributes.push((slot, buffer, layout));
        Ok(())
    }

    fn bind_texture(&mut self, texture: TextureId) -> Result<(), DeviceError> {
        self.bound_textures.push(texture);
        Ok(())
    }

    fn draw_triangles(&mut self, indices: BufferId, index_count: i32) -> Result<(), DeviceError> {
        if self.index_buffers.get(indices.as_raw() as usize).is_none() {
            return Err(DeviceError::UnknownBuffer(indices));
        }
        self.draws.push(index_count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_round_trip() {
        let mut dev = MockDevice::new();
        let vb = dev.create_vertex_buffer(&[1.0, 2.0]).unwrap();
        let ib = dev.create_index_buffer(&[0, 1, 2]).unwrap();
        assert_ne!(vb, ib);
        assert_eq!(dev.float_buffer(vb).unwrap(), &[1.0, 2.0]);
        assert_eq!(dev.index_buffer(ib).unwrap(), &[0, 1, 2]);
    }

    #[test]
    fn stream_write_checks_length() {
        let mut dev = MockDevice::new();
        let sb = dev.create_stream_buffer(&[0.0; 4]).unwrap();
        assert!(matches!(
            dev.write_stream_buffer(sb, &[0.0; 3]),
            Err(DeviceError::SizeMismatch { expected: 4, actual: 3 })
        ));
        dev.write_stream_buffer(sb, &[1.0; 4]).unwrap();
        assert_eq!(dev.total_writes(), 1);
    }

    #[test]
    fn unknown_handles_are_rejected() {
        let mut dev = MockDevice::new();
        let bogus = BufferId::from_raw(42);
        assert!(matches!(
            dev.write_stream_buffer(bogus, &[]),
            Err(DeviceError::UnknownBuffer(_))
        ));
        assert!(matches!(
            dev.draw_triangles(bogus, 6),
            Err(DeviceError::UnknownBuffer(_))
        ));
    }
}
