/*
 *  device/error.rs
 *
 *  Soleri - split-flap without the clatter
 *  (c) 2026 Stuart Hunter
 *
 *  Error type for graphics device operations.
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

use thiserror::Error;

use super::{BufferId, TextureId};

/// Failures raised by a [`RenderDevice`](super::RenderDevice)
/// implementation. These are fatal to the frame; the board forwards
/// them to the caller without retrying.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("buffer allocation failed: {0}")]
    Allocation(String),

    #[error("unknown buffer handle {0:?}")]
    UnknownBuffer(BufferId),

    #[error("unknown texture handle {0:?}")]
    UnknownTexture(TextureId),

    #[error("buffer size mismatch: expected {expected} floats, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}
