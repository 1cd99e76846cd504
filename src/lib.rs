/*
 *  lib.rs
 *
 *  Soleri - split-flap without the clatter
 *  (c) 2026 Stuart Hunter
 *
 *  Animated split-flap (Solari) display board rendered with
 *  hardware-accelerated graphics.
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

//! A split-flap display board for OpenGL-class devices.
//!
//! The board is a fixed `rows × cols` grid of cells. Each cell is built
//! from four flap-half quads; two of them are hinged and driven by a
//! flip animation in the embedding application's shader. The crate owns
//! the static mesh, the per-vertex `(from, to)` glyph-index buffer that
//! encodes each cell's animation state, and the dirty-tracked upload of
//! that buffer to the device.
//!
//! The graphics context, shader program, texture atlas and animation
//! clock are collaborators supplied by the caller; the only path to the
//! GPU is the [`RenderDevice`] trait. A typical frame:
//!
//! ```no_run
//! # use soleri::*;
//! # fn frame(board: &mut Board, device: &mut MockDevice, slots: &BindSlots, dt: f32) -> Result<(), BoardError> {
//! board.update(device, dt)?;
//! board.bind(device, slots)?;
//! board.draw(device)?;
//! # Ok(()) }
//! ```
//!
//! `set_message` may be called at any point between frames; the changed
//! character buffer is pushed to the device on the next `update`.

pub mod board;
pub mod config;
pub mod device;
pub mod geometry;
pub mod glyphs;
pub mod state;

pub use board::{Board, BoardError};
pub use config::{BoardConfig, ConfigError};
pub use device::error::DeviceError;
pub use device::mock::MockDevice;
pub use device::{AttributeLayout, AttributeSlot, BindSlots, BufferId, RenderDevice, TextureId};
pub use geometry::{BoardMesh, build_mesh};
pub use glyphs::GlyphSet;
pub use state::CharacterBuffer;

#[cfg(feature = "gl-backend")]
pub use device::glow::GlowDevice;
