/*
 *  geometry.rs
 *
 *  Soleri - split-flap without the clatter
 *  (c) 2026 Stuart Hunter
 *
 *  Static mesh builder for the flap grid.
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

/// Width of one flap half, in model units.
pub const CHAR_WIDTH: f32 = 1.0;
/// Height of one flap half; a full cell is two of these stacked.
pub const CHAR_HEIGHT: f32 = 1.0;
/// Gap between neighbouring cells, both axes.
pub const CHAR_SPACING: f32 = 0.1;

/// 4 flap-half quads of 4 vertices each.
pub const VERTICES_PER_CELL: usize = 16;
/// 4 quads, 2 triangles apiece.
pub const INDICES_PER_CELL: usize = 24;
/// (x, y, z, u, v) — 20-byte vertex stride.
pub const FLOATS_PER_VERTEX: usize = 5;

/// z value marking the two moving vertices of a hinged quad. The vertex
/// shader treats any vertex with z >= 1.0 as riding the flap rotation;
/// everything else stays put at z = 0.
pub const HINGE_Z_MARKER: f32 = 1.0;

/// Whether a quad takes part in the flip animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlapMotion {
    /// Static half, never moves.
    Fixed,
    /// Hinged flap; its top two vertices carry [`HINGE_Z_MARKER`].
    Hinged,
}

/// Which side of a quad faces the viewer, deciding the winding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlapFace {
    Front,
    /// Back face: winding reversed so the quad shows once the flap has
    /// rotated past vertical.
    Back,
}

/// The static geometry of a board: interleaved `(x, y, z, u, v)` vertex
/// data and a `u16` triangle index list.
///
/// Built once at board construction and never touched again; all
/// animation state lives in the separate character buffer.
#[derive(Debug, Clone)]
pub struct BoardMesh {
    pub vertices: Vec<f32>,
    pub indices: Vec<u16>,
}

impl BoardMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / FLOATS_PER_VERTEX
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Appends one flap-half quad spanning `[x, x+w] × [y, y+h]`, with
    /// texture v running from `v_bottom` at the lower edge to `v_top` at
    /// the upper edge (u always spans [0, 1]).
    fn push_quad(&mut self, x: f32, y: f32, v_bottom: f32, v_top: f32, motion: FlapMotion, face: FlapFace) {
        let base = self.vertex_count() as u16;
        let z_top = match motion {
            FlapMotion::Fixed => 0.0,
            FlapMotion::Hinged => HINGE_Z_MARKER,
        };

        // top-left, top-right, bottom-right, bottom-left
        #[rustfmt::skip]
        let corners: [[f32; FLOATS_PER_VERTEX]; 4] = [
            [x,              y + CHAR_HEIGHT, z_top, 0.0, v_top],
            [x + CHAR_WIDTH, y + CHAR_HEIGHT, z_top, 1.0, v_top],
            [x + CHAR_WIDTH, y,               0.0,   1.0, v_bottom],
            [x,              y,               0.0,   0.0, v_bottom],
        ];
        for corner in corners {
            self.vertices.extend_from_slice(&corner);
        }

        match face {
            FlapFace::Front => self
                .indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]),
            FlapFace::Back => self
                .indices
                .extend_from_slice(&[base + 2, base + 1, base, base + 3, base + 2, base]),
        }
    }
}

/// Builds the full grid mesh: `rows × cols` cells in row-major order,
/// centered on the origin.
///
/// Each cell emits its four flap halves in fixed order:
///   1. static bottom half of the resting glyph,
///   2. static top half of the incoming glyph,
///   3. hinged front flap showing the departing glyph,
///   4. hinged back flap showing the bottom of the incoming glyph
///      (negative v so the back face samples the lower half mirrored).
pub fn build_mesh(rows: usize, cols: usize) -> BoardMesh {
    let cells = rows * cols;
    let mut mesh = BoardMesh {
        vertices: Vec::with_capacity(cells * VERTICES_PER_CELL * FLOATS_PER_VERTEX),
        indices: Vec::with_capacity(cells * INDICES_PER_CELL),
    };

    let advance_x = CHAR_SPACING + CHAR_WIDTH;
    let advance_y = CHAR_SPACING + 2.0 * CHAR_HEIGHT;
    let offset_x = -(cols as f32 / 2.0) * advance_x;
    let offset_y = (rows as f32 / 2.0) * advance_y;

    for j in 0..rows {
        for i in 0..cols {
            let x = offset_x + i as f32 * advance_x;
            // hinge line of the cell; top halves sit above it
            let hinge = offset_y - j as f32 * advance_y - CHAR_HEIGHT;

            mesh.push_quad(x, hinge - CHAR_HEIGHT, 0.0, 0.5, FlapMotion::Fixed, FlapFace::Front);
            mesh.push_quad(x, hinge, 0.5, 1.0, FlapMotion::Fixed, FlapFace::Front);
            mesh.push_quad(x, hinge, 0.5, 1.0, FlapMotion::Hinged, FlapFace::Front);
            mesh.push_quad(x, hinge, 0.0, -0.5, FlapMotion::Hinged, FlapFace::Back);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell_vertices(mesh: &BoardMesh, cell: usize) -> &[f32] {
        let span = VERTICES_PER_CELL * FLOATS_PER_VERTEX;
        &mesh.vertices[cell * span..(cell + 1) * span]
    }

    #[test]
    fn counts_match_grid_size() {
        for (rows, cols) in [(1, 1), (1, 3), (4, 5), (6, 24)] {
            let mesh = build_mesh(rows, cols);
            assert_eq!(mesh.vertex_count(), VERTICES_PER_CELL * rows * cols);
            assert_eq!(mesh.index_count(), INDICES_PER_CELL * rows * cols);
        }
    }

    #[test]
    fn hinge_markers_on_animated_quads_only() {
        let mesh = build_mesh(2, 2);
        for cell in 0..4 {
            let verts = cell_vertices(&mesh, cell);
            for (v, chunk) in verts.chunks_exact(FLOATS_PER_VERTEX).enumerate() {
                let quad = v / 4;
                let corner = v % 4;
                // quads 2 and 3 are hinged; their top two corners are marked
                let expect = if quad >= 2 && corner < 2 { HINGE_Z_MARKER } else { 0.0 };
                assert_eq!(chunk[2], expect, "cell {cell} quad {quad} corner {corner}");
            }
        }
    }

    #[test]
    fn back_face_winding_is_reversed() {
        let mesh = build_mesh(1, 1);
        let front = &mesh.indices[12..18]; // quad 2: hinged front
        let back = &mesh.indices[18..24]; // quad 3: hinged back
        assert_eq!(front, &[8, 9, 10, 8, 10, 11]);
        assert_eq!(back, &[14, 13, 12, 15, 14, 12]);
    }

    #[test]
    fn back_flap_samples_mirrored_bottom_half() {
        let mesh = build_mesh(1, 1);
        let verts = cell_vertices(&mesh, 0);
        // quad 3 top corners carry v = -0.5, bottom corners v = 0.0
        let quad3 = &verts[12 * FLOATS_PER_VERTEX..];
        assert_eq!(quad3[4], -0.5);
        assert_eq!(quad3[FLOATS_PER_VERTEX + 4], -0.5);
        assert_eq!(quad3[2 * FLOATS_PER_VERTEX + 4], 0.0);
        assert_eq!(quad3[3 * FLOATS_PER_VERTEX + 4], 0.0);
    }

    #[test]
    fn grid_is_centered() {
        let mesh = build_mesh(2, 4);
        let xs: Vec<f32> = mesh
            .vertices
            .chunks_exact(FLOATS_PER_VERTEX)
            .map(|v| v[0])
            .collect();
        let ys: Vec<f32> = mesh
            .vertices
            .chunks_exact(FLOATS_PER_VERTEX)
            .map(|v| v[1])
            .collect();
        let min_x = xs.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_x = xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let min_y = ys.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_y = ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        // symmetric about the origin modulo the trailing cell gap
        assert!((min_x + max_x + CHAR_SPACING).abs() < 1e-5);
        assert!((min_y + max_y - CHAR_SPACING).abs() < 1e-5);
    }

    #[test]
    fn cells_advance_row_major() {
        let mesh = build_mesh(1, 2);
        let c0 = cell_vertices(&mesh, 0);
        let c1 = cell_vertices(&mesh, 1);
        // second cell shifted right by one advance, same height
        assert!((c1[0] - c0[0] - (CHAR_SPACING + CHAR_WIDTH)).abs() < 1e-6);
        assert_eq!(c0[1], c1[1]);
    }
}
