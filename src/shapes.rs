//! Procedural mesh primitives: square grid, cube, and UV sphere.
//!
//! Each generator fills a fresh [`Shape`] — plain CPU-side buffers the
//! caller owns outright and hands to whatever rendering backend it drives.
//! Nothing is cached or shared between calls.
//!
//! ```
//! use eskit::Shape;
//!
//! let terrain = Shape::square_grid(16).unwrap();
//! let crate_box = Shape::cube(2.0);
//! let planet = Shape::sphere(32, 1.0).unwrap();
//!
//! assert_eq!(crate_box.triangle_count(), 12);
//! ```
//!
//! # Buffers and attributes
//!
//! The per-vertex buffers are parallel: index values address positions,
//! normals, and texture coordinates alike, and every index is less than the
//! vertex count. Normals and texture coordinates are `Option`al — the grid
//! generator produces neither, while cube and sphere always produce both.
//!
//! # Preconditions
//!
//! Parameters that would make the reference formulas degenerate (a grid
//! smaller than 2×2, a sphere with fewer than 4 slices or a non-positive
//! radius) are rejected with a [`ShapeError`] instead of silently emitting
//! zero-area or NaN-filled geometry.

/// Errors from the shape generators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeError {
    /// A square grid needs at least 2×2 vertices to form a quad.
    GridTooSmall { size: u32 },
    /// A UV sphere needs at least 4 slices; below that the texture-coordinate
    /// lattice has no second parallel to interpolate across.
    TooFewSlices { num_slices: u32 },
    /// Sphere normals are positions divided by the radius, so the radius must
    /// be strictly positive.
    NonPositiveRadius { radius: f32 },
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::GridTooSmall { size } => {
                write!(f, "grid size {} is below the 2x2 minimum", size)
            }
            ShapeError::TooFewSlices { num_slices } => {
                write!(f, "sphere slice count {} is below the minimum of 4", num_slices)
            }
            ShapeError::NonPositiveRadius { radius } => {
                write!(f, "sphere radius {} must be positive", radius)
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// CPU-side mesh buffers produced by the shape generators.
///
/// Positions and indices are always present; normals and texture coordinates
/// only when the primitive defines them. The `*_bytes` accessors give the
/// byte views vertex- and index-buffer upload wants.
#[derive(Clone, Debug)]
pub struct Shape {
    /// One `[x, y, z]` position per vertex.
    pub positions: Vec<[f32; 3]>,
    /// One unit `[x, y, z]` normal per vertex, when the primitive has them.
    pub normals: Option<Vec<[f32; 3]>>,
    /// One `[u, v]` texture coordinate per vertex, when the primitive has them.
    pub texcoords: Option<Vec<[f32; 2]>>,
    /// Triangle-list indices into the per-vertex buffers.
    pub indices: Vec<u32>,
}

impl Shape {
    /// Number of vertices shared by all per-vertex buffers.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of indices in the triangle list.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of triangles described by the index buffer.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Position buffer as raw bytes.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normal buffer as raw bytes, if normals were generated.
    pub fn normal_bytes(&self) -> Option<&[u8]> {
        self.normals.as_deref().map(|n| bytemuck::cast_slice(n))
    }

    /// Texture-coordinate buffer as raw bytes, if texcoords were generated.
    pub fn texcoord_bytes(&self) -> Option<&[u8]> {
        self.texcoords.as_deref().map(|t| bytemuck::cast_slice(t))
    }

    /// Index buffer as raw bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Generates a `size × size` vertex grid covering the unit square.
    ///
    /// Vertices lie at `(i / (size-1), j / (size-1), 0)` for row `i`, column
    /// `j`, in row-major order. Each of the `(size-1)²` quads is split into
    /// two counter-clockwise triangles. The grid carries no normals or
    /// texture coordinates.
    ///
    /// Fails with [`ShapeError::GridTooSmall`] when `size < 2`.
    pub fn square_grid(size: u32) -> Result<Shape, ShapeError> {
        if size < 2 {
            return Err(ShapeError::GridTooSmall { size });
        }
        let step = (size - 1) as f32;

        let mut positions = Vec::with_capacity((size * size) as usize);
        for i in 0..size {
            for j in 0..size {
                positions.push([i as f32 / step, j as f32 / step, 0.0]);
            }
        }

        let quads = (size - 1) * (size - 1);
        let mut indices = Vec::with_capacity((quads * 6) as usize);
        for i in 0..size - 1 {
            for j in 0..size - 1 {
                indices.extend_from_slice(&[
                    j + i * size,
                    j + i * size + 1,
                    j + (i + 1) * size + 1,
                    j + i * size,
                    j + (i + 1) * size + 1,
                    j + (i + 1) * size,
                ]);
            }
        }

        Ok(Shape {
            positions,
            normals: None,
            texcoords: None,
            indices,
        })
    }

    /// Generates a cube of edge length `scale`, centered at the origin.
    ///
    /// The cube is a fixed 24-vertex, 36-index table: each face owns four
    /// vertices so per-face normals and the 0–1 UV square are exact, with no
    /// sharing across faces. Only the positions depend on `scale`; topology,
    /// normals, and texture coordinates are constant.
    pub fn cube(scale: f32) -> Shape {
        #[rustfmt::skip]
        const POSITIONS: [[f32; 3]; 24] = [
            // bottom (Y-)
            [-0.5, -0.5, -0.5], [-0.5, -0.5,  0.5], [ 0.5, -0.5,  0.5], [ 0.5, -0.5, -0.5],
            // top (Y+)
            [-0.5,  0.5, -0.5], [-0.5,  0.5,  0.5], [ 0.5,  0.5,  0.5], [ 0.5,  0.5, -0.5],
            // back (Z-)
            [-0.5, -0.5, -0.5], [-0.5,  0.5, -0.5], [ 0.5,  0.5, -0.5], [ 0.5, -0.5, -0.5],
            // front (Z+)
            [-0.5, -0.5,  0.5], [-0.5,  0.5,  0.5], [ 0.5,  0.5,  0.5], [ 0.5, -0.5,  0.5],
            // left (X-)
            [-0.5, -0.5, -0.5], [-0.5, -0.5,  0.5], [-0.5,  0.5,  0.5], [-0.5,  0.5, -0.5],
            // right (X+)
            [ 0.5, -0.5, -0.5], [ 0.5, -0.5,  0.5], [ 0.5,  0.5,  0.5], [ 0.5,  0.5, -0.5],
        ];

        #[rustfmt::skip]
        const NORMALS: [[f32; 3]; 24] = [
            [ 0.0, -1.0,  0.0], [ 0.0, -1.0,  0.0], [ 0.0, -1.0,  0.0], [ 0.0, -1.0,  0.0],
            [ 0.0,  1.0,  0.0], [ 0.0,  1.0,  0.0], [ 0.0,  1.0,  0.0], [ 0.0,  1.0,  0.0],
            [ 0.0,  0.0, -1.0], [ 0.0,  0.0, -1.0], [ 0.0,  0.0, -1.0], [ 0.0,  0.0, -1.0],
            [ 0.0,  0.0,  1.0], [ 0.0,  0.0,  1.0], [ 0.0,  0.0,  1.0], [ 0.0,  0.0,  1.0],
            [-1.0,  0.0,  0.0], [-1.0,  0.0,  0.0], [-1.0,  0.0,  0.0], [-1.0,  0.0,  0.0],
            [ 1.0,  0.0,  0.0], [ 1.0,  0.0,  0.0], [ 1.0,  0.0,  0.0], [ 1.0,  0.0,  0.0],
        ];

        #[rustfmt::skip]
        const TEXCOORDS: [[f32; 2]; 24] = [
            [0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0],
            [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0],
            [0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0],
            [0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0],
            [0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0],
            [0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0],
        ];

        #[rustfmt::skip]
        const INDICES: [u32; 36] = [
            0,  2,  1,    0,  3,  2,
            4,  5,  6,    4,  6,  7,
            8,  9,  10,   8,  10, 11,
            12, 15, 14,   12, 14, 13,
            16, 17, 18,   16, 18, 19,
            20, 23, 22,   20, 22, 21,
        ];

        let positions = POSITIONS
            .iter()
            .map(|p| [p[0] * scale, p[1] * scale, p[2] * scale])
            .collect();

        Shape {
            positions,
            normals: Some(NORMALS.to_vec()),
            texcoords: Some(TEXCOORDS.to_vec()),
            indices: INDICES.to_vec(),
        }
    }

    /// Generates a UV sphere from latitude/longitude subdivision.
    ///
    /// `num_slices` is the longitude sample count; the parallel (latitude)
    /// count is `num_slices / 2`, truncating for odd inputs. Longitude wraps
    /// with a duplicated seam column so texture coordinates stay monotonic,
    /// giving `(num_slices/2 + 1) × (num_slices + 1)` vertices and
    /// `(num_slices/2) × num_slices × 2` triangles. Normals point outward
    /// with unit length; texture coordinates are an equirectangular unwrap.
    ///
    /// Fails with [`ShapeError::TooFewSlices`] when `num_slices < 4` and
    /// [`ShapeError::NonPositiveRadius`] when `radius <= 0`.
    pub fn sphere(num_slices: u32, radius: f32) -> Result<Shape, ShapeError> {
        if num_slices < 4 {
            return Err(ShapeError::TooFewSlices { num_slices });
        }
        if radius <= 0.0 {
            return Err(ShapeError::NonPositiveRadius { radius });
        }

        let num_parallels = num_slices / 2;
        let vertex_count = ((num_parallels + 1) * (num_slices + 1)) as usize;
        let angle_step = 2.0 * std::f32::consts::PI / num_slices as f32;

        let mut positions = Vec::with_capacity(vertex_count);
        let mut normals = Vec::with_capacity(vertex_count);
        let mut texcoords = Vec::with_capacity(vertex_count);

        for i in 0..=num_parallels {
            let lat = angle_step * i as f32;
            for j in 0..=num_slices {
                let lon = angle_step * j as f32;
                let position = [
                    radius * lat.sin() * lon.sin(),
                    radius * lat.cos(),
                    radius * lat.sin() * lon.cos(),
                ];
                positions.push(position);
                normals.push([
                    position[0] / radius,
                    position[1] / radius,
                    position[2] / radius,
                ]);
                texcoords.push([
                    j as f32 / num_slices as f32,
                    (1.0 - i as f32) / (num_parallels - 1) as f32,
                ]);
            }
        }

        let mut indices = Vec::with_capacity((num_parallels * num_slices * 6) as usize);
        let stride = num_slices + 1;
        for i in 0..num_parallels {
            for j in 0..num_slices {
                indices.extend_from_slice(&[
                    i * stride + j,
                    (i + 1) * stride + j,
                    (i + 1) * stride + j + 1,
                    i * stride + j,
                    (i + 1) * stride + j + 1,
                    i * stride + j + 1,
                ]);
            }
        }

        Ok(Shape {
            positions,
            normals: Some(normals),
            texcoords: Some(texcoords),
            indices,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn assert_indices_in_bounds(shape: &Shape) {
        let count = shape.vertex_count() as u32;
        assert!(shape.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn square_grid_minimal() {
        let grid = Shape::square_grid(2).unwrap();
        assert_eq!(grid.vertex_count(), 4);
        assert_eq!(grid.index_count(), 6);
        assert_eq!(grid.triangle_count(), 2);
        assert_indices_in_bounds(&grid);
        assert!(grid.normals.is_none());
        assert!(grid.texcoords.is_none());

        // Corners of the unit square, row-major.
        assert_eq!(grid.positions[0], [0.0, 0.0, 0.0]);
        assert_eq!(grid.positions[1], [0.0, 1.0, 0.0]);
        assert_eq!(grid.positions[2], [1.0, 0.0, 0.0]);
        assert_eq!(grid.positions[3], [1.0, 1.0, 0.0]);
    }

    #[test]
    fn square_grid_quad_split() {
        let grid = Shape::square_grid(3).unwrap();
        assert_eq!(grid.vertex_count(), 9);
        assert_eq!(grid.index_count(), 24);
        assert_indices_in_bounds(&grid);
        // First quad splits along the (0, i+1,j+1) diagonal.
        assert_eq!(&grid.indices[..6], &[0, 1, 4, 0, 4, 3]);
    }

    #[test]
    fn square_grid_rejects_degenerate_size() {
        assert!(matches!(
            Shape::square_grid(1),
            Err(ShapeError::GridTooSmall { size: 1 })
        ));
        assert!(Shape::square_grid(0).is_err());
    }

    #[test]
    fn cube_unit() {
        let cube = Shape::cube(1.0);
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.index_count(), 36);
        assert_eq!(cube.triangle_count(), 12);
        assert_indices_in_bounds(&cube);

        // Every normal is a unit axis vector.
        for n in cube.normals.as_ref().unwrap() {
            let magnitude = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((magnitude - 1.0).abs() < EPSILON);
            assert_eq!(n.iter().filter(|c| **c != 0.0).count(), 1);
        }

        // Bounding box spans exactly [-0.5, 0.5] on every axis.
        for axis in 0..3 {
            let min = cube.positions.iter().map(|p| p[axis]).fold(f32::MAX, f32::min);
            let max = cube.positions.iter().map(|p| p[axis]).fold(f32::MIN, f32::max);
            assert_eq!(min, -0.5);
            assert_eq!(max, 0.5);
        }
    }

    #[test]
    fn cube_scale_affects_positions_only() {
        let cube = Shape::cube(3.0);
        for axis in 0..3 {
            let max = cube.positions.iter().map(|p| p[axis]).fold(f32::MIN, f32::max);
            assert_eq!(max, 1.5);
        }
        assert_eq!(cube.indices, Shape::cube(1.0).indices);
        assert_eq!(cube.texcoords, Shape::cube(1.0).texcoords);
    }

    #[test]
    fn sphere_eight_slices() {
        let sphere = Shape::sphere(8, 2.0).unwrap();
        // 4 parallels: 5 x 9 vertices, 4 x 8 quads.
        assert_eq!(sphere.vertex_count(), 45);
        assert_eq!(sphere.index_count(), 192);
        assert_indices_in_bounds(&sphere);

        for p in &sphere.positions {
            let magnitude = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!((magnitude - 2.0).abs() < 1e-4);
        }
        for n in sphere.normals.as_ref().unwrap() {
            let magnitude = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((magnitude - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn sphere_seam_duplicates_first_column() {
        let sphere = Shape::sphere(8, 1.0).unwrap();
        let stride = 9;
        for row in 0..5 {
            let first = sphere.positions[row * stride];
            let seam = sphere.positions[row * stride + 8];
            for axis in 0..3 {
                assert!((first[axis] - seam[axis]).abs() < 1e-5);
            }
            // Same point, but u wraps from 0 to 1.
            let tex = sphere.texcoords.as_ref().unwrap();
            assert_eq!(tex[row * stride][0], 0.0);
            assert_eq!(tex[row * stride + 8][0], 1.0);
        }
    }

    #[test]
    fn sphere_odd_slices_truncate_parallels() {
        let sphere = Shape::sphere(9, 1.0).unwrap();
        // 9 / 2 = 4 parallels: 5 x 10 vertices, 4 x 9 quads.
        assert_eq!(sphere.vertex_count(), 50);
        assert_eq!(sphere.index_count(), 216);
        assert_indices_in_bounds(&sphere);
    }

    #[test]
    fn sphere_rejects_degenerate_parameters() {
        assert!(matches!(
            Shape::sphere(3, 1.0),
            Err(ShapeError::TooFewSlices { num_slices: 3 })
        ));
        assert!(matches!(
            Shape::sphere(8, 0.0),
            Err(ShapeError::NonPositiveRadius { .. })
        ));
        assert!(matches!(
            Shape::sphere(8, -2.0),
            Err(ShapeError::NonPositiveRadius { .. })
        ));
    }

    #[test]
    fn byte_views_cover_whole_buffers() {
        let cube = Shape::cube(1.0);
        assert_eq!(cube.position_bytes().len(), 24 * 3 * 4);
        assert_eq!(cube.normal_bytes().unwrap().len(), 24 * 3 * 4);
        assert_eq!(cube.texcoord_bytes().unwrap().len(), 24 * 2 * 4);
        assert_eq!(cube.index_bytes().len(), 36 * 4);

        let grid = Shape::square_grid(2).unwrap();
        assert!(grid.normal_bytes().is_none());
        assert!(grid.texcoord_bytes().is_none());
    }

    #[test]
    fn error_messages_name_the_parameter() {
        assert!(ShapeError::GridTooSmall { size: 1 }.to_string().contains('1'));
        assert!(
            ShapeError::NonPositiveRadius { radius: -2.0 }
                .to_string()
                .contains("-2")
        );
    }
}
