//! 4×4 transform math for fixed-function-style rendering pipelines.
//!
//! This module provides [`Matrix`], a row-major 4×4 float matrix with the
//! composition operations a rendering host needs every frame: model
//! transforms (translate / rotate / scale), view transforms ([`Matrix::look_at`]),
//! and projection transforms ([`Matrix::frustum`], [`Matrix::perspective`],
//! [`Matrix::ortho`]).
//!
//! # Conventions
//!
//! - **Row-major storage**, with the translation in row 3. Points transform
//!   as row vectors: `p' = p × M`.
//! - Composition methods mutate their target in place and compose *on top of*
//!   whatever is already there, so the call order is the transform order.
//!   The typical per-frame sequence is identity → scale → rotate → translate,
//!   then a projection on the view matrix.
//! - Angles are in degrees at the API surface; all trigonometry is `f32`.
//!
//! # Example
//!
//! ```
//! use eskit::Matrix;
//! use glam::Vec3;
//!
//! let mut model = Matrix::identity();
//! model.scale(Vec3::splat(0.5));
//! model.rotate(45.0, Vec3::Y);
//! model.translate(Vec3::new(0.0, 0.0, -3.0));
//!
//! let mut projection = Matrix::identity();
//! projection.perspective(60.0, 16.0 / 9.0, 0.1, 100.0);
//!
//! let mvp = Matrix::multiply(&model, &projection);
//! ```
//!
//! # Degenerate input
//!
//! [`Matrix::frustum`] and [`Matrix::ortho`] leave their target untouched
//! when handed a degenerate volume (zero or inverted extents, non-positive
//! clip planes), and [`Matrix::rotate`] skips a zero-length axis entirely.
//! These are deliberate no-ops rather than errors so a host driving the
//! matrix from live window dimensions never has to special-case a minimized
//! surface; each skip leaves a `debug`-level log line.

use glam::Vec3;

/// A row-major 4×4 transform matrix.
///
/// Any grid of floats is a valid `Matrix` — nothing is enforced at the type
/// level, including invertibility. The element grid is public for direct
/// access; [`Matrix::as_array`] and [`Matrix::as_bytes`] give the flat views
/// GPU uniform upload wants.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Matrix {
    /// Elements indexed as `m[row][column]`.
    pub m: [[f32; 4]; 4],
}

impl Matrix {
    /// The 4×4 identity matrix.
    pub fn identity() -> Matrix {
        let mut out = Matrix::default();
        out.m[0][0] = 1.0;
        out.m[1][1] = 1.0;
        out.m[2][2] = 1.0;
        out.m[3][3] = 1.0;
        out
    }

    /// Computes `a × b`.
    ///
    /// The product is built in a fresh value, so the result can be assigned
    /// straight back over either operand — the common pattern for applying a
    /// new transform in front of an accumulated one:
    ///
    /// ```
    /// use eskit::Matrix;
    ///
    /// let step = Matrix::identity();
    /// let mut acc = Matrix::identity();
    /// acc = Matrix::multiply(&step, &acc);
    /// ```
    pub fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
        let mut out = Matrix::default();
        for i in 0..4 {
            for j in 0..4 {
                out.m[i][j] = a.m[i][0] * b.m[0][j]
                    + a.m[i][1] * b.m[1][j]
                    + a.m[i][2] * b.m[2][j]
                    + a.m[i][3] * b.m[3][j];
            }
        }
        out
    }

    /// Appends a translation expressed in this matrix's own basis.
    ///
    /// The offset is rotated/scaled through rows 0–2 and accumulated into the
    /// translation row, which composes the translation after the existing
    /// transform without a full multiply.
    pub fn translate(&mut self, t: Vec3) {
        for j in 0..4 {
            self.m[3][j] += self.m[0][j] * t.x + self.m[1][j] * t.y + self.m[2][j] * t.z;
        }
    }

    /// Scales rows 0, 1, and 2 element-wise by `s.x`, `s.y`, and `s.z`.
    ///
    /// Note the convention: this scales the basis *rows* (all four columns of
    /// each), not the columns. That matches the fixed-function pipelines this
    /// crate stays compatible with, and differs from canonical column scaling
    /// whenever row 3 of a later factor is non-trivial.
    pub fn scale(&mut self, s: Vec3) {
        for j in 0..4 {
            self.m[0][j] *= s.x;
            self.m[1][j] *= s.y;
            self.m[2][j] *= s.z;
        }
    }

    /// Left-composes a rotation of `degrees` about `axis`.
    ///
    /// The axis is normalized internally, so any non-zero length works. A
    /// zero-length axis skips the whole operation (not even an identity
    /// multiply is applied).
    pub fn rotate(&mut self, degrees: f32, axis: Vec3) {
        let mag = axis.length();
        if mag == 0.0 {
            log::debug!("rotate skipped: zero-length axis");
            return;
        }
        let (sin, cos) = degrees.to_radians().sin_cos();
        let Vec3 { x, y, z } = axis / mag;

        let one_minus_cos = 1.0 - cos;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, yz, zx) = (x * y, y * z, z * x);
        let (xs, ys, zs) = (x * sin, y * sin, z * sin);

        let mut rot = Matrix::default();
        rot.m[0][0] = one_minus_cos * xx + cos;
        rot.m[0][1] = one_minus_cos * xy - zs;
        rot.m[0][2] = one_minus_cos * zx + ys;
        rot.m[1][0] = one_minus_cos * xy + zs;
        rot.m[1][1] = one_minus_cos * yy + cos;
        rot.m[1][2] = one_minus_cos * yz - xs;
        rot.m[2][0] = one_minus_cos * zx - ys;
        rot.m[2][1] = one_minus_cos * yz + xs;
        rot.m[2][2] = one_minus_cos * zz + cos;
        rot.m[3][3] = 1.0;

        *self = Matrix::multiply(&rot, self);
    }

    /// Left-composes a symmetric perspective frustum.
    ///
    /// The view volume spans `(-half_width, half_width)` ×
    /// `(-half_height, half_height)` on the near plane, with depth range
    /// `[near, far]`. No-op when `near <= 0`, `far <= 0`, or any extent is
    /// non-positive; callers that need a failure signal must validate first.
    pub fn frustum(&mut self, half_width: f32, half_height: f32, near: f32, far: f32) {
        let (left, right) = (-half_width, half_width);
        let (bottom, top) = (-half_height, half_height);
        let delta_x = right - left;
        let delta_y = top - bottom;
        let delta_z = far - near;
        if near <= 0.0 || far <= 0.0 || delta_x <= 0.0 || delta_y <= 0.0 || delta_z <= 0.0 {
            log::debug!(
                "frustum skipped: degenerate volume \
                 (half_width={half_width}, half_height={half_height}, near={near}, far={far})"
            );
            return;
        }

        let mut frust = Matrix::default();
        frust.m[0][0] = 2.0 * near / delta_x;
        frust.m[1][1] = 2.0 * near / delta_y;
        frust.m[2][0] = (right + left) / delta_x;
        frust.m[2][1] = (top + bottom) / delta_y;
        frust.m[2][2] = -(near + far) / delta_z;
        frust.m[2][3] = -1.0;
        frust.m[3][2] = -2.0 * near * far / delta_z;

        *self = Matrix::multiply(&frust, self);
    }

    /// Left-composes a perspective projection from a vertical field of view.
    ///
    /// Derives the near-plane half extents from `fovy_degrees` and `aspect`
    /// (width / height), then delegates to [`Matrix::frustum`] — including
    /// its silent no-op on degenerate input.
    pub fn perspective(&mut self, fovy_degrees: f32, aspect: f32, near: f32, far: f32) {
        let half_height = (fovy_degrees.to_radians() / 2.0).tan() * near;
        let half_width = half_height * aspect;
        self.frustum(half_width, half_height, near, far);
    }

    /// Left-composes an orthographic projection.
    ///
    /// No-op when any of the three extents is exactly zero.
    pub fn ortho(&mut self, left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) {
        let delta_x = right - left;
        let delta_y = top - bottom;
        let delta_z = far - near;
        if delta_x == 0.0 || delta_y == 0.0 || delta_z == 0.0 {
            log::debug!("ortho skipped: zero extent");
            return;
        }

        let mut ortho = Matrix::identity();
        ortho.m[0][0] = 2.0 / delta_x;
        ortho.m[3][0] = -(right + left) / delta_x;
        ortho.m[1][1] = 2.0 / delta_y;
        ortho.m[3][1] = -(top + bottom) / delta_y;
        ortho.m[2][2] = -2.0 / delta_z;
        ortho.m[3][2] = -(near + far) / delta_z;

        *self = Matrix::multiply(&ortho, self);
    }

    /// Builds a right-handed view matrix looking from `eye` toward `target`.
    ///
    /// The basis comes from Gram-Schmidt orthonormalization of
    /// `target - eye`, `up`, and their cross products. Each normalization
    /// guards against an exactly-zero length by leaving the zero vector in
    /// place instead of dividing, so a degenerate eye/target pair degrades to
    /// a partially-zero matrix rather than NaN.
    ///
    /// The result overwrites the whole matrix; it does not compose. The X and
    /// Z basis columns are negated relative to the raw cross-product basis,
    /// which is the handedness the rest of this crate (and the GL-style hosts
    /// it feeds) expects: after the view transform, the target lies along -Z
    /// from the eye.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Matrix {
        let axis_z = normalize_or_keep(target - eye);
        let axis_x = normalize_or_keep(up.cross(axis_z));
        let axis_y = normalize_or_keep(axis_z.cross(axis_x));

        let mut out = Matrix::default();
        out.m[0][0] = -axis_x.x;
        out.m[0][1] = axis_y.x;
        out.m[0][2] = -axis_z.x;
        out.m[1][0] = -axis_x.y;
        out.m[1][1] = axis_y.y;
        out.m[1][2] = -axis_z.y;
        out.m[2][0] = -axis_x.z;
        out.m[2][1] = axis_y.z;
        out.m[2][2] = -axis_z.z;
        out.m[3][0] = axis_x.dot(eye);
        out.m[3][1] = -axis_y.dot(eye);
        out.m[3][2] = axis_z.dot(eye);
        out.m[3][3] = 1.0;
        out
    }

    /// Transforms a point through the matrix in row-vector convention,
    /// applying the perspective divide when `w` is non-zero.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let m = &self.m;
        let x = p.x * m[0][0] + p.y * m[1][0] + p.z * m[2][0] + m[3][0];
        let y = p.x * m[0][1] + p.y * m[1][1] + p.z * m[2][1] + m[3][1];
        let z = p.x * m[0][2] + p.y * m[1][2] + p.z * m[2][2] + m[3][2];
        let w = p.x * m[0][3] + p.y * m[1][3] + p.z * m[2][3] + m[3][3];
        if w != 0.0 {
            Vec3::new(x / w, y / w, z / w)
        } else {
            Vec3::new(x, y, z)
        }
    }

    /// The elements as a flat 16-float array, row-major.
    pub fn as_array(&self) -> &[f32; 16] {
        bytemuck::cast_ref(self)
    }

    /// Builds a matrix from a flat row-major 16-float array.
    pub fn from_array(elements: [f32; 16]) -> Matrix {
        bytemuck::cast(elements)
    }

    /// The raw bytes of the matrix, for uniform-buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl std::ops::Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        Matrix::multiply(&self, &rhs)
    }
}

/// Normalizes `v`, passing an exactly-zero-length vector through unchanged.
fn normalize_or_keep(v: Vec3) -> Vec3 {
    let length = v.length();
    if length != 0.0 { v / length } else { v }
}
