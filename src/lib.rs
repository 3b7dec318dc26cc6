//! # eskit
//!
//! **Transform math and procedural mesh primitives for embedded GL rendering
//! hosts.**
//!
//! A rendering host on a phone or embedded device needs three things from its
//! native utility layer: geometry to draw, matrices to place it with, and a
//! clean seam to the platform's shader compiler and lifecycle callbacks.
//! This crate is that layer — it computes numbers and fills buffers, and
//! renders nothing itself.
//!
//! ## Quick start
//!
//! ```
//! use eskit::{Matrix, Shape};
//! use glam::Vec3;
//!
//! // Once, at setup: generate geometry the caller owns outright.
//! let sphere = Shape::sphere(32, 1.0).unwrap();
//! assert!(sphere.indices.iter().all(|&i| (i as usize) < sphere.vertex_count()));
//!
//! // Every frame: compose the model-view-projection matrix.
//! let mut model = Matrix::identity();
//! model.rotate(30.0, Vec3::Y);
//! model.translate(Vec3::new(0.0, 0.0, -4.0));
//!
//! let view = Matrix::look_at(Vec3::new(0.0, 2.0, 6.0), Vec3::ZERO, Vec3::Y);
//! let mut mvp = Matrix::multiply(&model, &view);
//! mvp.perspective(60.0, 16.0 / 9.0, 0.1, 100.0);
//!
//! // mvp.as_bytes() is ready for uniform upload.
//! ```
//!
//! ## What lives where
//!
//! - [`Matrix`] — row-major 4×4 transform math: identity, multiply,
//!   translate / rotate / scale, look-at, frustum / perspective / ortho.
//! - [`Shape`] — procedural grid, cube, and UV-sphere buffers with typed
//!   precondition errors ([`ShapeError`]).
//! - [`ShaderBackend`] / [`ProgramHandle`] — the seam to the platform's
//!   shader compiler; [`build_program`] converts its 0-handle sentinel into a
//!   [`Result`].
//! - [`RenderHost`] / [`RenderSession`] — the init / resize / frame lifecycle
//!   contract and the per-surface state it shares.
//!
//! Everything is synchronous, allocation-per-call, and free of shared mutable
//! state; buffers and matrices belong to the caller the moment they are
//! returned.

mod host;
mod matrix;
mod shader;
mod shapes;

pub use host::{InitError, RenderHost, RenderSession};
pub use matrix::Matrix;
pub use shader::{ProgramHandle, ShaderBackend, ShaderError, build_program};
pub use shapes::{Shape, ShapeError};

// Re-export the math types that appear in the public API.
pub use glam::Vec3;
