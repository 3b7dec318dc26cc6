//! Host lifecycle bridge and per-surface session state.
//!
//! An embedded rendering host drives its native layer through three
//! well-defined entry points: once when the surface is created, once per
//! surface-size change, and once per frame. [`RenderHost`] is that contract;
//! the platform glue (JNI shim, EGL loop, test harness) calls it and nothing
//! else.
//!
//! [`RenderSession`] carries the state those hooks share — the active shader
//! program, the viewport, a frame counter — as an owned value instead of
//! process-wide statics, so two surfaces never fight over a global handle.
//!
//! ```
//! use eskit::{InitError, Matrix, RenderHost, RenderSession};
//!
//! struct Demo {
//!     session: RenderSession,
//!     mvp: Matrix,
//! }
//!
//! impl RenderHost for Demo {
//!     fn on_init(&mut self) -> Result<(), InitError> {
//!         // compile programs, generate shapes
//!         Ok(())
//!     }
//!
//!     fn on_resize(&mut self, width: u32, height: u32) {
//!         self.session.resize(width, height);
//!     }
//!
//!     fn on_frame(&mut self) {
//!         let frame = self.session.advance_frame();
//!         let mut m = Matrix::identity();
//!         m.rotate(frame as f32, glam::Vec3::Y);
//!         m.perspective(60.0, self.session.aspect(), 0.1, 100.0);
//!         self.mvp = m;
//!     }
//! }
//! ```

use crate::shader::{ProgramHandle, ShaderError};

/// Initialization failed; the host must abort bring-up of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    /// The shader backend could not produce a drawable program.
    ProgramCreation(ShaderError),
}

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitError::ProgramCreation(e) => write!(f, "program creation failed: {}", e),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::ProgramCreation(e) => Some(e),
        }
    }
}

impl From<ShaderError> for InitError {
    fn from(e: ShaderError) -> Self {
        InitError::ProgramCreation(e)
    }
}

/// The three entry points a rendering platform invokes on its native layer.
///
/// Call order is guaranteed by the platform: `on_init` once per surface
/// creation, `on_resize` at least once before the first frame, `on_frame`
/// per draw. An `Err` from `on_init` aborts initialization; there is no
/// retry.
pub trait RenderHost {
    /// Build and bind resources: compile programs, generate geometry.
    fn on_init(&mut self) -> Result<(), InitError>;

    /// The drawable surface changed size; update the viewport.
    fn on_resize(&mut self, width: u32, height: u32);

    /// Issue the draw calls for one frame.
    fn on_frame(&mut self);
}

/// Owned per-surface state shared by the lifecycle hooks.
///
/// Replaces the globals a C-style host layer would use: the session is a
/// plain value the [`RenderHost`] implementation owns, created per surface
/// and dropped with it.
#[derive(Debug, Default, Clone)]
pub struct RenderSession {
    program: ProgramHandle,
    width: u32,
    height: u32,
    frame: u64,
}

impl RenderSession {
    /// A fresh session: no program, zero-sized viewport, frame 0.
    pub fn new() -> RenderSession {
        RenderSession::default()
    }

    /// Stores the active program handle, replacing any previous one.
    ///
    /// Releasing the replaced program is the backend owner's job; the
    /// session only tracks which handle is current.
    pub fn set_program(&mut self, program: ProgramHandle) {
        self.program = program;
    }

    /// The active program handle ([`ProgramHandle::NONE`] before init).
    pub fn program(&self) -> ProgramHandle {
        self.program
    }

    /// Updates the viewport dimensions.
    ///
    /// Zero-sized dimensions are ignored so a minimized surface cannot
    /// poison the aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.width = width;
            self.height = height;
        }
    }

    /// Current viewport width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Current viewport height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Viewport aspect ratio (width / height), or 1.0 before the first
    /// resize so projection math stays finite.
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }

    /// Increments the frame counter, returning the index of the frame being
    /// drawn (0 for the first).
    pub fn advance_frame(&mut self) -> u64 {
        let current = self.frame;
        self.frame += 1;
        current
    }

    /// Number of frames drawn so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}
