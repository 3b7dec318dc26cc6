//! The shader-backend seam between this crate and the rendering host.
//!
//! This crate computes geometry and transforms; it never touches a GL
//! context. Program compilation therefore lives behind [`ShaderBackend`], a
//! trait the host implements on top of its platform API. The backend speaks
//! the platform's sentinel convention — handle 0 means failure, diagnostics
//! go to the logging sink — and [`build_program`] adapts that convention to a
//! `Result` for Rust callers.

/// An opaque shader-program identifier issued by a [`ShaderBackend`].
///
/// Handle 0 is the reserved "no program" sentinel; a valid program is always
/// non-zero. The handle is owned by the host for the program's whole render
/// lifetime — this crate never stores one outside a
/// [`RenderSession`](crate::RenderSession).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(u32);

impl ProgramHandle {
    /// The "no program" sentinel.
    pub const NONE: ProgramHandle = ProgramHandle(0);

    /// Wraps a raw backend identifier.
    pub fn from_raw(raw: u32) -> ProgramHandle {
        ProgramHandle(raw)
    }

    /// The raw identifier, as the platform API expects it.
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// Whether this is the failure/no-program sentinel.
    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

/// Compiles and links shader stages into drawable programs.
///
/// Implemented by the rendering host over its platform API. On compile or
/// link failure the backend returns [`ProgramHandle::NONE`] and is expected
/// to log the compiler diagnostics itself; the text is not surfaced
/// programmatically.
pub trait ShaderBackend {
    /// Compiles `vertex_src` and `fragment_src` and links them into a
    /// program, returning [`ProgramHandle::NONE`] on any failure.
    fn create_program(&mut self, vertex_src: &str, fragment_src: &str) -> ProgramHandle;
}

/// A shader program could not be compiled or linked.
///
/// The backend keeps the compiler diagnostics; this error only records that
/// the sentinel came back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderError;

impl std::fmt::Display for ShaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "shader program compilation or linking failed")
    }
}

impl std::error::Error for ShaderError {}

/// Builds a program through `backend`, converting the sentinel to a `Result`.
///
/// This is the boundary where host code should stop checking for handle 0:
/// downstream of here, failure travels as [`ShaderError`]. The failure is
/// also forwarded to the logging sink.
pub fn build_program(
    backend: &mut dyn ShaderBackend,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<ProgramHandle, ShaderError> {
    let handle = backend.create_program(vertex_src, fragment_src);
    if handle.is_none() {
        log::error!("shader backend returned the null program handle");
        return Err(ShaderError);
    }
    Ok(handle)
}
