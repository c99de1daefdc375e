//! Owned GL object names.
//!
//! A handle cannot delete itself on drop because deletion needs the context
//! that created it. Each one is consumed by `release`, which is the only way
//! to give the name back.

use crate::gl::GlContext;

/// A linked program.
#[must_use = "a program handle must be released against its context"]
pub struct ProgramHandle<G: GlContext> {
    raw: G::Program,
}

impl<G: GlContext> ProgramHandle<G> {
    pub(crate) fn new(raw: G::Program) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> G::Program {
        self.raw
    }

    pub fn release(self, gl: &G) {
        tracing::debug!(program = ?self.raw, "deleting program");
        gl.delete_program(self.raw);
    }
}

/// A buffer object.
#[must_use = "a buffer handle must be released against its context"]
pub struct BufferHandle<G: GlContext> {
    raw: G::Buffer,
}

impl<G: GlContext> BufferHandle<G> {
    pub fn create(gl: &G) -> Result<Self, String> {
        let raw = gl.create_buffer()?;
        tracing::debug!(buffer = ?raw, "created buffer");
        Ok(Self { raw })
    }

    pub fn raw(&self) -> G::Buffer {
        self.raw
    }

    pub fn release(self, gl: &G) {
        tracing::debug!(buffer = ?self.raw, "deleting buffer");
        gl.delete_buffer(self.raw);
    }
}

/// A texture object.
#[must_use = "a texture handle must be released against its context"]
pub struct TextureHandle<G: GlContext> {
    raw: G::Texture,
}

impl<G: GlContext> TextureHandle<G> {
    pub fn create(gl: &G) -> Result<Self, String> {
        let raw = gl.create_texture()?;
        tracing::debug!(texture = ?raw, "created texture");
        Ok(Self { raw })
    }

    pub fn raw(&self) -> G::Texture {
        self.raw
    }

    pub fn release(self, gl: &G) {
        tracing::debug!(texture = ?self.raw, "deleting texture");
        gl.delete_texture(self.raw);
    }
}
