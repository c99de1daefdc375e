use crate::camera::{CubeCamera, aspect_ratio, model_matrix};
use crate::clock::{Clock, SystemClock};
use crate::geometry::{
    COORDS_PER_VERTEX, CUBE_VERTICES, POSITION_OFFSET, STRIDE, TEX_COORD_OFFSET,
    TEX_COORDS_PER_VERTEX, VERTEX_COUNT,
};
use crate::gl::GlContext;
use crate::handles::{BufferHandle, ProgramHandle, TextureHandle};
use crate::loader::{LoadError, load_program, load_texture};
use crate::overlay::FpsOverlay;
use spincube_assets::{AssetSource, encode_object};
use spincube_common::Point;
use spincube_input::SizeEvent;
use std::time::Instant;

pub const VERTEX_SHADER_ASSET: &str = "shader.v.glsl";
pub const FRAGMENT_SHADER_ASSET: &str = "shader.f.glsl";
pub const TEXTURE_ASSET: &str = "gopher.png";

/// Errors from acquiring the engine's GL resources.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to load shader program")]
    ShaderLoad(#[source] LoadError),
    #[error("failed to load texture")]
    TextureLoad(#[source] LoadError),
    #[error("failed to create FPS overlay")]
    Overlay(#[source] LoadError),
    #[error("GL object creation failed: {0}")]
    Gl(String),
    #[error("engine already started")]
    AlreadyStarted,
}

/// The linked program and the locations the cube shader exposes.
pub struct Shader<G: GlContext> {
    pub program: ProgramHandle<G>,
    pub vert_coord: Option<u32>,
    pub vert_tex_coord: Option<u32>,
    pub projection: Option<G::UniformLocation>,
    pub view: Option<G::UniformLocation>,
    pub model: Option<G::UniformLocation>,
}

/// The cube's vertex buffer and texture.
pub struct Shape<G: GlContext> {
    pub buf: BufferHandle<G>,
    pub texture: TextureHandle<G>,
}

struct Session<G: GlContext> {
    shader: Shader<G>,
    shape: Shape<G>,
    started: Instant,
    fps: FpsOverlay<G>,
}

/// Renders the spinning cube. GL state exists only between `start` and
/// `stop`.
pub struct Engine<G: GlContext, C: Clock = SystemClock> {
    session: Option<Session<G>>,
    camera: CubeCamera,
    clock: C,
    pub touch_loc: Point,
}

impl<G: GlContext> Engine<G, SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<G: GlContext> Default for Engine<G, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GlContext, C: Clock> Engine<G, C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            session: None,
            camera: CubeCamera::default(),
            clock,
            touch_loc: Point::default(),
        }
    }

    pub fn is_started(&self) -> bool {
        self.session.is_some()
    }

    pub fn shader(&self) -> Option<&Shader<G>> {
        self.session.as_ref().map(|s| &s.shader)
    }

    pub fn shape(&self) -> Option<&Shape<G>> {
        self.session.as_ref().map(|s| &s.shape)
    }

    /// Acquire every GL resource needed to draw. On failure nothing stays
    /// allocated.
    pub fn start(&mut self, gl: &G, assets: &dyn AssetSource) -> Result<(), EngineError> {
        if self.session.is_some() {
            return Err(EngineError::AlreadyStarted);
        }

        let program = load_program(gl, assets, VERTEX_SHADER_ASSET, FRAGMENT_SHADER_ASSET)
            .map_err(EngineError::ShaderLoad)?;

        let buf = match BufferHandle::create(gl) {
            Ok(buf) => buf,
            Err(e) => {
                program.release(gl);
                return Err(EngineError::Gl(e));
            }
        };
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(buf.raw()));
        gl.buffer_data(
            glow::ARRAY_BUFFER,
            &encode_object(&CUBE_VERTICES),
            glow::STATIC_DRAW,
        );

        let raw = program.raw();
        let vert_coord = gl.get_attrib_location(raw, "vertCoord");
        let vert_tex_coord = gl.get_attrib_location(raw, "vertTexCoord");
        let projection = gl.get_uniform_location(raw, "projection");
        let view = gl.get_uniform_location(raw, "view");
        let model = gl.get_uniform_location(raw, "model");
        for (name, found) in [
            ("vertCoord", vert_coord.is_some()),
            ("vertTexCoord", vert_tex_coord.is_some()),
            ("projection", projection.is_some()),
            ("view", view.is_some()),
            ("model", model.is_some()),
        ] {
            if !found {
                tracing::warn!(name, "shader location not found");
            }
        }

        let texture = match load_texture(gl, assets, TEXTURE_ASSET) {
            Ok(texture) => texture,
            Err(e) => {
                buf.release(gl);
                program.release(gl);
                return Err(EngineError::TextureLoad(e));
            }
        };

        let started = self.clock.now();

        let fps = match FpsOverlay::new(gl) {
            Ok(fps) => fps,
            Err(e) => {
                texture.release(gl);
                buf.release(gl);
                program.release(gl);
                return Err(EngineError::Overlay(e));
            }
        };

        self.session = Some(Session {
            shader: Shader {
                program,
                vert_coord,
                vert_tex_coord,
                projection,
                view,
                model,
            },
            shape: Shape { buf, texture },
            started,
            fps,
        });
        tracing::info!("engine started");
        Ok(())
    }

    /// Release everything `start` acquired. No-op when not started.
    pub fn stop(&mut self, gl: &G) {
        let Some(session) = self.session.take() else {
            return;
        };
        session.shader.program.release(gl);
        session.shape.buf.release(gl);
        session.shape.texture.release(gl);
        session.fps.release(gl);
        tracing::info!("engine stopped");
    }

    /// Draw one frame for the window described by `size`.
    pub fn draw(&mut self, gl: &G, size: &SizeEvent) {
        let Some(session) = self.session.as_mut() else {
            tracing::debug!("draw before start, skipping");
            return;
        };
        let now = self.clock.now();
        let since = now.saturating_duration_since(session.started);

        gl.viewport(0, 0, size.width_px as i32, size.height_px as i32);

        gl.enable(glow::DEPTH_TEST);
        gl.depth_func(glow::LESS);

        gl.clear_color(0.0, 0.0, 0.0, 1.0);
        gl.clear(glow::COLOR_BUFFER_BIT);
        gl.clear(glow::DEPTH_BUFFER_BIT);

        let shader = &session.shader;
        gl.use_program(Some(shader.program.raw()));

        let aspect = aspect_ratio(size.width_pt.0, size.height_pt.0);
        let m = self.camera.projection_matrix(aspect);
        gl.uniform_matrix4(shader.projection.as_ref(), &m.to_cols_array());

        let m = self.camera.view_matrix();
        gl.uniform_matrix4(shader.view.as_ref(), &m.to_cols_array());

        let m = model_matrix(since.as_secs_f32());
        gl.uniform_matrix4(shader.model.as_ref(), &m.to_cols_array());

        gl.bind_buffer(glow::ARRAY_BUFFER, Some(session.shape.buf.raw()));

        let attrs = [
            (shader.vert_coord, COORDS_PER_VERTEX, POSITION_OFFSET),
            (shader.vert_tex_coord, TEX_COORDS_PER_VERTEX, TEX_COORD_OFFSET),
        ];
        for (attr, count, offset) in attrs {
            if let Some(index) = attr {
                gl.enable_vertex_attrib_array(index);
                gl.vertex_attrib_pointer(index, count as i32, glow::FLOAT, false, STRIDE, offset);
            }
        }

        gl.active_texture(glow::TEXTURE0);
        gl.bind_texture(glow::TEXTURE_2D, Some(session.shape.texture.raw()));

        gl.draw_arrays(glow::TRIANGLES, 0, VERTEX_COUNT as i32);

        for (attr, _, _) in attrs {
            if let Some(index) = attr {
                gl.disable_vertex_attrib_array(index);
            }
        }

        session.fps.draw(gl, size, now);
        tracing::trace!(elapsed = since.as_secs_f32(), aspect, "frame drawn");
    }
}
