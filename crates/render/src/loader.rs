use crate::gl::GlContext;
use crate::handles::{ProgramHandle, TextureHandle};
use spincube_assets::{AssetError, AssetSource, decode_rgba};

/// Errors from building GL resources out of assets.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error("{stage} shader failed to compile: {log}")]
    Compile { stage: &'static str, log: String },
    #[error("program failed to link: {0}")]
    Link(String),
    #[error("GL object creation failed: {0}")]
    Gl(String),
}

impl LoadError {
    /// True when the failure is a missing asset rather than bad content.
    pub fn is_missing_asset(&self) -> bool {
        matches!(self, LoadError::Asset(AssetError::Missing(_)))
    }
}

/// Read two GLSL assets and link them into a program.
pub fn load_program<G: GlContext>(
    gl: &G,
    assets: &dyn AssetSource,
    vert_path: &str,
    frag_path: &str,
) -> Result<ProgramHandle<G>, LoadError> {
    let vert_src = assets.read_text(vert_path)?;
    let frag_src = assets.read_text(frag_path)?;
    let program = compile_program(gl, &vert_src, &frag_src)?;
    tracing::debug!(vert_path, frag_path, "loaded program");
    Ok(program)
}

/// Compile a vertex/fragment pair and link them. No GL object survives a
/// failure.
pub fn compile_program<G: GlContext>(
    gl: &G,
    vert_src: &str,
    frag_src: &str,
) -> Result<ProgramHandle<G>, LoadError> {
    let vert = compile_shader(gl, glow::VERTEX_SHADER, "vertex", vert_src)?;
    let frag = match compile_shader(gl, glow::FRAGMENT_SHADER, "fragment", frag_src) {
        Ok(frag) => frag,
        Err(e) => {
            gl.delete_shader(vert);
            return Err(e);
        }
    };

    let program = match gl.create_program() {
        Ok(program) => program,
        Err(e) => {
            gl.delete_shader(vert);
            gl.delete_shader(frag);
            return Err(LoadError::Gl(e));
        }
    };
    gl.attach_shader(program, vert);
    gl.attach_shader(program, frag);
    gl.link_program(program);
    let linked = gl.program_link_status(program);

    // Shaders are only needed until the link; the program keeps the code.
    gl.detach_shader(program, vert);
    gl.detach_shader(program, frag);
    gl.delete_shader(vert);
    gl.delete_shader(frag);

    if !linked {
        let log = gl.program_info_log(program);
        gl.delete_program(program);
        return Err(LoadError::Link(log));
    }
    Ok(ProgramHandle::new(program))
}

fn compile_shader<G: GlContext>(
    gl: &G,
    kind: u32,
    stage: &'static str,
    source: &str,
) -> Result<G::Shader, LoadError> {
    let shader = gl.create_shader(kind).map_err(LoadError::Gl)?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);
    if !gl.shader_compile_status(shader) {
        let log = gl.shader_info_log(shader);
        gl.delete_shader(shader);
        return Err(LoadError::Compile { stage, log });
    }
    Ok(shader)
}

/// Decode an image asset and upload it as a linearly filtered,
/// edge-clamped 2D texture.
pub fn load_texture<G: GlContext>(
    gl: &G,
    assets: &dyn AssetSource,
    img_path: &str,
) -> Result<TextureHandle<G>, LoadError> {
    let bytes = assets.open(img_path)?;
    let img = decode_rgba(img_path, &bytes)?;

    let texture = TextureHandle::create(gl).map_err(LoadError::Gl)?;
    gl.bind_texture(glow::TEXTURE_2D, Some(texture.raw()));
    gl.tex_image_2d_rgba(glow::TEXTURE_2D, img.width, img.height, &img.pixels);
    gl.tex_parameter(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, glow::LINEAR as i32);
    gl.tex_parameter(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);
    gl.tex_parameter(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::CLAMP_TO_EDGE as i32);
    gl.tex_parameter(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::CLAMP_TO_EDGE as i32);
    tracing::debug!(img_path, width = img.width, height = img.height, "loaded texture");
    Ok(texture)
}
