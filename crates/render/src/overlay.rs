//! Frame-rate counter drawn in the bottom-left corner.

use crate::gl::GlContext;
use crate::handles::{BufferHandle, ProgramHandle, TextureHandle};
use crate::loader::{LoadError, compile_program};
use crate::shaders;
use bytemuck::{Pod, Zeroable};
use image::{Rgba, RgbaImage};
use spincube_assets::encode_object;
use spincube_input::SizeEvent;
use std::time::{Duration, Instant};

/// Points between the window corner and the counter.
const MARGIN_PT: f32 = 4.0;
/// Points covered by one glyph texel.
const PT_PER_TEXEL: f32 = 3.0;
const GLYPH_W: u32 = 3;
const GLYPH_H: u32 = 5;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 160]);
const INK: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// 3x5 digit bitmaps, one row per entry, bit 2 is the leftmost column.
#[rustfmt::skip]
const DIGITS: [[u8; 5]; 10] = [
    [7, 5, 5, 5, 7],
    [2, 6, 2, 2, 7],
    [7, 1, 7, 4, 7],
    [7, 1, 7, 1, 7],
    [5, 5, 7, 1, 1],
    [7, 4, 7, 1, 7],
    [7, 4, 7, 5, 7],
    [7, 1, 1, 1, 1],
    [7, 5, 7, 5, 7],
    [7, 5, 7, 1, 7],
];

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct OverlayVertex {
    position: [f32; 2],
    tex_coord: [f32; 2],
}

const OVERLAY_STRIDE: i32 = std::mem::size_of::<OverlayVertex>() as i32;
const OVERLAY_TEX_OFFSET: i32 = std::mem::size_of::<[f32; 2]>() as i32;

/// Ring buffer of recent frame durations.
#[derive(Debug)]
pub struct FrameTimer {
    history: Vec<Duration>,
    capacity: usize,
    index: usize,
    filled: bool,
}

impl FrameTimer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            history: vec![Duration::ZERO; capacity],
            capacity,
            index: 0,
            filled: false,
        }
    }

    pub fn record(&mut self, dt: Duration) {
        self.history[self.index] = dt;
        self.index = (self.index + 1) % self.capacity;
        if self.index == 0 {
            self.filled = true;
        }
    }

    pub fn count(&self) -> usize {
        if self.filled {
            self.capacity
        } else {
            self.index
        }
    }

    pub fn average(&self) -> Duration {
        let count = self.count();
        if count == 0 {
            return Duration::ZERO;
        }
        let total: Duration = self.history[..count].iter().sum();
        total / count as u32
    }

    /// Frames per second over the recorded window; zero until a frame
    /// duration is known.
    pub fn fps(&self) -> f32 {
        let avg = self.average().as_secs_f32();
        if avg > 0.0 { 1.0 / avg } else { 0.0 }
    }
}

/// Render `text` with the built-in digit font. Characters other than ASCII
/// digits leave a blank cell.
pub fn rasterize(text: &str) -> RgbaImage {
    let cells = text.chars().count().max(1) as u32;
    let width = cells * (GLYPH_W + 1) + 1;
    let height = GLYPH_H + 2;
    let mut img = RgbaImage::from_pixel(width, height, BACKGROUND);

    for (cell, ch) in text.chars().enumerate() {
        let Some(digit) = ch.to_digit(10) else {
            continue;
        };
        let left = 1 + cell as u32 * (GLYPH_W + 1);
        for (row, bits) in DIGITS[digit as usize].iter().enumerate() {
            for col in 0..GLYPH_W {
                if bits & (1 << (GLYPH_W - 1 - col)) != 0 {
                    img.put_pixel(left + col, 1 + row as u32, INK);
                }
            }
        }
    }
    img
}

/// Clip-space quad for a `tex_w` x `tex_h` texel label anchored at the
/// bottom-left corner. `None` for a degenerate window.
fn quad(size: &SizeEvent, tex_w: u32, tex_h: u32) -> Option<[OverlayVertex; 6]> {
    let (w, h) = (size.width_pt.0, size.height_pt.0);
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let x0 = -1.0 + 2.0 * MARGIN_PT / w;
    let x1 = -1.0 + 2.0 * (MARGIN_PT + tex_w as f32 * PT_PER_TEXEL) / w;
    let y0 = -1.0 + 2.0 * (MARGIN_PT + tex_h as f32 * PT_PER_TEXEL) / h;
    let y1 = -1.0 + 2.0 * MARGIN_PT / h;

    // Texture row 0 is the top of the label.
    let v = |x: f32, y: f32, u: f32, t: f32| OverlayVertex {
        position: [x, y],
        tex_coord: [u, t],
    };
    Some([
        v(x0, y0, 0.0, 0.0),
        v(x0, y1, 0.0, 1.0),
        v(x1, y0, 1.0, 0.0),
        v(x1, y0, 1.0, 0.0),
        v(x0, y1, 0.0, 1.0),
        v(x1, y1, 1.0, 1.0),
    ])
}

/// FPS counter with its own program, quad buffer and glyph texture.
pub struct FpsOverlay<G: GlContext> {
    program: ProgramHandle<G>,
    quad: BufferHandle<G>,
    glyphs: TextureHandle<G>,
    coord_attr: Option<u32>,
    tex_coord_attr: Option<u32>,
    timer: FrameTimer,
    last_frame: Option<Instant>,
    text: Option<String>,
    label_size: (u32, u32),
    quad_for: Option<SizeEvent>,
}

impl<G: GlContext> FpsOverlay<G> {
    pub fn new(gl: &G) -> Result<Self, LoadError> {
        let program = compile_program(gl, shaders::OVERLAY_VERTEX, shaders::OVERLAY_FRAGMENT)?;
        let quad = match BufferHandle::create(gl) {
            Ok(quad) => quad,
            Err(e) => {
                program.release(gl);
                return Err(LoadError::Gl(e));
            }
        };
        let glyphs = match TextureHandle::create(gl) {
            Ok(glyphs) => glyphs,
            Err(e) => {
                quad.release(gl);
                program.release(gl);
                return Err(LoadError::Gl(e));
            }
        };
        gl.bind_texture(glow::TEXTURE_2D, Some(glyphs.raw()));
        gl.tex_parameter(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, glow::NEAREST as i32);
        gl.tex_parameter(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::NEAREST as i32);
        gl.tex_parameter(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::CLAMP_TO_EDGE as i32);
        gl.tex_parameter(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::CLAMP_TO_EDGE as i32);

        let coord_attr = gl.get_attrib_location(program.raw(), "overlayCoord");
        let tex_coord_attr = gl.get_attrib_location(program.raw(), "overlayTexCoord");

        Ok(Self {
            program,
            quad,
            glyphs,
            coord_attr,
            tex_coord_attr,
            timer: FrameTimer::new(30),
            last_frame: None,
            text: None,
            label_size: (0, 0),
            quad_for: None,
        })
    }

    pub fn fps(&self) -> f32 {
        self.timer.fps()
    }

    /// Count a frame at `now` and draw the counter over the scene.
    pub fn draw(&mut self, gl: &G, size: &SizeEvent, now: Instant) {
        if let Some(prev) = self.last_frame {
            self.timer.record(now.saturating_duration_since(prev));
        }
        self.last_frame = Some(now);

        let text = format!("{:.0}", self.timer.fps());
        if self.text.as_deref() != Some(text.as_str()) {
            let img = rasterize(&text);
            self.label_size = img.dimensions();
            gl.bind_texture(glow::TEXTURE_2D, Some(self.glyphs.raw()));
            gl.tex_image_2d_rgba(glow::TEXTURE_2D, img.width(), img.height(), img.as_raw());
            tracing::trace!(%text, "fps label updated");
            self.text = Some(text);
            self.quad_for = None;
        }

        gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.quad.raw()));
        if self.quad_for.as_ref() != Some(size) {
            let Some(verts) = quad(size, self.label_size.0, self.label_size.1) else {
                return;
            };
            let floats: &[f32] = bytemuck::cast_slice(&verts);
            gl.buffer_data(glow::ARRAY_BUFFER, &encode_object(floats), glow::DYNAMIC_DRAW);
            self.quad_for = Some(*size);
        }

        gl.disable(glow::DEPTH_TEST);
        gl.enable(glow::BLEND);
        gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
        gl.use_program(Some(self.program.raw()));

        let attrs = [
            (self.coord_attr, 0),
            (self.tex_coord_attr, OVERLAY_TEX_OFFSET),
        ];
        for (attr, offset) in attrs {
            if let Some(index) = attr {
                gl.enable_vertex_attrib_array(index);
                gl.vertex_attrib_pointer(index, 2, glow::FLOAT, false, OVERLAY_STRIDE, offset);
            }
        }

        gl.active_texture(glow::TEXTURE0);
        gl.bind_texture(glow::TEXTURE_2D, Some(self.glyphs.raw()));
        gl.draw_arrays(glow::TRIANGLES, 0, 6);

        for (attr, _) in attrs {
            if let Some(index) = attr {
                gl.disable_vertex_attrib_array(index);
            }
        }
        gl.disable(glow::BLEND);
    }

    pub fn release(self, gl: &G) {
        self.glyphs.release(gl);
        self.quad.release(gl);
        self.program.release(gl);
    }
}
