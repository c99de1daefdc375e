//! The subset of OpenGL the cube needs, as a safe trait.
//!
//! Enum arguments (`target`, `mode`, `cap`, ...) take the raw GL constants
//! exported by `glow`. Calls are fire-and-forget: the driver error queue is
//! never polled.

use std::fmt::Debug;

/// A current GL context on the calling thread.
///
/// Object creation returns `Err` with the driver's message when the driver
/// refuses to allocate a name.
pub trait GlContext {
    type Shader: Copy + Debug + PartialEq;
    type Program: Copy + Debug + PartialEq;
    type Buffer: Copy + Debug + PartialEq;
    type Texture: Copy + Debug + PartialEq;
    type UniformLocation: Clone + Debug;

    fn create_shader(&self, kind: u32) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    /// `None` where GL would report -1.
    fn get_attrib_location(&self, program: Self::Program, name: &str) -> Option<u32>;
    fn get_uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation>;
    /// Upload a column-major 4x4 matrix, never transposed.
    fn uniform_matrix4(&self, location: Option<&Self::UniformLocation>, value: &[f32; 16]);

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>);
    fn buffer_data(&self, target: u32, data: &[u8], usage: u32);
    fn delete_buffer(&self, buffer: Self::Buffer);

    fn create_texture(&self) -> Result<Self::Texture, String>;
    fn active_texture(&self, unit: u32);
    fn bind_texture(&self, target: u32, texture: Option<Self::Texture>);
    /// Upload tightly packed RGBA8 pixels to mip level 0.
    fn tex_image_2d_rgba(&self, target: u32, width: u32, height: u32, pixels: &[u8]);
    fn tex_parameter(&self, target: u32, name: u32, value: i32);
    fn delete_texture(&self, texture: Self::Texture);

    fn enable(&self, cap: u32);
    fn disable(&self, cap: u32);
    fn depth_func(&self, func: u32);
    fn blend_func(&self, src: u32, dst: u32);
    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    fn clear(&self, mask: u32);
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);

    fn enable_vertex_attrib_array(&self, index: u32);
    fn disable_vertex_attrib_array(&self, index: u32);
    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );
    fn draw_arrays(&self, mode: u32, first: i32, count: i32);
}

// glow's entry points are unsafe because they trust the caller to pass live
// object names on the context's own thread. The engine only hands back names
// it received from the same context.
impl GlContext for glow::Context {
    type Shader = glow::Shader;
    type Program = glow::Program;
    type Buffer = glow::Buffer;
    type Texture = glow::Texture;
    type UniformLocation = glow::UniformLocation;

    fn create_shader(&self, kind: u32) -> Result<glow::Shader, String> {
        unsafe { glow::HasContext::create_shader(self, kind) }
    }

    fn shader_source(&self, shader: glow::Shader, source: &str) {
        unsafe { glow::HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: glow::Shader) {
        unsafe { glow::HasContext::compile_shader(self, shader) }
    }

    fn shader_compile_status(&self, shader: glow::Shader) -> bool {
        unsafe { glow::HasContext::get_shader_compile_status(self, shader) }
    }

    fn shader_info_log(&self, shader: glow::Shader) -> String {
        unsafe { glow::HasContext::get_shader_info_log(self, shader) }
    }

    fn delete_shader(&self, shader: glow::Shader) {
        unsafe { glow::HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<glow::Program, String> {
        unsafe { glow::HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: glow::Program, shader: glow::Shader) {
        unsafe { glow::HasContext::attach_shader(self, program, shader) }
    }

    fn detach_shader(&self, program: glow::Program, shader: glow::Shader) {
        unsafe { glow::HasContext::detach_shader(self, program, shader) }
    }

    fn link_program(&self, program: glow::Program) {
        unsafe { glow::HasContext::link_program(self, program) }
    }

    fn program_link_status(&self, program: glow::Program) -> bool {
        unsafe { glow::HasContext::get_program_link_status(self, program) }
    }

    fn program_info_log(&self, program: glow::Program) -> String {
        unsafe { glow::HasContext::get_program_info_log(self, program) }
    }

    fn use_program(&self, program: Option<glow::Program>) {
        unsafe { glow::HasContext::use_program(self, program) }
    }

    fn delete_program(&self, program: glow::Program) {
        unsafe { glow::HasContext::delete_program(self, program) }
    }

    fn get_attrib_location(&self, program: glow::Program, name: &str) -> Option<u32> {
        unsafe { glow::HasContext::get_attrib_location(self, program, name) }
    }

    fn get_uniform_location(
        &self,
        program: glow::Program,
        name: &str,
    ) -> Option<glow::UniformLocation> {
        unsafe { glow::HasContext::get_uniform_location(self, program, name) }
    }

    fn uniform_matrix4(&self, location: Option<&glow::UniformLocation>, value: &[f32; 16]) {
        unsafe { glow::HasContext::uniform_matrix_4_f32_slice(self, location, false, value) }
    }

    fn create_buffer(&self) -> Result<glow::Buffer, String> {
        unsafe { glow::HasContext::create_buffer(self) }
    }

    fn bind_buffer(&self, target: u32, buffer: Option<glow::Buffer>) {
        unsafe { glow::HasContext::bind_buffer(self, target, buffer) }
    }

    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        unsafe { glow::HasContext::buffer_data_u8_slice(self, target, data, usage) }
    }

    fn delete_buffer(&self, buffer: glow::Buffer) {
        unsafe { glow::HasContext::delete_buffer(self, buffer) }
    }

    fn create_texture(&self) -> Result<glow::Texture, String> {
        unsafe { glow::HasContext::create_texture(self) }
    }

    fn active_texture(&self, unit: u32) {
        unsafe { glow::HasContext::active_texture(self, unit) }
    }

    fn bind_texture(&self, target: u32, texture: Option<glow::Texture>) {
        unsafe { glow::HasContext::bind_texture(self, target, texture) }
    }

    fn tex_image_2d_rgba(&self, target: u32, width: u32, height: u32, pixels: &[u8]) {
        unsafe {
            glow::HasContext::tex_image_2d(
                self,
                target,
                0,
                glow::RGBA as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                Some(pixels),
            )
        }
    }

    fn tex_parameter(&self, target: u32, name: u32, value: i32) {
        unsafe { glow::HasContext::tex_parameter_i32(self, target, name, value) }
    }

    fn delete_texture(&self, texture: glow::Texture) {
        unsafe { glow::HasContext::delete_texture(self, texture) }
    }

    fn enable(&self, cap: u32) {
        unsafe { glow::HasContext::enable(self, cap) }
    }

    fn disable(&self, cap: u32) {
        unsafe { glow::HasContext::disable(self, cap) }
    }

    fn depth_func(&self, func: u32) {
        unsafe { glow::HasContext::depth_func(self, func) }
    }

    fn blend_func(&self, src: u32, dst: u32) {
        unsafe { glow::HasContext::blend_func(self, src, dst) }
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe { glow::HasContext::clear_color(self, r, g, b, a) }
    }

    fn clear(&self, mask: u32) {
        unsafe { glow::HasContext::clear(self, mask) }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { glow::HasContext::viewport(self, x, y, width, height) }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { glow::HasContext::enable_vertex_attrib_array(self, index) }
    }

    fn disable_vertex_attrib_array(&self, index: u32) {
        unsafe { glow::HasContext::disable_vertex_attrib_array(self, index) }
    }

    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        unsafe {
            glow::HasContext::vertex_attrib_pointer_f32(
                self, index, size, data_type, normalized, stride, offset,
            )
        }
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        unsafe { glow::HasContext::draw_arrays(self, mode, first, count) }
    }
}
