//! Recording GL context for tests.

use crate::gl::GlContext;
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Object {
    Shader(u32),
    Program(u32),
    Buffer(u32),
    Texture(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateShader(u32, u32),
    ShaderSource(u32, String),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    DetachShader(u32, u32),
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    UniformMatrix4(Option<u32>, [f32; 16]),
    CreateBuffer(u32),
    BindBuffer(u32, Option<u32>),
    BufferData(u32, usize, u32),
    DeleteBuffer(u32),
    CreateTexture(u32),
    ActiveTexture(u32),
    BindTexture(u32, Option<u32>),
    TexImage2d(u32, u32, u32, usize),
    TexParameter(u32, u32, i32),
    DeleteTexture(u32),
    Enable(u32),
    Disable(u32),
    DepthFunc(u32),
    BlendFunc(u32, u32),
    ClearColor([f32; 4]),
    Clear(u32),
    Viewport(i32, i32, i32, i32),
    EnableAttrib(u32),
    DisableAttrib(u32),
    AttribPointer {
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    DrawArrays(u32, i32, i32),
}

/// GL context that records every call and tracks live objects.
///
/// Attribute and uniform names resolve to stable locations in lookup order;
/// names listed in `missing` resolve to `None`.
#[derive(Debug, Default)]
pub struct RecordingGl {
    calls: RefCell<Vec<Call>>,
    live: RefCell<BTreeSet<Object>>,
    next_name: Cell<u32>,
    locations: RefCell<Vec<String>>,
    buffer_sizes: RefCell<Vec<(u32, usize)>>,
    bound_buffer: Cell<Option<u32>>,
    pub fail_compile: Cell<bool>,
    pub fail_link: Cell<bool>,
    pub missing: RefCell<Vec<String>>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn live(&self) -> BTreeSet<Object> {
        self.live.borrow().clone()
    }

    pub fn live_buffers(&self) -> usize {
        self.live
            .borrow()
            .iter()
            .filter(|o| matches!(o, Object::Buffer(_)))
            .count()
    }

    /// Size of the last upload into `buffer`, if any.
    pub fn buffer_size(&self, buffer: u32) -> Option<usize> {
        self.buffer_sizes
            .borrow()
            .iter()
            .rev()
            .find(|(b, _)| *b == buffer)
            .map(|(_, size)| *size)
    }

    /// Location assigned to an attribute or uniform name.
    pub fn location_of(&self, name: &str) -> Option<u32> {
        self.locations
            .borrow()
            .iter()
            .position(|n| n == name)
            .map(|i| i as u32)
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn alloc(&self, make: fn(u32) -> Object) -> u32 {
        let name = self.next_name.get() + 1;
        self.next_name.set(name);
        self.live.borrow_mut().insert(make(name));
        name
    }

    fn free(&self, object: Object) {
        self.live.borrow_mut().remove(&object);
    }

    fn location(&self, name: &str) -> Option<u32> {
        if self.missing.borrow().iter().any(|m| m == name) {
            return None;
        }
        if let Some(loc) = self.location_of(name) {
            return Some(loc);
        }
        let mut locations = self.locations.borrow_mut();
        locations.push(name.to_string());
        Some(locations.len() as u32 - 1)
    }
}

impl GlContext for RecordingGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type Texture = u32;
    type UniformLocation = u32;

    fn create_shader(&self, kind: u32) -> Result<u32, String> {
        let name = self.alloc(Object::Shader);
        self.record(Call::CreateShader(kind, name));
        Ok(name)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.record(Call::ShaderSource(shader, source.to_string()));
    }

    fn compile_shader(&self, shader: u32) {
        self.record(Call::CompileShader(shader));
    }

    fn shader_compile_status(&self, _shader: u32) -> bool {
        !self.fail_compile.get()
    }

    fn shader_info_log(&self, shader: u32) -> String {
        format!("0:1: syntax error in shader {shader}")
    }

    fn delete_shader(&self, shader: u32) {
        self.free(Object::Shader(shader));
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let name = self.alloc(Object::Program);
        self.record(Call::CreateProgram(name));
        Ok(name)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::AttachShader(program, shader));
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        self.record(Call::DetachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        self.record(Call::LinkProgram(program));
    }

    fn program_link_status(&self, _program: u32) -> bool {
        !self.fail_link.get()
    }

    fn program_info_log(&self, _program: u32) -> String {
        "link failed: vertCoord undeclared".to_string()
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.free(Object::Program(program));
        self.record(Call::DeleteProgram(program));
    }

    fn get_attrib_location(&self, _program: u32, name: &str) -> Option<u32> {
        self.location(name)
    }

    fn get_uniform_location(&self, _program: u32, name: &str) -> Option<u32> {
        self.location(name)
    }

    fn uniform_matrix4(&self, location: Option<&u32>, value: &[f32; 16]) {
        self.record(Call::UniformMatrix4(location.copied(), *value));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let name = self.alloc(Object::Buffer);
        self.record(Call::CreateBuffer(name));
        Ok(name)
    }

    fn bind_buffer(&self, target: u32, buffer: Option<u32>) {
        self.bound_buffer.set(buffer);
        self.record(Call::BindBuffer(target, buffer));
    }

    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        if let Some(buffer) = self.bound_buffer.get() {
            self.buffer_sizes.borrow_mut().push((buffer, data.len()));
        }
        self.record(Call::BufferData(target, data.len(), usage));
    }

    fn delete_buffer(&self, buffer: u32) {
        self.free(Object::Buffer(buffer));
        self.record(Call::DeleteBuffer(buffer));
    }

    fn create_texture(&self) -> Result<u32, String> {
        let name = self.alloc(Object::Texture);
        self.record(Call::CreateTexture(name));
        Ok(name)
    }

    fn active_texture(&self, unit: u32) {
        self.record(Call::ActiveTexture(unit));
    }

    fn bind_texture(&self, target: u32, texture: Option<u32>) {
        self.record(Call::BindTexture(target, texture));
    }

    fn tex_image_2d_rgba(&self, target: u32, width: u32, height: u32, pixels: &[u8]) {
        self.record(Call::TexImage2d(target, width, height, pixels.len()));
    }

    fn tex_parameter(&self, target: u32, name: u32, value: i32) {
        self.record(Call::TexParameter(target, name, value));
    }

    fn delete_texture(&self, texture: u32) {
        self.free(Object::Texture(texture));
        self.record(Call::DeleteTexture(texture));
    }

    fn enable(&self, cap: u32) {
        self.record(Call::Enable(cap));
    }

    fn disable(&self, cap: u32) {
        self.record(Call::Disable(cap));
    }

    fn depth_func(&self, func: u32) {
        self.record(Call::DepthFunc(func));
    }

    fn blend_func(&self, src: u32, dst: u32) {
        self.record(Call::BlendFunc(src, dst));
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.record(Call::ClearColor([r, g, b, a]));
    }

    fn clear(&self, mask: u32) {
        self.record(Call::Clear(mask));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport(x, y, width, height));
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::EnableAttrib(index));
    }

    fn disable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::DisableAttrib(index));
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
        self.record(Call::AttribPointer {
            index,
            size,
            data_type,
            normalized,
            stride,
            offset,
        });
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.record(Call::DrawArrays(mode, first, count));
    }
}

/// Lets a test keep a handle on the recorder after handing it over.
impl GlContext for Rc<RecordingGl> {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type Texture = u32;
    type UniformLocation = u32;

    fn create_shader(&self, kind: u32) -> Result<u32, String> {
        (**self).create_shader(kind)
    }
    fn shader_source(&self, shader: u32, source: &str) {
        (**self).shader_source(shader, source)
    }
    fn compile_shader(&self, shader: u32) {
        (**self).compile_shader(shader)
    }
    fn shader_compile_status(&self, shader: u32) -> bool {
        (**self).shader_compile_status(shader)
    }
    fn shader_info_log(&self, shader: u32) -> String {
        (**self).shader_info_log(shader)
    }
    fn delete_shader(&self, shader: u32) {
        (**self).delete_shader(shader)
    }
    fn create_program(&self) -> Result<u32, String> {
        (**self).create_program()
    }
    fn attach_shader(&self, program: u32, shader: u32) {
        (**self).attach_shader(program, shader)
    }
    fn detach_shader(&self, program: u32, shader: u32) {
        (**self).detach_shader(program, shader)
    }
    fn link_program(&self, program: u32) {
        (**self).link_program(program)
    }
    fn program_link_status(&self, program: u32) -> bool {
        (**self).program_link_status(program)
    }
    fn program_info_log(&self, program: u32) -> String {
        (**self).program_info_log(program)
    }
    fn use_program(&self, program: Option<u32>) {
        (**self).use_program(program)
    }
    fn delete_program(&self, program: u32) {
        (**self).delete_program(program)
    }
    fn get_attrib_location(&self, program: u32, name: &str) -> Option<u32> {
        (**self).get_attrib_location(program, name)
    }
    fn get_uniform_location(&self, program: u32, name: &str) -> Option<u32> {
        (**self).get_uniform_location(program, name)
    }
    fn uniform_matrix4(&self, location: Option<&u32>, value: &[f32; 16]) {
        (**self).uniform_matrix4(location, value)
    }
    fn create_buffer(&self) -> Result<u32, String> {
        (**self).create_buffer()
    }
    fn bind_buffer(&self, target: u32, buffer: Option<u32>) {
        (**self).bind_buffer(target, buffer)
    }
    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        (**self).buffer_data(target, data, usage)
    }
    fn delete_buffer(&self, buffer: u32) {
        (**self).delete_buffer(buffer)
    }
    fn create_texture(&self) -> Result<u32, String> {
        (**self).create_texture()
    }
    fn active_texture(&self, unit: u32) {
        (**self).active_texture(unit)
    }
    fn bind_texture(&self, target: u32, texture: Option<u32>) {
        (**self).bind_texture(target, texture)
    }
    fn tex_image_2d_rgba(&self, target: u32, width: u32, height: u32, pixels: &[u8]) {
        (**self).tex_image_2d_rgba(target, width, height, pixels)
    }
    fn tex_parameter(&self, target: u32, name: u32, value: i32) {
        (**self).tex_parameter(target, name, value)
    }
    fn delete_texture(&self, texture: u32) {
        (**self).delete_texture(texture)
    }
    fn enable(&self, cap: u32) {
        (**self).enable(cap)
    }
    fn disable(&self, cap: u32) {
        (**self).disable(cap)
    }
    fn depth_func(&self, func: u32) {
        (**self).depth_func(func)
    }
    fn blend_func(&self, src: u32, dst: u32) {
        (**self).blend_func(src, dst)
    }
    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        (**self).clear_color(r, g, b, a)
    }
    fn clear(&self, mask: u32) {
        (**self).clear(mask)
    }
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        (**self).viewport(x, y, width, height)
    }
    fn enable_vertex_attrib_array(&self, index: u32) {
        (**self).enable_vertex_attrib_array(index)
    }
    fn disable_vertex_attrib_array(&self, index: u32) {
        (**self).disable_vertex_attrib_array(index)
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
        (**self)
            .vertex_attrib_pointer(index, size, data_type, normalized, stride, offset)
    }
    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        (**self).draw_arrays(mode, first, count)
    }
}

/// A 2x2 opaque PNG, encoded in memory.
pub fn tiny_png() -> Vec<u8> {
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    let img = RgbaImage::from_pixel(2, 2, Rgba([255, 128, 0, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}
