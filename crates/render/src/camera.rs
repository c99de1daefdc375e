use glam::{Mat4, Vec3};

/// Fixed camera looking at the cube from a corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CubeCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(3.0, 3.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: 0.785,
            near: 0.1,
            far: 10.0,
        }
    }
}

impl CubeCamera {
    /// Perspective projection into GL clip space (depth -1..1).
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, aspect, self.near, self.far)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Width over height. Falls back to 1.0 when the height is not positive,
/// which some hosts report before the first real layout.
pub fn aspect_ratio(width: f32, height: f32) -> f32 {
    if height > 0.0 && width > 0.0 {
        width / height
    } else {
        tracing::debug!(width, height, "degenerate size, using square aspect");
        1.0
    }
}

/// Spin about the world Y axis by `seconds` radians.
pub fn model_matrix(seconds: f32) -> Mat4 {
    Mat4::from_rotation_y(seconds)
}
