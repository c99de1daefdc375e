/// GLSL vertex shader for the FPS overlay quad. Positions arrive already in
/// clip space.
pub const OVERLAY_VERTEX: &str = r#"#version 330 core
in vec2 overlayCoord;
in vec2 overlayTexCoord;

out vec2 fragTexCoord;

void main() {
    fragTexCoord = overlayTexCoord;
    gl_Position = vec4(overlayCoord, 0.0, 1.0);
}
"#;

/// GLSL fragment shader for the FPS overlay quad.
pub const OVERLAY_FRAGMENT: &str = r#"#version 330 core
uniform sampler2D glyphs;

in vec2 fragTexCoord;
out vec4 fragColor;

void main() {
    fragColor = texture(glyphs, fragTexCoord);
}
"#;
