use anyhow::{Context as _, Result, anyhow};
use clap::Parser;
use glow::HasContext;
use glutin::config::{ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{Display, GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasWindowHandle;
use spincube_assets::AssetDir;
use spincube_input::{Event, LifecycleEvent, SizeEvent, Stage, TouchEvent, TouchKind};
use spincube_render::{EventPump, Host};
use std::num::NonZeroU32;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, Touch, TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

#[derive(Parser)]
#[command(name = "spincube-desktop", about = "Spinning textured cube")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Directory holding the shaders and the cube texture
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 600)]
    height: u32,
}

/// Window, GL surface and context. Also the pump's [`Host`].
struct GlWindow {
    window: Window,
    gl_display: Display,
    gl_context: PossiblyCurrentContext,
    gl_surface: Surface<WindowSurface>,
}

impl GlWindow {
    fn new(event_loop: &ActiveEventLoop, size: (u32, u32)) -> Result<Self> {
        let window_attrs = WindowAttributes::default()
            .with_title("spincube")
            .with_inner_size(LogicalSize::new(size.0, size.1));

        let template = ConfigTemplateBuilder::new()
            .with_alpha_size(8)
            .with_depth_size(24);

        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(window_attrs))
            .build(event_loop, template, |configs| {
                configs
                    .reduce(|best, config| {
                        if config.num_samples() > best.num_samples() {
                            config
                        } else {
                            best
                        }
                    })
                    .expect("glutin offers at least one config")
            })
            .map_err(|e| anyhow!("failed to build GL display: {e}"))?;
        let window = window.context("display builder returned no window")?;

        let raw = window
            .window_handle()
            .context("window has no native handle")?
            .as_raw();
        let gl_display = gl_config.display();

        let context_attrs = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(Some(raw));
        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attrs) }
            .context("failed to create GL context")?;

        let inner = window.inner_size();
        let surface_attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw,
            non_zero(inner.width),
            non_zero(inner.height),
        );
        let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attrs) }
            .context("failed to create GL surface")?;

        let gl_context = not_current
            .make_current(&gl_surface)
            .context("failed to make GL context current")?;

        if let Err(e) =
            gl_surface.set_swap_interval(&gl_context, SwapInterval::Wait(NonZeroU32::MIN))
        {
            tracing::warn!("vsync unavailable: {e}");
        }

        let this = Self {
            window,
            gl_display,
            gl_context,
            gl_surface,
        };

        // Core profile rejects attribute setup without a bound vertex array.
        let gl = this.load_gl();
        unsafe {
            let vao = gl
                .create_vertex_array()
                .map_err(|e| anyhow!("failed to create vertex array: {e}"))?;
            gl.bind_vertex_array(Some(vao));
        }

        tracing::info!(
            width = inner.width,
            height = inner.height,
            scale = window_scale(&this.window),
            "GL window created"
        );
        Ok(this)
    }

    /// Function table for the current context.
    fn load_gl(&self) -> glow::Context {
        unsafe {
            glow::Context::from_loader_function_cstr(|name| self.gl_display.get_proc_address(name))
        }
    }

    fn size_event(&self, size: PhysicalSize<u32>) -> SizeEvent {
        SizeEvent::from_pixels(size.width, size.height, window_scale(&self.window))
    }

    fn resize_surface(&self, size: PhysicalSize<u32>) {
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };
        self.gl_surface.resize(&self.gl_context, w, h);
    }
}

impl Host for GlWindow {
    type Context = glow::Context;

    fn publish(&mut self) {
        if let Err(e) = self.gl_surface.swap_buffers(&self.gl_context) {
            tracing::warn!("swap buffers failed: {e}");
        }
    }

    /// The pump only sends paints back, and a paint is a redraw request.
    fn send(&mut self, event: Event<glow::Context>) {
        match event {
            Event::Paint(_) => self.window.request_redraw(),
            other => tracing::debug!(kind = other.kind(), "dropping sent event"),
        }
    }
}

struct App {
    cli: Cli,
    window: Option<GlWindow>,
    pump: EventPump<glow::Context>,
    stage: Stage,
    cursor: PhysicalPosition<f64>,
    pressed: bool,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(cli: Cli) -> Self {
        let assets = AssetDir::new(cli.assets.clone());
        tracing::info!(root = %assets.root().display(), "asset directory");
        Self {
            cli,
            window: None,
            pump: EventPump::new(Box::new(assets)),
            stage: Stage::Alive,
            cursor: PhysicalPosition::new(0.0, 0.0),
            pressed: false,
            error: None,
        }
    }

    fn dispatch(&mut self, event_loop: &ActiveEventLoop, event: Event<glow::Context>) {
        let Some(window) = self.window.as_mut() else {
            return;
        };
        if let Err(e) = self.pump.handle(window, event) {
            tracing::error!(error = %e, "engine failed to start");
            self.error = Some(anyhow::Error::new(e).context("failed to start the cube engine"));
            event_loop.exit();
        }
    }

    fn transition(&mut self, event_loop: &ActiveEventLoop, to: Stage, gl: Option<glow::Context>) {
        if self.stage == to {
            return;
        }
        let mut lifecycle = LifecycleEvent::new(self.stage, to);
        lifecycle.draw_context = gl;
        self.stage = to;
        self.dispatch(event_loop, Event::Lifecycle(lifecycle));
    }

    fn touch(&mut self, event_loop: &ActiveEventLoop, kind: TouchKind, sequence: u64) {
        let touch = TouchEvent {
            x: self.cursor.x as f32,
            y: self.cursor.y as f32,
            sequence,
            kind,
        };
        self.dispatch(event_loop, Event::Touch(touch));
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            match GlWindow::new(event_loop, (self.cli.width, self.cli.height)) {
                Ok(window) => self.window = Some(window),
                Err(e) => {
                    tracing::error!("{e:#}");
                    self.error = Some(e);
                    event_loop.exit();
                    return;
                }
            }
        }
        let Some(window) = self.window.as_ref() else {
            return;
        };
        let gl = window.load_gl();
        let size = window.size_event(window.window.inner_size());

        self.transition(event_loop, Stage::Visible, Some(gl));
        self.dispatch(event_loop, Event::Size(size));
        if let Some(window) = self.window.as_ref() {
            window.window.request_redraw();
        }
    }

    fn suspended(&mut self, event_loop: &ActiveEventLoop) {
        self.transition(event_loop, Stage::Alive, None);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.transition(event_loop, Stage::Alive, None);
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                let Some(window) = self.window.as_ref() else {
                    return;
                };
                window.resize_surface(new_size);
                let size = window.size_event(new_size);
                self.dispatch(event_loop, Event::Size(size));
            }
            WindowEvent::RedrawRequested => {
                self.dispatch(event_loop, Event::paint());
            }
            WindowEvent::Focused(focused) => match (self.stage, focused) {
                (Stage::Visible, true) => self.transition(event_loop, Stage::Focused, None),
                (Stage::Focused, false) => self.transition(event_loop, Stage::Visible, None),
                _ => {}
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = position;
                if self.pressed {
                    self.touch(event_loop, TouchKind::Move, 0);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.pressed = state == ElementState::Pressed;
                let kind = if self.pressed {
                    TouchKind::Begin
                } else {
                    TouchKind::End
                };
                self.touch(event_loop, kind, 0);
            }
            WindowEvent::Touch(Touch {
                phase,
                location,
                id,
                ..
            }) => {
                self.cursor = location;
                self.touch(event_loop, touch_kind(phase), id);
            }
            _ => {}
        }
    }
}

fn touch_kind(phase: TouchPhase) -> TouchKind {
    match phase {
        TouchPhase::Started => TouchKind::Begin,
        TouchPhase::Moved => TouchKind::Move,
        TouchPhase::Ended | TouchPhase::Cancelled => TouchKind::End,
    }
}

fn non_zero(v: u32) -> NonZeroU32 {
    NonZeroU32::new(v).unwrap_or(NonZeroU32::MIN)
}

fn window_scale(window: &Window) -> f32 {
    window.scale_factor() as f32
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("spincube-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(cli);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["spincube-desktop"]).unwrap();
        assert!(!cli.verbose);
        assert_eq!(cli.assets, PathBuf::from("assets"));
        assert_eq!((cli.width, cli.height), (800, 600));
    }

    #[test]
    fn cli_overrides() {
        let cli = Cli::try_parse_from([
            "spincube-desktop",
            "-v",
            "--assets",
            "/tmp/cube",
            "--width",
            "320",
            "--height",
            "240",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.assets, PathBuf::from("/tmp/cube"));
        assert_eq!((cli.width, cli.height), (320, 240));
    }

    #[test]
    fn cancelled_touch_ends() {
        assert_eq!(touch_kind(TouchPhase::Started), TouchKind::Begin);
        assert_eq!(touch_kind(TouchPhase::Moved), TouchKind::Move);
        assert_eq!(touch_kind(TouchPhase::Ended), TouchKind::End);
        assert_eq!(touch_kind(TouchPhase::Cancelled), TouchKind::End);
    }

    #[test]
    fn zero_surface_size_clamps() {
        assert_eq!(non_zero(0).get(), 1);
        assert_eq!(non_zero(480).get(), 480);
    }
}
