use spincube_common::{Point, Pt};
use std::fmt;

/// Application lifecycle stage, ordered from least to most active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// The app is not running.
    Dead,
    /// The app is running but has no visible surface.
    Alive,
    /// A surface exists and drawing is permitted.
    Visible,
    /// The surface has input focus.
    Focused,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Dead => "dead",
            Stage::Alive => "alive",
            Stage::Visible => "visible",
            Stage::Focused => "focused",
        };
        f.write_str(name)
    }
}

/// Whether a lifecycle transition crosses a given stage boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// Transition goes from below the stage to at or above it.
    On,
    /// Transition goes from at or above the stage to below it.
    Off,
    None,
}

/// A lifecycle transition. `draw_context` is only populated when the
/// transition makes the app visible.
pub struct LifecycleEvent<C> {
    pub from: Stage,
    pub to: Stage,
    pub draw_context: Option<C>,
}

impl<C> LifecycleEvent<C> {
    pub fn new(from: Stage, to: Stage) -> Self {
        Self {
            from,
            to,
            draw_context: None,
        }
    }

    pub fn with_context(mut self, ctx: C) -> Self {
        self.draw_context = Some(ctx);
        self
    }

    /// Report whether this transition crosses `stage`.
    pub fn crosses(&self, stage: Stage) -> Crossing {
        if self.from < stage && self.to >= stage {
            Crossing::On
        } else if self.from >= stage && self.to < stage {
            Crossing::Off
        } else {
            Crossing::None
        }
    }
}

impl<C> fmt::Debug for LifecycleEvent<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleEvent")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("has_context", &self.draw_context.is_some())
            .finish()
    }
}

/// Window dimensions reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeEvent {
    pub width_px: u32,
    pub height_px: u32,
    pub width_pt: Pt,
    pub height_pt: Pt,
    pub pixels_per_pt: f32,
}

impl SizeEvent {
    /// Build a size event from physical pixels and the host scale factor.
    pub fn from_pixels(width_px: u32, height_px: u32, pixels_per_pt: f32) -> Self {
        Self {
            width_px,
            height_px,
            width_pt: Pt::from_px(width_px as f32, pixels_per_pt),
            height_pt: Pt::from_px(height_px as f32, pixels_per_pt),
            pixels_per_pt,
        }
    }

    /// Build a size event at a scale of one pixel per point.
    pub fn from_points(width_pt: f32, height_pt: f32) -> Self {
        Self {
            width_px: width_pt.max(0.0) as u32,
            height_px: height_pt.max(0.0) as u32,
            width_pt: Pt(width_pt),
            height_pt: Pt(height_pt),
            pixels_per_pt: 1.0,
        }
    }

    /// Midpoint of the window in points.
    pub fn center(&self) -> Point {
        Point::new(self.width_pt / 2.0, self.height_pt / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchKind {
    Begin,
    Move,
    End,
}

/// A single touch or pointer sample, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub x: f32,
    pub y: f32,
    pub sequence: u64,
    pub kind: TouchKind,
}

/// Paint request. `external` marks repaints requested by the OS rather than
/// by the app itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaintEvent {
    pub external: bool,
}

/// Everything the host can deliver to the app.
///
/// `C` is the draw context type handed over when the app becomes visible.
#[derive(Debug)]
pub enum Event<C> {
    Lifecycle(LifecycleEvent<C>),
    Size(SizeEvent),
    Paint(PaintEvent),
    Touch(TouchEvent),
}

impl<C> Event<C> {
    pub fn paint() -> Self {
        Event::Paint(PaintEvent { external: false })
    }

    pub fn external_paint() -> Self {
        Event::Paint(PaintEvent { external: true })
    }

    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Lifecycle(_) => "lifecycle",
            Event::Size(_) => "size",
            Event::Paint(_) => "paint",
            Event::Touch(_) => "touch",
        }
    }
}
