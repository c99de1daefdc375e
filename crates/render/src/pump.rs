use crate::clock::{Clock, SystemClock};
use crate::engine::{Engine, EngineError};
use crate::gl::GlContext;
use spincube_assets::AssetSource;
use spincube_input::{Crossing, Event, LifecycleEvent, SizeEvent, Stage};

/// The windowing side of the app.
pub trait Host {
    type Context: GlContext;

    /// Inspect or rewrite an event before dispatch.
    fn filter(&mut self, event: Event<Self::Context>) -> Event<Self::Context> {
        event
    }

    /// Present the back buffer.
    fn publish(&mut self);

    /// Queue an event for later delivery. The pump only sends the follow-up
    /// paint after each drawn frame.
    fn send(&mut self, event: Event<Self::Context>);
}

/// Owns the engine and the current draw context, and routes host events
/// into start, draw and stop.
pub struct EventPump<G: GlContext, C: Clock = SystemClock> {
    engine: Engine<G, C>,
    assets: Box<dyn AssetSource>,
    glctx: Option<G>,
    size: SizeEvent,
    frames: u64,
}

impl<G: GlContext> EventPump<G, SystemClock> {
    pub fn new(assets: Box<dyn AssetSource>) -> Self {
        Self::with_engine(Engine::new(), assets)
    }
}

impl<G: GlContext, C: Clock> EventPump<G, C> {
    pub fn with_engine(engine: Engine<G, C>, assets: Box<dyn AssetSource>) -> Self {
        Self {
            engine,
            assets,
            glctx: None,
            size: SizeEvent::default(),
            frames: 0,
        }
    }

    pub fn engine(&self) -> &Engine<G, C> {
        &self.engine
    }

    pub fn has_context(&self) -> bool {
        self.glctx.is_some()
    }

    /// Most recent size event.
    pub fn size(&self) -> &SizeEvent {
        &self.size
    }

    /// Frames drawn since the pump was created.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Filter one event through the host and dispatch it. Only a failed
    /// start is reported; everything else is fire-and-forget.
    pub fn handle<H>(&mut self, host: &mut H, event: Event<G>) -> Result<(), EngineError>
    where
        H: Host<Context = G>,
    {
        let event = host.filter(event);
        tracing::trace!(kind = event.kind(), "dispatching event");
        match event {
            Event::Lifecycle(e) => self.on_lifecycle(e)?,
            Event::Size(size) => {
                self.size = size;
                self.engine.touch_loc = size.center();
                tracing::debug!(
                    width = size.width_pt.0,
                    height = size.height_pt.0,
                    "size changed"
                );
            }
            Event::Paint(paint) => {
                let Some(gl) = self.glctx.as_ref() else {
                    return Ok(());
                };
                if paint.external || !self.engine.is_started() {
                    return Ok(());
                }
                self.engine.draw(gl, &self.size);
                self.frames += 1;
                host.publish();
                host.send(Event::paint());
            }
            Event::Touch(touch) => {
                tracing::trace!(x = touch.x, y = touch.y, kind = ?touch.kind, "touch ignored");
            }
        }
        Ok(())
    }

    /// Dispatch every event in order, stopping at the first error.
    pub fn run<H, I>(&mut self, host: &mut H, events: I) -> Result<(), EngineError>
    where
        H: Host<Context = G>,
        I: IntoIterator<Item = Event<G>>,
    {
        for event in events {
            self.handle(host, event)?;
        }
        Ok(())
    }

    fn on_lifecycle(&mut self, e: LifecycleEvent<G>) -> Result<(), EngineError> {
        match e.crosses(Stage::Visible) {
            Crossing::On => {
                tracing::info!(from = %e.from, to = %e.to, "becoming visible");
                let Some(gl) = e.draw_context else {
                    tracing::warn!("visible without a draw context");
                    return Ok(());
                };
                let gl = self.glctx.insert(gl);
                if let Err(err) = self.engine.start(gl, self.assets.as_ref()) {
                    self.glctx = None;
                    return Err(err);
                }
            }
            Crossing::Off => {
                tracing::info!(from = %e.from, to = %e.to, "leaving visible");
                if let Some(gl) = self.glctx.take() {
                    self.engine.stop(&gl);
                }
            }
            Crossing::None => {}
        }
        Ok(())
    }
}
