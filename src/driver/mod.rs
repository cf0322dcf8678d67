//! The frame loop: update, draw, read a key, handle signals, wait.

pub mod input;
pub mod signals;

pub use input::{binding_for, Binding};
pub use signals::{SignalEvent, SignalHandler};

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};

use crate::display::{Display, Key};
use crate::engine::{Engine, Settings};
use crate::error::Result;
use crate::renderer::Renderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

pub struct FrameDriver {
    engine: Engine,
    renderer: Renderer,
    settings: Settings,
    /// Quit keys and interrupt signals are ignored
    lock: bool,
    /// Any key quits
    screensaver: bool,
}

impl FrameDriver {
    pub fn new(engine: Engine, renderer: Renderer, settings: Settings) -> Self {
        Self {
            engine,
            renderer,
            settings,
            lock: false,
            screensaver: false,
        }
    }

    pub fn with_lock(mut self, lock: bool) -> Self {
        self.lock = lock;
        self
    }

    pub fn with_screensaver(mut self, screensaver: bool) -> Self {
        self.screensaver = screensaver;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn handle_signal(
        &mut self,
        event: SignalEvent,
        display: &mut dyn Display,
    ) -> Result<FrameOutcome> {
        match event {
            SignalEvent::Interrupt if self.lock => {
                debug!("Interrupt ignored while locked");
                Ok(FrameOutcome::Continue)
            }
            SignalEvent::Interrupt | SignalEvent::Terminate => {
                info!("Stopping on {:?}", event);
                Ok(FrameOutcome::Quit)
            }
            SignalEvent::WindowChange => {
                match display.query_dimensions() {
                    Ok((rows, cols)) => {
                        info!("Terminal resized to {}x{}", rows, cols);
                        self.engine.rebuild(rows, cols)?;
                        display.clear()?;
                    }
                    Err(e) => warn!("Could not read new terminal size, keeping layout: {}", e),
                }
                Ok(FrameOutcome::Continue)
            }
        }
    }

    pub fn handle_key(&mut self, key: Key) -> FrameOutcome {
        if self.screensaver {
            return FrameOutcome::Quit;
        }
        match binding_for(key) {
            Some(Binding::Quit) if self.lock => FrameOutcome::Continue,
            Some(Binding::Quit) => FrameOutcome::Quit,
            Some(Binding::Apply(action)) => {
                self.settings.apply(action);
                FrameOutcome::Continue
            }
            None => FrameOutcome::Continue,
        }
    }

    /// One frame: advance the streams, draw them, then take at most one key
    pub fn step(&mut self, display: &mut dyn Display) -> Result<FrameOutcome> {
        self.engine.advance(&self.settings);
        self.renderer.render(&mut self.engine, &self.settings, display)?;

        match display.poll_key()? {
            Some(key) => Ok(self.handle_key(key)),
            None => Ok(FrameOutcome::Continue),
        }
    }

    /// Run frames until a quit key or signal
    pub async fn run(
        &mut self,
        display: &mut dyn Display,
        events: &mut UnboundedReceiver<SignalEvent>,
    ) -> Result<()> {
        info!("Starting frame loop");
        loop {
            while let Ok(event) = events.try_recv() {
                if self.handle_signal(event, display)? == FrameOutcome::Quit {
                    return Ok(());
                }
            }

            if self.step(display)? == FrameOutcome::Quit {
                info!("Quit requested");
                return Ok(());
            }

            let delay = self.settings.frame_delay();
            if delay.is_zero() {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(delay).await;
            }
        }
    }
}
