use tokio::signal::unix::{signal, Signal, SignalKind};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::debug;

/// Listens for the signals the frame loop cares about
pub struct SignalHandler {
    sigint: Signal,
    sigquit: Signal,
    sigtstp: Signal,
    sigterm: Signal,
    sigwinch: Signal,
}

impl SignalHandler {
    pub fn new() -> Result<Self, std::io::Error> {
        Ok(Self {
            sigint: signal(SignalKind::interrupt())?,
            sigquit: signal(SignalKind::quit())?,
            sigtstp: signal(SignalKind::from_raw(libc::SIGTSTP))?,
            sigterm: signal(SignalKind::terminate())?,
            sigwinch: signal(SignalKind::window_change())?,
        })
    }

    /// Wait for the next signal
    pub async fn next_event(&mut self) -> SignalEvent {
        tokio::select! {
            _ = self.sigint.recv() => {
                debug!("Received SIGINT");
                SignalEvent::Interrupt
            }
            _ = self.sigquit.recv() => {
                debug!("Received SIGQUIT");
                SignalEvent::Interrupt
            }
            _ = self.sigtstp.recv() => {
                debug!("Received SIGTSTP");
                SignalEvent::Interrupt
            }
            _ = self.sigterm.recv() => {
                debug!("Received SIGTERM");
                SignalEvent::Terminate
            }
            _ = self.sigwinch.recv() => {
                debug!("Received SIGWINCH");
                SignalEvent::WindowChange
            }
        }
    }

    /// Record signals on a channel the frame loop drains once per frame.
    ///
    /// The listener runs as a task on the current runtime and stops once the
    /// receiver is dropped.
    pub fn forward(mut self) -> UnboundedReceiver<SignalEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            loop {
                let event = self.next_event().await;
                if tx.send(event).is_err() {
                    break;
                }
            }
        });
        rx
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalEvent {
    /// SIGINT, SIGQUIT or SIGTSTP; ignored in lock mode
    Interrupt,
    Terminate,
    WindowChange,
}
