use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use digirain::display::Restorer;
use digirain::{
    Args, CharSource, Config, Display, Engine, FrameDriver, LiveSource, PreallocatedSource,
    Renderer, SignalHandler, TerminalDisplay,
};

const FALLBACK_SIZE: (u16, u16) = (24, 80);

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_args(Args::parse())?;

    if let Some(path) = &config.log_file {
        init_logging(path)?;
    }
    info!("Starting digirain v{}", env!("CARGO_PKG_VERSION"));

    if config.force_linux {
        debug!("-f accepted; crossterm does not consult TERM");
    }
    if config.tty.is_none() && !stdout_is_tty() {
        warn!("stdout is not a terminal");
    }

    let mut display =
        TerminalDisplay::open(config.tty.as_deref()).context("Failed to set up the terminal")?;
    install_panic_hook(display.restorer());

    let (rows, cols) = display.query_dimensions().unwrap_or_else(|e| {
        warn!("Could not read terminal size, assuming 24x80: {}", e);
        FALLBACK_SIZE
    });
    info!("Terminal size: {}x{}", rows, cols);

    let mut live = LiveSource::from_clock();
    let source: Box<dyn CharSource> = match config.prealloc {
        Some(size) => {
            info!("Preallocating {} values", size);
            Box::new(PreallocatedSource::fill(size, &mut live, &mut display)?)
        }
        None => Box::new(live),
    };

    let engine = Engine::new(rows, cols, source)?;
    let mut events = SignalHandler::new()
        .context("Failed to install signal handlers")?
        .forward();

    let mut driver = FrameDriver::new(engine, Renderer::new(config.message), config.settings)
        .with_lock(config.lock)
        .with_screensaver(config.screensaver);
    driver.run(&mut display, &mut events).await?;

    info!("Exiting");
    Ok(())
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn stdout_is_tty() -> bool {
    use std::os::unix::io::AsRawFd;
    nix::unistd::isatty(std::io::stdout().as_raw_fd()).unwrap_or(false)
}

fn install_panic_hook(restorer: Restorer) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restorer.restore();
        previous(info);
    }));
}
