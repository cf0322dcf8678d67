use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Read, Write};
use std::os::unix::io::{AsRawFd, RawFd};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use nix::poll::{poll, PollFd, PollFlags};
use nix::sys::termios::{self, SetArg, Termios};
use tracing::{debug, warn};

use super::{Display, Key};
use crate::error::{RainError, Result};
use crate::renderer::MatrixColor;

/// Where keys come from and how raw mode is undone
enum Input {
    /// crossterm's reader on the controlling terminal
    Controlling,
    /// Raw bytes from an explicitly opened tty
    Tty { file: File, original: Termios },
}

/// Full-screen crossterm surface on stdout or an explicitly chosen tty.
///
/// Raw mode, the alternate screen and the hidden cursor are undone on drop.
/// With a chosen tty, both drawing and key input use that device.
pub struct TerminalDisplay {
    out: BufWriter<Box<dyn Write + Send>>,
    input: Input,
    style: Option<(MatrixColor, bool)>,
    restorer: Restorer,
}

impl TerminalDisplay {
    pub fn open(tty: Option<&Path>) -> Result<Self> {
        let (writer, input, restorer): (Box<dyn Write + Send>, Input, Restorer) = match tty {
            Some(path) => {
                let tty_error = |source: io::Error| RainError::Tty {
                    path: path.display().to_string(),
                    source,
                };
                let file = OpenOptions::new()
                    .read(true)
                    .write(true)
                    .open(path)
                    .map_err(tty_error)?;
                let original = termios::tcgetattr(&file).map_err(|e| tty_error(e.into()))?;
                let writer = file.try_clone()?;

                let mut raw = original.clone();
                termios::cfmakeraw(&mut raw);
                termios::tcsetattr(&file, SetArg::TCSAFLUSH, &raw).map_err(io::Error::from)?;
                debug!("Drawing on {}", path.display());

                let restorer = Restorer {
                    tty: Some((path.to_path_buf(), original.clone().into())),
                };
                (Box::new(writer), Input::Tty { file, original }, restorer)
            }
            None => {
                terminal::enable_raw_mode()?;
                (Box::new(io::stdout()), Input::Controlling, Restorer { tty: None })
            }
        };

        let mut display = Self {
            out: BufWriter::new(writer),
            input,
            style: None,
            restorer,
        };
        execute!(display.out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(display)
    }

    /// Handle that undoes this display's terminal modes from anywhere
    pub fn restorer(&self) -> Restorer {
        self.restorer.clone()
    }

    fn restore(&mut self) -> io::Result<()> {
        leave_screen(&mut self.out)?;
        match &self.input {
            Input::Controlling => terminal::disable_raw_mode(),
            Input::Tty { file, original } => {
                termios::tcsetattr(file, SetArg::TCSAFLUSH, original).map_err(io::Error::from)
            }
        }
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("Failed to restore terminal: {}", e);
        }
    }
}

/// Best-effort terminal restore that does not need the display, for panic hooks
#[derive(Clone)]
pub struct Restorer {
    tty: Option<(PathBuf, libc::termios)>,
}

impl Restorer {
    pub fn restore(&self) {
        match &self.tty {
            Some((path, original)) => {
                if let Ok(mut file) = OpenOptions::new().write(true).open(path) {
                    let _ = leave_screen(&mut file);
                    let _ = termios::tcsetattr(&file, SetArg::TCSAFLUSH, &Termios::from(*original));
                }
            }
            None => {
                let _ = leave_screen(&mut io::stdout());
                let _ = terminal::disable_raw_mode();
            }
        }
    }
}

fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(
        out,
        SetAttribute(Attribute::Reset),
        ResetColor,
        Clear(ClearType::All),
        Show,
        LeaveAlternateScreen
    )
}

fn window_size(fd: RawFd) -> Result<(u16, u16)> {
    // SAFETY: winsize is plain old data and TIOCGWINSZ only writes into it.
    let mut size: libc::winsize = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut size) };
    if rc == -1 {
        return Err(io::Error::last_os_error().into());
    }
    Ok((size.ws_row, size.ws_col))
}

fn convert_key(event: KeyEvent) -> Key {
    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Key::Interrupt,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

/// First byte of a raw tty read; escape sequences and non-ASCII input are `Other`
fn convert_byte(byte: u8) -> Key {
    match byte {
        0x03 => Key::Interrupt,
        0x20..=0x7e => Key::Char(char::from(byte)),
        _ => Key::Other,
    }
}

fn read_tty_key(file: &File) -> Result<Option<Key>> {
    let ready = {
        let mut fds = [PollFd::new(file, PollFlags::POLLIN)];
        poll(&mut fds, 0).map_err(io::Error::from)?
    };
    if ready == 0 {
        return Ok(None);
    }

    let mut buf = [0u8; 32];
    let mut reader = file;
    let n = reader.read(&mut buf)?;
    Ok(buf[..n].first().map(|b| convert_byte(*b)))
}

impl Display for TerminalDisplay {
    fn query_dimensions(&mut self) -> Result<(u16, u16)> {
        match &self.input {
            Input::Tty { file, .. } => window_size(file.as_raw_fd()),
            Input::Controlling => {
                let (cols, rows) = terminal::size()?;
                Ok((rows, cols))
            }
        }
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> Result<()> {
        queue!(self.out, MoveTo(col, row))?;
        Ok(())
    }

    fn draw_glyph(&mut self, glyph: char, color: MatrixColor, bold: bool) -> Result<()> {
        if self.style != Some((color, bold)) {
            let intensity = if bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            };
            queue!(
                self.out,
                SetForegroundColor(color.to_ansi()),
                SetAttribute(intensity)
            )?;
            self.style = Some((color, bold));
        }
        queue!(self.out, Print(glyph))?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        queue!(self.out, SetAttribute(Attribute::Reset), Clear(ClearType::All))?;
        self.style = None;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn poll_key(&mut self) -> Result<Option<Key>> {
        if let Input::Tty { file, .. } = &self.input {
            return read_tty_key(file);
        }

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(convert_key(key)));
                }
            }
        }
        Ok(None)
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
