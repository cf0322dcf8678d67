use thiserror::Error;

#[derive(Error, Debug)]
pub enum RainError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid number of preallocated values: {0} (must be between 512 and 8192)")]
    InvalidPrealloc(usize),

    #[error("Invalid update delay: {0} (must be between 0 and 10)")]
    InvalidPacing(u8),

    #[error("Invalid color selection: {0}. Valid colors are green, red, blue, yellow, cyan, magenta, and white")]
    InvalidColor(String),

    #[error("'{path}' couldn't be opened: {source}")]
    Tty {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Out of memory allocating {0} cells")]
    Allocation(usize),

    #[error("Terminal query failed: {0}")]
    Terminal(String),
}

pub type Result<T> = std::result::Result<T, RainError>;
