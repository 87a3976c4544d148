use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Args(#[from] getopts::Fail),

    #[error("invalid value for --{name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("a render worker panicked")]
    WorkerPanicked,
}

pub type Result<T> = std::result::Result<T, Error>;
