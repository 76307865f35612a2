use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    IndexOutOfRange(usize),
    Parse(String),
    ArgumentError(String),
    IO(String)
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IndexOutOfRange(i) => write!(f, "index {} out of range for a 3-vector", i),
            Error::Parse(msg) => write!(f, "parse error: {}", msg),
            Error::ArgumentError(msg) => write!(f, "invalid argument: {}", msg),
            Error::IO(msg) => write!(f, "io error: {}", msg)
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::IO(format!("{}", e))
    }
}
