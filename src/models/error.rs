use std::fmt;

#[derive(Debug)]
pub enum Error {
    IoError(std::io::Error),
    CsvError(String),
    InternalConsistency(String),
    ConfigError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::CsvError(msg) => write!(f, "CSV Error: {}", msg),
            Error::InternalConsistency(msg) => write!(f, "Internal Consistency Error: {}", msg),
            Error::ConfigError(msg) => write!(f, "Config Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::CsvError(err.to_string())
    }
}
