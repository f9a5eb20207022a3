use std::fmt;

/// Errors produced while reading a mesh from an external source.
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// The leading triangle-count line was missing or not a valid integer.
    MalformedCount { line: String },
    /// A triangle record did not contain 18 whitespace-separated numbers.
    MalformedRecord { index: usize, reason: String },
    /// The file ended before `count` triangle records were read.
    UnexpectedEof { expected: usize, found: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "i/o error reading mesh: {}", e),
            Error::MalformedCount { line } => {
                write!(f, "expected a triangle count, found: {:?}", line)
            }
            Error::MalformedRecord { index, reason } => {
                write!(f, "malformed triangle record at index {}: {}", index, reason)
            }
            Error::UnexpectedEof { expected, found } => write!(
                f,
                "expected {} triangle records, but the stream ended after {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
