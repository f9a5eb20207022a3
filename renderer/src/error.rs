use std::fmt;

/// Crate-wide error type covering I/O and mesh-ingestion failures that can
/// surface while building a `Scene`.
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Mesh(mesh::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "i/o error: {}", e),
            Error::Mesh(e) => write!(f, "mesh error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Mesh(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<mesh::Error> for Error {
    fn from(e: mesh::Error) -> Self {
        Error::Mesh(e)
    }
}
