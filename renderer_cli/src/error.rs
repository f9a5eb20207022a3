use std::convert::From;
use std::error;
use std::fmt;
use std::result;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Ron(ron::Error),
    Mesh(mesh::Error),
    Renderer(renderer::Error),
    Image(image::ImageError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {:?}", e),
            Error::Ron(e) => write!(f, "error parsing config: {:?}", e),
            Error::Mesh(e) => write!(f, "error building mesh: {:?}", e),
            Error::Renderer(e) => write!(f, "render error: {:?}", e),
            Error::Image(e) => write!(f, "error performing image operation: {:?}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Ron(e) => Some(e),
            Error::Mesh(e) => Some(e),
            Error::Renderer(e) => Some(e),
            Error::Image(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io(error)
    }
}

impl From<ron::Error> for Error {
    fn from(error: ron::Error) -> Self {
        Error::Ron(error)
    }
}

impl From<mesh::Error> for Error {
    fn from(error: mesh::Error) -> Self {
        Error::Mesh(error)
    }
}

impl From<renderer::Error> for Error {
    fn from(error: renderer::Error) -> Self {
        Error::Renderer(error)
    }
}

impl From<image::ImageError> for Error {
    fn from(error: image::ImageError) -> Self {
        Error::Image(error)
    }
}
