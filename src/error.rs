use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarouselError {
    #[error("Container not found: {}", path.display())]
    ContainerNotFound { path: PathBuf },
    #[error("No slides matching '{selector}' in {}", container.display())]
    NoSlides { container: PathBuf, selector: String },
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to load image {}: {message}", path.display())]
    Image { path: PathBuf, message: String },
}

impl CarouselError {
    /// True when the error comes from a container or selector that resolves to nothing.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::ContainerNotFound { .. } | Self::NoSlides { .. })
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn image(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Image { path: path.into(), message: message.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, CarouselError>;
