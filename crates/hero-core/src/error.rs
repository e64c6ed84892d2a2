use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum HeroError {
    #[error("catalog has no item at index {index} (len {len})")]
    UnknownItem { index: usize, len: usize },
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}
