/// Convenience result type used across the collage engine.
pub type CollageResult<T> = Result<T, CollageError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Per-poster failures ([`CollageError::Decode`]) are recoverable and end up as placeholder
/// tiles. [`CollageError::Validation`] and [`CollageError::Encode`] abort a run and reach the
/// caller wrapped in [`CollageError::Frame`].
#[derive(thiserror::Error, Debug)]
pub enum CollageError {
    /// Invalid layout, configuration or input data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A poster image could not be read, decoded or resized.
    #[error("decode error: {0}")]
    Decode(String),

    /// A movie detail lookup failed.
    #[error("lookup error: {0}")]
    Lookup(String),

    /// A rendered frame could not be persisted.
    #[error("encode error: {0}")]
    Encode(String),

    /// Fatal failure while generating a specific frame (1-based).
    #[error("error generating frame {frame}: {source}")]
    Frame {
        /// 1-based frame number.
        frame: usize,
        /// Underlying failure.
        #[source]
        source: Box<CollageError>,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CollageError {
    /// Build a [`CollageError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CollageError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`CollageError::Lookup`] value.
    pub fn lookup(msg: impl Into<String>) -> Self {
        Self::Lookup(msg.into())
    }

    /// Build a [`CollageError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Wrap `self` as the failure of 1-based frame `frame`.
    pub fn in_frame(self, frame: usize) -> Self {
        Self::Frame {
            frame,
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
