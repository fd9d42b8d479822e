use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by configuration and simulation setup.
///
/// The per-frame step never fails; everything here happens before the
/// first frame.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration value out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Color string that is not `#rrggbb`.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// Rejection sampling hit the configured attempt cap.
    #[error("could not place ball {ordinal} after {attempts} attempts")]
    PlacementExhausted { ordinal: usize, attempts: u32 },

    /// `initialize` was called on a populated simulation.
    #[error("simulation already initialized with {0} balls")]
    AlreadyInitialized(usize),

    /// Malformed JSON configuration.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
