//! Error types for deck construction and video export.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// A slide record that cannot become a [`Slide`](crate::slide::Slide).
///
/// `index` is the zero-based position of the offending record in the deck.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("Deck has no slides")]
    Empty,

    #[error("Slide {index} ({layout} layout) is missing required field `{field}`")]
    MissingField {
        index: usize,
        layout: String,
        field: &'static str,
    },

    #[error("Slide {index} has unrecognized layout \"{layout}\"")]
    UnknownLayout { index: usize, layout: String },

    #[error("Slide {index} has unrecognized chart type \"{chart_type}\"")]
    UnknownChartType { index: usize, chart_type: String },
}

/// Errors surfaced by the library.
#[derive(Error, Debug)]
pub enum Error {
    /// The built-in deck failed validation.
    #[error("Invalid deck: {0}")]
    Deck(#[from] DeckError),

    /// Failed to talk to a child process or write output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The ffmpeg encoder rejected the stream or exited abnormally.
    #[error("Recorder error: {0}")]
    Recorder(String),
}
