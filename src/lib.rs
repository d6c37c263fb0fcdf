//! Presents the premium speaker market analysis deck.
//!
//! The deck, the navigation state and the layout dispatch are plain Rust
//! and render through the [`Canvas`] trait; the raylib window and the
//! ffmpeg export live behind the `window` feature.

pub mod canvas;
pub mod chart;
pub mod constants;
pub mod deck;
pub mod error;
pub mod ffmpeg;
pub mod icon;
pub mod layout;
pub mod presenter;
pub mod render;
pub mod slide;
pub mod state;
#[cfg(feature = "window")]
pub mod window;

pub use canvas::{Canvas, Point, Rect, Rgba};
pub use chart::{ChartData, ChartView, Dataset};
pub use deck::Deck;
pub use error::{DeckError, Error, Result};
pub use icon::Icon;
pub use layout::{SlideView, dispatch};
pub use presenter::Presenter;
pub use render::{NavBar, paint_frame};
pub use slide::{ChartKind, InterviewContent, Layout, LayoutKind, Slide, SlideRecord};
pub use state::NavAction;
