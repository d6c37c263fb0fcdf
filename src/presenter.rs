//! Presentation controller: owns the deck and the current position.

use log::info;

use crate::deck::Deck;
use crate::slide::Slide;
use crate::state::NavAction;

/// Walks a [`Deck`] one slide at a time.
///
/// The position always stays in `0..deck.len()`. Stepping past either end
/// is a no-op rather than an error, and there is no wraparound.
#[derive(Debug, Clone)]
pub struct Presenter {
    deck: Deck,
    position: usize,
}

impl Presenter {
    pub fn new(deck: Deck) -> Self {
        Self { deck, position: 0 }
    }

    /// Moves forward one slide. Returns false on the last slide.
    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.position += 1;
        info!("Slide {}: {}", self.indicator(), self.current().title);
        true
    }

    /// Moves back one slide. Returns false on the first slide.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.position -= 1;
        info!("Slide {}: {}", self.indicator(), self.current().title);
        true
    }

    pub fn apply(&mut self, action: NavAction) -> bool {
        match action {
            NavAction::Previous => self.previous(),
            NavAction::Next => self.next(),
        }
    }

    pub fn current(&self) -> &Slide {
        &self.deck.slides()[self.position]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn can_go_previous(&self) -> bool {
        self.position > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.position + 1 < self.deck.len()
    }

    /// One-based "current / total" label, e.g. `"3 / 7"`.
    pub fn indicator(&self) -> String {
        format!("{} / {}", self.position + 1, self.deck.len())
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}
