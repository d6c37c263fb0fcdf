//! The fixed slide deck.

use log::debug;

use crate::chart::ChartData;
use crate::error::DeckError;
use crate::slide::{InterviewContent, Slide, SlideRecord};

/// A validated, non-empty, immutable sequence of slides together with the
/// datasets its chart slides draw from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<Slide>,
    charts: ChartData,
}

impl Deck {
    /// Validates every record up front; the first malformed one aborts
    /// construction.
    pub fn from_records(records: Vec<SlideRecord>, charts: ChartData) -> Result<Self, DeckError> {
        if records.is_empty() {
            return Err(DeckError::Empty);
        }
        let slides = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.validate(index))
            .collect::<Result<Vec<_>, _>>()?;

        for (index, slide) in slides.iter().enumerate() {
            debug!("Slide {}: {} \"{}\"", index + 1, slide.layout.kind(), slide.title);
        }

        Ok(Self { slides, charts })
    }

    /// The premium speaker market analysis deck.
    pub fn speaker_market() -> Result<Self, DeckError> {
        Self::from_records(speaker_market_records(), ChartData::speaker_market())
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: construction rejects empty decks.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn charts(&self) -> &ChartData {
        &self.charts
    }
}

pub fn speaker_market_records() -> Vec<SlideRecord> {
    vec![
        SlideRecord::new("title", "Understanding Consumer Preferences")
            .with_subtitle("Premium Bluetooth & Wired Speakers Market Analysis"),
        SlideRecord::new("bullets", "Market Overview").with_bullets([
            "Global market size: $28.6B in 2024",
            "Premium segment growth: 12.4% YoY",
            "Bluetooth dominance: 72% market share",
            "Key drivers: Sound quality and portability",
        ]),
        SlideRecord::new("chart", "Consumer Preferences").with_chart_type("pie"),
        SlideRecord::new("chart", "Price Sensitivity Analysis").with_chart_type("bar"),
        SlideRecord::new("interview", "Interview with Gaurav Siddharth").with_content(InterviewContent::new(
            "Audio Technology Expert",
            "The $100 price point offers the perfect balance of features and quality",
            [
                "What features attracted you to this speaker?",
                "How does it compare to other speakers in this range?",
                "Would you recommend it for audiophiles?",
            ],
        )),
        SlideRecord::new("bullets", "Key Recommendations").with_bullets([
            "Focus on premium features in $75-100 range",
            "Emphasize sound quality and build durability",
            "Invest in Bluetooth 5.0+ technology",
            "Target audiophile community with specialized models",
        ]),
        SlideRecord::new("title", "Thank You").with_subtitle("Questions & Discussion"),
    ]
}
