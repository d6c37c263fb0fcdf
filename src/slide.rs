//! Slide records and their validated, typed form.

use std::fmt;

use log::warn;

use crate::error::DeckError;

/// Which rendering template a slide uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    Title,
    Bullets,
    Chart,
    Interview,
}

impl LayoutKind {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "title" => Some(Self::Title),
            "bullets" => Some(Self::Bullets),
            "chart" => Some(Self::Chart),
            "interview" => Some(Self::Interview),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Bullets => "bullets",
            Self::Chart => "chart",
            Self::Interview => "interview",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Pie,
    Bar,
}

impl ChartKind {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "pie" => Some(Self::Pie),
            "bar" => Some(Self::Bar),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewContent {
    pub role: String,
    pub quote: String,
    pub questions: Vec<String>,
}

impl InterviewContent {
    pub fn new<I, S>(role: impl Into<String>, quote: impl Into<String>, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            role: role.into(),
            quote: quote.into(),
            questions: questions.into_iter().map(Into::into).collect(),
        }
    }
}

/// Layout-specific payload of a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    Title { subtitle: String },
    Bullets { bullets: Vec<String> },
    Chart { kind: ChartKind },
    Interview { content: InterviewContent },
}

impl Layout {
    pub fn kind(&self) -> LayoutKind {
        match self {
            Layout::Title { .. } => LayoutKind::Title,
            Layout::Bullets { .. } => LayoutKind::Bullets,
            Layout::Chart { .. } => LayoutKind::Chart,
            Layout::Interview { .. } => LayoutKind::Interview,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub title: String,
    pub layout: Layout,
}

/// A slide as authored: a layout tag plus whichever fields were filled in.
///
/// Nothing is checked until [`SlideRecord::validate`] turns it into a
/// [`Slide`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideRecord {
    pub title: Option<String>,
    pub layout: String,
    pub subtitle: Option<String>,
    pub bullets: Option<Vec<String>>,
    pub chart_type: Option<String>,
    pub content: Option<InterviewContent>,
}

impl SlideRecord {
    pub fn new(layout: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            layout: layout.into(),
            ..Self::default()
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_bullets<I, S>(mut self, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets = Some(bullets.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_chart_type(mut self, chart_type: impl Into<String>) -> Self {
        self.chart_type = Some(chart_type.into());
        self
    }

    pub fn with_content(mut self, content: InterviewContent) -> Self {
        self.content = Some(content);
        self
    }

    /// Checks the record against its layout tag. `index` only feeds error
    /// messages.
    pub fn validate(self, index: usize) -> Result<Slide, DeckError> {
        let kind = LayoutKind::parse(&self.layout).ok_or_else(|| DeckError::UnknownLayout {
            index,
            layout: self.layout.clone(),
        })?;

        let missing = |field: &'static str| DeckError::MissingField {
            index,
            layout: kind.to_string(),
            field,
        };

        let ignored: Vec<&str> = [
            ("subtitle", self.subtitle.is_some() && kind != LayoutKind::Title),
            ("bullets", self.bullets.is_some() && kind != LayoutKind::Bullets),
            ("chartType", self.chart_type.is_some() && kind != LayoutKind::Chart),
            ("content", self.content.is_some() && kind != LayoutKind::Interview),
        ]
        .into_iter()
        .filter_map(|(name, unused)| unused.then_some(name))
        .collect();
        if !ignored.is_empty() {
            warn!("Slide {} ({} layout) ignores fields: {}", index, kind, ignored.join(", "));
        }

        let title = self.title.ok_or_else(|| missing("title"))?;

        let layout = match kind {
            LayoutKind::Title => Layout::Title {
                subtitle: self.subtitle.ok_or_else(|| missing("subtitle"))?,
            },
            LayoutKind::Bullets => Layout::Bullets {
                bullets: self.bullets.ok_or_else(|| missing("bullets"))?,
            },
            LayoutKind::Chart => {
                let tag = self.chart_type.ok_or_else(|| missing("chartType"))?;
                let kind = ChartKind::parse(&tag)
                    .ok_or(DeckError::UnknownChartType { index, chart_type: tag })?;
                Layout::Chart { kind }
            }
            LayoutKind::Interview => Layout::Interview {
                content: self.content.ok_or_else(|| missing("content"))?,
            },
        };

        Ok(Slide { title, layout })
    }
}
