//! Maps a slide to the view its layout calls for.

use crate::chart::{ChartData, ChartView};
use crate::icon::Icon;
use crate::slide::{Layout, Slide};

/// Backend-independent description of what a slide shows.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideView<'a> {
    TitleCard {
        title: &'a str,
        subtitle: &'a str,
        icon: Icon,
    },
    BulletList {
        heading: &'a str,
        bullets: &'a [String],
    },
    Chart {
        heading: &'a str,
        chart: ChartView,
    },
    Interview {
        heading: &'a str,
        role: &'a str,
        quote: &'a str,
        questions: Vec<(Icon, &'a str)>,
    },
}

impl SlideView<'_> {
    pub fn heading(&self) -> &str {
        match self {
            SlideView::TitleCard { title, .. } => title,
            SlideView::BulletList { heading, .. }
            | SlideView::Chart { heading, .. }
            | SlideView::Interview { heading, .. } => heading,
        }
    }
}

pub fn dispatch<'a>(slide: &'a Slide, charts: &ChartData) -> SlideView<'a> {
    let heading = slide.title.as_str();
    match &slide.layout {
        Layout::Title { subtitle } => SlideView::TitleCard {
            title: heading,
            subtitle,
            icon: Icon::Volume,
        },
        Layout::Bullets { bullets } => SlideView::BulletList { heading, bullets },
        Layout::Chart { kind } => SlideView::Chart {
            heading,
            chart: ChartView::new(*kind, charts.for_kind(*kind)),
        },
        Layout::Interview { content } => SlideView::Interview {
            heading,
            role: &content.role,
            quote: &content.quote,
            questions: content
                .questions
                .iter()
                .map(|q| (Icon::MessageCircle, q.as_str()))
                .collect(),
        },
    }
}
