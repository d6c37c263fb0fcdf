//! Paints the current slide and the navigation bar onto a [`Canvas`].
//!
//! All coordinates are in framebuffer pixels (`RENDER_WIDTH` x
//! `RENDER_HEIGHT`); backends scale the finished frame to their output.

use crate::canvas::{Canvas, Point, Rect, Rgba};
use crate::constants::*;
use crate::icon::Icon;
use crate::layout::{SlideView, dispatch};
use crate::presenter::Presenter;
use crate::state::NavAction;

const FRAME_WIDTH: f32 = RENDER_WIDTH as f32;
const FRAME_HEIGHT: f32 = RENDER_HEIGHT as f32;
const CONTENT_WIDTH: f32 = FRAME_WIDTH - 2.0 * PADDING;
const LINE_HEIGHT: f32 = 1.25;
const COLUMN_GAP: f32 = 64.0;
const PORTRAIT_MAX: f32 = 480.0;

/// Paints a whole frame: background, current slide, navigation bar.
/// `pointer` drives hover feedback and may be `None` (e.g. when exporting).
pub fn paint_frame<C: Canvas + ?Sized>(presenter: &Presenter, canvas: &mut C, pointer: Option<Point>) {
    canvas.rect(Rect::new(0.0, 0.0, FRAME_WIDTH, FRAME_HEIGHT), 0.0, WHITE);
    let view = dispatch(presenter.current(), presenter.deck().charts());
    paint_slide(&view, canvas, pointer);
    NavBar::for_presenter(presenter).paint(canvas, pointer);
}

pub fn paint_slide<C: Canvas + ?Sized>(view: &SlideView<'_>, canvas: &mut C, pointer: Option<Point>) {
    match view {
        SlideView::TitleCard { title, subtitle, icon } => {
            let title_lines = wrap_text(canvas, title, TITLE_SIZE, CONTENT_WIDTH);
            let subtitle_lines = wrap_text(canvas, subtitle, SUBTITLE_SIZE, CONTENT_WIDTH);
            let block = block_height(title_lines.len(), TITLE_SIZE)
                + 48.0
                + block_height(subtitle_lines.len(), SUBTITLE_SIZE)
                + HEADING_GAP
                + TITLE_ICON_SIZE;

            let mut y = (FRAME_HEIGHT - block) * 0.5;
            y = centered_lines(canvas, &title_lines, y, TITLE_SIZE, INDIGO_600) + 48.0;
            y = centered_lines(canvas, &subtitle_lines, y, SUBTITLE_SIZE, GRAY_600) + HEADING_GAP;
            canvas.icon(*icon, Point::new(FRAME_WIDTH * 0.5, y + TITLE_ICON_SIZE * 0.5), TITLE_ICON_SIZE, INDIGO_500);
        }
        SlideView::BulletList { heading, bullets } => {
            let mut y = paint_heading(canvas, heading);
            let text_x = PADDING + BULLET_RADIUS * 2.0 + 32.0;
            for bullet in bullets.iter() {
                canvas.circle(
                    Point::new(PADDING + BULLET_RADIUS, y + BODY_SIZE * 0.5),
                    BULLET_RADIUS,
                    INDIGO_500,
                );
                let lines = wrap_text(canvas, bullet, BODY_SIZE, FRAME_WIDTH - PADDING - text_x);
                y = left_lines(canvas, &lines, text_x, y, BODY_SIZE, GRAY_800) + LIST_GAP;
            }
        }
        SlideView::Chart { heading, chart } => {
            let top = paint_heading(canvas, heading);
            canvas.chart(chart, Rect::new(PADDING, top, CONTENT_WIDTH, CHART_HEIGHT), pointer);
        }
        SlideView::Interview { heading, role, quote, questions } => {
            let top = paint_heading(canvas, heading);
            let left_width = (CONTENT_WIDTH - COLUMN_GAP) / 3.0;
            let right_x = PADDING + left_width + COLUMN_GAP;
            let right_width = FRAME_WIDTH - PADDING - right_x;

            // Left column: portrait placeholder and role
            let side = left_width.min(PORTRAIT_MAX);
            let portrait = Rect::new(PADDING + (left_width - side) * 0.5, top, side, side);
            canvas.rect(portrait, 0.1, GRAY_200);
            let hint = "300 x 300";
            let w = canvas.text_width(hint, SMALL_SIZE);
            let c = portrait.center();
            canvas.text(hint, Point::new(c.x - w * 0.5, c.y - SMALL_SIZE * 0.5), SMALL_SIZE, GRAY_600);

            let role_lines = wrap_text(canvas, role, LABEL_SIZE, left_width);
            let mut y = portrait.bottom() + 32.0;
            for line in &role_lines {
                let w = canvas.text_width(line, LABEL_SIZE);
                canvas.text(line, Point::new(PADDING + (left_width - w) * 0.5, y), LABEL_SIZE, GRAY_800);
                y += LABEL_SIZE * LINE_HEIGHT;
            }

            // Right column: quote then questions
            let quoted = format!("\"{}\"", quote);
            let quote_lines = wrap_text(canvas, &quoted, BODY_SIZE, right_width);
            let mut y = left_lines(canvas, &quote_lines, right_x, top, BODY_SIZE, GRAY_600) + LIST_GAP;

            let text_x = right_x + MARKER_ICON_SIZE + 32.0;
            for (icon, question) in questions {
                canvas.icon(
                    *icon,
                    Point::new(right_x + MARKER_ICON_SIZE * 0.5, y + MARKER_ICON_SIZE * 0.5),
                    MARKER_ICON_SIZE,
                    INDIGO_500,
                );
                let lines = wrap_text(canvas, question, LABEL_SIZE, FRAME_WIDTH - PADDING - text_x);
                let bottom = left_lines(canvas, &lines, text_x, y + 8.0, LABEL_SIZE, GRAY_800);
                y = bottom.max(y + MARKER_ICON_SIZE) + 32.0;
            }
        }
    }
}

/// Maps a pointer position in a `window_width` x `window_height` window onto
/// the framebuffer the window displays stretched.
pub fn window_to_frame(pointer: Point, window_width: f32, window_height: f32) -> Point {
    if window_width <= 0.0 || window_height <= 0.0 {
        return pointer;
    }
    Point::new(
        pointer.x * FRAME_WIDTH / window_width,
        pointer.y * FRAME_HEIGHT / window_height,
    )
}

/// Splits `text` into lines no wider than `max_width`, breaking between
/// words. A single word wider than `max_width` gets a line of its own.
pub fn wrap_text<C: Canvas + ?Sized>(canvas: &C, text: &str, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", line, word);
        if canvas.text_width(&candidate, size) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn block_height(lines: usize, size: f32) -> f32 {
    lines as f32 * size * LINE_HEIGHT
}

fn paint_heading<C: Canvas + ?Sized>(canvas: &mut C, heading: &str) -> f32 {
    let lines = wrap_text(canvas, heading, HEADING_SIZE, CONTENT_WIDTH);
    left_lines(canvas, &lines, PADDING, PADDING, HEADING_SIZE, INDIGO_600) + HEADING_GAP
}

// Both helpers return the y just below the last line.
fn left_lines<C: Canvas + ?Sized>(
    canvas: &mut C,
    lines: &[String],
    x: f32,
    mut y: f32,
    size: f32,
    color: Rgba,
) -> f32 {
    for line in lines {
        canvas.text(line, Point::new(x, y), size, color);
        y += size * LINE_HEIGHT;
    }
    y
}

fn centered_lines<C: Canvas + ?Sized>(
    canvas: &mut C,
    lines: &[String],
    mut y: f32,
    size: f32,
    color: Rgba,
) -> f32 {
    for line in lines {
        let w = canvas.text_width(line, size);
        canvas.text(line, Point::new((FRAME_WIDTH - w) * 0.5, y), size, color);
        y += size * LINE_HEIGHT;
    }
    y
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavButton {
    pub rect: Rect,
    pub icon: Icon,
    pub action: NavAction,
    pub enabled: bool,
}

/// Previous button, position indicator and next button, centered along
/// the bottom edge. Disabled buttons never report hits.
#[derive(Debug, Clone, PartialEq)]
pub struct NavBar {
    pub previous: NavButton,
    pub next: NavButton,
    pub indicator: String,
    indicator_center: Point,
}

impl NavBar {
    pub fn for_presenter(presenter: &Presenter) -> Self {
        let total = NAV_BUTTON_SIZE * 2.0 + NAV_GAP * 2.0 + NAV_INDICATOR_WIDTH;
        let x = (FRAME_WIDTH - total) * 0.5;
        let y = FRAME_HEIGHT - NAV_BOTTOM_MARGIN - NAV_BUTTON_SIZE;

        Self {
            previous: NavButton {
                rect: Rect::new(x, y, NAV_BUTTON_SIZE, NAV_BUTTON_SIZE),
                icon: Icon::ChevronLeft,
                action: NavAction::Previous,
                enabled: presenter.can_go_previous(),
            },
            next: NavButton {
                rect: Rect::new(x + total - NAV_BUTTON_SIZE, y, NAV_BUTTON_SIZE, NAV_BUTTON_SIZE),
                icon: Icon::ChevronRight,
                action: NavAction::Next,
                enabled: presenter.can_go_next(),
            },
            indicator: presenter.indicator(),
            indicator_center: Point::new(FRAME_WIDTH * 0.5, y + NAV_BUTTON_SIZE * 0.5),
        }
    }

    pub fn hit(&self, pointer: Point) -> Option<NavAction> {
        [&self.previous, &self.next]
            .into_iter()
            .find(|b| b.enabled && b.rect.contains(pointer))
            .map(|b| b.action)
    }

    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C, pointer: Option<Point>) {
        for button in [&self.previous, &self.next] {
            let hovered = button.enabled && pointer.is_some_and(|p| button.rect.contains(p));
            if hovered {
                canvas.rect(button.rect, 0.2, GRAY_100);
            }
            let color = if button.enabled { GRAY_800 } else { GRAY_800.with_alpha(DISABLED_ALPHA) };
            canvas.icon(button.icon, button.rect.center(), NAV_ICON_SIZE, color);
        }

        let w = canvas.text_width(&self.indicator, SMALL_SIZE);
        canvas.text(
            &self.indicator,
            Point::new(self.indicator_center.x - w * 0.5, self.indicator_center.y - SMALL_SIZE * 0.5),
            SMALL_SIZE,
            GRAY_800,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartView;
    use crate::deck::Deck;
    use crate::slide::ChartKind;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Text(String),
        Rect,
        Circle,
        Line,
        Ring,
        Icon(Icon, Rgba),
        Chart(ChartKind),
    }

    /// Records what gets drawn. Glyphs are half as wide as the font size.
    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
        // When set, icons and charts are recorded as single calls instead of
        // being broken down into primitives.
        capture_collaborators: bool,
    }

    impl Recorder {
        fn capturing() -> Self {
            Self { ops: Vec::new(), capture_collaborators: true }
        }

        fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(t) => Some(t.as_str()),
                    _ => None,
                })
                .collect()
        }

        fn count(&self, wanted: &Op) -> usize {
            self.ops.iter().filter(|op| *op == wanted).count()
        }
    }

    impl Canvas for Recorder {
        fn text(&mut self, text: &str, _at: Point, _size: f32, _color: Rgba) {
            self.ops.push(Op::Text(text.to_string()));
        }

        fn text_width(&self, text: &str, size: f32) -> f32 {
            text.chars().count() as f32 * size * 0.5
        }

        fn rect(&mut self, _rect: Rect, _roundness: f32, _color: Rgba) {
            self.ops.push(Op::Rect);
        }

        fn circle(&mut self, _center: Point, _radius: f32, _color: Rgba) {
            self.ops.push(Op::Circle);
        }

        fn line(&mut self, _from: Point, _to: Point, _thickness: f32, _color: Rgba) {
            self.ops.push(Op::Line);
        }

        fn ring(&mut self, _center: Point, _inner: f32, _outer: f32, _start: f32, _end: f32, _color: Rgba) {
            self.ops.push(Op::Ring);
        }

        fn icon(&mut self, icon: Icon, center: Point, size: f32, color: Rgba) {
            if self.capture_collaborators {
                self.ops.push(Op::Icon(icon, color));
            } else {
                Primitives(self).icon(icon, center, size, color);
            }
        }

        fn chart(&mut self, view: &ChartView, area: Rect, pointer: Option<Point>) {
            if self.capture_collaborators {
                self.ops.push(Op::Chart(view.kind));
            } else {
                crate::chart::paint(self, view, area, pointer);
            }
        }
    }

    // Canvas that only implements primitives, so icons go through the
    // trait's default implementation.
    struct Primitives<'a>(&'a mut Recorder);

    impl Canvas for Primitives<'_> {
        fn text(&mut self, text: &str, at: Point, size: f32, color: Rgba) {
            self.0.text(text, at, size, color);
        }
        fn text_width(&self, text: &str, size: f32) -> f32 {
            self.0.text_width(text, size)
        }
        fn rect(&mut self, rect: Rect, roundness: f32, color: Rgba) {
            self.0.rect(rect, roundness, color);
        }
        fn circle(&mut self, center: Point, radius: f32, color: Rgba) {
            self.0.circle(center, radius, color);
        }
        fn line(&mut self, from: Point, to: Point, thickness: f32, color: Rgba) {
            self.0.line(from, to, thickness, color);
        }
        fn ring(&mut self, center: Point, inner: f32, outer: f32, start: f32, end: f32, color: Rgba) {
            self.0.ring(center, inner, outer, start, end, color);
        }
    }

    fn presenter_at(position: usize) -> Presenter {
        let mut p = Presenter::new(Deck::speaker_market().unwrap());
        for _ in 0..position {
            p.next();
        }
        p
    }

    #[test]
    fn title_frame_shows_title_subtitle_icon_and_indicator() {
        let mut canvas = Recorder::capturing();
        paint_frame(&presenter_at(0), &mut canvas, None);

        let texts = canvas.texts();
        assert!(texts.contains(&"Understanding Consumer Preferences"));
        assert!(texts.contains(&"Premium Bluetooth & Wired Speakers Market Analysis"));
        assert_eq!(texts.last(), Some(&"1 / 7"));
        assert_eq!(canvas.count(&Op::Icon(Icon::Volume, INDIGO_500)), 1);
    }

    #[test]
    fn bullet_frame_paints_every_bullet_once_in_order() {
        let mut canvas = Recorder::capturing();
        paint_frame(&presenter_at(1), &mut canvas, None);

        let texts = canvas.texts();
        assert_eq!(
            texts,
            [
                "Market Overview",
                "Global market size: $28.6B in 2024",
                "Premium segment growth: 12.4% YoY",
                "Bluetooth dominance: 72% market share",
                "Key drivers: Sound quality and portability",
                "2 / 7",
            ]
        );
        assert_eq!(canvas.count(&Op::Circle), 4);
    }

    #[test]
    fn chart_frames_hand_off_to_the_chart_collaborator() {
        let mut pie = Recorder::capturing();
        paint_frame(&presenter_at(2), &mut pie, None);
        assert_eq!(pie.count(&Op::Chart(ChartKind::Pie)), 1);

        let mut bar = Recorder::capturing();
        paint_frame(&presenter_at(3), &mut bar, None);
        assert_eq!(bar.count(&Op::Chart(ChartKind::Bar)), 1);
    }

    #[test]
    fn pie_chart_draws_one_ring_per_category_and_a_legend() {
        let mut canvas = Recorder::default();
        paint_frame(&presenter_at(2), &mut canvas, None);
        assert_eq!(canvas.count(&Op::Ring), 4);
        let texts = canvas.texts();
        for entry in ["Sound Quality: 85%", "Battery Life: 75%", "Build Quality: 90%", "Price Point: 70%"] {
            assert!(texts.contains(&entry), "missing legend entry {entry}");
        }
    }

    #[test]
    fn bar_chart_tooltip_follows_the_pointer() {
        let mut idle = Recorder::default();
        paint_frame(&presenter_at(3), &mut idle, None);
        assert!(!idle.texts().iter().any(|t| t.ends_with("users")));

        // Second of four bands in the plot area
        let area = Rect::new(PADDING, PADDING + HEADING_SIZE * LINE_HEIGHT + HEADING_GAP, CONTENT_WIDTH, CHART_HEIGHT);
        let plot = crate::chart::bar_plot_area(area);
        let pointer = Point::new(plot.x + plot.width * 0.375, plot.center().y);

        let mut hovering = Recorder::default();
        paint_frame(&presenter_at(3), &mut hovering, Some(pointer));
        assert!(hovering.texts().contains(&"$75-100: 45 users"));
    }

    #[test]
    fn interview_frame_pairs_questions_with_markers() {
        let mut canvas = Recorder::capturing();
        paint_frame(&presenter_at(4), &mut canvas, None);

        assert_eq!(canvas.count(&Op::Icon(Icon::MessageCircle, INDIGO_500)), 3);
        let texts = canvas.texts();
        assert!(texts.contains(&"Audio Technology Expert"));
        assert!(texts.contains(&"How does it compare to other speakers in this range?"));
        let quote = texts.iter().find(|t| t.starts_with('"')).unwrap();
        assert!(quote.starts_with("\"The $100 price point"));
    }

    #[test]
    fn default_icon_rendering_uses_strokes() {
        let mut canvas = Recorder::default();
        canvas.icon(Icon::ChevronLeft, Point::new(50.0, 50.0), 48.0, GRAY_800);
        // Two segments plus three round joins
        assert_eq!(canvas.count(&Op::Line), 2);
        assert_eq!(canvas.count(&Op::Circle), 3);

        let mut canvas = Recorder::default();
        canvas.icon(Icon::Volume, Point::new(50.0, 50.0), 48.0, GRAY_800);
        assert_eq!(canvas.count(&Op::Ring), 2);
    }

    #[test]
    fn nav_buttons_disable_at_the_ends() {
        let first = NavBar::for_presenter(&presenter_at(0));
        assert!(!first.previous.enabled);
        assert!(first.next.enabled);
        assert_eq!(first.hit(first.previous.rect.center()), None);
        assert_eq!(first.hit(first.next.rect.center()), Some(NavAction::Next));

        let last = NavBar::for_presenter(&presenter_at(6));
        assert!(last.previous.enabled);
        assert!(!last.next.enabled);
        assert_eq!(last.hit(last.previous.rect.center()), Some(NavAction::Previous));
        assert_eq!(last.hit(last.next.rect.center()), None);
        assert_eq!(last.indicator, "7 / 7");

        assert_eq!(first.hit(Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn nav_bar_is_centered_and_symmetric() {
        let bar = NavBar::for_presenter(&presenter_at(3));
        let left_margin = bar.previous.rect.x;
        let right_margin = FRAME_WIDTH - bar.next.rect.right();
        assert!((left_margin - right_margin).abs() < 1e-3);
        assert!(bar.next.rect.x > bar.previous.rect.right());
    }

    #[test]
    fn disabled_buttons_are_dimmed() {
        let mut canvas = Recorder::capturing();
        NavBar::for_presenter(&presenter_at(0)).paint(&mut canvas, None);
        assert_eq!(canvas.count(&Op::Icon(Icon::ChevronLeft, GRAY_800.with_alpha(DISABLED_ALPHA))), 1);
        assert_eq!(canvas.count(&Op::Icon(Icon::ChevronRight, GRAY_800)), 1);
    }

    #[test]
    fn hovering_an_enabled_button_highlights_it() {
        let bar = NavBar::for_presenter(&presenter_at(0));

        let mut canvas = Recorder::capturing();
        bar.paint(&mut canvas, Some(bar.next.rect.center()));
        assert_eq!(canvas.count(&Op::Rect), 1);

        let mut canvas = Recorder::capturing();
        bar.paint(&mut canvas, Some(bar.previous.rect.center()));
        assert_eq!(canvas.count(&Op::Rect), 0);
    }

    #[test]
    fn pointer_scales_from_window_to_frame() {
        let p = window_to_frame(Point::new(480.0, 270.0), 960.0, 540.0);
        assert_eq!(p, Point::new(960.0, 540.0));
        let p = window_to_frame(Point::new(100.0, 100.0), 1920.0, 1080.0);
        assert_eq!(p, Point::new(100.0, 100.0));
        // Minimized window reports a zero-sized screen
        assert_eq!(window_to_frame(Point::new(5.0, 5.0), 0.0, 0.0), Point::new(5.0, 5.0));
    }

    #[test]
    fn wrap_text_breaks_between_words() {
        let canvas = Recorder::default();
        // 10px per glyph at size 20
        let lines = wrap_text(&canvas, "alpha beta gamma delta", 20.0, 105.0);
        assert_eq!(lines, ["alpha beta", "gamma", "delta"]);

        let lines = wrap_text(&canvas, "supercalifragilistic ok", 20.0, 50.0);
        assert_eq!(lines, ["supercalifragilistic", "ok"]);

        assert!(wrap_text(&canvas, "   ", 20.0, 100.0).is_empty());
    }
}
