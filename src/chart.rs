//! Chart datasets, the backend-neutral chart description, and the
//! geometry used to paint it.

use crate::canvas::{Canvas, Point, Rect, Rgba};
use crate::constants::*;
use crate::slide::ChartKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPoint {
    pub label: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub points: Vec<DataPoint>,
}

impl Dataset {
    pub fn new<S: Into<String>>(points: impl IntoIterator<Item = (S, u32)>) -> Self {
        Self {
            points: points
                .into_iter()
                .map(|(label, value)| DataPoint { label: label.into(), value })
                .collect(),
        }
    }

    pub fn max_value(&self) -> u32 {
        self.points.iter().map(|p| p.value).max().unwrap_or(0)
    }
}

/// The fixed datasets chart slides draw from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartData {
    /// Share of respondents rating each attribute as important, in percent.
    pub preferences: Dataset,
    /// Number of users per price bucket.
    pub price_sensitivity: Dataset,
}

impl ChartData {
    pub fn speaker_market() -> Self {
        Self {
            preferences: Dataset::new([
                ("Sound Quality", 85),
                ("Battery Life", 75),
                ("Build Quality", 90),
                ("Price Point", 70),
            ]),
            price_sensitivity: Dataset::new([
                ("$50-75", 25),
                ("$75-100", 45),
                ("$100-150", 20),
                ("$150+", 10),
            ]),
        }
    }

    pub fn for_kind(&self, kind: ChartKind) -> &Dataset {
        match kind {
            ChartKind::Pie => &self.preferences,
            ChartKind::Bar => &self.price_sensitivity,
        }
    }
}

/// Palette color for the segment at `index`, cycling through the palette.
pub fn palette_color(index: usize) -> Rgba {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub label: String,
    pub value: u32,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub text: String,
    pub color: Rgba,
}

/// Everything a canvas needs to draw a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub kind: ChartKind,
    pub segments: Vec<Segment>,
    pub legend: Vec<LegendEntry>,
}

impl ChartView {
    pub fn new(kind: ChartKind, dataset: &Dataset) -> Self {
        let segments: Vec<Segment> = dataset
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| Segment {
                label: p.label.clone(),
                value: p.value,
                color: match kind {
                    ChartKind::Pie => palette_color(i),
                    ChartKind::Bar => BAR_COLOR,
                },
            })
            .collect();

        let legend = match kind {
            ChartKind::Pie => segments
                .iter()
                .map(|s| LegendEntry { text: format!("{}: {}%", s.label, s.value), color: s.color })
                .collect(),
            ChartKind::Bar => Vec::new(),
        };

        Self { kind, segments, legend }
    }
}

/// Start/end angles (degrees) of each pie segment, proportional to its
/// value, with `padding` degrees left empty after every segment.
pub fn pie_sectors(values: &[u32], padding: f32) -> Vec<(f32, f32)> {
    let total: u32 = values.iter().sum();
    if total == 0 {
        return Vec::new();
    }
    let padding = if values.len() > 1 { padding } else { 0.0 };
    let available = 360.0 - padding * values.len() as f32;

    let mut cursor = 0.0;
    values
        .iter()
        .map(|&v| {
            let start = cursor;
            let end = start + available * v as f32 / total as f32;
            cursor = end + padding;
            (start, end)
        })
        .collect()
}

/// Evenly spaced axis ticks from 0 covering `max`, using 1/2/2.5/5 steps.
pub fn nice_ticks(max: f32, count: usize) -> Vec<f32> {
    if max <= 0.0 || count < 2 {
        return vec![0.0, 1.0];
    }
    let raw = max / (count - 1) as f32;
    let magnitude = 10f32.powi(raw.log10().floor() as i32);
    let normalized = raw / magnitude;
    let factor = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|&f| f >= normalized)
        .unwrap_or(10.0);
    let step = factor * magnitude;
    let steps = (max / step).ceil() as usize;
    (0..=steps).map(|i| i as f32 * step).collect()
}

/// Bar rectangles inside `plot`, scaled so `axis_top` reaches the top.
pub fn bar_rects(values: &[u32], plot: Rect, axis_top: f32) -> Vec<Rect> {
    if values.is_empty() || axis_top <= 0.0 {
        return Vec::new();
    }
    let band = plot.width / values.len() as f32;
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let height = plot.height * (v as f32 / axis_top).min(1.0);
            Rect::new(plot.x + band * i as f32 + band * 0.1, plot.bottom() - height, band * 0.8, height)
        })
        .collect()
}

/// Index of the category band under `pointer`, if it is inside `plot`.
pub fn hovered_band(count: usize, plot: Rect, pointer: Point) -> Option<usize> {
    if count == 0 || !plot.contains(pointer) {
        return None;
    }
    let band = plot.width / count as f32;
    Some((((pointer.x - plot.x) / band) as usize).min(count - 1))
}

const AXIS_LABEL_WIDTH: f32 = 96.0;
const AXIS_LABEL_HEIGHT: f32 = 56.0;

/// Area the bars occupy once room for the axis labels is taken out.
pub fn bar_plot_area(area: Rect) -> Rect {
    Rect::new(
        area.x + AXIS_LABEL_WIDTH,
        area.y + SMALL_SIZE * 0.5,
        area.width - AXIS_LABEL_WIDTH,
        area.height - AXIS_LABEL_HEIGHT - SMALL_SIZE * 0.5,
    )
}

pub(crate) fn paint<C: Canvas + ?Sized>(canvas: &mut C, view: &ChartView, area: Rect, pointer: Option<Point>) {
    match view.kind {
        ChartKind::Pie => paint_pie(canvas, view, area),
        ChartKind::Bar => paint_bars(canvas, view, area, pointer),
    }
}

fn paint_pie<C: Canvas + ?Sized>(canvas: &mut C, view: &ChartView, area: Rect) {
    let center = Point::new(area.center().x, area.y + PIE_OUTER_RADIUS);
    let values: Vec<u32> = view.segments.iter().map(|s| s.value).collect();
    for ((start, end), segment) in pie_sectors(&values, PIE_PADDING_ANGLE).into_iter().zip(&view.segments) {
        canvas.ring(center, PIE_INNER_RADIUS, PIE_OUTER_RADIUS, start, end, segment.color);
    }

    // Legend row, centered under the pie
    const DOT: f32 = 32.0;
    const DOT_GAP: f32 = 16.0;
    const ENTRY_GAP: f32 = 64.0;
    let widths: Vec<f32> = view
        .legend
        .iter()
        .map(|e| DOT + DOT_GAP + canvas.text_width(&e.text, LABEL_SIZE))
        .collect();
    let total = widths.iter().sum::<f32>() + ENTRY_GAP * widths.len().saturating_sub(1) as f32;
    let y = center.y + PIE_OUTER_RADIUS + HEADING_GAP;
    let mut x = area.center().x - total * 0.5;
    for (entry, width) in view.legend.iter().zip(widths) {
        canvas.circle(Point::new(x + DOT * 0.5, y + LABEL_SIZE * 0.5), DOT * 0.5, entry.color);
        canvas.text(&entry.text, Point::new(x + DOT + DOT_GAP, y), LABEL_SIZE, GRAY_800);
        x += width + ENTRY_GAP;
    }
}

fn paint_bars<C: Canvas + ?Sized>(canvas: &mut C, view: &ChartView, area: Rect, pointer: Option<Point>) {
    let plot = bar_plot_area(area);
    let max = view.segments.iter().map(|s| s.value).max().unwrap_or(0);
    let ticks = nice_ticks(max as f32, AXIS_TICKS);
    let top = ticks.last().copied().unwrap_or(1.0);

    // Y axis with tick labels
    canvas.line(Point::new(plot.x, plot.y), Point::new(plot.x, plot.bottom()), 2.0, GRAY_600);
    for tick in &ticks {
        let y = plot.bottom() - plot.height * tick / top;
        let label = format!("{}", tick);
        let w = canvas.text_width(&label, SMALL_SIZE);
        canvas.line(Point::new(plot.x - 12.0, y), Point::new(plot.x, y), 2.0, GRAY_600);
        canvas.text(&label, Point::new(plot.x - 20.0 - w, y - SMALL_SIZE * 0.5), SMALL_SIZE, GRAY_600);
    }

    // X axis with category labels
    canvas.line(Point::new(plot.x, plot.bottom()), Point::new(plot.right(), plot.bottom()), 2.0, GRAY_600);
    let values: Vec<u32> = view.segments.iter().map(|s| s.value).collect();
    let hovered = pointer.and_then(|p| hovered_band(values.len(), plot, p));
    let band = plot.width / values.len().max(1) as f32;
    for (i, (rect, segment)) in bar_rects(&values, plot, top).into_iter().zip(&view.segments).enumerate() {
        if hovered == Some(i) {
            // Cursor highlight over the whole category band
            canvas.rect(Rect::new(plot.x + band * i as f32, plot.y, band, plot.height), 0.0, GRAY_100);
        }
        canvas.rect(rect, 0.0, segment.color);
        let w = canvas.text_width(&segment.label, SMALL_SIZE);
        canvas.text(&segment.label, Point::new(rect.center().x - w * 0.5, plot.bottom() + 16.0), SMALL_SIZE, GRAY_600);
    }

    if let (Some(i), Some(p)) = (hovered, pointer) {
        let segment = &view.segments[i];
        let text = format!("{}: {} users", segment.label, segment.value);
        let w = canvas.text_width(&text, SMALL_SIZE) + 32.0;
        let h = SMALL_SIZE + 32.0;
        // Keep the tooltip inside the plot horizontally
        let x = if p.x + 24.0 + w > plot.right() { p.x - 24.0 - w } else { p.x + 24.0 };
        let tip = Rect::new(x, p.y - h, w, h);
        canvas.rect(Rect::new(tip.x - 2.0, tip.y - 2.0, tip.width + 4.0, tip.height + 4.0), 0.0, GRAY_200);
        canvas.rect(tip, 0.0, WHITE);
        canvas.text(&text, Point::new(tip.x + 16.0, tip.y + 16.0), SMALL_SIZE, GRAY_800);
    }
}
