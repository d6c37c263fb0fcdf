//! Drawing capability shared by every rendering backend.
//!
//! The slide painter only ever talks to a [`Canvas`]. The raylib window
//! implements it on top of a draw handle; tests implement it by recording
//! calls. Icons and charts have default implementations built from the
//! primitive operations, so a backend only has to provide the primitives.

use crate::chart::{self, ChartView};
use crate::constants::*;
use crate::icon::{Icon, Stroke};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
            a: 0xFF,
        }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// CSS-style `#RRGGBB` notation.
    pub fn to_css(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

pub trait Canvas {
    /// Draws `text` with its top-left corner at `at`.
    fn text(&mut self, text: &str, at: Point, size: f32, color: Rgba);

    /// Width in pixels `text` would take at `size`.
    fn text_width(&self, text: &str, size: f32) -> f32;

    /// Filled rectangle; `roundness` follows raylib (0.0 square, 1.0 pill).
    fn rect(&mut self, rect: Rect, roundness: f32, color: Rgba);

    fn circle(&mut self, center: Point, radius: f32, color: Rgba);

    fn line(&mut self, from: Point, to: Point, thickness: f32, color: Rgba);

    /// Ring segment between `inner` and `outer` radius. Angles are in
    /// degrees, clockwise on screen, 0 pointing right.
    fn ring(&mut self, center: Point, inner: f32, outer: f32, start: f32, end: f32, color: Rgba);

    /// Renders a named icon scaled into a `size`-wide square centered on `center`.
    fn icon(&mut self, icon: Icon, center: Point, size: f32, color: Rgba) {
        let scale = size / ICON_GRID;
        let origin = Point::new(center.x - size * 0.5, center.y - size * 0.5);
        let to_screen = |p: Point| Point::new(origin.x + p.x * scale, origin.y + p.y * scale);
        let thickness = (ICON_STROKE * scale).max(1.0);

        for stroke in icon.strokes() {
            match stroke {
                Stroke::Polyline(points) => {
                    for pair in points.windows(2) {
                        self.line(to_screen(pair[0]), to_screen(pair[1]), thickness, color);
                    }
                    // Round joins
                    for p in &points {
                        self.circle(to_screen(*p), thickness * 0.5, color);
                    }
                }
                Stroke::Arc { center: c, radius, start, end } => {
                    let r = radius * scale;
                    let half = thickness * 0.5;
                    self.ring(to_screen(c), r - half, r + half, start, end, color);
                }
            }
        }
    }

    /// Renders a chart into `area`.
    fn chart(&mut self, view: &ChartView, area: Rect, pointer: Option<Point>) {
        chart::paint(self, view, area, pointer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_decode_channels() {
        let c = Rgba::hex(0x4C51BF);
        assert_eq!((c.r, c.g, c.b, c.a), (0x4C, 0x51, 0xBF, 0xFF));
        assert_eq!(c.to_css(), "#4C51BF");
        assert_eq!(c.with_alpha(0x80).a, 0x80);
    }

    #[test]
    fn rect_containment_is_half_open() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(29.9, 29.9)));
        assert!(!r.contains(Point::new(30.0, 15.0)));
        assert!(!r.contains(Point::new(15.0, 9.9)));
        assert_eq!(r.center(), Point::new(20.0, 20.0));
    }
}
