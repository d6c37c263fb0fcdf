//! Stroke outlines for the handful of icons the deck uses.
//!
//! Coordinates are on a 24x24 grid, y pointing down, matching the usual
//! stroke icon sets. Arcs use degrees, clockwise, 0 pointing right.

use crate::canvas::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Volume,
    MessageCircle,
    ChevronLeft,
    ChevronRight,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stroke {
    Polyline(Vec<Point>),
    Arc { center: Point, radius: f32, start: f32, end: f32 },
}

fn polyline(points: &[(f32, f32)]) -> Stroke {
    Stroke::Polyline(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Volume => "volume-2",
            Icon::MessageCircle => "message-circle",
            Icon::ChevronLeft => "chevron-left",
            Icon::ChevronRight => "chevron-right",
        }
    }

    pub fn strokes(self) -> Vec<Stroke> {
        let center = Point::new(12.0, 12.0);
        match self {
            Icon::Volume => vec![
                // Speaker cone, closed
                polyline(&[
                    (11.0, 5.0),
                    (6.0, 9.0),
                    (2.0, 9.0),
                    (2.0, 15.0),
                    (6.0, 15.0),
                    (11.0, 19.0),
                    (11.0, 5.0),
                ]),
                Stroke::Arc { center, radius: 5.0, start: -45.0, end: 45.0 },
                Stroke::Arc { center, radius: 10.0, start: -45.0, end: 45.0 },
            ],
            Icon::MessageCircle => vec![
                // Bubble leaves a gap at the lower left for the tail
                Stroke::Arc { center, radius: 9.0, start: -207.1, end: 117.1 },
                polyline(&[(4.0, 16.1), (2.0, 22.0), (7.9, 20.0)]),
            ],
            Icon::ChevronLeft => vec![polyline(&[(15.0, 18.0), (9.0, 12.0), (15.0, 6.0)])],
            Icon::ChevronRight => vec![polyline(&[(9.0, 18.0), (15.0, 12.0), (9.0, 6.0)])],
        }
    }
}
