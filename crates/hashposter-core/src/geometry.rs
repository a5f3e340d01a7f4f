use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// A 2D point in canvas pixels, origin top-left, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point at `radius` from `self` along `angle` (radians).
    pub fn polar(&self, radius: f64, angle: f64) -> Self {
        Self {
            x: self.x + radius * angle.cos(),
            y: self.y + radius * angle.sin(),
        }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A filled rectangle given by its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub fill: Rgb,
    pub opacity: f64,
}

impl Rect {
    /// A rectangle of the given size centered on `center`.
    pub fn centered(center: Point, width: f64, height: f64, fill: Rgb, opacity: f64) -> Self {
        Self {
            origin: Point::new(center.x - width / 2.0, center.y - height / 2.0),
            width,
            height,
            fill,
            opacity,
        }
    }
}

/// A filled circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub fill: Rgb,
    pub opacity: f64,
}

/// A stroked line segment with round caps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub stroke: Rgb,
    pub stroke_width: f64,
}

/// A drawable element of a poster scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    /// Full-canvas background fill.
    Background(Rgb),
    Rect(Rect),
    Circle(Circle),
    Line(Line),
    /// Opaque circle marking the canvas center.
    Anchor(Circle),
}

impl Element {
    /// Fill opacity for translucent grid shapes.
    pub fn opacity(&self) -> Option<f64> {
        match self {
            Element::Rect(r) => Some(r.opacity),
            Element::Circle(c) => Some(c.opacity),
            _ => None,
        }
    }

    pub fn is_grid_shape(&self) -> bool {
        matches!(self, Element::Rect(_) | Element::Circle(_))
    }
}
