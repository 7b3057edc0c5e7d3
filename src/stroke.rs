use egui::{Color32, Pos2};

/// Unmultiplied RGBA color with each channel in `[0, 1]`.
///
/// The model keeps colors as plain floats; conversion to egui's
/// premultiplied `Color32` happens only at render time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Opaque black, the default drawing color.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_color32(self) -> Color32 {
        Color32::from_rgba_unmultiplied(
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        )
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_array([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// One persisted polyline: the points of a single drawing gesture plus the
/// color and width that were current when the gesture began.
#[derive(Debug, Clone)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color,
    width: f32,
}

impl Stroke {
    pub fn new(start: Pos2, color: Color, width: f32) -> Self {
        Self {
            points: vec![start],
            color,
            width,
        }
    }

    /// Points in draw order; a renderer connects consecutive pairs.
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    /// Drops every point within `radius` of `center` on both axes
    /// (Chebyshev distance), keeping the survivors in order. The stroke
    /// itself stays alive even when this removes its last point.
    pub fn erase_within(&mut self, center: Pos2, radius: f32) {
        self.points
            .retain(|p| (p.x - center.x).abs() > radius || (p.y - center.y).abs() > radius);
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
