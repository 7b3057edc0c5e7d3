use egui::{Color32, Painter, Rect};

use crate::canvas::Canvas;

/// Redraws the whole scene from the canvas model every frame.
///
/// There is no incremental contract: the model is the single source of
/// truth and the renderer just replays it, later strokes on top.
#[derive(Debug)]
pub struct Renderer {
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, painter: &Painter, rect: Rect, canvas: &Canvas) {
        painter.rect_filled(rect, 0.0, self.background);

        for stroke in canvas.strokes() {
            // A lone point has no segment to draw; strokes emptied by the
            // eraser end up here too.
            if stroke.points().len() < 2 {
                continue;
            }
            painter.add(egui::Shape::line(
                stroke.points().to_vec(),
                egui::Stroke::new(stroke.width(), stroke.color().to_color32()),
            ));
        }
    }
}
