use egui::Pos2;

use crate::canvas::Canvas;
use crate::stroke::Color;

/// The canvas model's entire input boundary.
///
/// The UI layer translates widget interactions into these events and feeds
/// them to [`Canvas::apply`]. Pointer positions are in the same coordinate
/// space the renderer draws in, and are expected to be pre-filtered: only
/// events that landed on the drawing area, never on chrome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    /// Pointer button pressed on the drawing area.
    PointerDown { pos: Pos2 },
    /// Pointer moved while pressed.
    PointerMove { pos: Pos2 },
    /// Pointer button released; position no longer matters.
    PointerUp,
    /// Change the color of strokes created from now on.
    SetColor(Color),
    /// Change the width of strokes created from now on.
    SetWidth(f32),
    SetEraserMode(bool),
    ToggleEraser,
    ClearAll,
    ResetToDefaults,
}

impl Canvas {
    /// Routes an event to the matching model operation.
    pub fn apply(&mut self, event: CanvasEvent) {
        match event {
            CanvasEvent::PointerDown { pos } => self.begin_gesture(pos),
            CanvasEvent::PointerMove { pos } => self.extend_gesture(pos),
            CanvasEvent::PointerUp => self.end_gesture(),
            CanvasEvent::SetColor(color) => self.set_color(color),
            CanvasEvent::SetWidth(width) => self.set_width(width),
            CanvasEvent::SetEraserMode(on) => self.set_eraser_mode(on),
            CanvasEvent::ToggleEraser => self.toggle_eraser_mode(),
            CanvasEvent::ClearAll => self.clear_all(),
            CanvasEvent::ResetToDefaults => self.reset_to_defaults(),
        }
    }
}
