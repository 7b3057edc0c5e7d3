use egui::Pos2;
use log::info;

use crate::stroke::{Color, Stroke};

/// Chebyshev tolerance of the eraser: a point is removed when it is within
/// this many units of the erase position on both axes at once.
pub const ERASE_RADIUS: f32 = 10.0;

/// The stroke canvas model.
///
/// Owns the ordered stroke collection, the stroke currently being drawn (if
/// any), and the tool settings that get snapshotted onto new strokes. It has
/// no idea where the pointer events come from; the UI layer is responsible
/// for only forwarding events that landed on the drawing area.
///
/// Every operation is total: out-of-order gesture events are tolerated as
/// no-ops and out-of-range widths or colors are stored as given (clamping is
/// the UI's job).
#[derive(Debug)]
pub struct Canvas {
    strokes: Vec<Stroke>,
    /// Index into `strokes` of the stroke the current gesture is extending.
    /// `None` outside of a draw gesture. Erasure never removes entries from
    /// `strokes`, so the index stays valid for the whole gesture.
    active: Option<usize>,
    color: Color,
    width: f32,
    eraser_mode: bool,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            strokes: Vec::new(),
            active: None,
            color: Color::BLACK,
            width: 2.0,
            eraser_mode: false,
        }
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer went down on the drawing area.
    ///
    /// In eraser mode this erases around the position and creates nothing.
    /// Otherwise it starts a new stroke there, snapshotting the current
    /// color and width, and makes it the active stroke. A still-active
    /// previous stroke (missed pointer-up) is simply superseded.
    pub fn begin_gesture(&mut self, pos: Pos2) {
        if self.eraser_mode {
            self.erase_at(pos);
            return;
        }
        self.strokes.push(Stroke::new(pos, self.color, self.width));
        self.active = Some(self.strokes.len() - 1);
    }

    /// Pointer moved while down. Erases in eraser mode, otherwise extends
    /// the active stroke. Without an active stroke this does nothing: the
    /// gesture started on chrome or already ended.
    pub fn extend_gesture(&mut self, pos: Pos2) {
        if self.eraser_mode {
            self.erase_at(pos);
        } else if let Some(index) = self.active {
            self.strokes[index].add_point(pos);
        }
    }

    /// Pointer went up. Idempotent.
    pub fn end_gesture(&mut self) {
        self.active = None;
    }

    /// Removes from every stroke the points within [`ERASE_RADIUS`] of
    /// `pos` on both axes. A per-point filter, not a segment split: erasing
    /// through the middle of a line leaves one stroke whose rendering jumps
    /// across the gap. Strokes emptied by this stay in the collection.
    ///
    /// Runs on every pointer event while erasing, so it is a flat in-place
    /// scan with no allocation.
    pub fn erase_at(&mut self, pos: Pos2) {
        for stroke in &mut self.strokes {
            stroke.erase_within(pos, ERASE_RADIUS);
        }
    }

    /// Sets the color snapshotted onto strokes created from now on.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the width snapshotted onto strokes created from now on. The
    /// model accepts any value; the UI slider keeps it within 1..=10.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn set_eraser_mode(&mut self, on: bool) {
        self.eraser_mode = on;
    }

    pub fn toggle_eraser_mode(&mut self) {
        self.eraser_mode = !self.eraser_mode;
    }

    /// Removes every stroke. Tool settings are untouched.
    pub fn clear_all(&mut self) {
        info!("Clearing {} strokes", self.strokes.len());
        self.strokes.clear();
        self.active = None;
    }

    /// Restores the default drawing tool settings: opaque black, eraser
    /// off. Existing strokes and the current width are left as they are;
    /// clearing the drawing is `clear_all`'s job.
    pub fn reset_to_defaults(&mut self) {
        info!("Resetting tool settings to defaults");
        self.color = Color::BLACK;
        self.eraser_mode = false;
    }

    /// The strokes in creation order, for the renderer to redraw in full.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn eraser_mode(&self) -> bool {
        self.eraser_mode
    }

    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn erase_boundary_is_inclusive() {
        let mut canvas = Canvas::new();
        canvas.begin_gesture(pos2(10.0, 10.0));
        canvas.extend_gesture(pos2(11.0, 11.0));
        canvas.end_gesture();

        canvas.erase_at(pos2(0.0, 0.0));

        // (10, 10) is exactly on the threshold and goes; (11, 11) stays.
        assert_eq!(canvas.strokes()[0].points(), &[pos2(11.0, 11.0)]);
    }

    #[test]
    fn erase_requires_proximity_on_both_axes() {
        let mut canvas = Canvas::new();
        canvas.begin_gesture(pos2(0.0, 50.0));
        canvas.extend_gesture(pos2(50.0, 0.0));
        canvas.end_gesture();

        // Close on one axis only: both points survive.
        canvas.erase_at(pos2(0.0, 0.0));
        assert_eq!(canvas.strokes()[0].points().len(), 2);
    }

    #[test]
    fn emptied_stroke_stays_in_collection() {
        let mut canvas = Canvas::new();
        canvas.begin_gesture(pos2(5.0, 5.0));
        canvas.end_gesture();

        canvas.erase_at(pos2(0.0, 0.0));

        assert_eq!(canvas.strokes().len(), 1);
        assert!(canvas.strokes()[0].is_empty());
    }

    #[test]
    fn extend_without_begin_is_a_no_op() {
        let mut canvas = Canvas::new();
        canvas.extend_gesture(pos2(1.0, 2.0));
        assert!(canvas.strokes().is_empty());
    }
}
