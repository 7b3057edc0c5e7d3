use crate::SketchApp;
use crate::event::CanvasEvent;

/// The drawing area. Fills the space left over by the toolbar and turns
/// drags on it into gesture events. The model never sees toolbar clicks:
/// the response below only covers the allocated canvas rect, which is the
/// whole of the chrome hit-testing.
pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
        let canvas_rect = response.rect;

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                app.canvas_mut().apply(CanvasEvent::PointerDown { pos });
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                app.canvas_mut().apply(CanvasEvent::PointerMove { pos });
            }
        }
        if response.drag_stopped() {
            app.canvas_mut().apply(CanvasEvent::PointerUp);
        }

        app.renderer().render(&painter, canvas_rect, app.canvas());
    });
}
