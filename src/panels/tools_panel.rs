use crate::SketchApp;
use crate::event::CanvasEvent;
use crate::stroke::Color;

/// The toolbar: color picker, eraser toggle, clear, width slider, reset.
/// Pure chrome; every interaction goes through the canvas event interface.
pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let mut rgba = app.canvas().color().to_array();
            if ui.color_edit_button_rgba_unmultiplied(&mut rgba).changed() {
                app.canvas_mut()
                    .apply(CanvasEvent::SetColor(Color::from_array(rgba)));
            }

            let erasing = app.canvas().eraser_mode();
            if ui.selectable_label(erasing, "Eraser").clicked() {
                log::info!("Eraser toggled {}", if erasing { "off" } else { "on" });
                app.canvas_mut().apply(CanvasEvent::ToggleEraser);
            }

            if ui.button("Clear").clicked() {
                app.canvas_mut().apply(CanvasEvent::ClearAll);
            }

            // The model takes any width; this slider is what keeps it 1..=10.
            let mut width = app.canvas().width();
            if ui
                .add(egui::Slider::new(&mut width, 1.0..=10.0).text("Width"))
                .changed()
            {
                app.canvas_mut().apply(CanvasEvent::SetWidth(width));
            }

            if ui.button("Reset").clicked() {
                app.canvas_mut().apply(CanvasEvent::ResetToDefaults);
            }
        });
    });
}
