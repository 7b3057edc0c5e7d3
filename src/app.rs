use crate::canvas::Canvas;
use crate::panels;
use crate::renderer::Renderer;

/// The application shell: owns the canvas model and the renderer, and
/// rebuilds the two panels every frame.
#[derive(Debug, Default)]
pub struct SketchApp {
    canvas: Canvas,
    renderer: Renderer,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
