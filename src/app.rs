use egui::{pos2, vec2, Color32, ColorImage, Rect, Sense, TextureHandle, TextureOptions};

use crate::canvas::Canvas;
use crate::input::{InputController, InputHandler};
use crate::options::{PenColor, PenShape, ToolOptions, MAX_PEN_SIZE, MIN_PEN_SIZE};
use crate::stroke::StrokeCap;
use crate::tools::{new_tool, Tool, ToolType};
use crate::view::ViewTransform;

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
///
/// Only the pen settings and the selected tool survive a restart; the
/// drawing itself, the zoom/pan view and all gesture state are session-only.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PixelPenApp {
    active_tool: ToolType,
    options: ToolOptions,
    #[serde(skip)]
    canvas: Canvas,
    #[serde(skip)]
    view: ViewTransform,
    #[serde(skip)]
    controller: InputController,
    #[serde(skip)]
    input_handler: InputHandler,
    // GPU-side copy of the raster, refreshed every frame.
    #[serde(skip)]
    texture: Option<TextureHandle>,
}

impl Default for PixelPenApp {
    fn default() -> Self {
        Self {
            active_tool: ToolType::default(),
            options: ToolOptions::default(),
            canvas: Canvas::default(),
            view: ViewTransform::default(),
            controller: InputController::default(),
            input_handler: InputHandler::default(),
            texture: None,
        }
    }
}

impl PixelPenApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(storage) = cc.storage {
            return eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }
        Self::default()
    }

    fn select_tool(&mut self, kind: &str) {
        if let Some(tool) = new_tool(kind) {
            log::info!("switching tool to {}", tool.name());
            self.active_tool = tool;
        }
    }

    fn tools_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Pen");
        ui.separator();

        ui.horizontal(|ui| {
            if ui
                .selectable_label(self.active_tool.is_smooth_pen(), "Smooth")
                .clicked()
            {
                self.select_tool("smooth");
            }
            if ui
                .selectable_label(self.active_tool.is_pixel_pen(), "Pixel")
                .clicked()
            {
                self.select_tool("pixel");
            }
        });
        ui.label(if self.active_tool.is_smooth_pen() {
            "Antialiased strokes via the native path renderer"
        } else {
            "Hard-edged pixel stamping, Bresenham between samples"
        });

        ui.separator();

        ui.label("Shape");
        ui.radio_value(&mut self.options.shape, PenShape::Round, "Round");
        ui.radio_value(&mut self.options.shape, PenShape::Square, "Square");

        ui.separator();

        ui.label(format!("Size: {}px", self.options.size));
        ui.add(egui::Slider::new(
            &mut self.options.size,
            MIN_PEN_SIZE..=MAX_PEN_SIZE,
        ));

        ui.separator();

        ui.label("Color");
        for color in [
            PenColor::White,
            PenColor::Black,
            PenColor::Red,
            PenColor::Blue,
        ] {
            ui.radio_value(&mut self.options.color, color, color.label());
        }

        ui.separator();

        ui.label(format!("Zoom: {:.0}%", self.view.zoom() * 100.0));
        ui.label("Wheel to zoom, right-drag to pan");

        ui.separator();

        if ui.button("Clear").clicked() {
            self.canvas.clear(PenColor::White);
        }
    }

    /// Upload the raster and paint it plus the stroke layer under the
    /// current view transform, clipped to the viewport.
    fn paint_canvas(&mut self, painter: &egui::Painter, viewport: Rect) {
        let surface = self.canvas.surface();
        let image = ColorImage::from_rgba_unmultiplied(
            [surface.width() as usize, surface.height() as usize],
            surface.as_rgba(),
        );
        // Nearest-neighbor filtering keeps the pixel pen's jagged edges
        // visible when zoomed in.
        let texture_id = if let Some(texture) = &mut self.texture {
            texture.set(image, TextureOptions::NEAREST);
            texture.id()
        } else {
            let texture = painter
                .ctx()
                .load_texture("canvas", image, TextureOptions::NEAREST);
            let id = texture.id();
            self.texture = Some(texture);
            id
        };

        let painter = painter.with_clip_rect(viewport);
        let origin = viewport.min;
        let zoom = self.view.zoom();
        let surface_rect = Rect::from_min_size(
            self.view.to_device_coords(pos2(0.0, 0.0), origin),
            vec2(
                self.canvas.width() as f32 * zoom,
                self.canvas.height() as f32 * zoom,
            ),
        );
        painter.image(
            texture_id,
            surface_rect,
            Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
            Color32::WHITE,
        );

        for stroke in self.canvas.strokes() {
            self.paint_stroke(
                &painter,
                origin,
                stroke.points(),
                stroke.color(),
                stroke.thickness(),
                stroke.cap(),
            );
        }
        if let Some(path) = self.canvas.active_path() {
            self.paint_stroke(
                &painter,
                origin,
                path.points(),
                path.color(),
                path.thickness(),
                path.cap(),
            );
        }
    }

    fn paint_stroke(
        &self,
        painter: &egui::Painter,
        origin: egui::Pos2,
        points: &[egui::Pos2],
        color: Color32,
        thickness: f32,
        cap: StrokeCap,
    ) {
        let zoom = self.view.zoom();
        let screen: Vec<egui::Pos2> = points
            .iter()
            .map(|p| self.view.to_device_coords(*p, origin))
            .collect();

        if screen.len() >= 2 {
            painter.add(egui::Shape::line(
                screen.clone(),
                egui::Stroke::new(thickness * zoom, color),
            ));
        }
        // egui's path stroking has no cap styles, so round caps (and the
        // single-point dot) are emulated with end circles.
        if cap == StrokeCap::Round {
            if let (Some(first), Some(last)) = (screen.first(), screen.last()) {
                let radius = thickness * zoom / 2.0;
                painter.circle_filled(*first, radius, color);
                painter.circle_filled(*last, radius, color);
            }
        }
    }
}

impl eframe::App for PixelPenApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("tools_panel")
            .min_width(220.0)
            .show(ctx, |ui| self.tools_panel(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let (response, painter) = ui.allocate_painter(available, Sense::click_and_drag());
            let viewport = response.rect;

            self.input_handler.set_canvas_rect(viewport);
            for event in self.input_handler.process_input(ctx) {
                self.controller.handle_event(
                    &event,
                    &mut self.canvas,
                    &mut self.view,
                    &mut self.active_tool,
                    &self.options,
                    viewport,
                );
            }

            self.paint_canvas(&painter, viewport);
        });
    }
}
