use egui::{pos2, vec2, PointerButton, Rect};
use pixelpen::{
    new_tool, Canvas, InputController, InputEvent, InputLocation, PenColor, PenShape, PointerMode,
    ToolOptions, ToolType, ViewTransform, WheelDirection,
};

const WHITE: [u8; 4] = [255, 255, 255, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];

/// Everything one dispatch cycle needs, wired the way the app wires it.
struct Rig {
    canvas: Canvas,
    view: ViewTransform,
    tool: ToolType,
    controller: InputController,
    options: ToolOptions,
    canvas_rect: Rect,
}

impl Rig {
    fn with_pixel_pen() -> Self {
        Self {
            canvas: Canvas::new(800, 600).unwrap(),
            view: ViewTransform::new(),
            tool: new_tool("pixel").unwrap(),
            controller: InputController::new(),
            options: ToolOptions {
                shape: PenShape::Square,
                size: 1,
                color: PenColor::Black,
            },
            canvas_rect: Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0)),
        }
    }

    fn send(&mut self, event: InputEvent) {
        self.controller.handle_event(
            &event,
            &mut self.canvas,
            &mut self.view,
            &mut self.tool,
            &self.options,
            self.canvas_rect,
        );
    }

    fn press(&mut self, button: PointerButton, x: f32, y: f32) {
        self.send(InputEvent::PointerDown {
            location: self.location(x, y),
            button,
        });
    }

    fn release(&mut self, button: PointerButton, x: f32, y: f32) {
        self.send(InputEvent::PointerUp {
            location: self.location(x, y),
            button,
        });
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.send(InputEvent::PointerMove {
            location: self.location(x, y),
        });
    }

    fn leave(&mut self, x: f32, y: f32) {
        self.send(InputEvent::PointerLeave {
            last_known_location: self.location(x, y),
        });
    }

    fn location(&self, x: f32, y: f32) -> InputLocation {
        InputLocation {
            position: pos2(x, y),
            is_in_canvas: self.canvas_rect.contains(pos2(x, y)),
        }
    }
}

#[test]
fn primary_button_drives_the_drawing_session() {
    let mut rig = Rig::with_pixel_pen();
    assert_eq!(rig.controller.mode(), PointerMode::Idle);

    rig.press(PointerButton::Primary, 100.0, 100.0);
    assert_eq!(rig.controller.mode(), PointerMode::Drawing);
    assert_eq!(rig.canvas.surface().pixel(100, 100), Some(BLACK));

    rig.move_to(110.0, 100.0);
    assert_eq!(rig.canvas.surface().pixel(105, 100), Some(BLACK));

    rig.release(PointerButton::Primary, 110.0, 100.0);
    assert_eq!(rig.controller.mode(), PointerMode::Idle);

    // Moves after the release do not draw.
    rig.move_to(200.0, 100.0);
    assert_eq!(rig.canvas.surface().pixel(150, 100), Some(WHITE));
    assert_eq!(rig.canvas.surface().pixel(200, 100), Some(WHITE));
}

#[test]
fn secondary_button_drives_the_panning_session() {
    let mut rig = Rig::with_pixel_pen();

    rig.press(PointerButton::Secondary, 50.0, 50.0);
    assert_eq!(rig.controller.mode(), PointerMode::Panning);

    rig.move_to(60.0, 45.0);
    assert_eq!(rig.view.pan(), vec2(10.0, -5.0));

    rig.move_to(63.0, 47.0);
    assert_eq!(rig.view.pan(), vec2(13.0, -3.0));

    rig.release(PointerButton::Secondary, 63.0, 47.0);
    assert_eq!(rig.controller.mode(), PointerMode::Idle);

    // Panning never paints.
    assert_eq!(rig.canvas.surface().pixel(50, 50), Some(WHITE));
    assert_eq!(rig.canvas.surface().pixel(60, 45), Some(WHITE));
}

#[test]
fn drawing_and_panning_are_mutually_exclusive() {
    let mut rig = Rig::with_pixel_pen();

    rig.press(PointerButton::Primary, 10.0, 10.0);
    rig.press(PointerButton::Secondary, 10.0, 10.0);
    assert_eq!(rig.controller.mode(), PointerMode::Drawing);

    // Releasing the wrong button changes nothing either.
    rig.release(PointerButton::Secondary, 10.0, 10.0);
    assert_eq!(rig.controller.mode(), PointerMode::Drawing);
    rig.release(PointerButton::Primary, 10.0, 10.0);
    assert_eq!(rig.controller.mode(), PointerMode::Idle);

    rig.press(PointerButton::Secondary, 20.0, 20.0);
    rig.press(PointerButton::Primary, 20.0, 20.0);
    assert_eq!(rig.controller.mode(), PointerMode::Panning);
    // The ignored primary press must not have painted.
    assert_eq!(rig.canvas.surface().pixel(20, 20), Some(WHITE));
}

#[test]
fn leaving_the_canvas_cancels_the_drawing_session() {
    let mut rig = Rig::with_pixel_pen();

    rig.press(PointerButton::Primary, 10.0, 10.0);
    rig.leave(10.0, 10.0);
    assert_eq!(rig.controller.mode(), PointerMode::Idle);

    // Re-entering without a fresh press leaves no dangling session.
    rig.move_to(30.0, 10.0);
    assert_eq!(rig.canvas.surface().pixel(20, 10), Some(WHITE));
    assert_eq!(rig.canvas.surface().pixel(30, 10), Some(WHITE));
}

#[test]
fn leaving_the_canvas_cancels_the_panning_session() {
    let mut rig = Rig::with_pixel_pen();

    rig.press(PointerButton::Secondary, 50.0, 50.0);
    rig.move_to(55.0, 50.0);
    assert_eq!(rig.view.pan(), vec2(5.0, 0.0));

    rig.leave(55.0, 50.0);
    assert_eq!(rig.controller.mode(), PointerMode::Idle);

    rig.move_to(100.0, 100.0);
    assert_eq!(rig.view.pan(), vec2(5.0, 0.0));
}

#[test]
fn presses_outside_the_canvas_are_ignored() {
    let mut rig = Rig::with_pixel_pen();

    rig.press(PointerButton::Primary, 900.0, 100.0);
    assert_eq!(rig.controller.mode(), PointerMode::Idle);

    rig.press(PointerButton::Secondary, 900.0, 700.0);
    assert_eq!(rig.controller.mode(), PointerMode::Idle);
}

#[test]
fn wheel_ticks_zoom_the_view() {
    let mut rig = Rig::with_pixel_pen();

    rig.send(InputEvent::Wheel {
        direction: WheelDirection::Up,
    });
    assert_eq!(rig.view.zoom(), 1.1);

    rig.send(InputEvent::Wheel {
        direction: WheelDirection::Down,
    });
    assert!((rig.view.zoom() - 0.99).abs() < 1e-6);
}

#[test]
fn drawing_applies_the_view_transform_to_pointer_coords() {
    let mut rig = Rig::with_pixel_pen();
    // Zoom in one tick and pan right by 100 device pixels.
    rig.send(InputEvent::Wheel {
        direction: WheelDirection::Up,
    });
    rig.press(PointerButton::Secondary, 0.0, 0.0);
    rig.move_to(100.0, 0.0);
    rig.release(PointerButton::Secondary, 100.0, 0.0);

    // Device (155.55, 11.55) with pan (100, 0) and zoom 1.1 lands on
    // floor(55.55 / 1.1) = 50, floor(11.55 / 1.1) = 10.
    rig.press(PointerButton::Primary, 155.55, 11.55);
    assert_eq!(rig.canvas.surface().pixel(50, 10), Some(BLACK));
}
