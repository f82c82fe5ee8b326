use egui::{Context, PointerButton, Pos2, Rect};

use crate::canvas::Canvas;
use crate::options::ToolOptions;
use crate::tools::{Tool, ToolType};
use crate::view::{ViewTransform, WheelDirection};

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy)]
pub struct InputLocation {
    /// The position in device (screen) coordinates
    pub position: Pos2,
    /// Whether this position is within the canvas viewport
    pub is_in_canvas: bool,
}

/// Represents the pointer and wheel events the painting core consumes
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse button was released
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse moved (with or without buttons pressed)
    PointerMove { location: InputLocation },
    /// Mouse left the canvas viewport
    PointerLeave { last_known_location: InputLocation },
    /// One discrete wheel tick over the canvas
    Wheel { direction: WheelDirection },
}

/// Handles converting raw egui input into our domain-specific InputEvents
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if the window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Creates an InputLocation from a position
    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos,
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover_pos = input.pointer.hover_pos();

            // Leaving the tracked area counts the same as releasing the
            // button, so emit the leave before any other event this frame.
            if let Some(last) = self.last_pointer_pos {
                let was_in = self.canvas_rect.contains(last);
                let is_in = hover_pos.is_some_and(|pos| self.canvas_rect.contains(pos));
                if was_in && !is_in {
                    events.push(InputEvent::PointerLeave {
                        last_known_location: self.make_location(last),
                    });
                }
            }

            if let Some(pos) = hover_pos {
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove {
                        location: self.make_location(pos),
                    });
                }
                self.last_pointer_pos = Some(pos);
            } else {
                self.last_pointer_pos = None;
            }

            // Only the primary (draw) and secondary (pan) buttons matter.
            for button in [PointerButton::Primary, PointerButton::Secondary] {
                if input.pointer.button_pressed(button) {
                    if let Some(pos) = hover_pos {
                        events.push(InputEvent::PointerDown {
                            location: self.make_location(pos),
                            button,
                        });
                    }
                }
                if input.pointer.button_released(button) {
                    if let Some(pos) = hover_pos {
                        events.push(InputEvent::PointerUp {
                            location: self.make_location(pos),
                            button,
                        });
                    }
                }
            }

            // Wheel ticks over the canvas become zoom deltas. Only the
            // sign matters; zoom steps are fixed per tick.
            let scroll = input.raw_scroll_delta.y;
            if scroll != 0.0 && hover_pos.is_some_and(|pos| self.canvas_rect.contains(pos)) {
                let direction = if scroll > 0.0 {
                    WheelDirection::Up
                } else {
                    WheelDirection::Down
                };
                events.push(InputEvent::Wheel { direction });
            }
        });

        events
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

/// The exclusive pointer mode: at most one gesture is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerMode {
    #[default]
    Idle,
    Drawing,
    Panning,
}

/// Gates pointer events into drawing or panning sessions and dispatches
/// them to the active tool or the view transform.
///
/// The primary button draws, the secondary button pans, and the two are
/// mutually exclusive: a button press while the other gesture is active is
/// ignored. Leaving the canvas cancels whichever gesture is in flight, so
/// no session state dangles.
pub struct InputController {
    mode: PointerMode,
    pan_anchor: Option<Pos2>,
}

impl InputController {
    pub fn new() -> Self {
        Self {
            mode: PointerMode::Idle,
            pan_anchor: None,
        }
    }

    pub fn mode(&self) -> PointerMode {
        self.mode
    }

    /// Route one event to the tool or the view transform.
    ///
    /// `canvas_rect` is the device-space rectangle the unpanned surface is
    /// anchored to; its top-left corner is the viewport origin for the
    /// coordinate mapping.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        canvas: &mut Canvas,
        view: &mut ViewTransform,
        tool: &mut ToolType,
        options: &ToolOptions,
        canvas_rect: Rect,
    ) {
        let origin = canvas_rect.min;

        match event {
            InputEvent::PointerDown { location, button } => match (self.mode, *button) {
                (PointerMode::Idle, PointerButton::Primary) if location.is_in_canvas => {
                    self.mode = PointerMode::Drawing;
                    let (x, y) = view.to_surface_coords(location.position, origin);
                    tool.on_pointer_down(canvas, x, y, options);
                }
                (PointerMode::Idle, PointerButton::Secondary) if location.is_in_canvas => {
                    self.mode = PointerMode::Panning;
                    self.pan_anchor = Some(location.position);
                }
                // A press while the other gesture is active is ignored.
                _ => {}
            },

            InputEvent::PointerMove { location } => match self.mode {
                PointerMode::Drawing => {
                    let (x, y) = view.to_surface_coords(location.position, origin);
                    tool.on_pointer_move(canvas, x, y, options);
                }
                PointerMode::Panning => {
                    if let Some(anchor) = self.pan_anchor {
                        view.apply_pan_delta(location.position - anchor);
                        self.pan_anchor = Some(location.position);
                    }
                }
                PointerMode::Idle => {}
            },

            InputEvent::PointerUp { location, button } => match (self.mode, *button) {
                (PointerMode::Drawing, PointerButton::Primary) => {
                    let (x, y) = view.to_surface_coords(location.position, origin);
                    tool.on_pointer_up(canvas, x, y, options);
                    self.mode = PointerMode::Idle;
                }
                (PointerMode::Panning, PointerButton::Secondary) => {
                    self.pan_anchor = None;
                    self.mode = PointerMode::Idle;
                }
                _ => {}
            },

            InputEvent::PointerLeave { last_known_location } => match self.mode {
                PointerMode::Drawing => {
                    let (x, y) = view.to_surface_coords(last_known_location.position, origin);
                    tool.on_pointer_up(canvas, x, y, options);
                    self.mode = PointerMode::Idle;
                }
                PointerMode::Panning => {
                    self.pan_anchor = None;
                    self.mode = PointerMode::Idle;
                }
                PointerMode::Idle => {}
            },

            InputEvent::Wheel { direction } => {
                view.apply_zoom_delta(*direction);
            }
        }
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new()
    }
}
