use egui::{Color32, Pos2};
use std::sync::Arc;

/// End-cap and join treatment for a smooth stroke, derived from the pen
/// shape: a round pen gets round caps and joins, a square pen gets butt
/// caps and miter joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    Round,
    Butt,
}

// Immutable stroke for sharing
#[derive(Clone)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
    cap: StrokeCap,
}

// Define a reference-counted type alias for Stroke
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    pub fn new(color: Color32, thickness: f32, cap: StrokeCap, points: Vec<Pos2>) -> Self {
        Self {
            points,
            color,
            thickness,
            cap,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn cap(&self) -> StrokeCap {
        self.cap
    }
}

/// The path being stroked right now.
///
/// This is the core's stand-in for a native path object: it owns the path
/// state between pointer events, so the smooth pen itself stays stateless.
/// Every point appended here is immediately visible to the renderer.
pub struct MutableStroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
    cap: StrokeCap,
}

impl MutableStroke {
    /// Begin a path at `start` with the given stroke attributes.
    pub fn new(color: Color32, thickness: f32, cap: StrokeCap, start: Pos2) -> Self {
        Self {
            points: vec![start],
            color,
            thickness,
            cap,
        }
    }

    /// Extend the path to `point`, committing the new segment.
    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    // Convert to a reference-counted StrokeRef
    pub fn to_stroke_ref(&self) -> StrokeRef {
        Arc::new(Stroke::new(
            self.color,
            self.thickness,
            self.cap,
            self.points.clone(),
        ))
    }
}
