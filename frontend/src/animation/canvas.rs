//! Geometry and run/stop policy for the Canvas demo.

use std::f64::consts::PI;

pub const BACKGROUND: &str = "#1a1a25";
pub const GRADIENT_INNER: &str = "#7c3aed";
pub const GRADIENT_OUTER: &str = "#2563eb";
pub const RECT_FILL: &str = "#25D366";
pub const RECT_SHADOW: &str = "rgba(37, 211, 102, 0.5)";
pub const RECT_SHADOW_BLUR: f64 = 20.0;
pub const NEEDLE_STROKE: &str = "#f59e0b";
pub const NEEDLE_WIDTH: f64 = 3.0;
pub const TITLE: &str = "Canvas API Demo";
pub const TITLE_FILL: &str = "#f0f0f5";
pub const TITLE_FONT: &str = "bold 16px Outfit, sans-serif";

/// (x, y, radius)
pub const CIRCLE: (f64, f64, f64) = (150.0, 100.0, 60.0);
/// Radial gradient: inner circle then outer circle, each (x, y, radius).
pub const GRADIENT: ((f64, f64, f64), (f64, f64, f64)) = ((150.0, 100.0, 20.0), (150.0, 100.0, 80.0));
/// (x, y, width, height)
pub const RECT: (f64, f64, f64, f64) = (50.0, 140.0, 80.0, 40.0);
pub const TITLE_POS: (f64, f64) = (150.0, 30.0);

pub const NEEDLE_LENGTH: f64 = 40.0;
/// Distance of the needle pivot from the right edge.
pub const NEEDLE_INSET: f64 = 100.0;
/// Radians added per frame.
pub const ANGLE_STEP: f64 = 0.05;
/// Fraction of the canvas that has to be visible for the observer to report it.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// The rotating line drawn on every frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Needle {
    angle: f64,
}

impl Needle {
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Advances one frame, wrapping at a full turn.
    pub fn step(&mut self) {
        self.angle = (self.angle + ANGLE_STEP) % (2.0 * PI);
    }

    pub fn pivot(width: f64, height: f64) -> (f64, f64) {
        (width - NEEDLE_INSET, height / 2.0)
    }

    pub fn tip(&self, width: f64, height: f64) -> (f64, f64) {
        let (x, y) = Self::pivot(width, height);
        (
            x + self.angle.cos() * NEEDLE_LENGTH,
            y + self.angle.sin() * NEEDLE_LENGTH,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateCommand {
    Start,
    Stop,
    Keep,
}

/// Runs the animation only while the canvas is in the viewport and the page
/// is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationGate {
    in_view: bool,
    page_hidden: bool,
    running: bool,
}

impl AnimationGate {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn on_intersection(&mut self, intersecting: bool) -> GateCommand {
        self.in_view = intersecting;
        self.settle()
    }

    /// `in_viewport` is re-measured by the caller when the page becomes
    /// visible again, since intersection events are not delivered while hidden.
    pub fn on_visibility(&mut self, hidden: bool, in_viewport: bool) -> GateCommand {
        self.page_hidden = hidden;
        if !hidden {
            self.in_view = in_viewport;
        }
        self.settle()
    }

    fn settle(&mut self) -> GateCommand {
        let should_run = self.in_view && !self.page_hidden;
        match (self.running, should_run) {
            (false, true) => {
                self.running = true;
                GateCommand::Start
            }
            (true, false) => {
                self.running = false;
                GateCommand::Stop
            }
            _ => GateCommand::Keep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_is_observed_at_a_tenth_visible() {
        assert_eq!(VISIBILITY_THRESHOLD, 0.1);
        assert_eq!(VISIBILITY_THRESHOLD, crate::animation::reveal::REVEAL_THRESHOLD);
    }

    #[test]
    fn needle_starts_pointing_right_of_pivot() {
        let needle = Needle::default();
        assert_eq!(Needle::pivot(300.0, 200.0), (200.0, 100.0));
        assert_eq!(needle.tip(300.0, 200.0), (240.0, 100.0));
    }

    #[test]
    fn needle_steps_and_wraps() {
        let mut needle = Needle::default();
        needle.step();
        assert!((needle.angle() - ANGLE_STEP).abs() < 1e-12);
        for _ in 0..200 {
            needle.step();
        }
        assert!(needle.angle() < 2.0 * PI);
    }

    #[test]
    fn gate_never_starts_twice() {
        let mut gate = AnimationGate::default();
        assert_eq!(gate.on_intersection(true), GateCommand::Start);
        assert_eq!(gate.on_visibility(false, true), GateCommand::Keep);
        assert_eq!(gate.on_intersection(true), GateCommand::Keep);
    }

    #[test]
    fn hidden_page_stops_and_resumes_only_in_view() {
        let mut gate = AnimationGate::default();
        gate.on_intersection(true);
        assert_eq!(gate.on_visibility(true, true), GateCommand::Stop);
        // Intersection events while hidden must not restart the loop.
        assert_eq!(gate.on_intersection(true), GateCommand::Keep);
        assert_eq!(gate.on_visibility(false, false), GateCommand::Keep);
        assert!(!gate.is_running());
        assert_eq!(gate.on_intersection(true), GateCommand::Start);
    }

    #[test]
    fn leaving_viewport_stops() {
        let mut gate = AnimationGate::default();
        gate.on_intersection(true);
        assert_eq!(gate.on_intersection(false), GateCommand::Stop);
        assert!(!gate.is_running());
    }
}
