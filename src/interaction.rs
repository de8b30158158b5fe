//! Tap-versus-drag interpretation of pointer input.
//!
//! The board feeds one [`InputSnapshot`] per frame into an
//! [`InteractionMachine`]. A press followed by a release within the debounce
//! window is a tap and asks for a pick under the pointer. Holding longer
//! turns the camera pivot in fixed angular steps.

use crate::math::{Point2, Vector3};

/// A pointer button transition observed during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Pressed,
    Released,
}

/// Input sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSnapshot {
    /// Monotonic frame counter.
    pub frame: u64,
    /// Seconds elapsed since the previous frame.
    pub dt: f64,
    /// Pointer position in normalized device coordinates, if the pointer is
    /// over the viewport.
    pub pointer: Option<Point2>,
    /// Button transition delivered since the previous frame.
    pub button: Option<ButtonEvent>,
}

impl InputSnapshot {
    /// A frame with the pointer at `pointer` and no button transition.
    #[must_use]
    pub fn tick(frame: u64, dt: f64, pointer: Point2) -> Self {
        Self {
            frame,
            dt,
            pointer: Some(pointer),
            button: None,
        }
    }

    /// Adds a button transition to this frame.
    #[must_use]
    pub fn with_button(mut self, button: ButtonEvent) -> Self {
        self.button = Some(button);
        self
    }
}

/// Where the pointer is in a press-hold-release gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PointerState {
    #[default]
    Idle,
    Clicked,
    Dragging,
}

/// What a frame of input asks the board to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    /// Turn the camera pivot by heading, pitch and roll, in degrees.
    Rotate(Vector3),
    /// Recolor whatever lies under this pointer position.
    Pick(Point2),
}

/// Turns per-frame [`InputSnapshot`]s into taps and drags.
///
/// A release within `debounce_frames` of its press is a tap. After the
/// window has passed, each frame with pointer movement rotates the camera
/// by `rotation_step_deg` per second on each moving axis.
#[derive(Debug, Clone)]
pub struct InteractionMachine {
    state: PointerState,
    deadline: u64,
    last_pos: Point2,
    pending: Option<ButtonEvent>,
    debounce_frames: u64,
    rotation_step_deg: f64,
}

impl InteractionMachine {
    #[must_use]
    pub fn new(debounce_frames: u64, rotation_step_deg: f64) -> Self {
        Self {
            state: PointerState::Idle,
            deadline: 0,
            last_pos: Point2::origin(),
            pending: None,
            debounce_frames,
            rotation_step_deg,
        }
    }

    #[must_use]
    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Frame up to which a release still counts as a tap; zero when idle.
    #[must_use]
    pub fn deadline(&self) -> u64 {
        self.deadline
    }

    /// Performs at most one transition for this frame.
    ///
    /// Button events arriving while the pointer is outside the viewport are
    /// held until it returns.
    pub fn update(&mut self, input: &InputSnapshot) -> Option<Interaction> {
        if input.button.is_some() {
            self.pending = input.button;
        }
        let pos = input.pointer?;

        match (self.state, self.pending.take()) {
            (PointerState::Idle, Some(ButtonEvent::Pressed)) => {
                self.deadline = input.frame.saturating_add(self.debounce_frames);
                self.last_pos = pos;
                self.state = PointerState::Clicked;
                None
            }
            (PointerState::Clicked | PointerState::Dragging, Some(ButtonEvent::Released)) => {
                let tap = input.frame <= self.deadline;
                self.deadline = 0;
                self.state = PointerState::Idle;
                tap.then_some(Interaction::Pick(pos))
            }
            (PointerState::Clicked, _) => {
                self.state = PointerState::Dragging;
                None
            }
            (PointerState::Dragging, _) if input.frame >= self.deadline => self.rotation(pos, input.dt),
            _ => None,
        }
    }

    fn rotation(&mut self, pos: Point2, dt: f64) -> Option<Interaction> {
        let step = |delta: f64| {
            if delta > 0.0 {
                self.rotation_step_deg * dt
            } else if delta < 0.0 {
                -self.rotation_step_deg * dt
            } else {
                0.0
            }
        };
        let delta = pos - self.last_pos;
        let hpr = Vector3::new(step(delta.x), 0.0, step(delta.y));
        self.last_pos = pos;
        (hpr != Vector3::zeros()).then_some(Interaction::Rotate(hpr))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const DT: f64 = 0.1;

    /// Presses at frame 0, moves right one step per frame, releases at
    /// `release` and returns every interaction with its frame.
    fn press_hold_release(release: u64) -> Vec<(u64, Interaction)> {
        let mut machine = InteractionMachine::new(7, 180.0);
        let mut out = Vec::new();
        for frame in 0..=release {
            #[allow(clippy::cast_precision_loss)]
            let mut input = InputSnapshot::tick(frame, DT, Point2::new(frame as f64 * 0.01, 0.0));
            if frame == 0 {
                input = input.with_button(ButtonEvent::Pressed);
            } else if frame == release {
                input = input.with_button(ButtonEvent::Released);
            }
            if let Some(action) = machine.update(&input) {
                out.push((frame, action));
            }
        }
        assert_eq!(machine.state(), PointerState::Idle);
        assert_eq!(machine.deadline(), 0);
        out
    }

    #[test]
    fn quick_release_is_a_tap() {
        let actions = press_hold_release(3);
        assert_eq!(actions.len(), 1);
        assert!(matches!(actions[0], (3, Interaction::Pick(_))));
    }

    #[test]
    fn release_on_deadline_is_still_a_tap() {
        let actions = press_hold_release(7);
        assert!(matches!(actions.last(), Some((7, Interaction::Pick(_)))));
    }

    #[test]
    fn long_hold_rotates_without_pick() {
        let actions = press_hold_release(10);
        let frames: Vec<u64> = actions.iter().map(|(f, _)| *f).collect();
        assert_eq!(frames, vec![7, 8, 9]);
        for (_, action) in actions {
            let Interaction::Rotate(hpr) = action else {
                panic!("unexpected {action:?}");
            };
            assert_relative_eq!(hpr, Vector3::new(18.0, 0.0, 0.0));
        }
    }

    #[test]
    fn rotation_uses_delta_sign_only() {
        let mut machine = InteractionMachine::new(0, 90.0);
        machine.update(&InputSnapshot::tick(0, 1.0, Point2::origin()).with_button(ButtonEvent::Pressed));
        machine.update(&InputSnapshot::tick(1, 1.0, Point2::origin()));
        assert_eq!(machine.state(), PointerState::Dragging);

        let action = machine.update(&InputSnapshot::tick(2, 0.5, Point2::new(-0.9, 0.001)));
        assert_eq!(action, Some(Interaction::Rotate(Vector3::new(-45.0, 0.0, 45.0))));

        // Pointer held still.
        let action = machine.update(&InputSnapshot::tick(3, 0.5, Point2::new(-0.9, 0.001)));
        assert_eq!(action, None);
    }

    #[test]
    fn pointer_outside_viewport_defers_events() {
        let mut machine = InteractionMachine::new(7, 180.0);
        let outside = InputSnapshot {
            frame: 0,
            dt: DT,
            pointer: None,
            button: Some(ButtonEvent::Pressed),
        };
        assert_eq!(machine.update(&outside), None);
        assert_eq!(machine.state(), PointerState::Idle);

        machine.update(&InputSnapshot::tick(1, DT, Point2::origin()));
        assert_eq!(machine.state(), PointerState::Clicked);
        assert_eq!(machine.deadline(), 8);
    }

    #[test]
    fn huge_debounce_window_saturates() {
        let mut machine = InteractionMachine::new(u64::MAX, 180.0);
        let press = InputSnapshot::tick(5, DT, Point2::origin()).with_button(ButtonEvent::Pressed);
        assert_eq!(machine.update(&press), None);
        assert_eq!(machine.deadline(), u64::MAX);

        let release = InputSnapshot::tick(9, DT, Point2::origin()).with_button(ButtonEvent::Released);
        assert!(matches!(machine.update(&release), Some(Interaction::Pick(_))));
    }

    #[test]
    fn stray_release_is_ignored() {
        let mut machine = InteractionMachine::new(7, 180.0);
        let input = InputSnapshot::tick(4, DT, Point2::origin()).with_button(ButtonEvent::Released);
        assert_eq!(machine.update(&input), None);
        assert_eq!(machine.state(), PointerState::Idle);
    }
}
