use std::collections::HashSet;

use glam::Vec2;

use crate::camera::CameraMovement;

/// Identifier for a physical keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Named(NamedKey),
    Character(char),
}

/// Friendly names for the non-character keys the demo consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Left,
    Right,
    Up,
    Down,
    Escape,
}

/// Key state mutated synchronously by window events and read once per frame.
#[derive(Debug, Default)]
pub struct InputState {
    keys: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_key_down(&mut self, key: KeyCode) {
        self.keys.insert(key);
    }

    pub fn set_key_up(&mut self, key: KeyCode) {
        self.keys.remove(&key);
    }

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    /// Movement directions requested by the currently held keys. Letter and
    /// arrow bindings are equivalent.
    pub fn movement(&self) -> Vec<CameraMovement> {
        let mut directions = Vec::new();
        for (movement, character, named) in BINDINGS {
            if self.is_key_down(KeyCode::Character(character))
                || self.is_key_down(KeyCode::Named(named))
            {
                directions.push(movement);
            }
        }
        directions
    }
}

const BINDINGS: [(CameraMovement, char, NamedKey); 4] = [
    (CameraMovement::Forward, 'W', NamedKey::Up),
    (CameraMovement::Backward, 'S', NamedKey::Down),
    (CameraMovement::Left, 'A', NamedKey::Left),
    (CameraMovement::Right, 'D', NamedKey::Right),
];

/// Converts absolute cursor positions into per-frame deltas.
///
/// The first sample after (re)activation only establishes the reference
/// position and yields a zero delta, so grabbing the cursor never produces a
/// view jump. The y component is inverted because screen y grows downward.
#[derive(Debug, Default)]
pub struct MouseTracker {
    last: Option<Vec2>,
}

impl MouseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delta(&mut self, position: Vec2) -> Vec2 {
        let delta = match self.last {
            Some(last) => Vec2::new(position.x - last.x, last.y - position.y),
            None => Vec2::ZERO,
        };
        self.last = Some(position);
        delta
    }

    /// Discards the reference position; the next sample yields a zero delta.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_is_reference_only() {
        let mut tracker = MouseTracker::new();
        assert_eq!(tracker.delta(Vec2::new(400.0, 300.0)), Vec2::ZERO);
    }

    #[test]
    fn second_sample_yields_inverted_y_delta() {
        let mut tracker = MouseTracker::new();
        tracker.delta(Vec2::new(400.0, 300.0));
        let delta = tracker.delta(Vec2::new(410.0, 304.0));
        assert_eq!(delta, Vec2::new(10.0, -4.0));
    }

    #[test]
    fn reset_rearms_the_reference_sample() {
        let mut tracker = MouseTracker::new();
        tracker.delta(Vec2::new(1.0, 1.0));
        tracker.reset();
        assert_eq!(tracker.delta(Vec2::new(500.0, 500.0)), Vec2::ZERO);
    }

    #[test]
    fn letter_and_arrow_bindings_are_equivalent() {
        let mut state = InputState::new();
        state.set_key_down(KeyCode::Character('W'));
        assert_eq!(state.movement(), vec![CameraMovement::Forward]);
        state.set_key_up(KeyCode::Character('W'));
        state.set_key_down(KeyCode::Named(NamedKey::Up));
        assert_eq!(state.movement(), vec![CameraMovement::Forward]);
    }

    #[test]
    fn released_keys_stop_moving() {
        let mut state = InputState::new();
        state.set_key_down(KeyCode::Character('A'));
        state.set_key_down(KeyCode::Character('D'));
        assert_eq!(state.movement().len(), 2);
        state.set_key_up(KeyCode::Character('A'));
        assert_eq!(state.movement(), vec![CameraMovement::Right]);
    }
}
