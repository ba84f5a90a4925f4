//! Converts raw platform events into camera commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! held keys) and the key-binding map. It is the only thing that sits
//! between raw window events and [`Camera::execute`].

use std::collections::HashSet;

use super::event::InputEvent;
use super::mouse::CursorTracker;
use super::KeyAction;
use crate::camera::{Camera, CameraCommand, Movement, Orientation};
use crate::options::{KeybindingOptions, Options};

/// Converts raw window events into [`CameraCommand`]s.
///
/// Cursor motion and scrolling produce commands immediately; held keys
/// produce movement and roll once per frame from
/// [`frame_commands`](Self::frame_commands).
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(&event) {
///     camera.execute(cmd);
/// }
///
/// // Once per frame:
/// input_processor.update(&mut camera, delta_time);
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Last cursor position.
    cursor: CursorTracker,
    /// Bound actions whose key is currently down.
    held: HashSet<KeyAction>,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
    /// Forwarded into every rotate command.
    constrain_pitch: bool,
    /// Roll offset per second while a roll key is held.
    roll_speed: f32,
}

impl InputProcessor {
    /// Create a new processor with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(&Options::default())
    }

    /// Create a processor with custom key bindings and camera options.
    #[must_use]
    pub fn with_options(options: &Options) -> Self {
        Self {
            cursor: CursorTracker::default(),
            held: HashSet::new(),
            key_bindings: options.keybindings.clone(),
            constrain_pitch: options.camera.constrain_pitch,
            roll_speed: options.camera.roll_speed,
        }
    }

    /// Replace bindings and camera options. Held keys are released.
    pub fn set_options(&mut self, options: &Options) {
        self.key_bindings = options.keybindings.clone();
        self.constrain_pitch = options.camera.constrain_pitch;
        self.roll_speed = options.camera.roll_speed;
        self.held.clear();
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Whether the key bound to `action` is held.
    #[must_use]
    pub fn is_held(&self, action: KeyAction) -> bool {
        self.held.contains(&action)
    }

    /// Last known cursor position in physical pixels.
    #[must_use]
    pub fn cursor_position(&self) -> Option<(f32, f32)> {
        self.cursor.position().map(|p| (p.x, p.y))
    }

    /// Record a key press/release. Returns the bound action, if any.
    pub fn handle_key(
        &mut self,
        key: &str,
        pressed: bool,
    ) -> Option<KeyAction> {
        let action = self.key_bindings.lookup(key)?;
        if pressed {
            let _ = self.held.insert(action);
        } else {
            let _ = self.held.remove(&action);
        }
        Some(action)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
    ) -> Option<CameraCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(*x, *y)
            }
            InputEvent::CursorLeft => {
                self.cursor.reset();
                None
            }
            InputEvent::Scroll { delta } => {
                Some(CameraCommand::Scroll { delta: *delta })
            }
            InputEvent::Key { code, pressed } => {
                let _ = self.handle_key(code, *pressed);
                None
            }
            InputEvent::FocusLost => {
                log::debug!(
                    "focus lost, releasing {} held keys",
                    self.held.len()
                );
                self.held.clear();
                self.cursor.reset();
                None
            }
        }
    }

    /// Cursor moved: turn the position delta into a rotate command.
    ///
    /// Screen `y` grows downward, so moving the mouse up pitches up; moving
    /// it right turns right (negative yaw).
    fn handle_cursor_moved(
        &mut self,
        x: f32,
        y: f32,
    ) -> Option<CameraCommand> {
        let delta = self.cursor.moved(x, y)?;
        if delta.x == 0.0 && delta.y == 0.0 {
            return None;
        }
        Some(CameraCommand::Rotate {
            xoffset: -delta.x,
            yoffset: -delta.y,
            zspin: 0.0,
            constrain_pitch: self.constrain_pitch,
        })
    }

    /// Commands for the keys held during a frame of `delta_time` seconds.
    #[must_use]
    pub fn frame_commands(&self, delta_time: f32) -> Vec<CameraCommand> {
        let mut commands: Vec<CameraCommand> = Movement::ALL
            .into_iter()
            .filter(|&m| self.is_held(KeyAction::from(m)))
            .map(|movement| CameraCommand::Move {
                movement,
                delta_time,
            })
            .collect();

        let roll = match (
            self.is_held(KeyAction::RollRight),
            self.is_held(KeyAction::RollLeft),
        ) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        };
        if roll != 0.0 && delta_time != 0.0 {
            commands.push(CameraCommand::Rotate {
                xoffset: 0.0,
                yoffset: 0.0,
                zspin: roll * self.roll_speed * delta_time,
                constrain_pitch: self.constrain_pitch,
            });
        }
        commands
    }

    /// Apply this frame's held-key commands to `camera`.
    pub fn update<O: Orientation>(
        &self,
        camera: &mut Camera<O>,
        delta_time: f32,
    ) {
        for command in self.frame_commands(delta_time) {
            camera.execute(command);
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    const EPS: f32 = 1e-4;

    fn key(code: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            code: code.to_owned(),
            pressed,
        }
    }

    fn cursor(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    #[test]
    fn first_cursor_event_does_not_rotate() {
        let mut input = InputProcessor::new();
        assert_eq!(input.handle_event(&cursor(400.0, 300.0)), None);
        assert_eq!(input.cursor_position(), Some((400.0, 300.0)));
    }

    #[test]
    fn cursor_delta_becomes_rotation() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(&cursor(400.0, 300.0));
        let cmd = input.handle_event(&cursor(410.0, 295.0));
        assert_eq!(
            cmd,
            Some(CameraCommand::Rotate {
                xoffset: -10.0,
                yoffset: 5.0,
                zspin: 0.0,
                constrain_pitch: true,
            })
        );
    }

    #[test]
    fn mouse_right_turns_right_and_mouse_up_looks_up() {
        let mut input = InputProcessor::new();
        let mut camera = Camera::default();
        let _ = input.handle_event(&cursor(0.0, 0.0));
        let cmd = input.handle_event(&cursor(500.0, -500.0)).unwrap();
        camera.execute(cmd);
        assert!(camera.front().x > 0.0);
        assert!(camera.front().y > 0.0);
    }

    #[test]
    fn cursor_left_reseeds_tracker() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(&cursor(0.0, 0.0));
        let _ = input.handle_event(&InputEvent::CursorLeft);
        assert_eq!(input.handle_event(&cursor(900.0, 900.0)), None);
    }

    #[test]
    fn scroll_passes_through() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(&InputEvent::Scroll { delta: -2.0 }),
            Some(CameraCommand::Scroll { delta: -2.0 })
        );
    }

    #[test]
    fn held_keys_move_every_frame() {
        let mut input = InputProcessor::new();
        let mut camera = Camera::default();
        let _ = input.handle_event(&key("KeyW", true));
        let _ = input.handle_event(&key("KeyD", true));

        input.update(&mut camera, 1.0);
        input.update(&mut camera, 1.0);
        let expected = Vec3::new(5.0, 0.0, -5.0);
        assert!(camera.position().abs_diff_eq(expected, EPS));

        let _ = input.handle_event(&key("KeyW", false));
        let _ = input.handle_event(&key("KeyD", false));
        input.update(&mut camera, 1.0);
        assert!(camera.position().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut input = InputProcessor::new();
        assert_eq!(input.handle_key("KeyZ", true), None);
        assert!(input.frame_commands(1.0).is_empty());
    }

    #[test]
    fn roll_keys_produce_spin() {
        let mut input = InputProcessor::new();
        let _ = input.handle_key("KeyE", true);
        let commands = input.frame_commands(0.5);
        assert_eq!(
            commands,
            vec![CameraCommand::Rotate {
                xoffset: 0.0,
                yoffset: 0.0,
                zspin: 3000.0,
                constrain_pitch: true,
            }]
        );

        // Opposing roll keys cancel.
        let _ = input.handle_key("KeyQ", true);
        assert!(input.frame_commands(0.5).is_empty());
    }

    #[test]
    fn focus_loss_releases_keys() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(&key("Space", true));
        assert!(input.is_held(KeyAction::MoveUp));
        let _ = input.handle_event(&InputEvent::FocusLost);
        assert!(!input.is_held(KeyAction::MoveUp));
        assert!(input.frame_commands(1.0).is_empty());
    }

    #[test]
    fn options_drive_bindings_and_pitch_constraint() {
        let mut options = Options::default();
        options.camera.constrain_pitch = false;
        options.keybindings.bind(KeyAction::MoveForward, "ArrowUp");

        let mut input = InputProcessor::with_options(&options);
        let action = input.handle_key("ArrowUp", true);
        assert_eq!(action, Some(KeyAction::MoveForward));
        let _ = input.handle_event(&cursor(0.0, 0.0));
        let cmd = input.handle_event(&cursor(0.0, 1.0));
        assert!(matches!(
            cmd,
            Some(CameraCommand::Rotate {
                constrain_pitch: false,
                ..
            })
        ));
    }

    #[test]
    fn set_options_releases_held_keys_and_swaps_bindings() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(&key("KeyW", true));
        let _ = input.handle_event(&key("KeyE", true));
        assert!(input.is_held(KeyAction::MoveForward));
        assert!(!input.frame_commands(1.0).is_empty());

        let mut options = Options::default();
        options.camera.roll_speed = 100.0;
        options.keybindings.bind(KeyAction::MoveForward, "ArrowUp");
        input.set_options(&options);

        assert!(!input.is_held(KeyAction::MoveForward));
        assert!(!input.is_held(KeyAction::RollRight));
        assert!(input.frame_commands(1.0).is_empty());

        let bindings = input.key_bindings();
        assert_eq!(bindings.lookup("ArrowUp"), Some(KeyAction::MoveForward));
        assert_eq!(bindings.lookup("KeyW"), None);
        assert_eq!(bindings.lookup("KeyE"), Some(KeyAction::RollRight));

        // New roll speed applies once the key is pressed again.
        let _ = input.handle_key("KeyE", true);
        assert_eq!(
            input.frame_commands(0.5),
            vec![CameraCommand::Rotate {
                xoffset: 0.0,
                yoffset: 0.0,
                zspin: 50.0,
                constrain_pitch: true,
            }]
        );
    }
}
