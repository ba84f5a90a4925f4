/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`CameraCommand`](crate::camera::CameraCommand)
/// values.
///
/// # Example
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(&InputEvent::CursorMoved {
///     x: 100.0,
///     y: 200.0,
/// }) {
///     camera.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (down is positive).
        y: f32,
    },
    /// Cursor left the window; the next position will not produce a jump.
    CursorLeft,
    /// Scroll wheel, positive when scrolling up/away from the user.
    Scroll {
        /// Scroll amount in lines.
        delta: f32,
    },
    /// Key pressed or released.
    Key {
        /// Physical key string in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"Space"`, `"ShiftLeft"`).
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Window lost focus; every held key is released.
    FocusLost,
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit window event, if it is one the camera cares about.
    #[must_use]
    pub fn from_window_event(
        event: &winit::event::WindowEvent,
    ) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
        use winit::keyboard::PhysicalKey;

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(Self::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                })
            }
            WindowEvent::CursorLeft { .. } => Some(Self::CursorLeft),
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                Some(Self::Scroll { delta })
            }
            WindowEvent::KeyboardInput { event, .. } => {
                match event.physical_key {
                    PhysicalKey::Code(code) => Some(Self::Key {
                        code: format!("{code:?}"),
                        pressed: event.state == ElementState::Pressed,
                    }),
                    PhysicalKey::Unidentified(_) => None,
                }
            }
            WindowEvent::Focused(false) => Some(Self::FocusLost),
            _ => None,
        }
    }
}
