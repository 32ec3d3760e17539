//! Pointer state for the viewer.
//!
//! The `Input` struct turns raw window events into the little the host needs:
//! where the pointer is and whether it is over the window. The simulation never reads the pointer directly; the
//! [`NavBar`](crate::nav::NavBar) decides what a position means.

use glam::Vec2;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<WinitMouseButton> for MouseButton {
    fn from(btn: WinitMouseButton) -> Self {
        match btn {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Left, // Default for other buttons
        }
    }
}

/// What an event changed, for the host to react to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved(Vec2),
    Pressed(MouseButton, Vec2),
    Left,
}

/// Pointer position in surface pixels.
#[derive(Debug, Default)]
pub struct Input {
    position: Option<Vec2>,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known pointer position, `None` while outside the window.
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Record a pointer move.
    pub fn move_to(&mut self, position: Vec2) -> PointerEvent {
        self.position = Some(position);
        PointerEvent::Moved(position)
    }

    /// Record the pointer leaving the window.
    pub fn leave(&mut self) -> PointerEvent {
        self.position = None;
        PointerEvent::Left
    }

    /// Record a button transition. Returns an event only for presses with a
    /// known pointer position.
    pub fn button(&self, button: MouseButton, state: ElementState) -> Option<PointerEvent> {
        match state {
            ElementState::Pressed => self.position.map(|pos| PointerEvent::Pressed(button, pos)),
            ElementState::Released => None,
        }
    }

    /// Process a window event.
    pub fn handle_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(self.move_to(Vec2::new(position.x as f32, position.y as f32)))
            }
            WindowEvent::CursorLeft { .. } => Some(self.leave()),
            WindowEvent::MouseInput { state, button, .. } => self.button((*button).into(), *state),
            _ => None,
        }
    }
}
