//! Input events: [`Msg`], [`Key`], [`MouseAction`].

use gridpath_core::Point;

/// A keyboard key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    Escape,
    Enter,
    Space,
    /// A printable character.
    Char(char),
}

/// A mouse action.
///
/// Button actions are reported both when a button goes down and while it is
/// dragged with the button held.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MouseAction {
    /// Primary (left) button.
    Main,
    /// Middle button.
    Auxiliary,
    /// Secondary (right) button.
    Secondary,
    /// Button released.
    Release,
    /// Moved without a button held.
    Move,
}

/// An input message delivered to the application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    /// A key was pressed.
    KeyDown { key: Key },
    /// A mouse event at a screen position (`row`, `col` in screen cells).
    Mouse { action: MouseAction, pos: Point },
    /// The screen was resized.
    Screen { rows: i32, cols: i32 },
    /// Sent once when the application starts.
    Init,
    /// Request to quit.
    Quit,
}

impl Msg {
    /// Convenience: a key press.
    pub fn key(key: Key) -> Self {
        Self::KeyDown { key }
    }

    /// Convenience: a mouse event.
    pub fn mouse(action: MouseAction, pos: Point) -> Self {
        Self::Mouse { action, pos }
    }
}
