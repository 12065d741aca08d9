/// All notifications that can flow from the input collaborators into the
/// session.
///
/// Sources:
/// - Controller backend → `Press`, `ControllerConnected`, `ControllerDisconnected`
/// - Terminal           → `FocusGained`, `FocusLost`, `Quit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A button was pressed.  Carries the millisecond timestamp (relative to
    /// session start) assigned on arrival.
    Press(u64),

    /// A controller became available (startup detection or hot-plug).
    ControllerConnected,
    /// The bound controller went away mid-session.
    ControllerDisconnected,

    /// The terminal gained focus; the display becomes visible.
    FocusGained,
    /// The terminal lost focus; the display is hidden while aggregation
    /// keeps running.
    FocusLost,

    /// Graceful shutdown requested.
    Quit,
}
