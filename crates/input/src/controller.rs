use gilrs::{EventType, Gilrs};
use mash_core::{InputEvent, MashError, Result};
use tracing::{info, warn};

/// Gamepad event source.
///
/// Wraps the gilrs backend and surfaces button presses and hot-plug changes
/// as typed [`InputEvent`]s.  Pulled synchronously from the main loop;
/// nothing is buffered here beyond what the backend itself queues.
pub struct ControllerInput {
    gilrs: Gilrs,
}

impl ControllerInput {
    /// Initialise the gamepad backend.
    ///
    /// Starting without a pad attached is not an error: a hot-plug event
    /// binds one later, and the session reports unbound until then.
    pub fn new() -> Result<Self> {
        let gilrs = Gilrs::new()
            .map_err(|e| MashError::Input(format!("gamepad backend init failed: {e}")))?;

        let pads: Vec<String> = gilrs
            .gamepads()
            .map(|(_, pad)| pad.name().to_string())
            .collect();
        if pads.is_empty() {
            warn!("No gamepads detected; waiting for hot-plug");
        } else {
            info!("Detected gamepads: {}", pads.join(", "));
        }

        Ok(Self { gilrs })
    }

    /// Whether at least one pad is currently attached.
    pub fn any_connected(&self) -> bool {
        self.gilrs.gamepads().next().is_some()
    }

    /// Drain pending backend events, stamping presses with `now`.
    pub fn poll(&mut self, now: u64) -> Vec<InputEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.gilrs.next_event() {
            if let Some(mapped) = translate(&event.event, now) {
                events.push(mapped);
            }
        }
        events
    }
}

/// Map a backend event to an [`InputEvent`], if it is one we care about.
///
/// Presses are stamped with poll time rather than the backend's own clock
/// so the session sees a single monotonic timeline.
fn translate(event: &EventType, now: u64) -> Option<InputEvent> {
    match event {
        EventType::ButtonPressed(..) => Some(InputEvent::Press(now)),
        EventType::Connected => Some(InputEvent::ControllerConnected),
        EventType::Disconnected => Some(InputEvent::ControllerDisconnected),
        _ => None,
    }
}
