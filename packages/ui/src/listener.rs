use gloo_console::error;
use strum::{AsRefStr, Display};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Event, EventTarget};

use crate::error::{Error, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum EventType {
    Click,
    Keydown,
    Mousedown,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Capture,
    Bubble,
}

impl Phase {
    fn use_capture(self) -> bool {
        self == Self::Capture
    }
}

/// An event handler registered on an [`EventTarget`].
///
/// The handler is removed by [`EventListener::release`], or when this is
/// dropped.
pub struct EventListener {
    target: EventTarget,
    event_type: EventType,
    phase: Phase,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Events that can't be cast to `E` are ignored.
    pub fn new<E>(
        target: &EventTarget,
        event_type: EventType,
        phase: Phase,
        mut handler: impl FnMut(E) + 'static,
    ) -> Result<Self>
    where
        E: JsCast + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Ok(event) = event.dyn_into::<E>() {
                handler(event)
            }
        });

        target
            .add_event_listener_with_callback_and_bool(
                event_type.as_ref(),
                callback.as_ref().unchecked_ref(),
                phase.use_capture(),
            )
            .map_err(|e| Error::dom("Adding event listener", e))?;

        Ok(Self {
            target: target.clone(),
            event_type,
            phase,
            callback,
        })
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn release(self) {}
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let removed = self.target.remove_event_listener_with_callback_and_bool(
            self.event_type.as_ref(),
            self.callback.as_ref().unchecked_ref(),
            self.phase.use_capture(),
        );

        if let Err(e) = removed {
            error!(format!("Couldn't remove `{}` listener: {e:?}", self.event_type));
        }
    }
}
