//! Keypad widget controller
//!
//! Wires document events to the engine the way the browser widget does:
//! the `.screen` element is the display buffer, keyboard presses highlight
//! their button, clicks read the button's `data-key`.

use tracing::debug;

use super::dom::{DomEvent, MockDom, ACTIVE_CLASS, DATA_KEY};
use crate::config::{ConfigError, DisplayConfig};
use crate::core::{is_recognized, DisplayBuffer, Engine, Key, Rejection, Transition};

/// Calculator widget bound to a mock document
#[derive(Debug, Clone)]
pub struct WasmCalculator {
    engine: Engine,
    dom: MockDom,
}

impl Default for WasmCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmCalculator {
    /// Creates a widget with the default keypad and an 8-character screen
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            dom: MockDom::calculator(),
        }
    }

    /// Creates a widget with a custom screen
    pub fn with_config(config: DisplayConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            engine: Engine::with_config(config)?,
            dom: MockDom::calculator(),
        })
    }

    /// The underlying engine
    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The document
    #[must_use]
    pub const fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Text on the `.screen` element
    #[must_use]
    pub fn display(&self) -> &str {
        self.dom.screen_text().unwrap_or(DisplayBuffer::ZERO)
    }

    /// Dispatches an event to the document and its listeners.
    ///
    /// Returns `None` when no listener handled the event (unrecognized key,
    /// click outside a key, or a `transitionend`).
    pub fn handle_event(&mut self, event: DomEvent) -> Option<Result<Transition, Rejection>> {
        let outcome = match &event {
            DomEvent::KeyDown { key } => self.on_key_down(key),
            DomEvent::Click { element_id } => self.on_click(element_id),
            DomEvent::TransitionEnd { .. } => None,
        };
        self.dom.dispatch_event(event);
        outcome
    }

    /// Simulates a keyboard press
    pub fn key_down(&mut self, key: &str) -> Option<Result<Transition, Rejection>> {
        self.handle_event(DomEvent::key_down(key))
    }

    /// Simulates a click on an element
    pub fn click(&mut self, element_id: &str) -> Option<Result<Transition, Rejection>> {
        self.handle_event(DomEvent::click(element_id))
    }

    /// Simulates the end of a CSS transition on an element
    pub fn transition_end(&mut self, element_id: &str, property: &str) {
        let _ = self.handle_event(DomEvent::transition_end(element_id, property));
    }

    fn on_key_down(&mut self, token: &str) -> Option<Result<Transition, Rejection>> {
        if !is_recognized(token) {
            debug!(token, "keydown ignored");
            return None;
        }
        let button = self
            .dom
            .key_button(token)
            .map(|element| element.id.clone());
        if let Some(id) = button {
            if let Some(element) = self.dom.get_element_mut(&id) {
                element.add_class(ACTIVE_CLASS);
            }
        }
        Some(self.process(token))
    }

    fn on_click(&mut self, element_id: &str) -> Option<Result<Transition, Rejection>> {
        let token = self
            .dom
            .get_element(element_id)?
            .get_attr(DATA_KEY)?
            .to_string();
        Some(self.process(&token))
    }

    /// Runs a token through the engine with the screen as display buffer
    fn process(&mut self, token: &str) -> Result<Transition, Rejection> {
        let key = Key::parse(token)?;
        let mut display = DisplayBuffer::from_text(self.display());
        let outcome = self.engine.handle(key, &mut display);
        self.dom.set_screen_text(display.as_str());
        outcome
    }
}
