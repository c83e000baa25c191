//! Calculator facade
//!
//! Owns one [`Engine`] and the screen it renders to. Collaborators hand it
//! raw key tokens and read the display back.

use crate::config::{ConfigError, DisplayConfig};
use crate::core::{DisplayBuffer, Engine, Key, Rejection, State, Transition};

/// A calculator instance: engine plus display
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    engine: Engine,
    display: DisplayBuffer,
}

impl Calculator {
    /// Creates a calculator with the default 8-character screen
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with a custom screen
    pub fn with_config(config: DisplayConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            engine: Engine::with_config(config)?,
            display: DisplayBuffer::new(),
        })
    }

    /// Processes one raw token and returns the display.
    ///
    /// Unrecognized tokens and rejected keys leave the display unchanged.
    pub fn process_token(&mut self, token: &str) -> &str {
        let _ = self.try_process(token);
        self.display.as_str()
    }

    /// Processes one raw token and reports what happened
    pub fn try_process(&mut self, token: &str) -> Result<Transition, Rejection> {
        let key = Key::parse(token)?;
        self.press(key)
    }

    /// Processes an already classified key
    pub fn press(&mut self, key: Key) -> Result<Transition, Rejection> {
        self.engine.handle(key, &mut self.display)
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.display.as_str()
    }

    /// The underlying engine
    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Current engine state
    #[must_use]
    pub const fn state(&self) -> State {
        self.engine.state()
    }

    /// Same as pressing `Delete`
    pub fn reset(&mut self) {
        let _ = self.press(Key::Delete);
    }
}
