//! Browser bindings
//!
//! The page's `keydown`, `click` and `transitionend` listeners call into
//! [`BrowserCalculator`] and write the returned text to `.screen`.

use wasm_bindgen::prelude::*;

use crate::calculator::Calculator;
use crate::core::{self, Rejection};

/// Browser calculator - the WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    calculator: Calculator,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a new browser calculator
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            calculator: Calculator::new(),
        }
    }

    /// Processes a key token and returns the display
    pub fn press(&mut self, key: &str) -> String {
        if let Err(reason) = self.calculator.try_process(key) {
            log_rejection(key, &reason);
        }
        self.calculator.display().to_string()
    }

    /// Current display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    /// Flag view of the engine state as JSON
    #[wasm_bindgen(getter)]
    pub fn flags(&self) -> String {
        serde_json::to_string(&self.calculator.engine().flags())
            .unwrap_or_else(|_| "{}".to_string())
    }

    /// Resets to `"0"`
    pub fn reset(&mut self) -> String {
        self.calculator.reset();
        self.display()
    }

    /// True when the keyboard listener should handle `key` at all
    #[wasm_bindgen(js_name = isRecognized)]
    pub fn is_recognized(key: &str) -> bool {
        core::is_recognized(key)
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
fn log_rejection(key: &str, reason: &Rejection) {
    web_sys::console::debug_1(&format!("neocalc: {key:?} ignored: {reason}").into());
}

#[cfg(not(target_arch = "wasm32"))]
fn log_rejection(key: &str, reason: &Rejection) {
    tracing::debug!(key, %reason, "browser key ignored");
}

/// Initialize the calculator in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&"NeoCalc WASM initialized".into());
}
