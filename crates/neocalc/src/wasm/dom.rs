//! Mock DOM for keypad testing
//!
//! A small stand-in for the browser document: elements with classes and
//! attributes, a `.screen`, one `.key` button per key token, and an event
//! log. Lets the keypad wiring be exercised without web-sys.

use std::collections::HashMap;

use super::keypad::WasmKeypad;

/// Class carried by every keypad button
pub const KEY_CLASS: &str = "key";
/// Class of the display element
pub const SCREEN_CLASS: &str = "screen";
/// Class added to a button while its press animation runs
pub const ACTIVE_CLASS: &str = "active";
/// Attribute holding a button's key token
pub const DATA_KEY: &str = "data-key";
/// Transition property that ends a press animation
pub const PRESS_TRANSITION: &str = "transform";
/// Element ID of the screen
pub const SCREEN_ID: &str = "screen";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content.clear();
        self.text_content.push_str(text);
    }

    /// Adds a class
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Keyboard `keydown` on the window
    KeyDown {
        /// `KeyboardEvent.key`
        key: String,
    },
    /// Pointer click on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// A CSS transition finished on an element
    TransitionEnd {
        /// The ID of the element
        element_id: String,
        /// `TransitionEvent.propertyName`
        property: String,
    },
}

impl DomEvent {
    /// Creates a keydown event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }

    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a transitionend event
    #[must_use]
    pub fn transition_end(element_id: &str, property: &str) -> Self {
        Self::TransitionEnd {
            element_id: element_id.to_string(),
            property: property.to_string(),
        }
    }
}

/// Mock document holding the calculator widget
#[derive(Debug, Clone, Default)]
pub struct MockDom {
    /// Elements by ID
    elements: HashMap<String, DomElement>,
    /// Element IDs in document order
    order: Vec<String>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty document
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator widget: a `.screen` showing `"0"` followed by
    /// the keypad buttons
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();
        dom.register_element(
            DomElement::new("div")
                .with_id(SCREEN_ID)
                .with_class(SCREEN_CLASS)
                .with_text("0"),
        );
        for button in WasmKeypad::new().buttons() {
            dom.register_element(button.to_element());
        }
        dom
    }

    /// Registers an element; elements without an ID are not addressable
    pub fn register_element(&mut self, element: DomElement) {
        if element.id.is_empty() {
            return;
        }
        if !self.elements.contains_key(&element.id) {
            self.order.push(element.id.clone());
        }
        self.elements.insert(element.id.clone(), element);
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Number of registered elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when no elements are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All elements carrying `class`, in document order
    pub fn query_all<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a DomElement> + 'a {
        self.order
            .iter()
            .filter_map(|id| self.elements.get(id))
            .filter(move |element| element.has_class(class))
    }

    /// First element carrying `class`
    #[must_use]
    pub fn query<'a>(&'a self, class: &'a str) -> Option<&'a DomElement> {
        self.query_all(class).next()
    }

    /// The `.key` button whose `data-key` equals `token`
    #[must_use]
    pub fn key_button(&self, token: &str) -> Option<&DomElement> {
        self.query_all(KEY_CLASS)
            .find(|element| element.get_attr(DATA_KEY) == Some(token))
    }

    /// Text of the `.screen` element
    #[must_use]
    pub fn screen_text(&self) -> Option<&str> {
        self.query(SCREEN_CLASS).map(|e| e.text_content.as_str())
    }

    /// Replaces the text of the `.screen` element
    pub fn set_screen_text(&mut self, text: &str) {
        self.set_element_text(SCREEN_ID, text);
    }

    /// Records an event and applies its DOM-level effect.
    ///
    /// Only `transitionend` on `transform` changes the document itself (it
    /// ends the press highlight); keydown and click effects belong to
    /// whoever listens for them.
    pub fn dispatch_event(&mut self, event: DomEvent) {
        if let DomEvent::TransitionEnd {
            element_id,
            property,
        } = &event
        {
            if property == PRESS_TRANSITION {
                if let Some(element) = self.elements.get_mut(element_id) {
                    element.remove_class(ACTIVE_CLASS);
                }
            }
        }
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// IDs of buttons currently highlighted
    #[must_use]
    pub fn active_keys(&self) -> Vec<&str> {
        self.query_all(ACTIVE_CLASS)
            .map(|element| element.id.as_str())
            .collect()
    }
}
