//! Mock DOM for widget testing.
//!
//! Provides just enough of a DOM to exercise the whole widget without
//! web-sys: elements with ids, classes and text, a body element for the
//! theme class, and an event log that can be serialized for debugging.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A DOM element as the mock sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Attributes
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
    /// Creates a new element with the given tag.
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

    /// Sets the element ID.
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute.
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets text content.
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a class if not already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Adds the class if absent, removes it if present. Returns true if the
    /// class is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// Checks for a class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// UI events the widget reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// ID of the clicked element
        element_id: String,
    },
    /// Key press
    KeyDown {
        /// The key value, as `KeyboardEvent.key` reports it
        key: String,
    },
    /// Input value change
    Input {
        /// ID of the input element
        element_id: String,
        /// The new value
        value: String,
    },
}

impl DomEvent {
    /// Creates a click event.
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a key press event.
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }

    /// Creates an input event.
    #[must_use]
    pub fn input(element_id: &str, value: &str) -> Self {
        Self::Input {
            element_id: element_id.to_string(),
            value: value.to_string(),
        }
    }
}

/// In-memory DOM standing in for the browser document.
#[derive(Debug)]
pub struct MockDom {
    /// The body element; carries the theme class
    pub body: DomElement,
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty mock document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            body: DomElement::new("body"),
            elements: HashMap::new(),
            event_history: Vec::new(),
        }
    }

    /// Creates the calculator widget document: display, theme toggle with
    /// its icon, and a copy button with its icon.
    #[must_use]
    pub fn widget() -> Self {
        let mut dom = Self::new();

        let display = DomElement::new("input")
            .with_id("display")
            .with_attr("type", "text")
            .with_attr("readonly", "true")
            .with_text("0");

        let theme_btn = DomElement::new("button")
            .with_id("theme-toggle")
            .with_class("icon-btn");
        let theme_icon = DomElement::new("i")
            .with_id("theme-icon")
            .with_class("fa-moon");

        let copy_btn = DomElement::new("button")
            .with_id("copy-btn")
            .with_class("icon-btn");
        let copy_icon = DomElement::new("i")
            .with_id("copy-icon")
            .with_class("fa-copy");

        dom.register_element(display);
        dom.register_element(theme_btn);
        dom.register_element(theme_icon);
        dom.register_element(copy_btn);
        dom.register_element(copy_icon);

        dom
    }

    /// Registers an element for ID lookup. Elements without an ID are
    /// silently dropped.
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID.
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID.
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Records an event in the history.
    pub fn dispatch_event(&mut self, event: DomEvent) {
        if let DomEvent::Input { element_id, value } = &event {
            if let Some(elem) = self.elements.get_mut(element_id) {
                elem.set_text(value);
            }
        }
        self.event_history.push(event);
    }

    /// The recorded event history.
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears the event history.
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Serializes the event history to JSON, for debug dumps.
    pub fn event_history_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.event_history)
    }

    /// Updates element text by ID.
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID.
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }
}
