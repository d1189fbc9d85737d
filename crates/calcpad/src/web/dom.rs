//! Mock DOM for the page binding
//!
//! A small element registry that stands in for a browser document, so the
//! page binding runs and is tested without web-sys.

use std::collections::HashMap;

/// Represents a DOM element
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
        self.text_content = text.to_string();
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

/// DOM events the page listens for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Window keydown event
    KeyDown {
        /// The `KeyboardEvent.key` value
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a keydown event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// Mock document: elements by id, in insertion order
#[derive(Debug, Default)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
    order: Vec<String>,
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty document
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an element for ID lookup; elements without an id are dropped
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

    /// Elements carrying `attribute`, in document order (`querySelectorAll('[attr]')`)
    pub fn query_by_attr<'a>(&'a self, attribute: &'a str) -> impl Iterator<Item = &'a DomElement> {
        self.order
            .iter()
            .filter_map(|id| self.elements.get(id))
            .filter(move |e| e.attributes.contains_key(attribute))
    }

    /// Records an event in the history
    pub fn record_event(&mut self, event: DomEvent) {
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

    /// Number of registered elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if no elements are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== DomElement tests =====

    #[test]
    fn test_element_builder() {
        let elem = DomElement::new("button")
            .with_id("btn-7")
            .with_text("7")
            .with_class("key")
            .with_attr("data-digit", "7");
        assert_eq!(elem.tag, "button");
        assert_eq!(elem.id, "btn-7");
        assert_eq!(elem.text_content, "7");
        assert!(elem.has_class("key"));
        assert_eq!(elem.get_attr("data-digit"), Some("7"));
        assert_eq!(elem.get_attr("data-action"), None);
    }

    #[test]
    fn test_element_default_is_div() {
        assert_eq!(DomElement::default().tag, "div");
    }

    #[test]
    fn test_element_classes_are_unique() {
        let mut elem = DomElement::new("div").with_class("a").with_class("a");
        assert_eq!(elem.classes.len(), 1);
        elem.remove_class("a");
        assert!(!elem.has_class("a"));
    }

    // ===== DomEvent tests =====

    #[test]
    fn test_event_constructors() {
        assert_eq!(
            DomEvent::click("btn-1"),
            DomEvent::Click {
                element_id: "btn-1".into()
            }
        );
        assert_eq!(
            DomEvent::key_down("Enter"),
            DomEvent::KeyDown { key: "Enter".into() }
        );
    }

    // ===== MockDom tests =====

    #[test]
    fn test_register_and_lookup() {
        let mut dom = MockDom::new();
        assert!(dom.is_empty());
        dom.register_element(DomElement::new("div").with_id("result").with_text("0"));
        assert_eq!(dom.len(), 1);
        assert_eq!(dom.get_element_text("result"), Some("0"));
        assert!(dom.get_element("missing").is_none());
    }

    #[test]
    fn test_register_without_id_is_ignored() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("div"));
        assert!(dom.is_empty());
    }

    #[test]
    fn test_set_element_text() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("div").with_id("expression"));
        dom.set_element_text("expression", "2 +");
        assert_eq!(dom.get_element_text("expression"), Some("2 +"));
        dom.set_element_text("missing", "x");
        assert!(dom.get_element("missing").is_none());
    }

    #[test]
    fn test_query_by_attr_keeps_document_order() {
        let mut dom = MockDom::new();
        for id in ["b", "a", "c"] {
            dom.register_element(DomElement::new("button").with_id(id).with_attr("data-digit", id));
        }
        dom.register_element(DomElement::new("button").with_id("x").with_attr("data-action", "clear"));
        let ids: Vec<&str> = dom.query_by_attr("data-digit").map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
        assert_eq!(dom.query_by_attr("data-action").count(), 1);
    }

    #[test]
    fn test_reregister_replaces_element() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("div").with_id("r").with_text("1"));
        dom.register_element(DomElement::new("div").with_id("r").with_text("2"));
        assert_eq!(dom.len(), 1);
        assert_eq!(dom.get_element_text("r"), Some("2"));
    }

    #[test]
    fn test_event_history() {
        let mut dom = MockDom::new();
        dom.record_event(DomEvent::click("btn-1"));
        dom.record_event(DomEvent::key_down("Escape"));
        assert_eq!(dom.event_history().len(), 2);
        dom.clear_event_history();
        assert!(dom.event_history().is_empty());
    }
}
