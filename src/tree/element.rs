//! Base element type for the in-memory XML tree.
//!
//! An [`Element`] owns its name, its attributes in document order, the text
//! that precedes its first child, the tail text that follows its own end tag,
//! and its child elements. Mixed content is represented the same way the
//! Python ElementTree family does it, which keeps whitespace handling local
//! to each element.

/// A single XML element and everything nested beneath it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    tail: String,
    children: Vec<Element>,
}

impl Element {
    /// Create a new, empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute setter
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder-style text setter
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builder-style child appender
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Get the tag name of this element
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in document order
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Get attribute value by name
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Get numeric attribute value
    pub fn get_numeric_attribute(&self, name: &str) -> Option<f64> {
        self.get_attribute(name).and_then(|s| s.trim().parse().ok())
    }

    /// Check if element has attribute
    pub fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute(name).is_some()
    }

    /// Set attribute value.
    ///
    /// An existing attribute keeps its position; a new one is appended.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => *slot = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    /// Set attribute value at a given position, moving it if it already exists.
    ///
    /// Positions past the end append.
    pub fn insert_attribute(&mut self, index: usize, name: &str, value: impl Into<String>) {
        self.remove_attribute(name);
        let index = index.min(self.attributes.len());
        self.attributes.insert(index, (name.to_string(), value.into()));
    }

    /// Remove attribute, returning its previous value
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let position = self.attributes.iter().position(|(key, _)| key == name)?;
        Some(self.attributes.remove(position).1)
    }

    /// Replace the whole attribute list in one step.
    pub fn replace_attributes<I, K, V>(&mut self, attributes: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes = attributes
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
    }

    /// Text before the first child (or the whole content of a leaf)
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the text content of this element
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Text after this element's end tag, before the next sibling
    pub fn tail(&self) -> &str {
        &self.tail
    }

    /// Set the tail text of this element
    pub fn set_tail(&mut self, tail: impl Into<String>) {
        self.tail = tail.into();
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub(crate) fn push_tail(&mut self, text: &str) {
        self.tail.push_str(text);
    }

    /// Get child elements
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Get mutable child elements
    pub fn children_mut(&mut self) -> &mut Vec<Element> {
        &mut self.children
    }

    /// Whether this element has at least one child
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Add a child element
    pub fn add_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Find the first element matching a `/`-separated path of tag names,
    /// relative to this element.
    ///
    /// Every candidate at each level is searched, so `asset/unit` finds the
    /// unit under whichever `asset` child holds one.
    ///
    /// # Examples
    ///
    /// ```
    /// use colladoc::tree::Element;
    ///
    /// let root = Element::new("COLLADA")
    ///     .with_child(
    ///         Element::new("asset").with_child(Element::new("up_axis").with_text("Y_UP")),
    ///     );
    /// assert_eq!(root.find("asset/up_axis").map(|e| e.text()), Some("Y_UP"));
    /// assert!(root.find("asset/unit").is_none());
    /// ```
    pub fn find(&self, path: &str) -> Option<&Element> {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return Some(self);
        }
        let (head, rest) = path.split_once('/').unwrap_or((path, ""));

        self.children
            .iter()
            .filter(|c| c.name == head)
            .find_map(|c| c.find(rest))
    }

    /// Mutable variant of [`Element::find`]
    pub fn find_mut(&mut self, path: &str) -> Option<&mut Element> {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return Some(self);
        }
        let (head, rest) = path.split_once('/').unwrap_or((path, ""));

        for child in self.children.iter_mut().filter(|c| c.name == head) {
            if let Some(found) = child.find_mut(rest) {
                return Some(found);
            }
        }
        None
    }

    /// Visit this element and all descendants depth-first
    pub fn walk_mut(&mut self, visit: &mut impl FnMut(&mut Element, usize)) {
        self.walk_mut_at(visit, 0);
    }

    fn walk_mut_at(&mut self, visit: &mut impl FnMut(&mut Element, usize), depth: usize) {
        visit(self, depth);
        for child in &mut self.children {
            child.walk_mut_at(visit, depth + 1);
        }
    }
}
