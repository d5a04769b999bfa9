//! Owned SVG tree.
//!
//! Elements own their children. Lookups hand out borrows into the tree,
//! so the only way to change a child list is through its parent.

/// Default SVG namespace, carried by the root element and every directive.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// A child node of an element (or a prolog node of a document).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Character data, already unescaped.
    Text(String),
    CData(String),
    Comment(String),
    /// Processing instruction content (between `<?` and `?>`).
    Instruction(String),
    DocType(String),
}

impl Node {
    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(elem) => Some(elem),
            _ => None,
        }
    }

    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(elem) => Some(elem),
            _ => None,
        }
    }
}

/// An element: tag name, ordered attributes and ordered children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter.
    #[cfg(test)]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder-style child append.
    #[cfg(test)]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// `id` attribute, if any.
    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Set an attribute, replacing the value in place if the name exists.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.attrs.push((name, value)),
        }
    }

    #[inline]
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Direct element children, skipping text and comments.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(Node::as_element_mut)
    }

    /// Append a node as the last child.
    #[inline]
    pub fn append(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Concatenated direct text children, if there are any.
    #[cfg(test)]
    pub fn text(&self) -> Option<String> {
        let mut text: Option<String> = None;
        for child in &self.children {
            if let Node::Text(s) | Node::CData(s) = child {
                text.get_or_insert_with(String::new).push_str(s);
            }
        }
        text
    }

    /// Number of elements in this subtree, including `self`.
    pub fn element_count(&self) -> usize {
        1 + self
            .child_elements()
            .map(Element::element_count)
            .sum::<usize>()
    }
}

impl From<Element> for Node {
    fn from(elem: Element) -> Self {
        Self::Element(elem)
    }
}

/// A parsed document: prolog nodes plus exactly one root element.
///
/// `Clone` is a deep copy; the clone shares nothing with the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub(crate) prolog: Vec<Node>,
    pub(crate) root: Element,
}

impl Document {
    #[cfg(test)]
    pub fn new(root: Element) -> Self {
        Self {
            prolog: Vec::new(),
            root,
        }
    }

    #[inline]
    pub fn root(&self) -> &Element {
        &self.root
    }

    #[inline]
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Comments, processing instructions and doctype before the root.
    #[inline]
    pub fn prolog(&self) -> &[Node] {
        &self.prolog
    }
}

// ============================================================================
// Tests
// ============================================================================
