//! Document surface — the DOM contract the theme applier reads and writes.

pub mod virtual_dom;

pub use virtual_dom::VirtualDocument;

/// Handle to an element owned by a [`DocumentSurface`].
pub type NodeId = usize;

// ── Selectors ──────────────────────────────────────────

/// The subset of CSS selectors the applier needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `#id`
    Id(String),
    /// `.class`
    Class(String),
    /// `tag[name="value"]` or `[name="value"]`
    Attribute {
        tag: Option<String>,
        name: String,
        value: String,
    },
    /// `tag[name*="value"]` or `[name*="value"]`
    AttributeContains {
        tag: Option<String>,
        name: String,
        value: String,
    },
    /// Selector list (`a, b`), matches elements hit by any member.
    AnyOf(Vec<Selector>),
}

impl Selector {
    pub fn id(id: &str) -> Self {
        Selector::Id(id.to_string())
    }

    pub fn class(class: &str) -> Self {
        Selector::Class(class.to_string())
    }

    pub fn attr(tag: Option<&str>, name: &str, value: &str) -> Self {
        Selector::Attribute {
            tag: tag.map(str::to_string),
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn attr_contains(tag: Option<&str>, name: &str, value: &str) -> Self {
        Selector::AttributeContains {
            tag: tag.map(str::to_string),
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

// ── Surface Trait ──────────────────────────────────────

/// A live document the theme can be projected onto.
///
/// The document root (for styling variables) and head (for injected elements)
/// always exist; implementations that cannot guarantee them must not be
/// constructed. Everything reachable through [`Selector`] is optional.
pub trait DocumentSurface: Send {
    /// Set a custom property on the root element's style.
    fn set_root_variable(&mut self, name: &str, value: &str);
    fn root_variable(&self, name: &str) -> Option<String>;

    /// Add (`enabled`) or remove a class on the body element.
    fn set_body_class(&mut self, class: &str, enabled: bool);
    fn has_body_class(&self, class: &str) -> bool;

    fn set_title(&mut self, title: &str);
    fn title(&self) -> String;

    /// All matching elements in document order.
    fn query_all(&self, selector: &Selector) -> Vec<NodeId>;

    /// First matching element.
    fn query(&self, selector: &Selector) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    /// Create a `tag` element and append it to the head.
    fn append_to_head(&mut self, tag: &str) -> NodeId;

    /// Detach an element. Unknown ids are ignored.
    fn remove(&mut self, node: NodeId);

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);
    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    fn set_text(&mut self, node: NodeId, text: &str);
    fn text(&self, node: NodeId) -> Option<String>;

    /// Set an inline style property on an element.
    fn set_style(&mut self, node: NodeId, property: &str, value: &str);
    fn style(&self, node: NodeId, property: &str) -> Option<String>;
}
