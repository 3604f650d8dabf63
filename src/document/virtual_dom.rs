//! VirtualDocument — in-memory element tree implementing [`DocumentSurface`].
//!
//! Serves headless runs and tests. Every write bumps a mutation counter so
//! callers can verify that a reconciliation tick left the document alone.

use super::{DocumentSurface, NodeId, Selector};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Head,
    Body,
}

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    region: Region,
    attributes: BTreeMap<String, String>,
    text: String,
    style: BTreeMap<String, String>,
}

impl Element {
    fn new(tag: &str, region: Region) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            region,
            attributes: BTreeMap::new(),
            text: String::new(),
            style: BTreeMap::new(),
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.attributes
            .get("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    fn tag_matches(&self, tag: &Option<String>) -> bool {
        tag.as_deref()
            .map(|t| self.tag.eq_ignore_ascii_case(t))
            .unwrap_or(true)
    }

    fn matches(&self, selector: &Selector) -> bool {
        match selector {
            Selector::Id(id) => self.attributes.get("id").map(String::as_str) == Some(id.as_str()),
            Selector::Class(class) => self.has_class(class),
            Selector::Attribute { tag, name, value } => {
                self.tag_matches(tag)
                    && self.attributes.get(name).map(String::as_str) == Some(value.as_str())
            }
            Selector::AttributeContains { tag, name, value } => {
                // `[attr*=""]` matches nothing, as in CSS.
                !value.is_empty()
                    && self.tag_matches(tag)
                    && self
                        .attributes
                        .get(name)
                        .map(|v| v.contains(value.as_str()))
                        .unwrap_or(false)
            }
            Selector::AnyOf(selectors) => selectors.iter().any(|s| self.matches(s)),
        }
    }
}

/// In-memory document with a root style scope, a head and a body.
#[derive(Debug, Clone, Default)]
pub struct VirtualDocument {
    title: String,
    root_variables: BTreeMap<String, String>,
    body_classes: BTreeSet<String>,
    /// Live elements only. Ids come from `next_id` and are never reused.
    nodes: BTreeMap<NodeId, Element>,
    next_id: NodeId,
    mutations: u64,
}

impl VirtualDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element to the body with the given attributes. Returns its id.
    pub fn insert_body_element(&mut self, tag: &str, attributes: &[(&str, &str)]) -> NodeId {
        self.insert(tag, Region::Body, attributes)
    }

    /// Append an element to the head with the given attributes. Returns its id.
    pub fn insert_head_element(&mut self, tag: &str, attributes: &[(&str, &str)]) -> NodeId {
        self.insert(tag, Region::Head, attributes)
    }

    fn insert(&mut self, tag: &str, region: Region, attributes: &[(&str, &str)]) -> NodeId {
        let mut element = Element::new(tag, region);
        for (name, value) in attributes {
            element
                .attributes
                .insert(name.to_string(), value.to_string());
        }
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(id, element);
        self.mutations += 1;
        id
    }

    /// Number of writes performed since creation or the last reset.
    pub fn mutation_count(&self) -> u64 {
        self.mutations
    }

    pub fn reset_mutation_count(&mut self) {
        self.mutations = 0;
    }

    /// Snapshot of every root styling variable.
    pub fn root_variables(&self) -> &BTreeMap<String, String> {
        &self.root_variables
    }

    /// Number of live elements across head and body.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of live elements in the head.
    pub fn head_len(&self) -> usize {
        self.live(Region::Head).count()
    }

    fn live(&self, region: Region) -> impl Iterator<Item = (NodeId, &Element)> {
        self.nodes
            .iter()
            .filter(move |(_, el)| el.region == region)
            .map(|(id, el)| (*id, el))
    }

    fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(&node)
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(&node)
    }
}

impl DocumentSurface for VirtualDocument {
    fn set_root_variable(&mut self, name: &str, value: &str) {
        self.root_variables
            .insert(name.to_string(), value.to_string());
        self.mutations += 1;
    }

    fn root_variable(&self, name: &str) -> Option<String> {
        self.root_variables.get(name).cloned()
    }

    fn set_body_class(&mut self, class: &str, enabled: bool) {
        if enabled {
            self.body_classes.insert(class.to_string());
        } else {
            self.body_classes.remove(class);
        }
        self.mutations += 1;
    }

    fn has_body_class(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.mutations += 1;
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.live(Region::Head)
            .chain(self.live(Region::Body))
            .filter(|(_, el)| el.matches(selector))
            .map(|(id, _)| id)
            .collect()
    }

    fn append_to_head(&mut self, tag: &str) -> NodeId {
        self.insert(tag, Region::Head, &[])
    }

    fn remove(&mut self, node: NodeId) {
        if self.nodes.remove(&node).is_some() {
            self.mutations += 1;
        }
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(el) = self.element_mut(node) {
            el.attributes.insert(name.to_string(), value.to_string());
            self.mutations += 1;
        }
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.element(node)?.attributes.get(name).cloned()
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(el) = self.element_mut(node) {
            el.text = text.to_string();
            self.mutations += 1;
        }
    }

    fn text(&self, node: NodeId) -> Option<String> {
        self.element(node).map(|el| el.text.clone())
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(el) = self.element_mut(node) {
            el.style.insert(property.to_string(), value.to_string());
            self.mutations += 1;
        }
    }

    fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.element(node)?.style.get(property).cloned()
    }
}
