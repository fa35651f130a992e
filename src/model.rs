//! Documentation tree model.
//!
//! Interprets a raw JSON document as a navigable tree. Each object's keys
//! are partitioned by the reserved `__` prefix: metadata keys describe the
//! current node, every other key names a child node. The partition happens
//! here and only here; the resolver and renderers never inspect key
//! prefixes.
//!
//! The tree is built once per load and read-only afterwards. Malformed
//! input never aborts the build: a non-object value where an object was
//! expected becomes an empty node, and null or mistyped fields fall back
//! to their type defaults.

use indexmap::IndexMap;
use serde_json::Value;

/// Reserved prefix marking metadata keys in the document.
pub const META_PREFIX: &str = "__";

/// A package, module, or class grouping in the documentation tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocNode {
    /// Dotted fully-qualified name; derived from the key path at build
    /// time, which makes it unique per node by construction.
    pub canonical: String,
    /// Source file path, metadata only. Empty when the document omits it.
    pub filename: String,
    /// Documented classes at this node, in document order.
    pub classes: IndexMap<String, ClassDoc>,
    /// Module-level functions at this node, in document order.
    pub functions: IndexMap<String, FunctionDoc>,
    /// Module-level values at this node, in document order.
    pub values: IndexMap<String, ValueDoc>,
    /// Child nodes, in document key order.
    pub children: IndexMap<String, DocNode>,
}

impl DocNode {
    /// A node with no children is a valid leaf, documented or not.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// True when the node carries any documentation entries of its own.
    pub fn has_docs(&self) -> bool {
        !self.classes.is_empty() || !self.functions.is_empty() || !self.values.is_empty()
    }
}

/// A documented class: docstring plus its methods.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassDoc {
    pub name: String,
    pub docstring: String,
    pub methods: IndexMap<String, FunctionDoc>,
}

/// A documented function or method.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunctionDoc {
    pub name: String,
    /// Formatted signature text, e.g. `(self, key: str)`.
    pub args: String,
    pub docstring: String,
}

/// A documented module-level value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueDoc {
    pub name: String,
    pub docstring: String,
}

/// Build the documentation tree from a raw JSON document.
pub fn build_tree(raw: &Value) -> DocNode {
    build_node(raw, String::new())
}

fn build_node(raw: &Value, canonical: String) -> DocNode {
    let mut node = DocNode {
        canonical,
        ..DocNode::default()
    };

    // Non-object where an object was expected: an empty node, not an error.
    let Some(object) = raw.as_object() else {
        return node;
    };

    for (key, value) in object {
        match key.strip_prefix(META_PREFIX) {
            Some(meta_key) => apply_metadata(&mut node, meta_key, value),
            None => {
                let child_canonical = join_canonical(&node.canonical, key);
                node.children
                    .insert(key.clone(), build_node(value, child_canonical));
            }
        }
    }

    node
}

fn join_canonical(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn apply_metadata(node: &mut DocNode, key: &str, value: &Value) {
    match key {
        "filename" => node.filename = str_or_empty(value),
        "classes" => node.classes = map_entries(value, parse_class),
        "functions" => node.functions = map_entries(value, parse_function),
        "values" => node.values = map_entries(value, parse_value),
        // `canonical` is derived from the key path; a stored copy is
        // redundant and not consulted. Unknown metadata keys are ignored.
        _ => {}
    }
}

fn parse_class(name: &str, value: &Value) -> ClassDoc {
    ClassDoc {
        name: name_or_key(value, name),
        docstring: str_or_empty(field(value, "docstring")),
        methods: map_entries(field(value, "methods"), parse_function),
    }
}

fn parse_function(name: &str, value: &Value) -> FunctionDoc {
    FunctionDoc {
        name: name_or_key(value, name),
        args: str_or_empty(field(value, "args")),
        docstring: str_or_empty(field(value, "docstring")),
    }
}

fn parse_value(name: &str, value: &Value) -> ValueDoc {
    ValueDoc {
        name: name_or_key(value, name),
        docstring: str_or_empty(field(value, "docstring")),
    }
}

fn map_entries<T>(value: &Value, parse: impl Fn(&str, &Value) -> T) -> IndexMap<String, T> {
    match value.as_object() {
        Some(map) => map.iter().map(|(k, v)| (k.clone(), parse(k, v))).collect(),
        None => IndexMap::new(),
    }
}

fn field<'a>(value: &'a Value, key: &str) -> &'a Value {
    value.get(key).unwrap_or(&Value::Null)
}

/// The map key names the entry; a `name` field, when present and a
/// string, wins.
fn name_or_key(value: &Value, key: &str) -> String {
    match field(value, "name").as_str() {
        Some(name) => name.to_string(),
        None => key.to_string(),
    }
}

/// Null, absent, and mistyped string fields all normalize to empty.
fn str_or_empty(value: &Value) -> String {
    value.as_str().unwrap_or_default().to_string()
}
