//! Hierarchical names such as `Company/Sales/EMEA`.

/// Default separator for [`full_name`].
pub const DEFAULT_SEPARATOR: &str = "/";

/// A named node with an optional parent.
pub trait Hierarchy {
    fn name(&self) -> &str;
    fn parent(&self) -> Option<&Self>;
}

/// Returns the node's name prefixed by all ancestor names, root first.
///
/// Uses [`DEFAULT_SEPARATOR`] when `separator` is `None`.
pub fn full_name<H: Hierarchy>(node: &H, separator: Option<&str>) -> String {
    let mut names = vec![node.name()];
    let mut current = node;
    while let Some(parent) = current.parent() {
        names.push(parent.name());
        current = parent;
    }
    names.reverse();
    names.join(separator.unwrap_or(DEFAULT_SEPARATOR))
}
