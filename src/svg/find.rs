//! Element lookup by `id`.

use super::node::Element;

/// First element in document order (pre-order, `root` included) whose
/// `id` equals `id`.
///
/// Duplicate ids are not reported; the earliest match wins.
pub fn find_by_id<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id() == Some(id) {
        return Some(root);
    }
    root.child_elements().find_map(|child| find_by_id(child, id))
}

/// Mutable twin of [`find_by_id`], same traversal order.
pub fn find_by_id_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id() == Some(id) {
        return Some(root);
    }
    root.child_elements_mut()
        .find_map(|child| find_by_id_mut(child, id))
}
