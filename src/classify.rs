use crate::dom::{Dom, Element, NodeId};

// Class attributes hold a whitespace-separated token list; matching is on
// whole tokens, never on substrings.
pub(crate) fn has_class(element: &Element, token: &str) -> bool {
    element
        .attrs
        .get("class")
        .map(|classes| classes.split_whitespace().any(|c| c == token))
        .unwrap_or(false)
}

pub(crate) fn children_with_class(dom: &Dom, parent: NodeId, token: &str) -> Vec<NodeId> {
    dom.children(parent)
        .iter()
        .copied()
        .filter(|child| {
            dom.element(*child)
                .is_some_and(|element| has_class(element, token))
        })
        .collect()
}

pub(crate) fn first_child_with_class(dom: &Dom, parent: NodeId, token: &str) -> Option<NodeId> {
    dom.children(parent)
        .iter()
        .copied()
        .find(|child| {
            dom.element(*child)
                .is_some_and(|element| has_class(element, token))
        })
}
