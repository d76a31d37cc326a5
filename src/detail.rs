use crate::Page;
use crate::classify::{children_with_class, first_child_with_class, has_class};

const CLASS_COLLAPSIBLE: &str = "collapsible";
const CLASS_COLLAPSED: &str = "collapsed";
const CLASS_EXPANDED: &str = "expanded";
const CLASS_COLLAPSE_TOGGLE: &str = "collapse-toggle";

// Declaration detail blocks: a collapsible div whose immediate children are
// classed "collapsed" (summary shown while collapsed), "expanded" (the full
// documentation), and a "collapse-toggle" control.
impl Page {
    pub fn expand_detail(&mut self, id: &str) -> bool {
        let Some(block) = self.find_node("detail block", id) else {
            return false;
        };

        for child in children_with_class(&self.dom, block, CLASS_COLLAPSED) {
            self.dom.set_display(child, "none");
        }
        for child in children_with_class(&self.dom, block, CLASS_EXPANDED) {
            self.dom.set_display(child, "block");
        }

        let Some(toggle) = first_child_with_class(&self.dom, block, CLASS_COLLAPSE_TOGGLE) else {
            self.warn_missing("collapse toggle", id);
            return false;
        };
        self.dom.set_display(toggle, "block");
        true
    }

    pub fn collapse_detail(&mut self, id: &str) -> bool {
        let Some(block) = self.find_node("detail block", id) else {
            return false;
        };

        for child in children_with_class(&self.dom, block, CLASS_EXPANDED) {
            self.dom.set_display(child, "none");
        }

        let Some(toggle) = first_child_with_class(&self.dom, block, CLASS_COLLAPSE_TOGGLE) else {
            self.warn_missing("collapse toggle", id);
            return false;
        };
        self.dom.set_display(toggle, "none");

        for child in children_with_class(&self.dom, block, CLASS_COLLAPSED) {
            self.dom.set_display(child, "block");
        }
        true
    }

    pub fn collapse_all_details(&mut self) -> usize {
        let divs = self.dom.elements_by_tag(self.dom.root, "div");
        let mut collapsed = 0usize;
        for div in divs {
            let id = match self.dom.element(div) {
                Some(element) if has_class(element, CLASS_COLLAPSIBLE) => {
                    element.attrs.get("id").cloned()
                }
                _ => continue,
            };
            let Some(id) = id else {
                self.warn("collapsible block without an id attribute".to_string());
                continue;
            };
            if self.collapse_detail(&id) {
                collapsed += 1;
            }
        }
        collapsed
    }
}
