use crate::Page;
use crate::classify::{first_child_with_class, has_class};

pub(crate) const TOGGLE_ID_PREFIX: &str = "toggle_";

const GLYPH_OPEN: &str = "-";
const GLYPH_CLOSED: &str = "+";

// Body sections: the section body is hidden/shown and the linked toggle
// control's text glyph tracks the state. Lookups and writes happen in the
// same order the page scripts performed them, so a missing toggle abandons
// the call after the section write, never before.
impl Page {
    pub fn expand_section(&mut self, id: &str) -> bool {
        let Some(section) = self.find_node("section", id) else {
            return false;
        };
        self.dom.set_display(section, "block");

        let toggle_id = format!("{TOGGLE_ID_PREFIX}{id}");
        let Some(toggle) = self.find_node("section toggle", &toggle_id) else {
            return false;
        };
        self.dom.set_first_text(toggle, GLYPH_OPEN);
        true
    }

    pub fn collapse_section(&mut self, id: &str) -> bool {
        let Some(section) = self.find_node("section", id) else {
            return false;
        };
        self.dom.set_display(section, "none");

        let toggle_id = format!("{TOGGLE_ID_PREFIX}{id}");
        let Some(toggle) = self.find_node("section toggle", &toggle_id) else {
            return false;
        };
        self.dom.set_first_text(toggle, GLYPH_CLOSED);
        self.dom.set_display(toggle, "inline");
        true
    }

    pub fn toggle_section(&mut self, id: &str) -> bool {
        let Some(section) = self.find_node("section", id) else {
            return false;
        };
        let toggle_id = format!("{TOGGLE_ID_PREFIX}{id}");
        let Some(toggle) = self.find_node("section toggle", &toggle_id) else {
            return false;
        };

        if self.dom.display(section) == "none" {
            self.dom.set_display(section, "block");
            self.dom.set_first_text(toggle, GLYPH_OPEN);
        } else {
            self.dom.set_display(section, "none");
            self.dom.set_first_text(toggle, GLYPH_CLOSED);
        }
        true
    }

    pub fn collapse_expanded_sections(&mut self) -> usize {
        let divs = self.dom.elements_by_tag(self.dom.root, "div");
        let mut collapsed = 0usize;
        for div in divs {
            let id = match self.dom.element(div) {
                Some(element) if has_class(element, "expanded") => {
                    element.attrs.get("id").cloned()
                }
                _ => continue,
            };
            let Some(id) = id else {
                continue;
            };
            if self.collapse_section(&id) {
                collapsed += 1;
            }
        }
        collapsed
    }

    // Page-load pass: collapse body sections that the generated markup left
    // expanded by default. Blocks already hidden by the detail pass (the
    // expanded children of a collapsed detail block) are left alone, so
    // their phantom toggle controls are never looked up.
    pub(crate) fn collapse_open_expanded_sections(&mut self) -> usize {
        let divs = self.dom.elements_by_tag(self.dom.root, "div");
        let mut collapsed = 0usize;
        for div in divs {
            let id = match self.dom.element(div) {
                Some(element) if has_class(element, "expanded") => {
                    element.attrs.get("id").cloned()
                }
                _ => continue,
            };
            let Some(id) = id else {
                continue;
            };
            if self.dom.display(div) == "none" {
                continue;
            }
            if self.collapse_section(&id) {
                collapsed += 1;
            }
        }
        collapsed
    }

    pub fn reveal_section_toggles(&mut self) -> usize {
        let divs = self.dom.elements_by_tag(self.dom.root, "div");
        let mut revealed = 0usize;
        for div in divs {
            if !self
                .dom
                .element(div)
                .is_some_and(|element| has_class(element, "heading"))
            {
                continue;
            }
            if let Some(toggle) = first_child_with_class(&self.dom, div, "toggle") {
                self.dom.set_display(toggle, "inline");
                revealed += 1;
            }
        }
        revealed
    }
}
