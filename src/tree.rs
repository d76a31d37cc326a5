use crate::Page;
use crate::dom::NodeId;

pub(crate) const TREE_ID_PREFIX: &str = "tree";
pub(crate) const INDICATOR_ID_SUFFIX: &str = "_img";

// Icon assets for tree indicators, passed explicitly instead of the preloaded
// page-global images the generated markup used to carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeIcons {
    pub open_src: String,
    pub closed_src: String,
}

impl TreeIcons {
    pub fn new(open_src: impl Into<String>, closed_src: impl Into<String>) -> Self {
        Self {
            open_src: open_src.into(),
            closed_src: closed_src.into(),
        }
    }
}

impl Default for TreeIcons {
    fn default() -> Self {
        Self::new("tree_open.png", "tree_close.png")
    }
}

impl Page {
    pub fn toggle_tree_node(&mut self, id: &str) -> bool {
        let Some((section, image)) = self.tree_node_pair(id) else {
            return false;
        };

        if self.dom.display(section) == "none" {
            self.expand_tree_node(section, image);
        } else {
            self.collapse_tree_node(section, image);
        }
        true
    }

    pub fn expand_tree(&mut self, container_id: &str) -> usize {
        self.apply_to_tree(container_id, true)
    }

    pub fn collapse_tree(&mut self, container_id: &str) -> usize {
        self.apply_to_tree(container_id, false)
    }

    fn apply_to_tree(&mut self, container_id: &str, expand: bool) -> usize {
        let Some(container) = self.find_node("tree container", container_id) else {
            return 0;
        };

        // Collapsible sections are the container's nested list groupings,
        // numbered tree1..treeN in the generated markup.
        let bound = self.dom.elements_by_tag(container, "ul").len();
        let mut updated = 0usize;
        for index in 1..=bound {
            let id = format!("{TREE_ID_PREFIX}{index}");
            let Some((section, image)) = self.tree_node_pair(&id) else {
                continue;
            };
            if expand {
                self.expand_tree_node(section, image);
            } else {
                self.collapse_tree_node(section, image);
            }
            updated += 1;
        }
        updated
    }

    fn expand_tree_node(&mut self, section: NodeId, image: NodeId) {
        let src = self.icons.open_src.clone();
        self.dom.set_display(section, "");
        self.dom.set_attr(image, "src", &src);
    }

    fn collapse_tree_node(&mut self, section: NodeId, image: NodeId) {
        let src = self.icons.closed_src.clone();
        self.dom.set_display(section, "none");
        self.dom.set_attr(image, "src", &src);
    }

    fn tree_node_pair(&mut self, id: &str) -> Option<(NodeId, NodeId)> {
        let section = self.find_node("tree section", id)?;
        let image_id = format!("{id}{INDICATOR_ID_SUFFIX}");
        let image = self.find_node("tree indicator", &image_id)?;
        Some((section, image))
    }
}
