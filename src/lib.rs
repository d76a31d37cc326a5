use std::error::Error as StdError;
use std::fmt;

mod classify;
mod detail;
mod dom;
mod html;
mod section;
mod tree;


use dom::{Dom, NodeId};
pub use tree::TreeIcons;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    HtmlParse(String),
    NodeNotFound(String),
    AssertionFailed {
        id: String,
        expected: String,
        actual: String,
        dom_snippet: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HtmlParse(msg) => write!(f, "html parse error: {msg}"),
            Self::NodeNotFound(id) => write!(f, "node not found: #{id}"),
            Self::AssertionFailed {
                id,
                expected,
                actual,
                dom_snippet,
            } => write!(
                f,
                "assertion failed for #{id}: expected {expected}, actual {actual}, snippet {dom_snippet}"
            ),
        }
    }
}

impl StdError for Error {}

#[derive(Debug)]
pub struct Page {
    dom: Dom,
    icons: TreeIcons,
    warnings: Vec<String>,
}

impl Page {
    pub fn from_html(html: &str) -> Result<Self> {
        Self::from_html_with_icons(html, TreeIcons::default())
    }

    pub fn from_html_with_icons(html: &str, icons: TreeIcons) -> Result<Self> {
        let dom = html::parse(html)?;
        Ok(Self {
            dom,
            icons,
            warnings: Vec::new(),
        })
    }

    pub fn icons(&self) -> &TreeIcons {
        &self.icons
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    pub fn init_page(&mut self) {
        self.collapse_all_details();
        self.collapse_open_expanded_sections();
        self.reveal_section_toggles();
    }

    pub fn has_class(&self, id: &str, token: &str) -> Result<bool> {
        let node = self.require_node(id)?;
        Ok(self
            .dom
            .element(node)
            .is_some_and(|element| classify::has_class(element, token)))
    }

    pub fn child_ids_with_class(&self, id: &str, token: &str) -> Result<Vec<String>> {
        let node = self.require_node(id)?;
        Ok(classify::children_with_class(&self.dom, node, token)
            .into_iter()
            .map(|child| self.dom.attr(child, "id").unwrap_or_default())
            .collect())
    }

    pub fn display(&self, id: &str) -> Result<String> {
        let node = self.require_node(id)?;
        Ok(self.dom.display(node))
    }

    pub fn is_expanded(&self, id: &str) -> Result<bool> {
        Ok(self.display(id)? != "none")
    }

    pub fn indicator_src(&self, id: &str) -> Result<String> {
        let image_id = format!("{id}{}", tree::INDICATOR_ID_SUFFIX);
        let node = self.require_node(&image_id)?;
        Ok(self.dom.attr(node, "src").unwrap_or_default())
    }

    pub fn toggle_glyph(&self, id: &str) -> Result<String> {
        let toggle_id = format!("{}{id}", section::TOGGLE_ID_PREFIX);
        let node = self.require_node(&toggle_id)?;
        Ok(self.dom.first_text(node).unwrap_or_default())
    }

    pub fn text(&self, id: &str) -> Result<String> {
        let node = self.require_node(id)?;
        Ok(self.dom.text_content(node))
    }

    pub fn dump_dom(&self, id: &str) -> Result<String> {
        let node = self.require_node(id)?;
        Ok(self.dom.dump_node(node))
    }

    pub fn assert_exists(&self, id: &str) -> Result<()> {
        self.require_node(id)?;
        Ok(())
    }

    pub fn assert_expanded(&self, id: &str) -> Result<()> {
        let actual = self.display(id)?;
        if actual == "none" {
            return Err(Error::AssertionFailed {
                id: id.to_string(),
                expected: "expanded".to_string(),
                actual: format!("display: {actual}"),
                dom_snippet: self.dump_dom(id)?,
            });
        }
        Ok(())
    }

    pub fn assert_collapsed(&self, id: &str) -> Result<()> {
        let actual = self.display(id)?;
        if actual != "none" {
            return Err(Error::AssertionFailed {
                id: id.to_string(),
                expected: "collapsed".to_string(),
                actual: format!("display: {actual}"),
                dom_snippet: self.dump_dom(id)?,
            });
        }
        Ok(())
    }

    fn require_node(&self, id: &str) -> Result<NodeId> {
        self.dom
            .by_id(id)
            .ok_or_else(|| Error::NodeNotFound(id.to_string()))
    }

    // Widget operations never raise on a missing node: the toggle control on a
    // live page must stay inert rather than break the page. Every miss is still
    // recorded so tests and embedders can see it.
    pub(crate) fn find_node(&mut self, what: &str, id: &str) -> Option<NodeId> {
        match self.dom.by_id(id) {
            Some(node) => Some(node),
            None => {
                self.warn_missing(what, id);
                None
            }
        }
    }

    pub(crate) fn warn_missing(&mut self, what: &str, id: &str) {
        self.warn(format!("{what} not found: #{id}"));
    }

    pub(crate) fn warn(&mut self, message: String) {
        log::warn!("{message}");
        self.warnings.push(message);
    }
}
