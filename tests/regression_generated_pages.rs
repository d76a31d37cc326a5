use treeview_dom::{Page, Result, TreeIcons};

const MODULE_INDEX_HTML: &str = r##"
<!DOCTYPE html>
<html>
<head>
  <title>Module Index</title>
  <link href="style.css" rel="stylesheet" type="text/css">
  <script src="html.js" type="text/javascript"></script>
</head>
<body>
<div id="nav" class="toc">
  <img id="tree1_img" src="tree_close.png" alt="">
  <a href="#module-a">Module A</a>
  <ul id="tree1" style="display: none;">
    <li>
      <img id="tree2_img" src="tree_close.png" alt="">
      <a href="#class-x">Class X</a>
      <ul id="tree2" style="display: none;">
        <li><a href="#class-x-f">f()</a></li>
        <li><a href="#class-x-g">g()</a></li>
      </ul>
    </li>
  </ul>
</div>
<div class="body">
  <div class="heading"><a id="toggle_intro" class="toggle" href="#" style="display: none;">-</a>Introduction</div>
  <div id="intro">Module A groups the core containers.</div>
  <div class="heading"><a id="toggle_history" class="toggle" href="#" style="display: none;">-</a>History</div>
  <div id="history" class="expanded">Changelog entries shown by default.</div>
  <div id="decl-x" class="collapsible">
    <div id="decl-x-summary" class="collapsed" style="display: none;">class X &hellip;</div>
    <div id="decl-x-doc" class="expanded">class X is the primary container type.</div>
    <div id="decl-x-collapse" class="collapse-toggle"><a href="#">collapse</a></div>
  </div>
</div>
</body>
</html>
"##;

#[test]
fn page_load_establishes_the_collapsed_initial_state() -> Result<()> {
    let mut page = Page::from_html(MODULE_INDEX_HTML)?;
    page.init_page();

    assert_eq!(page.display("decl-x-doc")?, "none");
    assert_eq!(page.display("decl-x-summary")?, "block");
    assert_eq!(page.display("decl-x-collapse")?, "none");
    assert_eq!(page.display("toggle_intro")?, "inline");

    // Body sections the markup ships expanded are folded away on load.
    page.assert_collapsed("history")?;
    assert_eq!(page.toggle_glyph("history")?, "+");

    // Unmarked sections stay expanded until the reader collapses them.
    page.assert_expanded("intro")?;
    assert!(page.take_warnings().is_empty());
    Ok(())
}

#[test]
fn reader_walkthrough_over_a_generated_page() -> Result<()> {
    let mut page = Page::from_html(MODULE_INDEX_HTML)?;
    page.init_page();

    page.expand_detail("decl-x");
    assert_eq!(page.display("decl-x-doc")?, "block");
    assert_eq!(page.display("decl-x-summary")?, "none");
    assert!(page.text("decl-x-doc")?.contains("primary container"));

    page.toggle_section("intro");
    page.assert_collapsed("intro")?;
    assert_eq!(page.toggle_glyph("intro")?, "+");
    page.toggle_section("intro");
    page.assert_expanded("intro")?;
    assert_eq!(page.toggle_glyph("intro")?, "-");

    assert_eq!(page.expand_tree("nav"), 2);
    page.assert_expanded("tree1")?;
    page.assert_expanded("tree2")?;
    assert_eq!(page.indicator_src("tree1")?, "tree_open.png");

    assert_eq!(page.collapse_tree("nav"), 2);
    page.assert_collapsed("tree1")?;
    assert_eq!(page.indicator_src("tree2")?, "tree_close.png");

    assert!(page.take_warnings().is_empty());
    Ok(())
}

#[test]
fn unknown_ids_leave_the_page_inert_but_are_reported() -> Result<()> {
    let mut page = Page::from_html(MODULE_INDEX_HTML)?;
    page.init_page();
    page.take_warnings();

    assert!(!page.toggle_tree_node("tree9"));
    assert!(!page.toggle_section("appendix"));

    page.assert_collapsed("tree1")?;
    page.assert_collapsed("tree2")?;
    page.assert_expanded("intro")?;

    let warnings = page.take_warnings();
    assert_eq!(warnings.len(), 2);
    assert!(warnings[0].contains("#tree9"));
    assert!(warnings[1].contains("#appendix"));
    Ok(())
}

#[test]
fn custom_icon_assets_flow_through_tree_operations() -> Result<()> {
    let icons = TreeIcons::new("icons/open.svg", "icons/closed.svg");
    let mut page = Page::from_html_with_icons(MODULE_INDEX_HTML, icons)?;
    assert_eq!(page.icons().open_src, "icons/open.svg");

    page.toggle_tree_node("tree1");
    assert_eq!(page.indicator_src("tree1")?, "icons/open.svg");
    page.collapse_tree("nav");
    assert_eq!(page.indicator_src("tree1")?, "icons/closed.svg");
    assert_eq!(page.indicator_src("tree2")?, "icons/closed.svg");
    Ok(())
}

#[test]
fn entity_references_in_generated_summaries_are_decoded() -> Result<()> {
    let page = Page::from_html(MODULE_INDEX_HTML)?;
    assert!(page.text("decl-x-summary")?.contains('…'));
    Ok(())
}
