//! Server-side rendering tests for the tree view components: the markup
//! contract (roles, classes, tri-state ARIA attributes, indentation
//! offsets) asserted on real rendered HTML.

use dioxus::prelude::*;
use pretty_assertions::assert_eq;

use canopy_core::{Settings, Tree, TreeNode};
use canopy_dioxus::{TREE_CSS, TreeView};

#[component]
fn Harness(tree_data: Tree, #[props(default)] settings: Settings) -> Element {
    let tree = use_signal(move || tree_data.clone());
    rsx! {
        TreeView {
            tree: ReadOnlySignal::from(tree),
            settings: settings.clone(),
            aria_label: Some("Topics".to_string()),
            on_toggle_click: move |_| {},
            on_select: move |_| {},
        }
    }
}

fn render_with_settings(tree: Tree, settings: Settings) -> String {
    let mut dom = VirtualDom::new_with_props(
        Harness,
        HarnessProps {
            tree_data: tree,
            settings,
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn render_tree(tree: Tree) -> String {
    render_with_settings(tree, Settings::default())
}

fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

#[test]
fn container_establishes_tree_role_and_label() {
    let html = render_tree(Tree::with_roots(vec![TreeNode::new("AI")]));

    assert!(html.contains(r#"class="cnp--tree-view""#));
    assert!(html.contains(r#"role="tree""#));
    assert!(html.contains(r#"aria-label="Topics""#));
    assert_eq!(count(&html, r#"role="treeitem""#), 1);
}

#[test]
fn leaf_renders_without_toggle_or_aria_expanded() {
    let html = render_tree(Tree::with_roots(vec![
        TreeNode::new("Artificial intelligence"),
        TreeNode::new("Blockchain"),
    ]));

    assert!(!html.contains("aria-expanded"));
    assert!(!html.contains("cnp--tree-parent-node__toggle"));
    assert_eq!(count(&html, "cnp--tree-leaf-node"), 2);
    // Leaf at depth 0 reserves 2.5rem
    assert!(html.contains("margin-left: -2.5rem; padding-left: 2.5rem;"));
}

#[test]
fn forced_expanded_on_leaf_is_inert() {
    let mut leaf = TreeNode::new("Lonely");
    leaf.expanded = true;
    let html = render_tree(Tree::with_roots(vec![leaf]));

    assert!(!html.contains("aria-expanded"));
    assert!(!html.contains(r#"role="group""#));
}

#[test]
fn collapsed_parent_reflects_aria_expanded_false() {
    let html = render_tree(Tree::with_roots(vec![TreeNode::with_children(
        "Business automation",
        vec![TreeNode::new("Business process automation")],
    )]));

    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(html.contains("cnp--tree-parent-node"));
    assert_eq!(count(&html, r#"class="cnp--tree-parent-node__toggle""#), 1);
    assert!(!html.contains("cnp--tree-parent-node__toggle-icon--expanded"));
    // Collapsed children are not rendered at all
    assert!(!html.contains(r#"role="group""#));
    assert!(!html.contains("Business process automation"));
    // Parent at depth 0 reserves 1rem
    assert!(html.contains("margin-left: -1rem; padding-left: 1rem;"));
}

#[test]
fn expanded_parent_renders_child_group() {
    let mut root = TreeNode::with_children(
        "Cloud computing",
        vec![TreeNode::new("Containers"), TreeNode::new("Databases")],
    );
    root.expanded = true;
    let html = render_tree(Tree::with_roots(vec![root]));

    assert!(html.contains(r#"aria-expanded="true""#));
    assert!(html.contains("cnp--tree-parent-node__toggle-icon--expanded"));
    assert_eq!(count(&html, r#"role="group""#), 1);
    assert_eq!(count(&html, r#"role="treeitem""#), 3);
    assert!(html.contains("Containers"));
    // Depth-1 leaves reserve 3.5rem
    assert_eq!(count(&html, "padding-left: 3.5rem;"), 2);
}

#[test]
fn nested_depth_two_leaf_gets_four_and_a_half_rem() {
    let mut level1 = TreeNode::with_children("level1", vec![TreeNode::new("level2")]);
    level1.expanded = true;
    let mut root = TreeNode::with_children("level0", vec![level1]);
    root.expanded = true;
    let html = render_tree(Tree::with_roots(vec![root]));

    assert!(html.contains("padding-left: 4.5rem;"));
    // Parents at depth 0 and 1 reserve 1rem and 2rem
    assert!(html.contains("padding-left: 1rem;"));
    assert!(html.contains("padding-left: 2rem;"));
}

#[test]
fn disabled_subtree_drops_aria_selected_everywhere() {
    let mut child = TreeNode::new("Data storage");
    child.selected = true;
    let mut root = TreeNode::with_children("IT infrastructure", vec![child]);
    root.disabled = true;
    root.expanded = true;
    let html = render_tree(Tree::with_roots(vec![root]));

    assert_eq!(count(&html, r#"aria-disabled="true""#), 2);
    assert!(!html.contains("aria-selected"));
    assert_eq!(count(&html, "cnp--tree-node--disabled"), 2);
}

#[test]
fn enabled_nodes_reflect_selection_state() {
    let mut selected = TreeNode::new("Containers");
    selected.selected = true;
    let html = render_tree(Tree::with_roots(vec![selected, TreeNode::new("Databases")]));

    assert_eq!(count(&html, r#"aria-selected="true""#), 1);
    assert_eq!(count(&html, r#"aria-selected="false""#), 1);
    assert_eq!(count(&html, "cnp--tree-node--selected"), 1);
    assert!(!html.contains("aria-disabled"));
}

#[test]
fn active_node_reflects_aria_current() {
    let mut active = TreeNode::new("Insights");
    active.active = true;
    let html = render_tree(Tree::with_roots(vec![active, TreeNode::new("Benefits")]));

    assert_eq!(count(&html, r#"aria-current="true""#), 1);
    assert!(!html.contains(r#"aria-current="false""#));
    assert_eq!(count(&html, "cnp--tree-node--active"), 1);
}

#[test]
fn label_details_wrapper_only_exists_for_parents() {
    let html = render_tree(Tree::with_roots(vec![TreeNode::new("Solo leaf")]));
    assert!(!html.contains("cnp--tree-node__label__details"));

    let html = render_tree(Tree::with_roots(vec![TreeNode::with_children(
        "Parent",
        vec![TreeNode::new("Child")],
    )]));
    assert_eq!(count(&html, "cnp--tree-node__label__details"), 1);
}

#[test]
fn every_node_carries_value_hook_and_roving_tabindex() {
    let html = render_tree(Tree::with_roots(vec![
        TreeNode::new("Big data"),
        TreeNode::new("Business intelligence"),
    ]));

    assert!(html.contains(r#"data-value="Big data""#));
    assert!(html.contains(r#"data-value="Business intelligence""#));
    // Without focus every row sits at tabindex -1; the wrapper is the
    // single tab stop
    assert_eq!(count(&html, r#"tabindex="-1""#), 2);
    assert_eq!(count(&html, r#"tabindex="0""#), 1);
}

#[test]
fn custom_prefix_rewrites_every_class() {
    let settings = Settings::with_prefix("acme").unwrap();
    let mut root = TreeNode::with_children("Parent", vec![TreeNode::new("Child")]);
    root.expanded = true;
    let html = render_with_settings(Tree::with_roots(vec![root]), settings);

    assert!(html.contains("acme--tree-view"));
    assert!(html.contains("acme--tree-node"));
    assert!(html.contains("acme--tree-parent-node__toggle-icon"));
    assert!(html.contains("acme--tree-node__children"));
    assert!(!html.contains("cnp--"));
}

#[test]
fn stylesheet_covers_the_default_class_contract() {
    for class in [
        ".cnp--tree-view",
        ".cnp--tree-node",
        ".cnp--tree-node__label",
        ".cnp--tree-node__label__details",
        ".cnp--tree-node--disabled",
        ".cnp--tree-node--selected",
        ".cnp--tree-node--active",
        ".cnp--tree-parent-node__toggle",
        ".cnp--tree-parent-node__toggle-icon",
        ".cnp--tree-parent-node__toggle-icon--expanded",
        ".cnp--tree-node__children",
    ] {
        assert!(TREE_CSS.contains(class), "stylesheet is missing {class}");
    }
}
