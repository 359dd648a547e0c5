use dioxus::events::KeyboardEvent;
use dioxus::prelude::*;

use canopy_core::{NodeId, NodeSelect, Settings, ToggleClick, Tree, TreeItem};

use crate::components::tree_view_node::TreeViewNode;

/// Tree view container: establishes the `role="tree"` grouping around
/// the root nodes and owns keyboard navigation.
///
/// State lives in the `tree` model; the component only emits requests.
/// A [`ToggleClick`] is emitted *before* any state changes, and the
/// owner commits it with [`Tree::toggle`] (or ignores it to veto the
/// toggle).
#[component]
pub fn TreeView(
    tree: ReadOnlySignal<Tree>,
    #[props(default)] settings: Settings,
    aria_label: Option<String>,
    on_toggle_click: EventHandler<ToggleClick>,
    on_select: EventHandler<NodeSelect>,
    render_icon: Option<Callback<TreeItem, Element>>,
    render_label: Option<Callback<TreeItem, Element>>,
) -> Element {
    let items = use_memo(move || tree.read().items());
    let mut focused_id = use_signal(|| None::<NodeId>);
    let mut has_focus = use_signal(|| false);

    let handle_focus = move |_| {
        has_focus.set(true);
        // Roving focus starts on the first visible row
        if focused_id.read().is_none() {
            let first = items.read().first().map(|item| item.id);
            focused_id.set(first);
        }
    };

    let handle_blur = move |_| {
        has_focus.set(false);
    };

    // Handle keyboard navigation (only when focused)
    let handle_keydown = move |evt: KeyboardEvent| {
        if !*has_focus.read() {
            return;
        }
        let items_list = items.read();
        let current_focus = *focused_id.read();
        if let Some(action) = plan_navigation(&evt.key(), current_focus, &items_list) {
            evt.prevent_default();
            match action {
                NavAction::Focus(id) => focused_id.set(Some(id)),
                NavAction::Toggle(request) => {
                    log::debug!("keyboard toggle request for {:?}", request.value);
                    on_toggle_click.call(request);
                }
                NavAction::Select(select) => on_select.call(select),
            }
        }
    };

    let view_class = settings.class("tree-view");
    let tree_class = settings.class("tree");

    rsx! {
        div {
            class: "{view_class}",
            tabindex: "0",
            onkeydown: handle_keydown,
            onfocus: handle_focus,
            onblur: handle_blur,
            ul {
                role: "tree",
                class: "{tree_class}",
                aria_label: aria_label,
                for root in tree.read().roots.iter() {
                    TreeViewNode {
                        key: "{root.id()}",
                        node: root.clone(),
                        settings: settings.clone(),
                        focused_id: ReadOnlySignal::from(focused_id),
                        on_toggle_click: on_toggle_click,
                        on_select: on_select,
                        render_icon: render_icon,
                        render_label: render_label,
                    }
                }
            }
        }
    }
}

/// Outcome of one navigation key on the current focus/row state.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NavAction {
    Focus(NodeId),
    Toggle(ToggleClick),
    Select(NodeSelect),
}

/// Plan the effect of a navigation key over the flattened visible rows.
///
/// Pure so the whole keyboard contract is testable without a DOM:
/// ArrowDown/ArrowUp rove focus, ArrowRight requests expansion of a
/// collapsed parent, ArrowLeft requests collapse of an expanded one,
/// Enter selects. Disabled rows absorb everything but focus movement.
pub(crate) fn plan_navigation(
    key: &Key,
    focused: Option<NodeId>,
    items: &[TreeItem],
) -> Option<NavAction> {
    if items.is_empty() {
        return None;
    }

    let current = focused.and_then(|id| items.iter().position(|item| item.id == id));

    match key {
        Key::ArrowDown => {
            let next = match current {
                Some(index) => (index + 1).min(items.len() - 1),
                None => 0,
            };
            (current != Some(next)).then(|| NavAction::Focus(items[next].id))
        }
        Key::ArrowUp => {
            let next = current.map_or(0, |index| index.saturating_sub(1));
            (current != Some(next)).then(|| NavAction::Focus(items[next].id))
        }
        Key::ArrowRight => {
            let item = &items[current?];
            (item.has_children && !item.expanded && !item.disabled).then(|| {
                NavAction::Toggle(ToggleClick {
                    node: item.id,
                    value: item.value.clone(),
                    expanded: true,
                })
            })
        }
        Key::ArrowLeft => {
            let item = &items[current?];
            (item.expanded && !item.disabled).then(|| {
                NavAction::Toggle(ToggleClick {
                    node: item.id,
                    value: item.value.clone(),
                    expanded: false,
                })
            })
        }
        Key::Enter => {
            let item = &items[current?];
            (!item.disabled).then(|| {
                NavAction::Select(NodeSelect {
                    node: item.id,
                    value: item.value.clone(),
                })
            })
        }
        _ => None,
    }
}
