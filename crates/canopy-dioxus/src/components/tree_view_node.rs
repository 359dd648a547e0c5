use dioxus::events::MouseEvent;
use dioxus::prelude::*;

use canopy_core::{
    AriaState, NodeId, NodeKind, NodeSelect, Settings, ToggleClick, TreeItem, TreeNode,
    indent_offset, label_offset_style, node_classes, toggle_classes,
};

use crate::components::icons::CaretDownIcon;

/// One rendered tree node: a `role="treeitem"` row plus, while the node
/// is expanded, its `role="group"` child list rendered recursively.
///
/// ARIA attributes follow the tri-state contract of
/// [`AriaState`]: a `None` value renders as an absent attribute, never
/// as `"false"`.
#[component]
pub fn TreeViewNode(
    node: TreeNode,
    #[props(default)] settings: Settings,
    focused_id: ReadOnlySignal<Option<NodeId>>,
    on_toggle_click: EventHandler<ToggleClick>,
    on_select: EventHandler<NodeSelect>,
    render_icon: Option<Callback<TreeItem, Element>>,
    render_label: Option<Callback<TreeItem, Element>>,
) -> Element {
    let node_id = node.id();
    let disabled = node.disabled;
    let is_parent = node.has_children();
    let next_expanded = !node.expanded;

    let kind = NodeKind::of(&node);
    let offset = indent_offset(node.depth, kind);
    let aria = AriaState::of(&node);
    let classes = node_classes(&settings, &node);
    let label_style = label_offset_style(offset);
    let is_focused = *focused_id.read() == Some(node_id);
    let tabindex = if is_focused { "0" } else { "-1" };

    let aria_expanded = aria.expanded.map(|b| b.to_string());
    let aria_selected = aria.selected.map(|b| b.to_string());
    let aria_current = aria.current.map(|b| b.to_string());
    let aria_disabled = aria.disabled.map(|b| b.to_string());

    // Clicking the label toggles a parent and selects a leaf; a disabled
    // node absorbs the interaction entirely
    let label_value = node.value.clone();
    let handle_label_click = move |_: MouseEvent| {
        if disabled {
            return;
        }
        if is_parent {
            on_toggle_click.call(ToggleClick {
                node: node_id,
                value: label_value.clone(),
                expanded: next_expanded,
            });
        } else {
            on_select.call(NodeSelect {
                node: node_id,
                value: label_value.clone(),
            });
        }
    };

    let toggle_value = node.value.clone();
    let handle_toggle_click = move |evt: MouseEvent| {
        evt.stop_propagation();
        if disabled {
            return;
        }
        log::debug!("toggle glyph clicked on {toggle_value:?}");
        on_toggle_click.call(ToggleClick {
            node: node_id,
            value: toggle_value.clone(),
            expanded: next_expanded,
        });
    };

    let item = TreeItem::from_node(&node);
    let icon = render_icon.as_ref().map(|cb| cb.call(item.clone()));
    let label = match render_label.as_ref() {
        Some(cb) => cb.call(item.clone()),
        None => rsx! { "{node.value}" },
    };

    let label_class = settings.class("tree-node__label");
    let details_class = settings.class("tree-node__label__details");
    let toggle_class = settings.class("tree-parent-node__toggle");
    let children_class = settings.class("tree-node__children");
    let toggle_icon_classes = toggle_classes(&settings, node.expanded);

    rsx! {
        li {
            class: "{classes}",
            role: "treeitem",
            "data-value": "{node.value}",
            tabindex: "{tabindex}",
            aria_expanded: aria_expanded,
            aria_selected: aria_selected,
            aria_current: aria_current,
            aria_disabled: aria_disabled,
            div {
                class: "{label_class}",
                style: "{label_style}",
                onclick: handle_label_click,
                if is_parent {
                    span {
                        class: "{toggle_class}",
                        onclick: handle_toggle_click,
                        CaretDownIcon { class: toggle_icon_classes }
                    }
                }
                if is_parent {
                    span {
                        class: "{details_class}",
                        {icon}
                        {label}
                    }
                } else {
                    {icon}
                    {label}
                }
            }
            if is_parent && node.expanded {
                ul {
                    role: "group",
                    class: "{children_class}",
                    for child in node.children.iter() {
                        TreeViewNode {
                            key: "{child.id()}",
                            node: child.clone(),
                            settings: settings.clone(),
                            focused_id: focused_id,
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
}
