use api::models::{entity_kind_label, ENTITY_KINDS};
use api::Entity;
use dioxus::prelude::*;

use dioxus_free_icons::IconShape;

use crate::icons::{FaBuilding, FaLocationDot, FaUser};
use crate::Icon;

/// Entities grouped by kind, as selectable badges.
#[component]
pub fn EntitySidebar(
    entities: Vec<Entity>,
    selected: Option<Entity>,
    on_select: EventHandler<Entity>,
) -> Element {
    if entities.is_empty() {
        return rsx! {
            p {
                class: "entity-empty",
                "No entities extracted for this document."
            }
        };
    }

    let groups: Vec<(&str, Vec<Entity>)> = ENTITY_KINDS
        .iter()
        .map(|kind| {
            (
                *kind,
                entities
                    .iter()
                    .filter(|entity| entity.kind == *kind)
                    .cloned()
                    .collect::<Vec<_>>(),
            )
        })
        .filter(|(_, group)| !group.is_empty())
        .collect();

    rsx! {
        div {
            class: "entity-groups",
            for (kind, group) in groups {
                div {
                    key: "{kind}",
                    class: "entity-group",
                    div {
                        class: "entity-group-header",
                        KindIcon { kind: kind.to_string() }
                        h3 { class: "entity-group-title", "{entity_kind_label(kind)}" }
                    }
                    div {
                        class: "entity-group-badges",
                        for entity in group {
                            EntityBadge {
                                key: "{entity.kind}-{entity.text}",
                                entity: entity.clone(),
                                selected: selected.as_ref() == Some(&entity),
                                on_select: on_select,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EntityBadge(entity: Entity, selected: bool, on_select: EventHandler<Entity>) -> Element {
    let entity_for_click = entity.clone();
    rsx! {
        button {
            class: if selected { "entity-badge entity-badge--selectable selected" } else { "entity-badge entity-badge--selectable" },
            onclick: move |_| on_select.call(entity_for_click.clone()),
            "{entity.text}"
        }
    }
}

#[component]
fn KindIcon(kind: String) -> Element {
    match kind.as_str() {
        "PERSON" => icon(FaUser),
        "ORG" => icon(FaBuilding),
        _ => icon(FaLocationDot),
    }
}

fn icon<T: IconShape + Clone + PartialEq + 'static>(shape: T) -> Element {
    rsx! {
        span {
            class: "entity-group-icon",
            Icon { icon: shape, width: 16, height: 16 }
        }
    }
}
