//! Subdistrict list. Clicking an entry hands its id to `on_select`.

use dioxus::prelude::*;
use hc_survey::subdistrict::SubdistrictId;
use hc_view::grid::SidebarEntry;

#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    pub entries: Vec<SidebarEntry>,
    pub on_select: EventHandler<SubdistrictId>,
}

#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let on_select = props.on_select;

    rsx! {
        nav {
            class: "hc-sidebar",
            style: "flex: 0 0 200px; padding: 8px 12px; border-right: 1px solid #ddd;",
            h2 {
                style: "margin: 0 0 8px 0; font-size: 16px;",
                "Subdistricts"
            }
            ul {
                style: "list-style: none; margin: 0; padding: 0;",
                for entry in props.entries.iter() {
                    li {
                        key: "{entry.id}",
                        class: if entry.active { "active" } else { "" },
                        style: if entry.active {
                            "padding: 6px 8px; cursor: pointer; border-radius: 4px; background: #E3F2FD; font-weight: bold;"
                        } else {
                            "padding: 6px 8px; cursor: pointer; border-radius: 4px;"
                        },
                        onclick: {
                            let id = entry.id.clone();
                            move |_| on_select.call(id.clone())
                        },
                        "{entry.label}"
                    }
                }
            }
        }
    }
}
