//! Container div the Leaflet map is created in.
//!
//! The map itself is driven by `YearView`; this component only reports when
//! its element is in the DOM and when it changes size.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapPanelProps {
    /// DOM id Leaflet renders into (`map2013` / `map2018`)
    pub id: String,
    #[props(default = 400)]
    pub height_px: u32,
    pub on_mounted: EventHandler<()>,
    pub on_resize: EventHandler<()>,
}

#[component]
pub fn MapPanel(props: MapPanelProps) -> Element {
    let style = format!(
        "height: {}px; width: 100%; margin-bottom: 16px; border: 1px solid #ccc;",
        props.height_px
    );
    let on_mounted = props.on_mounted;
    let on_resize = props.on_resize;

    rsx! {
        div {
            id: "{props.id}",
            class: "hc-map",
            style: "{style}",
            onmounted: move |_| on_mounted.call(()),
            onresize: move |_| on_resize.call(()),
        }
    }
}
