//! Chart grid: one titled card per catalog category.

use dioxus::prelude::*;
use hc_view::grid::ChartCard;

#[derive(Props, Clone, PartialEq)]
pub struct ChartPanelProps {
    /// The DOM id Chart.js renders into
    pub id: String,
    pub title: String,
    /// Respondents counted in this category
    pub total: u64,
    #[props(default = 400)]
    pub height_px: u32,
}

/// A titled, fixed-height container for one Chart.js chart.
#[component]
pub fn ChartPanel(props: ChartPanelProps) -> Element {
    let style = format!("height: {}px; position: relative; width: 100%;", props.height_px);

    rsx! {
        div {
            class: "hc-chart-card",
            style: "padding: 8px; border: 1px solid #eee; border-radius: 4px; background: #fff;",
            div {
                style: "margin-bottom: 8px;",
                h3 {
                    style: "margin: 0 0 4px 0; font-size: 15px;",
                    "{props.title}"
                }
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "n = {props.total}"
                }
            }
            div {
                style: "{style}",
                div {
                    id: "{props.id}",
                    style: "width: 100%; height: 100%;",
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ChartGridProps {
    pub cards: Vec<ChartCard>,
    #[props(default = 400)]
    pub chart_height_px: u32,
}

/// Lays out the cards two per row. Rendering into the containers happens
/// in an effect of the owning view.
#[component]
pub fn ChartGrid(props: ChartGridProps) -> Element {
    rsx! {
        div {
            class: "hc-chart-grid",
            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(380px, 1fr)); gap: 16px;",
            for card in props.cards.iter() {
                ChartPanel {
                    key: "{card.container_id}",
                    id: card.container_id.clone(),
                    title: card.title.to_string(),
                    total: card.total,
                    height_px: props.chart_height_px,
                }
            }
        }
    }
}
