use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SummaryHeaderProps {
    /// e.g. `HEALTH 2018 SUMMARY FOR BEKOK`
    pub title: String,
}

#[component]
pub fn SummaryHeader(props: SummaryHeaderProps) -> Element {
    rsx! {
        h1 {
            class: "hc-summary",
            style: "margin: 0 0 12px 0; font-size: 22px; letter-spacing: 0.5px;",
            "{props.title}"
        }
    }
}
