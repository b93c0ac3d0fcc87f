//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Red notice shown above the view when the survey data failed to load.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            class: "hc-error",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border: 1px solid #EF9A9A; border-radius: 4px;",
            strong { "Could not load survey data: " }
            "{props.message}"
        }
    }
}
