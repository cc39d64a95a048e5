use dioxus::prelude::*;
use crate::theme::spacing;

#[component]
pub fn GradientCard(is_dark: bool, children: Element) -> Element {
    let (surface, border) = if is_dark {
        ("rgba(58,52,38,0.9)", "rgba(252,211,77,0.25)")
    } else {
        ("rgba(255,251,235,0.95)", "rgba(120,53,15,0.2)")
    };
    rsx! {
        div {
            style: "background: {surface}; border: 1px solid {border}; border-radius: 12px; padding: {spacing::CARD_PADDING}; margin: {spacing::SM};",
            {children}
        }
    }
}
