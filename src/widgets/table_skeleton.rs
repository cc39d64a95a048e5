use dioxus::prelude::*;

/// Placeholder grid shown while table data loads: one shimmer block per
/// column, repeated for the expected number of rows.
#[component]
pub fn TableSkeleton(is_dark: bool, columns: usize, rows: usize) -> Element {
    let block = if is_dark { "#49454F" } else { "#E7E0EC" };
    rsx! {
        div { style: "width: 100%; padding: 8px 0;",
            for _ in 0..rows.max(1) {
                div { style: "display: flex; gap: 8px; margin-bottom: 8px;",
                    for _ in 0..columns.max(1) {
                        div {
                            style: "flex: 1; height: 16px; border-radius: 4px; background: {block}; opacity: 0.6;",
                        }
                    }
                }
            }
        }
    }
}
