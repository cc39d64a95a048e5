use dioxus::prelude::*;
use crate::pagination::{PageChange, PaginationState};
use crate::theme::AppColors;
use crate::widgets::TableSkeleton;

/// Placeholder row count for the loading skeleton when no pagination state
/// is supplied.
const DEFAULT_SKELETON_ROWS: usize = 10;

/// One table column: a header label plus a rule turning a row into a cell.
/// The table knows nothing about the row type beyond what each rule consumes.
#[derive(Clone, PartialEq)]
pub struct ColumnDef<T: Clone + PartialEq + 'static> {
    pub header: String,
    pub cell: Callback<T, Element>,
}

impl<T: Clone + PartialEq + 'static> ColumnDef<T> {
    pub fn new(header: impl Into<String>, cell: impl FnMut(T) -> Element + 'static) -> Self {
        Self {
            header: header.into(),
            cell: Callback::new(cell),
        }
    }
}

/// Generic paginated table. Purely presentational: rows, pagination state and
/// error text flow in from the owner; page-navigation intent flows out through
/// `on_pagination_change`. The table never clamps the page index, never slices
/// rows locally, and never fetches — the owner supplies exactly the rows for
/// the page it asked for.
///
/// Render priority: loading skeleton, then error text, then the empty-state
/// message, then the populated table (with a control bar when `pagination`
/// is supplied).
#[component]
pub fn DataTable<T: Clone + PartialEq + 'static>(
    is_dark: bool,
    rows: Vec<T>,
    columns: Vec<ColumnDef<T>>,
    #[props(default)] loading: bool,
    #[props(!optional, into, default)] error: Option<String>,
    pagination: Option<PaginationState>,
    on_pagination_change: Option<EventHandler<PageChange>>,
) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    let error_color = AppColors::error(is_dark);
    let surface = if is_dark { "rgba(73,69,79,0.9)" } else { "rgba(255,255,255,0.95)" };
    let header_bg = if is_dark { "#2A2730" } else { "#FEF9C3" };
    let border = if is_dark { "#49454F" } else { "#E7E0EC" };
    let button_style = format!(
        "padding: 8px 16px; border-radius: 8px; border: none; cursor: pointer; \
         background: {}; color: {}; font-weight: 600;",
        AppColors::primary(is_dark),
        AppColors::surface(is_dark),
    );

    if loading {
        let skeleton_rows = pagination
            .map(|p| p.page_size)
            .unwrap_or(DEFAULT_SKELETON_ROWS);
        return rsx! {
            TableSkeleton { is_dark, columns: columns.len(), rows: skeleton_rows }
        };
    }

    if let Some(message) = error {
        return rsx! {
            p { style: "color: {error_color}; font-size: 0.875rem;", "Error: {message}" }
        };
    }

    if rows.is_empty() {
        return rsx! {
            p { style: "color: {on_surface}; opacity: 0.8;", "No data available" }
        };
    }

    rsx! {
        div { style: "overflow-x: auto; width: 100%; background: {surface}; border-radius: 8px; padding: 8px;",
            table { style: "width: 100%; border-collapse: collapse; text-align: left;",
                thead {
                    tr { style: "background: {header_bg};",
                        for col in columns.iter() {
                            th {
                                style: "padding: 8px 16px; font-size: 0.875rem; font-weight: 500; color: {on_surface}; border-bottom: 1px solid {border};",
                                "{col.header}"
                            }
                        }
                    }
                }
                tbody {
                    for row in rows.iter() {
                        tr { style: "border-top: 1px solid {border};",
                            for col in columns.iter() {
                                td { style: "padding: 8px 16px; font-size: 0.875rem;",
                                    {col.cell.call(row.clone())}
                                }
                            }
                        }
                    }
                }
            }
            if let Some(p) = pagination {
                div { style: "display: flex; align-items: center; justify-content: space-between; margin-top: 16px; gap: 8px;",
                    span { style: "font-size: 0.875rem; color: {on_surface}; font-weight: 600;",
                        "{p.summary()}"
                    }
                    div { style: "display: flex; align-items: center; gap: 16px;",
                        button {
                            disabled: !p.has_prev(),
                            onclick: move |_| {
                                if let (Some(handler), Some(change)) = (on_pagination_change, p.prev()) {
                                    handler.call(change);
                                }
                            },
                            style: "{button_style}",
                            "← Previous"
                        }
                        span { style: "font-size: 0.875rem; color: {on_surface}; font-weight: 600;",
                            "{p.page_label()}"
                        }
                        button {
                            disabled: !p.has_next(),
                            onclick: move |_| {
                                if let (Some(handler), Some(change)) = (on_pagination_change, p.next()) {
                                    handler.call(change);
                                }
                            },
                            style: "{button_style}",
                            "Next →"
                        }
                    }
                }
            }
        }
    }
}
