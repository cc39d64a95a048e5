//! Server-side renders of `DataTable` checking the display-state switch:
//! loading beats error beats empty beats the populated table.

use dioxus::prelude::*;
use finboard_frontend::pagination::PaginationState;
use finboard_frontend::widgets::{ColumnDef, DataTable, GradientCard};

#[derive(Clone, PartialEq)]
struct Row {
    name: String,
}

fn sample_rows() -> Vec<Row> {
    ["alpha", "beta", "gamma"]
        .into_iter()
        .map(|name| Row {
            name: name.to_string(),
        })
        .collect()
}

fn name_column() -> Vec<ColumnDef<Row>> {
    vec![ColumnDef::new("Name", |r: Row| {
        rsx! {
            span { "{r.name}" }
        }
    })]
}

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn loading_hides_rows_and_error() {
    fn app() -> Element {
        let pager = PaginationState {
            page_index: 0,
            page_size: 3,
            total_rows: 9,
        };
        rsx! {
            DataTable {
                is_dark: true,
                rows: sample_rows(),
                columns: name_column(),
                loading: true,
                error: Some("boom".to_string()),
                pagination: pager,
            }
        }
    }

    let html = render(app);
    assert!(!html.contains("<table"), "no table while loading: {html}");
    assert!(!html.contains("alpha"), "no data rows while loading: {html}");
    assert!(!html.contains("boom"), "no error text while loading: {html}");
    // Skeleton blocks are the only output.
    assert!(html.contains("opacity: 0.6"), "skeleton missing: {html}");
}

#[test]
fn error_beats_rows() {
    fn app() -> Element {
        rsx! {
            DataTable {
                is_dark: true,
                rows: sample_rows(),
                columns: name_column(),
                loading: false,
                error: Some("request failed".to_string()),
            }
        }
    }

    let html = render(app);
    assert!(html.contains("Error: request failed"), "error text missing: {html}");
    assert!(!html.contains("<table"), "no table in error state: {html}");
    assert!(!html.contains("alpha"), "no data rows in error state: {html}");
}

#[test]
fn empty_rows_show_empty_state() {
    fn app() -> Element {
        rsx! {
            DataTable {
                is_dark: false,
                rows: Vec::<Row>::new(),
                columns: name_column(),
                loading: false,
                error: None,
            }
        }
    }

    let html = render(app);
    assert!(html.contains("No data available"), "empty state missing: {html}");
    assert!(!html.contains("<table"), "no table when empty: {html}");
}

#[test]
fn populated_table_renders_rows_and_control_bar() {
    fn app() -> Element {
        let pager = PaginationState {
            page_index: 0,
            page_size: 3,
            total_rows: 9,
        };
        rsx! {
            DataTable {
                is_dark: true,
                rows: sample_rows(),
                columns: name_column(),
                loading: false,
                error: None,
                pagination: pager,
            }
        }
    }

    let html = render(app);
    assert!(html.contains("<table"), "table missing: {html}");
    assert!(html.contains("Name"), "header missing: {html}");
    assert!(html.contains("alpha") && html.contains("gamma"), "rows missing: {html}");
    assert!(html.contains("Showing 1 to 3 of 9 total"), "summary missing: {html}");
    assert!(html.contains("Page 1 of 3"), "page label missing: {html}");
}

#[test]
fn gradient_card_uses_amber_surface() {
    fn app() -> Element {
        rsx! {
            GradientCard { is_dark: true,
                p { "inside" }
            }
        }
    }

    let html = render(app);
    assert!(html.contains("rgba(58,52,38,0.9)"), "amber surface missing: {html}");
    assert!(html.contains("inside"));
}
