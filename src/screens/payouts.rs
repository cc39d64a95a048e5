use dioxus::prelude::*;
use crate::api;
use crate::models::{PayoutRequest, PayoutStatus};
use crate::pagination::{PageChange, PaginationState};
use crate::theme::AppColors;
use crate::widgets::{ColumnDef, DataTable, GradientBackground};

const PAGE_SIZE: usize = 10;

fn status_color(status: PayoutStatus, is_dark: bool) -> &'static str {
    match status {
        PayoutStatus::Approved | PayoutStatus::Paid => AppColors::success(is_dark),
        PayoutStatus::Rejected => AppColors::error(is_dark),
        PayoutStatus::Pending => AppColors::primary(is_dark),
    }
}

/// Payout-request list. Owns pagination state and the search filter, fetches
/// one page at a time through the API client, and hands the page to
/// [`DataTable`] for display.
#[component]
pub fn PayoutsScreen(is_dark: bool) -> Element {
    let mut page_index = use_signal(|| 0usize);
    let mut search = use_signal(String::new);
    let mut rows = use_signal(Vec::<PayoutRequest>::new);
    let mut total_rows = use_signal(|| 0usize);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    use_effect(move || {
        let index = page_index();
        let query = search();
        loading.set(true);
        error.set(None);
        spawn(async move {
            let limit = PAGE_SIZE as u32;
            let offset = (index * PAGE_SIZE) as u32;
            match api::get_payout_requests(limit, offset, &query).await {
                Ok(page) => {
                    total_rows.set(page.total as usize);
                    rows.set(page.requests);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    });

    let on_surface = AppColors::on_surface(is_dark);

    let columns = vec![
        ColumnDef::new("Requester", move |r: PayoutRequest| {
            rsx! {
                span { style: "color: {on_surface};", "{r.requester}" }
            }
        }),
        ColumnDef::new("Amount", move |r: PayoutRequest| {
            rsx! {
                span { style: "color: {on_surface}; font-weight: 500;", "{r.formatted_amount()}" }
            }
        }),
        ColumnDef::new("Status", move |r: PayoutRequest| {
            let color = status_color(r.status, is_dark);
            rsx! {
                span { style: "color: {color}; font-weight: 500;", "{r.status.label()}" }
            }
        }),
        ColumnDef::new("Requested", move |r: PayoutRequest| {
            rsx! {
                span { style: "color: {on_surface}; opacity: 0.8;",
                    "{r.created_at.format(\"%Y-%m-%d\")}"
                }
            }
        }),
        ColumnDef::new("Note", move |r: PayoutRequest| {
            rsx! {
                span { style: "color: {on_surface}; opacity: 0.8;",
                    "{r.note.as_deref().unwrap_or(\"-\")}"
                }
            }
        }),
    ];

    let pagination = PaginationState {
        page_index: page_index(),
        page_size: PAGE_SIZE,
        total_rows: total_rows(),
    };

    rsx! {
        GradientBackground { is_dark,
            div { style: "padding: 24px;",
                h1 { style: "color: {on_surface}; margin-bottom: 16px;", "Payout requests" }
                div { style: "margin-bottom: 16px; max-width: 320px;",
                    input {
                        r#type: "text",
                        placeholder: "Search requests…",
                        value: "{search()}",
                        oninput: move |ev| {
                            search.set(ev.value().clone());
                            page_index.set(0);
                        },
                        style: "width: 100%; padding: 8px 12px; border-radius: 8px; border: 1px solid #938F99; background: transparent; color: {on_surface}; box-sizing: border-box;",
                    }
                }
                DataTable {
                    is_dark,
                    rows: rows(),
                    columns,
                    loading: loading(),
                    error: error(),
                    pagination,
                    on_pagination_change: move |change: PageChange| page_index.set(change.page_index),
                }
            }
        }
    }
}
