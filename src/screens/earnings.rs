use dioxus::prelude::*;
use crate::api;
use crate::models::{FinanceGraph, FinanceOverview};
use crate::theme::AppColors;
use crate::widgets::{GradientBackground, GradientCard};

/// Earnings dashboard: overview figures plus the earnings-over-time graph,
/// both filtered by an optional start date. Refetches whenever the filter
/// changes.
#[component]
pub fn EarningsScreen(is_dark: bool) -> Element {
    let mut start_date = use_signal(String::new);
    let mut overview = use_signal(|| Option::<FinanceOverview>::None);
    let mut graph = use_signal(|| Option::<FinanceGraph>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    use_effect(move || {
        let date = start_date();
        loading.set(true);
        error.set(None);
        spawn(async move {
            let filter = if date.is_empty() { None } else { Some(date.as_str()) };
            match api::get_finance_overview(filter).await {
                Ok(data) => overview.set(Some(data)),
                Err(e) => error.set(Some(e.to_string())),
            }
            if error().is_none() {
                match api::get_finance_graph(filter).await {
                    Ok(data) => graph.set(Some(data)),
                    Err(e) => error.set(Some(e.to_string())),
                }
            }
            loading.set(false);
        });
    });

    let on_surface = AppColors::on_surface(is_dark);
    let primary = AppColors::primary(is_dark);
    let success = AppColors::success(is_dark);
    let err_color = AppColors::error(is_dark);

    let error_text = error();
    let overview_data = overview();
    let stats: Vec<(&'static str, String, &'static str)> = overview_data
        .as_ref()
        .map(|o| {
            vec![
                ("Total earnings", o.formatted(o.total_earnings), success),
                ("Total payouts", o.formatted(o.total_payouts), on_surface),
                ("Pending payouts", o.formatted(o.pending_payouts), on_surface),
                ("Available balance", o.formatted(o.available_balance), primary),
            ]
        })
        .unwrap_or_default();

    // Bar heights precomputed against the series maximum; 112px tracks the
    // 120px chart body minus padding.
    let graph_data = graph();
    let bars: Vec<(String, i64)> = graph_data
        .as_ref()
        .map(|g| {
            let max = g.points.iter().map(|p| p.amount).max().unwrap_or(0).max(1);
            g.points
                .iter()
                .map(|p| {
                    let tooltip = format!("{}: {} {}", p.date, p.amount, g.currency);
                    (tooltip, p.amount.max(0) * 112 / max)
                })
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        GradientBackground { is_dark,
            div { style: "padding: 24px;",
                h1 { style: "color: {on_surface}; margin-bottom: 16px;", "Earnings" }
                div { style: "margin-bottom: 16px; max-width: 240px;",
                    label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;",
                        "From date"
                    }
                    input {
                        r#type: "date",
                        value: "{start_date()}",
                        oninput: move |ev| start_date.set(ev.value().clone()),
                        style: "width: 100%; padding: 8px; border-radius: 8px; border: 1px solid #938F99; background: transparent; color: {on_surface}; box-sizing: border-box;",
                    }
                }
                if loading() {
                    GradientCard { is_dark,
                        p { style: "color: {on_surface}; opacity: 0.8;", "Loading earnings…" }
                    }
                } else if error_text.is_some() {
                    GradientCard { is_dark,
                        p { style: "color: {err_color}; font-size: 0.875rem;",
                            "Error: {error_text.as_deref().unwrap_or_default()}"
                        }
                    }
                } else {
                    div { style: "display: flex; flex-wrap: wrap;",
                        for (label, value, color) in stats.iter() {
                            GradientCard { is_dark,
                                h2 { style: "color: {on_surface}; font-size: 1rem; margin-bottom: 8px;", "{label}" }
                                p { style: "font-size: 1.5rem; font-weight: bold; color: {color};", "{value}" }
                            }
                        }
                    }
                    if !bars.is_empty() {
                        GradientCard { is_dark,
                            h2 { style: "color: {on_surface}; font-size: 1rem; margin-bottom: 8px;", "Earnings over time" }
                            div { style: "display: flex; align-items: flex-end; gap: 4px; height: 120px;",
                                for (tooltip, height) in bars.iter() {
                                    div {
                                        title: "{tooltip}",
                                        style: "flex: 1; background: {primary}; border-radius: 4px 4px 0 0; height: {height}px; min-height: 2px;",
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
