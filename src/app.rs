use dioxus::prelude::*;
use crate::screens::{EarningsScreen, PayoutsScreen};
use crate::theme::AppColors;

#[derive(Clone, Copy, PartialEq)]
pub enum Route {
    Earnings,
    Payouts,
}

#[component]
pub fn App() -> Element {
    let mut route = use_signal(|| Route::Earnings);
    let mut is_dark = use_signal(|| true);

    let dark = is_dark();
    let text_color = AppColors::on_surface(dark);
    let surface = AppColors::surface(dark);
    let active_bg = AppColors::primary(dark);
    let active_fg = AppColors::surface(dark);
    let (bg_earnings, fg_earnings) = if route() == Route::Earnings {
        (active_bg, active_fg)
    } else {
        ("transparent", text_color)
    };
    let (bg_payouts, fg_payouts) = if route() == Route::Payouts {
        (active_bg, active_fg)
    } else {
        ("transparent", text_color)
    };

    rsx! {
        div { style: "font-family: system-ui, sans-serif; display: flex; flex-direction: column; height: 100vh; background: {surface};",
            div { style: "display: flex; padding: 12px 24px; gap: 12px; align-items: center; border-bottom: 1px solid #49454F; flex-shrink: 0;",
                button {
                    onclick: move |_| route.set(Route::Earnings),
                    style: "padding: 8px 16px; border-radius: 8px; border: none; cursor: pointer; background: {bg_earnings}; color: {fg_earnings};",
                    "Earnings"
                }
                button {
                    onclick: move |_| route.set(Route::Payouts),
                    style: "padding: 8px 16px; border-radius: 8px; border: none; cursor: pointer; background: {bg_payouts}; color: {fg_payouts};",
                    "Payouts"
                }
                div { style: "flex: 1;" }
                button {
                    onclick: move |_| {
                        let v = is_dark();
                        is_dark.set(!v);
                    },
                    style: "padding: 8px 16px; border-radius: 8px; border: 1px solid #938F99; background: transparent; color: {text_color}; cursor: pointer;",
                    if dark { "Light" } else { "Dark" }
                }
            }
            div { style: "flex: 1; overflow: auto;",
                {match route() {
                    Route::Earnings => rsx! { EarningsScreen { is_dark: dark } },
                    Route::Payouts => rsx! { PayoutsScreen { is_dark: dark } },
                }}
            }
        }
    }
}
