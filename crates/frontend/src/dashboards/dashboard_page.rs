use contracts::dashboard::{format_for_display, NavTab};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::layout::global_context::DashboardContext;
use crate::layout::Shell;

/// One of the sibling views under `/:code/`. The view body only echoes the
/// current selection; charts are rendered elsewhere.
#[component]
pub fn DashboardPage(ctx: DashboardContext, tab: NavTab) -> impl IntoView {
    let params = use_params_map();
    let code = Signal::derive(move || params.read().get("code").unwrap_or_default());

    let selection_summary = move || {
        let config = ctx.config.get();
        ctx.state.with(|s| {
            let country = s.selected_country().map(|c| c.name.clone());
            let date = s.selected_date().map(|d| format_for_display(d, &config));
            match (country, date) {
                (Some(country), Some(date)) => format!("{} · {}", country, date),
                (Some(country), None) => country,
                (None, Some(date)) => date,
                (None, None) => String::new(),
            }
        })
    };

    view! {
        <Shell
            ctx=ctx
            code=code
            center=move || view! {
                <section class="dashboard-view">
                    <h2 class="dashboard-view__title">{tab.label()}</h2>
                    <p class="dashboard-view__selection">{selection_summary}</p>
                </section>
            }.into_any()
        />
    }
}
