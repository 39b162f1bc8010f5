use contracts::dashboard::NavTab;
use leptos::prelude::*;
use leptos_router::components::A;

use super::country_select::CountrySelect;
use super::date_selector::DateSelector;
use crate::layout::global_context::DashboardContext;

/// Secondary header: view tabs, country selector and date selector.
///
/// `code` is the dataset code taken from the current route.
#[component]
pub fn Tabs(ctx: DashboardContext, #[prop(into)] code: Signal<String>) -> impl IntoView {
    let country_selector_enabled = move || ctx.state.with(|s| s.country_selector_enabled);
    let date_selector_enabled = move || ctx.state.with(|s| s.date_selector_enabled);

    view! {
        <header class="header-secondary">
            <nav class="header-tabs">
                <div>
                    {NavTab::all()
                        .into_iter()
                        .map(|tab| nav_item(tab, code))
                        .collect_view()}
                </div>
            </nav>
            <div class="header-controls">
                <Show when=country_selector_enabled>
                    <CountrySelect ctx=ctx />
                </Show>
                <Show when=date_selector_enabled>
                    <DateSelector ctx=ctx />
                </Show>
            </div>
        </header>
    }
}

fn nav_item(tab: NavTab, code: Signal<String>) -> AnyView {
    match tab.path_segment() {
        Some(_) => view! {
            <A href=move || tab.href(&code.get()).unwrap_or_default()>
                {tab.label()}
            </A>
        }
        .into_any(),
        // no view behind this tab yet
        None => view! { <span>{tab.label()}</span> }.into_any(),
    }
}
