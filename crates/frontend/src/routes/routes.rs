use contracts::dashboard::NavTab;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::DashboardPage;
use crate::layout::global_context::DashboardContext;

/// Dataset opened when the app is entered at `/`
pub const DEFAULT_CODE: &str = "ch";

#[component]
pub fn AppRoutes(ctx: DashboardContext) -> impl IntoView {
    let default_href = NavTab::Cases.href(DEFAULT_CODE).unwrap_or_default();

    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=path!("/") view=move || view! { <Redirect path=default_href.clone() /> } />
                <Route
                    path=path!("/:code/cases")
                    view=move || view! { <DashboardPage ctx=ctx tab=NavTab::Cases /> }
                />
                <Route
                    path=path!("/:code/mobility")
                    view=move || view! { <DashboardPage ctx=ctx tab=NavTab::Mobility /> }
                />
                <Route
                    path=path!("/:code/capacity")
                    view=move || view! { <DashboardPage ctx=ctx tab=NavTab::Capacity /> }
                />
            </Routes>
        </Router>
    }
}
