use crate::layout::global_context::DashboardContext;
use crate::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // State handle is passed down explicitly rather than provided as context.
    let ctx = DashboardContext::new();
    ctx.load();

    view! {
        <AppRoutes ctx=ctx />
    }
}
