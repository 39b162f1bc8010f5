pub mod global_context;
pub mod tabs;

use leptos::prelude::*;

use global_context::DashboardContext;
use tabs::Tabs;

/// Page frame shared by all dashboard views.
///
/// ```text
/// +------------------------------------------+
/// |  Tabs | country | date input + slider    |
/// +------------------------------------------+
/// |              view content                |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(ctx: DashboardContext, #[prop(into)] code: Signal<String>, center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <Tabs ctx=ctx code=code />
            <main class="app-main">
                {center()}
            </main>
        </div>
    }
}
