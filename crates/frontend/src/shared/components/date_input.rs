use leptos::prelude::*;

/// DateInput component with native date picker.
/// The browser renders the value in its own locale; `title` carries the
/// dashboard's display format.
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives the raw input text)
    on_change: impl Fn(String) + 'static,
    /// Earliest selectable date, yyyy-mm-dd
    #[prop(into)]
    min: Signal<String>,
    /// Latest selectable date, yyyy-mm-dd
    #[prop(into)]
    max: Signal<String>,
    #[prop(optional, into)] title: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="date-input"
            placeholder="Select date"
            required=true
            min=move || min.get()
            max=move || max.get()
            title=move || title.get()
            prop:value=value
            on:change=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
