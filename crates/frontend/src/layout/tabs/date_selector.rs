use contracts::dashboard::dates::{
    parse_date_input, slider_label_position, slider_label_ticks,
};
use contracts::dashboard::display::format_data_string_for_display;
use contracts::dashboard::{format_date_to_data, format_for_display};
use leptos::prelude::*;

use crate::layout::global_context::DashboardContext;
use crate::shared::components::DateInput;

/// Date input and slider over the available dates.
///
/// Both controls stay hidden until there is at least one date and a
/// selected index.
#[component]
pub fn DateSelector(ctx: DashboardContext) -> impl IntoView {
    let bridge = ctx.bridge();
    let config = ctx.config;

    let visible = move || ctx.state.with(|s| s.date_controls_visible());
    let dates = Memo::new(move |_| ctx.state.with(|s| s.dates.clone()));
    let selected_index = Memo::new(move |_| ctx.state.with(|s| s.selected_date_index));

    let selected_value = Signal::derive(move || {
        ctx.state
            .with(|s| s.selected_date().map(format_date_to_data))
            .unwrap_or_default()
    });
    let selected_display = Signal::derive(move || {
        let config = config.get();
        ctx.state
            .with(|s| s.selected_date().map(|d| format_for_display(d, &config)))
    });
    let min_date = Signal::derive(move || {
        dates.with(|d| d.min_date().map(format_date_to_data).unwrap_or_default())
    });
    let max_date = Signal::derive(move || {
        dates.with(|d| d.max_date().map(format_date_to_data).unwrap_or_default())
    });
    let slider_max = move || dates.with(|d| d.len().saturating_sub(1).to_string());

    let on_date_input = move |raw: String| {
        match parse_date_input(&raw) {
            Ok(date) => {
                dates.with_untracked(|list| bridge.on_date_change(date, list));
            }
            Err(e) => log::warn!("date input ignored: {}", e),
        }
    };

    let slider_labels = move || {
        let config = config.get();
        dates.with(|list| {
            slider_label_ticks(list.len())
                .into_iter()
                .map(|index| {
                    let label = list
                        .get(index)
                        .map(|d| format_data_string_for_display(d, &config))
                        .unwrap_or_default();
                    let style = format!("left: {}%;", slider_label_position(index, list.len()));
                    view! { <span class="date-slider__label" style=style>{label}</span> }
                })
                .collect_view()
        })
    };

    view! {
        <div class="controls-date">
            <div class="slider">
                <Show when=visible>
                    <DateInput
                        value=selected_value
                        min=min_date
                        max=max_date
                        title=selected_display
                        on_change=on_date_input
                    />
                    <span class="date-input__display">
                        {move || selected_display.get().unwrap_or_default()}
                    </span>
                </Show>
            </div>
        </div>
        <div class="date-slider">
            <Show when=visible>
                <input
                    type="range"
                    class="date-slider__input"
                    min="0"
                    max=slider_max
                    step="1"
                    prop:value=move || selected_index.get().unwrap_or(0).to_string()
                    on:input=move |ev| {
                        if let Err(e) = bridge.on_date_index_change(&event_target_value(&ev)) {
                            log::warn!("slider value ignored: {}", e);
                        }
                    }
                />
                <div class="date-slider__labels">{slider_labels}</div>
            </Show>
        </div>
    }
}
