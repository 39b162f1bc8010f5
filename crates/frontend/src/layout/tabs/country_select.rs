use contracts::dashboard::country::{flag_alt_text, flag_asset_path, is_menu_dismiss_key};
use contracts::dashboard::{CountryMenuItem, SelectionBridge, SelectionCommand};
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::DashboardContext;

/// Country dropdown: a trigger button with the selected country and a
/// non-filterable menu of all entries.
#[component]
pub fn CountrySelect(ctx: DashboardContext) -> impl IntoView {
    let bridge = ctx.bridge();
    let menu_open = RwSignal::new(false);

    let selected = Memo::new(move |_| {
        ctx.state.with(|s| {
            s.selected_country()
                .map(|entry| (s.selected_country_id.clone(), entry.clone()))
        })
    });

    let dismiss = window_event_listener(leptos::ev::keydown, move |ev: leptos::ev::KeyboardEvent| {
        if menu_open.get_untracked() && is_menu_dismiss_key(&ev.key()) {
            menu_open.set(false);
        }
    });
    on_cleanup(move || dismiss.remove());

    let items = Memo::new(move |_| {
        ctx.state
            .with(|s| s.country_select_entries.all_menu_items(&s.selected_country_id))
    });

    view! {
        <div class="controls-country">
            <Button
                class="country-select-button"
                appearance=ButtonAppearance::Subtle
                on_click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || selected.get().map(|(id, entry)| {
                    let flag = entry.has_flag.then(|| view! {
                        <img
                            class="table-icon"
                            src=flag_asset_path(&id)
                            alt=flag_alt_text(&entry.name)
                        />
                    });
                    view! {
                        {flag}
                        <span>{entry.name}</span>
                    }
                })}
                <span class="country-select-button__caret">"⇕"</span>
            </Button>

            <Show when=move || menu_open.get()>
                // click outside the menu closes it
                <div class="country-select-backdrop" on:click=move |_| menu_open.set(false)></div>
                <ul class="country-select-menu" role="listbox">
                    {move || {
                        let items = items.get();
                        if items.is_empty() {
                            view! {
                                <li class="country-select-item country-select-item--disabled">
                                    "No results."
                                </li>
                            }
                            .into_any()
                        } else {
                            items
                                .into_iter()
                                .map(|item| menu_item(item, bridge, menu_open))
                                .collect_view()
                                .into_any()
                        }
                    }}
                </ul>
            </Show>
        </div>
    }
}

fn menu_item<F>(
    item: CountryMenuItem,
    bridge: SelectionBridge<F>,
    menu_open: RwSignal<bool>,
) -> impl IntoView
where
    F: Fn(SelectionCommand) + Copy + Send + Sync + 'static,
{
    let CountryMenuItem {
        id,
        text,
        active,
        disabled,
    } = item;

    let class = format!(
        "country-select-item{}{}",
        if active { " country-select-item--active" } else { "" },
        if disabled { " country-select-item--disabled" } else { "" },
    );

    view! {
        <li
            class=class
            role="option"
            aria-selected=active.to_string()
            aria-disabled=disabled.to_string()
            on:click=move |_| {
                if disabled {
                    return;
                }
                bridge.on_country_id_change(id.clone());
                menu_open.set(false);
            }
        >
            {text}
        </li>
    }
}
