/// List helpers (search, UI components)
use leptos::prelude::*;

/// Items that can be matched by a search query
pub trait Searchable {
    /// Whether the item matches `needle`, which is already lowercased and non-empty
    fn matches_filter(&self, needle: &str) -> bool;
}

/// Normalize a search query; `None` means search is inactive
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Search field with a clear button.
///
/// Every keystroke is written to `value`; debouncing is up to the consumer.
#[component]
pub fn SearchInput(
    /// Current search value
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(into)]
    placeholder: Signal<String>,
    /// Tooltip of the clear button
    #[prop(into)]
    clear_title: Signal<String>,
) -> impl IntoView {
    let is_filter_active = move || normalize_query(&value.get()).is_some();

    view! {
        <div style="position: relative; display: inline-flex; align-items: center; margin-bottom: 12px;">
            <input
                type="text"
                placeholder=move || placeholder.get()
                style=move || format!(
                    "width: 280px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || if !value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=move |_| value.set(String::new())
                        title=move || clear_title.get()
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
