//! Table pieces shared by the desktop and mobile user lists

use leptos::*;
use teshdesk_core::{highlight, AccountStatus, CheckState, PageSize, PageView};

use crate::components::forms::Select;
use crate::components::icons::*;

/// Status badge for a record status label
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = AccountStatus::badge_class(&status);
    view! { <span class=format!("badge {}", class)>{status}</span> }
}

/// Text with every case-insensitive match of `query` wrapped in `<mark>`
#[component]
pub fn Highlighted(#[prop(into)] text: String, #[prop(into)] query: String) -> impl IntoView {
    highlight(&text, &query)
        .into_iter()
        .map(|segment| {
            if segment.highlighted {
                view! { <mark class="search-hit">{segment.text}</mark> }.into_view()
            } else {
                segment.text.into_view()
            }
        })
        .collect_view()
}

/// Tri-state checkbox for "select all visible"
#[component]
pub fn HeaderCheckbox(
    #[prop(into)] state: Signal<CheckState>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <input
            type="checkbox"
            class="row-checkbox"
            aria-label="Select all on this page"
            prop:checked=move || state.get().is_checked()
            prop:indeterminate=move || state.get().is_indeterminate()
            on:change=move |_| on_toggle.call(())
        />
    }
}

/// Per-row selection checkbox
#[component]
pub fn RowCheckbox(
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <input
            type="checkbox"
            class="row-checkbox"
            aria-label="Select row"
            prop:checked=move || checked.get()
            on:click=|e| e.stop_propagation()
            on:change=move |_| on_toggle.call(())
        />
    }
}

/// Page size selector, range label and prev/next controls
#[component]
pub fn PageFooter(
    #[prop(into)] page: Signal<PageView>,
    #[prop(into)] page_size: Signal<PageSize>,
    #[prop(into)] on_page_size: Callback<PageSize>,
    #[prop(into)] on_prev: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    let options = PageSize::ALL
        .iter()
        .map(|size| (size.get().to_string(), size.get().to_string()))
        .collect::<Vec<_>>();

    view! {
        <div class="pagination">
            <div class="pagination-size">
                <span class="pagination-caption">"Rows per page:"</span>
                <Select
                    value=Signal::derive(move || page_size.get().get().to_string())
                    options=options
                    on_change=move |value: String| {
                        if let Some(size) = value.parse::<usize>().ok().and_then(|n| PageSize::try_from(n).ok()) {
                            on_page_size.call(size);
                        }
                    }
                    class="pagination-select"
                />
            </div>
            <span class="pagination-info">{move || page.with(|p| p.label.clone())}</span>
            <div class="pagination-controls">
                <button
                    class="btn btn-ghost btn-sm"
                    aria-label="Previous page"
                    disabled=move || page.with(|p| !p.has_prev)
                    on:click=move |_| on_prev.call(())
                >
                    <IconChevronLeft size=IconSize::Sm />
                </button>
                <button
                    class="btn btn-ghost btn-sm"
                    aria-label="Next page"
                    disabled=move || page.with(|p| !p.has_next)
                    on:click=move |_| on_next.call(())
                >
                    <IconChevronRight size=IconSize::Sm />
                </button>
            </div>
        </div>
    }
}
