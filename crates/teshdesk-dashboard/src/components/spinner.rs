//! Busy indicators

use leptos::*;

const INLINE_PX: u32 = 16;
const BLOCK_PX: u32 = 40;

/// Rotating arc; `inline` sizes it to sit inside a button label
#[component]
pub fn Spinner(#[prop(optional)] inline: bool) -> impl IntoView {
    let px = if inline { INLINE_PX } else { BLOCK_PX };

    view! {
        <svg
            class=if inline { "spinner spinner-inline" } else { "spinner" }
            width=px
            height=px
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <circle class="spinner-track" cx="12" cy="12" r="10" fill="none" stroke-width="3" />
            <circle
                class="spinner-arc"
                cx="12"
                cy="12"
                r="10"
                fill="none"
                stroke-width="3"
                stroke-linecap="round"
                stroke-dasharray="31.4 31.4"
            />
        </svg>
    }
}

/// Placeholder for a section whose data is still in flight
#[component]
pub fn LoadingState(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="loading-state" role="status" aria-live="polite">
            <Spinner />
            <p class="loading-text">{text}</p>
        </div>
    }
}
