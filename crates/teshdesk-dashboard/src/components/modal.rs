//! Modal Dialog Components

use crate::components::icons::*;
use leptos::*;

/// Modal size variants
#[derive(Debug, Clone, Copy, Default)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
}

impl ModalSize {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Small => "modal-sm",
            Self::Medium => "modal-md",
        }
    }
}

/// Close on Escape while the owning component is mounted
fn close_on_escape(on_close: Callback<()>) {
    let handle = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" {
            on_close.call(());
        }
    });
    on_cleanup(move || handle.remove());
}

/// Modal component
#[component]
pub fn Modal(
    #[prop(into)] show: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] title: String,
    #[prop(default = ModalSize::Medium)] size: ModalSize,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    close_on_escape(Callback::new(move |_| {
        if show.get_untracked() {
            on_close.call(());
        }
    }));

    let title_empty = title.is_empty();
    let title_display = store_value(title);
    let class = store_value(class);
    let children = store_value(children);

    view! {
        <Show when=move || show.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.call(())>
                <div
                    class=format!("modal {} {}", size.class(), class.get_value())
                    role="dialog"
                    aria-modal="true"
                    on:click=|e| e.stop_propagation()
                >
                    <div class="modal-header">
                        <Show when=move || !title_empty>
                            <h3 class="modal-title">{title_display.get_value()}</h3>
                        </Show>
                        <button class="btn btn-ghost modal-close" aria-label="Close" on:click=move |_| on_close.call(())>
                            <IconX />
                        </button>
                    </div>

                    <div class="modal-body">
                        {children.with_value(|children| children())}
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Confirmation dialog
#[component]
pub fn ConfirmDialog(
    #[prop(into)] show: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    #[prop(default = "Confirm".to_string(), into)] confirm_text: String,
    #[prop(default = "Cancel".to_string(), into)] cancel_text: String,
    #[prop(default = false)] danger: bool,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let title = store_value(title);
    let confirm_text = store_value(confirm_text);
    let cancel_text = store_value(cancel_text);

    view! {
        <Modal show=show on_close=on_cancel size=ModalSize::Small>
            <div class="confirm-dialog">
                <div class=format!("confirm-icon {}", if danger { "danger" } else { "" })>
                    {if danger {
                        view! { <IconAlertTriangle size=IconSize::Xl /> }.into_view()
                    } else {
                        view! { <IconAlertCircle size=IconSize::Xl /> }.into_view()
                    }}
                </div>
                <h3 class="confirm-title">{title.get_value()}</h3>
                <p class="confirm-message">{move || message.get()}</p>
                <div class="confirm-actions">
                    <button class="btn btn-ghost" on:click=move |_| on_cancel.call(())>
                        {cancel_text.get_value()}
                    </button>
                    <button
                        class=format!("btn {}", if danger { "btn-danger" } else { "btn-primary" })
                        on:click=move |_| on_confirm.call(())
                    >
                        {confirm_text.get_value()}
                    </button>
                </div>
            </div>
        </Modal>
    }
}

/// Side panel; open for as long as it is mounted
#[component]
pub fn Drawer(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    close_on_escape(on_close);

    view! {
        <div class="drawer-backdrop" on:click=move |_| on_close.call(())>
            <div
                class=format!("drawer drawer-right open {}", class)
                role="dialog"
                aria-modal="true"
                on:click=|e| e.stop_propagation()
            >
                <div class="drawer-header">
                    <h3 class="drawer-title">{title}</h3>
                    <button class="btn btn-ghost drawer-close" aria-label="Close" on:click=move |_| on_close.call(())>
                        <IconX />
                    </button>
                </div>

                <div class="drawer-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
