//! Form Input Components

use crate::components::icons::*;
use leptos::*;

/// Input field types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Search,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Search => "search",
        }
    }
}

fn wrapper_class(invalid: bool) -> &'static str {
    if invalid {
        "input-wrapper has-error"
    } else {
        "input-wrapper"
    }
}

/// Field caption; renders nothing for an empty label
#[component]
fn FieldLabel(text: String, required: bool) -> impl IntoView {
    (!text.is_empty()).then(|| {
        view! {
            <label class="form-label">
                {text}
                {required.then(|| view! { <span class="required-mark" aria-hidden="true">"*"</span> })}
            </label>
        }
    })
}

/// Text input component
///
/// Controlled: the caller owns the value and receives every keystroke.
#[component]
pub fn TextInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(default = InputType::Text)] input_type: InputType,
    #[prop(optional, into)] label: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(default = false)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] icon: Option<View>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let (reveal, set_reveal) = create_signal(false);
    let is_password = input_type == InputType::Password;

    let error = Signal::derive(move || error.get());
    let has_error = Signal::derive(move || invalid.get() || error.with(Option::is_some));

    let input_kind = move || match (is_password, reveal.get()) {
        (true, true) => "text",
        _ => input_type.as_str(),
    };

    view! {
        <div class=format!("form-group {}", class)>
            <FieldLabel text=label required=required />

            <div class=move || wrapper_class(has_error.get())>
                {icon.map(|icon| view! { <span class="input-icon">{icon}</span> })}

                <input
                    type=input_kind
                    class="form-input"
                    placeholder=placeholder
                    disabled=move || disabled.get()
                    aria-invalid=move || has_error.get().to_string()
                    prop:value=move || value.get()
                    on:input=move |e| on_input.call(event_target_value(&e))
                />

                {is_password.then(|| view! {
                    <button
                        type="button"
                        class="input-toggle-password"
                        aria-label="Show password"
                        on:click=move |_| set_reveal.update(|v| *v = !*v)
                    >
                        {move || if reveal.get() {
                            view! { <IconEyeOff size=IconSize::Sm /> }.into_view()
                        } else {
                            view! { <IconEye size=IconSize::Sm /> }.into_view()
                        }}
                    </button>
                })}
            </div>

            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
        </div>
    }
}

/// Select dropdown over `(value, label)` pairs
#[component]
pub fn Select(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Vec<(String, String)>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] label: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(default = false)] required: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let invalid = Signal::derive(move || invalid.get());
    let placeholder = (!placeholder.is_empty()).then(|| {
        view! {
            <option value="" selected=move || value.with(String::is_empty)>{placeholder}</option>
        }
    });

    view! {
        <div class=format!("form-group {}", class)>
            <FieldLabel text=label required=required />

            <div class="select-wrapper">
                <select
                    class=move || format!("form-select {}", if invalid.get() { "has-error" } else { "" })
                    aria-invalid=move || invalid.get().to_string()
                    on:change=move |e| on_change.call(event_target_value(&e))
                >
                    {placeholder}
                    {options.into_iter().map(|(opt_value, opt_label)| {
                        let selected_value = opt_value.clone();
                        view! {
                            <option
                                value=opt_value
                                selected=move || value.with(|v| *v == selected_value)
                            >
                                {opt_label}
                            </option>
                        }
                    }).collect_view()}
                </select>
                <IconChevronDown size=IconSize::Sm class="select-icon" />
            </div>
        </div>
    }
}

/// Labelled on/off switch
#[component]
pub fn Toggle(
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(optional, into)] label: MaybeSignal<String>,
) -> impl IntoView {
    view! {
        <label class="toggle">
            <input
                type="checkbox"
                class="toggle-input"
                prop:checked=move || checked.get()
                on:change=move |_| on_toggle.call(())
            />
            <span class="toggle-slider"></span>
            <span class="toggle-label">{move || label.get()}</span>
        </label>
    }
}
