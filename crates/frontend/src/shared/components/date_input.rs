use leptos::prelude::*;

/// DateInput component with native date picker
/// Browser displays the date in its own locale format
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format, empty when unset
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format, or empty when cleared)
    on_change: impl Fn(String) + 'static,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    view! {
        <label class="date-input">
            {label.map(|l| view! { <span class="date-input__label">{l}</span> })}
            <input
                class="date-input__field"
                type="date"
                prop:value=value
                on:input=move |ev| {
                    on_change(event_target_value(&ev));
                }
            />
        </label>
    }
}
