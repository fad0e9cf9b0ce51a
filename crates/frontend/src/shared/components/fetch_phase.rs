use crate::shared::fetch_state::FetchPhase;
use leptos::prelude::*;
use thaw::*;

/// Renders exactly one of: spinner, error text, or the ready content
pub fn render_phase<T, F>(phase: FetchPhase<T>, ready: F) -> AnyView
where
    F: FnOnce(T) -> AnyView,
{
    match phase {
        FetchPhase::Loading => view! {
            <div class="fetch-phase fetch-phase--loading" aria-busy="true">
                <Spinner />
            </div>
        }
        .into_any(),
        FetchPhase::Failed(message) => view! {
            <div class="warning-box warning-box--error" role="alert">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{message}</span>
            </div>
        }
        .into_any(),
        FetchPhase::Ready(data) => ready(data),
    }
}
