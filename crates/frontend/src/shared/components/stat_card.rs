use crate::shared::icons::icon;
use crate::shared::number_format::format_count;
use leptos::prelude::*;

/// Single headline figure of the statistics view
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    value: u64,
    /// Accent modifier, e.g. "primary" or "secondary"
    #[prop(optional, default = "primary")]
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-card--{}", accent)>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{format_count(value)}</div>
            </div>
        </div>
    }
}
