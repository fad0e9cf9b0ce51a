use crate::shared::icons::icon;
use contracts::domain::a002_price_alert::AlertDirection;
use leptos::prelude::*;
use thaw::*;

/// Badge colour for a price movement: increases are alerts, everything else is favorable
pub fn direction_color(direction: AlertDirection) -> BadgeColor {
    match direction {
        AlertDirection::Increase => BadgeColor::Danger,
        AlertDirection::Decrease => BadgeColor::Success,
    }
}

/// Change percentage tagged with its direction
#[component]
pub fn ChangeBadge(
    direction: AlertDirection,
    /// Already formatted percentage, e.g. "-3.46%"
    #[prop(into)]
    label: String,
) -> impl IntoView {
    let arrow = match direction {
        AlertDirection::Increase => "trend-up",
        AlertDirection::Decrease => "trend-down",
    };

    view! {
        <span
            class=format!("change-badge change-badge--{}", direction.label())
            data-direction=direction.label()
        >
            <Badge appearance=BadgeAppearance::Filled color=direction_color(direction)>
                {icon(arrow)}
                <span>{label}</span>
            </Badge>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increase_is_danger_and_decrease_is_success() {
        assert!(matches!(
            direction_color(AlertDirection::Increase),
            BadgeColor::Danger
        ));
        assert!(matches!(
            direction_color(AlertDirection::Decrease),
            BadgeColor::Success
        ));
    }
}
