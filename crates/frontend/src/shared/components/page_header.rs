use leptos::prelude::*;
use thaw::*;

/// PageHeader component - header of every dashboard view
///
/// Shows the title with an item count badge once data is ready, and the
/// view's actions on the right.
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Icon name from the icon() helper
    #[prop(optional, into)]
    icon_name: MaybeProp<String>,

    /// Number of items currently displayed, hidden while `None`
    #[prop(optional, into)]
    count: Signal<Option<usize>>,

    /// Children content (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                {move || icon_name.get().map(|name| crate::shared::icons::icon(&name))}
                <h2 class="page__title">{title}</h2>
                {move || count.get().map(|n| view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        <span class="page__count">{n.to_string()}</span>
                    </Badge>
                })}
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
