//! Application Shell - корневой компонент дашборда
//!
//! Owns the active tab and mounts exactly one view at a time. Switching away
//! unmounts the view, so coming back fetches fresh data.

use crate::dashboards::StatisticsDashboard;
use crate::domain::a001_product::ui::ProductList;
use crate::domain::a002_price_alert::ui::PriceAlertsList;
use crate::layout::tabs::{select_tab, DashboardTab};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let active_tab = RwSignal::new(DashboardTab::default());
    let selected_key = RwSignal::new(DashboardTab::default().key().to_string());

    // Tab list selection -> active tab
    Effect::new(move |_| {
        let key = selected_key.get();
        select_tab(active_tab, &key);
    });

    view! {
        <div class="app-layout">
            <h1 class="app-title">"Price Tracker Dashboard"</h1>

            <nav class="app-tabs">
                <TabList selected_value=selected_key>
                    {DashboardTab::ALL
                        .into_iter()
                        .map(|tab| view! { <Tab value=tab.key()>{tab.label()}</Tab> })
                        .collect_view()}
                </TabList>
            </nav>

            <main class="app-main">
                {move || match active_tab.get() {
                    DashboardTab::Products => view! { <ProductList /> }.into_any(),
                    DashboardTab::Statistics => view! { <StatisticsDashboard /> }.into_any(),
                    DashboardTab::Alerts => view! { <PriceAlertsList /> }.into_any(),
                }}
            </main>
        </div>
    }
}
