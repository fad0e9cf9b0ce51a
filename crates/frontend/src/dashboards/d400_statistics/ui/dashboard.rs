use crate::dashboards::d400_statistics::api;
use crate::shared::api_utils::use_api_client;
use crate::shared::components::{render_phase, BarChart, PageHeader, StatCard};
use crate::shared::fetch_state::FetchResource;
use crate::shared::icons::icon;
use contracts::dashboards::d400_statistics::StatisticsResponse;
use leptos::prelude::*;
use thaw::*;

pub const FETCH_FAILED: &str = "Failed to fetch statistics";

/// Statistics tab: headline counters and an overview chart
#[component]
pub fn StatisticsDashboard() -> impl IntoView {
    let client = use_api_client();
    let stats = FetchResource::<StatisticsResponse>::new(FETCH_FAILED);

    let load = move || stats.load(api::get_statistics(client.clone()));

    // Load data on mount
    load();

    view! {
        <div id="d400_statistics--dashboard" class="page page--dashboard">
            <PageHeader title="Statistics" icon_name="scans">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=Signal::derive(move || stats.is_loading())
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            {move || render_phase(stats.phase(), |snapshot: StatisticsResponse| view! {
                <div class="stat-grid">
                    <StatCard
                        label="Total Products"
                        icon_name="products"
                        value=snapshot.total_products
                    />
                    <StatCard
                        label="Total Scans"
                        icon_name="scans"
                        value=snapshot.total_scans
                        accent="secondary"
                    />
                </div>
                <div class="chart-card">
                    <h3 class="chart-card__title">"Overview Chart"</h3>
                    <BarChart series=snapshot.chart_series().to_vec() />
                </div>
            }
            .into_any())}
        </div>
    }
}
