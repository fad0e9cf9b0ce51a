use crate::app_shell::AppShell;
use crate::shared::api_utils::{ApiClient, ApiConfig};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let client = ApiClient::browser(ApiConfig::from_environment());
    log::info!("price tracker API at {}", client.config().base_url());

    // Every view fetches through this client.
    provide_context(client);

    view! {
        <ConfigProvider>
            <AppShell />
        </ConfigProvider>
    }
}
