mod state;

use crate::domain::a002_price_alert::api::{self, AlertSnapshot};
use crate::shared::api_utils::{use_api_client, ApiClient};
use crate::shared::components::{render_phase, ChangeBadge, PageHeader};
use crate::shared::date_utils::format_local_datetime;
use crate::shared::fetch_state::FetchResource;
use crate::shared::icons::icon;
use contracts::domain::a002_price_alert::AlertThreshold;
use leptos::prelude::*;
use state::{alert_rows, empty_message, next_threshold, AlertRow};
use thaw::*;

pub const FETCH_FAILED: &str = "Failed to fetch alerts";

#[component]
fn AlertTable(rows: Vec<AlertRow>) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"ID"</TableHeaderCell>
                        <TableHeaderCell>"Title"</TableHeaderCell>
                        <TableHeaderCell>"Previous Price"</TableHeaderCell>
                        <TableHeaderCell>"Current Price"</TableHeaderCell>
                        <TableHeaderCell>"Change"</TableHeaderCell>
                        <TableHeaderCell>"Last Updated"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            let title = match row.url {
                                Some(url) => view! {
                                    <a href=url target="_blank" rel="noopener noreferrer">{row.title}</a>
                                }
                                .into_any(),
                                None => view! { <span>{row.title}</span> }.into_any(),
                            };
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{row.id.to_string()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{title}</TableCellLayout></TableCell>
                                    <TableCell class="table__cell--right">
                                        <TableCellLayout>{row.previous_price}</TableCellLayout>
                                    </TableCell>
                                    <TableCell class="table__cell--right">
                                        <TableCellLayout>{row.current_price}</TableCellLayout>
                                    </TableCell>
                                    <TableCell class="table__cell--center">
                                        <ChangeBadge direction=row.direction label=row.change_label />
                                    </TableCell>
                                    <TableCell><TableCellLayout>{row.last_updated}</TableCellLayout></TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}

/// Wires the threshold field to the alert fetch.
///
/// Input that parses to a new threshold replaces it; invalid or unchanged input
/// is ignored. Each threshold change, including the initial one, loads alerts.
fn watch_threshold(
    client: ApiClient,
    alerts: FetchResource<AlertSnapshot>,
    threshold: RwSignal<AlertThreshold>,
    threshold_input: RwSignal<String>,
) {
    Effect::new(move |_| {
        let raw = threshold_input.get();
        if let Some(next) = next_threshold(threshold.get_untracked(), &raw) {
            log::debug!("alert threshold -> {}%", next);
            threshold.set(next);
        }
    });

    Effect::new(move |_| {
        let current = threshold.get();
        alerts.load(api::fetch_alerts(client.clone(), current));
    });
}

/// Price Alerts tab: products whose price moved by at least the threshold.
/// Every accepted threshold change re-fetches from scratch.
#[component]
pub fn PriceAlertsList() -> impl IntoView {
    let client = use_api_client();
    let alerts = FetchResource::<AlertSnapshot>::new(FETCH_FAILED);
    let threshold = RwSignal::new(AlertThreshold::default());
    let threshold_input = RwSignal::new(AlertThreshold::default().to_string());

    watch_threshold(client.clone(), alerts, threshold, threshold_input);

    let refresh = move |_: leptos::ev::MouseEvent| {
        alerts.load(api::fetch_alerts(client.clone(), threshold.get_untracked()));
    };

    view! {
        <div id="a002_price_alert--list" class="page">
            <PageHeader
                title="Price Alerts"
                icon_name="bell"
                count=Signal::derive(move || alerts.ready_len(|s| s.alerts.len()))
            >
                <div class="threshold-field">
                    <Label>"Threshold (%)"</Label>
                    <Input
                        value=threshold_input
                        input_type=InputType::Number
                        attr:min="0"
                        attr:step="0.5"
                        attr:style="width: 150px;"
                    />
                </div>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=refresh
                    disabled=Signal::derive(move || alerts.is_loading())
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || render_phase(alerts.phase(), |snapshot: AlertSnapshot| {
                    if snapshot.alerts.is_empty() {
                        return view! {
                            <div class="empty-state">
                                <span class="text-muted">{empty_message(snapshot.threshold)}</span>
                            </div>
                        }
                        .into_any();
                    }
                    let rows = alert_rows(&snapshot.alerts, format_local_datetime);
                    view! { <AlertTable rows=rows /> }.into_any()
                })}
            </div>
        </div>
    }
}
