use crate::domain::a001_product::api;
use crate::shared::api_utils::use_api_client;
use crate::shared::components::{render_phase, DateInput};
use crate::shared::date_utils::format_local_datetime;
use crate::shared::fetch_state::FetchResource;
use crate::shared::icons::icon;
use crate::shared::number_format::format_price;
use contracts::domain::a001_product::{HistoryFilter, PricePointDto, ProductDto};
use leptos::prelude::*;
use thaw::*;

pub const FETCH_FAILED: &str = "Failed to fetch price history";

/// Price history of one product, shown under the product table.
/// Re-fetches whenever a date bound changes.
#[component]
pub fn ProductHistoryPanel(product: ProductDto, on_close: Callback<()>) -> impl IntoView {
    let client = use_api_client();
    let history = FetchResource::<Vec<PricePointDto>>::new(FETCH_FAILED);
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let product_id = product.id;

    Effect::new(move |_| {
        let filter = HistoryFilter {
            start_date: Some(start_date.get()),
            end_date: Some(end_date.get()),
        };
        history.load(api::fetch_history(client.clone(), product_id, filter));
    });

    view! {
        <section class="history-panel" data-product-id=product_id.to_string()>
            <div class="history-panel__header">
                <h3 class="history-panel__title">
                    {format!("Price history: {}", product.title)}
                </h3>
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <DateInput
                        label="From"
                        value=start_date
                        on_change=move |v| start_date.set(v)
                    />
                    <DateInput
                        label="To"
                        value=end_date
                        on_change=move |v| end_date.set(v)
                    />
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close.run(())
                    >
                        {icon("close")}
                    </Button>
                </Flex>
            </div>

            {move || render_phase(history.phase(), |points: Vec<PricePointDto>| {
                if points.is_empty() {
                    return view! {
                        <p class="text-muted">"No price history in the selected period"</p>
                    }
                    .into_any();
                }
                view! {
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Scraped At"</TableHeaderCell>
                                <TableHeaderCell>"Price"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {points
                                .into_iter()
                                .map(|point| view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{format_local_datetime(&point.scraped_at)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell class="table__cell--right">
                                            <TableCellLayout>{format_price(point.price)}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                })
                                .collect_view()}
                        </TableBody>
                    </Table>
                }
                .into_any()
            })}
        </section>
    }
}
