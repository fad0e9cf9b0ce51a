mod row;

use super::history::ProductHistoryPanel;
use crate::domain::a001_product::api;
use crate::shared::api_utils::use_api_client;
use crate::shared::components::{render_phase, PageHeader};
use crate::shared::date_utils::format_local_datetime;
use crate::shared::export::open_in_new_context;
use crate::shared::fetch_state::FetchResource;
use crate::shared::icons::icon;
use contracts::domain::a001_product::ProductDto;
use leptos::prelude::*;
use row::{product_rows, ProductRow};
use thaw::*;

pub const FETCH_FAILED: &str = "Failed to fetch products";

#[component]
fn ProductTable(rows: Vec<ProductRow>, on_history: Callback<i64>) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"ID"</TableHeaderCell>
                        <TableHeaderCell>"Title"</TableHeaderCell>
                        <TableHeaderCell>"Current Price"</TableHeaderCell>
                        <TableHeaderCell>"Last Updated"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            let id = row.id;
                            let title = match row.url {
                                Some(url) => view! {
                                    <a href=url target="_blank" rel="noopener noreferrer">{row.title}</a>
                                }
                                .into_any(),
                                None => view! { <span>{row.title}</span> }.into_any(),
                            };
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{id.to_string()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{title}</TableCellLayout></TableCell>
                                    <TableCell class="table__cell--right">
                                        <TableCellLayout>{row.current_price}</TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{row.last_updated}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            size=ButtonSize::Small
                                            on_click=move |_| on_history.run(id)
                                        >
                                            "History"
                                        </Button>
                                    </TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}

/// Products tab: every tracked product with its latest price
#[component]
pub fn ProductList() -> impl IntoView {
    let client = use_api_client();
    let products = FetchResource::<Vec<ProductDto>>::new(FETCH_FAILED);
    let selected = RwSignal::new(None::<ProductDto>);

    let load = {
        let client = client.clone();
        move || products.load(api::fetch_products(client.clone()))
    };

    // Initial load (once, on mount)
    load();

    let export_url = client.export_csv_url();
    let on_export = move |_: leptos::ev::MouseEvent| {
        if let Err(e) = open_in_new_context(&export_url) {
            log::error!("CSV export: {}", e);
        }
    };

    let on_history = Callback::new(move |id: i64| {
        let product = products
            .with_ready_untracked(|items| items.iter().find(|p| p.id == id).cloned())
            .flatten();
        selected.set(product);
    });

    view! {
        <div id="a001_product--list" class="page">
            <PageHeader
                title="Products"
                icon_name="products"
                count=Signal::derive(move || products.ready_len(Vec::len))
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=Signal::derive(move || products.is_loading())
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_export>
                    {icon("download")}
                    " Export CSV"
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || render_phase(products.phase(), move |items: Vec<ProductDto>| {
                    let rows = product_rows(&items, format_local_datetime);
                    view! { <ProductTable rows=rows on_history=on_history /> }.into_any()
                })}
            </div>

            {move || selected.get().map(|product| view! {
                <ProductHistoryPanel
                    product=product
                    on_close=Callback::new(move |_| selected.set(None))
                />
            })}
        </div>
    }
}
