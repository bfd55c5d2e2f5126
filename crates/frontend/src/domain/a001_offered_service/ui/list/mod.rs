//! Service search - offered services with a link into the booking wizard

use crate::domain::a001_offered_service::api::fetch_catalog;
use crate::shared::number_format::format_price;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::use_session;
use contracts::domain::a001_offered_service::OfferedService;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Input, Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub preparation: String,
    pub price: String,
}

impl From<OfferedService> for ServiceRow {
    fn from(s: OfferedService) -> Self {
        Self {
            id: s.id.to_string(),
            name: s.name,
            category: s.category.unwrap_or_else(|| "-".to_string()),
            preparation: s.preparation.unwrap_or_else(|| "-".to_string()),
            price: format_price(s.price),
        }
    }
}

fn matches_query(row: &ServiceRow, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty()
        || row.name.to_lowercase().contains(&query)
        || row.category.to_lowercase().contains(&query)
}

#[component]
pub fn ServiceSearchPage() -> impl IntoView {
    let session = use_session();
    let (items, set_items) = signal::<Vec<ServiceRow>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let search_query = RwSignal::new(String::new());

    let session_now = session.get_untracked();
    spawn_local(async move {
        match fetch_catalog(&session_now).await {
            Ok(services) => {
                let rows: Vec<ServiceRow> = services
                    .into_iter()
                    .filter(|s| s.is_active)
                    .map(Into::into)
                    .collect();
                let _ = set_items.try_set(rows);
            }
            Err(e) => {
                log::error!("catalog load failed: {}", e);
                let _ = set_error.try_set(Some(e));
            }
        }
        let _ = set_loading.try_set(false);
    });

    let filtered = Memo::new(move |_| {
        let query = search_query.get();
        items
            .get()
            .into_iter()
            .filter(|row| matches_query(row, &query))
            .collect::<Vec<_>>()
    });

    view! {
        <PageFrame page_id="a001_offered_service--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{format!("{} disponíveis", OfferedService::list_name())}</h1>
                </div>
                <div class="page__header-right">
                    <div style="width: 350px;">
                        <Input value=search_query placeholder="Buscar por nome ou categoria..." />
                    </div>
                </div>
            </div>

            <div class="page__content">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="page__placeholder">"Carregando..."</p> }
                >
                    <Show
                        when=move || error.get().is_none()
                        fallback=move || view! {
                            <div class="page__error">{error.get().unwrap_or_default()}</div>
                        }
                    >
                        <Show
                            when=move || !filtered.get().is_empty()
                            fallback=|| view! {
                                <p class="page__placeholder">"Nenhum exame encontrado"</p>
                            }
                        >
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Exame"</TableHeaderCell>
                                        <TableHeaderCell>"Categoria"</TableHeaderCell>
                                        <TableHeaderCell>"Preparo"</TableHeaderCell>
                                        <TableHeaderCell>"Preço"</TableHeaderCell>
                                        <TableHeaderCell>""</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <For
                                        each=move || filtered.get()
                                        key=|row| row.id.clone()
                                        children=move |row| {
                                            let href = format!("/book/{}", urlencoding::encode(&row.id));
                                            view! {
                                                <TableRow>
                                                    <TableCell><TableCellLayout>{row.name}</TableCellLayout></TableCell>
                                                    <TableCell><TableCellLayout>{row.category}</TableCellLayout></TableCell>
                                                    <TableCell><TableCellLayout>{row.preparation}</TableCellLayout></TableCell>
                                                    <TableCell><TableCellLayout>{row.price}</TableCellLayout></TableCell>
                                                    <TableCell>
                                                        <A href=href>"Agendar"</A>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        }
                                    />
                                </TableBody>
                            </Table>
                        </Show>
                    </Show>
                </Show>
            </div>
        </PageFrame>
    }
}
