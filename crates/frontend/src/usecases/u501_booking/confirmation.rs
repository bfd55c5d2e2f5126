//! Success page shown after a booking is finalized

use crate::domain::a003_order::api::fetch_order;
use crate::domain::a003_order::ui::{OrderStatusBadge, PaymentStatusBadge};
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::use_session;
use contracts::domain::a003_order::Order;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

/// `/booking/confirmation?order=<number>`
///
/// The order number is optional; without it only the generic message shows.
#[component]
pub fn BookingConfirmationPage() -> impl IntoView {
    let query = use_query_map();
    let session = use_session();
    let order_number = Memo::new(move |_| {
        query
            .with(|q| q.get("order"))
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
    });
    let (order, set_order) = signal::<Option<Order>>(None);

    Effect::new(move |_| {
        let Some(number) = order_number.get() else {
            set_order.set(None);
            return;
        };
        let session_now = session.get_untracked();
        spawn_local(async move {
            match fetch_order(&session_now, &number).await {
                Ok(found) => {
                    let _ = set_order.try_set(Some(found));
                }
                // The order number alone is enough to confirm
                Err(e) => log::warn!("order {} not loaded: {}", number, e),
            }
        });
    });

    view! {
        <PageFrame page_id="u501_booking--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Agendamento confirmado"</h1>
                </div>
            </div>

            <div class="page__content">
                <p>"Recebemos seu pedido. Você receberá as instruções de preparo por e-mail."</p>

                {move || order_number.get().map(|number| view! {
                    <p class="booking-confirmation__number">
                        "Número do pedido: " <strong>{number}</strong>
                    </p>
                })}

                {move || order.get().map(|order| {
                    let status = order.status.clone();
                    let payment_status = order.payment_status.clone();
                    view! {
                        <div class="booking-confirmation__status">
                            <OrderStatusBadge status=status />
                            <PaymentStatusBadge status=payment_status />
                            <span>{format!("Total: R$ {}", format_money(order.total_amount))}</span>
                        </div>
                    }
                })}

                <A href="/">"Voltar para os exames"</A>
            </div>
        </PageFrame>
    }
}
