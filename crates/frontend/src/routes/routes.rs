use crate::domain::a001_offered_service::ui::ServiceSearchPage;
use crate::usecases::u501_booking::{BookingConfirmationPage, BookingWizardPage, ComboBookingPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Página não encontrada"</h1>
            <A href="/">"Voltar para os exames"</A>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ServiceSearchPage />
                    <Route path=path!("/book/combo/:combo_id") view=ComboBookingPage />
                    <Route path=path!("/book/:service_id") view=BookingWizardPage />
                    <Route path=path!("/booking/confirmation") view=BookingConfirmationPage />
                </Routes>
            </main>
        </Router>
    }
}
