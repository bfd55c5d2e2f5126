use crate::routes::routes::AppRoutes;
use crate::system::auth::SessionProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <SessionProvider>
                <AppRoutes />
            </SessionProvider>
        </ConfigProvider>
    }
}
