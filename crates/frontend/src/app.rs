use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::admin::page::AdminPage;
use crate::shared::notify::{NotifyService, Toast};
use crate::storefront::cart::CartService;
use crate::storefront::page::StorefrontPage;
use crate::system::auth::context;

#[component]
pub fn App() -> impl IntoView {
    // App-wide services: sessions restored from localStorage, one cart, one
    // toast channel.
    context::provide_sessions();
    provide_context(NotifyService::new());
    provide_context(CartService::new());

    view! {
        <Router>
            <Toast />
            <Routes fallback=|| view! { <p class="not-found">"Página não encontrada"</p> }>
                <Route path=path!("/") view=StorefrontPage />
                <Route path=path!("/admin") view=AdminPage />
            </Routes>
        </Router>
    }
}
