use leptos::prelude::*;

use crate::admin::categories::CategoriesTab;
use crate::admin::login::AdminLoginPage;
use crate::admin::orders::OrdersTab;
use crate::admin::products::ProductsTab;
use crate::admin::stats::DashboardTab;
use crate::system::auth::context;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Dashboard,
    Products,
    Categories,
    Orders,
}

/// Admin panel, gated on the admin session.
#[component]
pub fn AdminPage() -> impl IntoView {
    let admin_session = context::use_admin_session();

    view! {
        <Show
            when=move || admin_session.get().is_logged_in()
            fallback=|| view! { <AdminLoginPage /> }
        >
            <AdminPanel />
        </Show>
    }
}

#[component]
fn AdminPanel() -> impl IntoView {
    let admin_session = context::use_admin_session();
    let (tab, set_tab) = signal(AdminTab::Dashboard);

    let logout = move |_| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Deseja sair do painel administrativo?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if confirmed {
            context::clear_admin_session(admin_session);
        }
    };

    let tab_button = move |target: AdminTab, label: &'static str| {
        view! {
            <button
                class="admin-tab"
                class:admin-tab--active=move || tab.get() == target
                on:click=move |_| set_tab.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="admin">
            <header class="admin__header">
                <h1>"Casa da Beleza — Admin"</h1>
                <div class="admin__user">
                    {move || admin_session.get().user.map(|u| u.username).unwrap_or_default()}
                    <button class="admin__logout" on:click=logout>"Sair"</button>
                </div>
            </header>

            <nav class="admin__tabs">
                {tab_button(AdminTab::Dashboard, "Dashboard")}
                {tab_button(AdminTab::Products, "Produtos")}
                {tab_button(AdminTab::Categories, "Categorias")}
                {tab_button(AdminTab::Orders, "Pedidos")}
            </nav>

            <main class="admin__content">
                {move || match tab.get() {
                    AdminTab::Dashboard => view! { <DashboardTab /> }.into_any(),
                    AdminTab::Products => view! { <ProductsTab /> }.into_any(),
                    AdminTab::Categories => view! { <CategoriesTab /> }.into_any(),
                    AdminTab::Orders => view! { <OrdersTab /> }.into_any(),
                }}
            </main>
        </div>
    }
}
