use contracts::stats::DashboardStats;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::admin::api;
use crate::shared::format::format_price;
use crate::shared::notify::use_notify;
use crate::system::auth::context;

#[component]
pub fn DashboardTab() -> impl IntoView {
    let admin_session = context::use_admin_session();
    let notify = use_notify();

    let (stats, set_stats) = signal(DashboardStats::default());

    let fetch = move || {
        spawn_local(async move {
            let Some(token) = admin_session.get_untracked().token else {
                return;
            };
            match api::get_json::<DashboardStats>("/api/admin/stats", &token).await {
                Ok(v) => set_stats.set(v),
                Err(e) => notify.show(format!("Erro ao carregar estatísticas: {}", e)),
            }
        });
    };
    fetch();

    let card = move |label: &'static str, value: Signal<String>| {
        view! {
            <div class="stat-card">
                <div class="stat-card__value">{move || value.get()}</div>
                <div class="stat-card__label">{label}</div>
            </div>
        }
    };

    view! {
        <div class="admin-section">
            <div class="admin-section__header">
                <h2>"Dashboard"</h2>
                <div class="admin-section__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        "Atualizar"
                    </button>
                </div>
            </div>

            <div class="stat-grid">
                {card("Produtos ativos", Signal::derive(move || stats.get().total_products.to_string()))}
                {card("Categorias ativas", Signal::derive(move || stats.get().total_categories.to_string()))}
                {card("Valor em estoque", Signal::derive(move || format_price(stats.get().total_stock_value)))}
                {card("Pedidos", Signal::derive(move || stats.get().total_orders.to_string()))}
                {card("Pedidos pendentes", Signal::derive(move || stats.get().pending_orders.to_string()))}
                {card("Clientes", Signal::derive(move || stats.get().total_users.to_string()))}
            </div>
        </div>
    }
}
