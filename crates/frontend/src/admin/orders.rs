use contracts::orders::{Order, OrderDetail, OrderStatus, UpdateStatusRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::admin::api;
use crate::shared::format::format_price;
use crate::shared::notify::use_notify;
use crate::system::auth::context;

/// Timestamps arrive as RFC 3339; the table shows them without the noise.
fn format_timestamp(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn status_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "Pendente",
        OrderStatus::Confirmed => "Confirmado",
        OrderStatus::Shipped => "Enviado",
        OrderStatus::Completed => "Concluído",
        OrderStatus::Cancelled => "Cancelado",
    }
}

#[component]
pub fn OrdersTab() -> impl IntoView {
    let admin_session = context::use_admin_session();
    let notify = use_notify();

    let (orders, set_orders) = signal::<Vec<Order>>(Vec::new());
    let (selected, set_selected) = signal::<Option<OrderDetail>>(None);

    let fetch = move || {
        spawn_local(async move {
            let Some(token) = admin_session.get_untracked().token else {
                return;
            };
            match api::get_json::<Vec<Order>>("/api/admin/orders", &token).await {
                Ok(v) => set_orders.set(v),
                Err(e) => notify.show(format!("Erro ao carregar pedidos: {}", e)),
            }
        });
    };
    fetch();

    let open_detail = move |id: i32| {
        spawn_local(async move {
            let Some(token) = admin_session.get_untracked().token else {
                return;
            };
            match api::get_json::<OrderDetail>(&format!("/api/admin/orders/{}", id), &token).await {
                Ok(detail) => set_selected.set(Some(detail)),
                Err(e) => notify.show(format!("Erro ao carregar pedido: {}", e)),
            }
        });
    };

    let change_status = move |id: i32, status: String| {
        spawn_local(async move {
            let Some(token) = admin_session.get_untracked().token else {
                return;
            };
            let body = UpdateStatusRequest { status };
            match api::put_json::<_, OrderDetail>(
                &format!("/api/admin/orders/{}/status", id),
                &token,
                &body,
            )
            .await
            {
                Ok(detail) => {
                    set_selected.set(Some(detail));
                    notify.show("Status do pedido atualizado!");
                    fetch();
                }
                Err(e) => notify.show(format!("Erro ao atualizar status: {}", e)),
            }
        });
    };

    view! {
        <div class="admin-section">
            <div class="admin-section__header">
                <h2>"Pedidos"</h2>
                <div class="admin-section__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        "Atualizar"
                    </button>
                </div>
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Cliente"</th>
                        <th>"E-mail"</th>
                        <th>"Total"</th>
                        <th>"Status"</th>
                        <th>"Criado em"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = orders.get();
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="6" class="table__empty">"Nenhum pedido registrado"</td>
                                </tr>
                            }
                            .into_any()
                        } else {
                            rows.into_iter().map(|order| {
                                let id = order.id;
                                view! {
                                    <tr class="table__row--clickable" on:click=move |_| open_detail(id)>
                                        <td>{order.id}</td>
                                        <td>{order.customer_name.clone()}</td>
                                        <td>{order.customer_email.clone()}</td>
                                        <td>{format_price(order.total_amount)}</td>
                                        <td>{status_label(order.status)}</td>
                                        <td>{format_timestamp(&order.created_at)}</td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }
                    }}
                </tbody>
            </table>

            {move || selected.get().map(|detail| {
                let id = detail.order.id;
                let current_status = detail.order.status;
                view! {
                    <div class="modal" on:click=move |_| set_selected.set(None)>
                        <div class="modal__box" on:click=|ev| ev.stop_propagation()>
                            <div class="modal__header">
                                <h2>{format!("Pedido #{}", id)}</h2>
                                <button class="modal__close" on:click=move |_| set_selected.set(None)>"×"</button>
                            </div>

                            <div class="order-detail">
                                <p>
                                    <strong>"Cliente: "</strong>
                                    {detail.order.customer_name.clone()}
                                    {(!detail.order.customer_email.is_empty())
                                        .then(|| format!(" ({})", detail.order.customer_email))}
                                </p>
                                <p><strong>"Criado em: "</strong>{format_timestamp(&detail.order.created_at)}</p>

                                <table class="table">
                                    <thead>
                                        <tr>
                                            <th>"Produto"</th>
                                            <th>"Qtd."</th>
                                            <th>"Preço unit."</th>
                                            <th>"Subtotal"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {detail.items.iter().map(|item| view! {
                                            <tr>
                                                <td>{item.product_name.clone()}</td>
                                                <td>{item.quantity}</td>
                                                <td>{format_price(item.unit_price)}</td>
                                                <td>{format_price(item.unit_price * item.quantity as f64)}</td>
                                            </tr>
                                        }).collect_view()}
                                    </tbody>
                                </table>

                                <p class="order-detail__total">
                                    <strong>"Total: "</strong>{format_price(detail.order.total_amount)}
                                </p>

                                {detail.whatsapp.as_ref().and_then(|w| w.customer_message.clone()).map(|message| view! {
                                    <div class="order-detail__message">
                                        <strong>"Mensagem do WhatsApp:"</strong>
                                        <pre>{message}</pre>
                                    </div>
                                })}

                                <div class="form-group">
                                    <label for="order-status">"Status"</label>
                                    <select
                                        id="order-status"
                                        prop:value=current_status.as_str()
                                        on:change=move |ev| change_status(id, event_target_value(&ev))
                                    >
                                        {OrderStatus::all().iter().map(|s| view! {
                                            <option value={s.as_str()} selected={*s == current_status}>
                                                {status_label(*s)}
                                            </option>
                                        }).collect_view()}
                                    </select>
                                </div>
                            </div>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
