use contracts::catalog::{Category, StorefrontProduct};
use contracts::orders::{OrderItemInput, WhatsappOrderRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::format::{format_price, stars};
use crate::shared::notify::use_notify;
use crate::storefront::api as store_api;
use crate::storefront::cart::{use_cart, CartEntry};
use crate::storefront::checkout::{
    build_buy_now_message, build_order_message, whatsapp_url, WHATSAPP_NUMBER,
};
use crate::system::auth::{api as auth_api, context};

/// Product list shaping for the grid: category filter, then text search over
/// name and category, then the selected ordering.
pub fn filter_and_sort(
    products: &[StorefrontProduct],
    category_id: Option<i32>,
    query: &str,
    sort_by: &str,
) -> Vec<StorefrontProduct> {
    let query = query.trim().to_lowercase();
    let mut visible: Vec<StorefrontProduct> = products
        .iter()
        .filter(|p| category_id.map_or(true, |id| p.category_id == Some(id)))
        .filter(|p| {
            query.is_empty()
                || p.name.to_lowercase().contains(&query)
                || p.category.to_lowercase().contains(&query)
        })
        .cloned()
        .collect();

    match sort_by {
        "Menor preço" => visible.sort_by(|a, b| a.price.total_cmp(&b.price)),
        "Maior preço" => visible.sort_by(|a, b| b.price.total_cmp(&a.price)),
        "Mais vendidos" => visible.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
        "Melhor avaliados" => visible.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        _ => {}
    }
    visible
}

fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

fn entry_from_product(p: &StorefrontProduct) -> CartEntry {
    CartEntry {
        id: p.id,
        name: p.name.clone(),
        price: p.price,
        image: p.image.clone(),
        quantity: 1,
    }
}

#[component]
pub fn StorefrontPage() -> impl IntoView {
    let cart = use_cart();
    let notify = use_notify();
    let user_session = context::use_user_session();

    let (products, set_products) = signal::<Vec<StorefrontProduct>>(Vec::new());
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());
    let (search, set_search) = signal(String::new());
    let (sort_by, set_sort_by) = signal("Relevância".to_string());
    let (active_category, set_active_category) = signal::<Option<i32>>(None);
    let (cart_open, set_cart_open) = signal(false);
    let (login_open, set_login_open) = signal(false);
    let (load_error, set_load_error) = signal::<Option<String>>(None);

    let fetch_catalog = move || {
        spawn_local(async move {
            match store_api::fetch_products().await {
                Ok(items) => {
                    set_products.set(items);
                    set_load_error.set(None);
                }
                Err(e) => set_load_error.set(Some(e)),
            }
            if let Ok(items) = store_api::fetch_categories().await {
                set_categories.set(items);
            }
        });
    };
    fetch_catalog();

    let visible_products = move || {
        filter_and_sort(
            &products.get(),
            active_category.get(),
            &search.get(),
            &sort_by.get(),
        )
    };

    let add_to_cart = move |p: &StorefrontProduct| {
        cart.add(entry_from_product(p));
        notify.show(format!("{} adicionado ao carrinho!", p.name));
    };

    let buy_now = move |p: &StorefrontProduct| {
        let message = build_buy_now_message(p);
        open_in_new_tab(&whatsapp_url(WHATSAPP_NUMBER, &message));
    };

    let user_button_label = move || {
        user_session
            .get()
            .user
            .map(|u| u.name)
            .unwrap_or_else(|| "Entrar".to_string())
    };

    let on_user_button = move |_| {
        if user_session.get_untracked().is_logged_in() {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message("Deseja sair da sua conta?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if confirmed {
                context::clear_user_session(user_session);
                notify.show("Você saiu da sua conta");
            }
        } else {
            set_login_open.set(true);
        }
    };

    view! {
        <div class="storefront">
            <header class="header">
                <div class="header__container">
                    <h1 class="header__logo">"Casa da Beleza"</h1>
                    <div class="search-box">
                        <input
                            type="text"
                            placeholder="Buscar produtos..."
                            prop:value=move || search.get()
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                        />
                    </div>
                    <nav class="header__actions">
                        <button class="header__button" on:click=on_user_button>
                            {user_button_label}
                        </button>
                        <button class="header__button" on:click=move |_| set_cart_open.set(true)>
                            "Carrinho"
                            <Show when=move || (cart.count() > 0)>
                                <span class="cart-count">{move || cart.count()}</span>
                            </Show>
                        </button>
                    </nav>
                </div>
            </header>

            <section class="categories">
                <button
                    class="category-btn"
                    class:category-btn--active=move || active_category.get().is_none()
                    on:click=move |_| set_active_category.set(None)
                >
                    "Todos"
                </button>
                {move || categories.get().into_iter().map(|category| {
                    let id = category.id;
                    view! {
                        <button
                            class="category-btn"
                            class:category-btn--active=move || active_category.get() == Some(id)
                            on:click=move |_| set_active_category.set(Some(id))
                        >
                            {category.name}
                        </button>
                    }
                }).collect_view()}
                <div class="sort">
                    <select on:change=move |ev| set_sort_by.set(event_target_value(&ev))>
                        <option>"Relevância"</option>
                        <option>"Menor preço"</option>
                        <option>"Maior preço"</option>
                        <option>"Mais vendidos"</option>
                        <option>"Melhor avaliados"</option>
                    </select>
                </div>
            </section>

            {move || load_error.get().map(|e| view! {
                <div class="error">{format!("Erro ao carregar produtos: {}", e)}</div>
            })}

            <section class="products-grid">
                {move || {
                    let visible = visible_products();
                    if visible.is_empty() {
                        view! {
                            <div class="products-grid__empty">
                                <h3>"Nenhum produto encontrado"</h3>
                                <p>"Tente outra categoria ou busca."</p>
                            </div>
                        }
                        .into_any()
                    } else {
                        visible.into_iter().map(|product| {
                            let product_add = product.clone();
                            let product_buy = product.clone();
                            view! {
                                <div class="product-card">
                                    <img class="product-card__image" src={product.image.clone()} alt={product.name.clone()} />
                                    <div class="product-card__info">
                                        <h3 class="product-card__title">{product.name.clone()}</h3>
                                        <div class="product-card__price">{format_price(product.price)}</div>
                                        <div class="product-card__rating">
                                            <span class="stars">{stars(product.rating)}</span>
                                            <span>{format!("({})", product.review_count)}</span>
                                        </div>
                                        <div class="product-card__actions">
                                            <button class="buy-now-btn" on:click=move |_| buy_now(&product_buy)>
                                                "Comprar Agora"
                                            </button>
                                            <button class="add-to-cart-btn" on:click=move |_| add_to_cart(&product_add)>
                                                "Carrinho"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        }).collect_view().into_any()
                    }
                }}
            </section>

            <Show when=move || cart_open.get()>
                <CartModal on_close=Callback::new(move |_| set_cart_open.set(false)) />
            </Show>

            <Show when=move || login_open.get()>
                <LoginModal on_close=Callback::new(move |_| set_login_open.set(false)) />
            </Show>
        </div>
    }
}

#[component]
fn CartModal(on_close: Callback<()>) -> impl IntoView {
    let cart = use_cart();
    let notify = use_notify();
    let user_session = context::use_user_session();

    let checkout = move |_| {
        let lines = cart.lines.get_untracked();
        if lines.is_empty() {
            notify.show("Seu carrinho está vazio!");
            return;
        }

        let message = build_order_message(&lines);
        let url = whatsapp_url(WHATSAPP_NUMBER, &message);

        // Bookkeeping order; the actual sale closes in the chat.
        let session = user_session.get_untracked();
        let (customer_name, customer_email) = session
            .user
            .map(|u| (u.name, u.email))
            .unwrap_or_else(|| ("Cliente".to_string(), String::new()));
        let request = WhatsappOrderRequest {
            customer_name,
            customer_email,
            items: lines
                .iter()
                .map(|l| OrderItemInput {
                    product_id: l.id,
                    product_name: l.name.clone(),
                    quantity: l.quantity,
                    unit_price: l.price,
                })
                .collect(),
            message: Some(message),
        };
        spawn_local(async move {
            if let Err(e) = store_api::post_whatsapp_order(&request).await {
                log::warn!("order bookkeeping failed: {}", e);
            }
        });

        open_in_new_tab(&url);
        cart.clear();
        on_close.run(());
        notify.show("Pedido enviado para o WhatsApp!");
    };

    view! {
        <div class="modal" on:click=move |_| on_close.run(())>
            <div class="modal__box" on:click=|ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h2>"Meu Carrinho"</h2>
                    <button class="modal__close" on:click=move |_| on_close.run(())>"×"</button>
                </div>

                <Show
                    when=move || !cart.lines.get().is_empty()
                    fallback=|| view! { <p class="cart-empty">"Seu carrinho está vazio"</p> }
                >
                    <div class="cart-items">
                        {move || cart.lines.get().into_iter().map(|line| {
                            let id = line.id;
                            view! {
                                <div class="cart-item">
                                    <img src={line.image.clone()} alt={line.name.clone()} />
                                    <div class="cart-item__details">
                                        <h4>{line.name.clone()}</h4>
                                        <div class="cart-item__price">{format_price(line.price)}</div>
                                    </div>
                                    <div class="cart-item__controls">
                                        <button on:click=move |_| cart.change_quantity(id, -1)>"-"</button>
                                        <span>{line.quantity}</span>
                                        <button on:click=move |_| cart.change_quantity(id, 1)>"+"</button>
                                        <button class="cart-item__remove" on:click=move |_| cart.remove(id)>
                                            "Remover"
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                    <div class="cart-footer">
                        <div class="cart-total">
                            "Total: " <strong>{move || format_price(cart.total())}</strong>
                        </div>
                        <button class="checkout-btn" on:click=checkout>
                            "Finalizar pela WhatsApp"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn LoginModal(on_close: Callback<()>) -> impl IntoView {
    let cart = use_cart();
    let notify = use_notify();
    let user_session = context::use_user_session();

    let (registering, set_registering) = signal(false);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let adopt_session = move |token: String, user: contracts::auth::UserInfo| {
        let greeting = format!("Bem-vindo(a), {}!", user.name);
        let user_id = user.id;
        context::set_user_session(user_session, token.clone(), user);

        // Local cart wins at login: push it up, or pull the server copy when
        // there is nothing local.
        if cart.lines.get_untracked().is_empty() {
            spawn_local(async move {
                if let Ok(response) = store_api::fetch_server_cart(&token, user_id).await {
                    let entries: Vec<CartEntry> = response
                        .items
                        .into_iter()
                        .map(|l| CartEntry {
                            id: l.product_id,
                            name: l.name,
                            price: l.price,
                            image: l.image.unwrap_or_default(),
                            quantity: l.quantity,
                        })
                        .collect();
                    if !entries.is_empty() {
                        cart.replace(entries);
                    }
                }
            });
        } else {
            cart.sync_to_server();
        }

        notify.show(greeting);
        on_close.run(());
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        if registering.get_untracked() && password.get_untracked() != confirm.get_untracked() {
            set_error.set(Some("As senhas não coincidem!".to_string()));
            return;
        }

        set_busy.set(true);
        let is_register = registering.get_untracked();
        let name_val = name.get_untracked();
        let email_val = email.get_untracked();
        let password_val = password.get_untracked();

        spawn_local(async move {
            let result = if is_register {
                auth_api::user_register(name_val, email_val, password_val).await
            } else {
                auth_api::user_login(email_val, password_val).await
            };
            set_busy.set(false);
            match result {
                Ok(response) => adopt_session(response.token, response.user),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="modal" on:click=move |_| on_close.run(())>
            <div class="modal__box modal__box--narrow" on:click=|ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h2>{move || if registering.get() { "Criar Conta" } else { "Login" }}</h2>
                    <button class="modal__close" on:click=move |_| on_close.run(())>"×"</button>
                </div>

                {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                <form on:submit=submit>
                    <Show when=move || registering.get()>
                        <div class="form-group">
                            <label for="register-name">"Nome completo"</label>
                            <input
                                type="text"
                                id="register-name"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                required
                            />
                        </div>
                    </Show>

                    <div class="form-group">
                        <label for="email">"E-mail"</label>
                        <input
                            type="email"
                            id="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Senha"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <Show when=move || registering.get()>
                        <div class="form-group">
                            <label for="confirm-password">"Confirmar senha"</label>
                            <input
                                type="password"
                                id="confirm-password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                required
                            />
                        </div>
                    </Show>

                    <button type="submit" class="login-btn" disabled=move || busy.get()>
                        {move || {
                            if busy.get() {
                                "Aguarde..."
                            } else if registering.get() {
                                "Criar conta"
                            } else {
                                "Entrar"
                            }
                        }}
                    </button>
                </form>

                <div class="modal__footer">
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        set_registering.update(|r| *r = !*r);
                        set_error.set(None);
                    }>
                        {move || if registering.get() { "Já tenho uma conta" } else { "Criar conta" }}
                    </a>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i32, name: &str, category_id: i32, category: &str, price: f64) -> StorefrontProduct {
        StorefrontProduct {
            id,
            name: name.to_string(),
            description: None,
            price,
            category_id: Some(category_id),
            category: category.to_string(),
            image: String::new(),
            rating: 4.0 + id as f64 / 10.0,
            review_count: id as i64 * 10,
            stock: 1,
        }
    }

    fn sample() -> Vec<StorefrontProduct> {
        vec![
            product(1, "Base Líquida", 1, "Maquiagem", 89.9),
            product(2, "Shampoo Reconstruidor", 3, "Cabelos", 45.9),
            product(3, "Perfume Flor do Campo", 4, "Perfumes", 159.9),
        ]
    }

    #[test]
    fn category_filter_narrows_the_grid() {
        let visible = filter_and_sort(&sample(), Some(3), "", "Relevância");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Shampoo Reconstruidor");
    }

    #[test]
    fn search_matches_name_and_category_case_insensitively() {
        let by_name = filter_and_sort(&sample(), None, "perfume", "Relevância");
        assert_eq!(by_name.len(), 1);
        let by_category = filter_and_sort(&sample(), None, "CABELOS", "Relevância");
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].id, 2);
    }

    #[test]
    fn sort_criteria_reorder_the_grid() {
        let cheapest_first = filter_and_sort(&sample(), None, "", "Menor preço");
        assert_eq!(cheapest_first[0].id, 2);
        let priciest_first = filter_and_sort(&sample(), None, "", "Maior preço");
        assert_eq!(priciest_first[0].id, 3);
        let best_rated = filter_and_sort(&sample(), None, "", "Melhor avaliados");
        assert_eq!(best_rated[0].id, 3);
    }
}
