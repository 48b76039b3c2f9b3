use contracts::catalog::{AdminProduct, Category, ProductDto, Status};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::admin::api;
use crate::shared::format::format_price;
use crate::shared::notify::use_notify;
use crate::system::auth::context;

/// Form state mirrored into the modal inputs; numbers stay as text until save.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductForm {
    pub id: Option<i32>,
    pub name: String,
    pub price: String,
    pub category_id: String,
    pub stock: String,
    pub status: String,
    pub description: String,
    pub image: String,
}

impl From<&AdminProduct> for ProductForm {
    fn from(p: &AdminProduct) -> Self {
        ProductForm {
            id: Some(p.id),
            name: p.name.clone(),
            price: format!("{:.2}", p.price),
            category_id: p.category_id.map(|id| id.to_string()).unwrap_or_default(),
            stock: p.stock.to_string(),
            status: p.status.as_str().to_string(),
            description: p.description.clone().unwrap_or_default(),
            image: p.image.clone().unwrap_or_default(),
        }
    }
}

fn form_to_dto(form: &ProductForm) -> Result<ProductDto, String> {
    let name = form.name.trim().to_string();
    let price = form.price.trim().replace(',', ".").parse::<f64>().ok();
    let category_id = form.category_id.trim().parse::<i32>().ok();

    if name.is_empty() || price.is_none() || category_id.is_none() {
        return Err("Por favor, preencha todos os campos obrigatórios!".to_string());
    }

    Ok(ProductDto {
        name,
        price,
        category_id,
        stock: form.stock.trim().parse::<i32>().ok().or(Some(0)),
        status: Status::parse(&form.status).or(Some(Status::Active)),
        description: if form.description.trim().is_empty() {
            None
        } else {
            Some(form.description.clone())
        },
        image: if form.image.trim().is_empty() {
            None
        } else {
            Some(form.image.clone())
        },
    })
}

#[component]
pub fn ProductsTab() -> impl IntoView {
    let admin_session = context::use_admin_session();
    let notify = use_notify();

    let (items, set_items) = signal::<Vec<AdminProduct>>(Vec::new());
    let (search, set_search) = signal(String::new());
    let (editing, set_editing) = signal::<Option<ProductForm>>(None);

    let fetch = move || {
        spawn_local(async move {
            let Some(token) = admin_session.get_untracked().token else {
                return;
            };
            match api::get_json::<Vec<AdminProduct>>("/api/admin/products", &token).await {
                Ok(v) => set_items.set(v),
                Err(e) => notify.show(format!("Erro ao carregar produtos: {}", e)),
            }
        });
    };
    fetch();

    let visible = move || {
        let query = search.get().trim().to_lowercase();
        items
            .get()
            .into_iter()
            .filter(|p| {
                query.is_empty()
                    || p.name.to_lowercase().contains(&query)
                    || p.category_name.to_lowercase().contains(&query)
            })
            .collect::<Vec<_>>()
    };

    let delete_product = move |id: i32, name: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!(
                    "Tem certeza que deseja excluir o produto \"{}\"?",
                    name
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            let Some(token) = admin_session.get_untracked().token else {
                return;
            };
            match api::delete(&format!("/api/admin/products/{}", id), &token).await {
                Ok(()) => {
                    notify.show("Produto excluído com sucesso!");
                    fetch();
                }
                Err(e) => notify.show(format!("Erro ao excluir produto: {}", e)),
            }
        });
    };

    view! {
        <div class="admin-section">
            <div class="admin-section__header">
                <h2>"Produtos"</h2>
                <div class="admin-section__actions">
                    <input
                        type="text"
                        class="admin-search"
                        placeholder="Buscar produtos..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <button
                        class="button button--primary"
                        on:click=move |_| set_editing.set(Some(ProductForm {
                            status: "active".to_string(),
                            ..Default::default()
                        }))
                    >
                        "Adicionar Produto"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        "Atualizar"
                    </button>
                </div>
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Imagem"</th>
                        <th>"Nome"</th>
                        <th>"Preço"</th>
                        <th>"Categoria"</th>
                        <th>"Estoque"</th>
                        <th>"Status"</th>
                        <th>"Ações"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = visible();
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="7" class="table__empty">"Nenhum produto cadastrado"</td>
                                </tr>
                            }
                            .into_any()
                        } else {
                            rows.into_iter().map(|product| {
                                let form = ProductForm::from(&product);
                                let delete_name = product.name.clone();
                                let id = product.id;
                                let is_active = product.status.is_active();
                                view! {
                                    <tr>
                                        <td>
                                            {product.image.clone().filter(|i| !i.is_empty()).map(|src| view! {
                                                <img class="table__thumb" src={src} alt={product.name.clone()} />
                                            })}
                                        </td>
                                        <td>{product.name.clone()}</td>
                                        <td>{format_price(product.price)}</td>
                                        <td>{product.category_name.clone()}</td>
                                        <td>{product.stock}</td>
                                        <td>
                                            <span
                                                class="status-badge"
                                                class:status-badge--inactive=move || !is_active
                                            >
                                                {if is_active { "Ativo" } else { "Inativo" }}
                                            </span>
                                        </td>
                                        <td>
                                            <button
                                                class="button button--small"
                                                on:click=move |_| set_editing.set(Some(form.clone()))
                                            >
                                                "Editar"
                                            </button>
                                            <button
                                                class="button button--small button--danger"
                                                on:click=move |_| delete_product(id, delete_name.clone())
                                            >
                                                "Excluir"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }
                    }}
                </tbody>
            </table>

            {move || editing.get().map(|form| view! {
                <ProductModal
                    initial=form
                    on_saved=Callback::new(move |_| {
                        set_editing.set(None);
                        fetch();
                    })
                    on_cancel=Callback::new(move |_| set_editing.set(None))
                />
            })}
        </div>
    }
}

#[component]
fn ProductModal(
    initial: ProductForm,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let admin_session = context::use_admin_session();
    let notify = use_notify();

    let is_edit = initial.id.is_some();
    let form = RwSignal::new(initial);
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());
    let (saving, set_saving) = signal(false);

    spawn_local(async move {
        let Some(token) = admin_session.get_untracked().token else {
            return;
        };
        if let Ok(v) = api::get_json::<Vec<Category>>("/api/admin/categories", &token).await {
            set_categories.set(v);
        }
    });

    let on_file_change = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        spawn_local(async move {
            match api::upload_image(file).await {
                Ok(url) => form.update(|f| f.image = url),
                Err(e) => notify.show(format!("Erro no upload da imagem: {}", e)),
            }
        });
    };

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = match form_to_dto(&form.get_untracked()) {
            Ok(dto) => dto,
            Err(message) => {
                notify.show(message);
                return;
            }
        };
        let id = form.get_untracked().id;

        set_saving.set(true);
        spawn_local(async move {
            let Some(token) = admin_session.get_untracked().token else {
                return;
            };
            let result: Result<AdminProduct, String> = match id {
                Some(id) => {
                    api::put_json(&format!("/api/admin/products/{}", id), &token, &dto).await
                }
                None => api::post_json("/api/admin/products", &token, &dto).await,
            };
            set_saving.set(false);
            match result {
                Ok(_) => {
                    notify.show("Produto salvo com sucesso!");
                    on_saved.run(());
                }
                Err(e) => notify.show(format!("Erro ao salvar produto: {}", e)),
            }
        });
    };

    view! {
        <div class="modal" on:click=move |_| on_cancel.run(())>
            <div class="modal__box" on:click=|ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h2>{if is_edit { "Editar Produto" } else { "Adicionar Novo Produto" }}</h2>
                    <button class="modal__close" on:click=move |_| on_cancel.run(())>"×"</button>
                </div>

                <form on:submit=save>
                    <div class="form-group">
                        <label for="product-name">"Nome"</label>
                        <input
                            type="text"
                            id="product-name"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="product-price">"Preço"</label>
                            <input
                                type="number"
                                id="product-price"
                                step="0.01"
                                min="0"
                                prop:value=move || form.get().price
                                on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                                required
                            />
                        </div>
                        <div class="form-group">
                            <label for="product-stock">"Estoque"</label>
                            <input
                                type="number"
                                id="product-stock"
                                min="0"
                                prop:value=move || form.get().stock
                                on:input=move |ev| form.update(|f| f.stock = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="product-category">"Categoria"</label>
                            <select
                                id="product-category"
                                prop:value=move || form.get().category_id
                                on:change=move |ev| form.update(|f| f.category_id = event_target_value(&ev))
                                required
                            >
                                <option value="">"Selecione..."</option>
                                {move || categories.get().into_iter().map(|category| view! {
                                    <option value={category.id.to_string()}>{category.name}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="product-status">"Status"</label>
                            <select
                                id="product-status"
                                prop:value=move || form.get().status
                                on:change=move |ev| form.update(|f| f.status = event_target_value(&ev))
                            >
                                <option value="active">"Ativo"</option>
                                <option value="inactive">"Inativo"</option>
                            </select>
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="product-description">"Descrição"</label>
                        <textarea
                            id="product-description"
                            rows="3"
                            prop:value=move || form.get().description
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="product-image">"Imagem (URL ou upload)"</label>
                        <input
                            type="text"
                            id="product-image"
                            placeholder="https://..."
                            prop:value=move || form.get().image
                            on:input=move |ev| form.update(|f| f.image = event_target_value(&ev))
                        />
                        <input type="file" accept="image/*" on:change=on_file_change />
                        {move || {
                            let image = form.get().image;
                            (!image.is_empty()).then(|| view! {
                                <img class="image-preview" src={image} alt="Preview" />
                            })
                        }}
                    </div>

                    <div class="modal__actions">
                        <button type="button" class="button button--secondary" on:click=move |_| on_cancel.run(())>
                            "Cancelar"
                        </button>
                        <button type="submit" class="button button--primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Salvando..." } else { "Salvar Produto" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
