use contracts::catalog::{Category, CategoryDto, Status};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::admin::api;
use crate::shared::notify::use_notify;
use crate::system::auth::context;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryForm {
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    pub image: String,
    pub status: String,
}

impl From<&Category> for CategoryForm {
    fn from(c: &Category) -> Self {
        CategoryForm {
            id: Some(c.id),
            name: c.name.clone(),
            description: c.description.clone().unwrap_or_default(),
            image: c.image.clone().unwrap_or_default(),
            status: c.status.as_str().to_string(),
        }
    }
}

fn form_to_dto(form: &CategoryForm) -> Result<CategoryDto, String> {
    let name = form.name.trim().to_string();
    if name.is_empty() {
        return Err("Por favor, informe o nome da categoria!".to_string());
    }
    Ok(CategoryDto {
        name,
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
        status: Status::parse(&form.status).or(Some(Status::Active)),
    })
}

#[component]
pub fn CategoriesTab() -> impl IntoView {
    let admin_session = context::use_admin_session();
    let notify = use_notify();

    let (items, set_items) = signal::<Vec<Category>>(Vec::new());
    let (editing, set_editing) = signal::<Option<CategoryForm>>(None);

    let fetch = move || {
        spawn_local(async move {
            let Some(token) = admin_session.get_untracked().token else {
                return;
            };
            match api::get_json::<Vec<Category>>("/api/admin/categories", &token).await {
                Ok(v) => set_items.set(v),
                Err(e) => notify.show(format!("Erro ao carregar categorias: {}", e)),
            }
        });
    };
    fetch();

    let delete_category = move |id: i32, name: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!(
                    "Tem certeza que deseja excluir a categoria \"{}\"?",
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
            match api::delete(&format!("/api/admin/categories/{}", id), &token).await {
                Ok(()) => {
                    notify.show("Categoria excluída com sucesso!");
                    fetch();
                }
                Err(e) => notify.show(format!("Erro ao excluir categoria: {}", e)),
            }
        });
    };

    view! {
        <div class="admin-section">
            <div class="admin-section__header">
                <h2>"Categorias"</h2>
                <div class="admin-section__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| set_editing.set(Some(CategoryForm {
                            status: "active".to_string(),
                            ..Default::default()
                        }))
                    >
                        "Adicionar Categoria"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        "Atualizar"
                    </button>
                </div>
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Nome"</th>
                        <th>"Descrição"</th>
                        <th>"Status"</th>
                        <th>"Ações"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || items.get().into_iter().map(|category| {
                        let form = CategoryForm::from(&category);
                        let delete_name = category.name.clone();
                        let id = category.id;
                        let is_active = category.status.is_active();
                        view! {
                            <tr>
                                <td>{category.name.clone()}</td>
                                <td>{category.description.clone().unwrap_or_else(|| "-".to_string())}</td>
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
                                        on:click=move |_| delete_category(id, delete_name.clone())
                                    >
                                        "Excluir"
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            {move || editing.get().map(|form| view! {
                <CategoryModal
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
fn CategoryModal(
    initial: CategoryForm,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let admin_session = context::use_admin_session();
    let notify = use_notify();

    let is_edit = initial.id.is_some();
    let form = RwSignal::new(initial);
    let (saving, set_saving) = signal(false);

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
            let result: Result<Category, String> = match id {
                Some(id) => {
                    api::put_json(&format!("/api/admin/categories/{}", id), &token, &dto).await
                }
                None => api::post_json("/api/admin/categories", &token, &dto).await,
            };
            set_saving.set(false);
            match result {
                Ok(_) => {
                    notify.show("Categoria salva com sucesso!");
                    on_saved.run(());
                }
                Err(e) => notify.show(format!("Erro ao salvar categoria: {}", e)),
            }
        });
    };

    view! {
        <div class="modal" on:click=move |_| on_cancel.run(())>
            <div class="modal__box modal__box--narrow" on:click=|ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h2>{if is_edit { "Editar Categoria" } else { "Adicionar Categoria" }}</h2>
                    <button class="modal__close" on:click=move |_| on_cancel.run(())>"×"</button>
                </div>

                <form on:submit=save>
                    <div class="form-group">
                        <label for="category-name">"Nome"</label>
                        <input
                            type="text"
                            id="category-name"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="category-description">"Descrição"</label>
                        <textarea
                            id="category-description"
                            rows="3"
                            prop:value=move || form.get().description
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="category-image">"Imagem (URL)"</label>
                        <input
                            type="text"
                            id="category-image"
                            placeholder="https://..."
                            prop:value=move || form.get().image
                            on:input=move |ev| form.update(|f| f.image = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="category-status">"Status"</label>
                        <select
                            id="category-status"
                            prop:value=move || form.get().status
                            on:change=move |ev| form.update(|f| f.status = event_target_value(&ev))
                        >
                            <option value="active">"Ativo"</option>
                            <option value="inactive">"Inativo"</option>
                        </select>
                    </div>

                    <div class="modal__actions">
                        <button type="button" class="button button--secondary" on:click=move |_| on_cancel.run(())>
                            "Cancelar"
                        </button>
                        <button type="submit" class="button button--primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Salvando..." } else { "Salvar Categoria" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
