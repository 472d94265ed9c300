//! Category Pages
//!
//! List page with delete confirmation, and the route-driven create/edit
//! form.

use leptos::*;
use leptos_router::*;

use crate::api::{CategoryClient, ResourceClient};
use crate::components::{ConfirmDialog, ListSkeleton};
use crate::model::{Category, Resource as _};
use crate::state::form::{self, FormAction};
use crate::state::{GlobalState, ListState};

const BASE: &str = "/categories";

/// Category list page
#[component]
pub fn CategoryListPage(client: CategoryClient) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let list = create_rw_signal(ListState::<Category>::new());

    // Fetch all categories on mount
    {
        let client = client.clone();
        create_effect(move |_| {
            let client = client.clone();
            spawn_local(async move {
                match client.get_all().await {
                    Ok(items) => list.update(|l| l.loaded(items)),
                    Err(_) => state.show_error("Failed to load categories"),
                }
            });
        });
    }

    let on_confirm = {
        let client = client.clone();
        move || {
            let Some(id) = list.try_update(|l| l.confirm_delete()).flatten() else {
                return;
            };
            let client = client.clone();
            spawn_local(async move {
                match client.delete(id).await {
                    Ok(()) => list.update(|l| l.remove(id)),
                    Err(_) => state.show_error("Failed to delete the category"),
                }
            });
        }
    };
    let on_cancel = move || list.update(|l| l.cancel_delete());

    view! {
        <div class="space-y-8">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Categories"</h1>
                    <p class="text-gray-400 mt-1">"Organize your entries by category"</p>
                </div>

                <A
                    href="/categories/new"
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ New Category"
                </A>
            </div>

            // Delete confirmation
            {move || {
                list.with(|l| l.pending_delete()).map(|_| view! {
                    <ConfirmDialog
                        message="Do you really want to delete this item?"
                        on_confirm=on_confirm.clone()
                        on_cancel=on_cancel.clone()
                    />
                })
            }}

            // Category list
            <div class="space-y-3">
                {move || {
                    match list.with(|l| l.items().map(<[Category]>::to_vec)) {
                        None => view! { <ListSkeleton /> }.into_view(),
                        Some(items) if items.is_empty() => view! {
                            <p class="text-gray-400 text-center py-12">
                                "No categories yet. Create your first one!"
                            </p>
                        }
                        .into_view(),
                        Some(items) => items
                            .into_iter()
                            .map(|category| {
                                view! {
                                    <CategoryRow
                                        category=category
                                        on_request_delete=move |id| list.update(|l| l.request_delete(id))
                                    />
                                }
                            })
                            .collect_view(),
                    }
                }}
            </div>
        </div>
    }
}

/// Single category row with edit and delete actions
#[component]
fn CategoryRow(
    category: Category,
    on_request_delete: impl Fn(u32) + 'static + Clone,
) -> impl IntoView {
    let id = category.id.unwrap_or_default();

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 hover:border-gray-600 transition-colors
                    flex items-center justify-between">
            <div>
                <h3 class="font-semibold">{category.name.clone()}</h3>
                {category.description.clone().map(|description| view! {
                    <p class="text-gray-400 text-sm mt-1">{description}</p>
                })}
            </div>

            <div class="flex items-center space-x-2">
                <A
                    href=format!("/categories/{id}/edit")
                    class="px-3 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm font-medium transition-colors"
                >
                    "Edit"
                </A>
                <button
                    on:click=move |_| on_request_delete(id)
                    class="px-3 py-2 bg-red-600/80 hover:bg-red-600 rounded-lg text-sm font-medium transition-colors"
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}

/// Category create/edit form page
#[component]
pub fn CategoryFormPage(client: CategoryClient) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();
    let params = use_params_map();

    let action = FormAction::from_path(&use_location().pathname.get_untracked(), BASE);
    let resource_id =
        move || params.with_untracked(|p| p.get("id").and_then(|id| id.parse::<u32>().ok()));

    let (name, set_name) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (loaded, set_loaded) = create_signal(None::<Category>);
    let (submitting, set_submitting) = create_signal(false);
    let server_errors = create_rw_signal(Vec::<String>::new());

    // When editing, follow the id param and load the category into the form
    if action.is_edit() {
        let client = client.clone();
        create_effect(move |_| {
            let Some(id) = params.with(|p| p.get("id").and_then(|id| id.parse::<u32>().ok()))
            else {
                return;
            };
            let client = client.clone();
            spawn_local(async move {
                match client.get_by_id(id).await {
                    Ok(category) => {
                        set_name.set(category.name.clone());
                        set_description.set(category.description.clone().unwrap_or_default());
                        set_loaded.set(Some(category));
                    }
                    Err(_) => state.show_error(form::GENERIC_ERROR),
                }
            });
        });
    }

    let draft = move || Category {
        id: match action {
            FormAction::New => None,
            FormAction::Edit => resource_id(),
        },
        name: name.get(),
        description: Some(description.get()).filter(|d| !d.trim().is_empty()),
    };

    let title = move || {
        let name = loaded
            .get()
            .map(|c| c.display_name().to_string())
            .unwrap_or_default();
        form::page_title(action, Category::LABEL, &name)
    };
    let valid = move || draft().validation_errors().is_empty();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let resource = draft();
        if submitting.get() || !resource.validation_errors().is_empty() {
            return;
        }

        set_submitting.set(true);
        server_errors.set(Vec::new());

        let client = client.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match form::save(&client, action, resource).await {
                Ok(saved) => {
                    state.show_success("Request processed successfully!");
                    navigate(
                        &form::after_save_route(BASE, &saved),
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Err(err) => {
                    state.show_error("Your request could not be processed");
                    server_errors.set(form::server_error_messages(&err));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">{title}</h1>
                <A href="/categories" class="text-gray-400 hover:text-white transition-colors">
                    "Back to list"
                </A>
            </div>

            <ServerErrors errors=server_errors.read_only() />

            <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-4">
                // Name
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                    <input
                        type="text"
                        placeholder="e.g., Food"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // Description
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Description"</label>
                    <input
                        type="text"
                        placeholder="Optional"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // Buttons
                <div class="flex space-x-3 pt-4">
                    <A
                        href="/categories"
                        class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium
                               text-center transition-colors"
                    >
                        "Cancel"
                    </A>
                    <button
                        type="submit"
                        disabled=move || submitting.get() || !valid()
                        class="flex-1 px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Server-reported validation messages shown above a form
#[component]
pub fn ServerErrors(#[prop(into)] errors: Signal<Vec<String>>) -> impl IntoView {
    view! {
        {move || {
            let errors = errors.get();
            (!errors.is_empty()).then(|| view! {
                <div class="bg-red-900/40 border border-red-700 rounded-lg p-4">
                    <ul class="list-disc list-inside text-red-300 text-sm space-y-1">
                        {errors.into_iter().map(|error| view! { <li>{error}</li> }).collect_view()}
                    </ul>
                </div>
            })
        }}
    }
}
