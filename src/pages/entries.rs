//! Entry Pages
//!
//! Ledger entry list with delete confirmation, and the route-driven
//! create/edit form with its category selector.

use leptos::*;
use leptos_router::*;

use crate::api::{CategoryClient, EntryClient, ResourceClient};
use crate::components::{ConfirmDialog, ListSkeleton};
use crate::model::{Category, Entry, EntryType, Resource as _};
use crate::pages::categories::ServerErrors;
use crate::state::form::{self, FormAction};
use crate::state::{GlobalState, ListState};

const BASE: &str = "/entries";

/// Entry list page
#[component]
pub fn EntryListPage(client: EntryClient) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let list = create_rw_signal(ListState::<Entry>::new());

    // Fetch all entries on mount
    {
        let client = client.clone();
        create_effect(move |_| {
            let client = client.clone();
            spawn_local(async move {
                match client.get_all().await {
                    Ok(items) => list.update(|l| l.loaded(items)),
                    Err(_) => state.show_error("Failed to load entries"),
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
                    Err(_) => state.show_error("Failed to delete the entry"),
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
                    <h1 class="text-3xl font-bold">"Entries"</h1>
                    <p class="text-gray-400 mt-1">"Your ledger, expense by expense"</p>
                </div>

                <A
                    href="/entries/new"
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ New Entry"
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

            // Entry list
            <div class="space-y-3">
                {move || {
                    match list.with(|l| l.items().map(<[Entry]>::to_vec)) {
                        None => view! { <ListSkeleton /> }.into_view(),
                        Some(items) if items.is_empty() => view! {
                            <p class="text-gray-400 text-center py-12">
                                "No entries yet. Create your first one!"
                            </p>
                        }
                        .into_view(),
                        Some(items) => items
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <EntryRow
                                        entry=entry
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

/// Single entry row with edit and delete actions
#[component]
fn EntryRow(entry: Entry, on_request_delete: impl Fn(u32) + 'static + Clone) -> impl IntoView {
    let id = entry.id.unwrap_or_default();
    let amount_class = match entry.entry_type {
        EntryType::Expense => "text-red-400",
        EntryType::Revenue => "text-green-400",
    };
    let paid_class = if entry.paid {
        "bg-green-600"
    } else {
        "bg-yellow-600"
    };

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 hover:border-gray-600 transition-colors
                    flex items-center justify-between">
            <div class="flex items-center space-x-4">
                <span class="text-gray-500 text-sm w-24">{entry.date.clone()}</span>
                <div>
                    <h3 class="font-semibold">{entry.name.clone()}</h3>
                    <p class="text-gray-400 text-sm mt-1">
                        {entry
                            .category
                            .as_ref()
                            .map(|c| c.name.clone())
                            .unwrap_or_else(|| "Uncategorized".to_string())}
                    </p>
                </div>
            </div>

            <div class="flex items-center space-x-4">
                <span class=format!("{} font-semibold", amount_class)>
                    {format!("$ {}", entry.amount)}
                </span>
                <span class=format!("{} text-xs px-2 py-0.5 rounded-full text-white", paid_class)>
                    {entry.paid_label()}
                </span>

                <A
                    href=format!("/entries/{id}/edit")
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

/// Entry create/edit form page
#[component]
pub fn EntryFormPage(client: EntryClient, categories: CategoryClient) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();
    let params = use_params_map();

    let action = FormAction::from_path(&use_location().pathname.get_untracked(), BASE);
    let resource_id =
        move || params.with_untracked(|p| p.get("id").and_then(|id| id.parse::<u32>().ok()));

    let (name, set_name) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (entry_type, set_entry_type) = create_signal(EntryType::Expense);
    let (amount, set_amount) = create_signal(String::new());
    let (date, set_date) = create_signal(match action {
        FormAction::New => chrono::Local::now().format("%Y-%m-%d").to_string(),
        FormAction::Edit => String::new(),
    });
    let (paid, set_paid) = create_signal(true);
    let (category_id, set_category_id) = create_signal(0u32);
    let (loaded, set_loaded) = create_signal(None::<Entry>);
    let (category_options, set_category_options) = create_signal(Vec::<Category>::new());
    let (submitting, set_submitting) = create_signal(false);
    let server_errors = create_rw_signal(Vec::<String>::new());

    // Load the category options for the selector
    {
        let categories = categories.clone();
        create_effect(move |_| {
            let categories = categories.clone();
            spawn_local(async move {
                match categories.get_all().await {
                    Ok(items) => set_category_options.set(items),
                    Err(_) => state.show_error("Failed to load categories"),
                }
            });
        });
    }

    // When editing, follow the id param and load the entry into the form
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
                    Ok(entry) => {
                        set_name.set(entry.name.clone());
                        set_description.set(entry.description.clone().unwrap_or_default());
                        set_entry_type.set(entry.entry_type);
                        set_amount.set(entry.amount.clone());
                        set_date.set(entry.date.clone());
                        set_paid.set(entry.paid);
                        set_category_id.set(entry.category_id);
                        set_loaded.set(Some(entry));
                    }
                    Err(_) => state.show_error(form::GENERIC_ERROR),
                }
            });
        });
    }

    let draft = move || Entry {
        id: match action {
            FormAction::New => None,
            FormAction::Edit => resource_id(),
        },
        name: name.get(),
        description: Some(description.get()).filter(|d| !d.trim().is_empty()),
        entry_type: entry_type.get(),
        amount: amount.get(),
        date: date.get(),
        paid: paid.get(),
        category_id: category_id.get(),
        // Resolved by the client right before the write.
        category: None,
    };

    let title = move || {
        let name = loaded
            .get()
            .map(|e| e.display_name().to_string())
            .unwrap_or_default();
        form::page_title(action, Entry::LABEL, &name)
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
                <A href="/entries" class="text-gray-400 hover:text-white transition-colors">
                    "Back to list"
                </A>
            </div>

            <ServerErrors errors=server_errors.read_only() />

            <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-4">
                // Type
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Type"</label>
                    <select
                        on:change=move |ev| {
                            set_entry_type.set(EntryType::from_str_or_default(&event_target_value(&ev)))
                        }
                        prop:value=move || entry_type.get().as_str().to_string()
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        {EntryType::ALL.into_iter().map(|t| view! {
                            <option value=t.as_str()>{t.label()}</option>
                        }).collect_view()}
                    </select>
                </div>

                // Name
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                    <input
                        type="text"
                        placeholder="e.g., Groceries"
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

                <div class="grid grid-cols-2 gap-4">
                    // Amount
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Amount"</label>
                        <input
                            type="text"
                            placeholder="0.00"
                            prop:value=move || amount.get()
                            on:input=move |ev| set_amount.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Date
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Date"</label>
                        <input
                            type="date"
                            prop:value=move || date.get()
                            on:input=move |ev| set_date.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                </div>

                <div class="grid grid-cols-2 gap-4">
                    // Category
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Category"</label>
                        <select
                            on:change=move |ev| {
                                set_category_id.set(event_target_value(&ev).parse().unwrap_or(0))
                            }
                            prop:value=move || category_id.get().to_string()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            <option value="0">"Select a category"</option>
                            {move || category_options.get().into_iter().map(|category| view! {
                                <option value=category.id.unwrap_or_default().to_string()>
                                    {category.name}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>

                    // Paid
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Status"</label>
                        <select
                            on:change=move |ev| set_paid.set(event_target_value(&ev) == "paid")
                            prop:value=move || if paid.get() { "paid" } else { "pending" }
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            <option value="paid">"Paid"</option>
                            <option value="pending">"Pending"</option>
                        </select>
                    </div>
                </div>

                // Buttons
                <div class="flex space-x-3 pt-4">
                    <A
                        href="/entries"
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
