//! App Root Component
//!
//! Main application component with routing and global providers. Resource
//! clients are constructed once here and handed to the pages explicitly.

use leptos::*;
use leptos_router::*;

use crate::api::{self, CategoryClient, EntryClient};
use crate::components::{Nav, Toast};
use crate::pages::{CategoryFormPage, CategoryListPage, EntryFormPage, EntryListPage};
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide toast state to all components
    provide_global_state();

    let api_base = api::get_api_base();
    let categories = CategoryClient::new(&api_base);
    let entries = EntryClient::new(&api_base);

    // One clone per route closure
    let category_list = categories.clone();
    let category_new = categories.clone();
    let category_edit = categories.clone();
    let entry_list = entries.clone();
    let entry_new = entries.clone();
    let entry_edit = entries;
    let entry_new_categories = categories.clone();
    let entry_edit_categories = categories;

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=|| view! { <Redirect path="/entries" /> } />

                        <Route
                            path="/categories"
                            view=move || view! { <CategoryListPage client=category_list.clone() /> }
                        />
                        <Route
                            path="/categories/new"
                            view=move || view! { <CategoryFormPage client=category_new.clone() /> }
                        />
                        <Route
                            path="/categories/:id/edit"
                            view=move || view! { <CategoryFormPage client=category_edit.clone() /> }
                        />

                        <Route
                            path="/entries"
                            view=move || view! { <EntryListPage client=entry_list.clone() /> }
                        />
                        <Route
                            path="/entries/new"
                            view=move || view! {
                                <EntryFormPage
                                    client=entry_new.clone()
                                    categories=entry_new_categories.clone()
                                />
                            }
                        />
                        <Route
                            path="/entries/:id/edit"
                            view=move || view! {
                                <EntryFormPage
                                    client=entry_edit.clone()
                                    categories=entry_edit_categories.clone()
                                />
                            }
                        />

                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/entries"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Entries"
            </A>
        </div>
    }
}
