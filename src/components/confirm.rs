//! Confirmation Dialog Component
//!
//! Modal yes/no prompt used before destructive actions, instead of the
//! browser's blocking `confirm()`.

use leptos::*;

/// Modal confirmation dialog. Rendered only while a decision is pending.
#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    message: String,
    on_confirm: impl Fn() + 'static + Clone,
    on_cancel: impl Fn() + 'static + Clone,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-sm mx-4">
                <p class="text-white mb-6">{message}</p>

                <div class="flex space-x-3">
                    <button
                        type="button"
                        on:click=move |_| on_cancel()
                        class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                    >
                        "Cancel"
                    </button>
                    <button
                        type="button"
                        on:click=move |_| on_confirm()
                        class="flex-1 px-4 py-3 bg-red-600 hover:bg-red-700 rounded-lg font-medium transition-colors"
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn renders_message_and_both_buttons() {
        mount_to_body(|| {
            view! {
                <ConfirmDialog
                    message="Do you really want to delete this item?"
                    on_confirm=|| {}
                    on_cancel=|| {}
                />
            }
        });

        let body = document().body().unwrap().inner_html();
        assert!(body.contains("Do you really want to delete this item?"));
        assert!(body.contains("Cancel"));
        assert!(body.contains("Delete"));
    }
}
