//! Form Flow
//!
//! The route-driven pieces shared by both resource forms: deciding between
//! "new" and "edit", the derived page title, the create/update dispatch, the
//! post-save redirect target, and the mapping from an [`ApiError`] to the
//! messages shown above the form.

use crate::api::error::{ApiError, ApiResult};
use crate::api::resource::ResourceClient;
use crate::model::Resource;

/// Message shown for every failure that is not a structured 422.
pub const GENERIC_ERROR: &str = "Communication with the server failed. Please try again later.";

/// The form's mode, derived from the active route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormAction {
    New,
    Edit,
}

impl FormAction {
    /// Classify by the first route segment after the resource base:
    /// literally `new` means a create form, anything else an edit form.
    pub fn from_segment(segment: &str) -> Self {
        if segment == "new" {
            FormAction::New
        } else {
            FormAction::Edit
        }
    }

    /// Classify a full pathname such as `/categories/new` or
    /// `/categories/7/edit` against the resource base path.
    pub fn from_path(path: &str, base: &str) -> Self {
        let segment = path
            .strip_prefix(base)
            .unwrap_or(path)
            .trim_start_matches('/')
            .split('/')
            .next()
            .unwrap_or("");
        Self::from_segment(segment)
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormAction::Edit)
    }
}

/// Title shown above the form, recomputed from the loaded resource name.
pub fn page_title(action: FormAction, label: &str, name: &str) -> String {
    match action {
        FormAction::New => format!("New {label}"),
        FormAction::Edit => format!("Editing {label}: {name}"),
    }
}

/// Dispatch a submit to create or update depending on the action.
pub async fn save<C: ResourceClient>(
    client: &C,
    action: FormAction,
    resource: C::Resource,
) -> ApiResult<C::Resource> {
    match action {
        FormAction::New => client.create(resource).await,
        FormAction::Edit => client.update(resource).await,
    }
}

/// Where a successful save navigates: the saved resource's edit page, or
/// back to the list when the server did not report an id.
pub fn after_save_route<T: Resource>(base: &str, saved: &T) -> String {
    match saved.id() {
        Some(id) => format!("{base}/{id}/edit"),
        None => base.to_string(),
    }
}

/// Messages displayed above the form for a failed submit: the 422 `errors`
/// array verbatim, otherwise one generic fallback line.
pub fn server_error_messages(err: &ApiError) -> Vec<String> {
    match err {
        ApiError::Validation(messages) => messages.clone(),
        _ => vec![GENERIC_ERROR.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockClient;
    use crate::model::Category;

    #[test]
    fn only_the_new_segment_means_new() {
        assert_eq!(FormAction::from_segment("new"), FormAction::New);
        assert_eq!(FormAction::from_segment("7"), FormAction::Edit);
        assert_eq!(FormAction::from_segment("edit"), FormAction::Edit);
        assert_eq!(FormAction::from_segment(""), FormAction::Edit);
    }

    #[test]
    fn classifies_full_paths() {
        assert_eq!(
            FormAction::from_path("/categories/new", "/categories"),
            FormAction::New
        );
        assert_eq!(
            FormAction::from_path("/categories/7/edit", "/categories"),
            FormAction::Edit
        );
        assert_eq!(
            FormAction::from_path("/entries/new", "/entries"),
            FormAction::New
        );
    }

    #[test]
    fn titles_follow_the_action() {
        assert_eq!(page_title(FormAction::New, "Category", ""), "New Category");
        assert_eq!(
            page_title(FormAction::Edit, "Category", "Food"),
            "Editing Category: Food"
        );
    }

    #[test]
    fn validation_errors_pass_through_everything_else_collapses() {
        let err = ApiError::Validation(vec!["name is required".to_string()]);
        assert_eq!(server_error_messages(&err), vec!["name is required"]);

        for err in [
            ApiError::Status(500),
            ApiError::Network("timeout".to_string()),
            ApiError::Deserialization("bad shape".to_string()),
        ] {
            assert_eq!(server_error_messages(&err), vec![GENERIC_ERROR]);
        }
    }

    #[tokio::test]
    async fn new_form_creates_and_redirects_to_the_assigned_id() {
        let client = MockClient::categories(vec![]);
        client.set_next_id(7);

        let saved = save(
            &client,
            FormAction::New,
            Category {
                id: None,
                name: "Food".to_string(),
                description: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(client.calls(), vec!["create"]);
        assert_eq!(saved.id, Some(7));
        assert_eq!(after_save_route("/categories", &saved), "/categories/7/edit");
    }

    #[tokio::test]
    async fn edit_form_updates_in_place_and_keeps_the_id() {
        let stored = Category {
            id: Some(4),
            name: "Food".to_string(),
            description: None,
        };
        let client = MockClient::categories(vec![stored.clone()]);

        let mut edited = stored;
        edited.name = "Groceries".to_string();
        let saved = save(&client, FormAction::Edit, edited).await.unwrap();

        assert_eq!(client.calls(), vec!["update 4"]);
        assert_eq!(saved.id, Some(4));
        assert_eq!(after_save_route("/categories", &saved), "/categories/4/edit");
    }
}
