//! List Flow
//!
//! State held by each list page: the fetched items (unset until the first
//! successful load) and the id, if any, currently awaiting delete
//! confirmation. Removal is keyed by id, never by object identity.

use crate::model::Resource;

pub struct ListState<T> {
    items: Option<Vec<T>>,
    pending_delete: Option<u32>,
}

impl<T: Resource> ListState<T> {
    pub fn new() -> Self {
        Self {
            items: None,
            pending_delete: None,
        }
    }

    /// `None` until a load has succeeded.
    pub fn items(&self) -> Option<&[T]> {
        self.items.as_deref()
    }

    pub fn loaded(&mut self, items: Vec<T>) {
        self.items = Some(items);
    }

    /// Arm the confirmation dialog for one resource.
    pub fn request_delete(&mut self, id: u32) {
        self.pending_delete = Some(id);
    }

    pub fn pending_delete(&self) -> Option<u32> {
        self.pending_delete
    }

    /// Disarm without issuing anything.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirm the pending delete, returning the id the caller must now
    /// send to the server. Idempotent: a second call yields `None`.
    pub fn confirm_delete(&mut self) -> Option<u32> {
        self.pending_delete.take()
    }

    /// Drop the element with the given id after the server acknowledged the
    /// delete. Elements with other ids keep their order.
    pub fn remove(&mut self, id: u32) {
        if let Some(items) = self.items.as_mut() {
            items.retain(|item| item.id() != Some(id));
        }
    }
}

impl<T: Resource> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;
    use crate::api::mock::MockClient;
    use crate::api::resource::ResourceClient;
    use crate::model::Category;

    fn category(id: u32, name: &str) -> Category {
        Category {
            id: Some(id),
            name: name.to_string(),
            description: None,
        }
    }

    fn sample() -> Vec<Category> {
        vec![
            category(1, "Food"),
            category(2, "Housing"),
            category(3, "Leisure"),
        ]
    }

    #[test]
    fn items_stay_unset_until_loaded() {
        let mut list = ListState::<Category>::new();
        assert!(list.items().is_none());

        list.loaded(sample());
        assert_eq!(list.items().unwrap().len(), 3);
    }

    #[test]
    fn remove_drops_exactly_the_matching_id() {
        let mut list = ListState::new();
        list.loaded(sample());

        list.remove(2);

        let names: Vec<&str> = list
            .items()
            .unwrap()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Food", "Leisure"]);
    }

    #[test]
    fn cancel_disarms_the_pending_delete() {
        let mut list = ListState::new();
        list.loaded(sample());

        list.request_delete(3);
        assert_eq!(list.pending_delete(), Some(3));

        list.cancel_delete();
        assert_eq!(list.pending_delete(), None);
        assert_eq!(list.confirm_delete(), None);
        assert_eq!(list.items().unwrap().len(), 3);
    }

    // The next two tests drive the exact sequence the list pages run.

    #[tokio::test]
    async fn declined_confirmation_issues_no_request() {
        let client = MockClient::categories(sample());
        let mut list = ListState::new();
        list.loaded(client.get_all().await.unwrap());

        list.request_delete(3);
        list.cancel_delete();

        // No confirmed id, so the page never touches the client.
        assert_eq!(list.confirm_delete(), None);
        assert_eq!(client.calls(), vec!["get_all"]);
        assert_eq!(list.items().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn confirmed_delete_removes_one_element_failure_removes_none() {
        let client = MockClient::categories(sample());
        let mut list = ListState::new();
        list.loaded(client.get_all().await.unwrap());

        // Confirmed and acknowledged: exactly one element disappears.
        list.request_delete(2);
        let id = list.confirm_delete().unwrap();
        client.delete(id).await.unwrap();
        list.remove(id);
        assert_eq!(list.items().unwrap().len(), 2);
        assert_eq!(client.items().len(), 2);

        // Server refuses the next one: the list must not change.
        client.force_error(ApiError::Status(500));
        list.request_delete(1);
        let id = list.confirm_delete().unwrap();
        assert_eq!(client.delete(id).await.unwrap_err(), ApiError::Status(500));
        assert_eq!(list.items().unwrap().len(), 2);
        assert_eq!(list.items().unwrap()[0].name, "Food");
        assert_eq!(list.items().unwrap()[1].name, "Leisure");
    }
}
