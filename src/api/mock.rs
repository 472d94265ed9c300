//! In-memory resource client for tests.
//!
//! Records every call it receives and can be forced to fail, so list and
//! form flows can be exercised natively without a browser or a server.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::api::error::{ApiError, ApiResult};
use crate::api::resource::ResourceClient;
use crate::model::{Category, Entry, Resource};

pub struct MockClient<T> {
    items: RefCell<Vec<T>>,
    next_id: Cell<u32>,
    forced_error: RefCell<Option<ApiError>>,
    calls: RefCell<Vec<String>>,
    assign_id: fn(&mut T, u32),
}

impl MockClient<Category> {
    pub fn categories(items: Vec<Category>) -> Self {
        Self::new(items, |category, id| category.id = Some(id))
    }
}

impl MockClient<Entry> {
    pub fn entries(items: Vec<Entry>) -> Self {
        Self::new(items, |entry, id| entry.id = Some(id))
    }
}

impl<T: Resource> MockClient<T> {
    fn new(items: Vec<T>, assign_id: fn(&mut T, u32)) -> Self {
        let next_id = items
            .iter()
            .filter_map(Resource::id)
            .max()
            .map_or(1, |id| id + 1);

        Self {
            items: RefCell::new(items),
            next_id: Cell::new(next_id),
            forced_error: RefCell::new(None),
            calls: RefCell::new(Vec::new()),
            assign_id,
        }
    }

    /// Id the next create will assign.
    pub fn set_next_id(&self, id: u32) {
        self.next_id.set(id);
    }

    /// Make every subsequent call fail with `err`.
    pub fn force_error(&self, err: ApiError) {
        *self.forced_error.borrow_mut() = Some(err);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn items(&self) -> Vec<T> {
        self.items.borrow().clone()
    }

    fn record(&self, call: String) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        match self.forced_error.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl<T: Resource + 'static> ResourceClient for MockClient<T> {
    type Resource = T;

    async fn get_all(&self) -> ApiResult<Vec<T>> {
        self.record("get_all".to_string())?;
        Ok(self.items.borrow().clone())
    }

    async fn get_by_id(&self, id: u32) -> ApiResult<T> {
        self.record(format!("get_by_id {id}"))?;
        self.items
            .borrow()
            .iter()
            .find(|item| item.id() == Some(id))
            .cloned()
            .ok_or(ApiError::Status(404))
    }

    async fn create(&self, mut resource: T) -> ApiResult<T> {
        self.record("create".to_string())?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        (self.assign_id)(&mut resource, id);
        self.items.borrow_mut().push(resource.clone());
        Ok(resource)
    }

    async fn update(&self, resource: T) -> ApiResult<T> {
        let id = resource.id().unwrap_or_default();
        self.record(format!("update {id}"))?;

        let mut items = self.items.borrow_mut();
        match items.iter_mut().find(|item| item.id() == Some(id)) {
            Some(stored) => {
                *stored = resource.clone();
                Ok(resource)
            }
            None => Err(ApiError::Status(404)),
        }
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        self.record(format!("delete {id}"))?;

        let mut items = self.items.borrow_mut();
        let before = items.len();
        items.retain(|item| item.id() != Some(id));
        if items.len() == before {
            return Err(ApiError::Status(404));
        }
        Ok(())
    }
}
