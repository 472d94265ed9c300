//! Domain Model
//!
//! The two resources exposed by the Ledgerly API, their wire format, and the
//! client-side validation rules each form applies before submitting.

use serde::{Deserialize, Serialize};

/// A domain entity exposed by the API as a REST CRUD collection.
///
/// `id` is `None` until the server has persisted the resource.
pub trait Resource: Clone {
    /// Collection segment under the API base, e.g. `categories`.
    const PATH: &'static str;
    /// Human-readable singular label used in page titles.
    const LABEL: &'static str;

    fn id(&self) -> Option<u32>;

    /// Name shown in titles and lists.
    fn display_name(&self) -> &str;
}

/// A spending category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Resource for Category {
    const PATH: &'static str = "categories";
    const LABEL: &'static str = "Category";

    fn id(&self) -> Option<u32> {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Category {
    /// Rule violations for the current field values. Empty means valid.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let name = self.name.trim();

        if name.is_empty() {
            errors.push("name is required".to_string());
        } else if name.chars().count() < 2 {
            errors.push("name must be at least 2 characters".to_string());
        }

        errors
    }
}

/// Whether a ledger entry is money going out or coming in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    #[default]
    Expense,
    Revenue,
}

impl EntryType {
    pub const ALL: [EntryType; 2] = [EntryType::Expense, EntryType::Revenue];

    pub fn label(&self) -> &'static str {
        match self {
            EntryType::Expense => "Expense",
            EntryType::Revenue => "Revenue",
        }
    }

    /// Wire value, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Expense => "expense",
            EntryType::Revenue => "revenue",
        }
    }

    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "revenue" => EntryType::Revenue,
            _ => EntryType::Expense,
        }
    }
}

/// A financial ledger entry tagged with a category.
///
/// `category` mirrors `category_id` and is populated by the client right
/// before create/update; the server copy is not authoritative.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub amount: String,
    pub date: String,
    pub paid: bool,
    pub category_id: u32,
    #[serde(default)]
    pub category: Option<Category>,
}

impl Resource for Entry {
    const PATH: &'static str = "entries";
    const LABEL: &'static str = "Entry";

    fn id(&self) -> Option<u32> {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Entry {
    pub fn paid_label(&self) -> &'static str {
        if self.paid {
            "Paid"
        } else {
            "Pending"
        }
    }

    /// Rule violations for the current field values. Empty means valid.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let name = self.name.trim();

        if name.is_empty() {
            errors.push("name is required".to_string());
        } else if name.chars().count() < 2 {
            errors.push("name must be at least 2 characters".to_string());
        }
        if self.amount.trim().is_empty() {
            errors.push("amount is required".to_string());
        }
        if self.date.trim().is_empty() {
            errors.push("date is required".to_string());
        }
        if self.category_id == 0 {
            errors.push("category is required".to_string());
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_name_rules() {
        let mut category = Category::default();
        assert_eq!(category.validation_errors(), vec!["name is required"]);

        category.name = "F".to_string();
        assert_eq!(
            category.validation_errors(),
            vec!["name must be at least 2 characters"]
        );

        category.name = "Food".to_string();
        assert!(category.validation_errors().is_empty());
    }

    #[test]
    fn unsaved_category_serializes_without_id() {
        let category = Category {
            id: None,
            name: "Food".to_string(),
            description: None,
        };

        let json = serde_json::to_value(&category).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "Food");
    }

    #[test]
    fn entry_uses_camel_case_wire_names() {
        let json = r#"{
            "id": 3,
            "name": "Groceries",
            "description": null,
            "type": "expense",
            "amount": "120.50",
            "date": "2026-08-14",
            "paid": true,
            "categoryId": 7
        }"#;

        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, Some(3));
        assert_eq!(entry.entry_type, EntryType::Expense);
        assert_eq!(entry.category_id, 7);
        assert_eq!(entry.category, None);

        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back["categoryId"], 7);
        assert_eq!(back["type"], "expense");
    }

    #[test]
    fn entry_requires_amount_date_and_category() {
        let entry = Entry {
            name: "Rent".to_string(),
            ..Entry::default()
        };

        let errors = entry.validation_errors();
        assert!(errors.contains(&"amount is required".to_string()));
        assert!(errors.contains(&"date is required".to_string()));
        assert!(errors.contains(&"category is required".to_string()));
    }

    #[test]
    fn entry_type_round_trips_as_lowercase() {
        assert_eq!(
            serde_json::to_string(&EntryType::Revenue).unwrap(),
            "\"revenue\""
        );
        assert_eq!(EntryType::from_str_or_default("revenue"), EntryType::Revenue);
        assert_eq!(EntryType::from_str_or_default("bogus"), EntryType::Expense);
    }
}
