use gloo_console::warn;

use crate::api;
use crate::models::CategoryEntry;

/// Built-in lists used while the server taxonomy is unavailable.
const DEFAULT_INCOME: &[&str] = &[
    "Salary",
    "Freelance",
    "Business",
    "Investments",
    "Rental Income",
    "Gifts",
    "Other Income",
];

const DEFAULT_EXPENSE: &[&str] = &[
    "Food & Dining",
    "Shopping",
    "Transportation",
    "Bills & Utilities",
    "Entertainment",
    "Healthcare",
    "Travel",
    "Education",
    "Groceries",
    "Rent/Mortgage",
    "Insurance",
    "Other Expenses",
];

const EMPTY: &[String] = &[];

/// Valid category names per transaction type, in server order. Populated once
/// per page load; read-mostly after that.
#[derive(Clone, PartialEq, Debug)]
pub struct CategoryRegistry {
    income: Vec<String>,
    expense: Vec<String>,
}

impl CategoryRegistry {
    pub fn fallback() -> Self {
        CategoryRegistry {
            income: DEFAULT_INCOME.iter().map(|c| c.to_string()).collect(),
            expense: DEFAULT_EXPENSE.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Partitions the server taxonomy by type, keeping its order. Entries with
    /// an unknown type are skipped.
    pub fn from_entries(entries: Vec<CategoryEntry>) -> Self {
        let mut income = Vec::new();
        let mut expense = Vec::new();
        for CategoryEntry { name, kind } in entries {
            match kind.as_str() {
                "income" => income.push(name),
                "expense" => expense.push(name),
                _ => {}
            }
        }
        CategoryRegistry { income, expense }
    }

    /// Ordered options for a type; empty for an unrecognized or unset type.
    pub fn options_for(&self, kind: &str) -> &[String] {
        match kind {
            "income" => &self.income,
            "expense" => &self.expense,
            _ => EMPTY,
        }
    }

    /// Fetches the taxonomy once at startup. Any failure falls back to the
    /// built-in lists so the forms stay usable.
    pub async fn load() -> Self {
        match api::fetch_categories().await {
            Ok(entries) => CategoryRegistry::from_entries(entries),
            Err(err) => {
                warn!("category fetch failed, using defaults:", err.to_string());
                CategoryRegistry::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, kind: &str) -> CategoryEntry {
        serde_json::from_str(&format!(r#"{{"name":"{}","type":"{}"}}"#, name, kind)).unwrap()
    }

    #[test]
    fn partitions_by_type_preserving_server_order() {
        let registry = CategoryRegistry::from_entries(vec![
            entry("Salary", "income"),
            entry("Rent", "expense"),
            entry("Freelance", "income"),
        ]);
        assert_eq!(registry.options_for("income"), ["Salary", "Freelance"]);
        assert_eq!(registry.options_for("expense"), ["Rent"]);
    }

    #[test]
    fn unknown_or_unset_type_yields_an_empty_slice() {
        let registry = CategoryRegistry::from_entries(vec![entry("Salary", "income")]);
        assert!(registry.options_for("expense").is_empty());
        assert!(registry.options_for("transfer").is_empty());
        assert!(registry.options_for("").is_empty());
    }

    #[test]
    fn entries_with_unknown_type_are_dropped() {
        let registry = CategoryRegistry::from_entries(vec![
            entry("Salary", "income"),
            entry("Weird", "transfer"),
        ]);
        assert_eq!(registry.options_for("income"), ["Salary"]);
    }

    #[test]
    fn fallback_covers_both_types() {
        let registry = CategoryRegistry::fallback();
        assert_eq!(registry.options_for("income").len(), 7);
        assert_eq!(registry.options_for("expense").len(), 12);
        assert_eq!(registry.options_for("income")[0], "Salary");
    }
}
