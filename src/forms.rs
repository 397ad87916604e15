use thiserror::Error;

use crate::models::{today, Transaction, TransactionKind, TransactionPayload};

#[derive(Debug, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Amount must be a positive number")]
    InvalidAmount,
    #[error("Date must be a valid YYYY-MM-DD value")]
    InvalidDate,
}

/// String mirror of the transaction form fields. Validation happens here,
/// before any network call is considered.
#[derive(Clone, PartialEq, Debug)]
pub struct TransactionDraft {
    pub amount: String,
    pub kind: String,
    pub category: String,
    pub date: String,
    pub notes: String,
}

impl TransactionDraft {
    /// Fresh form, seeded with today's date.
    pub fn seeded() -> Self {
        TransactionDraft {
            amount: String::new(),
            kind: String::new(),
            category: String::new(),
            date: today(),
            notes: String::new(),
        }
    }

    pub fn from_transaction(tx: &Transaction) -> Self {
        TransactionDraft {
            amount: tx.amount.to_string(),
            kind: tx.kind.as_str().to_string(),
            category: tx.category.clone(),
            date: tx.date.clone(),
            notes: tx.notes.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<TransactionPayload, FormError> {
        let amount_raw = self.amount.trim();
        let category = self.category.trim();
        let date = self.date.trim();
        let kind = TransactionKind::parse(self.kind.trim());

        if amount_raw.is_empty() || kind.is_none() || category.is_empty() || date.is_empty() {
            return Err(FormError::MissingFields);
        }
        let amount = amount_raw
            .parse::<f64>()
            .map_err(|_| FormError::InvalidAmount)?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(FormError::InvalidAmount);
        }
        if chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            return Err(FormError::InvalidDate);
        }

        Ok(TransactionPayload {
            amount,
            kind: kind.unwrap_or(TransactionKind::Expense),
            category: category.to_string(),
            date: date.to_string(),
            notes: self.notes.trim().to_string(),
        })
    }
}

/// Keeps the previous category selection only if it still exists in the
/// options for the newly selected type.
pub fn retain_category(previous: &str, options: &[String]) -> Option<String> {
    options.iter().find(|c| c.as_str() == previous).cloned()
}

/// Edit modal lifecycle. Opening requires a successfully fetched record; a
/// failed submit returns to Open with the error attached.
#[derive(Clone, PartialEq, Debug)]
pub enum EditState {
    Closed,
    Open {
        id: i64,
        draft: TransactionDraft,
        error: Option<String>,
    },
    Submitting {
        id: i64,
        draft: TransactionDraft,
    },
}

impl EditState {
    pub fn opened(tx: &Transaction) -> Self {
        EditState::Open {
            id: tx.id,
            draft: TransactionDraft::from_transaction(tx),
            error: None,
        }
    }

    /// Validates and moves to Submitting; a validation failure stays Open with
    /// the message and produces no payload.
    pub fn begin_submit(self) -> (Self, Option<(i64, TransactionPayload)>) {
        match self {
            EditState::Open { id, draft, .. } => match draft.validate() {
                Ok(payload) => (EditState::Submitting { id, draft }, Some((id, payload))),
                Err(err) => (
                    EditState::Open {
                        id,
                        draft,
                        error: Some(err.to_string()),
                    },
                    None,
                ),
            },
            other => (other, None),
        }
    }

    pub fn submit_failed(self, message: String) -> Self {
        match self {
            EditState::Submitting { id, draft } => EditState::Open {
                id,
                draft,
                error: Some(message),
            },
            other => other,
        }
    }
}

/// Delete confirmation lifecycle, populated from a fetched record.
#[derive(Clone, PartialEq, Debug)]
pub enum DeleteState {
    Closed,
    Open {
        record: Transaction,
        error: Option<String>,
    },
    Confirming {
        record: Transaction,
    },
}

impl DeleteState {
    pub fn opened(record: Transaction) -> Self {
        DeleteState::Open {
            record,
            error: None,
        }
    }

    pub fn begin_confirm(self) -> (Self, Option<i64>) {
        match self {
            DeleteState::Open { record, .. } => {
                let id = record.id;
                (DeleteState::Confirming { record }, Some(id))
            }
            other => (other, None),
        }
    }

    pub fn confirm_failed(self, message: String) -> Self {
        match self {
            DeleteState::Confirming { record } => DeleteState::Open {
                record,
                error: Some(message),
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn draft() -> TransactionDraft {
        TransactionDraft {
            amount: "12.50".into(),
            kind: "expense".into(),
            category: "Groceries".into(),
            date: "2024-03-01".into(),
            notes: "weekly shop".into(),
        }
    }

    fn record() -> Transaction {
        Transaction {
            id: 9,
            amount: 12.5,
            kind: TransactionKind::Expense,
            category: "Groceries".into(),
            date: "2024-03-01".into(),
            notes: None,
        }
    }

    #[test]
    fn valid_draft_produces_a_payload() {
        let payload = draft().validate().unwrap();
        assert_eq!(payload.amount, 12.5);
        assert_eq!(payload.kind, TransactionKind::Expense);
        assert_eq!(payload.category, "Groceries");
    }

    #[test]
    fn missing_amount_never_produces_a_payload() {
        let mut d = draft();
        d.amount = "".into();
        assert_eq!(d.validate(), Err(FormError::MissingFields));
    }

    #[test]
    fn unparseable_or_nonpositive_amount_is_rejected() {
        let mut d = draft();
        d.amount = "abc".into();
        assert_eq!(d.validate(), Err(FormError::InvalidAmount));
        d.amount = "-5".into();
        assert_eq!(d.validate(), Err(FormError::InvalidAmount));
        d.amount = "0".into();
        assert_eq!(d.validate(), Err(FormError::InvalidAmount));
    }

    #[test]
    fn unknown_type_counts_as_missing() {
        let mut d = draft();
        d.kind = "transfer".into();
        assert_eq!(d.validate(), Err(FormError::MissingFields));
    }

    #[test]
    fn bad_date_is_rejected() {
        let mut d = draft();
        d.date = "03/01/2024".into();
        assert_eq!(d.validate(), Err(FormError::InvalidDate));
    }

    #[test]
    fn seeded_draft_carries_todays_date_and_nothing_else() {
        let d = TransactionDraft::seeded();
        assert!(d.amount.is_empty());
        assert!(d.category.is_empty());
        assert!(!d.date.is_empty());
    }

    #[test]
    fn category_survives_a_type_change_only_if_still_listed() {
        let options = vec!["Rent/Mortgage".to_string(), "Groceries".to_string()];
        assert_eq!(
            retain_category("Groceries", &options),
            Some("Groceries".to_string())
        );
        assert_eq!(retain_category("Salary", &options), None);
    }

    #[test]
    fn edit_submit_moves_to_submitting_with_a_payload() {
        let state = EditState::opened(&record());
        let (next, action) = state.begin_submit();
        assert!(matches!(next, EditState::Submitting { id: 9, .. }));
        let (id, payload) = action.unwrap();
        assert_eq!(id, 9);
        assert_eq!(payload.amount, 12.5);
    }

    #[test]
    fn edit_validation_failure_stays_open_without_a_payload() {
        let mut state = EditState::opened(&record());
        if let EditState::Open { draft, .. } = &mut state {
            draft.amount = "".into();
        }
        let (next, action) = state.begin_submit();
        assert!(action.is_none());
        match next {
            EditState::Open { error, .. } => assert!(error.is_some()),
            other => panic!("expected Open, got {:?}", other),
        }
    }

    #[test]
    fn failed_edit_submit_returns_to_open_with_the_error() {
        let (submitting, _) = EditState::opened(&record()).begin_submit();
        let next = submitting.submit_failed("server said no".into());
        match next {
            EditState::Open { error, .. } => {
                assert_eq!(error.as_deref(), Some("server said no"))
            }
            other => panic!("expected Open, got {:?}", other),
        }
    }

    #[test]
    fn delete_confirm_yields_the_record_id() {
        let (next, id) = DeleteState::opened(record()).begin_confirm();
        assert_eq!(id, Some(9));
        assert!(matches!(next, DeleteState::Confirming { .. }));
    }

    #[test]
    fn failed_delete_returns_to_open() {
        let (confirming, _) = DeleteState::opened(record()).begin_confirm();
        let next = confirming.confirm_failed("gone wrong".into());
        match next {
            DeleteState::Open { error, .. } => {
                assert_eq!(error.as_deref(), Some("gone wrong"))
            }
            other => panic!("expected Open, got {:?}", other),
        }
    }

    #[test]
    fn begin_submit_on_a_closed_modal_is_a_no_op() {
        let (next, action) = EditState::Closed.begin_submit();
        assert_eq!(next, EditState::Closed);
        assert!(action.is_none());
    }
}
