use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Transaction kind as the API spells it in the `type` field.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "income" => Some(TransactionKind::Income),
            "expense" => Some(TransactionKind::Expense),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }
}

/// One income or expense record as served by the API. The client only ever
/// holds transient copies; the server owns the data.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct Transaction {
    pub id: i64,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub date: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Body for POST / PUT — a transaction without its id.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct TransactionPayload {
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub date: String,
    pub notes: String,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct Summary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct MonthlySeries {
    pub labels: Vec<String>,
    pub income: Vec<f64>,
    pub expenses: Vec<f64>,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct CategorySeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl CategorySeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct CategoryEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Shape of every mutation response (`{success, message?, error?}`).
#[derive(Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl MutationResponse {
    pub fn rejection_message(&self, fallback: &str) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| fallback.to_string())
    }
}

fn format_with_commas(value: i64) -> String {
    let digits = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as i64;
    format!(
        "{}${}.{:02}",
        sign,
        format_with_commas(cents / 100),
        cents % 100
    )
}

/// `2024-01-05` → `Jan 5, 2024`; anything unparseable is shown as-is.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Card styling for the balance indicator.
pub fn balance_card_class(balance: f64) -> &'static str {
    if balance >= 0.0 {
        "summary-card balance positive"
    } else {
        "summary-card balance negative"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_kind_round_trips_the_wire_spelling() {
        assert_eq!(TransactionKind::parse("income"), Some(TransactionKind::Income));
        assert_eq!(TransactionKind::parse("expense"), Some(TransactionKind::Expense));
        assert_eq!(TransactionKind::parse("transfer"), None);
        assert_eq!(TransactionKind::Expense.as_str(), "expense");
    }

    #[test]
    fn transaction_deserializes_the_api_shape() {
        let tx: Transaction = serde_json::from_str(
            r#"{"id":7,"amount":12.5,"type":"expense","category":"Groceries","date":"2024-03-01","notes":null}"#,
        )
        .unwrap();
        assert_eq!(tx.id, 7);
        assert_eq!(tx.kind, TransactionKind::Expense);
        assert_eq!(tx.notes, None);
    }

    #[test]
    fn payload_serializes_kind_as_type() {
        let payload = TransactionPayload {
            amount: 5.0,
            kind: TransactionKind::Income,
            category: "Salary".into(),
            date: "2024-01-05".into(),
            notes: String::new(),
        };
        let raw = serde_json::to_string(&payload).unwrap();
        assert!(raw.contains(r#""type":"income""#));
    }

    #[test]
    fn currency_formatting() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(-10.0), "-$10.00");
    }

    #[test]
    fn date_formatting_falls_back_to_raw_text() {
        assert_eq!(format_date("2024-01-05"), "Jan 5, 2024");
        assert_eq!(format_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn balance_styling_tracks_the_sign() {
        assert_eq!(balance_card_class(60.0), "summary-card balance positive");
        assert_eq!(balance_card_class(0.0), "summary-card balance positive");
        assert_eq!(balance_card_class(-10.0), "summary-card balance negative");
    }
}
