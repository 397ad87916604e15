use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;
use web_sys::FormData;

use crate::filter::DateRangeFilter;
use crate::models::{
    CategoryEntry, CategorySeries, MonthlySeries, MutationResponse, Summary, Transaction,
    TransactionPayload,
};

/// Empty means same-origin; point this at the API host when serving the
/// bundle separately during development.
const API_BASE_URL: &str = "";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("server returned HTTP {0}")]
    Status(u16),
    #[error("{0}")]
    Rejected(String),
}

fn filtered_url(path: &str, filter: &DateRangeFilter) -> String {
    format!("{}{}{}", API_BASE_URL, path, filter.query_string())
}

async fn get_json<T: for<'de> Deserialize<'de>>(url: &str) -> Result<T, ApiError> {
    let resp = Request::get(url).send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json::<T>().await?)
}

pub async fn fetch_summary(filter: &DateRangeFilter) -> Result<Summary, ApiError> {
    get_json(&filtered_url("/api/summary", filter)).await
}

pub async fn fetch_transactions(filter: &DateRangeFilter) -> Result<Vec<Transaction>, ApiError> {
    get_json(&filtered_url("/api/transactions", filter)).await
}

pub async fn fetch_monthly_series(filter: &DateRangeFilter) -> Result<MonthlySeries, ApiError> {
    get_json(&filtered_url("/api/monthly-data", filter)).await
}

pub async fn fetch_category_series(filter: &DateRangeFilter) -> Result<CategorySeries, ApiError> {
    get_json(&filtered_url("/api/category-data", filter)).await
}

pub async fn fetch_categories() -> Result<Vec<CategoryEntry>, ApiError> {
    get_json(&format!("{}/api/categories", API_BASE_URL)).await
}

/// Fetch-by-id answers either the record or an `{error}` payload.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordResponse {
    Found(Transaction),
    Missing { error: String },
}

pub async fn fetch_transaction(id: i64) -> Result<Transaction, ApiError> {
    let url = format!("{}/api/transactions/{}", API_BASE_URL, id);
    match get_json::<RecordResponse>(&url).await? {
        RecordResponse::Found(tx) => Ok(tx),
        RecordResponse::Missing { error } => Err(ApiError::Rejected(error)),
    }
}

async fn expect_success(
    resp: gloo_net::http::Response,
    fallback: &str,
) -> Result<MutationResponse, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    let body = resp.json::<MutationResponse>().await?;
    if body.success {
        Ok(body)
    } else {
        Err(ApiError::Rejected(body.rejection_message(fallback)))
    }
}

pub async fn create_transaction(payload: &TransactionPayload) -> Result<MutationResponse, ApiError> {
    let resp = Request::post(&format!("{}/api/transactions", API_BASE_URL))
        .json(payload)?
        .send()
        .await?;
    expect_success(resp, "Error adding transaction").await
}

pub async fn update_transaction(
    id: i64,
    payload: &TransactionPayload,
) -> Result<MutationResponse, ApiError> {
    let resp = Request::put(&format!("{}/api/transactions/{}", API_BASE_URL, id))
        .json(payload)?
        .send()
        .await?;
    expect_success(resp, "Error updating transaction").await
}

pub async fn delete_transaction(id: i64) -> Result<MutationResponse, ApiError> {
    let resp = Request::delete(&format!("{}/api/transactions/{}", API_BASE_URL, id))
        .send()
        .await?;
    expect_success(resp, "Error deleting transaction").await
}

pub async fn import_csv(form: FormData) -> Result<MutationResponse, ApiError> {
    let resp = Request::post(&format!("{}/api/import/csv", API_BASE_URL))
        .body(form)?
        .send()
        .await?;
    expect_success(resp, "Error importing CSV").await
}

pub fn export_csv_url(filter: &DateRangeFilter) -> String {
    filtered_url("/api/export/csv", filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn filtered_urls_carry_the_range_only_when_bounded() {
        assert_eq!(
            filtered_url("/api/summary", &DateRangeFilter::AllTime),
            "/api/summary"
        );
        let filter = DateRangeFilter::Bounded {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        };
        assert_eq!(
            filtered_url("/api/summary", &filter),
            "/api/summary?start_date=2024-01-01&end_date=2024-01-31"
        );
        assert_eq!(
            export_csv_url(&filter),
            "/api/export/csv?start_date=2024-01-01&end_date=2024-01-31"
        );
    }

    #[test]
    fn record_response_distinguishes_found_from_missing() {
        let found: RecordResponse = serde_json::from_str(
            r#"{"id":1,"amount":3.0,"type":"income","category":"Salary","date":"2024-01-01","notes":""}"#,
        )
        .unwrap();
        assert!(matches!(found, RecordResponse::Found(_)));

        let missing: RecordResponse =
            serde_json::from_str(r#"{"error":"Transaction not found"}"#).unwrap();
        match missing {
            RecordResponse::Missing { error } => assert_eq!(error, "Transaction not found"),
            RecordResponse::Found(_) => panic!("expected the error payload"),
        }
    }
}
