use lazy_static::lazy_static;
use regex::Regex;
use time::{macros::format_description, Date};
use tracing::{debug, warn};
use uuid::Uuid;

use super::{
    dto::{CreateEntryRequest, DayEntriesResponse},
    repo::EntryStore,
    repo_types::{Entry, NewEntry},
};
use crate::{error::ApiError, estimator};

pub(crate) const MISSING_DATE: &str = "Missing required query param 'date' (YYYY-MM-DD)";
pub(crate) const MISSING_FIELDS: &str = "Missing required fields: name, date";
pub(crate) const MISSING_ID: &str = "Missing required query param 'id'";

/// Checks that `raw` is a real calendar date written as `YYYY-MM-DD` and
/// returns it trimmed.
pub(crate) fn parse_date(raw: &str) -> Result<String, ApiError> {
    lazy_static! {
        static ref DATE_RE: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    }
    let date = raw.trim();
    if !DATE_RE.is_match(date)
        || Date::parse(date, format_description!("[year]-[month]-[day]")).is_err()
    {
        warn!(date = %date, "malformed date");
        return Err(ApiError::validation(format!(
            "Invalid date '{}', expected YYYY-MM-DD",
            date
        )));
    }
    Ok(date.to_string())
}

/// Caller-supplied calories win when they are a number that rounds to a
/// positive value; otherwise the estimator decides.
pub(crate) fn resolve_calories(
    supplied: Option<&serde_json::Value>,
    name: &str,
    category: Option<&str>,
) -> Result<i32, ApiError> {
    let rounded = supplied
        .and_then(serde_json::Value::as_f64)
        .filter(|v| v.is_finite())
        .map(f64::round)
        .filter(|v| *v >= 1.0);

    match rounded {
        Some(v) if v > f64::from(i32::MAX) => {
            warn!(calories = v, "calories out of range");
            Err(ApiError::validation("Calories value is too large"))
        }
        Some(v) => Ok(v as i32),
        None => {
            let kcal = estimator::estimate(name, category);
            debug!(name = %name, ?category, kcal, "estimated calories");
            Ok(kcal)
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub async fn list_entries(
    store: &dyn EntryStore,
    date: Option<&str>,
) -> Result<DayEntriesResponse, ApiError> {
    let Some(date) = non_blank(date) else {
        warn!("list without date");
        return Err(ApiError::validation(MISSING_DATE));
    };
    let date = parse_date(date)?;

    let entries = store
        .find_by_date(&date)
        .await
        .map_err(ApiError::storage("Failed to fetch entries"))?;

    let total_calories = entries.iter().map(|e| i64::from(e.calories)).sum();
    Ok(DayEntriesResponse {
        entries,
        total_calories,
    })
}

pub async fn create_entry(
    store: &dyn EntryStore,
    req: CreateEntryRequest,
) -> Result<Entry, ApiError> {
    let (Some(name), Some(date)) = (non_blank(req.name.as_deref()), non_blank(req.date.as_deref()))
    else {
        warn!("create without name or date");
        return Err(ApiError::validation(MISSING_FIELDS));
    };
    let date = parse_date(date)?;
    let category = non_blank(req.category.as_deref());
    let calories = resolve_calories(req.calories.as_ref(), name, category)?;

    let new_entry = NewEntry {
        id: Uuid::new_v4(),
        name: name.to_string(),
        calories,
        category: category.map(str::to_string),
        date,
    };

    store
        .create(new_entry)
        .await
        .map_err(ApiError::storage("Failed to create entry"))
}

pub async fn delete_entry(store: &dyn EntryStore, id: Option<&str>) -> Result<(), ApiError> {
    let Some(raw) = non_blank(id) else {
        warn!("delete without id");
        return Err(ApiError::validation(MISSING_ID));
    };
    let id = Uuid::parse_str(raw).map_err(|_| {
        warn!(id = %raw, "malformed id");
        ApiError::validation(format!("Invalid id '{}'", raw))
    })?;

    store
        .delete(id)
        .await
        .map_err(ApiError::storage("Failed to delete entry"))
}
