//! Wire models for income sources and collections (snake_case).

use chrono::NaiveDate;
use finsight_core::income::{
    IncomeCollection, IncomeFrequency, IncomeSource, IncomeSourceInput, IncomeType,
    NewIncomeCollection,
};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::normalize::{normalize_id, Record};

#[derive(Debug, Clone, Serialize)]
pub struct IncomeSourcePayload<'a> {
    pub user_id: &'a str,
    pub name: &'a str,
    #[serde(rename = "type")]
    pub income_type: IncomeType,
    pub amount: Decimal,
    pub frequency: IncomeFrequency,
    pub start_date: NaiveDate,
}

impl<'a> IncomeSourcePayload<'a> {
    pub fn new(user_id: &'a str, input: &'a IncomeSourceInput) -> Self {
        Self {
            user_id,
            name: &input.name,
            income_type: input.income_type,
            amount: input.amount,
            frequency: input.frequency,
            start_date: input.start_date,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IncomeCollectionPayload<'a> {
    pub user_id: &'a str,
    pub income_source_id: &'a str,
    pub amount: Decimal,
    pub collection_date: NaiveDate,
    pub notes: &'a str,
}

impl<'a> IncomeCollectionPayload<'a> {
    pub fn new(user_id: &'a str, collection: &'a NewIncomeCollection) -> Self {
        Self {
            user_id,
            income_source_id: &collection.income_source_id,
            amount: collection.amount,
            collection_date: collection.collection_date,
            notes: &collection.notes,
        }
    }
}

pub fn income_source_from_record(raw: &Value) -> IncomeSource {
    let record = Record(raw);
    IncomeSource {
        id: record.id(),
        name: record.string(&["name"]),
        income_type: IncomeType::parse(&record.string(&["type", "income_type"]))
            .unwrap_or(IncomeType::Other),
        amount: record.decimal(&["amount"]),
        frequency: IncomeFrequency::parse(&record.string(&["frequency"])).unwrap_or_default(),
        start_date: record.date(&["start_date", "startDate"]),
    }
}

/// The source reference may come back as a bare id or an embedded record.
pub fn income_collection_from_record(raw: &Value) -> IncomeCollection {
    let record = Record(raw);
    let source_id = ["income_source_id", "incomeSourceId", "income_source"]
        .iter()
        .filter_map(|key| raw.get(*key))
        .map(normalize_id)
        .find(|id| !id.is_empty())
        .unwrap_or_default();
    IncomeCollection {
        id: record.id(),
        income_source_id: source_id,
        amount: record.decimal(&["amount"]),
        collection_date: record.date(&["collection_date", "collectionDate"]),
        notes: record.string(&["notes"]),
    }
}
