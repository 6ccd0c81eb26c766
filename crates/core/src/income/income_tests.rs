//! Tests for income aggregates and the income service.

use super::*;
use crate::errors::{Error, Result};
use crate::session::{Decision, SessionIdentity};
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

fn source(id: &str, income_type: IncomeType, amount: Decimal, freq: IncomeFrequency) -> IncomeSource {
    IncomeSource {
        id: id.to_string(),
        name: format!("Source {}", id),
        income_type,
        amount,
        frequency: freq,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_aggregates_do_not_normalize_frequency() {
    let sources = vec![
        source("a", IncomeType::PropertyRent, dec!(1000), IncomeFrequency::Monthly),
        source("b", IncomeType::Other, dec!(50), IncomeFrequency::Daily),
        source("c", IncomeType::PropertyRent, dec!(12000), IncomeFrequency::Yearly),
    ];
    let aggregates = income_aggregates(&sources);

    assert_eq!(aggregates.total_amount, dec!(13050));
    assert_eq!(aggregates.count_of(IncomeType::PropertyRent), 2);
    assert_eq!(aggregates.count_of(IncomeType::Other), 1);
}

#[test]
fn test_aggregates_empty() {
    let aggregates = income_aggregates(&[]);
    assert_eq!(aggregates.total_amount, Decimal::ZERO);
    assert!(aggregates.count_by_type.is_empty());
    assert_eq!(aggregates.count_of(IncomeType::Other), 0);
}

#[test]
fn test_frequency_labels() {
    assert_eq!(IncomeFrequency::Daily.label(), "per day");
    assert_eq!(IncomeFrequency::Weekly.label(), "per week");
    assert_eq!(IncomeFrequency::Monthly.label(), "per month");
    assert_eq!(IncomeFrequency::Yearly.label(), "per year");
    assert_eq!(IncomeFrequency::parse("yearly"), Some(IncomeFrequency::Yearly));
    assert_eq!(IncomeFrequency::parse("hourly"), None);
}

#[test]
fn test_income_type_wire_names() {
    assert_eq!(
        serde_json::to_string(&IncomeType::PropertyRent).unwrap(),
        "\"Property Rent\""
    );
    assert_eq!(IncomeType::parse("other"), Some(IncomeType::Other));
}

#[test]
fn test_collection_amount_falls_back_to_source() {
    let s = source("a", IncomeType::PropertyRent, dec!(1500), IncomeFrequency::Monthly);
    assert_eq!(resolve_collection_amount(&s, None), dec!(1500));
    assert_eq!(resolve_collection_amount(&s, Some(dec!(0))), dec!(1500));
    assert_eq!(resolve_collection_amount(&s, Some(dec!(700))), dec!(700));
}

// ============================================================================
// Service
// ============================================================================

#[derive(Default)]
struct MockIncomeRepository {
    sources: Mutex<Vec<IncomeSource>>,
    collections: Mutex<Vec<NewIncomeCollection>>,
    writes: Mutex<usize>,
}

#[async_trait]
impl IncomeRepositoryTrait for MockIncomeRepository {
    async fn list(&self, _user_id: &str) -> Result<Vec<IncomeSource>> {
        Ok(self.sources.lock().unwrap().clone())
    }

    async fn create(&self, _user_id: &str, input: &IncomeSourceInput) -> Result<IncomeSource> {
        *self.writes.lock().unwrap() += 1;
        let mut sources = self.sources.lock().unwrap();
        let created = IncomeSource {
            id: format!("s{}", sources.len() + 1),
            name: input.name.clone(),
            income_type: input.income_type,
            amount: input.amount,
            frequency: input.frequency,
            start_date: Some(input.start_date),
        };
        sources.push(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        _user_id: &str,
        source_id: &str,
        input: &IncomeSourceInput,
    ) -> Result<IncomeSource> {
        *self.writes.lock().unwrap() += 1;
        let mut sources = self.sources.lock().unwrap();
        let existing = sources
            .iter_mut()
            .find(|s| s.id == source_id)
            .ok_or_else(|| Error::NotFound(source_id.to_string()))?;
        existing.amount = input.amount;
        Ok(existing.clone())
    }

    async fn delete(&self, source_id: &str) -> Result<()> {
        *self.writes.lock().unwrap() += 1;
        self.sources.lock().unwrap().retain(|s| s.id != source_id);
        Ok(())
    }

    async fn collect(
        &self,
        _user_id: &str,
        collection: &NewIncomeCollection,
    ) -> Result<IncomeCollection> {
        *self.writes.lock().unwrap() += 1;
        self.collections.lock().unwrap().push(collection.clone());
        Ok(IncomeCollection {
            id: "c1".to_string(),
            income_source_id: collection.income_source_id.clone(),
            amount: collection.amount,
            collection_date: Some(collection.collection_date),
            notes: collection.notes.clone(),
        })
    }
}

fn logged_in() -> SessionIdentity {
    SessionIdentity::new(Some("u1".to_string()), None, None)
}

fn seeded_repo() -> Arc<MockIncomeRepository> {
    let repo = Arc::new(MockIncomeRepository::default());
    repo.sources.lock().unwrap().push(source(
        "s1",
        IncomeType::PropertyRent,
        dec!(1500),
        IncomeFrequency::Monthly,
    ));
    repo
}

#[tokio::test]
async fn test_collect_requires_login() {
    let repo = seeded_repo();
    let service = IncomeService::new(repo.clone());

    let err = service
        .collect_income(&SessionIdentity::anonymous(), "s1", None, date(2025, 3, 1))
        .await
        .unwrap_err();

    assert_eq!(err.gate_decision(), Some(Decision::PromptLogin));
    assert_eq!(*repo.writes.lock().unwrap(), 0);
}

#[tokio::test]
async fn test_collect_defaults_to_source_amount() {
    let repo = seeded_repo();
    let service = IncomeService::new(repo.clone());

    let recorded = service
        .collect_income(&logged_in(), "s1", Some(dec!(0)), date(2025, 3, 1))
        .await
        .unwrap();

    assert_eq!(recorded.amount, dec!(1500));
    assert_eq!(recorded.income_source_id, "s1");
    let collections = repo.collections.lock().unwrap();
    assert_eq!(collections.len(), 1);
    assert_eq!(collections[0].collection_date, date(2025, 3, 1));
}

#[tokio::test]
async fn test_collect_from_unknown_source() {
    let service = IncomeService::new(seeded_repo());
    let result = service
        .collect_income(&logged_in(), "missing", Some(dec!(10)), date(2025, 3, 1))
        .await;
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn test_create_source_refreshes_aggregates() {
    let repo = seeded_repo();
    let service = IncomeService::new(repo);

    let input = IncomeSourceInput {
        name: "Freelance".to_string(),
        income_type: IncomeType::Other,
        amount: dec!(400),
        frequency: IncomeFrequency::Weekly,
        start_date: date(2025, 1, 1),
    };
    let overview = service.create_source(&logged_in(), input).await.unwrap();

    assert_eq!(overview.sources.len(), 2);
    assert_eq!(overview.aggregates.total_amount, dec!(1900));
    assert_eq!(overview.aggregates.count_of(IncomeType::Other), 1);
}

#[tokio::test]
async fn test_create_source_rejects_negative_amount() {
    let repo = seeded_repo();
    let service = IncomeService::new(repo.clone());

    let input = IncomeSourceInput {
        name: "Refund".to_string(),
        income_type: IncomeType::Other,
        amount: dec!(-1),
        frequency: IncomeFrequency::Monthly,
        start_date: date(2025, 1, 1),
    };
    let result = service.create_source(&logged_in(), input).await;
    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(*repo.writes.lock().unwrap(), 0);
}
