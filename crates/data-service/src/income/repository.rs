use std::sync::Arc;

use async_trait::async_trait;
use finsight_core::income::{
    IncomeCollection, IncomeRepositoryTrait, IncomeSource, IncomeSourceInput, NewIncomeCollection,
};
use finsight_core::Result;
use log::{debug, info};

use super::model::{
    income_collection_from_record, income_source_from_record, IncomeCollectionPayload,
    IncomeSourcePayload,
};
use crate::client::DataServiceClient;
use crate::normalize::into_records;

pub struct IncomeRepository {
    client: Arc<DataServiceClient>,
}

impl IncomeRepository {
    pub fn new(client: Arc<DataServiceClient>) -> Self {
        IncomeRepository { client }
    }
}

#[async_trait]
impl IncomeRepositoryTrait for IncomeRepository {
    async fn list(&self, user_id: &str) -> Result<Vec<IncomeSource>> {
        let body = self
            .client
            .get("income-sources/", &[("user_id", user_id)])
            .await?;
        let sources: Vec<IncomeSource> = into_records(body)?
            .iter()
            .map(income_source_from_record)
            .collect();
        debug!("Fetched {} income sources for user {}", sources.len(), user_id);
        Ok(sources)
    }

    async fn create(&self, user_id: &str, input: &IncomeSourceInput) -> Result<IncomeSource> {
        let body = self
            .client
            .post("income-sources/", &IncomeSourcePayload::new(user_id, input))
            .await?;
        Ok(income_source_from_record(&body))
    }

    async fn update(
        &self,
        user_id: &str,
        source_id: &str,
        input: &IncomeSourceInput,
    ) -> Result<IncomeSource> {
        let body = self
            .client
            .put(
                &format!("income-sources/{}/", source_id),
                &IncomeSourcePayload::new(user_id, input),
            )
            .await?;
        Ok(income_source_from_record(&body))
    }

    async fn delete(&self, source_id: &str) -> Result<()> {
        self.client
            .delete(&format!("income-sources/{}/", source_id))
            .await?;
        Ok(())
    }

    async fn collect(
        &self,
        user_id: &str,
        collection: &NewIncomeCollection,
    ) -> Result<IncomeCollection> {
        let body = self
            .client
            .post(
                "income-collections/",
                &IncomeCollectionPayload::new(user_id, collection),
            )
            .await?;
        let recorded = income_collection_from_record(&body);
        info!(
            "Recorded income collection {} for source {}",
            recorded.id, collection.income_source_id
        );
        Ok(recorded)
    }
}
