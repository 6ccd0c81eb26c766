use async_trait::async_trait;

use super::analytics_metrics::AnalyticsOverview;
use super::analytics_model::AnalyticsRange;
use crate::errors::Result;
use crate::session::SessionIdentity;

/// Trait for the analytics page. Read-only, so never gated.
#[async_trait]
pub trait AnalyticsServiceTrait: Send + Sync {
    async fn get_overview(
        &self,
        identity: &SessionIdentity,
        range: AnalyticsRange,
    ) -> Result<AnalyticsOverview>;
}
