use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::value_objects::checkout::{DryRunPaymentModel, DryRunPaymentResult};

#[automock]
#[async_trait]
pub trait PaymentBackend {
    async fn dry_run_payment(&self, model: DryRunPaymentModel) -> Result<DryRunPaymentResult>;
}
