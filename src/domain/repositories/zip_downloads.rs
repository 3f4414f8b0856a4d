use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::value_objects::zip_downloads::ZipStatusModel;

#[automock]
#[async_trait]
pub trait ZipStatusRepository {
    async fn zip_status(&self, gallery_id: Uuid) -> Result<ZipStatusModel>;
}
