use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, trace};

use super::game_service::LIST_LIMIT;
use crate::errors::Result;
use crate::storage::{SeaOrmStorage, StatusCheck};

#[derive(Debug, Clone, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

/// Append-only log of diagnostic pings
pub struct StatusService {
    storage: Arc<SeaOrmStorage>,
}

impl StatusService {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    pub async fn create_status_check(&self, req: StatusCheckCreate) -> Result<StatusCheck> {
        let check = StatusCheck::new(req.client_name);
        self.storage.insert_status_check(&check).await?;
        info!("StatusService: recorded check from '{}'", check.client_name);
        Ok(check)
    }

    pub async fn list_status_checks(&self) -> Result<Vec<StatusCheck>> {
        let checks = self.storage.list_status_checks(LIST_LIMIT).await?;
        trace!("StatusService: listed {} checks", checks.len());
        Ok(checks)
    }
}
