use std::sync::Arc;

use async_trait::async_trait;

use crate::{api::SchedulesApi, client::HttpClient, domain::ScheduleEntry, error::Result};

pub struct HttpSchedulesApi {
    client: Arc<HttpClient>,
}

impl HttpSchedulesApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SchedulesApi for HttpSchedulesApi {
    async fn live(&self) -> Result<Vec<ScheduleEntry>> {
        self.client.get_json("/schedules/live").await
    }
}
