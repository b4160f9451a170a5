use std::sync::Arc;

use async_trait::async_trait;

use crate::{api::SubmissionsApi, client::HttpClient, domain::Submission, error::Result};

pub struct HttpSubmissionsApi {
    client: Arc<HttpClient>,
}

impl HttpSubmissionsApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SubmissionsApi for HttpSubmissionsApi {
    async fn for_assignment(&self, assignment_id: i64) -> Result<Vec<Submission>> {
        self.client
            .get_json(&format!("/assignments/{}/submissions", assignment_id))
            .await
    }
}
