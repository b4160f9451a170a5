use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    api::AssignmentsApi, client::HttpClient, domain::AssignmentRecord, error::Result,
};

pub struct HttpAssignmentsApi {
    client: Arc<HttpClient>,
}

impl HttpAssignmentsApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AssignmentsApi for HttpAssignmentsApi {
    async fn teacher_assignments(&self) -> Result<Vec<AssignmentRecord>> {
        self.client.get_json("/teachers/me/assignments").await
    }

    async fn teacher_assignments_alt(&self) -> Result<Vec<AssignmentRecord>> {
        self.client.get_json("/assignments/teacher").await
    }

    async fn my_assignments(&self) -> Result<Vec<AssignmentRecord>> {
        self.client.get_json("/assignments/me").await
    }

    async fn student_assignments(&self) -> Result<Vec<AssignmentRecord>> {
        self.client.get_json("/assignments/student/").await
    }
}
