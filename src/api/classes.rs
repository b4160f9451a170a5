use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    api::ClassesApi,
    client::HttpClient,
    domain::{ClassRecord, TeacherClassesResponse},
    error::Result,
};

pub struct HttpClassesApi {
    client: Arc<HttpClient>,
}

impl HttpClassesApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClassesApi for HttpClassesApi {
    async fn teacher_classes(&self) -> Result<TeacherClassesResponse> {
        self.client.get_json("/teachers/me/classes").await
    }

    async fn all_classes(&self) -> Result<Vec<ClassRecord>> {
        self.client.get_json("/classes/").await
    }

    async fn student_classes(&self) -> Result<Vec<ClassRecord>> {
        self.client.get_json("/classes/student/").await
    }
}
