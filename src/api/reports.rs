use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart;

use crate::{
    api::ReportsApi,
    client::HttpClient,
    domain::{RoomReport, RoomReportReceipt},
    error::{AppError, Result},
};

pub struct HttpReportsApi {
    client: Arc<HttpClient>,
}

impl HttpReportsApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReportsApi for HttpReportsApi {
    async fn submit(&self, report: &RoomReport) -> Result<RoomReportReceipt> {
        let mut form = multipart::Form::new()
            .text("class_id", report.class_id.to_string())
            .text("is_clean_before", report.is_clean_before.to_string())
            .text("is_clean_after", report.is_clean_after.to_string())
            .text("report_text", report.report_text.clone());

        if let Some(photo) = &report.photo {
            let part = multipart::Part::bytes(photo.bytes.clone())
                .file_name(photo.file_name.clone())
                .mime_str(&photo.content_type)
                .map_err(|e| AppError::Internal(e.to_string()))?;
            form = form.part("photo", part);
        }

        self.client.post_multipart("/reports", form).await
    }
}
