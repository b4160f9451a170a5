use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    api::AnnouncementsApi,
    client::HttpClient,
    domain::{Announcement, NewAnnouncement},
    error::Result,
};

pub struct HttpAnnouncementsApi {
    client: Arc<HttpClient>,
}

impl HttpAnnouncementsApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AnnouncementsApi for HttpAnnouncementsApi {
    async fn live(&self) -> Result<Vec<Announcement>> {
        self.client.get_json("/announcements/live").await
    }

    async fn post(&self, announcement: &NewAnnouncement) -> Result<Announcement> {
        self.client.post_json("/announcements/", announcement).await
    }
}
