//! `/messages` endpoints.

use bday_core::{BdayResult, CreateMessageRequest, Message, UpdateMessageRequest};

use crate::client::SessionedClient;

impl SessionedClient {
    /// `GET /messages`
    pub async fn messages(&self) -> BdayResult<Vec<Message>> {
        self.get_json("/messages").await
    }

    /// `POST /messages`
    pub async fn create_message(&self, request: &CreateMessageRequest) -> BdayResult<Message> {
        self.post_json("/messages", request).await
    }

    /// `PUT /messages/{id}`
    pub async fn update_message(
        &self,
        id: &str,
        request: &UpdateMessageRequest,
    ) -> BdayResult<Message> {
        self.put_json(&format!("/messages/{id}"), request).await
    }

    /// `DELETE /messages/{id}`
    pub async fn delete_message(&self, id: &str) -> BdayResult<()> {
        self.delete_unit(&format!("/messages/{id}")).await
    }

    /// `POST /messages/{id}/send` — ask the backend to deliver the message.
    pub async fn send_message(&self, id: &str) -> BdayResult<Message> {
        self.post_empty_json(&format!("/messages/{id}/send")).await
    }
}
