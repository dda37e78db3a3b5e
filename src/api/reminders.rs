//! `/reminders` endpoints.

use bday_core::{BdayResult, CreateReminderRequest, Reminder, UpdateReminderRequest};

use crate::client::SessionedClient;

impl SessionedClient {
    /// `GET /reminders`
    pub async fn reminders(&self) -> BdayResult<Vec<Reminder>> {
        self.get_json("/reminders").await
    }

    /// `GET /reminders/upcoming`, optionally limited to the next `days` days.
    pub async fn upcoming_reminders(&self, days: Option<u32>) -> BdayResult<Vec<Reminder>> {
        let path = match days {
            Some(days) => format!("/reminders/upcoming?days={days}"),
            None => "/reminders/upcoming".to_string(),
        };
        self.get_json(&path).await
    }

    /// `GET /reminders/{id}`
    pub async fn reminder(&self, id: &str) -> BdayResult<Reminder> {
        self.get_json(&format!("/reminders/{id}")).await
    }

    /// `POST /reminders`
    pub async fn create_reminder(&self, request: &CreateReminderRequest) -> BdayResult<Reminder> {
        self.post_json("/reminders", request).await
    }

    /// `PUT /reminders/{id}`
    pub async fn update_reminder(
        &self,
        id: &str,
        request: &UpdateReminderRequest,
    ) -> BdayResult<Reminder> {
        self.put_json(&format!("/reminders/{id}"), request).await
    }

    /// `DELETE /reminders/{id}`
    pub async fn delete_reminder(&self, id: &str) -> BdayResult<()> {
        self.delete_unit(&format!("/reminders/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bday_core::{CreateReminderRequest, Relationship};
    use chrono::NaiveDate;
    use reqwest::Method;

    use crate::client::test_support::{ok, FakeEvents, FakeStore, FakeTransport};
    use crate::client::SessionedClient;
    use crate::config::ClientConfig;

    const REMINDER_JSON: &str = r#"{
        "id": "rem-1",
        "user_id": "usr-1",
        "person_name": "Grace Hopper",
        "relationship": "colleague",
        "birthday": "1906-12-09",
        "notes": null,
        "phone": null,
        "send_reminder": true,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    }"#;

    fn client(transport: &Arc<FakeTransport>) -> SessionedClient {
        SessionedClient {
            config: ClientConfig::default(),
            transport: transport.clone(),
            store: FakeStore::with(Some("tok-1"), Some("ref-1")),
            events: Some(Arc::new(FakeEvents::default())),
        }
    }

    #[tokio::test]
    async fn test_create_reminder_posts_body_and_decodes() {
        let transport = FakeTransport::scripted(vec![ok(REMINDER_JSON)]);

        let created = client(&transport)
            .create_reminder(&CreateReminderRequest {
                person_name: "Grace Hopper".to_string(),
                relationship: Relationship::Colleague,
                birthday: NaiveDate::from_ymd_opt(1906, 12, 9).unwrap(),
                notes: None,
                phone: None,
                send_reminder: Some(true),
            })
            .await
            .unwrap();
        assert_eq!(created.id, "rem-1");
        assert_eq!(created.relationship, Relationship::Colleague);

        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::POST);
        assert!(request.url.path().ends_with("/reminders"));
        let body = request.body.as_ref().unwrap();
        assert_eq!(body["person_name"], "Grace Hopper");
        assert_eq!(body["birthday"], "1906-12-09");
        // Unset optional fields are omitted from the wire body
        assert!(body.get("notes").is_none());
    }

    #[tokio::test]
    async fn test_delete_reminder_targets_id() {
        let transport = FakeTransport::scripted(vec![ok("")]);

        client(&transport).delete_reminder("rem-7").await.unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::DELETE);
        assert!(request.url.path().ends_with("/reminders/rem-7"));
        assert_eq!(request.body, None);
    }
}
