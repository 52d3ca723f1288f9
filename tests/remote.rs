#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use chronos::api::{RemoteClocking, RemoteClockings};
    use chronos::libs::config::ServerConfig;

    const PAYLOAD: &str = r#"[
        {
            "id": "f3a9",
            "userId": "3",
            "userName": "Juan Empleado",
            "startTime": "2025-03-10T09:00:00Z",
            "endTime": "2025-03-10T17:30:00Z",
            "description": "Development",
            "status": "completed"
        },
        {
            "id": "f3aa",
            "userId": "4",
            "userName": "Maria Desarrolladora",
            "startTime": "2025-03-11T08:00:00Z",
            "endTime": null
        }
    ]"#;

    #[test]
    fn test_parse_backend_payload() {
        let clockings: Vec<RemoteClocking> = serde_json::from_str(PAYLOAD).unwrap();

        assert_eq!(clockings.len(), 2);
        assert_eq!(clockings[0].user_name, "Juan Empleado");
        assert_eq!(clockings[1].description, None);
        assert_eq!(clockings[1].status, None);
    }

    #[test]
    fn test_to_record() {
        let clockings: Vec<RemoteClocking> = serde_json::from_str(PAYLOAD).unwrap();

        let record = clockings[0].to_record().unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.employee_id, 3);
        assert_eq!(record.start_time, Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap());
        assert_eq!(record.end_time, Some(Utc.with_ymd_and_hms(2025, 3, 10, 17, 30, 0).unwrap()));

        assert!(clockings[1].to_record().unwrap().is_open());
    }

    #[test]
    fn test_non_numeric_user_id_is_rejected() {
        let mut clocking: Vec<RemoteClocking> = serde_json::from_str(PAYLOAD).unwrap();
        clocking[0].user_id = "user-3".to_string();

        let err = clocking[0].to_record().unwrap_err();
        assert!(err.to_string().contains("user-3"));
    }

    #[test]
    fn test_clockings_url() {
        let client = RemoteClockings::new(&ServerConfig {
            api_url: "https://chronos.example.com/api/".to_string(),
            auth_token: "token".to_string(),
        });

        assert_eq!(client.clockings_url(), "https://chronos.example.com/api/clockings");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_an_error() {
        let client = RemoteClockings::new(&ServerConfig {
            api_url: "http://127.0.0.1:9".to_string(),
            auth_token: "token".to_string(),
        });

        assert!(client.fetch_clockings().await.is_err());
    }
}
