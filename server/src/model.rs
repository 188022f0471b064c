use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted todo item.
///
/// `id` and `created_at` are assigned by the store at insert; `title` never
/// changes after that. `completed` is flipped only by toggle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Request payload for `POST /todos`.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn todo_serializes_to_camel_case_json() {
        let todo = Todo {
            id: 7,
            title: "Test".to_string(),
            completed: false,
            created_at: Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap(),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["completed"], false);
        assert_eq!(json["createdAt"], "2026-10-18T12:00:00Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn create_todo_ignores_client_supplied_completed() {
        let input: CreateTodo =
            serde_json::from_str(r#"{"title":"Done","completed":true}"#).unwrap();
        assert_eq!(input.title, "Done");
    }

    #[test]
    fn create_todo_rejects_missing_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }
}
