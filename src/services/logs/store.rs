use std::{
    fmt,
    sync::{Arc, PoisonError, RwLock},
};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginLogEntry {
    pub username: String,
    /// ISO-8601, UTC, millisecond precision (`2024-05-01T12:00:00.000Z`).
    pub timestamp: String,
    pub ip: String,
}

impl LoginLogEntry {
    pub fn now(username: String, ip: String) -> Self {
        Self {
            username,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            ip,
        }
    }
}

/// Ligne écrite sur la sortie du process à chaque login.
impl fmt::Display for LoginLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User {} logged in at {}", self.username, self.timestamp)
    }
}

/// Append-only, in-memory, lost on restart. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct LoginLogStore {
    entries: Arc<RwLock<Vec<LoginLogEntry>>>,
}

impl LoginLogStore {
    // Un verrou empoisonné ne peut laisser qu'un Vec cohérent (push only).
    pub fn append(&self, entry: LoginLogEntry) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }

    /// Snapshot in insertion order.
    pub fn list_all(&self) -> Vec<LoginLogEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn entry(name: &str) -> LoginLogEntry {
        LoginLogEntry::now(name.into(), "127.0.0.1".into())
    }

    #[test]
    fn starts_empty() {
        let store = LoginLogStore::default();
        assert!(store.is_empty());
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn keeps_insertion_order() {
        let store = LoginLogStore::default();
        for name in ["alice", "bob", "carol"] {
            store.append(entry(name));
        }

        let names: Vec<_> = store.list_all().into_iter().map(|e| e.username).collect();
        assert_eq!(names, ["alice", "bob", "carol"]);
    }

    #[test]
    fn clones_share_the_log() {
        let store = LoginLogStore::default();
        let other = store.clone();
        other.append(entry("alice"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn snapshot_is_detached() {
        let store = LoginLogStore::default();
        store.append(entry("alice"));
        let snapshot = store.list_all();
        store.append(entry("bob"));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn concurrent_appends_are_all_kept() {
        let store = LoginLogStore::default();
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for i in 0..50 {
                        store.append(entry(&format!("user-{t}-{i}")));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.len(), 400);
    }

    #[test]
    fn timestamp_is_iso_8601_utc() {
        let e = entry("alice");
        assert!(e.timestamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&e.timestamp).is_ok());
    }

    #[test]
    fn display_is_the_login_line() {
        let e = LoginLogEntry {
            username: "alice".into(),
            timestamp: "2024-05-01T12:00:00.000Z".into(),
            ip: "10.0.0.7".into(),
        };
        assert_eq!(
            e.to_string(),
            "User alice logged in at 2024-05-01T12:00:00.000Z"
        );
    }

    #[test]
    fn serializes_with_three_keys() {
        let e = LoginLogEntry {
            username: "alice".into(),
            timestamp: "2024-05-01T12:00:00.000Z".into(),
            ip: "10.0.0.7".into(),
        };
        assert_eq!(
            serde_json::to_value(&e).unwrap(),
            serde_json::json!({
                "username": "alice",
                "timestamp": "2024-05-01T12:00:00.000Z",
                "ip": "10.0.0.7"
            })
        );
    }
}
