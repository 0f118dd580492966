use serde::{Deserialize, Serialize};

/// Coarse replication state shown to observers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncState {
    #[default]
    Idle,
    Syncing,
    Error,
}

/// Replication bookkeeping updated opportunistically by ingestion and
/// peer tracking.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatus {
    pub status: SyncState,
    /// Milliseconds since the UNIX epoch of the last admitted remote record.
    pub last_sync: u64,
    pub peers_connected: u32,
    pub records_count: usize,
}

/// A replication peer as seen by this node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerInfo {
    pub id: String,
    pub public_key: String,
    pub last_seen: u64,
    pub is_online: bool,
    pub reputation: i64,
}

impl PeerInfo {
    pub fn new(id: impl Into<String>, seen_at: u64) -> Self {
        Self {
            id: id.into(),
            public_key: String::new(),
            last_seen: seen_at,
            is_online: true,
            reputation: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_status_defaults_to_idle() {
        let status = SyncStatus::default();
        assert_eq!(status.status, SyncState::Idle);
        assert_eq!(status.last_sync, 0);
        assert_eq!(status.peers_connected, 0);
        assert_eq!(status.records_count, 0);
    }

    #[test]
    fn sync_status_json_shape() {
        let json = serde_json::to_string(&SyncStatus::default()).unwrap();
        assert_eq!(
            json,
            r#"{"status":"idle","lastSync":0,"peersConnected":0,"recordsCount":0}"#
        );
    }

    #[test]
    fn new_peer_is_online() {
        let peer = PeerInfo::new("peer-1", 42);
        assert!(peer.is_online);
        assert_eq!(peer.last_seen, 42);
        assert_eq!(peer.reputation, 0);
    }
}
