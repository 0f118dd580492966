use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use scl_ledger::clock::now_ms;
use scl_ledger::StatusBoard;
use scl_types::PeerInfo;

/// Peer table driven by the transport's hello/bye signals.
///
/// Peers are never forgotten; a departed peer stays listed offline and is
/// revived on its next hello. Only offline-to-online transitions move the
/// shared connection count, so duplicate signals are harmless.
#[derive(Debug)]
pub struct PeerTracker {
    peers: RwLock<HashMap<String, PeerInfo>>,
    status: StatusBoard,
}

impl PeerTracker {
    pub fn new(status: StatusBoard) -> Self {
        Self {
            peers: RwLock::new(HashMap::new()),
            status,
        }
    }

    /// A peer said hello.
    pub fn peer_connected(&self, peer_id: &str) {
        self.peer_connected_at(peer_id, now_ms());
    }

    /// A peer said goodbye. Unknown peers are ignored.
    pub fn peer_disconnected(&self, peer_id: &str) {
        self.peer_disconnected_at(peer_id, now_ms());
    }

    pub fn peer_connected_at(&self, peer_id: &str, at_ms: u64) {
        let came_online = {
            let mut peers = self.write();
            match peers.get_mut(peer_id) {
                Some(peer) => {
                    peer.last_seen = at_ms;
                    !std::mem::replace(&mut peer.is_online, true)
                }
                None => {
                    peers.insert(peer_id.to_string(), PeerInfo::new(peer_id, at_ms));
                    true
                }
            }
        };
        if came_online {
            self.status.peer_connected();
            tracing::info!(peer_id, "peer connected");
        }
    }

    pub fn peer_disconnected_at(&self, peer_id: &str, at_ms: u64) {
        let went_offline = {
            let mut peers = self.write();
            match peers.get_mut(peer_id) {
                Some(peer) => {
                    peer.last_seen = at_ms;
                    std::mem::replace(&mut peer.is_online, false)
                }
                None => false,
            }
        };
        if went_offline {
            self.status.peer_disconnected();
            tracing::info!(peer_id, "peer disconnected");
        }
    }

    pub fn get(&self, peer_id: &str) -> Option<PeerInfo> {
        self.read().get(peer_id).cloned()
    }

    /// All known peers, sorted by id.
    pub fn peers(&self) -> Vec<PeerInfo> {
        let mut peers: Vec<PeerInfo> = self.read().values().cloned().collect();
        peers.sort_by(|a, b| a.id.cmp(&b.id));
        peers
    }

    pub fn online_count(&self) -> usize {
        self.read().values().filter(|p| p.is_online).count()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, PeerInfo>> {
        self.peers.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, PeerInfo>> {
        self.peers.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
