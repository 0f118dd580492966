use serde_json::Value;
use tokio::sync::mpsc;

/// One item from the replication feed: the store key and the untrusted
/// payload a peer wrote under it.
#[derive(Clone, Debug, PartialEq)]
pub struct InboundRecord {
    pub key: String,
    pub payload: Value,
}

impl InboundRecord {
    pub fn new(key: impl Into<String>, payload: Value) -> Self {
        Self {
            key: key.into(),
            payload,
        }
    }
}

/// Receiving half of a store's replication feed.
///
/// Ends (`None`) only when the store side is dropped.
#[derive(Debug)]
pub struct RecordFeed {
    rx: mpsc::UnboundedReceiver<InboundRecord>,
}

impl RecordFeed {
    /// Create a connected sender/feed pair.
    pub fn channel() -> (mpsc::UnboundedSender<InboundRecord>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }

    /// Wait for the next inbound record.
    pub async fn next(&mut self) -> Option<InboundRecord> {
        self.rx.recv().await
    }

    /// Take an already-delivered record without waiting.
    pub fn try_next(&mut self) -> Option<InboundRecord> {
        self.rx.try_recv().ok()
    }
}
