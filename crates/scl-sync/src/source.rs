use async_trait::async_trait;
use scl_store::{InboundRecord, RecordFeed};

/// Anything that yields raw inbound records until it runs dry.
#[async_trait]
pub trait InboundSource: Send {
    /// Next item, or `None` once the source has ended.
    async fn next_inbound(&mut self) -> Option<InboundRecord>;
}

#[async_trait]
impl InboundSource for RecordFeed {
    async fn next_inbound(&mut self) -> Option<InboundRecord> {
        self.next().await
    }
}

/// A fixed batch, mostly useful for replaying a captured feed.
#[async_trait]
impl InboundSource for std::vec::IntoIter<InboundRecord> {
    async fn next_inbound(&mut self) -> Option<InboundRecord> {
        self.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[tokio::test]
    async fn feed_is_a_source() {
        let (tx, mut feed) = RecordFeed::channel();
        tx.send(InboundRecord::new("k", Value::Null)).unwrap();
        drop(tx);
        assert_eq!(feed.next_inbound().await.unwrap().key, "k");
        assert!(feed.next_inbound().await.is_none());
    }

    #[tokio::test]
    async fn batch_is_a_source() {
        let mut batch = vec![InboundRecord::new("a", Value::Null)].into_iter();
        assert!(batch.next_inbound().await.is_some());
        assert!(batch.next_inbound().await.is_none());
    }
}
