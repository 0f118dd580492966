use scl_store::InboundRecord;
use scl_types::{TraceChain, TraceEvent, TraceRecord};

use crate::admission::Admission;
use crate::criteria::SearchCriteria;
use crate::error::LedgerError;
use crate::stats::NetworkStats;

/// Write boundary: local creation and remote admission.
pub trait TraceWriter: Send + Sync {
    fn create_record(
        &self,
        event: TraceEvent,
        previous_record_id: Option<&str>,
    ) -> Result<TraceRecord, LedgerError>;

    fn ingest_remote_record(&self, record: TraceRecord) -> Admission;

    fn ingest_inbound(&self, item: &InboundRecord) -> Admission;
}

/// Read boundary. Every read is total: missing data yields empty results.
pub trait TraceReader: Send + Sync {
    fn get_trace_chain(&self, product_id: &str) -> Option<TraceChain>;

    fn search_records(&self, criteria: &SearchCriteria) -> Vec<TraceRecord>;

    fn network_stats(&self) -> NetworkStats;

    fn get_record(&self, id: &str) -> Option<TraceRecord>;
}
