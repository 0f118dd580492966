use serde::{Deserialize, Serialize};

use crate::index::RecordIndex;

/// Aggregate counts over the local record set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStats {
    pub total_records: usize,
    pub unique_products: usize,
    pub unique_actors: usize,
    /// Mean records per product, rounded to two decimals; 0 when empty.
    pub average_chain_length: f64,
}

impl NetworkStats {
    pub fn compute(index: &RecordIndex) -> Self {
        let products = index.product_count();
        let average_chain_length = if products == 0 {
            0.0
        } else {
            let total: usize = index.chain_lengths().sum();
            round2(total as f64 / products as f64)
        };
        Self {
            total_records: index.len(),
            unique_products: products,
            unique_actors: index.actor_count(),
            average_chain_length,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_index_is_all_zero() {
        assert_eq!(NetworkStats::compute(&RecordIndex::new()), NetworkStats::default());
    }

    #[test]
    fn rounding_to_two_decimals() {
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(round2(4.0 / 3.0), 1.33);
        assert_eq!(round2(2.5), 2.5);
    }

    #[test]
    fn json_shape() {
        let stats = NetworkStats {
            total_records: 4,
            unique_products: 2,
            unique_actors: 1,
            average_chain_length: 2.0,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(
            json,
            r#"{"totalRecords":4,"uniqueProducts":2,"uniqueActors":1,"averageChainLength":2.0}"#
        );
    }
}
