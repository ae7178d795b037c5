//! Batch decoding of wire records with per-record failure isolation.

use log::warn;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Result of decoding a batch of wire records.
///
/// One malformed record degrades only itself: it lands in `failures` with its
/// position and reason while the rest of the batch decodes normally.
#[derive(Debug)]
pub struct BatchDecode<T> {
    pub records: Vec<T>,
    pub failures: Vec<DecodeFailure>,
}

/// A record that failed to decode, identified by its index in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeFailure {
    pub index: usize,
    pub message: String,
}

/// Decodes a JSON array of wire records, quarantining per-record failures.
pub fn decode_batch<T: DeserializeOwned>(values: Vec<Value>) -> BatchDecode<T> {
    let mut records = Vec::with_capacity(values.len());
    let mut failures = Vec::new();

    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<T>(value) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("Skipping wire record {}: {}", index, e);
                failures.push(DecodeFailure {
                    index,
                    message: e.to_string(),
                });
            }
        }
    }

    BatchDecode { records, failures }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "crate::utils::decimal_serde::deserialize")]
        amount: Decimal,
    }

    #[test]
    fn test_one_bad_record_does_not_abort_the_batch() {
        let values = vec![
            json!({"amount": "10.00"}),
            json!({"amount": "oops"}),
            json!({"amount": 5}),
        ];

        let decoded = decode_batch::<Row>(values);

        assert_eq!(decoded.records.len(), 2);
        assert_eq!(decoded.records[0].amount, dec!(10.00));
        assert_eq!(decoded.records[1].amount, dec!(5));
        assert_eq!(decoded.failures.len(), 1);
        assert_eq!(decoded.failures[0].index, 1);
    }

    #[test]
    fn test_empty_input_decodes_to_empty_batch() {
        let decoded = decode_batch::<Row>(Vec::new());
        assert!(decoded.records.is_empty());
        assert!(decoded.failures.is_empty());
    }
}
