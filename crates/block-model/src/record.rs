//! Raw Block Record Structures

use serde::{Deserialize, Serialize};

/// Satoshi-to-coin conversion factor: 1e8 satoshis = 1 BTC.
pub const SATOSHI_PER_COIN: f64 = 1e8;

/// One mined block with its transactions.
///
/// Read-only input; all fields are required. Raw blockchain.info records
/// carry many additional fields, which are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    /// Number of transactions in the block
    pub n_tx: u64,
    /// Block weight
    pub weight: u64,
    /// Serialized block size in bytes
    pub size: u64,
    /// Transactions, in block order
    pub tx: Vec<Transaction>,
}

/// A transfer record with inputs (funds consumed) and outputs (funds created).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Input count
    pub vin_sz: u64,
    /// Output count
    pub vout_sz: u64,
    /// Miner fee in satoshis
    pub fee: f64,
    /// Serialized transaction size in bytes
    pub size: u64,
    /// Inputs, in transaction order
    pub inputs: Vec<Input>,
    /// Outputs, in transaction order
    pub out: Vec<Output>,
}

/// A transaction input referencing the output it spends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Input {
    /// The previous output consumed by this input
    pub prev_out: PrevOut,
}

/// The spent previous output of an input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrevOut {
    /// Value in satoshis
    pub value: u64,
}

/// A transaction output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    /// Value in satoshis
    pub value: u64,
    /// Whether this output has been spent by a later transaction
    pub spent: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_block_from_json() {
        let raw = r#"{
            "n_tx": 1,
            "weight": 4000,
            "size": 1000,
            "hash": "00000000deadbeef",
            "tx": [{
                "vin_sz": 1,
                "vout_sz": 2,
                "fee": 5000,
                "size": 250,
                "inputs": [{"prev_out": {"value": 100000000, "script": "76a9"}}],
                "out": [
                    {"value": 60000000, "spent": true},
                    {"value": 39995000, "spent": false}
                ]
            }]
        }"#;

        let block: Block = serde_json::from_str(raw).unwrap();
        assert_eq!(block.n_tx, 1);
        assert_eq!(block.tx.len(), 1);
        assert_eq!(block.tx[0].inputs[0].prev_out.value, 100_000_000);
        assert!(block.tx[0].out[0].spent);
        assert!(!block.tx[0].out[1].spent);
    }

    #[test]
    fn test_missing_field_is_a_parse_error() {
        // no "weight"
        let raw = r#"{"n_tx": 0, "size": 285, "tx": []}"#;
        assert!(serde_json::from_str::<Block>(raw).is_err());
    }

    #[test]
    fn test_wrong_typed_field_is_a_parse_error() {
        let raw = r#"{
            "n_tx": "one",
            "weight": 4000,
            "size": 1000,
            "tx": []
        }"#;
        assert!(serde_json::from_str::<Block>(raw).is_err());
    }

    #[test]
    fn test_integer_fee_parses_as_float() {
        let raw = r#"{
            "vin_sz": 1, "vout_sz": 1, "fee": 1234, "size": 200,
            "inputs": [{"prev_out": {"value": 1}}],
            "out": [{"value": 1, "spent": false}]
        }"#;
        let tx: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.fee, 1234.0);
    }
}
