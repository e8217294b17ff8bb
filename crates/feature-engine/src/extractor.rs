//! Block Feature Vector Assembly

use crate::error::FeatureError;
use crate::statistics::SummaryStats;
use block_model::{Block, Transaction, SATOSHI_PER_COIN};
use tracing::trace;

/// Number of features extracted per block.
pub const FEATURE_DIMENSION: usize = 78;

/// Per-transaction values derived from one transaction record.
struct TxValues {
    vin_count: f64,
    vout_count: f64,
    /// Net signed output value in coins: spent outputs count positive,
    /// unspent negative.
    value: f64,
    fee: f64,
    tx_size: f64,
    /// One entry per input: prev_out value in coins
    vin_values: Vec<f64>,
    /// One entry per output: value in coins
    vout_values: Vec<f64>,
}

impl TxValues {
    fn derive(tx: &Transaction) -> Self {
        let vin_values = tx
            .inputs
            .iter()
            .map(|input| input.prev_out.value as f64 / SATOSHI_PER_COIN)
            .collect();
        let vout_values: Vec<f64> = tx
            .out
            .iter()
            .map(|out| out.value as f64 / SATOSHI_PER_COIN)
            .collect();
        let value = tx
            .out
            .iter()
            .map(|out| {
                let coins = out.value as f64 / SATOSHI_PER_COIN;
                if out.spent {
                    coins
                } else {
                    -coins
                }
            })
            .sum();

        Self {
            vin_count: tx.vin_sz as f64,
            vout_count: tx.vout_sz as f64,
            value,
            fee: tx.fee,
            tx_size: tx.size as f64,
            vin_values,
            vout_values,
        }
    }
}

/// Two-stage reduction over variable-length per-transaction value lists.
///
/// First extraction: each transaction's list is reduced to its own five
/// statistics. Second extraction: each statistic position is then reduced
/// across transactions, again with the five statistics. `rows[second][first]`
/// holds the second-stage statistic applied to the first-stage component.
fn two_stage_stats(
    what: &'static str,
    per_tx_values: &[&[f64]],
) -> Result<[[f64; 5]; 5], FeatureError> {
    let first: Vec<[f64; 5]> = per_tx_values
        .iter()
        .map(|values| SummaryStats::compute(what, values).map(|s| s.as_array()))
        .collect::<Result<_, _>>()?;

    let mut rows = [[0.0; 5]; 5];
    for component in 0..5 {
        let column: Vec<f64> = first.iter().map(|stats| stats[component]).collect();
        let second = SummaryStats::compute(what, &column)?.as_array();
        for (row, value) in rows.iter_mut().zip(second) {
            row[component] = value;
        }
    }
    Ok(rows)
}

/// Extract the fixed 78-dimensional statistical feature vector from a block.
///
/// Pure and deterministic. Fails on a block with no transactions or a
/// transaction with no inputs or outputs rather than producing NaN or a
/// placeholder.
pub fn extract_block_features(block: &Block) -> Result<[f64; FEATURE_DIMENSION], FeatureError> {
    let per_tx: Vec<TxValues> = block.tx.iter().map(TxValues::derive).collect();

    let vin_counts: Vec<f64> = per_tx.iter().map(|tx| tx.vin_count).collect();
    let vout_counts: Vec<f64> = per_tx.iter().map(|tx| tx.vout_count).collect();
    let values: Vec<f64> = per_tx.iter().map(|tx| tx.value).collect();
    let fees: Vec<f64> = per_tx.iter().map(|tx| tx.fee).collect();
    let tx_sizes: Vec<f64> = per_tx.iter().map(|tx| tx.tx_size).collect();

    let vin_value_lists: Vec<&[f64]> =
        per_tx.iter().map(|tx| tx.vin_values.as_slice()).collect();
    let vout_value_lists: Vec<&[f64]> =
        per_tx.iter().map(|tx| tx.vout_values.as_slice()).collect();

    let mut features = Vec::with_capacity(FEATURE_DIMENSION);
    features.extend([block.n_tx as f64, block.weight as f64, block.size as f64]);

    let scalar_series: [(&'static str, &[f64]); 5] = [
        ("input count", &vin_counts),
        ("output count", &vout_counts),
        ("transaction value", &values),
        ("transaction fee", &fees),
        ("transaction size", &tx_sizes),
    ];
    for (what, series) in scalar_series {
        features.extend(SummaryStats::compute(what, series)?.as_array());
    }

    for rows in [
        two_stage_stats("input value", &vin_value_lists)?,
        two_stage_stats("output value", &vout_value_lists)?,
    ] {
        for row in rows {
            features.extend(row);
        }
    }

    trace!(n_tx = block.n_tx, "extracted block feature vector");

    let actual = features.len();
    features
        .try_into()
        .map_err(|_| FeatureError::ShapeInvariant { actual })
}
