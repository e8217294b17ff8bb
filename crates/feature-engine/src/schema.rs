//! Dataset Column Schema
//!
//! Generates the column names structurally so the header always reproduces
//! the value ordering of the extractor.

use crate::extractor::FEATURE_DIMENSION;

/// Name of the trailing label column.
pub const LABEL_COLUMN: &str = "Is DDoS Attack ?";

const BLOCK_COLUMNS: [&str; 3] = ["nTx", "Weight", "Size"];
const TRANSACTION_FEATURES: [&str; 5] = ["nVin", "nVout", "Value", "Fee", "Tx_Size"];
const TRANSACTION_IO_FEATURES: [&str; 2] = ["Vin_value", "Vout_value"];
const STATISTICAL_CRITERIA: [&str; 5] = ["Sum", "Max", "Min", "Avg", "Stdv"];

/// The 79 dataset column names: 78 feature columns plus the label.
///
/// Ordering mirrors the extractor exactly: block scalars, then
/// `{feature}_{criterion}` for the per-transaction aggregates, then
/// `{kind}_{first}_{second}` for the two-stage input/output value blocks,
/// where `first` is the per-transaction statistic and `second` the
/// across-transaction statistic.
pub fn column_names() -> Vec<String> {
    let mut columns: Vec<String> = BLOCK_COLUMNS.iter().map(|c| c.to_string()).collect();

    for feature in TRANSACTION_FEATURES {
        for criterion in STATISTICAL_CRITERIA {
            columns.push(format!("{feature}_{criterion}"));
        }
    }

    for feature in TRANSACTION_IO_FEATURES {
        for second in STATISTICAL_CRITERIA {
            for first in STATISTICAL_CRITERIA {
                columns.push(format!("{feature}_{first}_{second}"));
            }
        }
    }

    columns.push(LABEL_COLUMN.to_string());

    debug_assert_eq!(columns.len(), FEATURE_DIMENSION + 1);
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_length() {
        assert_eq!(column_names().len(), FEATURE_DIMENSION + 1);
    }

    #[test]
    fn test_header_ordering() {
        let columns = column_names();
        assert_eq!(&columns[..3], &["nTx", "Weight", "Size"]);
        assert_eq!(columns[3], "nVin_Sum");
        assert_eq!(columns[7], "nVin_Stdv");
        assert_eq!(columns[8], "nVout_Sum");
        assert_eq!(columns[27], "Tx_Size_Stdv");
        // Two-stage block: per-transaction statistic varies fastest.
        assert_eq!(columns[28], "Vin_value_Sum_Sum");
        assert_eq!(columns[29], "Vin_value_Max_Sum");
        assert_eq!(columns[33], "Vin_value_Sum_Max");
        assert_eq!(columns[52], "Vin_value_Stdv_Stdv");
        assert_eq!(columns[53], "Vout_value_Sum_Sum");
        assert_eq!(columns[77], "Vout_value_Stdv_Stdv");
        assert_eq!(columns[78], LABEL_COLUMN);
    }

    #[test]
    fn test_no_duplicate_columns() {
        let columns = column_names();
        let mut sorted = columns.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), columns.len());
    }
}
