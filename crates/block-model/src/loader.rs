//! Block Collection Loading

use crate::error::ModelError;
use crate::record::Block;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parse a block-collection file into an ordered sequence of blocks.
///
/// A collection file normally holds a JSON array of raw block objects. The
/// crawler's merge step only wraps blocks into an array from the second
/// fetch onward, so a file holding a single bare block object is accepted
/// as a one-element collection.
pub fn parse_block_collection(path: &Path) -> Result<Vec<Block>, ModelError> {
    let raw = fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&raw).map_err(|source| ModelError::MalformedRecord {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Array(_) => {
            serde_json::from_value(value).map_err(|source| ModelError::MalformedRecord {
                path: path.to_path_buf(),
                source,
            })
        }
        Value::Object(_) => {
            let block: Block =
                serde_json::from_value(value).map_err(|source| ModelError::MalformedRecord {
                    path: path.to_path_buf(),
                    source,
                })?;
            Ok(vec![block])
        }
        _ => Err(ModelError::UnexpectedShape {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const BLOCK: &str = r#"{
        "n_tx": 1, "weight": 4000, "size": 1000,
        "tx": [{
            "vin_sz": 1, "vout_sz": 1, "fee": 100, "size": 200,
            "inputs": [{"prev_out": {"value": 100000000}}],
            "out": [{"value": 99999900, "spent": true}]
        }]
    }"#;

    #[test]
    fn test_array_collection() {
        let file = write_temp(&format!("[{BLOCK}, {BLOCK}]"));
        let blocks = parse_block_collection(file.path()).unwrap();
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_bare_object_becomes_one_element_collection() {
        let file = write_temp(BLOCK);
        let blocks = parse_block_collection(file.path()).unwrap();
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_scalar_top_level_is_rejected() {
        let file = write_temp("42");
        assert!(matches!(
            parse_block_collection(file.path()),
            Err(ModelError::UnexpectedShape { .. })
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = parse_block_collection(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ModelError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn test_malformed_record_in_array() {
        // second element lacks "tx"
        let file = write_temp(&format!(
            "[{BLOCK}, {{\"n_tx\": 1, \"weight\": 1, \"size\": 1}}]"
        ));
        assert!(matches!(
            parse_block_collection(file.path()),
            Err(ModelError::MalformedRecord { .. })
        ));
    }
}
