use std::collections::HashMap;

use serde_json::value::RawValue;

use super::model::Dividend;
use crate::core::EodError;

/// Decodes the dividend body, an object keyed `"0".."n-1"`, newest index first.
///
/// Every index below the entry count must be present and decode; otherwise
/// the whole body is rejected.
pub(crate) fn decode_dividends(body: &str) -> Result<Vec<Dividend>, EodError> {
    let raw: HashMap<String, Box<RawValue>> = serde_json::from_str(body)
        .map_err(|e| EodError::Data(format!("dividends json parse: {e}")))?;

    (0..raw.len())
        .rev()
        .map(|i| {
            let value = raw
                .get(&i.to_string())
                .ok_or_else(|| EodError::Data(format!("dividends: missing index {i}")))?;
            serde_json::from_str(value.get())
                .map_err(|e| EodError::Data(format!("dividends index {i} parse: {e}")))
        })
        .collect()
}
