//! Backup tokens for the statistics record.
//!
//! A token is the standard base64 encoding of the record's JSON. Decoding is
//! a validating parser with three stages, each with its own failure:
//!
//! 1. base64 and UTF-8: [`FossleError::Decode`]
//! 2. JSON syntax: [`FossleError::Decode`]
//! 3. record shape and board structure: [`FossleError::Schema`]
//!
//! Nothing here touches stored state; callers replace their record only with
//! an `Ok` value.

use crate::error::{FossleError, Result};
use crate::model::StatsRecord;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub fn export(record: &StatsRecord) -> Result<String> {
    let json = serde_json::to_string(record)?;
    Ok(STANDARD.encode(json.as_bytes()))
}

pub fn import(token: &str) -> Result<StatsRecord> {
    let bytes = STANDARD
        .decode(token.trim())
        .map_err(|e| FossleError::Decode(format!("not valid base64 ({})", e)))?;
    let text = String::from_utf8(bytes)
        .map_err(|_| FossleError::Decode("payload is not UTF-8 text".to_string()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| FossleError::Decode(format!("payload is not JSON ({})", e)))?;

    let record: StatsRecord =
        serde_json::from_value(value).map_err(|e| FossleError::Schema(e.to_string()))?;
    record
        .guess_state
        .check_structure()
        .map_err(FossleError::Schema)?;
    Ok(record)
}
