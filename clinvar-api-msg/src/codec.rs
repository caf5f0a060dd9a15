//! JSON decoding and encoding of wire messages.
//!
//! Decoding goes through an intermediate [`serde_json::Value`]: once the record is built, it is
//! encoded again and the key sets of both documents are compared. Keys of the input that did not
//! survive the round trip are fields the schema does not model. What happens to them is decided
//! by the [`UnknownFieldPolicy`] of the [`CodecConfig`]. Keys whose value is `null` are never
//! reported since unset optionals are not encoded.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{CodecConfig, UnknownFieldPolicy};
use crate::error::{CodecError, Result};

/// Decode a wire record from an already parsed JSON value.
pub fn from_value<T>(value: Value, config: &CodecConfig) -> Result<T>
where
    T: DeserializeOwned + Serialize,
{
    let record = T::deserialize(&value)?;

    if config.unknown_fields == UnknownFieldPolicy::Ignore {
        return Ok(record);
    }

    let reencoded = serde_json::to_value(&record)?;
    let unknown = unknown_fields(&value, &reencoded);
    if unknown.is_empty() {
        return Ok(record);
    }

    match config.unknown_fields {
        UnknownFieldPolicy::Deny => Err(CodecError::UnknownFields(unknown)),
        UnknownFieldPolicy::Warn => {
            for pointer in &unknown {
                log::warn!("Ignoring field unknown to the ClinVar API schema: {}", pointer);
            }
            Ok(record)
        }
        UnknownFieldPolicy::Ignore => Ok(record),
    }
}

/// Decode a wire record from a JSON string.
pub fn from_str<T>(json: &str, config: &CodecConfig) -> Result<T>
where
    T: DeserializeOwned + Serialize,
{
    let value: Value = serde_json::from_str(json)?;
    from_value(value, config)
}

/// Decode a wire record from JSON bytes.
pub fn from_slice<T>(json: &[u8], config: &CodecConfig) -> Result<T>
where
    T: DeserializeOwned + Serialize,
{
    let value: Value = serde_json::from_slice(json)?;
    from_value(value, config)
}

/// Decode a wire record from a reader yielding JSON.
pub fn from_reader<R, T>(reader: R, config: &CodecConfig) -> Result<T>
where
    R: Read,
    T: DeserializeOwned + Serialize,
{
    let value: Value = serde_json::from_reader(reader)?;
    from_value(value, config)
}

/// Decode a wire record from a JSON file.
pub fn from_path<T>(path: &Path, config: &CodecConfig) -> Result<T>
where
    T: DeserializeOwned + Serialize,
{
    log::debug!("Decoding ClinVar message from {}", path.display());
    let file = File::open(path)?;
    from_reader(BufReader::new(file), config)
}

/// Encode a wire record as compact JSON.
pub fn to_string<T: Serialize>(record: &T) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}

/// Encode a wire record as indented JSON.
pub fn to_string_pretty<T: Serialize>(record: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Encode a wire record as compact JSON into a writer.
pub fn to_writer<W: Write, T: Serialize>(writer: W, record: &T) -> Result<()> {
    serde_json::to_writer(writer, record)?;
    Ok(())
}

/// Encode a wire record as indented JSON into a file, creating parent directories as needed.
pub fn to_path<T: Serialize>(path: &Path, record: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, record)?;
    writer.flush()?;
    Ok(())
}

/// JSON pointers of the keys in `input` that are missing from `known`.
pub fn unknown_fields(input: &Value, known: &Value) -> Vec<String> {
    let mut unknown = Vec::new();
    collect_unknown_fields(input, known, "", &mut unknown);
    unknown
}

fn collect_unknown_fields(input: &Value, known: &Value, pointer: &str, unknown: &mut Vec<String>) {
    match (input, known) {
        (Value::Object(input), Value::Object(known)) => {
            for (key, value) in input {
                let child = format!("{}/{}", pointer, escape_pointer_token(key));
                match known.get(key) {
                    Some(known_value) => {
                        collect_unknown_fields(value, known_value, &child, unknown)
                    }
                    None if value.is_null() => {}
                    None => unknown.push(child),
                }
            }
        }
        (Value::Array(input), Value::Array(known)) => {
            for (index, (value, known_value)) in input.iter().zip(known.iter()).enumerate() {
                let child = format!("{}/{}", pointer, index);
                collect_unknown_fields(value, known_value, &child, unknown);
            }
        }
        _ => {}
    }
}

/// Escape a key for use in a JSON pointer (RFC 6901).
fn escape_pointer_token(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}
