use serde::Deserialize;
use std::fs;

use crate::error::Result;

/// Reads the file at `file_path` and deserializes its JSON content into `T`.
pub fn parse_json_file<T>(file_path: &str) -> Result<T>
where
    T: for<'a> Deserialize<'a>,
{
    let data = fs::read_to_string(file_path)?;
    let parsed_data: T = serde_json::from_str(&data)?;
    Ok(parsed_data)
}
