//! Configuration file upgrades: older files may miss fields introduced later.

use super::{Config, default_separator_char, default_translation, default_wrap_width};
use crate::errors::AppResult;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Fields every configuration file is expected to carry, with their default.
fn expected_fields() -> Vec<(&'static str, Value)> {
    vec![
        (
            "database",
            Value::String(Config::database_file().to_string_lossy().to_string()),
        ),
        ("language", Value::String("en".to_string())),
        ("wrap_width", Value::Number(default_wrap_width().into())),
        ("separator_char", Value::String(default_separator_char())),
        ("translation", Value::String(default_translation())),
    ]
}

fn read_mapping(path: &Path) -> AppResult<Option<serde_yaml::Mapping>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;
    Ok(match yaml {
        Value::Mapping(m) => Some(m),
        // an empty file parses as null
        Value::Null => Some(serde_yaml::Mapping::new()),
        _ => None,
    })
}

/// Names of expected fields absent from the file at `path`.
/// A missing file reports nothing.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let Some(map) = read_mapping(path)? else {
        return Ok(Vec::new());
    };

    Ok(expected_fields()
        .into_iter()
        .filter(|(k, _)| !map.contains_key(*k))
        .map(|(k, _)| k)
        .collect())
}

/// Add every missing field with its default value, keeping the values already
/// present. Returns the names of the fields added.
pub fn fill_missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let Some(mut map) = read_mapping(path)? else {
        return Ok(Vec::new());
    };

    let mut added = Vec::new();
    for (key, default) in expected_fields() {
        if !map.contains_key(key) {
            map.insert(Value::String(key.to_string()), default);
            added.push(key);
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&Value::Mapping(map))?;
        fs::write(path, serialized)?;
    }

    Ok(added)
}
