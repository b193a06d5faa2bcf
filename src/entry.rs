use std::{
    collections::{BTreeMap, btree_map},
    str::FromStr,
};

use crate::{prelude::*, value::Value};

/// `KEY=VALUE` pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub key: String,
    pub value: Value,
}

impl FromStr for Entry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((key, value)) = s.split_once('=') else {
            bail!("`{s}` is not a `KEY=VALUE` pair");
        };
        let key = key.trim();
        ensure!(!key.is_empty(), "`{s}` has an empty key");
        let value = value.parse().with_context(|| format!("invalid value of `{key}`"))?;
        Ok(Self { key: key.to_string(), value })
    }
}

/// Collect the entries into a mapping, rejecting duplicate keys.
pub fn collect_entries(entries: impl IntoIterator<Item = Entry>) -> Result<BTreeMap<String, Value>> {
    let mut mapping = BTreeMap::new();
    for Entry { key, value } in entries {
        match mapping.entry(key) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(value);
            }
            btree_map::Entry::Occupied(entry) => {
                bail!("duplicate key `{}`", entry.key());
            }
        }
    }
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let entry: Entry = "first=34".parse().unwrap();
        assert_eq!(entry, Entry { key: "first".to_string(), value: Value::Integer(34) });

        let entry: Entry = " second = 26.99".parse().unwrap();
        assert_eq!(entry, Entry { key: "second".to_string(), value: Value::Float(26.99) });
    }

    #[test]
    fn test_parse_invalid() {
        assert!("first".parse::<Entry>().is_err());
        assert!("=34".parse::<Entry>().is_err());
        assert!("first=thirty-four".parse::<Entry>().is_err());
        assert!("first=1=2".parse::<Entry>().is_err());
    }

    #[test]
    fn test_collect_entries() {
        let entries = ["first=34", "second=12"].map(|s| s.parse::<Entry>().unwrap());
        let mapping = collect_entries(entries).unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping["second"], Value::Integer(12));
    }

    #[test]
    fn test_collect_duplicate_entries() {
        let entries = ["first=34", "first=12"].map(|s| s.parse::<Entry>().unwrap());
        let error = collect_entries(entries).unwrap_err();
        assert_eq!(error.to_string(), "duplicate key `first`");
    }
}
