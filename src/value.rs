use std::{
    collections::{BTreeMap, HashMap},
    num::NonZeroUsize,
    str::FromStr,
};

use crate::{number::Kind, prelude::*, sum::sum_sharded};

/// Number whose kind is only known at run time.
#[derive(Copy, Clone, Debug, PartialEq, derive_more::Display, derive_more::From)]
pub enum Value {
    #[display("{_0}")]
    Integer(i64),

    #[display("{_0}")]
    Float(f64),
}

impl Value {
    #[must_use]
    pub const fn kind(self) -> Kind {
        match self {
            Self::Integer(_) => Kind::Integer,
            Self::Float(_) => Kind::Float,
        }
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        match self {
            Self::Integer(value) => value < 0,
            Self::Float(value) => value < 0.0,
        }
    }

    /// Convert the value into the requested kind.
    ///
    /// Integers widen into floats, but floats are never truncated into integers.
    #[expect(clippy::cast_precision_loss)]
    pub fn coerce(self, kind: Kind) -> Result<Self> {
        match (self, kind) {
            (Self::Integer(_), Kind::Integer) | (Self::Float(_), Kind::Float) => Ok(self),
            (Self::Integer(value), Kind::Float) => Ok(Self::Float(value as f64)),
            (Self::Float(value), Kind::Integer) => {
                bail!("cannot coerce float `{value}` into an integer")
            }
        }
    }
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(value) = s.parse::<i64>() {
            return Ok(Self::Integer(value));
        }
        let value = s
            .parse::<f64>()
            .with_context(|| format!("`{s}` is neither an integer nor a float"))?;
        ensure!(value.is_finite(), "`{s}` is not a finite number");
        Ok(Self::Float(value))
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Integer(value) => Ok(value),
            Value::Float(value) => bail!("expected an integer, got float `{value}`"),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Float(value) => Ok(value),
            Value::Integer(value) => bail!("expected a float, got integer `{value}`"),
        }
    }
}

/// Sum the values after checking that they all belong to a single numeric kind.
///
/// With an explicit `kind`, every value is coerced into it first. Otherwise, the kind
/// of the first entry is required of all the others. No entries sum to zero of the
/// requested kind, or to integer zero.
#[instrument(skip_all, fields(n_entries = entries.len(), kind = ?kind, n_shards = n_shards.get()))]
pub fn try_sum(
    entries: &BTreeMap<String, Value>,
    kind: Option<Kind>,
    n_shards: NonZeroUsize,
) -> Result<Value> {
    let kind = match kind {
        Some(kind) => kind,
        None => common_kind(entries)?,
    };
    debug!(%kind, "resolved");
    let sum = match kind {
        Kind::Integer => Value::Integer(sum_sharded(&typed::<i64>(entries, kind)?, n_shards)),
        Kind::Float => Value::Float(sum_sharded(&typed::<f64>(entries, kind)?, n_shards)),
    };
    Ok(sum)
}

fn common_kind(entries: &BTreeMap<String, Value>) -> Result<Kind> {
    let mut entries = entries.iter();
    let Some((first_key, first_value)) = entries.next() else {
        return Ok(Kind::Integer);
    };
    let kind = first_value.kind();
    for (key, value) in entries {
        ensure!(
            value.kind() == kind,
            "mixed numeric kinds: `{first_key}` is {kind}, but `{key}` is {}, specify the kind explicitly",
            value.kind(),
        );
    }
    Ok(kind)
}

fn typed<V>(entries: &BTreeMap<String, Value>, kind: Kind) -> Result<HashMap<&str, V>>
where
    V: TryFrom<Value, Error = Error>,
{
    entries
        .iter()
        .map(|(key, value)| {
            let value = value.coerce(kind).with_context(|| format!("invalid value of `{key}`"))?;
            Ok((key.as_str(), V::try_from(value)?))
        })
        .collect()
}
