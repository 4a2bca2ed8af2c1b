//! Serde support: a level is written as its name and read from a name or value

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::level::Level;
use crate::table;

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

struct LevelVisitor;

impl Visitor<'_> for LevelVisitor {
    type Value = Level;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a level name or numeric level value")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Level, E> {
        table::lookup(v).ok_or_else(|| E::custom(format!("unknown level '{v}'")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Level, E> {
        table::lookup_value(v).ok_or_else(|| E::custom(format!("unknown level value {v}")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Level, E> {
        u64::try_from(v)
            .map_err(|_| E::custom(format!("unknown level value {v}")))
            .and_then(|v| self.visit_u64(v))
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LevelVisitor)
    }
}
