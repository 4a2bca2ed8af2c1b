//! The immutable record handed to listeners for every accepted log call

use lantern_level::Level;
use serde::{Serialize, Serializer};
use serde_json::Value;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::callsite::Location;
use crate::logger::LoggerRef;

/// Snapshot of one accepted log call
///
/// Built by the logger right before it notifies its listeners. All fields are
/// private; listeners read them through accessors and can clone the event if
/// they want to keep it.
///
/// Serializes to JSON with `startTime`, `categoryName`, `level`, `data` and
/// `location` (the logger back-reference is skipped).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingEvent {
    #[serde(serialize_with = "serialize_rfc3339")]
    start_time: OffsetDateTime,
    category_name: String,
    level: Level,
    data: Vec<Value>,
    #[serde(skip)]
    logger: LoggerRef,
    location: Option<Location>,
}

impl LoggingEvent {
    /// Build an event stamped with the current time
    ///
    /// No validation happens here: the logger resolves the level and picks
    /// the category before calling this.
    pub fn new(
        category_name: impl Into<String>,
        level: Level,
        data: Vec<Value>,
        logger: LoggerRef,
        location: Option<Location>,
    ) -> Self {
        Self {
            start_time: OffsetDateTime::now_utc(),
            category_name: category_name.into(),
            level,
            data,
            logger,
            location,
        }
    }

    /// When the event was created (UTC)
    pub fn start_time(&self) -> OffsetDateTime {
        self.start_time
    }

    /// Category of the originating logger
    pub fn category_name(&self) -> &str {
        &self.category_name
    }

    /// Resolved level
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Payload values in call order
    pub fn data(&self) -> &[Value] {
        &self.data
    }

    /// Weak back-reference to the originating logger
    pub fn logger(&self) -> &LoggerRef {
        &self.logger
    }

    /// Call-site location, present only when tracing was enabled
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }
}

fn serialize_rfc3339<S: Serializer>(time: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    let formatted = time.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&formatted)
}

/// Turn any serializable value into a payload entry
///
/// Logging must not fail, so values that cannot be represented as JSON become
/// a descriptive string instead.
pub fn to_payload<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value)
        .unwrap_or_else(|err| Value::String(format!("<unserializable: {err}>")))
}
