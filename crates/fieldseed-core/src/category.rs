use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Closed set of value kinds the population engine knows how to synthesize.
///
/// Variants are declared in dispatch order: when a declared type could match
/// more than one category the first one in [`ValueCategory::DISPATCH_ORDER`]
/// wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueCategory {
    Enumerated,
    Int8,
    Int16,
    Int32,
    Int64,
    BigInteger,
    Float32,
    Float64,
    Decimal,
    Boolean,
    Character,
    String,
    CharArray,
    ByteArray,
    LegacyDate,
    LegacyCalendar,
    SqlDate,
    SqlTime,
    SqlTimestamp,
    LocalDate,
    LocalTime,
    LocalDateTime,
    Instant,
    Duration,
    StdDuration,
    OffsetDateTime,
    OffsetTime,
    ZonedDateTime,
    TimeZone,
    Currency,
    Locale,
    Url,
    Uuid,
}

impl ValueCategory {
    /// Ordered first-match list walked by the dispatcher.
    pub const DISPATCH_ORDER: [ValueCategory; 33] = [
        ValueCategory::Enumerated,
        ValueCategory::Int8,
        ValueCategory::Int16,
        ValueCategory::Int32,
        ValueCategory::Int64,
        ValueCategory::BigInteger,
        ValueCategory::Float32,
        ValueCategory::Float64,
        ValueCategory::Decimal,
        ValueCategory::Boolean,
        ValueCategory::Character,
        ValueCategory::String,
        ValueCategory::CharArray,
        ValueCategory::ByteArray,
        ValueCategory::LegacyDate,
        ValueCategory::LegacyCalendar,
        ValueCategory::SqlDate,
        ValueCategory::SqlTime,
        ValueCategory::SqlTimestamp,
        ValueCategory::LocalDate,
        ValueCategory::LocalTime,
        ValueCategory::LocalDateTime,
        ValueCategory::Instant,
        ValueCategory::Duration,
        ValueCategory::StdDuration,
        ValueCategory::OffsetDateTime,
        ValueCategory::OffsetTime,
        ValueCategory::ZonedDateTime,
        ValueCategory::TimeZone,
        ValueCategory::Currency,
        ValueCategory::Locale,
        ValueCategory::Url,
        ValueCategory::Uuid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ValueCategory::Enumerated => "enumerated",
            ValueCategory::Int8 => "int8",
            ValueCategory::Int16 => "int16",
            ValueCategory::Int32 => "int32",
            ValueCategory::Int64 => "int64",
            ValueCategory::BigInteger => "big_integer",
            ValueCategory::Float32 => "float32",
            ValueCategory::Float64 => "float64",
            ValueCategory::Decimal => "decimal",
            ValueCategory::Boolean => "boolean",
            ValueCategory::Character => "character",
            ValueCategory::String => "string",
            ValueCategory::CharArray => "char_array",
            ValueCategory::ByteArray => "byte_array",
            ValueCategory::LegacyDate => "legacy_date",
            ValueCategory::LegacyCalendar => "legacy_calendar",
            ValueCategory::SqlDate => "sql_date",
            ValueCategory::SqlTime => "sql_time",
            ValueCategory::SqlTimestamp => "sql_timestamp",
            ValueCategory::LocalDate => "local_date",
            ValueCategory::LocalTime => "local_time",
            ValueCategory::LocalDateTime => "local_date_time",
            ValueCategory::Instant => "instant",
            ValueCategory::Duration => "duration",
            ValueCategory::StdDuration => "std_duration",
            ValueCategory::OffsetDateTime => "offset_date_time",
            ValueCategory::OffsetTime => "offset_time",
            ValueCategory::ZonedDateTime => "zoned_date_time",
            ValueCategory::TimeZone => "time_zone",
            ValueCategory::Currency => "currency",
            ValueCategory::Locale => "locale",
            ValueCategory::Url => "url",
            ValueCategory::Uuid => "uuid",
        }
    }

    /// Categories whose date/time composition is chosen by the
    /// ambiguous-temporal resolver.
    pub fn is_ambiguous_temporal(self) -> bool {
        matches!(
            self,
            ValueCategory::LegacyDate | ValueCategory::LegacyCalendar
        )
    }

    /// Categories that consult the length-or-scale resolver.
    pub fn uses_length_or_scale(self) -> bool {
        matches!(
            self,
            ValueCategory::Decimal
                | ValueCategory::String
                | ValueCategory::CharArray
                | ValueCategory::ByteArray
        )
    }
}

impl fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantics picked for a temporal type that can hold a date, a time or both.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TemporalSemantics {
    Date,
    Time,
    #[default]
    Timestamp,
}
