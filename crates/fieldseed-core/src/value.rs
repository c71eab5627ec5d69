use std::fmt;
use std::time::SystemTime;

use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, Utc,
};
use chrono_tz::Tz;
use num_bigint::BigInt;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use url::Url;
use uuid::Uuid;

use crate::catalog::{Currency, Locale};
use crate::category::ValueCategory;

/// A synthesized value, one variant per category.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Index into the declared constants of an enum.
    Enumerated(usize),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    BigInteger(BigInt),
    Float32(f32),
    Float64(f64),
    Decimal(Decimal),
    Boolean(bool),
    Character(char),
    String(String),
    CharArray(Vec<char>),
    ByteArray(Vec<i8>),
    LegacyDate(SystemTime),
    LegacyCalendar(time::OffsetDateTime),
    SqlDate(time::Date),
    SqlTime(time::Time),
    SqlTimestamp(time::PrimitiveDateTime),
    LocalDate(NaiveDate),
    LocalTime(NaiveTime),
    LocalDateTime(NaiveDateTime),
    Instant(DateTime<Utc>),
    Duration(TimeDelta),
    StdDuration(std::time::Duration),
    OffsetDateTime(DateTime<FixedOffset>),
    OffsetTime(OffsetTime),
    ZonedDateTime(DateTime<Tz>),
    TimeZone(Tz),
    Currency(Currency),
    Locale(Locale),
    Url(Url),
    Uuid(Uuid),
}

impl Value {
    pub fn category(&self) -> ValueCategory {
        match self {
            Value::Enumerated(_) => ValueCategory::Enumerated,
            Value::Int8(_) => ValueCategory::Int8,
            Value::Int16(_) => ValueCategory::Int16,
            Value::Int32(_) => ValueCategory::Int32,
            Value::Int64(_) => ValueCategory::Int64,
            Value::BigInteger(_) => ValueCategory::BigInteger,
            Value::Float32(_) => ValueCategory::Float32,
            Value::Float64(_) => ValueCategory::Float64,
            Value::Decimal(_) => ValueCategory::Decimal,
            Value::Boolean(_) => ValueCategory::Boolean,
            Value::Character(_) => ValueCategory::Character,
            Value::String(_) => ValueCategory::String,
            Value::CharArray(_) => ValueCategory::CharArray,
            Value::ByteArray(_) => ValueCategory::ByteArray,
            Value::LegacyDate(_) => ValueCategory::LegacyDate,
            Value::LegacyCalendar(_) => ValueCategory::LegacyCalendar,
            Value::SqlDate(_) => ValueCategory::SqlDate,
            Value::SqlTime(_) => ValueCategory::SqlTime,
            Value::SqlTimestamp(_) => ValueCategory::SqlTimestamp,
            Value::LocalDate(_) => ValueCategory::LocalDate,
            Value::LocalTime(_) => ValueCategory::LocalTime,
            Value::LocalDateTime(_) => ValueCategory::LocalDateTime,
            Value::Instant(_) => ValueCategory::Instant,
            Value::Duration(_) => ValueCategory::Duration,
            Value::StdDuration(_) => ValueCategory::StdDuration,
            Value::OffsetDateTime(_) => ValueCategory::OffsetDateTime,
            Value::OffsetTime(_) => ValueCategory::OffsetTime,
            Value::ZonedDateTime(_) => ValueCategory::ZonedDateTime,
            Value::TimeZone(_) => ValueCategory::TimeZone,
            Value::Currency(_) => ValueCategory::Currency,
            Value::Locale(_) => ValueCategory::Locale,
            Value::Url(_) => ValueCategory::Url,
            Value::Uuid(_) => ValueCategory::Uuid,
        }
    }
}

/// Wall-clock time at a fixed offset from UTC, without a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetTime {
    pub time: NaiveTime,
    pub offset: FixedOffset,
}

impl OffsetTime {
    pub fn new(time: NaiveTime, offset: FixedOffset) -> Self {
        Self { time, offset }
    }

    /// The same instant of the day expressed in UTC.
    pub fn to_utc(&self) -> NaiveTime {
        self.time - TimeDelta::seconds(i64::from(self.offset.local_minus_utc()))
    }
}

impl Default for OffsetTime {
    fn default() -> Self {
        Self::new(NaiveTime::MIN, Utc.fix())
    }
}

impl fmt::Display for OffsetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.time, self.offset)
    }
}

impl Serialize for OffsetTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A Rust type that belongs to exactly one [`ValueCategory`].
///
/// `Option<V>` is supported for every `V` and is always set to `Some`.
pub trait FieldValue: Sized + 'static {
    const CATEGORY: ValueCategory;

    /// Converts a synthesized value, returning `None` on a category mismatch.
    fn from_value(value: Value) -> Option<Self>;
}

/// Enum whose constants can be picked by index.
///
/// `CONSTANTS` lists every variant in declaration order.
pub trait Enumerated: Sized + Clone + 'static {
    const CONSTANTS: &'static [Self];
}

impl<V: FieldValue> FieldValue for Option<V> {
    const CATEGORY: ValueCategory = V::CATEGORY;

    fn from_value(value: Value) -> Option<Self> {
        V::from_value(value).map(Some)
    }
}

macro_rules! field_value {
    ($ty:ty, $variant:ident) => {
        impl FieldValue for $ty {
            const CATEGORY: ValueCategory = ValueCategory::$variant;

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

field_value!(i8, Int8);
field_value!(i16, Int16);
field_value!(i32, Int32);
field_value!(i64, Int64);
field_value!(BigInt, BigInteger);
field_value!(f32, Float32);
field_value!(f64, Float64);
field_value!(Decimal, Decimal);
field_value!(bool, Boolean);
field_value!(char, Character);
field_value!(String, String);
field_value!(Vec<char>, CharArray);
field_value!(Vec<i8>, ByteArray);
field_value!(SystemTime, LegacyDate);
field_value!(time::OffsetDateTime, LegacyCalendar);
field_value!(time::Date, SqlDate);
field_value!(time::Time, SqlTime);
field_value!(time::PrimitiveDateTime, SqlTimestamp);
field_value!(NaiveDate, LocalDate);
field_value!(NaiveTime, LocalTime);
field_value!(NaiveDateTime, LocalDateTime);
field_value!(DateTime<Utc>, Instant);
field_value!(TimeDelta, Duration);
field_value!(std::time::Duration, StdDuration);
field_value!(DateTime<FixedOffset>, OffsetDateTime);
field_value!(OffsetTime, OffsetTime);
field_value!(DateTime<Tz>, ZonedDateTime);
field_value!(Tz, TimeZone);
field_value!(Currency, Currency);
field_value!(Locale, Locale);
field_value!(Url, Url);
field_value!(Uuid, Uuid);

impl FieldValue for Vec<u8> {
    const CATEGORY: ValueCategory = ValueCategory::ByteArray;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::ByteArray(bytes) => Some(bytes.into_iter().map(|byte| byte as u8).collect()),
            _ => None,
        }
    }
}
