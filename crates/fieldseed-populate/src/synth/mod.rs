//! Per-category value synthesizers.
//!
//! Every function here is pure: the same context (and the same policy
//! answers) always produces the same value.

pub mod lookup;
pub mod numeric;
pub mod temporal;
pub mod text;

use fieldseed_core::{FieldInfo, Result, Value, ValueCategory};

use crate::context::GenerationContext;
use crate::policy::PopulationPolicies;

/// Produces the value of `category` for `field` at `ctx`.
pub fn synthesize(
    category: ValueCategory,
    ctx: GenerationContext,
    field: &FieldInfo,
    policies: &PopulationPolicies,
) -> Result<Value> {
    let value = match category {
        ValueCategory::Enumerated => {
            Value::Enumerated(lookup::enum_index(ctx, field.ty.constants().unwrap_or(0))?)
        }
        ValueCategory::Int8 => Value::Int8(numeric::int8(ctx)),
        ValueCategory::Int16 => Value::Int16(numeric::int16(ctx)),
        ValueCategory::Int32 => Value::Int32(numeric::int32(ctx)),
        ValueCategory::Int64 => Value::Int64(numeric::int64(ctx)),
        ValueCategory::BigInteger => Value::BigInteger(numeric::big_integer(ctx)),
        ValueCategory::Float32 => Value::Float32(numeric::float32(ctx)),
        ValueCategory::Float64 => Value::Float64(numeric::float64(ctx)),
        ValueCategory::Decimal => {
            Value::Decimal(numeric::decimal(ctx, policies.length_or_scale(field))?)
        }
        ValueCategory::Boolean => Value::Boolean(numeric::boolean(ctx)),
        ValueCategory::Character => Value::Character(text::character(ctx)),
        ValueCategory::String => Value::String(text::string(ctx, policies.length_or_scale(field))),
        ValueCategory::CharArray => {
            Value::CharArray(text::char_array(ctx, policies.length_or_scale(field)))
        }
        ValueCategory::ByteArray => {
            Value::ByteArray(text::byte_array(ctx, policies.length_or_scale(field)))
        }
        ValueCategory::LegacyDate => Value::LegacyDate(temporal::legacy_date(
            ctx,
            policies.temporal_semantics(field),
        )?),
        ValueCategory::LegacyCalendar => Value::LegacyCalendar(temporal::legacy_calendar(
            ctx,
            policies.temporal_semantics(field),
        )?),
        ValueCategory::SqlDate => Value::SqlDate(temporal::sql_date(ctx)?),
        ValueCategory::SqlTime => Value::SqlTime(temporal::sql_time(ctx)?),
        ValueCategory::SqlTimestamp => Value::SqlTimestamp(temporal::sql_timestamp(ctx)?),
        ValueCategory::LocalDate => Value::LocalDate(temporal::local_date(ctx)?),
        ValueCategory::LocalTime => Value::LocalTime(temporal::local_time(ctx)?),
        ValueCategory::LocalDateTime => Value::LocalDateTime(temporal::local_date_time(ctx)?),
        ValueCategory::Instant => Value::Instant(temporal::instant(ctx)?),
        ValueCategory::Duration => Value::Duration(temporal::duration(ctx)),
        ValueCategory::StdDuration => Value::StdDuration(temporal::std_duration(ctx)),
        ValueCategory::OffsetDateTime => Value::OffsetDateTime(temporal::offset_date_time(ctx)?),
        ValueCategory::OffsetTime => Value::OffsetTime(temporal::offset_time(ctx)?),
        ValueCategory::ZonedDateTime => Value::ZonedDateTime(temporal::zoned_date_time(ctx)?),
        ValueCategory::TimeZone => Value::TimeZone(lookup::time_zone(ctx)),
        ValueCategory::Currency => Value::Currency(lookup::currency(ctx)),
        ValueCategory::Locale => Value::Locale(lookup::locale(ctx)),
        ValueCategory::Url => Value::Url(lookup::url(ctx)?),
        ValueCategory::Uuid => Value::Uuid(lookup::uuid(ctx)),
    };
    Ok(value)
}
