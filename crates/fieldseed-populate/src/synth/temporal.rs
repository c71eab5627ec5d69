use std::time::SystemTime;

use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone, Utc,
};
use chrono_tz::Tz;
use time::{Month, PrimitiveDateTime};

use fieldseed_core::{Error, OffsetTime, Result, TemporalSemantics};

use crate::context::GenerationContext;

use super::numeric::power;

/// Calendar years cycle through `2000..2050`.
const BASE_YEAR: i32 = 2000;
const YEAR_SPAN: i128 = 50;
const INSTANT_MILLIS_SPAN: i128 = 1_000_000_000;
const NANOS_PER_SECOND: i64 = 1_000_000_000;

fn year(ctx: GenerationContext) -> i32 {
    let raw = i128::from(ctx.seed) * 100 + i128::from(ctx.position);
    BASE_YEAR + raw.rem_euclid(YEAR_SPAN) as i32
}

fn month(ctx: GenerationContext) -> u8 {
    ctx.fold(12) as u8 + 1
}

fn day(ctx: GenerationContext) -> u8 {
    ctx.fold(28) as u8 + 1
}

fn hour(ctx: GenerationContext) -> u8 {
    ctx.fold(24) as u8
}

fn minute_or_second(ctx: GenerationContext) -> u8 {
    ctx.fold(60) as u8
}

fn invalid(kind: &str, ctx: GenerationContext) -> Error {
    Error::InvalidComponent(format!(
        "no {kind} for seed {} at position {}",
        ctx.seed, ctx.position
    ))
}

pub fn local_date(ctx: GenerationContext) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year(ctx), month(ctx).into(), day(ctx).into())
        .ok_or_else(|| invalid("date", ctx))
}

pub fn local_time(ctx: GenerationContext) -> Result<NaiveTime> {
    let minute = minute_or_second(ctx).into();
    NaiveTime::from_hms_opt(hour(ctx).into(), minute, minute)
        .ok_or_else(|| invalid("time", ctx))
}

pub fn local_date_time(ctx: GenerationContext) -> Result<NaiveDateTime> {
    Ok(local_date(ctx)?.and_time(local_time(ctx)?))
}

/// Milliseconds since the epoch: `(seed^position + seed*position + seed + position) mod 1e9`.
pub fn instant(ctx: GenerationContext) -> Result<DateTime<Utc>> {
    let seed = i128::from(ctx.seed);
    let position = i128::from(ctx.position);
    let raw = i128::from(power(ctx.seed, position as i64)) + seed * position + seed + position;
    let millis = raw.rem_euclid(INSTANT_MILLIS_SPAN) as i64;
    DateTime::from_timestamp_millis(millis).ok_or_else(|| invalid("instant", ctx))
}

/// Whole seconds and the nanosecond remainder of a duration: `position^seed`
/// seconds plus `seed^position` nanoseconds, whole seconds of the latter
/// carried over. The seconds saturate at the `i64` bounds.
fn duration_parts(ctx: GenerationContext) -> (i64, u32) {
    let seconds = power(i64::from(ctx.position), ctx.seed);
    let nanos = power(ctx.seed, i64::from(ctx.position));
    let carry = nanos.div_euclid(NANOS_PER_SECOND);
    (
        seconds.saturating_add(carry),
        nanos.rem_euclid(NANOS_PER_SECOND) as u32,
    )
}

/// Saturates at [`TimeDelta::MIN`] and [`TimeDelta::MAX`].
pub fn duration(ctx: GenerationContext) -> TimeDelta {
    let (seconds, nanos) = duration_parts(ctx);
    TimeDelta::new(seconds, nanos).unwrap_or(if seconds < 0 {
        TimeDelta::MIN
    } else {
        TimeDelta::MAX
    })
}

/// Same composition as [`duration`] over the full `u64` second range.
/// Negative totals clamp to zero.
pub fn std_duration(ctx: GenerationContext) -> std::time::Duration {
    let (seconds, nanos) = duration_parts(ctx);
    match u64::try_from(seconds) {
        Ok(seconds) => std::time::Duration::new(seconds, nanos),
        Err(_) => std::time::Duration::ZERO,
    }
}

/// The local date-time at offset zero.
pub fn offset_date_time(ctx: GenerationContext) -> Result<DateTime<FixedOffset>> {
    Ok(Utc.from_utc_datetime(&local_date_time(ctx)?).fixed_offset())
}

/// The local time at offset zero.
pub fn offset_time(ctx: GenerationContext) -> Result<OffsetTime> {
    Ok(OffsetTime::new(local_time(ctx)?, Utc.fix()))
}

/// The local date-time in UTC.
pub fn zoned_date_time(ctx: GenerationContext) -> Result<DateTime<Tz>> {
    Ok(Tz::UTC.from_utc_datetime(&local_date_time(ctx)?))
}

pub fn sql_date(ctx: GenerationContext) -> Result<time::Date> {
    let month = Month::try_from(month(ctx))?;
    Ok(time::Date::from_calendar_date(year(ctx), month, day(ctx))?)
}

pub fn sql_time(ctx: GenerationContext) -> Result<time::Time> {
    let minute = minute_or_second(ctx);
    Ok(time::Time::from_hms(hour(ctx), minute, minute)?)
}

pub fn sql_timestamp(ctx: GenerationContext) -> Result<PrimitiveDateTime> {
    Ok(PrimitiveDateTime::new(sql_date(ctx)?, sql_time(ctx)?))
}

/// An ambiguous calendar value read with the given semantics. Dates land at
/// midnight and times on 1970-01-01, both in UTC.
pub fn legacy_calendar(
    ctx: GenerationContext,
    semantics: TemporalSemantics,
) -> Result<time::OffsetDateTime> {
    let moment = match semantics {
        TemporalSemantics::Date => PrimitiveDateTime::new(sql_date(ctx)?, time::Time::MIDNIGHT),
        TemporalSemantics::Time => {
            let epoch = time::Date::from_calendar_date(1970, Month::January, 1)?;
            PrimitiveDateTime::new(epoch, sql_time(ctx)?)
        }
        TemporalSemantics::Timestamp => sql_timestamp(ctx)?,
    };
    Ok(moment.assume_utc())
}

pub fn legacy_date(ctx: GenerationContext, semantics: TemporalSemantics) -> Result<SystemTime> {
    Ok(SystemTime::from(legacy_calendar(ctx, semantics)?))
}
