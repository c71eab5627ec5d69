#![allow(dead_code)]

use std::path::PathBuf;
use std::time::SystemTime;

use rust_decimal::Decimal;
use uuid::Uuid;

use fieldseed_core::{Enumerated, OffsetTime};
use fieldseed_populate::{FieldDescriptor, Populate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    Low,
    Medium,
    High,
}

impl Enumerated for Level {
    const CONSTANTS: &'static [Self] = &[Level::Low, Level::Medium, Level::High];
}

/// The smallest record: an 8-bit code followed by a label.
#[derive(Debug, Default, PartialEq)]
pub struct Badge {
    pub code: i8,
    pub label: String,
}

impl Populate for Badge {
    fn fields() -> Vec<FieldDescriptor<Self>> {
        vec![
            FieldDescriptor::value("code", |b: &mut Badge| &mut b.code),
            FieldDescriptor::value("label", |b: &mut Badge| &mut b.label),
        ]
    }
}

/// Scalars that synthesize for every seed at positions above zero.
#[derive(Debug, Default, PartialEq)]
pub struct Profile {
    pub id: i64,
    pub level: Level,
    pub score: Decimal,
    pub active: bool,
    pub initial: char,
    pub nickname: String,
    pub tags: Vec<char>,
    pub digest: Vec<u8>,
    pub external_id: Uuid,
    pub homepage: Option<url::Url>,
    pub born: Option<chrono::NaiveDate>,
}

impl Populate for Profile {
    fn fields() -> Vec<FieldDescriptor<Self>> {
        vec![
            FieldDescriptor::value("id", |p: &mut Profile| &mut p.id),
            FieldDescriptor::enumerated("level", |p: &mut Profile| &mut p.level),
            FieldDescriptor::value("score", |p: &mut Profile| &mut p.score),
            FieldDescriptor::value("active", |p: &mut Profile| &mut p.active),
            FieldDescriptor::value("initial", |p: &mut Profile| &mut p.initial),
            FieldDescriptor::value("nickname", |p: &mut Profile| &mut p.nickname),
            FieldDescriptor::value("tags", |p: &mut Profile| &mut p.tags),
            FieldDescriptor::value("digest", |p: &mut Profile| &mut p.digest),
            FieldDescriptor::value("external_id", |p: &mut Profile| &mut p.external_id),
            FieldDescriptor::value("homepage", |p: &mut Profile| &mut p.homepage),
            FieldDescriptor::value("born", |p: &mut Profile| &mut p.born),
        ]
    }
}

/// `first`, an optional gap field, then `second` and `third`.
#[derive(Debug, Default, PartialEq)]
pub struct Gapped {
    pub first: i32,
    pub gap: String,
    pub second: i64,
    pub third: String,
}

impl Populate for Gapped {
    fn fields() -> Vec<FieldDescriptor<Self>> {
        vec![
            FieldDescriptor::value("first", |g: &mut Gapped| &mut g.first),
            FieldDescriptor::value("gap", |g: &mut Gapped| &mut g.gap),
            FieldDescriptor::value("second", |g: &mut Gapped| &mut g.second),
            FieldDescriptor::value("third", |g: &mut Gapped| &mut g.third),
        ]
    }
}

/// [`Gapped`] with the gap field removed.
#[derive(Debug, Default, PartialEq)]
pub struct Compact {
    pub first: i32,
    pub second: i64,
    pub third: String,
}

impl Populate for Compact {
    fn fields() -> Vec<FieldDescriptor<Self>> {
        vec![
            FieldDescriptor::value("first", |c: &mut Compact| &mut c.first),
            FieldDescriptor::value("second", |c: &mut Compact| &mut c.second),
            FieldDescriptor::value("third", |c: &mut Compact| &mut c.third),
        ]
    }
}

/// [`Gapped`] whose gap has a type outside the supported categories.
#[derive(Debug, Default)]
pub struct WithPath {
    pub first: i32,
    pub path: PathBuf,
    pub second: i64,
    pub third: String,
}

impl Populate for WithPath {
    fn fields() -> Vec<FieldDescriptor<Self>> {
        vec![
            FieldDescriptor::value("first", |w: &mut WithPath| &mut w.first),
            FieldDescriptor::opaque::<PathBuf>("path"),
            FieldDescriptor::value("second", |w: &mut WithPath| &mut w.second),
            FieldDescriptor::value("third", |w: &mut WithPath| &mut w.third),
        ]
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct Ratios {
    pub ratio: f64,
    pub coarse: f32,
}

impl Populate for Ratios {
    fn fields() -> Vec<FieldDescriptor<Self>> {
        vec![
            FieldDescriptor::value("ratio", |r: &mut Ratios| &mut r.ratio),
            FieldDescriptor::value("coarse", |r: &mut Ratios| &mut r.coarse),
        ]
    }
}

/// A decimal in the first slot, where the quotient is infinite.
#[derive(Debug, Default, PartialEq)]
pub struct Price {
    pub amount: Decimal,
}

impl Populate for Price {
    fn fields() -> Vec<FieldDescriptor<Self>> {
        vec![FieldDescriptor::value("amount", |p: &mut Price| &mut p.amount)]
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub label: String,
}

impl Populate for Point {
    fn fields() -> Vec<FieldDescriptor<Self>> {
        vec![
            FieldDescriptor::value("x", |p: &mut Point| &mut p.x),
            FieldDescriptor::value("y", |p: &mut Point| &mut p.y),
            FieldDescriptor::value("label", |p: &mut Point| &mut p.label),
        ]
    }
}

/// Two sibling composites of the same type.
#[derive(Debug, Default, PartialEq)]
pub struct Segment {
    pub id: i32,
    pub start: Point,
    pub end: Point,
}

impl Populate for Segment {
    fn fields() -> Vec<FieldDescriptor<Self>> {
        vec![
            FieldDescriptor::value("id", |s: &mut Segment| &mut s.id),
            FieldDescriptor::composite("start", |s: &mut Segment| &mut s.start),
            FieldDescriptor::composite("end", |s: &mut Segment| &mut s.end),
        ]
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct Invoice {
    pub number: i32,
    pub price: Price,
}

impl Populate for Invoice {
    fn fields() -> Vec<FieldDescriptor<Self>> {
        vec![
            FieldDescriptor::value("number", |i: &mut Invoice| &mut i.number),
            FieldDescriptor::composite("price", |i: &mut Invoice| &mut i.price),
        ]
    }
}

/// `frozen` rejects writes.
#[derive(Debug, Default, PartialEq)]
pub struct Locked {
    pub id: i32,
    pub frozen: String,
    pub after: i32,
}

impl Populate for Locked {
    fn fields() -> Vec<FieldDescriptor<Self>> {
        vec![
            FieldDescriptor::value("id", |l: &mut Locked| &mut l.id),
            FieldDescriptor::read_only::<String>("frozen"),
            FieldDescriptor::value("after", |l: &mut Locked| &mut l.after),
        ]
    }
}

#[derive(Debug, Default)]
pub struct Attachment {
    pub id: i32,
    pub path: PathBuf,
}

impl Populate for Attachment {
    fn fields() -> Vec<FieldDescriptor<Self>> {
        vec![
            FieldDescriptor::value("id", |a: &mut Attachment| &mut a.id),
            FieldDescriptor::opaque::<PathBuf>("path"),
        ]
    }
}

/// Both ambiguous temporal types.
#[derive(Debug, PartialEq)]
pub struct Stamped {
    pub seen: SystemTime,
    pub at: time::OffsetDateTime,
}

impl Default for Stamped {
    fn default() -> Self {
        Self {
            seen: SystemTime::UNIX_EPOCH,
            at: time::OffsetDateTime::UNIX_EPOCH,
        }
    }
}

impl Populate for Stamped {
    fn fields() -> Vec<FieldDescriptor<Self>> {
        vec![
            FieldDescriptor::value("seen", |s: &mut Stamped| &mut s.seen),
            FieldDescriptor::value("at", |s: &mut Stamped| &mut s.at),
        ]
    }
}

/// Every date, time and duration type, then a decimal in the last slot.
#[derive(Debug, Default, PartialEq)]
pub struct Chronology {
    pub recorded: Option<SystemTime>,
    pub calendar: Option<time::OffsetDateTime>,
    pub sql_date: Option<time::Date>,
    pub sql_time: Option<time::Time>,
    pub sql_timestamp: Option<time::PrimitiveDateTime>,
    pub date: Option<chrono::NaiveDate>,
    pub clock: Option<chrono::NaiveTime>,
    pub local: Option<chrono::NaiveDateTime>,
    pub instant: Option<chrono::DateTime<chrono::Utc>>,
    pub elapsed: Option<chrono::TimeDelta>,
    pub timeout: Option<std::time::Duration>,
    pub offset: Option<chrono::DateTime<chrono::FixedOffset>>,
    pub offset_clock: Option<OffsetTime>,
    pub zoned: Option<chrono::DateTime<chrono_tz::Tz>>,
    pub zone: Option<chrono_tz::Tz>,
    pub rate: Decimal,
}

impl Populate for Chronology {
    fn fields() -> Vec<FieldDescriptor<Self>> {
        vec![
            FieldDescriptor::value("recorded", |c: &mut Chronology| &mut c.recorded),
            FieldDescriptor::value("calendar", |c: &mut Chronology| &mut c.calendar),
            FieldDescriptor::value("sql_date", |c: &mut Chronology| &mut c.sql_date),
            FieldDescriptor::value("sql_time", |c: &mut Chronology| &mut c.sql_time),
            FieldDescriptor::value("sql_timestamp", |c: &mut Chronology| &mut c.sql_timestamp),
            FieldDescriptor::value("date", |c: &mut Chronology| &mut c.date),
            FieldDescriptor::value("clock", |c: &mut Chronology| &mut c.clock),
            FieldDescriptor::value("local", |c: &mut Chronology| &mut c.local),
            FieldDescriptor::value("instant", |c: &mut Chronology| &mut c.instant),
            FieldDescriptor::value("elapsed", |c: &mut Chronology| &mut c.elapsed),
            FieldDescriptor::value("timeout", |c: &mut Chronology| &mut c.timeout),
            FieldDescriptor::value("offset", |c: &mut Chronology| &mut c.offset),
            FieldDescriptor::value("offset_clock", |c: &mut Chronology| &mut c.offset_clock),
            FieldDescriptor::value("zoned", |c: &mut Chronology| &mut c.zoned),
            FieldDescriptor::value("zone", |c: &mut Chronology| &mut c.zone),
            FieldDescriptor::value("rate", |c: &mut Chronology| &mut c.rate),
        ]
    }
}
