//! Sample types used by `fieldseed preview`.

use std::path::PathBuf;
use std::time::SystemTime;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::Serialize;
use url::Url;
use uuid::Uuid;

use fieldseed_core::{Currency, Enumerated, Locale};
use fieldseed_populate::{FieldDescriptor, Populate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

impl Enumerated for OrderStatus {
    const CONSTANTS: &'static [Self] = &[
        OrderStatus::Pending,
        OrderStatus::Paid,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];
}

#[derive(Debug, Default, Serialize)]
pub struct Order {
    pub id: i64,
    pub total: Decimal,
    pub number: i32,
    pub status: OrderStatus,
    pub priority: i16,
    pub weight_kg: f64,
    pub gift: bool,
    pub currency: Currency,
    pub locale: Locale,
    pub placed_at: DateTime<Utc>,
    pub ship_by: Option<time::Date>,
    pub created: Option<SystemTime>,
    pub time_zone: Option<Tz>,
    pub receipt_url: Option<Url>,
    pub tracking_id: Uuid,
    pub checksum: Vec<u8>,
    pub customer: Customer,
    pub internal_note: String,
    pub attachments: PathBuf,
}

impl Populate for Order {
    fn fields() -> Vec<FieldDescriptor<Self>> {
        vec![
            FieldDescriptor::value("id", |o: &mut Order| &mut o.id),
            FieldDescriptor::value("total", |o: &mut Order| &mut o.total),
            FieldDescriptor::value("number", |o: &mut Order| &mut o.number),
            FieldDescriptor::enumerated("status", |o: &mut Order| &mut o.status),
            FieldDescriptor::value("priority", |o: &mut Order| &mut o.priority),
            FieldDescriptor::value("weight_kg", |o: &mut Order| &mut o.weight_kg),
            FieldDescriptor::value("gift", |o: &mut Order| &mut o.gift),
            FieldDescriptor::value("currency", |o: &mut Order| &mut o.currency),
            FieldDescriptor::value("locale", |o: &mut Order| &mut o.locale),
            FieldDescriptor::value("placed_at", |o: &mut Order| &mut o.placed_at),
            FieldDescriptor::value("ship_by", |o: &mut Order| &mut o.ship_by),
            FieldDescriptor::value("created", |o: &mut Order| &mut o.created),
            FieldDescriptor::value("time_zone", |o: &mut Order| &mut o.time_zone),
            FieldDescriptor::value("receipt_url", |o: &mut Order| &mut o.receipt_url),
            FieldDescriptor::value("tracking_id", |o: &mut Order| &mut o.tracking_id),
            FieldDescriptor::value("checksum", |o: &mut Order| &mut o.checksum),
            FieldDescriptor::composite("customer", |o: &mut Order| &mut o.customer),
            FieldDescriptor::value("internal_note", |o: &mut Order| &mut o.internal_note),
            FieldDescriptor::opaque::<PathBuf>("attachments"),
        ]
    }
}

#[derive(Debug, Default, Serialize)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub verified: bool,
    pub initial: char,
    pub member_since: NaiveDate,
    pub preferred_call_time: NaiveTime,
    pub address: Address,
}

impl Populate for Customer {
    fn fields() -> Vec<FieldDescriptor<Self>> {
        vec![
            FieldDescriptor::value("id", |c: &mut Customer| &mut c.id),
            FieldDescriptor::value("name", |c: &mut Customer| &mut c.name),
            FieldDescriptor::value("verified", |c: &mut Customer| &mut c.verified),
            FieldDescriptor::value("initial", |c: &mut Customer| &mut c.initial),
            FieldDescriptor::value("member_since", |c: &mut Customer| &mut c.member_since),
            FieldDescriptor::value("preferred_call_time", |c: &mut Customer| {
                &mut c.preferred_call_time
            }),
            FieldDescriptor::composite("address", |c: &mut Customer| &mut c.address),
        ]
    }
}

#[derive(Debug, Default, Serialize)]
pub struct Address {
    pub street: String,
    pub postal_code: String,
    pub city: String,
    pub country: Locale,
    pub reference: Uuid,
}

impl Populate for Address {
    fn fields() -> Vec<FieldDescriptor<Self>> {
        vec![
            FieldDescriptor::value("street", |a: &mut Address| &mut a.street),
            FieldDescriptor::value("postal_code", |a: &mut Address| &mut a.postal_code),
            FieldDescriptor::value("city", |a: &mut Address| &mut a.city),
            FieldDescriptor::value("country", |a: &mut Address| &mut a.country),
            FieldDescriptor::value("reference", |a: &mut Address| &mut a.reference),
        ]
    }
}
