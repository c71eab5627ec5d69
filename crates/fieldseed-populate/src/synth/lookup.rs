use chrono_tz::{TZ_VARIANTS, Tz};
use url::Url;
use uuid::Uuid;

use fieldseed_core::{Currency, Error, Locale, Result};

use crate::context::GenerationContext;

use super::numeric::power;

/// Host of every synthesized URL.
pub const SAMPLE_HOST: &str = "sample.url.org";

/// Index of the chosen constant in declaration order.
pub fn enum_index(ctx: GenerationContext, constants: usize) -> Result<usize> {
    if constants == 0 {
        return Err(Error::Overflow(
            "division by zero: enum declares no constants".to_string(),
        ));
    }
    Ok(ctx.fold(constants as u64) as usize)
}

pub fn time_zone(ctx: GenerationContext) -> Tz {
    TZ_VARIANTS[ctx.fold(TZ_VARIANTS.len() as u64) as usize]
}

pub fn currency(ctx: GenerationContext) -> Currency {
    let available = Currency::available();
    available[ctx.fold(available.len() as u64) as usize]
}

pub fn locale(ctx: GenerationContext) -> Locale {
    let available = Locale::available();
    available[ctx.fold(available.len() as u64) as usize]
}

pub fn url(ctx: GenerationContext) -> Result<Url> {
    let raw = format!(
        "http://{SAMPLE_HOST}/seed/{}/position/{}",
        ctx.seed, ctx.position
    );
    Ok(Url::parse(&raw)?)
}

/// High bits `seed^position`, low bits `seed * position`.
pub fn uuid(ctx: GenerationContext) -> Uuid {
    let position = i64::from(ctx.position);
    let high = power(ctx.seed, position) as u64;
    let low = ctx.seed.wrapping_mul(position) as u64;
    Uuid::from_u64_pair(high, low)
}
