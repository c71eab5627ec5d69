use num_bigint::BigInt;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use fieldseed_core::{Error, Result};

use crate::context::GenerationContext;

/// Largest scale a [`Decimal`] can carry.
pub const MAX_DECIMAL_SCALE: usize = 28;

/// Numerator of the floating-point formula.
const FLOAT_NUMERATOR: i32 = i32::MAX;

/// Folds `|seed + position|` into `[-max - 1, max - 1]`.
fn fold_signed(ctx: GenerationContext, max: i128) -> i128 {
    ctx.sum().abs() % (2 * max + 1) - max - 1
}

pub fn int8(ctx: GenerationContext) -> i8 {
    fold_signed(ctx, i128::from(i8::MAX)) as i8
}

pub fn int16(ctx: GenerationContext) -> i16 {
    fold_signed(ctx, i128::from(i16::MAX)) as i16
}

pub fn int32(ctx: GenerationContext) -> i32 {
    fold_signed(ctx, i128::from(i32::MAX)) as i32
}

/// Unsigned magnitude of `seed + position`, reinterpreted as `i64`.
pub fn int64(ctx: GenerationContext) -> i64 {
    ctx.sum().unsigned_abs() as i64
}

pub fn big_integer(ctx: GenerationContext) -> BigInt {
    BigInt::from(ctx.sum())
}

/// `seed + i32::MAX / position`. Position 0 yields `+inf`.
pub fn float32(ctx: GenerationContext) -> f32 {
    ctx.seed as f32 + FLOAT_NUMERATOR as f32 / ctx.position as f32
}

/// `seed + i32::MAX / position`. Position 0 yields `+inf`.
pub fn float64(ctx: GenerationContext) -> f64 {
    ctx.seed as f64 + f64::from(FLOAT_NUMERATOR) / f64::from(ctx.position)
}

/// The `f64` formula rounded half-to-even to exactly `scale` digits.
///
/// Fails with an overflow when the quotient is not finite (position 0) or
/// the integer digits leave no room for `scale` fractional digits.
pub fn decimal(ctx: GenerationContext, scale: usize) -> Result<Decimal> {
    if scale > MAX_DECIMAL_SCALE {
        return Err(Error::Overflow(format!(
            "decimal scale {scale} exceeds {MAX_DECIMAL_SCALE}"
        )));
    }
    let raw = float64(ctx);
    let value = Decimal::from_f64(raw)
        .ok_or_else(|| Error::Overflow(format!("{raw} has no decimal representation")))?;
    let scale = scale as u32;
    let mut value = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointNearestEven);
    value.rescale(scale);
    if value.scale() != scale {
        return Err(Error::Overflow(format!(
            "{raw} cannot carry {scale} fractional digits"
        )));
    }
    Ok(value)
}

pub fn boolean(ctx: GenerationContext) -> bool {
    ctx.fold(2) == 1
}

/// `base^exponent` saturating at the `i64` bounds. Negative exponents
/// truncate toward zero, except `0^-n` which saturates.
pub fn power(base: i64, exponent: i64) -> i64 {
    if exponent < 0 {
        return match base {
            0 => i64::MAX,
            1 => 1,
            -1 if exponent % 2 == 0 => 1,
            -1 => -1,
            _ => 0,
        };
    }
    let exponent = u32::try_from(exponent).unwrap_or(u32::MAX);
    base.saturating_pow(exponent)
}
