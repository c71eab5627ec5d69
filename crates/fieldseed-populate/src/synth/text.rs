use std::iter;

use crate::context::GenerationContext;

use super::numeric;

/// First character of the printable range.
pub const PRINTABLE_BASE: u8 = b' ';
/// Number of printable ASCII characters starting at [`PRINTABLE_BASE`].
pub const PRINTABLE_SPAN: u64 = 95;

/// A printable ASCII character.
pub fn character(ctx: GenerationContext) -> char {
    char::from(PRINTABLE_BASE + ctx.fold(PRINTABLE_SPAN) as u8)
}

/// `length` copies of [`character`].
pub fn string(ctx: GenerationContext, length: usize) -> String {
    iter::repeat_n(character(ctx), length).collect()
}

pub fn char_array(ctx: GenerationContext, length: usize) -> Vec<char> {
    vec![character(ctx); length]
}

/// `length` copies of the 8-bit integer for the same context.
pub fn byte_array(ctx: GenerationContext, length: usize) -> Vec<i8> {
    vec![numeric::int8(ctx); length]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters_stay_printable() {
        assert_eq!(character(GenerationContext::new(0, 0)), ' ');
        assert_eq!(character(GenerationContext::new(94, 0)), '~');
        assert_eq!(character(GenerationContext::new(95, 0)), ' ');
        assert_eq!(character(GenerationContext::new(-1, 0)), '~');
    }

    #[test]
    fn sequences_honor_length() {
        let ctx = GenerationContext::new(10, 1);
        assert_eq!(string(ctx, 5), "+++++");
        assert!(string(ctx, 0).is_empty());
        assert_eq!(char_array(ctx, 3), vec!['+'; 3]);
        assert_eq!(byte_array(ctx, 2), vec![-117, -117]);
    }
}
