mod range;
mod class;

pub use range::{CodePointRange, Difference, next_char, prev_char};
pub use range::{consolidate, is_consolidated, range_union, range_intersect, range_subtract};
pub use class::CharClass;
