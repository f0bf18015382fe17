//! string utilities

mod replace;
#[doc(inline)]
pub use replace::Replacer;

mod search;
#[doc(inline)]
pub use search::{starts_with_any, substr_from};
