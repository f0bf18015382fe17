pub mod parse;
pub mod shorten;
