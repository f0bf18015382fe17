//! String utilities for gadget.
//!
//! The User-Agent classifier works on literal, case-sensitive text:
//! prefix checks over ordered candidate lists, byte offsets that must never
//! panic, and an ordered multi-pattern [`Replacer`](str::Replacer) backing
//! the shortening codec.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

pub mod str;
