//! User Agent (UA) classifier.
//!
//! This crate provides a parser ([`UserAgent::new`], [`parse_user_agent`]) that reduces
//! a `User-Agent` header to the browser and operating system that sent it:
//!
//! ```
//! use gadget_ua::UserAgent;
//!
//! let ua = UserAgent::new(
//!     "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_3) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/13.0.5 Safari/605.1.15",
//! );
//! assert_eq!(ua.browser(), "Safari 13.0");
//! assert_eq!(ua.os(), "macOS 10.15");
//! ```
//!
//! It also provides a reversible codec ([`shorten`], [`unshorten`]) to store
//! `User-Agent` headers more compactly while keeping them readable.
//!
//! # Remarks
//!
//! Classification is a list of heuristics over noisy text, tried in a fixed order:
//!
//! - versions are capped at one (e.g. `Chrome 80`) or two (e.g. `Safari 13.0`) segments;
//! - browsers that pretend to be something else (_Edge_ claiming to be _Chrome_,
//!   in-app browsers claiming to be _Safari_, ...) are recognized where popular;
//! - unknown clients get a best effort guess from their first `Name/Version` token,
//!   e.g. `curl 7.68`;
//! - the Linux "version" is the distribution, when one is advertised.
//!
//! Please open an [issue](https://github.com/zgoat/gadget-rs/issues) in case a popular
//! User Agent is misclassified.

#![doc(html_root_url = "https://docs.rs/gadget-ua")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod info;
pub use info::UserAgent;

mod parse;
pub use parse::parse_user_agent;

mod shorten;
pub use shorten::{SHORTEN_PAIRS, shorten, unshorten};

pub mod tokenize;
pub mod version;

mod browser;
mod os;
mod tables;
