//! Gadget classifies `User-Agent` headers into the browser and operating system
//! that sent them, and encodes such headers compactly.
//!
//! | crate | description |
//! |-|-|
//! | [`ua`] | classification ([`UserAgent`](ua::UserAgent)) and the [`shorten`](ua::shorten) codec |
//! | [`error`] | error types and extension traits shared by the binaries |
//! | [`utils`] | string utilities used by the classifier |
//! | `http` | [`http`] and [`tower`](https://docs.rs/tower) integration, behind the `http` feature |
//!
//! ```
//! use gadget::ua::UserAgent;
//!
//! let ua = UserAgent::new(
//!     "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:73.0) Gecko/20100101 Firefox/73.0",
//! );
//! assert_eq!(ua.to_string(), "Firefox 73 on Windows 10");
//! assert_eq!(ua.browser(), "Firefox 73");
//! assert_eq!(ua.os(), "Windows 10");
//!
//! let header = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/81.0.4029.0 Safari/537.36";
//! let short = gadget::ua::shorten(header);
//! assert_eq!(short, "~Z (~W NT 10.0; Win64; x64) ~a537.36 ~G ~c81.0.4029.0 ~s537.36");
//! assert_eq!(gadget::ua::unshorten(&short), header);
//! ```
//!
//! [`http`]: https://docs.rs/http

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

#[doc(inline)]
pub use ::gadget_error as error;

#[doc(inline)]
pub use ::gadget_ua as ua;

#[doc(inline)]
pub use ::gadget_utils as utils;

#[cfg(feature = "http")]
#[cfg_attr(docsrs, doc(cfg(feature = "http")))]
pub mod http;
