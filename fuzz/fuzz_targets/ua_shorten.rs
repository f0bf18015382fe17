#![no_main]

use gadget::ua::{shorten, unshorten};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &str| {
    let short = shorten(input);
    assert_eq!(unshorten(&short), input);
});
