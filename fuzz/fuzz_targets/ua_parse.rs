#![no_main]

use gadget::ua::UserAgent;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &str| {
    let ua = UserAgent::new(input);
    // a version is never classified without a name
    assert!(ua.browser_version.is_empty() || !ua.browser_name.is_empty());
    assert!(ua.os_version.is_empty() || !ua.os_name.is_empty());
});
