//! Version normalization.
//!
//! User Agents advertise versions with wildly different granularity
//! (`73.0`, `80.0.3987.132`, `1.5.6BETA4`, ...). These helpers reduce
//! them to the numeric part and cap the amount of dotted segments,
//! so that classified versions are rendered consistently.
//!
//! Both functions are total and only ever return a prefix of their input.

/// Keep the leading digits and dots of `v`, stopping at the first other character.
///
/// ```
/// use gadget_ua::version::to_number;
///
/// assert_eq!(to_number("1"), "1");
/// assert_eq!(to_number("1.1.6"), "1.1.6");
/// assert_eq!(to_number("1.5.6BETA4"), "1.5.6");
/// assert_eq!(to_number("beta"), "");
/// ```
#[must_use]
pub fn to_number(v: &str) -> &str {
    let end = v
        .find(|c: char| c != '.' && !c.is_ascii_digit())
        .unwrap_or(v.len());
    &v[..end]
}

/// Cap the numeric prefix of `v` at `n` dot-separated segments.
///
/// When `trim_zero` is set a trailing `0` segment is dropped as well,
/// so `5.0` renders as `5`.
///
/// ```
/// use gadget_ua::version::max_version;
///
/// assert_eq!(max_version("75.0", 1, false), "75");
/// assert_eq!(max_version("5.0.6", 2, false), "5.0");
/// assert_eq!(max_version("5.0.6", 2, true), "5");
/// assert_eq!(max_version("8.0", 2, true), "8");
/// assert_eq!(max_version("13.0.5", 2, false), "13.0");
/// ```
#[must_use]
pub fn max_version(v: &str, n: usize, trim_zero: bool) -> &str {
    let v = to_number(v);
    if n == 0 {
        return "";
    }

    match v.match_indices('.').nth(n - 1) {
        // more than `n` segments
        Some((end, _)) => {
            let kept = &v[..end];
            if trim_zero {
                let last = kept.rfind('.').map_or(0, |i| i + 1);
                if &kept[last..] == "0" {
                    return &kept[..last.saturating_sub(1)];
                }
            }
            kept
        }
        None if trim_zero => v.strip_suffix(".0").unwrap_or(v),
        None => v,
    }
}
