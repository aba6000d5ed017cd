//! Yes/no rendering for booleans.


/// Returns `"yes"` for `true` and `"no"` for `false`.
///
/// # Examples
///
/// ```
/// use libhumanize::boolean::yes_no;
///
/// assert_eq!(yes_no(true), "yes");
/// assert_eq!(yes_no(false), "no");
/// ```
pub fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
