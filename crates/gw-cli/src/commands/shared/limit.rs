/// Compute effective limit with precedence: global flag -> configured default.
///
/// A zero limit is treated as unset.
#[must_use]
pub fn effective_limit(global: Option<u32>, fallback: u32) -> usize {
    let limit = global.filter(|value| *value > 0).unwrap_or(fallback);
    usize::try_from(limit).unwrap_or(usize::MAX)
}
