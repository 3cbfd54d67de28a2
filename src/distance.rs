//! Distance values and the saturating arithmetic that keeps the `UNREACHABLE`
//! sentinel from ever wrapping or overflowing.

/// A shortest-path distance, or the sentinel [`UNREACHABLE`] when no path exists.
pub type Distance = i64;

/// Sentinel value standing in for "no path exists between these two nodes".
pub const UNREACHABLE: Distance = i64::MAX;

#[inline]
#[must_use]
pub fn is_unreachable(d: Distance) -> bool {
    d == UNREACHABLE
}

/// Add two distances, saturating to [`UNREACHABLE`] if either operand already is.
#[inline]
#[must_use]
pub fn saturating_add(a: Distance, b: Distance) -> Distance {
    if is_unreachable(a) || is_unreachable(b) {
        UNREACHABLE
    } else {
        a.saturating_add(b)
    }
}

/// Add a plain step cost (e.g. `1`) to a distance, saturating through `UNREACHABLE`.
#[inline]
#[must_use]
pub fn saturating_add_step(a: Distance, step: Distance) -> Distance {
    if is_unreachable(a) {
        UNREACHABLE
    } else {
        a.saturating_add(step)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn saturating_add_propagates_unreachable() {
        assert_eq!(saturating_add(UNREACHABLE, 3), UNREACHABLE);
        assert_eq!(saturating_add(3, UNREACHABLE), UNREACHABLE);
        assert_eq!(saturating_add(2, 3), 5);
    }

    #[test]
    fn saturating_add_step_propagates_unreachable() {
        assert_eq!(saturating_add_step(UNREACHABLE, 1), UNREACHABLE);
        assert_eq!(saturating_add_step(4, 1), 5);
    }
}
