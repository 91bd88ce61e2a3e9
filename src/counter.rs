//! Counters with encapsulated per-instance state.
//!
//! One pattern, two renditions: an opaque struct handle whose only public
//! operation mutates and reads the private count, and a closure that captures
//! the same state from its construction scope.

/// A counter with private state and a single mutate-and-read operation.
///
/// The count starts at zero and is reachable only through [`Counter::next`]:
/// there is no getter and no reset. Every handle owns its own count, so
/// advancing one counter can never be observed through another.
#[derive(Debug, Default)]
pub struct Counter {
    count: u64,
}

impl Counter {
    /// Creates a counter whose first [`next`](Counter::next) returns 1.
    pub fn new() -> Self {
        Counter { count: 0 }
    }

    /// Increments the count by exactly 1 and returns the new value.
    ///
    /// Never idempotent: consecutive calls return strictly increasing values.
    pub fn next(&mut self) -> u64 {
        self.count += 1;
        self.count
    }
}

/// Creates a fresh, independent [`Counter`].
///
/// Zero arguments, never fails. Each call produces a handle with its own
/// private count, initialized to zero.
pub fn create_counter() -> Counter {
    Counter::new()
}

/// The closure rendition of [`create_counter`].
///
/// The returned closure owns a count captured from this function's scope;
/// nothing outside the closure can name or reach it. Calling the closure
/// increments the count and returns the new value, exactly like
/// [`Counter::next`].
pub fn closure_counter() -> impl FnMut() -> u64 {
    let mut count: u64 = 0;
    move || {
        count += 1;
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_call_returns_one() {
        let mut counter = create_counter();
        assert_eq!(counter.next(), 1);
    }

    #[test]
    fn test_values_increase_by_exactly_one() {
        let mut counter = Counter::new();
        assert_eq!(counter.next(), 1);
        assert_eq!(counter.next(), 2);
        assert_eq!(counter.next(), 3);
    }

    #[test]
    fn test_counters_never_alias() {
        let mut c1 = create_counter();
        assert_eq!(c1.next(), 1);
        assert_eq!(c1.next(), 2);

        let mut c2 = create_counter();
        assert_eq!(c2.next(), 1, "a fresh counter starts its own sequence");
        assert_eq!(c1.next(), 3, "the first counter is unaffected");
    }

    #[test]
    fn test_next_is_not_idempotent() {
        let mut counter = Counter::new();
        let first = counter.next();
        let second = counter.next();
        assert_ne!(first, second);
        assert_eq!(second, first + 1);
    }

    #[test]
    fn test_default_matches_new() {
        let mut counter = Counter::default();
        assert_eq!(counter.next(), 1);
    }

    #[test]
    fn test_closure_counter_has_the_same_contract() {
        let mut tick = closure_counter();
        assert_eq!(tick(), 1);
        assert_eq!(tick(), 2);

        let mut tock = closure_counter();
        assert_eq!(tock(), 1);
        assert_eq!(tick(), 3);
    }

    proptest! {
        #[test]
        fn test_n_calls_end_at_n(n in 1usize..512) {
            let mut counter = create_counter();
            let mut last = 0;
            for _ in 0..n {
                last = counter.next();
            }
            prop_assert_eq!(last, n as u64);
        }

        #[test]
        fn test_advancing_one_counter_never_moves_another(lead in 0usize..256) {
            let mut busy = create_counter();
            for _ in 0..lead {
                busy.next();
            }
            let mut fresh = create_counter();
            prop_assert_eq!(fresh.next(), 1);
        }

        #[test]
        fn test_closure_counters_are_independent(calls in 1usize..128) {
            let mut first = closure_counter();
            let mut second = closure_counter();
            for expected in 1..=calls as u64 {
                prop_assert_eq!(first(), expected);
            }
            prop_assert_eq!(second(), 1);
        }
    }
}
