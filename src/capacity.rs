//! Capacity policy shared by the buffer-backed containers.
//!
//! A container owns one `CapacityPolicy` and consults it after every
//! structural mutation. The grow check always runs first; the shrink check
//! only runs when no growth was needed.

use crate::error::{Error, Result};

/// When a container should grow.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GrowTrigger {
    /// Grow as soon as `len >= capacity`.
    AtCapacity,
    /// Grow only once `len > capacity`.
    BeyondCapacity,
}

/// How a computed capacity target is rounded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rounding {
    Exact,
    /// Round up to the next power of two, so `index & (capacity - 1)` maps a
    /// logical index onto a slot.
    PowerOfTwo,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CapacityPolicy {
    growth_factor: f64,
    decay_factor: f64,
    truncate_threshold: f64,
    min_capacity: usize,
    trigger: GrowTrigger,
    rounding: Rounding,
}

pub const MIN_CAPACITY: usize = 8;

impl CapacityPolicy {
    /// Builds a policy after checking `decay < 1 < growth` and
    /// `0 < truncate < 1`.
    pub fn new(
        growth_factor: f64,
        decay_factor: f64,
        truncate_threshold: f64,
        min_capacity: usize,
        trigger: GrowTrigger,
        rounding: Rounding,
    ) -> Result<Self> {
        if !(growth_factor > 1.0) || !growth_factor.is_finite() {
            return Err(Error::InvalidArgument {
                parameter: "growth_factor",
                reason: "must be a finite value greater than 1",
            });
        }
        if !(decay_factor > 0.0 && decay_factor < 1.0) {
            return Err(Error::InvalidArgument {
                parameter: "decay_factor",
                reason: "must lie strictly between 0 and 1",
            });
        }
        if !(truncate_threshold > 0.0 && truncate_threshold < 1.0) {
            return Err(Error::InvalidArgument {
                parameter: "truncate_threshold",
                reason: "must lie strictly between 0 and 1",
            });
        }
        if min_capacity == 0 {
            return Err(Error::InvalidArgument {
                parameter: "min_capacity",
                reason: "must be at least 1",
            });
        }
        if rounding == Rounding::PowerOfTwo && !min_capacity.is_power_of_two() {
            return Err(Error::InvalidArgument {
                parameter: "min_capacity",
                reason: "must be a power of two for a squared policy",
            });
        }
        Ok(Self {
            growth_factor,
            decay_factor,
            truncate_threshold,
            min_capacity,
            trigger,
            rounding,
        })
    }

    /// Doubling growth, used by maps, sets and linked storage.
    pub const fn standard() -> Self {
        Self {
            growth_factor: 2.0,
            decay_factor: 0.5,
            truncate_threshold: 0.25,
            min_capacity: MIN_CAPACITY,
            trigger: GrowTrigger::AtCapacity,
            rounding: Rounding::Exact,
        }
    }

    /// Growth of 1.5 for array-like sequences, triggered only past capacity.
    pub const fn arrayed() -> Self {
        Self {
            growth_factor: 1.5,
            decay_factor: 0.5,
            truncate_threshold: 0.25,
            min_capacity: MIN_CAPACITY,
            trigger: GrowTrigger::BeyondCapacity,
            rounding: Rounding::Exact,
        }
    }

    /// Doubling growth with every capacity a power of two.
    pub const fn squared() -> Self {
        Self {
            growth_factor: 2.0,
            decay_factor: 0.5,
            truncate_threshold: 0.25,
            min_capacity: MIN_CAPACITY,
            trigger: GrowTrigger::AtCapacity,
            rounding: Rounding::PowerOfTwo,
        }
    }

    pub fn growth_factor(&self) -> f64 {
        self.growth_factor
    }
    pub fn decay_factor(&self) -> f64 {
        self.decay_factor
    }
    pub fn truncate_threshold(&self) -> f64 {
        self.truncate_threshold
    }
    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }
    pub fn trigger(&self) -> GrowTrigger {
        self.trigger
    }
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Capacity for a container freshly built from `len` elements.
    pub fn initial(&self, len: usize) -> usize {
        self.adjust(len, self.min_capacity)
    }

    /// Capacity after `allocate(requested)`; never smaller than `current`.
    pub fn allocate(&self, current: usize, requested: usize) -> usize {
        match self.rounding {
            Rounding::Exact => requested.max(current),
            Rounding::PowerOfTwo => square(requested).max(current),
        }
    }

    /// Capacity to hold `len` elements given the current `capacity`.
    ///
    /// The result is always `>= len` and `>= min_capacity`.
    pub fn adjust(&self, len: usize, capacity: usize) -> usize {
        if self.should_grow(len, capacity) {
            self.grown(len, capacity)
        } else if self.should_shrink(len, capacity) {
            self.shrunk(len, capacity)
        } else {
            capacity
        }
    }

    fn should_grow(&self, len: usize, capacity: usize) -> bool {
        match self.trigger {
            GrowTrigger::AtCapacity => len >= capacity,
            GrowTrigger::BeyondCapacity => len > capacity,
        }
    }

    fn should_shrink(&self, len: usize, capacity: usize) -> bool {
        capacity > self.min_capacity && (len as f64) <= capacity as f64 * self.truncate_threshold
    }

    fn grown(&self, len: usize, capacity: usize) -> usize {
        let scaled = scale(capacity, self.growth_factor);
        match self.rounding {
            Rounding::Exact => len.max(scaled).max(self.min_capacity),
            Rounding::PowerOfTwo => square(len.saturating_add(1).max(scaled)),
        }
    }

    // Never below the smallest capacity that holds `len` without growing
    // again; a decay steeper than the truncate threshold would otherwise
    // undershoot.
    fn shrunk(&self, len: usize, capacity: usize) -> usize {
        let floor = match self.trigger {
            GrowTrigger::AtCapacity => len.saturating_add(1),
            GrowTrigger::BeyondCapacity => len,
        };
        let scaled = scale(capacity, self.decay_factor).max(floor);
        let target = match self.rounding {
            Rounding::Exact => scaled,
            Rounding::PowerOfTwo => square(scaled),
        };
        target.max(self.min_capacity).min(capacity)
    }
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

fn scale(capacity: usize, factor: f64) -> usize {
    let v = capacity as f64 * factor;
    if v >= usize::MAX as f64 {
        usize::MAX
    } else {
        v as usize
    }
}

/// Next power of two at or above `n`.
pub(crate) fn square(n: usize) -> usize {
    n.checked_next_power_of_two().unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: an empty container starts at the minimum capacity.
    #[test]
    fn initial_capacity_is_minimum() {
        for p in [
            CapacityPolicy::standard(),
            CapacityPolicy::arrayed(),
            CapacityPolicy::squared(),
        ] {
            assert_eq!(p.initial(0), MIN_CAPACITY);
            assert_eq!(p.initial(3), MIN_CAPACITY);
        }
    }

    /// Invariant: a large source gets at least its own length.
    #[test]
    fn initial_capacity_covers_source() {
        assert_eq!(CapacityPolicy::standard().initial(20), 20);
        assert_eq!(CapacityPolicy::arrayed().initial(20), 20);
        assert_eq!(CapacityPolicy::squared().initial(20), 32);
    }

    /// Invariant: growth multiplies the capacity by the policy factor.
    #[test]
    fn growth_factors() {
        assert_eq!(CapacityPolicy::standard().adjust(8, 8), 16);
        assert_eq!(CapacityPolicy::arrayed().adjust(8, 8), 8);
        assert_eq!(CapacityPolicy::arrayed().adjust(9, 8), 12);
        assert_eq!(CapacityPolicy::squared().adjust(8, 8), 16);
        assert_eq!(CapacityPolicy::squared().adjust(16, 16), 32);
    }

    /// Invariant: a squared policy only ever yields powers of two.
    #[test]
    fn squared_is_power_of_two() {
        let p = CapacityPolicy::squared();
        let mut cap = p.initial(0);
        for len in 0..300 {
            cap = p.adjust(len, cap);
            assert!(cap.is_power_of_two(), "cap {cap} at len {len}");
            assert!(cap >= len);
        }
        for len in (0..300).rev() {
            cap = p.adjust(len, cap);
            assert!(cap.is_power_of_two(), "cap {cap} at len {len}");
            assert!(cap >= len);
        }
    }

    /// Invariant: dropping to a quarter of capacity halves it, bounded by the minimum.
    #[test]
    fn decay_halves_capacity() {
        let p = CapacityPolicy::standard();
        assert_eq!(p.adjust(16, 64), 32);
        assert_eq!(p.adjust(17, 64), 64);
        assert_eq!(p.adjust(0, 8), 8);
        assert_eq!(p.adjust(2, 12), 8);
    }

    /// Invariant: a decay steeper than the truncate threshold still leaves room for `len`.
    #[test]
    fn steep_decay_is_floored_at_len() {
        use GrowTrigger::{AtCapacity, BeyondCapacity};
        use Rounding::{Exact, PowerOfTwo};
        let exact = CapacityPolicy::new(2.0, 0.1, 0.9, 8, AtCapacity, Exact).unwrap();
        assert_eq!(exact.adjust(50, 100), 51);
        assert_eq!(exact.adjust(9, 16), 10);
        let beyond = CapacityPolicy::new(1.5, 0.1, 0.9, 8, BeyondCapacity, Exact).unwrap();
        assert_eq!(beyond.adjust(50, 100), 50);
        let squared = CapacityPolicy::new(2.0, 0.1, 0.9, 8, AtCapacity, PowerOfTwo).unwrap();
        assert_eq!(squared.adjust(9, 16), 16);
        assert_eq!(squared.adjust(50, 128), 64);
        assert_eq!(squared.adjust(2, 64), 8);
    }

    /// Invariant: a buffer under a steep decay never reports fewer slots than elements.
    #[test]
    fn steep_decay_buffer_holds_len() {
        use crate::buffer::GrowableBuffer;
        let policy =
            CapacityPolicy::new(2.0, 0.1, 0.9, 8, GrowTrigger::AtCapacity, Rounding::Exact)
                .unwrap();
        let mut buf = GrowableBuffer::with_policy(policy);
        for i in 0..40 {
            buf.push(i);
            assert!(buf.len() <= buf.capacity(), "len {} cap {}", buf.len(), buf.capacity());
        }
        while buf.pop().is_ok() {
            assert!(buf.len() <= buf.capacity());
        }
        assert_eq!(buf.capacity(), 8);
    }

    /// Invariant: allocate never shrinks and squared allocate rounds up.
    #[test]
    fn allocate_never_shrinks() {
        let p = CapacityPolicy::standard();
        assert_eq!(p.allocate(32, 10), 32);
        assert_eq!(p.allocate(32, 50), 50);
        let s = CapacityPolicy::squared();
        assert_eq!(s.allocate(8, 50), 64);
        assert_eq!(s.allocate(128, 50), 128);
    }

    /// Invariant: malformed factors are rejected with `InvalidArgument`.
    #[test]
    fn new_validates_parameters() {
        use GrowTrigger::AtCapacity;
        use Rounding::{Exact, PowerOfTwo};
        assert!(CapacityPolicy::new(2.0, 0.5, 0.25, 8, AtCapacity, Exact).is_ok());
        for (g, d, t, m, r) in [
            (1.0, 0.5, 0.25, 8, Exact),
            (f64::NAN, 0.5, 0.25, 8, Exact),
            (2.0, 1.0, 0.25, 8, Exact),
            (2.0, 0.5, 0.0, 8, Exact),
            (2.0, 0.5, 1.0, 8, Exact),
            (2.0, 0.5, 0.25, 0, Exact),
            (2.0, 0.5, 0.25, 6, PowerOfTwo),
        ] {
            let res = CapacityPolicy::new(g, d, t, m, AtCapacity, r);
            assert!(
                matches!(res, Err(Error::InvalidArgument { .. })),
                "accepted {g} {d} {t} {m}"
            );
        }
    }
}
