// src/ngram/generator/rolling.rs

// Products go through u128 so any u64 modulus is safe.
#[inline]
fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    ((a as u128 * b as u128) % modulus as u128) as u64
}

#[inline]
fn add_mod(a: u64, b: u64, modulus: u64) -> u64 {
    ((a as u128 + b as u128) % modulus as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: usize, modulus: u64) -> u64 {
    let mut result = 1 % modulus;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exp >>= 1;
    }
    result
}

/// Polynomial hash over a fixed-width window that can slide by one unit.
#[derive(Debug, Clone)]
pub(crate) struct RollingHash {
    base: u64,
    modulus: u64,
    // BASE^(k-1) mod M, weight of the unit leaving the window
    leading_weight: u64,
    value: u64,
}

impl RollingHash {
    pub(crate) fn new(base: u64, modulus: u64, window: usize) -> Self {
        let base = base % modulus;
        Self {
            base,
            modulus,
            leading_weight: pow_mod(base, window.saturating_sub(1), modulus),
            value: 0,
        }
    }

    /// Appends a unit on the right (Horner step).
    pub(crate) fn push(&mut self, unit: u64) {
        let shifted = mul_mod(self.value, self.base, self.modulus);
        self.value = add_mod(shifted, unit % self.modulus, self.modulus);
    }

    /// Drops `outgoing` from the left and appends `incoming` on the right.
    pub(crate) fn roll(&mut self, outgoing: u64, incoming: u64) {
        let leading = mul_mod(outgoing % self.modulus, self.leading_weight, self.modulus);
        self.value = add_mod(self.value, self.modulus - leading, self.modulus);
        self.push(incoming);
    }

    pub(crate) fn value(&self) -> u64 {
        self.value
    }
}
