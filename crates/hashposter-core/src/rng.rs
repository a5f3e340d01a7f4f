use sha2::{Digest, Sha256};

/// Denominator mapping a `u32` draw onto `[0, 1)`.
const U32_DEN: f64 = 4_294_967_296.0;

/// A 32-bit xorshift generator seeded from arbitrary text.
///
/// The state is never zero: zero is a fixed point of the xorshift step,
/// so a zero seed is replaced by 1.
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
    draws: u64,
}

impl XorShift32 {
    /// Seed from text: SHA-256 of the UTF-8 bytes, first four bytes big-endian.
    pub fn from_seed(seed: &str) -> Self {
        let digest = Sha256::digest(seed.as_bytes());
        let state = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
        Self::from_state(state)
    }

    pub fn from_state(state: u32) -> Self {
        Self {
            state: if state == 0 { 1 } else { state },
            draws: 0,
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        self.draws += 1;
        x
    }

    /// Draw a value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / U32_DEN
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    /// Number of values drawn since seeding.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}
