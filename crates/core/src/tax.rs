//! Tax rate as basis points.

use serde::{Deserialize, Serialize};

/// A tax rate in basis points (1 bp = 0.01%), so 1800 bps = 18%.
///
/// Basis points keep rate arithmetic in integers; the rate only meets cents
/// inside [`crate::Money::apply_rate_half_up`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(u32);

impl TaxRate {
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    pub const fn bps(&self) -> u32 {
        self.0
    }

    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl core::fmt::Display for TaxRate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "{}%", self.0 / 100)
        } else {
            write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
        }
    }
}
