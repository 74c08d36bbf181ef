use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Mul;

/// A dollar amount, always rendered with two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Money(f64);

impl Money {
    #[must_use]
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.0
    }
}

impl Mul<f64> for Money {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
