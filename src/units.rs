use crate::time::{Delta, Time};

macro_rules! unit {
    ($name: ident) => {
        #[derive(
            Debug,
            Default,
            Copy,
            Clone,
            PartialOrd,
            Ord,
            PartialEq,
            Eq,
            Hash,
            derive_more::Add,
            derive_more::Sub,
            derive_more::AddAssign,
            derive_more::SubAssign,
            derive_more::Sum,
            derive_more::Display,
            derive_more::FromStr,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name(u64);

        impl $name {
            pub const ZERO: $name = Self::new(0);
            pub const ONE: $name = Self::new(1);
            pub const MAX: $name = Self::new(u64::MAX);

            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            pub const fn into_u64(self) -> u64 {
                self.0
            }

            pub const fn into_f64(self) -> f64 {
                self.0 as f64
            }
        }
    };
}

unit!(Millisecs);
unit!(Secs);

impl Millisecs {
    pub fn into_time(self) -> Time {
        Time::new(u128::from(self.0))
    }

    pub fn into_delta(self) -> Delta {
        Delta::new(u128::from(self.0))
    }
}

impl Secs {
    pub const fn into_ms(self) -> Millisecs {
        Millisecs::new(self.0 * 1_000)
    }

    pub fn into_time(self) -> Time {
        self.into_ms().into_time()
    }

    pub fn into_delta(self) -> Delta {
        self.into_ms().into_delta()
    }
}

impl From<Millisecs> for Time {
    fn from(ms: Millisecs) -> Self {
        ms.into_time()
    }
}

impl From<Secs> for Time {
    fn from(s: Secs) -> Self {
        s.into_time()
    }
}

unit!(Liters);
unit!(LitersPerSec);

impl LitersPerSec {
    /// Computes how long transferring `amount` takes at this speed.
    pub fn length(&self, amount: Liters) -> Millisecs {
        assert!(*self != LitersPerSec::ZERO);
        if amount == Liters::ZERO {
            return Millisecs::ZERO;
        }
        let liters = amount.into_f64();
        let lps = self.into_f64();
        let delta = (liters * 1e3) / lps;
        let delta = delta.round() as u64;
        Millisecs::new(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_length() {
        let speed = LitersPerSec::new(2);
        let amount = Liters::new(45);
        assert_eq!(speed.length(amount), Millisecs::new(22_500));
    }

    #[test]
    fn transfer_length_empty() {
        let speed = LitersPerSec::new(2);
        assert_eq!(speed.length(Liters::ZERO), Millisecs::ZERO);
    }
}
