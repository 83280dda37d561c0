use super::money::Price;
use crate::error::{Result, WashError};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

pub const BASE_PRICE: Price = Price(dec!(5.00));
pub const HAND_PREWASH_PRICE: Price = Price(dec!(1.50));
pub const HAND_DRYING_PRICE: Price = Price(dec!(1.00));
pub const WAXING_PRICE: Price = Price(dec!(1.20));

/// The extras a customer picks for one wash cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WashOptions {
    pub prewash_by_hand: bool,
    pub dry_by_hand: bool,
    pub waxed: bool,
}

impl WashOptions {
    pub fn new(prewash_by_hand: bool, dry_by_hand: bool, waxed: bool) -> Self {
        Self {
            prewash_by_hand,
            dry_by_hand,
            waxed,
        }
    }

    /// Wax is applied by hand after hand-drying, so it cannot be ordered alone.
    pub fn validate(&self) -> Result<()> {
        if self.waxed && !self.dry_by_hand {
            return Err(WashError::InvalidOption);
        }
        Ok(())
    }

    pub fn price(&self) -> Price {
        let mut price = BASE_PRICE;
        if self.prewash_by_hand {
            price += HAND_PREWASH_PRICE;
        }
        if self.dry_by_hand {
            price += HAND_DRYING_PRICE;
        }
        if self.waxed {
            price += WAXING_PRICE;
        }
        price
    }
}
