use super::money::Price;
use super::options::WashOptions;
use super::phase::Phase;
use serde::{Deserialize, Serialize};

/// One wash requested at the tunnel entrance.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Copy)]
pub struct WashOrder {
    pub order: u32,
    pub prewash: bool,
    pub dry: bool,
    pub wax: bool,
}

impl WashOrder {
    pub fn new(order: u32, options: WashOptions) -> Self {
        Self {
            order,
            prewash: options.prewash_by_hand,
            dry: options.dry_by_hand,
            wax: options.waxed,
        }
    }

    pub fn options(&self) -> WashOptions {
        WashOptions::new(self.prewash, self.dry, self.wax)
    }
}

/// Outcome of one completed wash cycle.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct CycleReport {
    pub order: u32,
    pub options: WashOptions,
    pub price: Price,
    pub phases: Vec<Phase>,
    /// Tunnel revenue right after this cycle.
    pub revenue: Price,
}
