use serde::Serialize;
use std::fmt;

/// Yearly billing gives 20% off twelve monthly payments.
const YEARLY_DISCOUNT_PERCENT: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub name: &'static str,
    pub ram: &'static str,
    pub cpu: &'static str,
    pub storage: &'static str,
    /// Monthly price in whole dollars
    pub price: u32,
}

pub const PLANS: &[Plan] = &[
    Plan { name: "Basic",    ram: "2GB", cpu: "1 vCPU", storage: "20GB SSD", price: 5 },
    Plan { name: "Standard", ram: "4GB", cpu: "2 vCPU", storage: "40GB SSD", price: 10 },
    Plan { name: "Premium",  ram: "8GB", cpu: "4 vCPU", storage: "80GB SSD", price: 20 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl Plan {
    /// Price for twelve months with the yearly discount applied, in cents.
    /// Kept in integer cents so `price * 12 * 0.8` never picks up float noise.
    pub fn yearly_cents(&self) -> u64 {
        u64::from(self.price) * 12 * u64::from(100 - YEARLY_DISCOUNT_PERCENT)
    }
}

/// Display price for a plan under the given billing cycle.
///
/// Monthly prices are shown as-is ("10"), yearly prices with two decimals ("96.00").
pub fn display_price(plan: &Plan, cycle: BillingCycle) -> String {
    match cycle {
        BillingCycle::Monthly => plan.price.to_string(),
        BillingCycle::Yearly => {
            let cents = plan.yearly_cents();
            format!("{}.{:02}", cents / 100, cents % 100)
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} RAM, {}, {} - ${}/mo",
            self.name, self.ram, self.cpu, self.storage, self.price
        )
    }
}
