//! Commission split calculation engine.
//!
//! Implements the flat 50/50 brokerage split and the tiered production-based
//! split schedule. All arithmetic stays in full `Decimal` precision; rounding
//! to whole currency units is a presentation concern and happens only in the
//! console formatter.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::errors::DomainError;

/// Hard input domains. The UI layer constrains sliders to (at most) these
/// ranges via config; the domain rejects anything outside them.
pub const MIN_TRANSACTIONS: u32 = 1;
pub const MAX_TRANSACTIONS: u32 = 50;
pub const MIN_PRICE: Decimal = dec!(100000);
pub const MAX_PRICE: Decimal = dec!(1000000);
pub const MIN_RATE: Decimal = dec!(1.0);
pub const MAX_RATE: Decimal = dec!(6.0);

/// Which split scheme the brokerage applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitScheme {
    /// Fixed 50/50 split, independent of production.
    StandardFlat,
    /// Production-based split: higher transaction counts earn a larger
    /// agent fraction.
    Tiered,
}

impl std::fmt::Display for SplitScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StandardFlat => write!(f, "standard flat"),
            Self::Tiered => write!(f, "tiered"),
        }
    }
}

/// One breakpoint of a tiered split schedule.
///
/// `from` is inclusive: an agent with exactly `from` closed transactions is
/// already in this tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    /// Minimum yearly transaction count for this tier.
    pub from: u32,
    /// Agent's fraction of the commission in this tier (0, 1].
    pub fraction: Decimal,
}

/// Ordered tier table for the production-based split.
///
/// Invariant (loader-enforced): non-empty, first tier starts at 0, thresholds
/// strictly ascending. An empty schedule yields a zero fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct TierSchedule {
    tiers: Vec<Tier>,
}

impl TierSchedule {
    /// Build a schedule from explicit tiers, sorted by threshold.
    pub fn new(mut tiers: Vec<Tier>) -> Self {
        tiers.sort_by_key(|tier| tier.from);
        Self { tiers }
    }

    /// The shipped production schedule: 80/20 up to 9 transactions, then
    /// 85/15, 90/10, and 95/5 at 10, 20, and 30 transactions.
    pub fn standard() -> Self {
        Self::new(vec![
            Tier { from: 0, fraction: dec!(0.80) },
            Tier { from: 10, fraction: dec!(0.85) },
            Tier { from: 20, fraction: dec!(0.90) },
            Tier { from: 30, fraction: dec!(0.95) },
        ])
    }

    /// Agent fraction for a yearly transaction count.
    ///
    /// Boundary counts belong to the higher tier: exactly 10 transactions
    /// pays the 10+ fraction, not the 0-9 one.
    pub fn fraction_for(&self, transactions: u32) -> Decimal {
        self.tiers
            .iter()
            .take_while(|tier| transactions >= tier.from)
            .last()
            .map_or(Decimal::ZERO, |tier| tier.fraction)
    }

    /// The underlying tiers, ascending by threshold.
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }
}

impl Default for TierSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

/// Validated calculator inputs.
///
/// Construction is the validation boundary: every instance is inside the
/// documented domains, so downstream arithmetic is total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculatorInputs {
    transactions: u32,
    average_price: Decimal,
    commission_rate: Decimal,
    scheme: SplitScheme,
}

impl CalculatorInputs {
    /// Validate and build calculator inputs.
    ///
    /// # Errors
    /// `DomainError::ValueOutOfRange` naming the offending field if any
    /// value is outside its domain.
    pub fn new(
        transactions: u32,
        average_price: Decimal,
        commission_rate: Decimal,
        scheme: SplitScheme,
    ) -> Result<Self, DomainError> {
        if !(MIN_TRANSACTIONS..=MAX_TRANSACTIONS).contains(&transactions) {
            return Err(DomainError::ValueOutOfRange {
                field: "transactions",
                value: Decimal::from(transactions),
                min: Decimal::from(MIN_TRANSACTIONS),
                max: Decimal::from(MAX_TRANSACTIONS),
            });
        }
        if average_price < MIN_PRICE || average_price > MAX_PRICE {
            return Err(DomainError::ValueOutOfRange {
                field: "average_price",
                value: average_price,
                min: MIN_PRICE,
                max: MAX_PRICE,
            });
        }
        if commission_rate < MIN_RATE || commission_rate > MAX_RATE {
            return Err(DomainError::ValueOutOfRange {
                field: "commission_rate",
                value: commission_rate,
                min: MIN_RATE,
                max: MAX_RATE,
            });
        }
        Ok(Self {
            transactions,
            average_price,
            commission_rate,
            scheme,
        })
    }

    pub fn transactions(&self) -> u32 {
        self.transactions
    }

    pub fn average_price(&self) -> Decimal {
        self.average_price
    }

    pub fn commission_rate(&self) -> Decimal {
        self.commission_rate
    }

    pub fn scheme(&self) -> SplitScheme {
        self.scheme
    }

    /// Copy with a different transaction count.
    pub fn with_transactions(self, transactions: u32) -> Result<Self, DomainError> {
        Self::new(transactions, self.average_price, self.commission_rate, self.scheme)
    }

    /// Copy with a different average sale price.
    pub fn with_average_price(self, average_price: Decimal) -> Result<Self, DomainError> {
        Self::new(self.transactions, average_price, self.commission_rate, self.scheme)
    }

    /// Copy with a different commission rate.
    pub fn with_commission_rate(self, commission_rate: Decimal) -> Result<Self, DomainError> {
        Self::new(self.transactions, self.average_price, commission_rate, self.scheme)
    }

    /// Copy with a different split scheme. Always valid.
    pub fn with_scheme(self, scheme: SplitScheme) -> Self {
        Self { scheme, ..self }
    }
}

/// Full commission breakdown for one set of inputs.
///
/// `agent_earnings + brokerage_earnings == total_commission` exactly, by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CommissionBreakdown {
    /// Yearly sales volume: transactions * average price.
    pub total_volume: Decimal,
    /// Gross commission on that volume.
    pub total_commission: Decimal,
    /// Agent's fraction of the commission under the selected scheme.
    pub agent_split: Decimal,
    /// Agent's share of the gross commission.
    pub agent_earnings: Decimal,
    /// Brokerage's share of the gross commission.
    pub brokerage_earnings: Decimal,
}

impl CommissionBreakdown {
    /// Agent split expressed as a percentage (e.g. 85 for an 85/15 split).
    pub fn agent_split_percent(&self) -> Decimal {
        self.agent_split * dec!(100)
    }
}

/// Commission calculator parameterized by the brokerage's split terms.
#[derive(Debug, Clone)]
pub struct CommissionCalculator {
    /// Agent fraction under the flat scheme (0.50 for a 50/50 split).
    flat_fraction: Decimal,
    /// Tier table for the production-based scheme.
    schedule: TierSchedule,
}

impl CommissionCalculator {
    /// Creates a calculator with custom split terms.
    pub fn new(flat_fraction: Decimal, schedule: TierSchedule) -> Self {
        Self {
            flat_fraction,
            schedule,
        }
    }

    /// Creates a calculator with the shipped terms: 50/50 flat and the
    /// standard production schedule.
    pub fn standard() -> Self {
        Self {
            flat_fraction: dec!(0.50),
            schedule: TierSchedule::standard(),
        }
    }

    /// Agent fraction for a scheme and transaction count.
    pub fn split_fraction(&self, scheme: SplitScheme, transactions: u32) -> Decimal {
        match scheme {
            SplitScheme::StandardFlat => self.flat_fraction,
            SplitScheme::Tiered => self.schedule.fraction_for(transactions),
        }
    }

    /// Computes the full breakdown for validated inputs.
    ///
    /// Pure and total: validated inputs always produce a defined breakdown.
    pub fn breakdown(&self, inputs: &CalculatorInputs) -> CommissionBreakdown {
        let total_volume = Decimal::from(inputs.transactions()) * inputs.average_price();
        let total_commission = total_volume * inputs.commission_rate() / dec!(100);
        let agent_split = self.split_fraction(inputs.scheme(), inputs.transactions());
        let agent_earnings = total_commission * agent_split;
        let brokerage_earnings = total_commission - agent_earnings;

        CommissionBreakdown {
            total_volume,
            total_commission,
            agent_split,
            agent_earnings,
            brokerage_earnings,
        }
    }
}

impl Default for CommissionCalculator {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(
        transactions: u32,
        price: Decimal,
        rate: Decimal,
        scheme: SplitScheme,
    ) -> CalculatorInputs {
        CalculatorInputs::new(transactions, price, rate, scheme).unwrap()
    }

    #[test]
    fn test_tier_boundaries_belong_to_higher_tier() {
        let schedule = TierSchedule::standard();
        assert_eq!(schedule.fraction_for(9), dec!(0.80));
        assert_eq!(schedule.fraction_for(10), dec!(0.85));
        assert_eq!(schedule.fraction_for(19), dec!(0.85));
        assert_eq!(schedule.fraction_for(20), dec!(0.90));
        assert_eq!(schedule.fraction_for(29), dec!(0.90));
        assert_eq!(schedule.fraction_for(30), dec!(0.95));
        assert_eq!(schedule.fraction_for(50), dec!(0.95));
    }

    #[test]
    fn test_tiered_worked_example() {
        let calc = CommissionCalculator::standard();
        let breakdown = calc.breakdown(&inputs(
            12,
            dec!(350000),
            dec!(3),
            SplitScheme::Tiered,
        ));

        assert_eq!(breakdown.total_volume, dec!(4200000));
        assert_eq!(breakdown.total_commission, dec!(126000));
        assert_eq!(breakdown.agent_split, dec!(0.85));
        assert_eq!(breakdown.agent_earnings, dec!(107100));
        assert_eq!(breakdown.brokerage_earnings, dec!(18900));
    }

    #[test]
    fn test_flat_worked_example() {
        let calc = CommissionCalculator::standard();
        let breakdown = calc.breakdown(&inputs(
            12,
            dec!(350000),
            dec!(3),
            SplitScheme::StandardFlat,
        ));

        assert_eq!(breakdown.agent_split, dec!(0.50));
        assert_eq!(breakdown.agent_earnings, dec!(63000));
        assert_eq!(breakdown.brokerage_earnings, dec!(63000));
    }

    #[test]
    fn test_flat_split_ignores_transaction_count() {
        let calc = CommissionCalculator::standard();
        for count in [1, 10, 30, 50] {
            assert_eq!(
                calc.split_fraction(SplitScheme::StandardFlat, count),
                dec!(0.50)
            );
        }
    }

    #[test]
    fn test_earnings_conserve_commission() {
        let calc = CommissionCalculator::standard();
        let breakdown = calc.breakdown(&inputs(
            37,
            dec!(740000),
            dec!(2.7),
            SplitScheme::Tiered,
        ));
        assert_eq!(
            breakdown.agent_earnings + breakdown.brokerage_earnings,
            breakdown.total_commission
        );
    }

    #[test]
    fn test_rejects_out_of_domain_transactions() {
        let err = CalculatorInputs::new(0, dec!(350000), dec!(3), SplitScheme::Tiered)
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::ValueOutOfRange {
                field: "transactions",
                ..
            }
        ));
        assert!(
            CalculatorInputs::new(51, dec!(350000), dec!(3), SplitScheme::Tiered).is_err()
        );
    }

    #[test]
    fn test_rejects_out_of_domain_price_and_rate() {
        assert!(
            CalculatorInputs::new(12, dec!(99999), dec!(3), SplitScheme::Tiered).is_err()
        );
        assert!(
            CalculatorInputs::new(12, dec!(350000), dec!(0.5), SplitScheme::Tiered)
                .is_err()
        );
        assert!(
            CalculatorInputs::new(12, dec!(350000), dec!(6.1), SplitScheme::Tiered)
                .is_err()
        );
    }

    #[test]
    fn test_split_percent() {
        let calc = CommissionCalculator::standard();
        let breakdown =
            calc.breakdown(&inputs(25, dec!(500000), dec!(3), SplitScheme::Tiered));
        assert_eq!(breakdown.agent_split_percent(), dec!(90.00));
    }
}
