use rust_decimal::Decimal;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Annualized rates expressed in percent (6.5 = 6.5%/year). The engine
/// converts to monthly decimal form internally.
pub type Rate = Decimal;

/// Unit-interval quantities: PD/LGD fractions and discount factors.
pub type Fraction = Decimal;
