use crate::domain::money::Money;
use crate::error::{CheckoutError, Result};
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

/// An installment plan offered by a financing provider, fetched read-only
/// from the backend catalog.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct EmiOption {
    pub provider: String,
    pub periods: u32,
    pub annual_rate_percent: Decimal,
    #[serde(default)]
    pub processing_fee: Money,
    pub minimum_amount: Money,
    pub maximum_amount: Money,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

impl EmiOption {
    /// True iff the option is live and the order amount falls inside the
    /// provider's eligible range (both bounds inclusive).
    pub fn is_eligible(&self, order_amount: Money) -> bool {
        self.is_available
            && order_amount >= self.minimum_amount
            && order_amount <= self.maximum_amount
    }

    /// Full amortization schedule for this option at the given order amount.
    pub fn quote(&self, order_amount: Money) -> Result<AmortizationSchedule> {
        generate_schedule(
            order_amount,
            self.annual_rate_percent,
            self.periods,
            self.processing_fee,
        )
    }
}

/// One row of an amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulePeriod {
    pub period: u32,
    pub principal: Money,
    pub interest: Money,
    pub remaining_balance: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub payment: Money,
    pub periods: Vec<SchedulePeriod>,
    pub total_interest: Money,
    pub total_amount: Money,
}

fn validate_terms(principal: Money, annual_rate_percent: Decimal, periods: u32) -> Result<()> {
    if periods == 0 {
        return Err(CheckoutError::Validation(
            "periods must be greater than zero".to_string(),
        ));
    }
    if annual_rate_percent < Decimal::ZERO {
        return Err(CheckoutError::Validation(
            "annual rate must not be negative".to_string(),
        ));
    }
    if principal <= Money::ZERO {
        return Err(CheckoutError::Validation(
            "principal must be positive".to_string(),
        ));
    }
    Ok(())
}

fn monthly_rate(annual_rate_percent: Decimal) -> Decimal {
    annual_rate_percent / Decimal::from(1200)
}

/// Periodic installment payment for a reducing-balance loan.
///
/// Zero-rate plans divide the principal evenly; any rounding remainder is
/// absorbed by the final schedule period, not lost. Non-zero rates use
/// `P * r * (1+r)^n / ((1+r)^n - 1)` with the monthly rate
/// `r = annual / 12 / 100`, rounded half-up to the nearest minor unit.
pub fn calculate_emi(
    principal: Money,
    annual_rate_percent: Decimal,
    periods: u32,
) -> Result<Money> {
    validate_terms(principal, annual_rate_percent, periods)?;

    if annual_rate_percent.is_zero() {
        let even = principal.to_decimal() / Decimal::from(periods);
        return Ok(Money::from_decimal_half_up(even));
    }

    let rate = monthly_rate(annual_rate_percent);
    let growth = (Decimal::ONE + rate).powi(periods as i64);
    let payment = principal.to_decimal() * rate * growth / (growth - Decimal::ONE);
    Ok(Money::from_decimal_half_up(payment))
}

/// Full period-by-period amortization for a reducing-balance loan.
///
/// Per period: `interest = round(balance * r)`, `principal = payment -
/// interest`, balance decreasing. Per-period rounding accumulates drift, so
/// the final period's principal component is forced to whatever balance
/// remains; the balance therefore ends at exactly zero and the principal
/// components sum to the principal exactly.
pub fn generate_schedule(
    principal: Money,
    annual_rate_percent: Decimal,
    periods: u32,
    processing_fee: Money,
) -> Result<AmortizationSchedule> {
    let payment = calculate_emi(principal, annual_rate_percent, periods)?;
    let rate = monthly_rate(annual_rate_percent);

    let mut balance = principal;
    let mut total_interest = Money::ZERO;
    let mut rows = Vec::with_capacity(periods as usize);

    for period in 1..=periods {
        let interest = Money::from_decimal_half_up(balance.to_decimal() * rate);
        let principal_component = if period == periods {
            balance
        } else {
            payment - interest
        };
        balance -= principal_component;
        total_interest += interest;
        rows.push(SchedulePeriod {
            period,
            principal: principal_component,
            interest,
            remaining_balance: balance,
        });
    }

    Ok(AmortizationSchedule {
        payment,
        periods: rows,
        total_interest,
        total_amount: principal + total_interest + processing_fee,
    })
}
