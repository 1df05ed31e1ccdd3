pub const DEFAULT_BUDGET: f64 = 400.0;

/// The amount the user intends to spend, set by hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Budget(f64);

impl Budget {
    pub fn new(amount: f64) -> plateplan_shared::Result<Self> {
        if !amount.is_finite() || amount < 0.0 {
            plateplan_shared::invalid_input!(
                "budget must be a non-negative amount, got {}",
                amount
            );
        }

        Ok(Self(amount))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    pub fn summary(&self, expenses: f64) -> BudgetSummary {
        BudgetSummary::new(self.0, expenses)
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self(DEFAULT_BUDGET)
    }
}

/// Expenses compared against the budget, for display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BudgetSummary {
    pub budget: f64,
    pub expenses: f64,
    pub remaining: f64,
    pub percent_used: u8,
    pub over_budget: bool,
}

impl BudgetSummary {
    pub fn new(budget: f64, expenses: f64) -> Self {
        let percent_used = if budget > 0.0 {
            (expenses / budget * 100.0).round().clamp(0.0, 100.0) as u8
        } else if expenses > 0.0 {
            100
        } else {
            0
        };

        Self {
            budget,
            expenses,
            remaining: budget - expenses,
            percent_used,
            over_budget: expenses > budget,
        }
    }
}
