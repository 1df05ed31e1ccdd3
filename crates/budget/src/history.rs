use serde::Deserialize;
use validator::Validate;

/// Top of the expense history chart.
pub const CHART_SCALE: f64 = 120.0;

#[derive(Clone, Debug, PartialEq, Deserialize, Validate)]
pub struct WeekExpense {
    pub week: u32,
    #[validate(custom(function = "plateplan_shared::validate_amount"))]
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub week: u32,
    pub amount: f64,
    pub height_percent: u8,
}

/// Past weekly spending, shown as a static bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseHistory {
    weeks: Vec<WeekExpense>,
}

impl ExpenseHistory {
    pub fn new(weeks: Vec<WeekExpense>) -> Self {
        Self { weeks }
    }

    pub fn weeks(&self) -> &[WeekExpense] {
        &self.weeks
    }

    /// Bar heights relative to [`CHART_SCALE`], capped at 100%.
    pub fn bars(&self) -> Vec<Bar> {
        self.weeks
            .iter()
            .map(|w| Bar {
                week: w.week,
                amount: w.amount,
                height_percent: (w.amount / CHART_SCALE * 100.0).round().clamp(0.0, 100.0) as u8,
            })
            .collect()
    }

    /// Y-axis labels, top to bottom.
    pub fn axis_labels(&self) -> [f64; 5] {
        [CHART_SCALE, 90.0, 60.0, 30.0, 0.0]
    }
}

impl Default for ExpenseHistory {
    fn default() -> Self {
        Self::new(default_weeks())
    }
}

pub fn default_weeks() -> Vec<WeekExpense> {
    [85.0, 92.0, 78.0, 105.0, 88.0, 95.0, 82.0, 90.0]
        .into_iter()
        .zip(1..)
        .map(|(amount, week)| WeekExpense { week, amount })
        .collect()
}
