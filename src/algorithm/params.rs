/// Tuning parameters for the DMY recursion driver.
///
/// The pivot threshold is `max(1, ceil(|F|^a * ln(|F|+1)^b))` with
/// `a = pivot_size_exponent` and `b = pivot_log_exponent`. The defaults
/// embody the `m log^(2/3) n` work target; the exponents are exposed
/// because their exact values are tuning knobs, not proven constants.
#[derive(Debug, Clone, Copy)]
pub struct DmyParams {
    /// Exponent on `|F|` in the pivot threshold.
    pub pivot_size_exponent: f64,

    /// Exponent on `ln(|F|+1)` in the pivot threshold.
    pub pivot_log_exponent: f64,

    /// Relaxation budget per frontier vertex for pivot propagation.
    pub budget_factor: u64,

    /// Bounded sub-problems at or below this size run a direct bounded
    /// search instead of recursing further.
    pub base_case_cutoff: usize,

    /// Overrides the starting budget of every bounded search. Exhausted
    /// searches are retried with doubled budgets, so a small value forces
    /// the retry path; `None` uses the computed budgets.
    pub initial_budget: Option<u64>,
}

impl Default for DmyParams {
    fn default() -> Self {
        DmyParams {
            pivot_size_exponent: 1.0 / 3.0,
            pivot_log_exponent: 2.0 / 3.0,
            budget_factor: 8,
            base_case_cutoff: 4,
            initial_budget: None,
        }
    }
}
