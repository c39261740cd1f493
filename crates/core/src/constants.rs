use rust_decimal::Decimal;

/// Default length of a processing cycle, in blocks
pub const DEFAULT_EPOCH_BLOCKS: u32 = 1;

/// Upper bound on the aggregate rate drawn from one source at any instant
pub const MAX_TOTAL_RATE: Decimal = Decimal::ONE;

/// Maximum number of characters in a budget name
pub const MAX_BUDGET_NAME_LENGTH: usize = 50;

/// Store key of the epoch length parameter
pub const PARAM_KEY_EPOCH_BLOCKS: &str = "EpochBlocks";

/// Store key of the budget set parameter
pub const PARAM_KEY_BUDGETS: &str = "Budgets";
