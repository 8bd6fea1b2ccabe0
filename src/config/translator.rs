/// Translator configuration constants.
/// Maximum number of evaluation steps for one translation. Every emitted
/// command and every loop iteration costs one step; a program that exceeds
/// the budget is cut off at the commands it already emitted.
pub const STEP_BUDGET: u32 = 10_000;
