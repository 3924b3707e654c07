mod run_daily_check;

pub use run_daily_check::{run_daily_check, DailyCheckSummary, RunDailyCheckUseCase};
