pub mod benchmark_result;
pub mod costs;
pub mod report;
pub mod run_data;
pub mod system_kind;
pub mod system_run;
