pub mod plot;
pub mod report;
pub mod run;
pub mod stats;
