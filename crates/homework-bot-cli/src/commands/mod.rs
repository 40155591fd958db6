pub mod check;
pub mod run;
pub mod send;
pub mod verdicts;
