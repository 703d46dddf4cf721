pub mod input;
pub mod report;
pub mod session;
