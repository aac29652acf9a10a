pub mod columns;
pub mod report;
