pub mod aggregate;
pub mod batch;
pub mod classify;
pub mod feedback;
pub mod report;
pub mod similarity;
pub mod viseme;
