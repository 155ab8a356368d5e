pub mod calendar;
pub mod dashboard;
pub mod list;
pub mod new;
