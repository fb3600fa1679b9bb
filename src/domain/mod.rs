// Domain layer - Dashboard document model
pub mod dashboard;
pub mod panel;
pub mod templating;
