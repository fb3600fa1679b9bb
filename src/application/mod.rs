// Application layer - Dashboard assembly
pub mod dashboard_builder;
pub mod dashboard_service;
