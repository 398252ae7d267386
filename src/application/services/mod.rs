//! Application services - Wiring and orchestration

pub mod scenario_service;

pub use scenario_service::ScenarioService;
