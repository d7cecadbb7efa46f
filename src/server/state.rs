//! Server state management for the plan server

use super::config::PlannerConfig;
use crate::plan::{FixtureDefinition, ScenePlan};
use std::path::PathBuf;

/// In-memory state: the open plan, its file path and the fixture palette
pub struct ServerState {
    pub plan_path: Option<PathBuf>,
    pub plan: ScenePlan,
    pub catalog: Vec<FixtureDefinition>,
    pub config: PlannerConfig,
}

impl ServerState {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            plan_path: None,
            plan: ScenePlan::new(),
            catalog: Vec::new(),
            config,
        }
    }

    /// Start an empty, unsaved plan; the palette is kept
    pub fn reset_plan(&mut self) {
        self.plan_path = None;
        self.plan.clear();
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}
