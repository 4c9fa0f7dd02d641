//! Scripted scenarios
//!
//! A scenario is a JSON array of steps, for example:
//!
//! ```json
//! [
//!   { "op": "register", "principal": "STUSER1" },
//!   { "op": "advance", "blocks": 144 },
//!   { "op": "claim", "principal": "STUSER1" }
//! ]
//! ```
//!
//! Steps run in order against a single registry. Every step produces a
//! report, including steps whose call was rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use core_kernel::{BlockHeight, Principal};
use domain_ubi::{CallOutcome, ClaimRegistry};

use crate::error::SimError;

/// A single scripted action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Register { principal: Principal },
    CanClaim { principal: Principal },
    Claim { principal: Principal },
    IsAdmin { principal: Principal },
    Advance { blocks: u64 },
    SetBlock { height: BlockHeight },
    SetPaused { paused: bool },
}

/// The result of running one step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    pub step: Step,
    /// Block height when the step started
    pub height: BlockHeight,
    pub outcome: CallOutcome<Value>,
}

/// An ordered list of steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scenario {
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Register, claim after one interval, claim too early, then claim while paused
    pub fn reference() -> Self {
        let user = Principal::from("STUSER1");
        Self::new(vec![
            Step::Register {
                principal: user.clone(),
            },
            Step::SetBlock {
                height: BlockHeight::new(1144),
            },
            Step::Claim {
                principal: user.clone(),
            },
            Step::SetBlock {
                height: BlockHeight::new(1200),
            },
            Step::Claim {
                principal: user.clone(),
            },
            Step::SetPaused { paused: true },
            Step::SetBlock {
                height: BlockHeight::new(1288),
            },
            Step::Claim { principal: user },
        ])
    }

    /// Parses a scenario from JSON text
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a scenario file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Runs every step in order and reports each one
    pub fn run(&self, registry: &mut ClaimRegistry) -> Vec<StepReport> {
        info!(
            steps = self.steps.len(),
            start = %registry.current_block(),
            "Running scenario"
        );
        self.steps
            .iter()
            .map(|step| {
                let height = registry.current_block();
                let outcome = apply(registry, step);
                debug!(?step, %height, ?outcome, "Step finished");
                StepReport {
                    step: step.clone(),
                    height,
                    outcome,
                }
            })
            .collect()
    }
}

fn apply(registry: &mut ClaimRegistry, step: &Step) -> CallOutcome<Value> {
    match step {
        Step::Register { principal } => {
            CallOutcome::from(registry.register(principal)).map(Value::from)
        }
        Step::CanClaim { principal } => {
            CallOutcome::from(registry.can_claim(principal)).map(Value::from)
        }
        Step::Claim { principal } => CallOutcome::from(registry.claim(principal)).map(Value::from),
        Step::IsAdmin { principal } => {
            CallOutcome::Value(Value::from(registry.is_admin(principal)))
        }
        Step::Advance { blocks } => {
            registry.advance_blocks(*blocks);
            CallOutcome::Value(Value::Bool(true))
        }
        Step::SetBlock { height } => {
            registry.set_current_block(*height);
            CallOutcome::Value(Value::Bool(true))
        }
        Step::SetPaused { paused } => {
            registry.set_paused(*paused);
            CallOutcome::Value(Value::Bool(true))
        }
    }
}
