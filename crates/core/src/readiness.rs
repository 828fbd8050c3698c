//! Field-readiness evaluation for employees.
//!
//! An employee is "ready for field" when every item of a fixed checklist
//! holds: a valid driving license, completed training, current medical
//! fitness, and an assigned vehicle. Evaluation is done against pre-loaded
//! data passed in by the caller.

use serde::Serialize;

pub const CHECK_LICENSE: &str = "valid driving license";
pub const CHECK_TRAINING: &str = "training completed";
pub const CHECK_MEDICAL: &str = "medical fitness current";
pub const CHECK_VEHICLE: &str = "vehicle assigned";

/// Overall readiness state, derived from the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessState {
    Ready,
    PartiallyReady,
    NotStarted,
}

/// The per-employee boolean checklist.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ReadinessChecklist {
    pub license_valid: bool,
    pub training_complete: bool,
    pub medically_fit: bool,
    pub vehicle_assigned: bool,
}

impl ReadinessChecklist {
    /// Ready means the conjunction of all checks.
    pub fn is_ready(&self) -> bool {
        self.license_valid && self.training_complete && self.medically_fit && self.vehicle_assigned
    }

    /// Labels of the checks still outstanding, in checklist order.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.license_valid {
            missing.push(CHECK_LICENSE);
        }
        if !self.training_complete {
            missing.push(CHECK_TRAINING);
        }
        if !self.medically_fit {
            missing.push(CHECK_MEDICAL);
        }
        if !self.vehicle_assigned {
            missing.push(CHECK_VEHICLE);
        }
        missing
    }

    pub fn state(&self) -> ReadinessState {
        let satisfied = 4 - self.missing().len();
        match satisfied {
            4 => ReadinessState::Ready,
            0 => ReadinessState::NotStarted,
            _ => ReadinessState::PartiallyReady,
        }
    }
}
