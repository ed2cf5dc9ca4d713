//! Execution network task records

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle of a task on the execution network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    Executed,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskType {
    Call,
    Transfer,
}

/// Task as reported by the execution network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: String,
    pub task_type: TaskType,
    pub status: TaskStatus,
    pub payload: String,
    pub description: String,
    pub executor: Option<String>,
    pub attestor_signature: Option<String>,
    pub url: Option<String>,
    pub tx_hash: Option<String>,
    pub block_number: Option<u64>,
    pub created_at: u64,
    pub updated_at: u64,
}

impl Task {
    /// Executed and expired tasks never change again
    pub fn is_final(&self) -> bool {
        self.status != TaskStatus::Pending
    }
}

/// Authorization scheme used to pull the user's payment token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermitType {
    Eip3009,
    Permit,
    Permit2,
}

impl PermitType {
    /// Wire id used by the execution core contract
    pub fn as_u8(self) -> u8 {
        match self {
            PermitType::Eip3009 => 0,
            PermitType::Permit => 1,
            PermitType::Permit2 => 2,
        }
    }

    pub fn from_u8(id: u8) -> Result<Self, ValidationError> {
        match id {
            0 => Ok(PermitType::Eip3009),
            1 => Ok(PermitType::Permit),
            2 => Ok(PermitType::Permit2),
            other => Err(ValidationError::UnknownPermitTypeId(other)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PermitType::Eip3009 => "eip3009",
            PermitType::Permit => "permit",
            PermitType::Permit2 => "permit2",
        }
    }
}

impl FromStr for PermitType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eip3009" => Ok(PermitType::Eip3009),
            "permit" => Ok(PermitType::Permit),
            "permit2" => Ok(PermitType::Permit2),
            other => Err(ValidationError::UnknownPermitType(other.to_string())),
        }
    }
}

impl fmt::Display for PermitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permit_type_wire_ids() {
        for permit in [PermitType::Eip3009, PermitType::Permit, PermitType::Permit2] {
            assert_eq!(PermitType::from_u8(permit.as_u8()).unwrap(), permit);
            assert_eq!(permit.as_str().parse::<PermitType>().unwrap(), permit);
        }
        assert_eq!(PermitType::Permit2.as_u8(), 2);
    }

    #[test]
    fn test_unknown_permit_type_rejected() {
        assert_eq!(
            "permit3".parse::<PermitType>(),
            Err(ValidationError::UnknownPermitType("permit3".to_string()))
        );
        assert!(PermitType::from_u8(3).is_err());
    }

    #[test]
    fn test_task_from_network_json() {
        let json = r#"{
            "attestor_signature": null,
            "created_at": 1730000000,
            "description": "Refuel 10 USDC",
            "executor": "0x00000000000000000000000000000000000000aa",
            "payload": "0x1234",
            "status": "Executed",
            "task_id": "task-1",
            "task_type": "Call",
            "updated_at": 1730000100,
            "url": null,
            "tx_hash": "0xabc",
            "block_number": 123
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, TaskStatus::Executed);
        assert_eq!(task.task_type, TaskType::Call);
        assert_eq!(task.block_number, Some(123));
        assert!(task.is_final());
    }
}
