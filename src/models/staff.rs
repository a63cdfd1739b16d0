// src/models/staff.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{common::validation::not_blank, db::Entity};

pub const DEFAULT_AVAILABILITY: &str = "Full-time";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub availability: String, // Ex: "Full-time", "Part-time", "On-call"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<String>,
}

impl Entity for StaffMember {
    const STORAGE_KEY: &'static str = "staff";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewStaffMember {
    #[validate(custom(function = "not_blank", message = "Name and Role are required"))]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "Name and Role are required"))]
    pub role: String,
    pub availability: Option<String>,
    pub qualifications: Option<String>,
}
