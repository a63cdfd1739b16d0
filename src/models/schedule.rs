// src/models/schedule.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    common::validation::not_blank,
    db::Entity,
    models::{EntityRef, residents::Resident, staff::StaffMember},
};

// Par cuidador → residente num turno. As referências podem ficar pendentes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub id: String,
    pub staff_id: EntityRef<StaffMember>,
    pub resident_id: EntityRef<Resident>,
    pub shift: String, // Texto livre, ex: "Mon 08:00-16:00"
}

impl Entity for ScheduleItem {
    const STORAGE_KEY: &'static str = "schedule";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignment {
    #[validate(custom(function = "not_blank", message = "Choose staff, resident, and enter a shift"))]
    pub staff_id: String,
    #[validate(custom(function = "not_blank", message = "Choose staff, resident, and enter a shift"))]
    pub resident_id: String,
    #[validate(custom(function = "not_blank", message = "Choose staff, resident, and enter a shift"))]
    pub shift: String,
}
