// src/models/care_services.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    common::{id::new_id, validation::not_blank},
    db::Entity,
    models::{EntityRef, residents::Resident, staff::StaffMember},
};

// --- 1. Tipos de serviço (o "catálogo") ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefinition {
    pub id: String,
    pub name: String, // Ex: "Daily shower assist"
    pub default_duration_mins: u32,
}

impl ServiceDefinition {
    /// Tipos iniciais usados enquanto o slot `service_defs` nunca foi gravado.
    /// Os ids são gerados a cada cold start, até a primeira escrita.
    pub fn starter_set() -> Vec<ServiceDefinition> {
        vec![
            ServiceDefinition {
                id: new_id(),
                name: "Daily shower assist".to_string(),
                default_duration_mins: 30,
            },
            ServiceDefinition {
                id: new_id(),
                name: "In-home care visit".to_string(),
                default_duration_mins: 60,
            },
        ]
    }
}

impl Entity for ServiceDefinition {
    const STORAGE_KEY: &'static str = "service_defs";

    fn id(&self) -> &str {
        &self.id
    }
}

// --- 2. Registro de serviço prestado (histórico) ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub id: String,
    pub service_id: EntityRef<ServiceDefinition>,
    pub resident_id: EntityRef<Resident>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<EntityRef<StaffMember>>,
    pub date: NaiveDate,
    pub duration_mins: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Entity for ServiceRecord {
    const STORAGE_KEY: &'static str = "service_recs";

    fn id(&self) -> &str {
        &self.id
    }
}

// --- 3. Payloads ---

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewServiceDefinition {
    #[validate(custom(function = "not_blank", message = "Service name and default duration required"))]
    pub name: String,
    #[validate(required(message = "Service name and default duration required"))]
    pub default_duration_mins: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewServiceRecord {
    #[validate(custom(function = "not_blank", message = "Service, resident, and date are required"))]
    pub service_id: String,
    #[validate(custom(function = "not_blank", message = "Service, resident, and date are required"))]
    pub resident_id: String,
    pub staff_id: Option<String>,
    #[validate(required(message = "Service, resident, and date are required"))]
    pub date: Option<NaiveDate>,
    // Vazio: usa a duração padrão do tipo de serviço
    pub duration_mins: Option<u32>,
    pub notes: Option<String>,
}
