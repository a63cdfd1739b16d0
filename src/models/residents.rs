// src/models/residents.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{common::validation::not_blank, db::Entity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub care_plan: String,
    pub medication: String,

    // Campos opcionais da ficha (ainda sem formulário próprio)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<String>,
}

impl Entity for Resident {
    const STORAGE_KEY: &'static str = "residents";

    fn id(&self) -> &str {
        &self.id
    }
}

// Payload do formulário de cadastro
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewResident {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    pub age: Option<u32>, // vazio vira 0
    #[serde(default)]
    pub care_plan: String,
    #[serde(default)]
    pub medication: String,
    pub family_contact: Option<String>,
    pub accessibility: Option<String>,
}
