// src/models/facilities.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    common::validation::not_blank,
    db::Entity,
    models::{EntityRef, residents::Resident},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String, // Ex: "Room 101"
    pub capacity: u32,
    // No máximo um ocupante por quarto
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupant_resident_id: Option<EntityRef<Resident>>,
}

impl Room {
    pub fn is_occupied(&self) -> bool {
        self.occupant_resident_id.is_some()
    }
}

impl Entity for Room {
    const STORAGE_KEY: &'static str = "rooms";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    #[validate(custom(function = "not_blank", message = "Room name and capacity required"))]
    pub name: String,
    #[validate(required(message = "Room name and capacity required"))]
    pub capacity: Option<u32>,
}
