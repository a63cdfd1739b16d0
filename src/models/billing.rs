// src/models/billing.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    common::validation::not_blank,
    db::Entity,
    models::{EntityRef, residents::Resident},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub resident_id: EntityRef<Resident>,
    pub description: String,
    pub amount: Decimal,
    pub paid: bool,
    pub date: NaiveDate,
}

impl Entity for Invoice {
    const STORAGE_KEY: &'static str = "invoices";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewInvoice {
    #[validate(custom(function = "not_blank", message = "Resident, description, amount, and date are required"))]
    pub resident_id: String,
    #[validate(custom(function = "not_blank", message = "Resident, description, amount, and date are required"))]
    pub description: String,
    #[validate(required(message = "Resident, description, amount, and date are required"))]
    pub amount: Option<Decimal>,
    #[validate(required(message = "Resident, description, amount, and date are required"))]
    pub date: Option<NaiveDate>,
}

// Totais da tela de faturamento
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingTotals {
    pub unpaid: Decimal, // Em aberto
    pub paid: Decimal,   // Quitado
}
