// src/models/dashboard.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

// Placeholders usados quando uma referência fraca não resolve.
pub const UNKNOWN_STAFF: &str = "Unknown Staff";
pub const UNKNOWN_RESIDENT: &str = "Unknown Resident";
pub const SERVICE_PLACEHOLDER: &str = "Service";
pub const RESIDENT_PLACEHOLDER: &str = "Resident";
pub const STAFF_PLACEHOLDER: &str = "Staff";
pub const OCCUPIED_PLACEHOLDER: &str = "Occupied";
pub const NO_CARE_PLAN: &str = "No care plan";

// Quantas linhas cada painel mostra
pub const RECENT_RESIDENTS: usize = 5;
pub const RECENT_ASSIGNMENTS: usize = 5;
pub const RECENT_SERVICES: usize = 3;
pub const RECENT_INVOICES: usize = 3;
pub const OCCUPIED_ROOM_LINES: usize = 3;
pub const LOW_STOCK_LINES: usize = 3;

// 1. Visão geral da tela inicial
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub counts: CollectionCounts,
    pub recent_residents: Vec<ResidentLine>,
    pub recent_assignments: Vec<AssignmentLine>,
    pub recent_services: Vec<ServiceLine>,
    pub facilities: FacilitiesOverview,
    pub inventory: InventoryOverview,
    pub billing: BillingOverview,
}

// 2. Os cards do topo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCounts {
    pub residents: usize,
    pub staff: usize,
    pub assignments: usize,
    pub service_types: usize,
    pub rooms: usize,
    pub inventory_items: usize,
    pub invoices: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentLine {
    pub resident_id: String,
    pub name: String,
    pub age: u32,
    pub care_plan: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentLine {
    pub assignment_id: String,
    pub staff_name: String,
    pub resident_name: String,
    pub shift: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLine {
    pub record_id: String,
    pub service_name: String,
    pub resident_name: String,
    pub staff_name: Option<String>, // Só quando o registro tem cuidador
    pub date: NaiveDate,
    pub duration_mins: u32,
}

// 3. Quartos
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilitiesOverview {
    pub occupied: usize,
    pub available: usize,
    pub occupied_rooms: Vec<OccupiedRoomLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupiedRoomLine {
    pub room_id: String,
    pub room_name: String,
    pub occupant_name: String,
}

// 4. Estoque
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryOverview {
    pub total_items: usize,
    pub low_stock_count: usize,
    pub low_stock_items: Vec<LowStockLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockLine {
    pub item_id: String,
    pub name: String,
    pub quantity: Decimal,
    pub threshold: Decimal,
}

// 5. Faturamento
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingOverview {
    pub unpaid_total: Decimal,
    pub paid_total: Decimal,
    pub recent_invoices: Vec<InvoiceLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    pub invoice_id: String,
    pub resident_name: String,
    pub description: String,
    pub amount: Decimal,
    pub paid: bool,
}
