// src/services/dashboard_service.rs

use crate::{
    db::CareCollections,
    models::{
        billing::Invoice,
        dashboard::*,
        inventory::InventoryItem,
    },
    services::{
        Memo,
        aggregator::{build_lookup, count_where, recent, resolve, summarize},
    },
};

/// Tela inicial: contagens, itens recentes e resumos por área.
///
/// O snapshot só é recalculado quando alguma coleção mudou de revisão.
#[derive(Debug, Default)]
pub struct DashboardService {
    snapshot: Memo<DashboardSnapshot>,
}

impl DashboardService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&mut self, collections: &CareCollections) -> &DashboardSnapshot {
        let revisions = collections.revisions();
        self.snapshot
            .get_or_compute(&revisions, || build_snapshot(collections))
    }
}

/// Versão pura (sem cache) do snapshot.
pub fn build_snapshot(collections: &CareCollections) -> DashboardSnapshot {
    let residents = collections.residents.all();
    let staff = collections.staff.all();
    let schedule = collections.schedule.all();
    let service_defs = collections.service_defs.all();
    let service_recs = collections.service_recs.all();
    let rooms = collections.rooms.all();
    let inventory = collections.inventory.all();
    let invoices = collections.invoices.all();

    // Mapas de lookup
    let staff_by_id = build_lookup(staff, |s| s.id.as_str());
    let residents_by_id = build_lookup(residents, |r| r.id.as_str());
    let services_by_id = build_lookup(service_defs, |d| d.id.as_str());

    let counts = CollectionCounts {
        residents: residents.len(),
        staff: staff.len(),
        assignments: schedule.len(),
        service_types: service_defs.len(),
        rooms: rooms.len(),
        inventory_items: inventory.len(),
        invoices: invoices.len(),
    };

    let recent_residents = recent(residents, RECENT_RESIDENTS)
        .iter()
        .map(|r| ResidentLine {
            resident_id: r.id.clone(),
            name: r.name.clone(),
            age: r.age,
            care_plan: if r.care_plan.is_empty() {
                NO_CARE_PLAN.to_string()
            } else {
                r.care_plan.clone()
            },
        })
        .collect();

    let recent_assignments = recent(schedule, RECENT_ASSIGNMENTS)
        .iter()
        .map(|a| AssignmentLine {
            assignment_id: a.id.clone(),
            staff_name: resolve(&staff_by_id, a.staff_id.id(), UNKNOWN_STAFF)
                .label(|s| s.name.as_str())
                .to_string(),
            resident_name: resolve(&residents_by_id, a.resident_id.id(), UNKNOWN_RESIDENT)
                .label(|r| r.name.as_str())
                .to_string(),
            shift: a.shift.clone(),
        })
        .collect();

    let recent_services = recent(service_recs, RECENT_SERVICES)
        .iter()
        .map(|sv| ServiceLine {
            record_id: sv.id.clone(),
            service_name: resolve(&services_by_id, sv.service_id.id(), SERVICE_PLACEHOLDER)
                .label(|d| d.name.as_str())
                .to_string(),
            resident_name: resolve(&residents_by_id, sv.resident_id.id(), RESIDENT_PLACEHOLDER)
                .label(|r| r.name.as_str())
                .to_string(),
            staff_name: sv.staff_id.as_ref().map(|staff_ref| {
                resolve(&staff_by_id, staff_ref.id(), STAFF_PLACEHOLDER)
                    .label(|s| s.name.as_str())
                    .to_string()
            }),
            date: sv.date,
            duration_mins: sv.duration_mins,
        })
        .collect();

    // Quartos
    let occupied = count_where(rooms, |r| r.is_occupied());
    let occupied_rooms = rooms
        .iter()
        .filter_map(|room| room.occupant_resident_id.as_ref().map(|occupant| (room, occupant)))
        .take(OCCUPIED_ROOM_LINES)
        .map(|(room, occupant)| OccupiedRoomLine {
            room_id: room.id.clone(),
            room_name: room.name.clone(),
            occupant_name: resolve(&residents_by_id, occupant.id(), OCCUPIED_PLACEHOLDER)
                .label(|r| r.name.as_str())
                .to_string(),
        })
        .collect();

    // Estoque
    let low_stock_items = inventory
        .iter()
        .filter(|i| i.is_low_stock())
        .take(LOW_STOCK_LINES)
        .map(|i| LowStockLine {
            item_id: i.id.clone(),
            name: i.name.clone(),
            quantity: i.quantity,
            threshold: i.threshold,
        })
        .collect();

    // Faturamento
    let unpaid = summarize(invoices, |i: &Invoice| !i.paid, |i| i.amount);
    let paid = summarize(invoices, |i: &Invoice| i.paid, |i| i.amount);
    let recent_invoices = recent(invoices, RECENT_INVOICES)
        .iter()
        .map(|inv| InvoiceLine {
            invoice_id: inv.id.clone(),
            resident_name: resolve(&residents_by_id, inv.resident_id.id(), RESIDENT_PLACEHOLDER)
                .label(|r| r.name.as_str())
                .to_string(),
            description: inv.description.clone(),
            amount: inv.amount,
            paid: inv.paid,
        })
        .collect();

    DashboardSnapshot {
        counts,
        recent_residents,
        recent_assignments,
        recent_services,
        facilities: FacilitiesOverview {
            occupied,
            available: rooms.len() - occupied,
            occupied_rooms,
        },
        inventory: InventoryOverview {
            total_items: inventory.len(),
            low_stock_count: count_where(inventory, InventoryItem::is_low_stock),
            low_stock_items,
        },
        billing: BillingOverview {
            unpaid_total: unpaid.total,
            paid_total: paid.total,
            recent_invoices,
        },
    }
}
