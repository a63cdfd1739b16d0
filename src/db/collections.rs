// src/db/collections.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::{collection_repo::CollectionRepository, storage::KeyValueStorage},
    models::{
        billing::Invoice,
        care_services::{ServiceDefinition, ServiceRecord},
        facilities::Room,
        inventory::InventoryItem,
        residents::Resident,
        schedule::ScheduleItem,
        staff::StaffMember,
    },
};

/// Uma ligação persistente por coleção. Cada slot tem exatamente um dono:
/// abrir duas vezes a mesma coleção no mesmo processo reproduz o problema
/// de "duas abas" (a última escrita vence).
pub struct CareCollections {
    pub residents: CollectionRepository<Resident>,
    pub staff: CollectionRepository<StaffMember>,
    pub schedule: CollectionRepository<ScheduleItem>,
    pub service_defs: CollectionRepository<ServiceDefinition>,
    pub service_recs: CollectionRepository<ServiceRecord>,
    pub rooms: CollectionRepository<Room>,
    pub inventory: CollectionRepository<InventoryItem>,
    pub invoices: CollectionRepository<Invoice>,
}

impl CareCollections {
    pub fn open(storage: Arc<dyn KeyValueStorage>) -> Result<Self, AppError> {
        let collections = Self {
            residents: CollectionRepository::open(storage.clone())?,
            staff: CollectionRepository::open(storage.clone())?,
            schedule: CollectionRepository::open(storage.clone())?,
            service_defs: CollectionRepository::open_with_default(
                storage.clone(),
                ServiceDefinition::starter_set(),
            )?,
            service_recs: CollectionRepository::open(storage.clone())?,
            rooms: CollectionRepository::open(storage.clone())?,
            inventory: CollectionRepository::open(storage.clone())?,
            invoices: CollectionRepository::open(storage)?,
        };

        tracing::info!(
            residents = collections.residents.len(),
            staff = collections.staff.len(),
            schedule = collections.schedule.len(),
            service_defs = collections.service_defs.len(),
            service_recs = collections.service_recs.len(),
            rooms = collections.rooms.len(),
            inventory = collections.inventory.len(),
            invoices = collections.invoices.len(),
            "Coleções carregadas"
        );
        Ok(collections)
    }

    // Revisões na ordem dos campos; chave de memoização do painel.
    pub fn revisions(&self) -> [u64; 8] {
        [
            self.residents.revision(),
            self.staff.revision(),
            self.schedule.revision(),
            self.service_defs.revision(),
            self.service_recs.revision(),
            self.rooms.revision(),
            self.inventory.revision(),
            self.invoices.revision(),
        ]
    }
}
