// src/config.rs

use std::{env, path::PathBuf, sync::Arc};

use crate::{
    common::error::AppError,
    db::{CareCollections, FileStorage, KeyValueStorage},
    services::{
        BillingService, DashboardService, FacilityService, InventoryService, ResidentService,
        ScheduleService, ServiceLogService, StaffService,
        service_log_service::FALLBACK_DURATION_MINS,
    },
};

pub const DEFAULT_DATA_DIR: &str = "./care-data";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub fallback_duration_mins: u32,
}

impl AppConfig {
    // Lê do ambiente (e do .env, se existir).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let data_dir = env::var("CARE_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let fallback_duration_mins = match env::var("CARE_FALLBACK_DURATION_MINS") {
            Ok(raw) => raw.parse()?,
            Err(_) => FALLBACK_DURATION_MINS,
        };

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            fallback_duration_mins,
        })
    }
}

// O estado da aplicação: as coleções e os serviços que operam sobre elas.
pub struct AppState {
    pub config: AppConfig,
    pub collections: CareCollections,
    pub resident_service: ResidentService,
    pub staff_service: StaffService,
    pub schedule_service: ScheduleService,
    pub service_log_service: ServiceLogService,
    pub facility_service: FacilityService,
    pub inventory_service: InventoryService,
    pub billing_service: BillingService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;

        let storage = FileStorage::open(&config.data_dir)?;
        tracing::info!(dir = %storage.dir().display(), "✅ Armazenamento aberto");

        Ok(Self::with_storage(config, Arc::new(storage))?)
    }

    // --- Monta o gráfico de dependências ---
    pub fn with_storage(
        config: AppConfig,
        storage: Arc<dyn KeyValueStorage>,
    ) -> Result<Self, AppError> {
        let collections = CareCollections::open(storage)?;
        let service_log_service = ServiceLogService::new(config.fallback_duration_mins);

        Ok(Self {
            config,
            collections,
            resident_service: ResidentService::new(),
            staff_service: StaffService::new(),
            schedule_service: ScheduleService::new(),
            service_log_service,
            facility_service: FacilityService::new(),
            inventory_service: InventoryService::new(),
            billing_service: BillingService::new(),
            dashboard_service: DashboardService::new(),
        })
    }
}
