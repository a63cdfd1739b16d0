pub mod aggregator;
pub mod memo;
pub use memo::Memo;

pub mod resident_service;
pub use resident_service::ResidentService;
pub mod staff_service;
pub use staff_service::StaffService;
pub mod schedule_service;
pub use schedule_service::ScheduleService;
pub mod service_log_service;
pub use service_log_service::ServiceLogService;
pub mod facility_service;
pub use facility_service::FacilityService;
pub mod inventory_service;
pub use inventory_service::InventoryService;
pub mod billing_service;
pub use billing_service::BillingService;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
