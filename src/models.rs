pub mod reference;
pub use reference::EntityRef;
pub mod residents;
pub mod staff;
pub mod schedule;
pub mod care_services;
pub mod facilities;
pub mod inventory;
pub mod billing;
pub mod dashboard;
