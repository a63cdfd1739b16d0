// src/services/staff_service.rs

use validator::Validate;

use crate::{
    common::{error::AppError, id::new_id, validation::optional_text},
    db::CollectionRepository,
    models::staff::{DEFAULT_AVAILABILITY, NewStaffMember, StaffMember},
};

#[derive(Debug, Clone, Default)]
pub struct StaffService;

impl StaffService {
    pub fn new() -> Self {
        Self
    }

    pub fn add(
        &self,
        staff: &mut CollectionRepository<StaffMember>,
        payload: NewStaffMember,
    ) -> Result<StaffMember, AppError> {
        payload.validate()?;

        let member = StaffMember {
            id: new_id(),
            name: payload.name.trim().to_string(),
            role: payload.role.trim().to_string(),
            availability: optional_text(payload.availability)
                .unwrap_or_else(|| DEFAULT_AVAILABILITY.to_string()),
            qualifications: optional_text(payload.qualifications),
        };

        staff.insert(member.clone())?;
        tracing::info!(staff_id = %member.id, role = %member.role, "Colaborador cadastrado");
        Ok(member)
    }

    pub fn remove(
        &self,
        staff: &mut CollectionRepository<StaffMember>,
        staff_id: &str,
    ) -> Result<bool, AppError> {
        let removed = staff.remove(staff_id)?;
        tracing::info!(staff_id, removed, "Colaborador excluído");
        Ok(removed)
    }

    pub fn search<'a>(
        &self,
        staff: &'a CollectionRepository<StaffMember>,
        query: &str,
    ) -> Vec<&'a StaffMember> {
        let query = query.to_lowercase();
        staff
            .all()
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStorage;
    use std::sync::Arc;

    #[test]
    fn availability_defaults_to_full_time() {
        let mut staff = CollectionRepository::open(Arc::new(MemoryStorage::new())).unwrap();
        let member = StaffService::new()
            .add(
                &mut staff,
                NewStaffMember {
                    name: "João".into(),
                    role: " Nurse ".into(),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(member.availability, "Full-time");
        assert_eq!(member.role, "Nurse");
    }

    #[test]
    fn name_and_role_are_required() {
        let mut staff = CollectionRepository::open(Arc::new(MemoryStorage::new())).unwrap();
        let err = StaffService::new()
            .add(&mut staff, NewStaffMember { name: "Ana".into(), ..Default::default() })
            .unwrap_err();

        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(err.validation_messages(), vec!["Name and Role are required".to_string()]);
        assert!(staff.is_empty());
    }
}
