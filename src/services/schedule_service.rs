// src/services/schedule_service.rs

use validator::Validate;

use crate::{
    common::{error::AppError, id::new_id},
    db::CollectionRepository,
    models::{
        EntityRef,
        schedule::{NewAssignment, ScheduleItem},
    },
};

#[derive(Debug, Clone, Default)]
pub struct ScheduleService;

impl ScheduleService {
    pub fn new() -> Self {
        Self
    }

    // Os ids não são conferidos contra as coleções: a referência é fraca.
    pub fn assign(
        &self,
        schedule: &mut CollectionRepository<ScheduleItem>,
        payload: NewAssignment,
    ) -> Result<ScheduleItem, AppError> {
        payload.validate()?;

        let item = ScheduleItem {
            id: new_id(),
            staff_id: EntityRef::new(payload.staff_id),
            resident_id: EntityRef::new(payload.resident_id),
            shift: payload.shift.trim().to_string(),
        };

        schedule.insert(item.clone())?;
        tracing::info!(
            assignment_id = %item.id,
            staff_id = %item.staff_id,
            resident_id = %item.resident_id,
            "Escala criada"
        );
        Ok(item)
    }

    pub fn remove(
        &self,
        schedule: &mut CollectionRepository<ScheduleItem>,
        assignment_id: &str,
    ) -> Result<bool, AppError> {
        let removed = schedule.remove(assignment_id)?;
        tracing::info!(assignment_id, removed, "Escala excluída");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStorage;
    use std::sync::Arc;

    #[test]
    fn all_three_fields_are_required() {
        let mut schedule = CollectionRepository::open(Arc::new(MemoryStorage::new())).unwrap();
        let service = ScheduleService::new();

        let err = service
            .assign(
                &mut schedule,
                NewAssignment {
                    staff_id: "s1".into(),
                    resident_id: "r1".into(),
                    shift: " ".into(),
                },
            )
            .unwrap_err();
        assert_eq!(
            err.validation_messages(),
            vec!["Choose staff, resident, and enter a shift".to_string()]
        );

        let item = service
            .assign(
                &mut schedule,
                NewAssignment {
                    staff_id: "s1".into(),
                    resident_id: "r1".into(),
                    shift: "Mon 08:00-16:00".into(),
                },
            )
            .unwrap();
        assert_eq!(item.resident_id.id(), "r1");
        assert_eq!(schedule.len(), 1);
    }
}
