// src/services/resident_service.rs

use validator::Validate;

use crate::{
    common::{error::AppError, id::new_id, validation::optional_text},
    db::CollectionRepository,
    models::residents::{NewResident, Resident},
};

#[derive(Debug, Clone, Default)]
pub struct ResidentService;

impl ResidentService {
    pub fn new() -> Self {
        Self
    }

    pub fn add(
        &self,
        residents: &mut CollectionRepository<Resident>,
        payload: NewResident,
    ) -> Result<Resident, AppError> {
        payload.validate()?;

        let resident = Resident {
            id: new_id(),
            name: payload.name.trim().to_string(),
            age: payload.age.unwrap_or(0),
            care_plan: payload.care_plan.trim().to_string(),
            medication: payload.medication.trim().to_string(),
            family_contact: optional_text(payload.family_contact),
            accessibility: optional_text(payload.accessibility),
        };

        residents.insert(resident.clone())?;
        tracing::info!(resident_id = %resident.id, "Residente cadastrado");
        Ok(resident)
    }

    // Escalas, registros, quartos e faturas que apontam para ele continuam lá.
    pub fn remove(
        &self,
        residents: &mut CollectionRepository<Resident>,
        resident_id: &str,
    ) -> Result<bool, AppError> {
        let removed = residents.remove(resident_id)?;
        tracing::info!(resident_id, removed, "Residente excluído");
        Ok(removed)
    }

    /// Busca por nome, sem diferenciar maiúsculas.
    pub fn search<'a>(
        &self,
        residents: &'a CollectionRepository<Resident>,
        query: &str,
    ) -> Vec<&'a Resident> {
        let query = query.to_lowercase();
        residents
            .all()
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&query))
            .collect()
    }
}
