// src/services/service_log_service.rs

use validator::Validate;

use crate::{
    common::{error::AppError, id::new_id, validation::optional_text},
    db::CollectionRepository,
    models::{
        EntityRef,
        care_services::{NewServiceDefinition, NewServiceRecord, ServiceDefinition, ServiceRecord},
    },
};

/// Duração usada quando o tipo de serviço não existe mais.
pub const FALLBACK_DURATION_MINS: u32 = 30;

#[derive(Debug, Clone)]
pub struct ServiceLogService {
    fallback_duration_mins: u32,
}

impl Default for ServiceLogService {
    fn default() -> Self {
        Self::new(FALLBACK_DURATION_MINS)
    }
}

impl ServiceLogService {
    pub fn new(fallback_duration_mins: u32) -> Self {
        Self { fallback_duration_mins }
    }

    // =========================================================================
    //  1. TIPOS DE SERVIÇO
    // =========================================================================

    pub fn add_definition(
        &self,
        definitions: &mut CollectionRepository<ServiceDefinition>,
        payload: NewServiceDefinition,
    ) -> Result<ServiceDefinition, AppError> {
        payload.validate()?;
        let Some(default_duration_mins) = payload.default_duration_mins else {
            return Err(AppError::InternalServerError(anyhow::anyhow!(
                "duração padrão ausente após validação"
            )));
        };

        let definition = ServiceDefinition {
            id: new_id(),
            name: payload.name.trim().to_string(),
            default_duration_mins,
        };

        definitions.insert(definition.clone())?;
        tracing::info!(service_id = %definition.id, name = %definition.name, "Tipo de serviço criado");
        Ok(definition)
    }

    /// Remove o tipo E os registros que apontam para ele.
    ///
    /// São duas gravações independentes, sem transação. Residentes e
    /// colaboradores NÃO fazem cascata; só os tipos de serviço fazem.
    pub fn remove_definition(
        &self,
        definitions: &mut CollectionRepository<ServiceDefinition>,
        records: &mut CollectionRepository<ServiceRecord>,
        service_id: &str,
    ) -> Result<usize, AppError> {
        definitions.remove(service_id)?;
        let removed_records = records.retain(|r| r.service_id.id() != service_id)?;

        tracing::info!(service_id, removed_records, "Tipo de serviço excluído");
        Ok(removed_records)
    }

    // =========================================================================
    //  2. REGISTROS (SERVIÇOS PRESTADOS)
    // =========================================================================

    pub fn log_service(
        &self,
        definitions: &CollectionRepository<ServiceDefinition>,
        records: &mut CollectionRepository<ServiceRecord>,
        payload: NewServiceRecord,
    ) -> Result<ServiceRecord, AppError> {
        payload.validate()?;
        let date = payload.date.ok_or_else(|| {
            AppError::InternalServerError(anyhow::anyhow!("data ausente após validação"))
        })?;

        // Duração vazia: padrão do tipo, ou o fallback se o tipo sumiu
        let duration_mins = payload.duration_mins.unwrap_or_else(|| {
            definitions
                .find(&payload.service_id)
                .map(|d| d.default_duration_mins)
                .unwrap_or(self.fallback_duration_mins)
        });

        let record = ServiceRecord {
            id: new_id(),
            service_id: EntityRef::new(payload.service_id),
            resident_id: EntityRef::new(payload.resident_id),
            staff_id: optional_text(payload.staff_id).map(EntityRef::new),
            date,
            duration_mins,
            notes: optional_text(payload.notes),
        };

        records.insert(record.clone())?;
        tracing::info!(record_id = %record.id, service_id = %record.service_id, "Serviço registrado");
        Ok(record)
    }

    pub fn remove_record(
        &self,
        records: &mut CollectionRepository<ServiceRecord>,
        record_id: &str,
    ) -> Result<bool, AppError> {
        let removed = records.remove(record_id)?;
        tracing::info!(record_id, removed, "Registro de serviço excluído");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStorage;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn date() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 1, 1)
    }

    fn record_payload(service_id: &str) -> NewServiceRecord {
        NewServiceRecord {
            service_id: service_id.into(),
            resident_id: "r1".into(),
            date: date(),
            ..Default::default()
        }
    }

    #[test]
    fn duration_falls_back_to_definition_then_constant() {
        let storage = Arc::new(MemoryStorage::new());
        let mut definitions = CollectionRepository::open(storage.clone()).unwrap();
        let mut records = CollectionRepository::open(storage).unwrap();
        let service = ServiceLogService::default();

        let bath = service
            .add_definition(
                &mut definitions,
                NewServiceDefinition { name: "Bath".into(), default_duration_mins: Some(45) },
            )
            .unwrap();

        let from_definition = service
            .log_service(&definitions, &mut records, record_payload(&bath.id))
            .unwrap();
        assert_eq!(from_definition.duration_mins, 45);

        let from_fallback = service
            .log_service(&definitions, &mut records, record_payload("gone"))
            .unwrap();
        assert_eq!(from_fallback.duration_mins, FALLBACK_DURATION_MINS);

        let explicit = service
            .log_service(
                &definitions,
                &mut records,
                NewServiceRecord { duration_mins: Some(10), ..record_payload(&bath.id) },
            )
            .unwrap();
        assert_eq!(explicit.duration_mins, 10);
    }

    #[test]
    fn definition_without_default_duration_is_rejected() {
        let mut definitions = CollectionRepository::open(Arc::new(MemoryStorage::new())).unwrap();

        let err = ServiceLogService::default()
            .add_definition(
                &mut definitions,
                NewServiceDefinition { name: "Bath".into(), default_duration_mins: None },
            )
            .unwrap_err();

        assert_eq!(
            err.validation_messages(),
            vec!["Service name and default duration required".to_string()]
        );
        assert!(definitions.is_empty());
    }

    #[test]
    fn blank_staff_and_notes_become_none() {
        let storage = Arc::new(MemoryStorage::new());
        let definitions = CollectionRepository::open(storage.clone()).unwrap();
        let mut records = CollectionRepository::open(storage).unwrap();

        let record = ServiceLogService::default()
            .log_service(
                &definitions,
                &mut records,
                NewServiceRecord {
                    staff_id: Some("".into()),
                    notes: Some("  ".into()),
                    ..record_payload("svc")
                },
            )
            .unwrap();

        assert_eq!(record.staff_id, None);
        assert_eq!(record.notes, None);
    }

    #[test]
    fn missing_date_is_rejected() {
        let storage = Arc::new(MemoryStorage::new());
        let definitions = CollectionRepository::open(storage.clone()).unwrap();
        let mut records = CollectionRepository::open(storage).unwrap();

        let err = ServiceLogService::default()
            .log_service(
                &definitions,
                &mut records,
                NewServiceRecord { date: None, ..record_payload("svc") },
            )
            .unwrap_err();

        assert_eq!(
            err.validation_messages(),
            vec!["Service, resident, and date are required".to_string()]
        );
        assert!(records.is_empty());
    }
}
