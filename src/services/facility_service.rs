// src/services/facility_service.rs

use validator::Validate;

use crate::{
    common::{error::AppError, id::new_id},
    db::CollectionRepository,
    models::{
        EntityRef,
        facilities::{NewRoom, Room},
    },
};

#[derive(Debug, Clone, Default)]
pub struct FacilityService;

impl FacilityService {
    pub fn new() -> Self {
        Self
    }

    pub fn add_room(
        &self,
        rooms: &mut CollectionRepository<Room>,
        payload: NewRoom,
    ) -> Result<Room, AppError> {
        payload.validate()?;
        let Some(capacity) = payload.capacity else {
            return Err(AppError::InternalServerError(anyhow::anyhow!(
                "capacidade ausente após validação"
            )));
        };

        let room = Room {
            id: new_id(),
            name: payload.name.trim().to_string(),
            capacity,
            occupant_resident_id: None,
        };

        rooms.insert(room.clone())?;
        tracing::info!(room_id = %room.id, name = %room.name, "Quarto criado");
        Ok(room)
    }

    pub fn remove_room(
        &self,
        rooms: &mut CollectionRepository<Room>,
        room_id: &str,
    ) -> Result<bool, AppError> {
        let removed = rooms.remove(room_id)?;
        tracing::info!(room_id, removed, "Quarto excluído");
        Ok(removed)
    }

    /// Define o ocupante do quarto. `None` ou id vazio desocupa.
    pub fn assign_occupant(
        &self,
        rooms: &mut CollectionRepository<Room>,
        room_id: &str,
        resident_id: Option<&str>,
    ) -> Result<bool, AppError> {
        let occupant = resident_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(EntityRef::new);

        let matched = rooms.replace_where(room_id, |room| Room {
            occupant_resident_id: occupant.clone(),
            ..room.clone()
        })?;

        tracing::info!(room_id, occupied = occupant.is_some(), matched, "Ocupação atualizada");
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStorage;
    use std::sync::Arc;

    #[test]
    fn assign_and_vacate() {
        let mut rooms = CollectionRepository::open(Arc::new(MemoryStorage::new())).unwrap();
        let service = FacilityService::new();
        let room = service
            .add_room(&mut rooms, NewRoom { name: "Room 101".into(), capacity: Some(1) })
            .unwrap();
        assert!(!room.is_occupied());

        assert!(service.assign_occupant(&mut rooms, &room.id, Some("r1")).unwrap());
        assert_eq!(
            rooms.find(&room.id).unwrap().occupant_resident_id,
            Some(EntityRef::new("r1"))
        );

        service.assign_occupant(&mut rooms, &room.id, Some("")).unwrap();
        assert!(!rooms.find(&room.id).unwrap().is_occupied());

        assert!(!service.assign_occupant(&mut rooms, "missing", Some("r1")).unwrap());
    }

    #[test]
    fn capacity_is_required() {
        let mut rooms = CollectionRepository::open(Arc::new(MemoryStorage::new())).unwrap();
        let err = FacilityService::new()
            .add_room(&mut rooms, NewRoom { name: "Room 7".into(), capacity: None })
            .unwrap_err();
        assert_eq!(err.validation_messages(), vec!["Room name and capacity required".to_string()]);
    }
}
