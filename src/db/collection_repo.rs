// src/db/collection_repo.rs

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    common::error::AppError,
    db::{persistent_state::PersistentState, storage::KeyValueStorage},
};

/// Registro persistido numa coleção própria, identificado por um id texto.
pub trait Entity: Serialize + DeserializeOwned + Clone {
    /// Nome do slot no armazenamento durável.
    const STORAGE_KEY: &'static str;

    fn id(&self) -> &str;
}

// O repositório de uma coleção: toda mutação reconstrói o Vec inteiro
// e grava o slot uma vez.
pub struct CollectionRepository<T: Entity> {
    state: PersistentState<Vec<T>>,
}

impl<T: Entity> CollectionRepository<T> {
    pub fn open(storage: Arc<dyn KeyValueStorage>) -> Result<Self, AppError> {
        Self::open_with_default(storage, Vec::new())
    }

    pub fn open_with_default(
        storage: Arc<dyn KeyValueStorage>,
        default: Vec<T>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            state: PersistentState::initialize(storage, T::STORAGE_KEY, default)?,
        })
    }

    pub fn all(&self) -> &[T] {
        self.state.value()
    }

    pub fn len(&self) -> usize {
        self.state.value().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.value().is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.state.value().iter().find(|e| e.id() == id)
    }

    pub fn revision(&self) -> u64 {
        self.state.revision()
    }

    // Adiciona no final (a ordem de inserção é a ordem "recente").
    pub fn insert(&mut self, entity: T) -> Result<(), AppError> {
        self.state.update(|current| {
            let mut next = current.clone();
            next.push(entity);
            next
        })
    }

    /// Substitui no lugar os registros com o id informado.
    /// Retorna `false` se nenhum bateu; o slot é gravado mesmo assim.
    pub fn replace_where<F>(&mut self, id: &str, mut f: F) -> Result<bool, AppError>
    where
        F: FnMut(&T) -> T,
    {
        let mut matched = false;
        let next: Vec<T> = self
            .state
            .value()
            .iter()
            .map(|e| {
                if e.id() == id {
                    matched = true;
                    f(e)
                } else {
                    e.clone()
                }
            })
            .collect();

        self.state.set(next)?;
        Ok(matched)
    }

    /// Remove pelo id. Não existe cascata para outras coleções.
    pub fn remove(&mut self, id: &str) -> Result<bool, AppError> {
        let removed = self.retain(|e| e.id() != id)?;
        Ok(removed > 0)
    }

    // Mantém só o que passa no predicado; retorna quantos saíram.
    pub fn retain<P>(&mut self, mut keep: P) -> Result<usize, AppError>
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.state.value().len();
        let next: Vec<T> = self
            .state
            .value()
            .iter()
            .filter(|e| keep(*e))
            .cloned()
            .collect();
        let removed = before - next.len();

        self.state.set(next)?;
        Ok(removed)
    }
}
