// src/db/persistent_state.rs

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use serde::{Serialize, de::DeserializeOwned};

use crate::{common::error::AppError, db::storage::KeyValueStorage};

// Revisões são únicas no processo inteiro: duas células nunca compartilham
// a mesma revisão, nem depois de reabrir o mesmo slot.
static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

fn next_revision() -> u64 {
    NEXT_REVISION.fetch_add(1, Ordering::Relaxed)
}

/// Valor em memória ligado a um slot nomeado do armazenamento durável.
///
/// A leitura acontece uma única vez, em [`PersistentState::initialize`].
/// Toda chamada a [`PersistentState::set`] substitui o valor inteiro e grava
/// o slot de forma síncrona (uma escrita por chamada, sem debounce).
pub struct PersistentState<T> {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    value: T,
    revision: u64,
}

impl<T> PersistentState<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Lê o slot; ausente ou corrompido vira `default`. Nada é gravado aqui.
    ///
    /// Falha de leitura do armazenamento NÃO vira `default`: é propagada,
    /// senão a próxima escrita apagaria os dados que não conseguimos ler.
    pub fn initialize(
        storage: Arc<dyn KeyValueStorage>,
        key: impl Into<String>,
        default: T,
    ) -> Result<Self, AppError> {
        let key = key.into();

        let value = match storage.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
                Ok(value) => value,
                Err(e) => {
                    // O texto corrompido fica no slot até a próxima escrita.
                    tracing::warn!(key = %key, error = %e, "Slot corrompido, usando valor padrão");
                    default
                }
            },
            Ok(None) => {
                tracing::debug!(key = %key, "Slot vazio (cold start), usando valor padrão");
                default
            }
            Err(e) => {
                tracing::error!(key = %key, error = %e, "🔥 Falha ao ler slot");
                return Err(e);
            }
        };

        Ok(Self {
            storage,
            key,
            value,
            revision: next_revision(),
        })
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Muda a cada `set`; serve de "identidade" do valor para memoização.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Substitui o valor inteiro e grava o slot.
    ///
    /// Erros de serialização ou de armazenamento são propagados; nesse caso
    /// o valor em memória continua o anterior.
    pub fn set(&mut self, new_value: T) -> Result<(), AppError> {
        let raw = serde_json::to_string(&new_value)?;
        self.storage.set(&self.key, &raw)?;

        self.value = new_value;
        self.revision = next_revision();
        Ok(())
    }

    pub fn update<F>(&mut self, f: F) -> Result<(), AppError>
    where
        F: FnOnce(&T) -> T,
    {
        let next = f(&self.value);
        self.set(next)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for PersistentState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistentState")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("revision", &self.revision)
            .finish()
    }
}
