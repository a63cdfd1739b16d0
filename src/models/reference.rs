// src/models/reference.rs

use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use serde::{Deserialize, Serialize};

/// Referência fraca para outra entidade: só guarda o id.
///
/// Não há garantia de que o alvo exista (não há cascata na exclusão);
/// quem lê resolve via lookup e trata a ausência como placeholder.
/// No JSON é apenas a string do id.
#[derive(Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct EntityRef<T> {
    id: String,
    _target: PhantomData<fn() -> T>,
}

impl<T> EntityRef<T> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            _target: PhantomData,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

// Implementações manuais: não exigem nada de `T`.

impl<T> Clone for EntityRef<T> {
    fn clone(&self) -> Self {
        Self::new(self.id.clone())
    }
}

impl<T> PartialEq for EntityRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for EntityRef<T> {}

impl<T> Hash for EntityRef<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Debug for EntityRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntityRef").field(&self.id).finish()
    }
}

impl<T> fmt::Display for EntityRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
