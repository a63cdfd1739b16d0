// src/common/id.rs

use uuid::Uuid;

/// Token novo para cada entidade criada. Colisões não são verificadas.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
