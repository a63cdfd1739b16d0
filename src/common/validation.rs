// src/common/validation.rs

use validator::ValidationError;

// Campo obrigatório: o valor "aparado" não pode ser vazio.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Texto opcional do formulário: vazio (depois do trim) vira `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
