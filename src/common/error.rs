// src/common/error.rs

use thiserror::Error;

// Erros do núcleo. Slot ausente, slot corrompido e referência pendente NÃO
// aparecem aqui: eles degradam para o valor padrão ou para um placeholder.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Chave de armazenamento inválida: {0}")]
    InvalidStorageKey(String),

    // Falhas de plataforma (disco cheio, permissão negada...)
    #[error("Erro de armazenamento: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Erro de serialização: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Erro interno: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    /// Mensagens amigáveis de validação, por ordem alfabética de campo, sem repetição.
    pub fn validation_messages(&self) -> Vec<String> {
        let AppError::ValidationError(errors) = self else {
            return Vec::new();
        };

        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let mut messages: Vec<String> = Vec::new();
        for (_, field_errors) in fields {
            for message in field_errors.iter().filter_map(|e| e.message.as_ref()) {
                let message = message.to_string();
                if !messages.contains(&message) {
                    messages.push(message);
                }
            }
        }
        messages
    }
}
