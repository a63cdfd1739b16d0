// src/services/billing_service.rs

use validator::Validate;

use crate::{
    common::{error::AppError, id::new_id},
    db::CollectionRepository,
    models::{
        EntityRef,
        billing::{BillingTotals, Invoice, NewInvoice},
    },
    services::aggregator::summarize,
};

#[derive(Debug, Clone, Default)]
pub struct BillingService;

impl BillingService {
    pub fn new() -> Self {
        Self
    }

    /// Cria a fatura sempre em aberto (`paid = false`).
    pub fn create_invoice(
        &self,
        invoices: &mut CollectionRepository<Invoice>,
        payload: NewInvoice,
    ) -> Result<Invoice, AppError> {
        payload.validate()?;
        let (Some(amount), Some(date)) = (payload.amount, payload.date) else {
            return Err(AppError::InternalServerError(anyhow::anyhow!(
                "valor ou data ausente após validação"
            )));
        };

        let invoice = Invoice {
            id: new_id(),
            resident_id: EntityRef::new(payload.resident_id),
            description: payload.description.trim().to_string(),
            amount,
            paid: false,
            date,
        };

        invoices.insert(invoice.clone())?;
        tracing::info!(invoice_id = %invoice.id, amount = %invoice.amount, "Fatura criada");
        Ok(invoice)
    }

    pub fn remove(
        &self,
        invoices: &mut CollectionRepository<Invoice>,
        invoice_id: &str,
    ) -> Result<bool, AppError> {
        let removed = invoices.remove(invoice_id)?;
        tracing::info!(invoice_id, removed, "Fatura excluída");
        Ok(removed)
    }

    // Alterna pago/em aberto
    pub fn toggle_paid(
        &self,
        invoices: &mut CollectionRepository<Invoice>,
        invoice_id: &str,
    ) -> Result<bool, AppError> {
        let matched = invoices.replace_where(invoice_id, |invoice| Invoice {
            paid: !invoice.paid,
            ..invoice.clone()
        })?;
        tracing::info!(invoice_id, matched, "Status de pagamento alternado");
        Ok(matched)
    }

    pub fn totals(&self, invoices: &CollectionRepository<Invoice>) -> BillingTotals {
        let all = invoices.all();
        BillingTotals {
            unpaid: summarize(all, |i| !i.paid, |i| i.amount).total,
            paid: summarize(all, |i| i.paid, |i| i.amount).total,
        }
    }
}
