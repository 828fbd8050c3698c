//! Legal case records.

use serde::{Deserialize, Serialize};

use opsdesk_core::error::CoreError;
use opsdesk_core::filter::Searchable;
use opsdesk_core::payments::{self, PaymentSystem};
use opsdesk_core::types::{DateOnly, RecordId, Timestamp};

/// A record from the `/legal-cases` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegalCase {
    pub id: RecordId,
    #[serde(default)]
    pub case_number: String,
    #[serde(default)]
    pub court: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub filed_on: Option<DateOnly>,
    #[serde(default)]
    pub parties: Vec<CaseParty>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    /// `lump_sum` or `installments`.
    #[serde(default)]
    pub payment_system: String,
    #[serde(default)]
    pub installment_periods: Option<u32>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

/// A party to a case (plaintiff, defendant, witness, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseParty {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
}

impl LegalCase {
    /// Per-installment amount for cases settled in installments.
    ///
    /// Derived at read time from the stored total and period count;
    /// lump-sum cases and incomplete plans have none.
    pub fn installment_amount(&self) -> Result<Option<f64>, CoreError> {
        if PaymentSystem::from_str_value(&self.payment_system)? != PaymentSystem::Installments {
            return Ok(None);
        }
        match (self.total_amount, self.installment_periods) {
            (Some(total), Some(periods)) => {
                payments::installment_amount(total, periods).map(Some)
            }
            _ => Ok(None),
        }
    }
}

impl Searchable for LegalCase {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.case_number, &self.court, &self.subject]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "status" => Some(&self.status),
            "payment_system" => Some(&self.payment_system),
            "court" => Some(&self.court),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(system: &str, total: Option<f64>, periods: Option<u32>) -> LegalCase {
        LegalCase {
            id: "case-1".into(),
            case_number: "2026/114".into(),
            court: "Commercial".into(),
            subject: "Contract dispute".into(),
            status: "open".into(),
            filed_on: None,
            parties: Vec::new(),
            total_amount: total,
            payment_system: system.into(),
            installment_periods: periods,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn installment_amount_derives_from_plan() {
        let amount = case("installments", Some(3000.0), Some(6))
            .installment_amount()
            .unwrap()
            .unwrap();
        assert!((amount - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn lump_sum_case_has_no_installment() {
        assert!(case("lump_sum", Some(3000.0), Some(6))
            .installment_amount()
            .unwrap()
            .is_none());
    }

    #[test]
    fn incomplete_plan_has_no_installment() {
        assert!(case("installments", Some(3000.0), None)
            .installment_amount()
            .unwrap()
            .is_none());
    }
}
