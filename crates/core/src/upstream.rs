//! Collaborator traits for the upstream registries.
//!
//! Implementations own transport concerns (network, authentication,
//! retries). The services here only see domain values or raw faults.

use chrono::NaiveDate;
use sickpay_shared::types::{ActorId, OrgNumber, YearMonth};

use crate::employment::{Employment, EmploymentFault};
use crate::history::BenefitHistoryFault;
use crate::income::{IncomeFault, RawIncome};
use crate::organization::{Organization, OrganizationFault};
use crate::period::PaymentDecision;

/// Employment registry.
pub trait EmploymentLookup: Send + Sync {
    /// Employments of `actor` active at some point in `[from, to]`.
    ///
    /// # Errors
    ///
    /// Returns the registry's fault unchanged.
    fn employments(
        &self,
        actor: &ActorId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Employment>, EmploymentFault>;
}

/// Income registry.
pub trait IncomeLookup: Send + Sync {
    /// Raw income records reported under `filter_code` for `[from, to]`.
    ///
    /// # Errors
    ///
    /// Returns the registry's fault unchanged.
    fn incomes(
        &self,
        actor: &ActorId,
        from: YearMonth,
        to: YearMonth,
        filter_code: &str,
    ) -> Result<Vec<RawIncome>, IncomeFault>;

    /// Freelance relationships of `actor` reported for `[from, to]`.
    ///
    /// # Errors
    ///
    /// Returns the registry's fault unchanged.
    fn freelance_employments(
        &self,
        actor: &ActorId,
        from: YearMonth,
        to: YearMonth,
    ) -> Result<Vec<Employment>, IncomeFault>;
}

/// Organization registry.
pub trait OrganizationLookup: Send + Sync {
    /// The organization with `org_number`.
    ///
    /// # Errors
    ///
    /// Returns the registry's fault unchanged.
    fn organization(&self, org_number: &OrgNumber) -> Result<Organization, OrganizationFault>;
}

/// Sick-pay benefit history.
pub trait BenefitHistoryLookup: Send + Sync {
    /// Payment decisions for `actor` in `[from, to]`.
    ///
    /// # Errors
    ///
    /// Returns the registry's fault unchanged.
    fn payment_decisions(
        &self,
        actor: &ActorId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<PaymentDecision>, BenefitHistoryFault>;
}
