//! Income basis service.

use sickpay_shared::config::IncomeConfig;
use sickpay_shared::types::{ActorId, OrgNumber, YearMonth};
use sickpay_shared::{AppResult, Outcome};
use tracing::info;

use crate::fault::FaultMapper;
use crate::income::{
    Income, IncomeFaultMapper, IncomeFilter, RawIncome, by_membership, require_business_unit,
};
use crate::organization::OrganizationFaultMapper;
use crate::diagnostics::DataQualitySink;
use crate::upstream::{IncomeLookup, OrganizationLookup};

/// Fetches and filters the income a sick-pay basis is computed from.
pub struct IncomeBasisService<'a> {
    income: &'a dyn IncomeLookup,
    organization: &'a dyn OrganizationLookup,
    sink: &'a dyn DataQualitySink,
    calculation_filter: String,
    comparison_filter: String,
}

impl<'a> IncomeBasisService<'a> {
    /// Creates the service, reading filter codes from `config`.
    #[must_use]
    pub fn new(
        income: &'a dyn IncomeLookup,
        organization: &'a dyn OrganizationLookup,
        sink: &'a dyn DataQualitySink,
        config: &IncomeConfig,
    ) -> Self {
        Self {
            income,
            organization,
            sink,
            calculation_filter: config.calculation_basis_filter.clone(),
            comparison_filter: config.comparison_basis_filter.clone(),
        }
    }

    /// Income from one employer, for the calculation basis.
    ///
    /// The employer is looked up first and must be a business unit. Income
    /// paid by the unit or by a legal entity it belongs to is kept.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `org` is not a business unit, or the mapped
    /// upstream error of the first failing lookup.
    pub fn calculation_basis(
        &self,
        actor: &ActorId,
        org: &OrgNumber,
        from: YearMonth,
        to: YearMonth,
    ) -> AppResult<Vec<Income>> {
        let target = self
            .organization
            .organization(org)
            .map_error(|fault| OrganizationFaultMapper.map_fault(fault))
            .chain(|target| require_business_unit(&target).map(|()| target))?;

        let raw = self.fetch(actor, from, to, &self.calculation_filter)?;
        let incomes = IncomeFilter::new(actor, from, to, self.sink).apply(raw);
        let incomes = by_membership(incomes, &target, self.sink)?;

        info!(
            org = %org,
            filter = %self.calculation_filter,
            count = incomes.len(),
            "resolved calculation basis income"
        );
        Ok(incomes)
    }

    /// All income in the window, for the comparison basis.
    ///
    /// # Errors
    ///
    /// Returns the mapped upstream error if the income lookup fails.
    pub fn comparison_basis(
        &self,
        actor: &ActorId,
        from: YearMonth,
        to: YearMonth,
    ) -> AppResult<Vec<Income>> {
        let raw = self.fetch(actor, from, to, &self.comparison_filter)?;
        let incomes = IncomeFilter::new(actor, from, to, self.sink).apply(raw);

        info!(
            filter = %self.comparison_filter,
            count = incomes.len(),
            "resolved comparison basis income"
        );
        Ok(incomes)
    }

    fn fetch(
        &self,
        actor: &ActorId,
        from: YearMonth,
        to: YearMonth,
        filter_code: &str,
    ) -> AppResult<Vec<RawIncome>> {
        self.income
            .incomes(actor, from, to, filter_code)
            .map_error(|fault| IncomeFaultMapper.map_fault(fault))
    }
}
