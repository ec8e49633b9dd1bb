//! Employment and income overview service.

use chrono::{NaiveDate, Utc};
use rayon::prelude::*;
use sickpay_shared::config::IncomeConfig;
use sickpay_shared::types::{ActorId, OrgNumber, YearMonth};
use sickpay_shared::{AppResult, Outcome, sequence};
use tracing::info;

use super::types::EmploymentIncomeOverview;
use crate::employment::{EmploymentFaultMapper, inspect_employments};
use crate::fault::FaultMapper;
use crate::income::{Income, IncomeCategory, IncomeFaultMapper, IncomeFilter, Payer};
use crate::organization::{MembershipIndex, Organization, OrganizationFaultMapper};
use crate::diagnostics::{DataQualitySignal, DataQualitySink};
use crate::reconciliation::reconcile;
use crate::upstream::{EmploymentLookup, IncomeLookup, OrganizationLookup};

/// Builds the employment and income overview for one subject.
pub struct EmploymentIncomeService<'a> {
    employment: &'a dyn EmploymentLookup,
    income: &'a dyn IncomeLookup,
    organization: &'a dyn OrganizationLookup,
    sink: &'a dyn DataQualitySink,
    filter_code: String,
}

impl<'a> EmploymentIncomeService<'a> {
    /// Creates the service, reading the overview filter code from `config`.
    #[must_use]
    pub fn new(
        employment: &'a dyn EmploymentLookup,
        income: &'a dyn IncomeLookup,
        organization: &'a dyn OrganizationLookup,
        sink: &'a dyn DataQualitySink,
        config: &IncomeConfig,
    ) -> Self {
        Self {
            employment,
            income,
            organization,
            sink,
            filter_code: config.overview_filter.clone(),
        }
    }

    /// Reconciles employments with income for `actor` in `[from, to]`.
    ///
    /// Employees, freelance relationships and income are fetched in
    /// parallel. Employees and freelancers are inspected for data quality
    /// and reconciled together. Every distinct organization paying wages is
    /// then fetched in parallel to build the membership index. Failures
    /// surface in a fixed order: employment, freelance relationships,
    /// income, then organizations in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns the first mapped upstream error.
    pub fn reconcile(
        &self,
        actor: &ActorId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<EmploymentIncomeOverview> {
        let from_month = YearMonth::from_date(from);
        let to_month = YearMonth::from_date(to);

        let (employees, (freelancers, raw)) = rayon::join(
            || {
                self.employment
                    .employments(actor, from, to)
                    .map_error(|fault| EmploymentFaultMapper.map_fault(fault))
            },
            || {
                rayon::join(
                    || {
                        self.income
                            .freelance_employments(actor, from_month, to_month)
                            .map_error(|fault| IncomeFaultMapper.map_fault(fault))
                    },
                    || {
                        self.income
                            .incomes(actor, from_month, to_month, &self.filter_code)
                            .map_error(|fault| IncomeFaultMapper.map_fault(fault))
                    },
                )
            },
        );
        let mut employments = employees?;
        let freelancers = freelancers?;
        let raw = raw?;

        self.sink.emit(DataQualitySignal::FreelanceEmployments {
            count: freelancers.len(),
        });
        employments.extend(freelancers);
        inspect_employments(&employments, Utc::now().date_naive(), self.sink);

        let incomes = IncomeFilter::new(actor, from_month, to_month, self.sink).apply(raw);
        let mut overview = EmploymentIncomeOverview::default();
        let mut wages = Vec::new();
        for income in incomes {
            match income.category {
                IncomeCategory::Wage => wages.push(income),
                IncomeCategory::Benefit { .. } => overview.benefits.push(income),
                IncomeCategory::Pension { .. } => overview.pensions.push(income),
                IncomeCategory::Business { .. } => overview.business.push(income),
            }
        }

        let organizations = self.payer_organizations(&wages)?;
        let index = MembershipIndex::from_organizations(&organizations);

        let reconciliation = reconcile(employments, wages, &index, self.sink);
        overview.employments = reconciliation.pairs;
        overview.wages_without_employment = reconciliation.unmatched;

        info!(
            employments = overview.employments.len(),
            unmatched = overview.wages_without_employment.len(),
            organizations = organizations.len(),
            "reconciled employment and income"
        );

        Ok(overview)
    }

    /// Fetches every distinct organization paying wages.
    ///
    /// Employers are not looked up: an employer missing from the
    /// organization registry must not fail the overview.
    fn payer_organizations(&self, wages: &[Income]) -> AppResult<Vec<Organization>> {
        let mut distinct: Vec<&OrgNumber> = Vec::new();
        for income in wages {
            if let Payer::Organization(org) = &income.payer
                && !distinct.contains(&org)
            {
                distinct.push(org);
            }
        }

        let results: Vec<_> = distinct
            .par_iter()
            .map(|org| {
                self.organization
                    .organization(org)
                    .map_error(|fault| OrganizationFaultMapper.map_fault(fault))
            })
            .collect();

        sequence(results)
    }
}
