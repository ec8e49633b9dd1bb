//! Reconciliation engine.

use std::collections::{BTreeMap, HashMap};

use crate::employment::Employment;
use crate::income::Income;
use crate::organization::MembershipIndex;
use crate::diagnostics::{DataQualitySignal, DataQualitySink};

use super::types::{MatchedPair, Reconciliation};

/// Income grouped by exact payer identity, in first-seen order.
struct PayerGroups {
    order: Vec<String>,
    groups: HashMap<String, Vec<Income>>,
}

impl PayerGroups {
    fn new(incomes: Vec<Income>) -> Self {
        let mut order = Vec::new();
        let mut groups: HashMap<String, Vec<Income>> = HashMap::new();

        for income in incomes {
            let payer = income.payer.identity().to_string();
            if !groups.contains_key(&payer) {
                order.push(payer.clone());
            }
            groups.entry(payer).or_default().push(income);
        }

        Self { order, groups }
    }
}

/// Pairs every employment with the income of its affiliated payers.
///
/// An employment matches income whose payer is the employer itself, a legal
/// entity the employer belongs to, or a unit that belongs to the employer.
/// Identities compare by exact string equality. Membership validity windows
/// are not consulted.
///
/// Employees and freelancers match the same way. Employments without income
/// stay in the output with an empty list, reported by kind. Each
/// payer group no employment claims is reported once, weighted by its size.
#[must_use]
pub fn reconcile(
    employments: Vec<Employment>,
    incomes: Vec<Income>,
    index: &MembershipIndex,
    sink: &dyn DataQualitySink,
) -> Reconciliation {
    let PayerGroups { order, groups } = PayerGroups::new(incomes);
    let mut claimed = vec![false; order.len()];

    let pairs = employments
        .into_iter()
        .map(|employment| {
            let employer = employment.employer().identity();
            let affiliated = index.affiliated(employer);

            let mut matched = Vec::new();
            for (position, payer) in order.iter().enumerate() {
                if affiliated.contains(payer.as_str()) {
                    claimed[position] = true;
                    if let Some(group) = groups.get(payer) {
                        matched.extend(group.iter().cloned());
                    }
                }
            }

            if matched.is_empty() {
                sink.emit(DataQualitySignal::EmploymentWithoutIncome {
                    employer: employer.to_string(),
                    kind: employment.kind().name(),
                });
            }
            sink.emit(DataQualitySignal::MatchedIncomeCount {
                count: matched.len(),
            });

            MatchedPair {
                employment,
                incomes: matched,
            }
        })
        .collect();

    let mut groups = groups;
    let mut unmatched = Vec::new();
    for (payer, was_claimed) in order.into_iter().zip(claimed) {
        if was_claimed {
            continue;
        }
        let group = groups.remove(&payer).unwrap_or_default();

        let mut categories: BTreeMap<&'static str, usize> = BTreeMap::new();
        for income in &group {
            *categories.entry(income.category.name()).or_insert(0) += 1;
        }
        sink.emit(DataQualitySignal::IncomeWithoutEmployment {
            payer,
            count: group.len(),
            categories,
        });

        unmatched.extend(group);
    }

    Reconciliation { pairs, unmatched }
}
