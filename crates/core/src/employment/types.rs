//! Employment domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sickpay_shared::types::{OrgNumber, PersonNumber};

use super::error::EmploymentError;

/// The party an employment relationship is registered with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum Employer {
    /// A business unit.
    Organization(OrgNumber),
    /// A private person.
    Person(PersonNumber),
}

impl Employer {
    /// Canonical identity string used for matching.
    #[must_use]
    pub fn identity(&self) -> &str {
        match self {
            Self::Organization(org) => org.as_str(),
            Self::Person(person) => person.as_str(),
        }
    }

    /// The organization number, if the employer is an organization.
    #[must_use]
    pub const fn org_number(&self) -> Option<&OrgNumber> {
        match self {
            Self::Organization(org) => Some(org),
            Self::Person(_) => None,
        }
    }
}

/// Occupation agreement within an employment relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Agreement {
    /// The agreement in force today.
    Current {
        /// Occupation code.
        occupation: String,
        /// Position percentage, if reported.
        position_percent: Option<Decimal>,
        /// First day of the agreement.
        fom: NaiveDate,
    },
    /// A superseded agreement.
    Historic {
        /// Occupation code.
        occupation: String,
        /// Position percentage, if reported.
        position_percent: Option<Decimal>,
        /// First day of the agreement.
        fom: NaiveDate,
        /// Last day of the agreement.
        tom: NaiveDate,
    },
}

impl Agreement {
    /// Returns true for the current agreement.
    #[must_use]
    pub const fn is_current(&self) -> bool {
        matches!(self, Self::Current { .. })
    }

    /// Occupation code.
    #[must_use]
    pub fn occupation(&self) -> &str {
        match self {
            Self::Current { occupation, .. } | Self::Historic { occupation, .. } => occupation,
        }
    }

    /// Position percentage, if reported.
    #[must_use]
    pub const fn position_percent(&self) -> Option<Decimal> {
        match self {
            Self::Current {
                position_percent, ..
            }
            | Self::Historic {
                position_percent, ..
            } => *position_percent,
        }
    }
}

/// Leave of absence registered on an employment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leave {
    /// First day of leave.
    pub fom: NaiveDate,
    /// Last day of leave, if ended.
    pub tom: Option<NaiveDate>,
    /// Share of the position on leave.
    pub percent: Decimal,
    /// Cause code.
    pub cause: String,
}

/// Kind of employment relationship, with the details each kind carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmploymentKind {
    /// Ordinary employee, registered in the employment registry.
    Employee {
        /// All agreements, in upstream order.
        agreements: Vec<Agreement>,
        /// Registered leaves.
        leaves: Vec<Leave>,
        /// Position of the current agreement in `agreements`.
        #[serde(skip)]
        current: usize,
    },
    /// Freelance contract, reported through the income registry.
    Freelancer {
        /// Occupation code, if reported.
        occupation: Option<String>,
    },
}

impl EmploymentKind {
    /// Kind name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Employee { .. } => "employee",
            Self::Freelancer { .. } => "freelancer",
        }
    }
}

/// An employment relationship.
///
/// Employees are constructed through [`Employment::new`], which enforces that
/// exactly one agreement is current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employment {
    employer: Employer,
    start: NaiveDate,
    end: Option<NaiveDate>,
    kind: EmploymentKind,
}

impl Employment {
    /// Creates an employee relationship.
    ///
    /// # Errors
    ///
    /// Returns an error if the agreements do not contain exactly one current
    /// agreement.
    pub fn new(
        employer: Employer,
        start: NaiveDate,
        end: Option<NaiveDate>,
        agreements: Vec<Agreement>,
        leaves: Vec<Leave>,
    ) -> Result<Self, EmploymentError> {
        let positions: Vec<usize> = agreements
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_current())
            .map(|(position, _)| position)
            .collect();
        let &[position] = positions.as_slice() else {
            return Err(EmploymentError::CurrentAgreementCount(positions.len()));
        };

        Ok(Self {
            employer,
            start,
            end,
            kind: EmploymentKind::Employee {
                agreements,
                leaves,
                current: position,
            },
        })
    }

    /// Creates a freelance relationship.
    #[must_use]
    pub const fn freelancer(
        employer: Employer,
        start: NaiveDate,
        end: Option<NaiveDate>,
        occupation: Option<String>,
    ) -> Self {
        Self {
            employer,
            start,
            end,
            kind: EmploymentKind::Freelancer { occupation },
        }
    }

    /// The employer.
    #[must_use]
    pub const fn employer(&self) -> &Employer {
        &self.employer
    }

    /// First day of employment.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of employment, if ended.
    #[must_use]
    pub const fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Kind of relationship.
    #[must_use]
    pub const fn kind(&self) -> &EmploymentKind {
        &self.kind
    }

    /// Agreements of an employee; empty for freelancers.
    #[must_use]
    pub fn agreements(&self) -> &[Agreement] {
        match &self.kind {
            EmploymentKind::Employee { agreements, .. } => agreements,
            EmploymentKind::Freelancer { .. } => &[],
        }
    }

    /// Leaves of an employee; empty for freelancers.
    #[must_use]
    pub fn leaves(&self) -> &[Leave] {
        match &self.kind {
            EmploymentKind::Employee { leaves, .. } => leaves,
            EmploymentKind::Freelancer { .. } => &[],
        }
    }

    /// The current agreement of an employee.
    #[must_use]
    pub fn current_agreement(&self) -> Option<&Agreement> {
        match &self.kind {
            EmploymentKind::Employee {
                agreements,
                current,
                ..
            } => agreements.get(*current),
            EmploymentKind::Freelancer { .. } => None,
        }
    }

    /// Occupation code of the current agreement, or of the freelance
    /// contract.
    #[must_use]
    pub fn occupation(&self) -> Option<&str> {
        match &self.kind {
            EmploymentKind::Employee { .. } => self.current_agreement().map(Agreement::occupation),
            EmploymentKind::Freelancer { occupation } => occupation.as_deref(),
        }
    }
}
