//! Income domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sickpay_shared::types::{ActorId, OrgNumber, PersonNumber, YearMonth};

use super::error::MappingError;

/// Raw income kind for wages.
pub const KIND_WAGE: &str = "Loennsinntekt";
/// Raw income kind for public benefits.
pub const KIND_BENEFIT: &str = "YtelseFraOffentlige";
/// Raw income kind for pensions and social security.
pub const KIND_PENSION: &str = "PensjonEllerTrygd";
/// Raw income kind for business income.
pub const KIND_BUSINESS: &str = "Naeringsinntekt";

/// The party that paid an income.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum Payer {
    /// An organization.
    Organization(OrgNumber),
    /// A private person.
    Person(PersonNumber),
    /// An internal subject id.
    Actor(ActorId),
}

impl Payer {
    /// Canonical identity string used for grouping and matching.
    #[must_use]
    pub fn identity(&self) -> &str {
        match self {
            Self::Organization(org) => org.as_str(),
            Self::Person(person) => person.as_str(),
            Self::Actor(actor) => actor.as_str(),
        }
    }

    /// Payer type name.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Organization(_) => "organization",
            Self::Person(_) => "person",
            Self::Actor(_) => "actor",
        }
    }
}

/// Regulatory category of an income.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum IncomeCategory {
    /// Salary from an employer.
    Wage,
    /// Benefit paid by a public body.
    Benefit {
        /// Benefit code.
        code: String,
    },
    /// Pension or social security.
    Pension {
        /// Pension code.
        code: String,
    },
    /// Self-employment income.
    Business {
        /// Business income code.
        code: String,
    },
}

impl IncomeCategory {
    /// Category name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Wage => "wage",
            Self::Benefit { .. } => "benefit",
            Self::Pension { .. } => "pension",
            Self::Business { .. } => "business",
        }
    }

    /// Maps a raw kind and description to a category.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown kinds, or coded kinds without a code.
    pub fn from_raw(kind: &str, description: Option<&str>) -> Result<Self, MappingError> {
        let code = || {
            description
                .map(str::to_string)
                .ok_or_else(|| MappingError::MissingCode(kind.to_string()))
        };

        match kind {
            KIND_WAGE => Ok(Self::Wage),
            KIND_BENEFIT => Ok(Self::Benefit { code: code()? }),
            KIND_PENSION => Ok(Self::Pension { code: code()? }),
            KIND_BUSINESS => Ok(Self::Business { code: code()? }),
            other => Err(MappingError::UnknownKind(other.to_string())),
        }
    }
}

/// An income record attributed to the subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Income {
    /// Who paid.
    pub payer: Payer,
    /// Month the amount was paid in.
    pub period: YearMonth,
    /// Amount paid.
    pub amount: Decimal,
    /// Regulatory category.
    pub category: IncomeCategory,
}

/// A party as identified in a raw income record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum RawParty {
    /// Organization number, not yet validated.
    Organization(String),
    /// Person number.
    Person(String),
    /// Internal subject id.
    Actor(String),
    /// A party type we do not know, by its type name.
    Unknown(String),
}

impl RawParty {
    /// Party type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Organization(_) => "organization",
            Self::Person(_) => "person",
            Self::Actor(_) => "actor",
            Self::Unknown(name) => name,
        }
    }

    /// Converts the party to a validated payer.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown party types and invalid identifiers.
    pub fn to_payer(&self) -> Result<Payer, MappingError> {
        Ok(match self {
            Self::Organization(id) => Payer::Organization(OrgNumber::new(id.as_str())?),
            Self::Person(id) => Payer::Person(PersonNumber::new(id.as_str())?),
            Self::Actor(id) => Payer::Actor(ActorId::new(id.as_str())?),
            Self::Unknown(name) => return Err(MappingError::UnknownPayer(name.clone())),
        })
    }
}

/// An income record as delivered by the income registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawIncome {
    /// Subject the income was reported for.
    pub recipient: RawParty,
    /// Reported payer.
    pub payer: RawParty,
    /// Month the amount was paid in.
    pub paid_in: YearMonth,
    /// Amount paid.
    pub amount: Decimal,
    /// Raw income kind.
    pub kind: String,
    /// Description code, carried by coded kinds.
    pub description: Option<String>,
}

impl RawIncome {
    /// Maps the record to a domain income.
    ///
    /// # Errors
    ///
    /// Returns an error if the kind or payer cannot be mapped.
    pub fn to_income(&self) -> Result<Income, MappingError> {
        let category = IncomeCategory::from_raw(&self.kind, self.description.as_deref())?;
        let payer = self.payer.to_payer()?;

        Ok(Income {
            payer,
            period: self.paid_in,
            amount: self.amount,
            category,
        })
    }
}
