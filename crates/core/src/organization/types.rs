//! Organization domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sickpay_shared::types::OrgNumber;

/// Edge stating that an organization belongs to a legal entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// The legal entity the organization is part of.
    pub legal_entity: OrgNumber,
    /// First day of the membership.
    pub fom: NaiveDate,
    /// Last day of the membership, if ended.
    pub tom: Option<NaiveDate>,
}

impl Membership {
    /// Creates an open-ended membership.
    #[must_use]
    pub const fn new(legal_entity: OrgNumber, fom: NaiveDate) -> Self {
        Self {
            legal_entity,
            fom,
            tom: None,
        }
    }
}

/// A business unit operated by a legal entity or organization unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatedUnit {
    /// The operated business unit.
    pub unit: OrgNumber,
    /// First day of operation.
    pub fom: NaiveDate,
    /// Last day of operation, if ended.
    pub tom: Option<NaiveDate>,
}

/// Kind of organization, with the edges each kind carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrganizationKind {
    /// A legal entity; the root of the membership hierarchy.
    LegalEntity {
        /// Business units operated by the entity.
        units: Vec<OperatedUnit>,
    },
    /// An intermediate organizational unit.
    OrganizationUnit {
        /// Business units operated by the unit.
        units: Vec<OperatedUnit>,
        /// Legal entities the unit belongs to.
        memberships: Vec<Membership>,
    },
    /// A business unit (the level employment is registered on).
    BusinessUnit {
        /// Legal entities the unit belongs to.
        memberships: Vec<Membership>,
    },
}

/// An organization as reported by the organization registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Validated organization number.
    pub org_number: OrgNumber,
    /// Display name; absent names are not an error.
    pub name: Option<String>,
    /// Kind and hierarchy edges.
    pub kind: OrganizationKind,
}

impl Organization {
    /// Creates a business unit belonging to the given legal entities.
    #[must_use]
    pub const fn business_unit(
        org_number: OrgNumber,
        name: Option<String>,
        memberships: Vec<Membership>,
    ) -> Self {
        Self {
            org_number,
            name,
            kind: OrganizationKind::BusinessUnit { memberships },
        }
    }

    /// Creates a legal entity operating the given units.
    #[must_use]
    pub const fn legal_entity(
        org_number: OrgNumber,
        name: Option<String>,
        units: Vec<OperatedUnit>,
    ) -> Self {
        Self {
            org_number,
            name,
            kind: OrganizationKind::LegalEntity { units },
        }
    }

    /// Legal-entity memberships; empty for legal entities.
    #[must_use]
    pub fn memberships(&self) -> &[Membership] {
        match &self.kind {
            OrganizationKind::LegalEntity { .. } => &[],
            OrganizationKind::OrganizationUnit { memberships, .. }
            | OrganizationKind::BusinessUnit { memberships } => memberships,
        }
    }

    /// Units operated by this organization; empty for business units.
    #[must_use]
    pub fn operated_units(&self) -> &[OperatedUnit] {
        match &self.kind {
            OrganizationKind::LegalEntity { units }
            | OrganizationKind::OrganizationUnit { units, .. } => units,
            OrganizationKind::BusinessUnit { .. } => &[],
        }
    }

    /// Returns true if income can be filtered against this organization.
    #[must_use]
    pub const fn is_business_unit(&self) -> bool {
        matches!(self.kind, OrganizationKind::BusinessUnit { .. })
    }

    /// Short type label used in logs and diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self.kind {
            OrganizationKind::LegalEntity { .. } => "legal_entity",
            OrganizationKind::OrganizationUnit { .. } => "organization_unit",
            OrganizationKind::BusinessUnit { .. } => "business_unit",
        }
    }

    /// Returns true if this organization belongs to `legal_entity`.
    #[must_use]
    pub fn belongs_to(&self, legal_entity: &OrgNumber) -> bool {
        self.memberships()
            .iter()
            .any(|m| &m.legal_entity == legal_entity)
    }
}
