//! Organizations and legal-entity membership.

pub mod error;
pub mod index;
pub mod types;

pub use error::{OrganizationFault, OrganizationFaultMapper};
pub use index::MembershipIndex;
pub use types::{Membership, OperatedUnit, Organization, OrganizationKind};
