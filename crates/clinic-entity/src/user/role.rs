//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the clinic.
///
/// Every principal carries exactly one role. Roles have no numeric
/// ordering: a check for `Nurse` never admits `Doctor` unless `Doctor` is
/// listed explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UserRole {
    /// System administrator; holds every permission.
    Admin,
    /// Physician; may prescribe.
    Doctor,
    /// Nursing staff.
    Nurse,
    /// Front-desk and administrative staff.
    Staff,
}

impl UserRole {
    /// Every role, in declaration order.
    pub const ALL: [UserRole; 4] = [Self::Admin, Self::Doctor, Self::Nurse, Self::Staff];

    /// Return the role's canonical name, as stored in claims and sessions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Doctor => "Doctor",
            Self::Nurse => "Nurse",
            Self::Staff => "Staff",
        }
    }

    /// Parse a role by exact, case-sensitive name.
    ///
    /// Returns `None` for anything that is not one of the canonical names;
    /// callers treat that as a role that fails every check.
    pub fn parse_exact(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == value)
    }

    /// Bit used to represent this role inside a role set.
    pub const fn bit(self) -> u8 {
        match self {
            Self::Admin => 1 << 0,
            Self::Doctor => 1 << 1,
            Self::Nurse => 1 << 2,
            Self::Staff => 1 << 3,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = clinic_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_exact(s).ok_or_else(|| {
            clinic_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: Admin, Doctor, Nurse, Staff"
            ))
        })
    }
}
