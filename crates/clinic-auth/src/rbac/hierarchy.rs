//! Named role groupings used by coarse role checks.
//!
//! Groupings are explicit sets. Membership is exact: there is no implied
//! seniority, so `NURSE_ONLY` never admits a doctor.

use std::fmt;

use clinic_entity::user::UserRole;

/// An immutable set of roles, packed into a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoleSet(u8);

impl RoleSet {
    /// The set admitting nobody.
    pub const EMPTY: Self = Self(0);

    /// Returns a copy of this set that also admits `role`.
    pub const fn with(self, role: UserRole) -> Self {
        Self(self.0 | role.bit())
    }

    /// Whether `role` is a member of the set.
    pub const fn contains(self, role: UserRole) -> bool {
        self.0 & role.bit() != 0
    }

    /// Whether the set admits nobody.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the member roles in declaration order.
    pub fn roles(self) -> impl Iterator<Item = UserRole> {
        UserRole::ALL.into_iter().filter(move |role| self.contains(*role))
    }
}

impl FromIterator<UserRole> for RoleSet {
    fn from_iter<I: IntoIterator<Item = UserRole>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.roles().map(|r| r.as_str()).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

/// Administrators only.
pub const ADMIN_ONLY: RoleSet = RoleSet::EMPTY.with(UserRole::Admin);

/// Doctors only.
pub const DOCTOR_ONLY: RoleSet = RoleSet::EMPTY.with(UserRole::Doctor);

/// Nurses only.
pub const NURSE_ONLY: RoleSet = RoleSet::EMPTY.with(UserRole::Nurse);

/// Doctors and administrators.
pub const DOCTOR_OR_ADMIN: RoleSet = DOCTOR_ONLY.with(UserRole::Admin);

/// Nurses, doctors and administrators.
pub const NURSE_OR_DOCTOR_OR_ADMIN: RoleSet = DOCTOR_OR_ADMIN.with(UserRole::Nurse);

/// Clinical roles. Same members as [`NURSE_OR_DOCTOR_OR_ADMIN`], kept
/// separate because routes name it differently.
pub const HEALTHCARE: RoleSet = RoleSet::EMPTY
    .with(UserRole::Doctor)
    .with(UserRole::Nurse)
    .with(UserRole::Admin);

/// Staff and administrators.
pub const STAFF_OR_ADMIN: RoleSet = RoleSet::EMPTY.with(UserRole::Staff).with(UserRole::Admin);

/// The "staff" guard admits every role: clinical roles can do all
/// front-desk work.
pub const STAFF_BROADENED: RoleSet = HEALTHCARE.with(UserRole::Staff);
