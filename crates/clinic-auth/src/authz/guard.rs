//! Named guard variants and the requirement each one fixes.

use std::fmt;

use crate::rbac::hierarchy::{
    ADMIN_ONLY, DOCTOR_ONLY, DOCTOR_OR_ADMIN, HEALTHCARE, NURSE_ONLY, NURSE_OR_DOCTOR_OR_ADMIN,
    STAFF_BROADENED, STAFF_OR_ADMIN,
};
use crate::rbac::{Permission, RoleSet};

/// What a guard checks once a principal has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// Any resolved principal passes.
    Authenticated,
    /// The principal's role must be a member of the set.
    AnyRole(RoleSet),
    /// The principal's role must hold the permission.
    Permission(Permission),
}

/// A pre-configured authorization check bound to one route or route group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guard {
    /// Signed in, any role.
    Authenticated,
    /// Doctor or Admin.
    DoctorOrAdmin,
    /// Nurse, Doctor or Admin.
    NurseOrDoctorOrAdmin,
    /// Staff or Admin.
    StaffOrAdmin,
    /// Admin.
    AdminOnly,
    /// Doctor, Nurse or Admin.
    Healthcare,
    /// Doctor.
    DoctorOnly,
    /// Nurse.
    NurseOnly,
    /// Staff, and every clinical role as well.
    StaffOnly,
    /// A single permission from the matrix.
    Permission(Permission),
}

impl Guard {
    /// Role-set guards plus the authentication-only guard.
    pub const ROLE_GUARDS: [Guard; 9] = [
        Self::Authenticated,
        Self::DoctorOrAdmin,
        Self::NurseOrDoctorOrAdmin,
        Self::StaffOrAdmin,
        Self::AdminOnly,
        Self::Healthcare,
        Self::DoctorOnly,
        Self::NurseOnly,
        Self::StaffOnly,
    ];

    /// The requirement this guard enforces.
    pub const fn requirement(self) -> Requirement {
        match self {
            Self::Authenticated => Requirement::Authenticated,
            Self::DoctorOrAdmin => Requirement::AnyRole(DOCTOR_OR_ADMIN),
            Self::NurseOrDoctorOrAdmin => Requirement::AnyRole(NURSE_OR_DOCTOR_OR_ADMIN),
            Self::StaffOrAdmin => Requirement::AnyRole(STAFF_OR_ADMIN),
            Self::AdminOnly => Requirement::AnyRole(ADMIN_ONLY),
            Self::Healthcare => Requirement::AnyRole(HEALTHCARE),
            Self::DoctorOnly => Requirement::AnyRole(DOCTOR_ONLY),
            Self::NurseOnly => Requirement::AnyRole(NURSE_ONLY),
            Self::StaffOnly => Requirement::AnyRole(STAFF_BROADENED),
            Self::Permission(permission) => Requirement::Permission(permission),
        }
    }

    /// Every guard variant: the role guards and one per permission.
    pub fn catalog() -> Vec<Guard> {
        Self::ROLE_GUARDS
            .into_iter()
            .chain(Permission::ALL.into_iter().map(Self::Permission))
            .collect()
    }
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authenticated => f.write_str("Authenticated"),
            Self::DoctorOrAdmin => f.write_str("DoctorOrAdmin"),
            Self::NurseOrDoctorOrAdmin => f.write_str("NurseOrDoctorOrAdmin"),
            Self::StaffOrAdmin => f.write_str("StaffOrAdmin"),
            Self::AdminOnly => f.write_str("AdminOnly"),
            Self::Healthcare => f.write_str("Healthcare"),
            Self::DoctorOnly => f.write_str("DoctorOnly"),
            Self::NurseOnly => f.write_str("NurseOnly"),
            Self::StaffOnly => f.write_str("StaffOnly"),
            Self::Permission(permission) => write!(f, "Require{permission}"),
        }
    }
}
