//! Role-to-permission mapping definitions.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::LazyLock;

use clinic_entity::user::UserRole;

use super::hierarchy::RoleSet;

/// A fine-grained capability, checked independently of role labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Permission {
    // Patients
    /// Read patient records.
    ViewPatients,
    /// Register new patients.
    CreatePatients,
    /// Edit patient records.
    UpdatePatients,
    /// Remove patient records.
    DeletePatients,

    // Appointments
    /// Read the appointment book.
    ViewAppointments,
    /// Book appointments.
    CreateAppointments,
    /// Reschedule or edit appointments.
    UpdateAppointments,
    /// Cancel appointments.
    DeleteAppointments,

    // Clinical
    /// Write prescriptions.
    CreatePrescriptions,
    /// Record medicine dispensing and usage.
    TrackMedicationUsage,

    // System
    /// Administer users and system settings.
    ManageSystem,
}

impl Permission {
    /// Every permission, in declaration order.
    pub const ALL: [Permission; 11] = [
        Self::ViewPatients,
        Self::CreatePatients,
        Self::UpdatePatients,
        Self::DeletePatients,
        Self::ViewAppointments,
        Self::CreateAppointments,
        Self::UpdateAppointments,
        Self::DeleteAppointments,
        Self::CreatePrescriptions,
        Self::TrackMedicationUsage,
        Self::ManageSystem,
    ];

    /// Return the permission's identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewPatients => "ViewPatients",
            Self::CreatePatients => "CreatePatients",
            Self::UpdatePatients => "UpdatePatients",
            Self::DeletePatients => "DeletePatients",
            Self::ViewAppointments => "ViewAppointments",
            Self::CreateAppointments => "CreateAppointments",
            Self::UpdateAppointments => "UpdateAppointments",
            Self::DeleteAppointments => "DeleteAppointments",
            Self::CreatePrescriptions => "CreatePrescriptions",
            Self::TrackMedicationUsage => "TrackMedicationUsage",
            Self::ManageSystem => "ManageSystem",
        }
    }

    /// Parse a permission by exact identifier.
    pub fn parse_exact(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static GLOBAL: LazyLock<PermissionMatrix> = LazyLock::new(PermissionMatrix::standard);

/// Maps each role to its set of permissions.
///
/// Built once, then only read. The process-wide instance is
/// [`PermissionMatrix::global`].
#[derive(Debug, Clone)]
pub struct PermissionMatrix {
    /// Role → set of permissions.
    grants: HashMap<UserRole, HashSet<Permission>>,
}

impl PermissionMatrix {
    /// The shared, read-only matrix used by every guard.
    pub fn global() -> &'static PermissionMatrix {
        &GLOBAL
    }

    /// Builds the clinic's standard grants.
    pub fn standard() -> Self {
        use Permission::*;

        let mut grants = HashMap::new();

        // Admin: everything
        grants.insert(UserRole::Admin, Permission::ALL.into_iter().collect());

        // Doctor: clinical work, no patient deletion or system admin
        grants.insert(
            UserRole::Doctor,
            [
                ViewPatients,
                CreatePatients,
                UpdatePatients,
                ViewAppointments,
                CreateAppointments,
                UpdateAppointments,
                DeleteAppointments,
                CreatePrescriptions,
                TrackMedicationUsage,
            ]
            .into_iter()
            .collect(),
        );

        // Nurse: ward care, no registration or prescribing
        grants.insert(
            UserRole::Nurse,
            [
                ViewPatients,
                UpdatePatients,
                ViewAppointments,
                CreateAppointments,
                UpdateAppointments,
                TrackMedicationUsage,
            ]
            .into_iter()
            .collect(),
        );

        // Staff: front desk
        grants.insert(
            UserRole::Staff,
            [
                ViewPatients,
                CreatePatients,
                ViewAppointments,
                CreateAppointments,
                UpdateAppointments,
                DeleteAppointments,
            ]
            .into_iter()
            .collect(),
        );

        Self { grants }
    }

    /// Builds a matrix from explicit grants. Roles not listed get no entry.
    pub fn from_grants<I, P>(grants: I) -> Self
    where
        I: IntoIterator<Item = (UserRole, P)>,
        P: IntoIterator<Item = Permission>,
    {
        Self {
            grants: grants
                .into_iter()
                .map(|(role, perms)| (role, perms.into_iter().collect()))
                .collect(),
        }
    }

    /// Checks whether the given role has the specified permission.
    pub fn has_permission(&self, role: &UserRole, permission: &Permission) -> bool {
        self.grants
            .get(role)
            .map(|perms| perms.contains(permission))
            .unwrap_or(false)
    }

    /// String form of [`has_permission`](Self::has_permission). Unknown role
    /// or permission names yield `false`, same as a denial.
    pub fn has_permission_named(&self, role: &str, permission: &str) -> bool {
        match (UserRole::parse_exact(role), Permission::parse_exact(permission)) {
            (Some(role), Some(permission)) => self.has_permission(&role, &permission),
            _ => false,
        }
    }

    /// Whether the role has an entry at all (possibly empty).
    pub fn has_entry(&self, role: &UserRole) -> bool {
        self.grants.contains_key(role)
    }

    /// Returns the set of permissions for the given role.
    pub fn permissions_for_role(&self, role: &UserRole) -> HashSet<Permission> {
        self.grants.get(role).cloned().unwrap_or_default()
    }

    /// Returns every role holding the permission.
    pub fn roles_with(&self, permission: &Permission) -> RoleSet {
        UserRole::ALL
            .into_iter()
            .filter(|role| self.has_permission(role, permission))
            .collect()
    }
}

impl Default for PermissionMatrix {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_holds_everything() {
        let matrix = PermissionMatrix::standard();
        for permission in Permission::ALL {
            assert!(matrix.has_permission(&UserRole::Admin, &permission));
        }
    }

    #[test]
    fn test_prescriptions_are_doctor_and_admin() {
        let matrix = PermissionMatrix::standard();
        let holders = matrix.roles_with(&Permission::CreatePrescriptions);
        assert_eq!(holders, crate::rbac::hierarchy::DOCTOR_OR_ADMIN);
        assert!(!matrix.has_permission(&UserRole::Staff, &Permission::CreatePrescriptions));
        assert!(!matrix.has_permission(&UserRole::Nurse, &Permission::CreatePrescriptions));
    }

    #[test]
    fn test_system_and_patient_deletion_are_admin_only() {
        let matrix = PermissionMatrix::standard();
        for permission in [Permission::ManageSystem, Permission::DeletePatients] {
            assert_eq!(
                matrix.roles_with(&permission),
                crate::rbac::hierarchy::ADMIN_ONLY
            );
        }
    }

    /// Expected grants, columns Admin, Doctor, Nurse, Staff.
    const EXPECTED: [(Permission, [bool; 4]); 11] = [
        (Permission::ViewPatients, [true, true, true, true]),
        (Permission::CreatePatients, [true, true, false, true]),
        (Permission::UpdatePatients, [true, true, true, false]),
        (Permission::DeletePatients, [true, false, false, false]),
        (Permission::ViewAppointments, [true, true, true, true]),
        (Permission::CreateAppointments, [true, true, true, true]),
        (Permission::UpdateAppointments, [true, true, true, true]),
        (Permission::DeleteAppointments, [true, true, false, true]),
        (Permission::CreatePrescriptions, [true, true, false, false]),
        (Permission::TrackMedicationUsage, [true, true, true, false]),
        (Permission::ManageSystem, [true, false, false, false]),
    ];

    #[test]
    fn test_every_grant_matches_the_clinic_table() {
        let roles = [UserRole::Admin, UserRole::Doctor, UserRole::Nurse, UserRole::Staff];
        let matrix = PermissionMatrix::global();
        for (permission, row) in EXPECTED {
            for (role, expected) in roles.iter().zip(row) {
                assert_eq!(
                    matrix.has_permission(role, &permission),
                    expected,
                    "{role} / {permission}"
                );
            }
        }
        let covered: HashSet<Permission> = EXPECTED.iter().map(|(p, _)| *p).collect();
        assert_eq!(covered.len(), Permission::ALL.len());
    }

    #[test]
    fn test_total_and_deterministic() {
        let matrix = PermissionMatrix::global();
        for role in UserRole::ALL {
            assert!(matrix.has_entry(&role));
            for permission in Permission::ALL {
                let first = matrix.has_permission(&role, &permission);
                let second = matrix.has_permission(&role, &permission);
                assert_eq!(first, second);
                assert_eq!(
                    matrix.has_permission_named(role.as_str(), permission.as_str()),
                    first
                );
            }
        }
    }

    #[test]
    fn test_unknown_names_are_denied() {
        let matrix = PermissionMatrix::global();
        assert!(!matrix.has_permission_named("Janitor", "ViewPatients"));
        assert!(!matrix.has_permission_named("admin", "ViewPatients"));
        assert!(!matrix.has_permission_named("Admin", "FlyHelicopter"));
    }

    #[test]
    fn test_missing_role_entry_is_empty() {
        let matrix =
            PermissionMatrix::from_grants([(UserRole::Admin, vec![Permission::ManageSystem])]);
        assert!(!matrix.has_entry(&UserRole::Nurse));
        assert!(matrix.permissions_for_role(&UserRole::Nurse).is_empty());
        assert!(!matrix.has_permission(&UserRole::Nurse, &Permission::ViewPatients));
    }
}
