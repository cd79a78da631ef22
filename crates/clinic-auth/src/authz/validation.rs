//! Startup validation of guards against the permission matrix.

use thiserror::Error;
use tracing::warn;

use clinic_core::error::AppError;
use clinic_entity::user::UserRole;

use crate::rbac::{Permission, PermissionMatrix};

use super::guard::{Guard, Requirement};

/// A mismatch between the guards in use and the permission matrix.
///
/// These are configuration bugs: they are found at startup or in tests and
/// stop the process, never reported per request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationDefect {
    /// A role has no matrix entry at all.
    #[error("role '{0}' has no entry in the permission matrix")]
    MissingRole(UserRole),
    /// A permission guard checks a permission that no role holds.
    #[error("guard '{guard}' requires '{permission}', which no role holds")]
    UngrantedPermission {
        /// The offending guard.
        guard: Guard,
        /// The permission nobody holds.
        permission: Permission,
    },
    /// A role guard admits nobody.
    #[error("guard '{0}' admits no role")]
    EmptyRoleSet(Guard),
}

/// Lists every defect between `guards` and `matrix`.
pub fn find_defects(matrix: &PermissionMatrix, guards: &[Guard]) -> Vec<ConfigurationDefect> {
    let mut defects: Vec<ConfigurationDefect> = UserRole::ALL
        .into_iter()
        .filter(|role| !matrix.has_entry(role))
        .map(ConfigurationDefect::MissingRole)
        .collect();

    for guard in guards {
        match guard.requirement() {
            Requirement::Authenticated => {}
            Requirement::AnyRole(set) if set.is_empty() => {
                defects.push(ConfigurationDefect::EmptyRoleSet(*guard));
            }
            Requirement::AnyRole(_) => {}
            Requirement::Permission(permission) => {
                if matrix.roles_with(&permission).is_empty() {
                    defects.push(ConfigurationDefect::UngrantedPermission {
                        guard: *guard,
                        permission,
                    });
                }
            }
        }
    }

    defects
}

/// Fails with a configuration error if any defect is found.
pub fn validate_guards(matrix: &PermissionMatrix, guards: &[Guard]) -> Result<(), AppError> {
    let defects = find_defects(matrix, guards);
    if defects.is_empty() {
        return Ok(());
    }

    for defect in &defects {
        warn!(%defect, "Authorization configuration defect");
    }

    let summary: Vec<String> = defects.iter().map(ToString::to_string).collect();
    Err(AppError::configuration(format!(
        "{} authorization defect(s): {}",
        defects.len(),
        summary.join("; ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_core::error::ErrorKind;

    #[test]
    fn test_standard_matrix_is_consistent() {
        assert!(find_defects(PermissionMatrix::global(), &Guard::catalog()).is_empty());
        assert!(validate_guards(PermissionMatrix::global(), &Guard::catalog()).is_ok());
    }

    #[test]
    fn test_missing_roles_reported() {
        let matrix = PermissionMatrix::from_grants([(UserRole::Admin, Permission::ALL)]);
        let defects = find_defects(&matrix, &[]);
        assert_eq!(
            defects,
            vec![
                ConfigurationDefect::MissingRole(UserRole::Doctor),
                ConfigurationDefect::MissingRole(UserRole::Nurse),
                ConfigurationDefect::MissingRole(UserRole::Staff),
            ]
        );
    }

    #[test]
    fn test_ungranted_permission_reported() {
        let matrix = PermissionMatrix::from_grants(
            UserRole::ALL.map(|role| (role, vec![Permission::ViewPatients])),
        );
        let guard = Guard::Permission(Permission::ManageSystem);
        let err = validate_guards(&matrix, &[Guard::AdminOnly, guard]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert!(err.message.contains("RequireManageSystem"));
        assert_eq!(
            find_defects(&matrix, &[guard]),
            vec![ConfigurationDefect::UngrantedPermission {
                guard,
                permission: Permission::ManageSystem,
            }]
        );
    }

    #[test]
    fn test_empty_grants_flag_every_permission_guard() {
        let matrix = PermissionMatrix::from_grants(
            UserRole::ALL.map(|role| (role, Vec::<Permission>::new())),
        );
        let defects = find_defects(&matrix, &Guard::catalog());
        assert_eq!(defects.len(), Permission::ALL.len());
    }
}
