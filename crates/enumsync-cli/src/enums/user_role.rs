use enumsync_core::{backed_enum, EnumHelpers};

backed_enum! {
    /// Permission level of a user
    pub enum UserRole {
        User { name: "USER", value: "user" },
        Admin { name: "ADMIN", value: "admin" },
    }
}

impl UserRole {
    pub fn is_admin(self) -> bool {
        self == UserRole::Admin
    }

    pub fn is_user(self) -> bool {
        self == UserRole::User
    }
}

impl EnumHelpers for UserRole {
    fn label(&self) -> &'static str {
        match self {
            UserRole::User => "ユーザー",
            UserRole::Admin => "管理者",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_labels() {
        assert_eq!(UserRole::Admin.label(), "管理者");
        assert_eq!(UserRole::User.label(), "ユーザー");
    }

    #[test]
    fn test_role_check_methods() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::User.is_admin());
        assert!(UserRole::User.is_user());
        assert!(!UserRole::Admin.is_user());
    }

    #[test]
    fn test_role_deserializes_from_stored_value() {
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert!(role.is_admin());
        assert!(serde_json::from_str::<UserRole>("\"moderator\"").is_err());
    }
}
