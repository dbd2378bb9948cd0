use enumsync_core::{backed_enum, EnumHelpers};

backed_enum! {
    /// Account status of a user
    pub enum UserStatus {
        Active { name: "ACTIVE", value: "active" },
        Inactive { name: "INACTIVE", value: "inactive" },
        Pending { name: "PENDING", value: "pending" },
        Suspended { name: "SUSPENDED", value: "suspended" },
    }
}

impl EnumHelpers for UserStatus {
    fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "アクティブ",
            UserStatus::Inactive => "非アクティブ",
            UserStatus::Pending => "承認待ち",
            UserStatus::Suspended => "停止中",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumsync_core::{BackedEnum, EnumItem, EnumOption};

    fn item(value: &str, name: &str, label: &str) -> EnumItem {
        EnumItem {
            value: value.to_string(),
            name: name.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_to_array_returns_correct_structure() {
        assert_eq!(
            UserStatus::to_array(),
            vec![
                item("active", "ACTIVE", "アクティブ"),
                item("inactive", "INACTIVE", "非アクティブ"),
                item("pending", "PENDING", "承認待ち"),
                item("suspended", "SUSPENDED", "停止中"),
            ]
        );
    }

    #[test]
    fn test_get_options_returns_value_label_pairs() {
        let options: Vec<(String, String)> = UserStatus::get_options()
            .into_iter()
            .map(|EnumOption { value, label }| (value, label))
            .collect();
        assert_eq!(
            options,
            vec![
                ("active".to_string(), "アクティブ".to_string()),
                ("inactive".to_string(), "非アクティブ".to_string()),
                ("pending".to_string(), "承認待ち".to_string()),
                ("suspended".to_string(), "停止中".to_string()),
            ]
        );
    }

    #[test]
    fn test_values_names_labels() {
        assert_eq!(
            UserStatus::values(),
            vec!["active", "inactive", "pending", "suspended"]
        );
        assert_eq!(
            UserStatus::names(),
            vec!["ACTIVE", "INACTIVE", "PENDING", "SUSPENDED"]
        );
        assert_eq!(
            UserStatus::labels(),
            vec!["アクティブ", "非アクティブ", "承認待ち", "停止中"]
        );
    }

    #[test]
    fn test_stored_value_round_trip() {
        assert_eq!(UserStatus::from_value("pending"), Some(UserStatus::Pending));
        assert_eq!(UserStatus::Suspended.value(), "suspended");
        assert_eq!(UserStatus::Suspended.to_string(), "suspended");
    }
}
