use strum::{AsRefStr, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, EnumIter, sqlx::Type)]
#[strum(serialize_all = "snake_case")]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
pub enum Role {
    Tourist,
    ActivityProvider,
    EntryProvider,
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn is_provider(self) -> bool {
        matches!(self, Role::ActivityProvider | Role::EntryProvider)
    }

    /// Providers and admins manage booking lifecycles; tourists only
    /// create and cancel their own bookings.
    pub fn can_manage_bookings(self) -> bool {
        self.is_admin() || matches!(self, Role::ActivityProvider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_from_snake_case() {
        assert_eq!(
            "activity_provider".parse::<Role>().unwrap(),
            Role::ActivityProvider
        );
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
    }

    #[test]
    fn only_activity_provider_and_admin_manage_bookings() {
        assert!(Role::Admin.can_manage_bookings());
        assert!(Role::ActivityProvider.can_manage_bookings());
        assert!(!Role::EntryProvider.can_manage_bookings());
        assert!(!Role::Tourist.can_manage_bookings());
    }
}
