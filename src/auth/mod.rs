mod role;

pub use role::*;

use crate::dto::{input::NotificationFilter, Audience, ProviderType};

pub fn is_vet(provider_type: Option<ProviderType>) -> bool {
    provider_type == Some(ProviderType::Vet)
}

pub fn is_shop(provider_type: Option<ProviderType>) -> bool {
    provider_type == Some(ProviderType::Shop)
}

pub fn is_groomer(provider_type: Option<ProviderType>) -> bool {
    provider_type == Some(ProviderType::Babysitter)
}

///
/// Selects notifications shown to the signed in account.
///
/// Admins see everything, providers see provider notifications
/// narrowed by their sub-role.
///
pub fn notification_filter_for(
    role: Role,
    provider_type: Option<ProviderType>,
) -> NotificationFilter {
    match role {
        Role::Admin => NotificationFilter::all(),
        Role::User => NotificationFilter::audience(Audience::User),
        Role::Provider => NotificationFilter {
            audience: Some(Audience::Provider),
            provider_type,
        },
    }
}

///
/// Audience of notifications created on behalf of the account
///
pub fn audience_for(role: Role) -> Audience {
    match role {
        Role::User => Audience::User,
        Role::Provider => Audience::Provider,
        Role::Admin => Audience::All,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn provider_predicates() {
        assert!(is_vet(Some(ProviderType::Vet)));
        assert!(!is_vet(Some(ProviderType::Shop)));
        assert!(!is_vet(None));

        assert!(is_shop(Some(ProviderType::Shop)));
        assert!(!is_shop(Some(ProviderType::Babysitter)));

        assert!(is_groomer(Some("groomer".parse().unwrap())));
        assert!(!is_groomer(Some(ProviderType::Vet)));
    }

    #[test]
    fn filter_for_admin_is_empty() {
        let filter = notification_filter_for(Role::Admin, None);

        assert!(filter.is_empty());
    }

    #[test]
    fn filter_for_user() {
        let filter = notification_filter_for(Role::User, Some(ProviderType::Vet));

        assert_eq!(filter, NotificationFilter::audience(Audience::User));
    }

    #[test]
    fn filter_for_provider_with_sub_role() {
        let filter = notification_filter_for(Role::Provider, Some(ProviderType::Shop));

        assert_eq!(filter, NotificationFilter::provider(ProviderType::Shop));
    }

    #[test]
    fn filter_for_provider_without_sub_role() {
        let filter = notification_filter_for(Role::Provider, None);

        assert_eq!(filter, NotificationFilter::audience(Audience::Provider));
    }

    #[test]
    fn audience_per_role() {
        assert_eq!(audience_for(Role::User), Audience::User);
        assert_eq!(audience_for(Role::Provider), Audience::Provider);
        assert_eq!(audience_for(Role::Admin), Audience::All);
    }
}
