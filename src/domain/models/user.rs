use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
    pub phone: i64,
    pub created_at: DateTime<Utc>,
}

/// Data for a user that has not been stored yet.
///
/// `id` is optional: when absent the store assigns the next free one.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
    pub phone: i64,
    pub created_at: DateTime<Utc>,
}

/// Full replacement of a stored user's editable fields.
///
/// `created_at` is only overwritten when provided.
#[derive(Debug, Clone)]
pub struct UserChanges {
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
    pub phone: i64,
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn apply(&mut self, changes: UserChanges) {
        self.first_name = changes.first_name;
        self.last_name = changes.last_name;
        self.address = changes.address;
        self.phone = changes.phone;
        if let Some(created_at) = changes.created_at {
            self.created_at = created_at;
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn ana() -> User {
        User {
            id: 20,
            first_name: "Ana".to_string(),
            last_name: "Ruiz".to_string(),
            address: Some("Calle Mayor 1".to_string()),
            phone: 600111222,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn apply_replaces_every_editable_field() {
        let mut user = ana();
        let created_at = user.created_at;

        user.apply(UserChanges {
            first_name: "Ana Maria".to_string(),
            last_name: "Ruiz Soto".to_string(),
            address: None,
            phone: 600999888,
            created_at: None,
        });

        assert_eq!(user.id, 20);
        assert_eq!(user.first_name, "Ana Maria");
        assert_eq!(user.last_name, "Ruiz Soto");
        assert_eq!(user.address, None);
        assert_eq!(user.phone, 600999888);
        assert_eq!(user.created_at, created_at);
    }

    #[test]
    fn apply_overwrites_created_at_when_given() {
        let mut user = ana();
        let earlier = user.created_at - Duration::days(3);

        user.apply(UserChanges {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            address: user.address.clone(),
            phone: user.phone,
            created_at: Some(earlier),
        });

        assert_eq!(user.created_at, earlier);
    }
}
