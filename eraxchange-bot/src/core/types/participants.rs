//! Who sent a message and where: [`User`] and [`Chat`].

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// `@username`, else the first name, else the numeric id. Used in log lines.
    pub fn display_name(&self) -> String {
        match (&self.username, &self.first_name) {
            (Some(u), _) => format!("@{}", u),
            (None, Some(f)) => f.clone(),
            (None, None) => self.id.to_string(),
        }
    }
}

/// Private chat, group or channel; replies go to `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: Option<&str>, first_name: Option<&str>) -> User {
        User {
            id: 42,
            username: username.map(String::from),
            first_name: first_name.map(String::from),
            last_name: None,
        }
    }

    #[test]
    fn test_display_name_prefers_username() {
        assert_eq!(user(Some("anna"), Some("Анна")).display_name(), "@anna");
        assert_eq!(user(None, Some("Анна")).display_name(), "Анна");
        assert_eq!(user(None, None).display_name(), "42");
    }
}
