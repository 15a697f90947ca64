use std::fmt;

pub const READ_WRITE_ROLE: &str = "readWrite";

#[derive(Clone, Eq, PartialEq)]
pub struct DatabaseUser {
    pub username: String,
    pub password: String,
    pub role: String,
}

impl DatabaseUser {
    pub fn read_write(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            role: READ_WRITE_ROLE.to_string(),
        }
    }
}

impl fmt::Debug for DatabaseUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseUser")
            .field("username", &self.username)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}
