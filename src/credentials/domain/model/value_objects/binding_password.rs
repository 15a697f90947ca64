use std::fmt;

use base64::{Engine, engine::general_purpose::URL_SAFE};
use rand::{RngCore, rngs::OsRng};

use crate::credentials::domain::model::enums::credentials_domain_error::CredentialsDomainError;

pub const PASSWORD_ENTROPY_BYTES: usize = 32;

#[derive(Clone, Eq, PartialEq)]
pub struct BindingPassword(String);

impl BindingPassword {
    pub fn generate() -> Result<Self, CredentialsDomainError> {
        let mut entropy = [0u8; PASSWORD_ENTROPY_BYTES];
        OsRng
            .try_fill_bytes(&mut entropy)
            .map_err(|e| CredentialsDomainError::PasswordGeneration(e.to_string()))?;

        Ok(Self(URL_SAFE.encode(entropy)))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BindingPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BindingPassword(***)")
    }
}
