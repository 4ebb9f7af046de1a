use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("Email is required")]
    MissingEmail,
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Password is required")]
    MissingPassword,
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), CredentialError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(CredentialError::MissingEmail);
    }
    if !email.contains('@') {
        return Err(CredentialError::InvalidEmail);
    }
    if password.is_empty() {
        return Err(CredentialError::MissingPassword);
    }
    Ok(())
}
