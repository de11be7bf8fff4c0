#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
