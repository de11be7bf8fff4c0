#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
