use async_trait::async_trait;

use crate::domain::preferences::errors::PreferenceError;
use crate::domain::preferences::model::Theme;

#[async_trait]
pub trait ToggleThemeUseCase: Send + Sync {
    /// Flips the flag, persists it, and returns the new value.
    async fn execute(&self) -> Result<Theme, PreferenceError>;
}
