use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::preferences::use_cases::get_theme::GetThemeUseCase;
use business::domain::preferences::use_cases::toggle_theme::ToggleThemeUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::preferences::dto::ThemeResponse;
use crate::api::tags::ApiTags;

pub struct PreferencesApi {
    get_theme_use_case: Arc<dyn GetThemeUseCase>,
    toggle_theme_use_case: Arc<dyn ToggleThemeUseCase>,
}

impl PreferencesApi {
    pub fn new(
        get_theme_use_case: Arc<dyn GetThemeUseCase>,
        toggle_theme_use_case: Arc<dyn ToggleThemeUseCase>,
    ) -> Self {
        Self {
            get_theme_use_case,
            toggle_theme_use_case,
        }
    }
}

/// Preferences API
///
/// The theme flag, the single persisted piece of UI state.
#[OpenApi]
impl PreferencesApi {
    /// Get the theme
    #[oai(path = "/preferences/theme", method = "get", tag = "ApiTags::Preferences")]
    async fn get_theme(&self) -> GetThemeResponse {
        match self.get_theme_use_case.execute().await {
            Ok(theme) => GetThemeResponse::Ok(Json(ThemeResponse {
                theme: theme.into(),
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetThemeResponse::InternalError(json)
            }
        }
    }

    /// Toggle the theme
    ///
    /// Flips light/dark, persists the flag, and returns the new value.
    #[oai(
        path = "/preferences/theme/toggle",
        method = "post",
        tag = "ApiTags::Preferences"
    )]
    async fn toggle_theme(&self) -> ToggleThemeResponse {
        match self.toggle_theme_use_case.execute().await {
            Ok(theme) => ToggleThemeResponse::Ok(Json(ThemeResponse {
                theme: theme.into(),
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ToggleThemeResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetThemeResponse {
    #[oai(status = 200)]
    Ok(Json<ThemeResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ToggleThemeResponse {
    #[oai(status = 200)]
    Ok(Json<ThemeResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
