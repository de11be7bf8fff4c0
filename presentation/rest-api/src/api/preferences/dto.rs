use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::preferences::model::Theme;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum ThemeDto {
    #[oai(rename = "light")]
    Light,
    #[oai(rename = "dark")]
    Dark,
}

impl From<Theme> for ThemeDto {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => ThemeDto::Light,
            Theme::Dark => ThemeDto::Dark,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ThemeResponse {
    pub theme: ThemeDto,
}
