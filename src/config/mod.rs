use serde::{Deserialize, Serialize};
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub layout: LayoutConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            environment: "development".to_string(),
            rust_log: "seating_layout=debug,tower_http=debug".to_string(),
        }
    }
}

/// Геометрия схемы: минимальный холст и размеры блоков по умолчанию.
///
/// Размер сетки по умолчанию считается из количества рядов/колонок:
/// `columns * seat_pitch + 2 * block_padding` в ширину и
/// `rows * seat_pitch + 2 * block_padding + header_height` в высоту.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub min_canvas_width: f64,
    pub min_canvas_height: f64,
    pub seat_pitch: f64,
    pub block_padding: f64,
    pub header_height: f64,
    pub standing_width: f64,
    pub standing_height: f64,
    pub non_sellable_width: f64,
    pub non_sellable_height: f64,
    // Ограничение на разворачивание сетки в одном запросе
    pub max_grid_seats: u64,
    pub max_blocks: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_canvas_width: 400.0,
            min_canvas_height: 400.0,
            seat_pitch: 30.0,
            block_padding: 10.0,
            header_height: 24.0,
            standing_width: 200.0,
            standing_height: 150.0,
            non_sellable_width: 150.0,
            non_sellable_height: 100.0,
            max_grid_seats: 20_000,
            max_blocks: 2_000,
        }
    }
}

impl Config {
    /// Значения по умолчанию, поверх них переменные окружения с префиксом
    /// `SEATING_` (`SEATING_APP__PORT`, `SEATING_LAYOUT__MIN_CANVAS_WIDTH`).
    /// `RUST_LOG` перекрывает фильтр логов.
    pub fn from_env() -> Result<Self, ::config::ConfigError> {
        ::config::Config::builder()
            .add_source(::config::Config::try_from(&Config::default())?)
            .add_source(
                ::config::Environment::with_prefix("SEATING")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("app.rust_log", env::var("RUST_LOG").ok())?
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_canvas_floor() {
        let config = Config::default();
        assert_eq!(config.layout.min_canvas_width, 400.0);
        assert_eq!(config.layout.min_canvas_height, 400.0);
        assert_eq!(config.app.port, 8000);
    }

    #[test]
    fn defaults_survive_config_builder() {
        let built: Config = ::config::Config::builder()
            .add_source(::config::Config::try_from(&Config::default()).unwrap())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(built.layout, LayoutConfig::default());
        assert_eq!(built.app.host, "0.0.0.0");
    }
}
