use leptos::logging::warn;
use serde::{Deserialize, Serialize};

use crate::core::models::Column;

const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Top-level application settings, provided to every view as context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnSeed {
    pub id: String,
    pub title: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardConfig {
    /// Columns the board starts with (and returns to on reset).
    #[serde(default = "default_columns")]
    pub columns: Vec<ColumnSeed>,
    /// Colors offered when creating a column.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    /// Rows in the active projects table.
    #[serde(default = "default_active_limit")]
    pub active_limit: usize,
}

fn default_api_base_url() -> String {
    option_env!("BOARD_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

fn default_columns() -> Vec<ColumnSeed> {
    vec![
        ColumnSeed {
            id: "1".to_string(),
            title: "Fechamento".to_string(),
            color: "bg-purple-600".to_string(),
        },
        ColumnSeed {
            id: "2".to_string(),
            title: "Em execução".to_string(),
            color: "bg-orange-500".to_string(),
        },
    ]
}

fn default_palette() -> Vec<String> {
    [
        "bg-red-500",
        "bg-orange-500",
        "bg-yellow-500",
        "bg-green-500",
        "bg-teal-500",
        "bg-blue-500",
        "bg-indigo-500",
        "bg-purple-600",
        "bg-pink-500",
        "bg-rose-500",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
}

fn default_active_limit() -> usize {
    5
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            board: BoardConfig::default(),
            dashboard: DashboardConfig::default(),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            palette: default_palette(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            active_limit: default_active_limit(),
        }
    }
}

impl AppConfig {
    /// Parses a (possibly partial) JSON override; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: AppConfig = serde_json::from_str(json)?;
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Settings for this build: the `BOARD_CONFIG` JSON baked in at compile
    /// time, if any, over the defaults.
    pub fn load() -> Self {
        Self::with_override(option_env!("BOARD_CONFIG"))
    }

    /// A broken override is logged and ignored.
    pub fn with_override(json: Option<&str>) -> Self {
        let Some(json) = json.filter(|j| !j.trim().is_empty()) else {
            return Self::default();
        };
        Self::from_json(json).unwrap_or_else(|e| {
            warn!("ignoring BOARD_CONFIG: {}", e);
            Self::default()
        })
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl BoardConfig {
    pub fn seed_columns(&self) -> Vec<Column> {
        self.columns
            .iter()
            .map(|seed| Column::with_id(seed.id.clone(), seed.title.clone(), seed.color.clone()))
            .collect()
    }

    pub fn default_color(&self) -> String {
        self.palette
            .iter()
            .find(|c| c.as_str() == "bg-purple-600")
            .or_else(|| self.palette.first())
            .cloned()
            .unwrap_or_else(|| "bg-purple-600".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_board() {
        let config = AppConfig::default();
        let columns = config.board.seed_columns();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].id, "1");
        assert_eq!(columns[0].title, "Fechamento");
        assert_eq!(columns[1].color, "bg-orange-500");
        assert_eq!(config.board.palette.len(), 10);
        assert_eq!(config.dashboard.active_limit, 5);
        assert_eq!(config.board.default_color(), "bg-purple-600");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"api_base_url": "https://api.example.com/"}"#).unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.board, BoardConfig::default());
        assert_eq!(config.api_url("/projects"), "https://api.example.com/projects");
    }

    #[test]
    fn nested_override() {
        let config = AppConfig::from_json(
            r#"{"board": {"columns": [{"id": "x", "title": "Novo", "color": "bg-red-500"}]},
                "dashboard": {"active_limit": 3}}"#,
        )
        .unwrap();
        assert_eq!(config.board.columns.len(), 1);
        assert_eq!(config.board.palette.len(), 10);
        assert_eq!(config.dashboard.active_limit, 3);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(AppConfig::from_json("{not json").is_err());
    }

    #[test]
    fn override_falls_back_to_defaults() {
        assert_eq!(AppConfig::with_override(None), AppConfig::default());
        assert_eq!(AppConfig::with_override(Some("  ")), AppConfig::default());
        assert_eq!(AppConfig::with_override(Some("{broken")), AppConfig::default());

        let config = AppConfig::with_override(Some(r#"{"dashboard": {"active_limit": 8}}"#));
        assert_eq!(config.dashboard.active_limit, 8);
        assert_eq!(config.board, BoardConfig::default());
    }

    #[test]
    fn empty_palette_falls_back() {
        let board = BoardConfig {
            columns: vec![],
            palette: vec![],
        };
        assert_eq!(board.default_color(), "bg-purple-600");
    }
}
