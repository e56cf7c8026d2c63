use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    #[serde(rename = "novo")]
    New,
    #[serde(rename = "em negociação")]
    Negotiating,
    #[serde(rename = "imagem recebida")]
    ImageReceived,
    #[serde(rename = "em execução")]
    InProgress,
    #[serde(rename = "follow-up")]
    FollowUp,
    #[serde(rename = "finalizado")]
    Finished,
    #[serde(other)]
    Unknown,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::New => "Novo",
            ProjectStatus::Negotiating => "Em negociação",
            ProjectStatus::ImageReceived => "Imagem recebida",
            ProjectStatus::InProgress => "Em execução",
            ProjectStatus::FollowUp => "Follow-up",
            ProjectStatus::Finished => "Finalizado",
            ProjectStatus::Unknown => "Não definido",
        }
    }

    /// CSS modifier for the status badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress | ProjectStatus::FollowUp => "running",
            ProjectStatus::Finished => "done",
            ProjectStatus::Unknown => "unknown",
            ProjectStatus::New | ProjectStatus::Negotiating | ProjectStatus::ImageReceived => "pending",
        }
    }

    /// Statuses shown in the active projects table.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            ProjectStatus::New
                | ProjectStatus::Negotiating
                | ProjectStatus::ImageReceived
                | ProjectStatus::InProgress
                | ProjectStatus::FollowUp
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub client_id: u64,
    pub client_name: String,
    pub name: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: u64,
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}
