use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Completed,
        ProjectStatus::InProgress,
        ProjectStatus::Planned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Planned => "planned",
        }
    }

    /// Segment used in translation keys (`works.status.<key>`).
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::Planned => "planned",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub client: String,
    pub year: i32,
    pub status: ProjectStatus,
    pub work_types: Vec<String>,
    pub description: String,
}

/// Which page a lead was sent from. Decides the mail subject and which
/// fields are mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    Landing,
    Contact,
}

impl LeadSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSource::Landing => "landing",
            LeadSource::Contact => "contact",
        }
    }

    pub fn subject(&self) -> &'static str {
        match self {
            LeadSource::Landing => "Новая заявка: Главная страница",
            LeadSource::Contact => "Новая заявка: Контакты",
        }
    }

    pub fn requires_message(&self) -> bool {
        matches!(self, LeadSource::Contact)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Phone,
    Message,
}

impl LeadField {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Phone => "phone",
            LeadField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl LeadForm {
    /// First required field left blank, in form order.
    pub fn missing_field(&self, source: LeadSource) -> Option<LeadField> {
        if self.name.trim().is_empty() {
            return Some(LeadField::Name);
        }
        if self.phone.trim().is_empty() {
            return Some(LeadField::Phone);
        }
        if source.requires_message() && self.message.trim().is_empty() {
            return Some(LeadField::Message);
        }
        None
    }
}

/// Body accepted by the form relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadPayload {
    pub access_key: String,
    pub subject: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl LeadPayload {
    pub fn new(access_key: impl Into<String>, source: LeadSource, form: LeadForm) -> Self {
        Self {
            access_key: access_key.into(),
            subject: source.subject().to_string(),
            name: form.name,
            phone: form.phone,
            email: form.email,
            message: form.message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadOutcome {
    Sent,
    /// The server has no relay key.
    NotConfigured,
    /// The relay answered but did not accept the lead.
    Rejected,
    /// The relay could not be reached.
    Unreachable,
}
