//! AI-generated study plan.
//!
//! This model is independent from the manual [`Schedule`](super::Schedule):
//! sessions are free-form time ranges without identity or status, and the two
//! never reference each other.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of day entries a well-formed plan carries.
pub const PLAN_DAYS: usize = 7;

/// Complete weekly study plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct StudyPlan {
    pub urgent: Vec<UrgentTask>,
    pub days: Vec<PlanDay>,
    pub stats: PlanStats,
    pub tips: Vec<String>,
}

impl StudyPlan {
    /// Checks the structural rules serde cannot express.
    pub fn validate_shape(&self) -> Result<(), String> {
        if self.days.len() != PLAN_DAYS {
            return Err(format!(
                "expected {PLAN_DAYS} days, got {}",
                self.days.len()
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct UrgentTask {
    pub title: String,
    /// Due date as free text, e.g. "Thursday 23:59"
    pub due: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct PlanDay {
    /// Day name, e.g. "Monday"
    pub day: String,
    /// Display date, e.g. "Oct 15"
    pub date: String,
    pub sessions: Vec<Session>,
}

/// One time block of a plan day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Session {
    /// Time range as free text, e.g. "6:00 AM - 7:00 AM"
    pub time: String,
    #[serde(rename = "type")]
    pub kind: SessionKind,
    pub title: String,
    pub icon: String,
    /// Subject or topic; empty for non-study sessions
    #[serde(default)]
    pub focus: String,
}

impl Default for Session {
    /// Placeholder inserted by "add session".
    fn default() -> Self {
        Self {
            time: "09:00-10:00".to_string(),
            kind: SessionKind::Study,
            title: "New Session".to_string(),
            icon: "📚".to_string(),
            focus: "Add details here".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Class,
    Study,
    Work,
    Rest,
    Commute,
    Free,
}

impl SessionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKind::Class => "class",
            SessionKind::Study => "study",
            SessionKind::Work => "work",
            SessionKind::Rest => "rest",
            SessionKind::Commute => "commute",
            SessionKind::Free => "free",
        }
    }
}

impl std::str::FromStr for SessionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "class" => Ok(SessionKind::Class),
            "study" => Ok(SessionKind::Study),
            "work" => Ok(SessionKind::Work),
            "rest" => Ok(SessionKind::Rest),
            "commute" => Ok(SessionKind::Commute),
            "free" => Ok(SessionKind::Free),
            _ => Err(format!("Invalid session type: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanStats {
    pub total_hours: f64,
    pub subjects: Vec<Subject>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Subject {
    pub name: String,
    pub hours: f64,
    /// Hex colour, e.g. "#8B5CF6"
    pub color: String,
}

/// Partial update of a session; `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct SessionPatch {
    pub time: Option<String>,
    pub kind: Option<SessionKind>,
    pub title: Option<String>,
    pub icon: Option<String>,
    pub focus: Option<String>,
}

impl SessionPatch {
    pub fn is_empty(&self) -> bool {
        self.time.is_none()
            && self.kind.is_none()
            && self.title.is_none()
            && self.icon.is_none()
            && self.focus.is_none()
    }

    /// Applies the patch and returns a description of each change.
    pub fn apply(self, session: &mut Session) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(time) = self.time {
            changes.push(format!("Time set to {time}"));
            session.time = time;
        }
        if let Some(kind) = self.kind {
            changes.push(format!("Type set to {}", kind.as_str()));
            session.kind = kind;
        }
        if let Some(title) = self.title {
            changes.push(format!("Title set to {title}"));
            session.title = title;
        }
        if let Some(icon) = self.icon {
            changes.push(format!("Icon set to {icon}"));
            session.icon = icon;
        }
        if let Some(focus) = self.focus {
            changes.push("Focus updated".to_string());
            session.focus = focus;
        }
        changes
    }
}
