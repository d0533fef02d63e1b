use serde::{Deserialize, Serialize};

/// Body posted by the website's course and exam forms.
#[derive(Deserialize)]
pub struct LeadRequest {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(rename = "formData", default)]
    pub form_data: Option<FormData>,
}

/// Union of the fields both forms may send; which ones matter depends on the lead kind.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FormData {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub purpose: Option<String>,
    pub can_attend: Option<String>,
    pub level: Option<String>,
    pub plan_to_take: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadKind {
    Course,
    Exam,
}

impl LeadKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "course" => Some(LeadKind::Course),
            "exam" => Some(LeadKind::Exam),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadKind::Course => "course",
            LeadKind::Exam => "exam",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct CourseLead {
    pub name: String,
    pub phone: String,
    pub purpose: String,
    pub can_attend: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ExamLead {
    pub name: String,
    pub phone: String,
    pub level: String,
    pub plan_to_take: String,
    pub can_attend: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Lead {
    Course(CourseLead),
    Exam(ExamLead),
}

impl Lead {
    pub fn kind(&self) -> LeadKind {
        match self {
            Lead::Course(_) => LeadKind::Course,
            Lead::Exam(_) => LeadKind::Exam,
        }
    }
}

#[derive(Serialize)]
pub struct LeadResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
