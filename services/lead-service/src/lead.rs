use chrono::{DateTime, Duration, Utc};

use crate::error::LeadError;
use crate::labels::{attendance_label, plan_label, purpose_label};
use crate::models::{CourseLead, ExamLead, FormData, Lead, LeadKind, LeadRequest};
use crate::phone;
use crate::sanitize::escape_html;

// Asia/Tashkent has been UTC+05:00 without DST since 1992.
const TASHKENT_UTC_OFFSET_HOURS: i64 = 5;

/// Notification text ready for the relay.
#[derive(Debug)]
pub struct FormattedMessage {
    pub kind: LeadKind,
    pub text: String,
}

pub fn parse_request(body: &[u8]) -> Result<LeadRequest, LeadError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(LeadError::invalid_body("Request body is required"));
    }
    // A literal `null` carries no submission either.
    serde_json::from_slice::<Option<LeadRequest>>(body)
        .map_err(|err| LeadError::InvalidBody {
            reason: "Invalid request body",
            details: Some(err.to_string()),
        })?
        .ok_or_else(|| LeadError::invalid_body("Request body is required"))
}

/// Validates a submission and renders its notification in one step.
pub fn process(request: LeadRequest, at: DateTime<Utc>) -> Result<FormattedMessage, LeadError> {
    let lead = validate(request)?;
    Ok(FormattedMessage {
        kind: lead.kind(),
        text: format_message(&lead, at),
    })
}

pub fn validate(request: LeadRequest) -> Result<Lead, LeadError> {
    let kind = non_empty(request.kind);
    let (kind, form) = match (kind, request.form_data) {
        (Some(kind), Some(form)) => (kind, form),
        _ => return Err(LeadError::MissingFields("type or formData")),
    };

    let FormData {
        name,
        phone,
        purpose,
        can_attend,
        level,
        plan_to_take,
    } = form;
    let (name, phone) = match (non_empty(name), non_empty(phone)) {
        (Some(name), Some(phone)) => (name, phone),
        _ => return Err(LeadError::MissingFields("name or phone")),
    };

    let kind = LeadKind::parse(&kind)
        .ok_or_else(|| LeadError::invalid_body("Unknown submission type"))?;

    if !phone::is_valid(&phone) {
        return Err(LeadError::InvalidPhoneFormat);
    }

    let lead = match kind {
        LeadKind::Course => Lead::Course(CourseLead {
            name,
            phone,
            purpose: purpose.unwrap_or_default(),
            can_attend: can_attend.unwrap_or_default(),
        }),
        LeadKind::Exam => Lead::Exam(ExamLead {
            name,
            phone,
            level: level.unwrap_or_default(),
            plan_to_take: plan_to_take.unwrap_or_default(),
            can_attend: can_attend.unwrap_or_default(),
        }),
    };
    Ok(lead)
}

pub fn format_message(lead: &Lead, at: DateTime<Utc>) -> String {
    let timestamp = format_timestamp(at);
    match lead {
        Lead::Course(course) => format!(
            "🎓 Yangi kurs so'rovi\n\n\
             👤 Ism: {}\n\
             📱 Tel: {}\n\
             🎯 Maqsad: {}\n\
             ✅ Qatnashi: {}\n\n\
             📅 Vaqt: {}",
            escape_html(&course.name),
            escape_html(&course.phone),
            escape_html(purpose_label(&course.purpose)),
            escape_html(attendance_label(&course.can_attend)),
            timestamp,
        ),
        Lead::Exam(exam) => format!(
            "📝 Yangi imtihon so'rovi\n\n\
             👤 Ism: {}\n\
             📱 Tel: {}\n\
             📊 Daraja: {}\n\
             ✅ Reja: {}\n\
             🏃 Qatnashi: {}\n\n\
             📅 Vaqt: {}",
            escape_html(&exam.name),
            escape_html(&exam.phone),
            escape_html(&exam.level),
            escape_html(plan_label(&exam.plan_to_take)),
            escape_html(attendance_label(&exam.can_attend)),
            timestamp,
        ),
    }
}

/// Tashkent wall-clock time in the uz-UZ short form, e.g. `16/10/2026, 14:05`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    let local = at.naive_utc() + Duration::hours(TASHKENT_UTC_OFFSET_HOURS);
    local.format("%d/%m/%Y, %H:%M").to_string()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
