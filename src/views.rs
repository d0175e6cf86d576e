use crate::types::{Appointment, BookingRequest};
use chrono::{Duration, NaiveDateTime};

/// Data handed to the booking form page. On the first visit the date and
/// time are pre-filled 3:10 hours ahead to simplify testing input.
#[derive(Debug, Clone, Default)]
pub struct FormModel {
    pub name: String,
    pub treatment: String,
    pub number: String,
    pub date: String,
    pub time: String,
    pub errors: Option<String>,
}

impl FormModel {
    pub fn suggested(now: NaiveDateTime) -> Self {
        let future_time = now + Duration::hours(3) + Duration::minutes(10);
        Self {
            date: future_time.format("%Y-%m-%d").to_string(),
            time: future_time.format("%H:%M:%S").to_string(),
            ..Self::default()
        }
    }

    pub fn echo(request: BookingRequest, errors: String) -> Self {
        Self {
            name: request.name,
            treatment: request.treatment,
            number: request.number,
            date: request.date,
            time: request.time,
            errors: Some(errors),
        }
    }
}

fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{title}</title></head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

fn errors_banner(errors: Option<&str>) -> String {
    match errors {
        Some(errors) => format!("<p class=\"errors\">{}</p>\n", escape(errors)),
        None => String::new(),
    }
}

pub fn form_page(model: &FormModel) -> String {
    let body = format!(
        "<h1>Book an appointment</h1>\n{banner}\
        <form method=\"post\" action=\"/book\">\n\
        <label>Name <input name=\"name\" value=\"{name}\"></label><br>\n\
        <label>Treatment <input name=\"treatment\" value=\"{treatment}\"></label><br>\n\
        <label>Mobile number <input name=\"number\" value=\"{number}\"></label><br>\n\
        <label>Date <input name=\"date\" type=\"date\" value=\"{date}\"></label><br>\n\
        <label>Time <input name=\"time\" type=\"time\" step=\"1\" value=\"{time}\"></label><br>\n\
        <button type=\"submit\">Book appointment</button>\n\
        </form>",
        banner = errors_banner(model.errors.as_deref()),
        name = escape(&model.name),
        treatment = escape(&model.treatment),
        number = escape(&model.number),
        date = escape(&model.date),
        time = escape(&model.time),
    );
    page("Book an appointment", &body)
}

pub fn confirmation_page(appointment: &Appointment) -> String {
    let body = format!(
        "<h1>Appointment confirmed</h1>\n\
        <p>Thanks {name}, your {treatment} is booked for {appointment_at}.</p>\n\
        <p>We will remind you at {reminder_at}.</p>",
        name = escape(&appointment.name),
        treatment = escape(&appointment.treatment),
        appointment_at = appointment.appointment_at.format("%Y-%m-%d %H:%M"),
        reminder_at = appointment.reminder_at.format("%Y-%m-%d %H:%M"),
    );
    page("Appointment confirmed", &body)
}

pub fn verify_success_page() -> String {
    page("Verified", "<h1>Verified!</h1>\n<p>Your code was correct.</p>")
}

pub fn verify_retry_page(errors: &str) -> String {
    let body = format!(
        "<h1>Verify your code</h1>\n{banner}\
        <form method=\"post\" action=\"/step3\">\n\
        <label>Verification id <input name=\"id\"></label><br>\n\
        <label>Code <input name=\"token\"></label><br>\n\
        <button type=\"submit\">Verify</button>\n\
        </form>",
        banner = errors_banner(Some(errors)),
    );
    page("Verify your code", &body)
}
