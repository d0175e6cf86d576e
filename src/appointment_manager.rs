use crate::provider::{LineType, ProviderError, SmsProvider};
use crate::store::AppointmentBackend;
use crate::types::{Appointment, BookingRequest};
use chrono::{Duration, NaiveDateTime};

const MISSING_FIELDS: &str = "Please fill all required fields!";
const TOO_SOON: &str = "You can only book appointments that are at least 3 hours in the future!";
const BAD_DATETIME: &str = "Please provide a valid date and time!";
const BAD_PHONE_NUMBER: &str = "Please provide a valid phone number (digits only)!";
const NOT_MOBILE: &str = "You have entered a valid phone number, but it's not a mobile number! \
    Provide a mobile number so we can contact you via SMS.";

#[derive(Debug, Clone)]
pub enum BookingOutcome {
    Confirmed(Appointment),
    Rejected {
        request: BookingRequest,
        errors: String,
    },
}

/// Orchestrates a booking: validate the form, classify the phone number,
/// send the confirmation SMS, and only then commit the appointment.
#[derive(Clone)]
pub struct AppointmentManager<P: SmsProvider, S: AppointmentBackend> {
    provider: P,
    store: S,
    originator: String,
    country_code: String,
}

impl<P: SmsProvider, S: AppointmentBackend> AppointmentManager<P, S> {
    pub fn new(provider: P, store: S, originator: String, country_code: String) -> Self {
        Self {
            provider,
            store,
            originator,
            country_code,
        }
    }

    pub async fn book(&self, request: BookingRequest, now: NaiveDateTime) -> BookingOutcome {
        if [
            &request.name,
            &request.treatment,
            &request.number,
            &request.date,
            &request.time,
        ]
        .iter()
        .any(|field| field.trim().is_empty())
        {
            return Self::reject(request, MISSING_FIELDS);
        }

        let appointment_at = match parse_appointment_datetime(&request.date, &request.time) {
            Some(appointment_at) => appointment_at,
            None => return Self::reject(request, BAD_DATETIME),
        };

        // The extra 5 minutes keep the reminder instant (appointment - 3h)
        // strictly in the future at booking time.
        let earliest = now + Duration::hours(3) + Duration::minutes(5);
        if appointment_at < earliest {
            return Self::reject(request, TOO_SOON);
        }

        let number: u64 = match request.number.parse() {
            Ok(number) => number,
            Err(_) => return Self::reject(request, BAD_PHONE_NUMBER),
        };

        match self.dispatch(&request, number, appointment_at).await {
            Ok(Some(appointment)) => {
                self.store.append(appointment.clone());
                tracing::info!(
                    name = %appointment.name,
                    appointment_at = %appointment.appointment_at,
                    "appointment booked"
                );
                BookingOutcome::Confirmed(appointment)
            }
            Ok(None) => Self::reject(request, NOT_MOBILE),
            Err(err) => {
                tracing::warn!(error = %err, "provider call failed during booking");
                let errors = err.to_string();
                Self::reject(request, &errors)
            }
        }
    }

    /// Lookup plus SMS dispatch. `Ok(None)` means the number is valid but
    /// not a mobile line.
    async fn dispatch(
        &self,
        request: &BookingRequest,
        number: u64,
        appointment_at: NaiveDateTime,
    ) -> Result<Option<Appointment>, ProviderError> {
        let lookup = self.provider.lookup(number, &self.country_code).await?;
        if lookup.line_type != LineType::Mobile {
            return Ok(None);
        }

        let body = format!(
            "{}, here's a reminder that you have a {} scheduled for {}. See you soon!",
            request.name,
            request.treatment,
            appointment_at.format("%H:%M")
        );
        self.provider
            .send_message(&self.originator, &body, &[number])
            .await?;

        Ok(Some(Appointment {
            name: request.name.clone(),
            treatment: request.treatment.clone(),
            number: request.number.clone(),
            appointment_at,
            reminder_at: appointment_at - Duration::hours(3),
        }))
    }

    fn reject(request: BookingRequest, errors: &str) -> BookingOutcome {
        BookingOutcome::Rejected {
            request,
            errors: errors.into(),
        }
    }
}

fn parse_appointment_datetime(date: &str, time: &str) -> Option<NaiveDateTime> {
    let combined = format!("{date}T{time}");
    NaiveDateTime::parse_from_str(&combined, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(&combined, "%Y-%m-%dT%H:%M"))
        .ok()
}
