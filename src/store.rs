use crate::types::Appointment;
use std::sync::{Arc, Mutex};

pub trait AppointmentBackend: Clone + Send + Sync + 'static {
    fn append(&self, appointment: Appointment);
    fn list(&self) -> Vec<Appointment>;
}

/// In-memory, insertion-ordered appointment store. The mutex serializes
/// appends from concurrent requests so `list` never sees a half-written
/// record.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAppointments {
    appointments: Arc<Mutex<Vec<Appointment>>>,
}

impl AppointmentBackend for InMemoryAppointments {
    fn append(&self, appointment: Appointment) {
        let mut appointments = self.appointments.lock().unwrap();
        appointments.push(appointment);
    }

    fn list(&self) -> Vec<Appointment> {
        self.appointments.lock().unwrap().clone()
    }
}
