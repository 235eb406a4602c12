use std::sync::Arc;

use crate::modules::event::application::use_cases::{
    manage_attendance::IAttendanceUseCase, manage_events::IEventsUseCase,
};

#[derive(Clone)]
pub struct EventUseCases {
    pub events: Arc<dyn IEventsUseCase + Send + Sync>,
    pub attendance: Arc<dyn IAttendanceUseCase + Send + Sync>,
}
