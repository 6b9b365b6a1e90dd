//! Training command handlers.

mod record_training_session;
mod update_training_notes;

pub use record_training_session::{RecordTrainingSessionCommand, RecordTrainingSessionHandler};
pub use update_training_notes::{UpdateTrainingNotesCommand, UpdateTrainingNotesHandler};
