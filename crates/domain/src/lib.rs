mod clock;
mod errors;
mod flash;
mod models;
mod submission;

pub use clock::{Clock, ManualClock, SystemClock};
pub use errors::{Field, ValidationError, MISSING_FIELDS_MESSAGE};
pub use flash::{Flash, FlashLevel, SUBMITTED_MESSAGE};
pub use models::{Comment, NewComment};
pub use submission::{SubmissionForm, ValidSubmission};
