pub mod extractor;
pub mod file_magic;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod sql;
pub mod validate;

pub use extractor::{
    SafeAssignmentIdI64, SafeAttendanceIdI64, SafeCourseIdI64, SafeEnrollmentIdI64,
    SafeFacultyIdI64, SafeFeeIdI64, SafeFileToken, SafeGradeIdI64, SafeIDI64,
    SafeNotificationIdI64, SafeStudentIdI64,
};
pub use file_magic::validate_magic_bytes;
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::escape_like_pattern;
