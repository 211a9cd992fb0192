//! 业务错误码
//!
//! 前两位对应 HTTP 状态码族，后两位为业务细分。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 400 请求错误
    BadRequest = 40000,

    // 401 认证
    Unauthorized = 40100,
    AuthFailed = 40101,
    RegisterFailed = 40102,

    // 403 授权
    Forbidden = 40300,
    CoursePermissionDenied = 40301,
    CanNotDeleteCurrentUser = 40302,

    // 404 资源不存在
    NotFound = 40400,
    UserNotFound = 40401,
    StudentNotFound = 40402,
    FacultyNotFound = 40403,
    CourseNotFound = 40404,
    EnrollmentNotFound = 40405,
    AssignmentNotFound = 40406,
    GradeNotFound = 40407,
    FeeNotFound = 40408,
    DocumentNotFound = 40409,
    NotificationNotFound = 40410,

    // 409 冲突
    UserAlreadyExists = 40901,
    UserNameAlreadyExists = 40902,
    UserEmailAlreadyExists = 40903,
    RollNumberAlreadyExists = 40904,
    EmployeeIdAlreadyExists = 40905,
    CourseCodeAlreadyExists = 40906,
    AlreadyEnrolled = 40907,

    // 413/415 文件上传
    FileSizeExceeded = 41301,
    FileTypeNotAllowed = 41501,

    // 422 字段校验
    UserNameInvalid = 42201,
    UserEmailInvalid = 42202,
    UserPasswordInvalid = 42203,
    ScoreOutOfRange = 42204,
    PaymentExceedsBalance = 42205,
    DueDateInPast = 42206,

    // 429 限流
    RateLimitExceeded = 42900,

    // 500 服务端错误
    InternalServerError = 50000,
    FileUploadFailed = 50001,

    // 503 外部依赖
    AiProviderUnavailable = 50301,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 40100);
        assert_eq!(ErrorCode::StudentNotFound as i32, 40402);
        assert_eq!(ErrorCode::AlreadyEnrolled as i32, 40907);
        assert_eq!(ErrorCode::AiProviderUnavailable as i32, 50301);
    }
}
