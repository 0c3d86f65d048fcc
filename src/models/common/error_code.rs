use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 业务错误码，随 ApiResponse 下发给前端
//
// 前端只依赖 code 渲染提示文案，状态相关的判断一律以服务端
// 返回的包状态为准，不在前端各页面重复维护映射表。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1002,
    NotFound = 1003,
    InternalServerError = 1004,
    RateLimitExceeded = 1005,

    // 成绩包工作流
    PackageNotFound = 2000,
    InvalidTransition = 2001,
    PackageLocked = 2002,
    ConcurrentModification = 2003,
    IncompleteSubmission = 2004,
    RemarksRequired = 2005,
    PackagePermissionDenied = 2006,

    // 成绩与评语
    ScoreOutOfRange = 3000,
    FeedbackInvalid = 3001,

    // 考勤
    FutureDate = 4000,
    RosterMismatch = 4001,

    // 名册
    SectionNotFound = 5000,
    StudentNotFound = 5001,
    UserNotFound = 5002,
}
