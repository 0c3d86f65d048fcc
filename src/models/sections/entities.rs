use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct Section {
    // 班级ID
    pub id: i64,
    // 班级名称
    pub name: String,
    // 班主任ID
    pub adviser_id: i64,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct Subject {
    pub id: i64,
    pub name: String,
}

// 学生名册条目（学生无登录账号，由教务系统同步）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct Student {
    pub id: i64,
    pub full_name: String,
}

// 选课注册状态
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub enum EnrollmentStatus {
    Active,  // 在读
    Dropped, // 退课/转出
}

impl EnrollmentStatus {
    pub const ACTIVE: &'static str = "active";
    pub const DROPPED: &'static str = "dropped";
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrollmentStatus::Active => write!(f, "{}", EnrollmentStatus::ACTIVE),
            EnrollmentStatus::Dropped => write!(f, "{}", EnrollmentStatus::DROPPED),
        }
    }
}
