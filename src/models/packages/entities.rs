use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::users::entities::UserRole;

// 学期（固定四个季度）
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/package.ts")]
pub enum GradingPeriod {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl GradingPeriod {
    pub const Q1_STR: &'static str = "q1";
    pub const Q2_STR: &'static str = "q2";
    pub const Q3_STR: &'static str = "q3";
    pub const Q4_STR: &'static str = "q4";

    pub fn as_str(&self) -> &'static str {
        match self {
            GradingPeriod::Q1 => Self::Q1_STR,
            GradingPeriod::Q2 => Self::Q2_STR,
            GradingPeriod::Q3 => Self::Q3_STR,
            GradingPeriod::Q4 => Self::Q4_STR,
        }
    }
}

impl<'de> Deserialize<'de> for GradingPeriod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<GradingPeriod>().map_err(|_| {
            serde::de::Error::custom(format!("无效的学期: '{s}'. 支持的学期: q1, q2, q3, q4"))
        })
    }
}

impl std::fmt::Display for GradingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GradingPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::Q1_STR => Ok(GradingPeriod::Q1),
            Self::Q2_STR => Ok(GradingPeriod::Q2),
            Self::Q3_STR => Ok(GradingPeriod::Q3),
            Self::Q4_STR => Ok(GradingPeriod::Q4),
            _ => Err(format!("Invalid grading period: {s}")),
        }
    }
}

// 成绩包状态（唯一的状态类型，所有页面/接口共用）
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/package.ts")]
pub enum PackageStatus {
    Draft,            // 草稿，可编辑
    Submitted,        // 已提交，待审
    Returned,         // 已退回，可编辑后重新提交
    Approved,         // 已审核通过
    ForwardedToAdmin, // 班主任审核后自动转交教务
    Published,        // 已发布，终态
}

impl PackageStatus {
    pub const DRAFT: &'static str = "draft";
    pub const SUBMITTED: &'static str = "submitted";
    pub const RETURNED: &'static str = "returned";
    pub const APPROVED: &'static str = "approved";
    pub const FORWARDED_TO_ADMIN: &'static str = "forwarded_to_admin";
    pub const PUBLISHED: &'static str = "published";

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageStatus::Draft => Self::DRAFT,
            PackageStatus::Submitted => Self::SUBMITTED,
            PackageStatus::Returned => Self::RETURNED,
            PackageStatus::Approved => Self::APPROVED,
            PackageStatus::ForwardedToAdmin => Self::FORWARDED_TO_ADMIN,
            PackageStatus::Published => Self::PUBLISHED,
        }
    }

    /// 底层成绩/评语/考勤是否允许编辑
    pub fn is_editable(&self) -> bool {
        matches!(self, PackageStatus::Draft | PackageStatus::Returned)
    }
}

impl<'de> Deserialize<'de> for PackageStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<PackageStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的成绩包状态: '{s}'. 支持的状态: draft, submitted, returned, approved, forwarded_to_admin, published"
            ))
        })
    }
}

impl std::fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PackageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::DRAFT => Ok(PackageStatus::Draft),
            Self::SUBMITTED => Ok(PackageStatus::Submitted),
            Self::RETURNED => Ok(PackageStatus::Returned),
            Self::APPROVED => Ok(PackageStatus::Approved),
            Self::FORWARDED_TO_ADMIN => Ok(PackageStatus::ForwardedToAdmin),
            Self::PUBLISHED => Ok(PackageStatus::Published),
            _ => Err(format!("Invalid package status: {s}")),
        }
    }
}

// 审批动作，写入审批历史
//
// 班主任审批触发的自动转交记录为 Approve，路由结果体现在包状态上，
// Forward 仅用于历史数据的兼容展示。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/package.ts")]
pub enum ApprovalAction {
    Submit,
    Approve,
    Return,
    Forward,
    Publish,
}

impl ApprovalAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalAction::Submit => "submit",
            ApprovalAction::Approve => "approve",
            ApprovalAction::Return => "return",
            ApprovalAction::Forward => "forward",
            ApprovalAction::Publish => "publish",
        }
    }
}

impl<'de> Deserialize<'de> for ApprovalAction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<ApprovalAction>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的审批动作: '{s}'. 支持的动作: submit, approve, return, forward, publish"
            ))
        })
    }
}

impl std::fmt::Display for ApprovalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ApprovalAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submit" => Ok(ApprovalAction::Submit),
            "approve" => Ok(ApprovalAction::Approve),
            "return" => Ok(ApprovalAction::Return),
            "forward" => Ok(ApprovalAction::Forward),
            "publish" => Ok(ApprovalAction::Publish),
            _ => Err(format!("Invalid approval action: {s}")),
        }
    }
}

// 季度成绩包
//
// 每个 (班级, 科目, 学期) 只有一个成绩包；subject_id 为空表示
// 班级整体包（考勤等非科目数据挂在它上面）。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/package.ts")]
pub struct QuarterPackage {
    pub id: i64,
    pub section_id: i64,
    pub subject_id: Option<i64>,
    pub grading_period: GradingPeriod,
    pub status: PackageStatus,
    // 最近一次审批动作附带的备注
    pub remarks: Option<String>,
    // 负责教师
    pub owner_id: i64,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 审批历史条目（只追加，不修改不删除）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/package.ts")]
pub struct ApprovalHistoryEntry {
    pub id: i64,
    pub package_id: i64,
    pub action: ApprovalAction,
    pub actor_id: i64,
    pub actor_role: UserRole,
    pub remarks: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
