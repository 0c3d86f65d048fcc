use std::sync::Arc;

use chrono::NaiveDate;

use crate::models::{
    attendance::{entities::AttendanceRecord, requests::AttendanceEntry},
    feedback::{entities::StudentFeedback, requests::RecordFeedbackRequest},
    grades::{
        entities::GradeComponent,
        requests::{GradeListQuery, RecordGradeRequest},
        responses::GradeListResponse,
    },
    notifications::{entities::Notification, requests::CreateNotificationRequest},
    packages::entities::{
        ApprovalAction, ApprovalHistoryEntry, GradingPeriod, PackageStatus, QuarterPackage,
    },
    sections::entities::{Section, Student},
    users::entities::{ActorContext, User},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户与角色
    // 通过ID获取教职工账号
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 获取审批执行者上下文（角色 + 班主任班级）
    async fn get_actor_context(&self, user_id: i64) -> Result<Option<ActorContext>>;

    /// 名册
    // 通过ID获取班级
    async fn get_section_by_id(&self, section_id: i64) -> Result<Option<Section>>;
    // 列出班级当前在读学生
    async fn list_active_students(&self, section_id: i64) -> Result<Vec<Student>>;

    /// 成绩包与审批流转
    // 通过ID获取成绩包
    async fn get_package_by_id(&self, package_id: i64) -> Result<Option<QuarterPackage>>;
    // 按 (班级, 科目, 学期) 获取成绩包
    async fn get_package_by_scope(
        &self,
        section_id: i64,
        subject_id: Option<i64>,
        period: GradingPeriod,
    ) -> Result<Option<QuarterPackage>>;
    // 获取成绩包，不存在则以 Draft 状态惰性创建
    async fn find_or_create_package(
        &self,
        section_id: i64,
        subject_id: Option<i64>,
        period: GradingPeriod,
        owner_id: i64,
    ) -> Result<QuarterPackage>;
    // 提交成绩包：完整性校验、重算最终成绩、状态流转、追加历史，单事务完成
    async fn submit_package(
        &self,
        package_id: i64,
        actor: &ActorContext,
    ) -> Result<QuarterPackage>;
    // 通用流转：对 (包ID, 预期状态) 做 compare-and-set，同事务追加历史
    async fn transition_package(
        &self,
        package_id: i64,
        expected: PackageStatus,
        target: PackageStatus,
        action: ApprovalAction,
        actor: &ActorContext,
        remarks: Option<String>,
        clear_submitted_at: bool,
    ) -> Result<QuarterPackage>;

    /// 成绩分项
    // 录入/覆盖成绩分项（同键 upsert）
    async fn upsert_grade_component(
        &self,
        recorded_by: i64,
        req: RecordGradeRequest,
    ) -> Result<GradeComponent>;
    // 分页列出成绩分项
    async fn list_grade_components(&self, query: GradeListQuery) -> Result<GradeListResponse>;

    /// 学生评语
    // 录入/覆盖学生评语（同键 upsert）
    async fn upsert_feedback(
        &self,
        recorded_by: i64,
        req: RecordFeedbackRequest,
    ) -> Result<StudentFeedback>;

    /// 考勤台账
    // 整班单日考勤写入（逐行 upsert，同键覆盖）
    async fn record_attendance_day(
        &self,
        recorded_by: i64,
        section_id: i64,
        date: NaiveDate,
        entries: &[AttendanceEntry],
    ) -> Result<Vec<AttendanceRecord>>;
    // 查询某班某日考勤
    async fn list_attendance_for_day(
        &self,
        section_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>>;

    /// 审批历史
    // 按时间升序列出包的全部审批历史
    async fn list_approval_history(&self, package_id: i64) -> Result<Vec<ApprovalHistoryEntry>>;

    /// 站内通知
    // 批量创建通知
    async fn create_notifications_batch(
        &self,
        reqs: Vec<CreateNotificationRequest>,
    ) -> Result<Vec<Notification>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
