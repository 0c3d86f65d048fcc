//! 成绩包存储操作
//!
//! 所有状态流转都在单个事务内完成：对 (包ID, 预期状态) 做
//! compare-and-set，同事务追加审批历史。并发竞争的败者拿到
//! ConcurrentModification，包状态不会被写坏。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::approval_history;
use crate::entity::enrollments::Column as EnrollmentColumn;
use crate::entity::grade_components::{
    ActiveModel as GradeActiveModel, Column as GradeColumn, Entity as GradeComponents,
};
use crate::entity::quarter_packages::{ActiveModel, Column, Entity as QuarterPackages};
use crate::entity::student_feedback::{Column as FeedbackColumn, Entity as StudentFeedback};
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::errors::{Result, SRSystemError};
use crate::models::grades::entities::GradeComponentType;
use crate::models::packages::entities::{
    ApprovalAction, GradingPeriod, PackageStatus, QuarterPackage,
};
use crate::models::sections::entities::EnrollmentStatus;
use crate::models::users::entities::ActorContext;
use crate::services::grades::aggregate::compute_final;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

/// 按 (班级, 科目, 学期) 过滤成绩包
fn scope_condition(
    section_id: i64,
    subject_id: Option<i64>,
    period: GradingPeriod,
) -> sea_orm::Condition {
    let mut cond = sea_orm::Condition::all()
        .add(Column::SectionId.eq(section_id))
        .add(Column::GradingPeriod.eq(period.as_str()));
    cond = match subject_id {
        Some(subject_id) => cond.add(Column::SubjectId.eq(subject_id)),
        None => cond.add(Column::SubjectId.is_null()),
    };
    cond
}

/// 构造审批历史行（与状态流转同事务插入）
fn history_row(
    package_id: i64,
    action: ApprovalAction,
    actor: &ActorContext,
    remarks: Option<String>,
    now: i64,
) -> approval_history::ActiveModel {
    approval_history::ActiveModel {
        package_id: Set(package_id),
        action: Set(action.to_string()),
        actor_id: Set(actor.id),
        actor_role: Set(actor.role.to_string()),
        remarks: Set(remarks),
        created_at: Set(now),
        ..Default::default()
    }
}

impl SeaOrmStorage {
    /// 通过 ID 获取成绩包
    pub async fn get_package_by_id_impl(&self, package_id: i64) -> Result<Option<QuarterPackage>> {
        let result = QuarterPackages::find_by_id(package_id)
            .one(&self.db)
            .await
            .map_err(|e| SRSystemError::database_operation(format!("查询成绩包失败: {e}")))?;

        Ok(result.map(|m| m.into_package()))
    }

    /// 按 (班级, 科目, 学期) 获取成绩包
    pub async fn get_package_by_scope_impl(
        &self,
        section_id: i64,
        subject_id: Option<i64>,
        period: GradingPeriod,
    ) -> Result<Option<QuarterPackage>> {
        let result = QuarterPackages::find()
            .filter(scope_condition(section_id, subject_id, period))
            .one(&self.db)
            .await
            .map_err(|e| SRSystemError::database_operation(format!("查询成绩包失败: {e}")))?;

        Ok(result.map(|m| m.into_package()))
    }

    /// 获取成绩包，不存在则以 Draft 状态惰性创建
    ///
    /// 并发首次创建时唯一索引会拦下后写的一方，此时重查并返回已有行。
    pub async fn find_or_create_package_impl(
        &self,
        section_id: i64,
        subject_id: Option<i64>,
        period: GradingPeriod,
        owner_id: i64,
    ) -> Result<QuarterPackage> {
        if let Some(existing) = self
            .get_package_by_scope_impl(section_id, subject_id, period)
            .await?
        {
            return Ok(existing);
        }

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            section_id: Set(section_id),
            subject_id: Set(subject_id),
            grading_period: Set(period.to_string()),
            status: Set(PackageStatus::Draft.to_string()),
            remarks: Set(None),
            owner_id: Set(owner_id),
            submitted_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(created) => Ok(created.into_package()),
            Err(e) => {
                // 输给了并发的首次创建，重查一次
                if let Some(existing) = self
                    .get_package_by_scope_impl(section_id, subject_id, period)
                    .await?
                {
                    return Ok(existing);
                }
                Err(SRSystemError::database_operation(format!(
                    "创建成绩包失败: {e}"
                )))
            }
        }
    }

    /// 提交成绩包
    ///
    /// 单事务内完成：名册/成绩/评语的一致快照读取、完整性校验、
    /// 最终成绩重算落库、状态 CAS 流转、审批历史追加。
    /// 任何一步失败整体回滚，不存在半提交状态。
    pub async fn submit_package_impl(
        &self,
        package_id: i64,
        actor: &ActorContext,
    ) -> Result<QuarterPackage> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SRSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let outcome = Self::submit_package_in_txn(&txn, package_id, actor).await;

        match outcome {
            Ok(()) => {
                txn.commit()
                    .await
                    .map_err(|e| SRSystemError::database_operation(format!("提交事务失败: {e}")))?;
                self.get_package_by_id_impl(package_id).await?.ok_or_else(|| {
                    SRSystemError::not_found(format!("成绩包 {package_id} 不存在"))
                })
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn submit_package_in_txn<C: ConnectionTrait>(
        txn: &C,
        package_id: i64,
        actor: &ActorContext,
    ) -> Result<()> {
        let pkg = QuarterPackages::find_by_id(package_id)
            .one(txn)
            .await
            .map_err(|e| SRSystemError::database_operation(format!("查询成绩包失败: {e}")))?
            .ok_or_else(|| SRSystemError::not_found(format!("成绩包 {package_id} 不存在")))?;

        let current = pkg
            .status
            .parse::<PackageStatus>()
            .unwrap_or(PackageStatus::Draft);
        if !current.is_editable() {
            return Err(SRSystemError::invalid_transition(format!(
                "成绩包 {package_id} 当前状态为 {current}，仅 draft/returned 状态允许提交"
            )));
        }

        let period = pkg
            .grading_period
            .parse::<GradingPeriod>()
            .unwrap_or(GradingPeriod::Q1);

        // 同一事务内读取名册、成绩与评语，校验基于一致快照
        let roster = Students::find()
            .join(
                JoinType::InnerJoin,
                crate::entity::students::Relation::Enrollments.def(),
            )
            .filter(EnrollmentColumn::SectionId.eq(pkg.section_id))
            .filter(EnrollmentColumn::Status.eq(EnrollmentStatus::ACTIVE))
            .order_by_asc(StudentColumn::Id)
            .all(txn)
            .await
            .map_err(|e| SRSystemError::database_operation(format!("查询在读学生失败: {e}")))?;

        let mut grade_select = GradeComponents::find()
            .filter(GradeColumn::SectionId.eq(pkg.section_id))
            .filter(GradeColumn::GradingPeriod.eq(period.as_str()));
        grade_select = match pkg.subject_id {
            Some(subject_id) => grade_select.filter(GradeColumn::SubjectId.eq(subject_id)),
            None => grade_select.filter(GradeColumn::SubjectId.is_null()),
        };
        let components = grade_select
            .all(txn)
            .await
            .map_err(|e| SRSystemError::database_operation(format!("查询成绩分项失败: {e}")))?;

        let mut feedback_select = StudentFeedback::find()
            .filter(FeedbackColumn::SectionId.eq(pkg.section_id))
            .filter(FeedbackColumn::GradingPeriod.eq(period.as_str()));
        feedback_select = match pkg.subject_id {
            Some(subject_id) => feedback_select.filter(FeedbackColumn::SubjectId.eq(subject_id)),
            None => feedback_select.filter(FeedbackColumn::SubjectId.is_null()),
        };
        let feedback_rows = feedback_select
            .all(txn)
            .await
            .map_err(|e| SRSystemError::database_operation(format!("查询学生评语失败: {e}")))?;

        // 按学生聚合三个分项
        let mut scores: HashMap<i64, [Option<f64>; 3]> = HashMap::new();
        let mut existing_finals: HashMap<i64, i64> = HashMap::new();
        for row in &components {
            match row.component_type.parse::<GradeComponentType>() {
                Ok(GradeComponentType::Written) => {
                    scores.entry(row.student_id).or_default()[0] = Some(row.score)
                }
                Ok(GradeComponentType::Performance) => {
                    scores.entry(row.student_id).or_default()[1] = Some(row.score)
                }
                Ok(GradeComponentType::Exam) => {
                    scores.entry(row.student_id).or_default()[2] = Some(row.score)
                }
                Ok(GradeComponentType::Final) => {
                    existing_finals.insert(row.student_id, row.id);
                }
                Err(_) => {}
            }
        }
        let mut feedback_by_student: HashMap<i64, &str> = HashMap::new();
        for row in &feedback_rows {
            feedback_by_student.insert(row.student_id, row.content.as_str());
        }

        // 完整性校验：按学生ID顺序报告第一个不完整的学生，不允许部分提交
        for student in &roster {
            let triple = scores.get(&student.id).copied().unwrap_or_default();
            let missing = match triple {
                [None, _, _] => Some("written"),
                [_, None, _] => Some("performance"),
                [_, _, None] => Some("exam"),
                _ => None,
            };
            if let Some(component) = missing {
                return Err(SRSystemError::validation(format!(
                    "学生 {}(ID {}) 缺少 {component} 成绩，无法提交",
                    student.full_name, student.id
                )));
            }
            match feedback_by_student.get(&student.id) {
                Some(content) if !content.trim().is_empty() => {}
                _ => {
                    return Err(SRSystemError::validation(format!(
                        "学生 {}(ID {}) 缺少评语，无法提交",
                        student.full_name, student.id
                    )));
                }
            }
        }

        // 重算每个学生的最终成绩并落库（覆盖已有 final 行，含手工修正值）
        let now = chrono::Utc::now().timestamp();
        for student in &roster {
            let [written, performance, exam] =
                scores.get(&student.id).copied().unwrap_or_default();
            let final_score = compute_final(
                written.unwrap_or_default(),
                performance.unwrap_or_default(),
                exam.unwrap_or_default(),
            );

            match existing_finals.get(&student.id) {
                Some(&row_id) => {
                    let model = GradeActiveModel {
                        id: Set(row_id),
                        score: Set(final_score),
                        recorded_by: Set(actor.id),
                        updated_at: Set(now),
                        ..Default::default()
                    };
                    model.update(txn).await.map_err(|e| {
                        SRSystemError::database_operation(format!("更新最终成绩失败: {e}"))
                    })?;
                }
                None => {
                    let model = GradeActiveModel {
                        student_id: Set(student.id),
                        section_id: Set(pkg.section_id),
                        subject_id: Set(pkg.subject_id),
                        grading_period: Set(period.to_string()),
                        component_type: Set(GradeComponentType::Final.to_string()),
                        score: Set(final_score),
                        recorded_by: Set(actor.id),
                        created_at: Set(now),
                        updated_at: Set(now),
                        ..Default::default()
                    };
                    model.insert(txn).await.map_err(|e| {
                        SRSystemError::database_operation(format!("写入最终成绩失败: {e}"))
                    })?;
                }
            }
        }

        // CAS 流转到 Submitted
        let result = QuarterPackages::update_many()
            .col_expr(Column::Status, Expr::value(PackageStatus::Submitted.as_str()))
            .col_expr(Column::SubmittedAt, Expr::value(Some(now)))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(package_id))
            .filter(Column::Status.eq(current.as_str()))
            .exec(txn)
            .await
            .map_err(|e| SRSystemError::database_operation(format!("提交成绩包失败: {e}")))?;

        if result.rows_affected == 0 {
            return Err(SRSystemError::concurrent_modification(format!(
                "成绩包 {package_id} 已被并发修改（预期状态 {current}）"
            )));
        }

        history_row(package_id, ApprovalAction::Submit, actor, None, now)
            .insert(txn)
            .await
            .map_err(|e| SRSystemError::database_operation(format!("写入审批历史失败: {e}")))?;

        Ok(())
    }

    /// 通用审批流转（Approve / Return / Publish）
    ///
    /// 对 (包ID, 预期状态) 做 CAS：预期状态已被他人改走时返回
    /// ConcurrentModification，由服务层决定是否重读重试。
    #[allow(clippy::too_many_arguments)]
    pub async fn transition_package_impl(
        &self,
        package_id: i64,
        expected: PackageStatus,
        target: PackageStatus,
        action: ApprovalAction,
        actor: &ActorContext,
        remarks: Option<String>,
        clear_submitted_at: bool,
    ) -> Result<QuarterPackage> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SRSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let now = chrono::Utc::now().timestamp();

        let mut update = QuarterPackages::update_many()
            .col_expr(Column::Status, Expr::value(target.as_str()))
            .col_expr(Column::Remarks, Expr::value(remarks.clone()))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(package_id))
            .filter(Column::Status.eq(expected.as_str()));
        if clear_submitted_at {
            update = update.col_expr(Column::SubmittedAt, Expr::value(Option::<i64>::None));
        }

        let outcome: Result<()> = async {
            let result = update
                .exec(&txn)
                .await
                .map_err(|e| SRSystemError::database_operation(format!("流转成绩包失败: {e}")))?;

            if result.rows_affected == 0 {
                return Err(SRSystemError::concurrent_modification(format!(
                    "成绩包 {package_id} 不处于预期状态 {expected}，流转 {action} 未生效"
                )));
            }

            history_row(package_id, action, actor, remarks.clone(), now)
                .insert(&txn)
                .await
                .map_err(|e| SRSystemError::database_operation(format!("写入审批历史失败: {e}")))?;

            Ok(())
        }
        .await;

        match outcome {
            Ok(()) => {
                txn.commit()
                    .await
                    .map_err(|e| SRSystemError::database_operation(format!("提交事务失败: {e}")))?;
                self.get_package_by_id_impl(package_id).await?.ok_or_else(|| {
                    SRSystemError::not_found(format!("成绩包 {package_id} 不存在"))
                })
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }
}
