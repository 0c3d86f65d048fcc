//! 学生评语存储操作

use super::SeaOrmStorage;
use crate::entity::student_feedback::{ActiveModel, Column, Entity as StudentFeedbackEntity};
use crate::errors::{Result, SRSystemError};
use crate::models::feedback::{entities::StudentFeedback, requests::RecordFeedbackRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 录入/覆盖学生评语（同键 upsert）
    pub async fn upsert_feedback_impl(
        &self,
        recorded_by: i64,
        req: RecordFeedbackRequest,
    ) -> Result<StudentFeedback> {
        let now = chrono::Utc::now().timestamp();

        let mut select = StudentFeedbackEntity::find()
            .filter(Column::StudentId.eq(req.student_id))
            .filter(Column::SectionId.eq(req.section_id))
            .filter(Column::GradingPeriod.eq(req.grading_period.as_str()));
        select = match req.subject_id {
            Some(subject_id) => select.filter(Column::SubjectId.eq(subject_id)),
            None => select.filter(Column::SubjectId.is_null()),
        };

        let existing = select
            .one(&self.db)
            .await
            .map_err(|e| SRSystemError::database_operation(format!("查询学生评语失败: {e}")))?;

        let result = match existing {
            Some(row) => {
                let model = ActiveModel {
                    id: Set(row.id),
                    content: Set(req.content),
                    recorded_by: Set(recorded_by),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model
                    .update(&self.db)
                    .await
                    .map_err(|e| SRSystemError::database_operation(format!("更新学生评语失败: {e}")))?
            }
            None => {
                let model = ActiveModel {
                    student_id: Set(req.student_id),
                    section_id: Set(req.section_id),
                    subject_id: Set(req.subject_id),
                    grading_period: Set(req.grading_period.to_string()),
                    content: Set(req.content),
                    recorded_by: Set(recorded_by),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| SRSystemError::database_operation(format!("写入学生评语失败: {e}")))?
            }
        };

        Ok(result.into_feedback())
    }
}
