//! 成绩分项存储操作

use super::SeaOrmStorage;
use crate::entity::grade_components::{ActiveModel, Column, Entity as GradeComponents};
use crate::errors::{Result, SRSystemError};
use crate::models::{
    PaginationInfo,
    grades::{
        entities::GradeComponent,
        requests::{GradeListQuery, RecordGradeRequest},
        responses::GradeListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 录入/覆盖成绩分项
    ///
    /// (学生, 班级, 科目, 学期, 分项) 同键重写走更新，不产生重复行。
    pub async fn upsert_grade_component_impl(
        &self,
        recorded_by: i64,
        req: RecordGradeRequest,
    ) -> Result<GradeComponent> {
        let now = chrono::Utc::now().timestamp();

        let mut select = GradeComponents::find()
            .filter(Column::StudentId.eq(req.student_id))
            .filter(Column::SectionId.eq(req.section_id))
            .filter(Column::GradingPeriod.eq(req.grading_period.as_str()))
            .filter(Column::ComponentType.eq(req.component_type.as_str()));
        select = match req.subject_id {
            Some(subject_id) => select.filter(Column::SubjectId.eq(subject_id)),
            None => select.filter(Column::SubjectId.is_null()),
        };

        let existing = select
            .one(&self.db)
            .await
            .map_err(|e| SRSystemError::database_operation(format!("查询成绩分项失败: {e}")))?;

        let result = match existing {
            Some(row) => {
                let model = ActiveModel {
                    id: Set(row.id),
                    score: Set(req.score),
                    recorded_by: Set(recorded_by),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model
                    .update(&self.db)
                    .await
                    .map_err(|e| SRSystemError::database_operation(format!("更新成绩分项失败: {e}")))?
            }
            None => {
                let model = ActiveModel {
                    student_id: Set(req.student_id),
                    section_id: Set(req.section_id),
                    subject_id: Set(req.subject_id),
                    grading_period: Set(req.grading_period.to_string()),
                    component_type: Set(req.component_type.to_string()),
                    score: Set(req.score),
                    recorded_by: Set(recorded_by),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| SRSystemError::database_operation(format!("写入成绩分项失败: {e}")))?
            }
        };

        Ok(result.into_grade_component())
    }

    /// 分页列出成绩分项
    pub async fn list_grade_components_impl(
        &self,
        query: GradeListQuery,
    ) -> Result<GradeListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(20).clamp(1, 200) as u64;

        let mut select = GradeComponents::find()
            .filter(Column::SectionId.eq(query.section_id))
            .filter(Column::GradingPeriod.eq(query.grading_period.as_str()));

        select = match query.subject_id {
            Some(subject_id) => select.filter(Column::SubjectId.eq(subject_id)),
            None => select.filter(Column::SubjectId.is_null()),
        };

        // 学生筛选
        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        // 分项筛选
        if let Some(component_type) = query.component_type {
            select = select.filter(Column::ComponentType.eq(component_type.as_str()));
        }

        // 排序：先按学生再按分项，成绩单视图可以直接渲染
        select = select
            .order_by_asc(Column::StudentId)
            .order_by_asc(Column::ComponentType);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SRSystemError::database_operation(format!("查询成绩总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SRSystemError::database_operation(format!("查询成绩页数失败: {e}")))?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SRSystemError::database_operation(format!("查询成绩列表失败: {e}")))?;

        Ok(GradeListResponse {
            items: rows.into_iter().map(|m| m.into_grade_component()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
