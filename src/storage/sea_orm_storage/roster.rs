//! 名册存储操作（班级与在读学生）

use super::SeaOrmStorage;
use crate::entity::enrollments::{Column as EnrollmentColumn, Entity as Enrollments};
use crate::entity::sections::Entity as Sections;
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::errors::{Result, SRSystemError};
use crate::models::sections::entities::{EnrollmentStatus, Section, Student};
use sea_orm::{ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait};

impl SeaOrmStorage {
    /// 通过 ID 获取班级
    pub async fn get_section_by_id_impl(&self, section_id: i64) -> Result<Option<Section>> {
        let result = Sections::find_by_id(section_id)
            .one(&self.db)
            .await
            .map_err(|e| SRSystemError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_section()))
    }

    /// 列出班级当前在读学生（按学生ID升序）
    ///
    /// 提交完整性校验与考勤覆盖校验都以这份名单为准。
    pub async fn list_active_students_impl(&self, section_id: i64) -> Result<Vec<Student>> {
        let students = Students::find()
            .join(
                JoinType::InnerJoin,
                crate::entity::students::Relation::Enrollments.def(),
            )
            .filter(EnrollmentColumn::SectionId.eq(section_id))
            .filter(EnrollmentColumn::Status.eq(EnrollmentStatus::ACTIVE))
            .order_by_asc(StudentColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| SRSystemError::database_operation(format!("查询在读学生失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }
}
