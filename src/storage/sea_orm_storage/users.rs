//! 用户与角色存储操作

use super::SeaOrmStorage;
use crate::entity::sections::{Column as SectionColumn, Entity as Sections};
use crate::entity::users::Entity as Users;
use crate::errors::{Result, SRSystemError};
use crate::models::users::entities::{ActorContext, User, UserRole};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QuerySelect};

impl SeaOrmStorage {
    /// 通过 ID 获取教职工账号
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SRSystemError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 获取审批执行者上下文
    ///
    /// 角色取自 users 表，班主任班级通过 sections.adviser_id 反查得到。
    /// 一名教师最多担任一个班级的班主任。
    pub async fn get_actor_context_impl(&self, user_id: i64) -> Result<Option<ActorContext>> {
        let user = match self.get_user_by_id_impl(user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let advisory_section_id = if user.role == UserRole::Teacher {
            Sections::find()
                .filter(SectionColumn::AdviserId.eq(user_id))
                .select_only()
                .column(SectionColumn::Id)
                .into_tuple::<i64>()
                .one(&self.db)
                .await
                .map_err(|e| {
                    SRSystemError::database_operation(format!("查询班主任班级失败: {e}"))
                })?
        } else {
            None
        };

        Ok(Some(ActorContext {
            id: user.id,
            role: user.role,
            advisory_section_id,
        }))
    }
}
