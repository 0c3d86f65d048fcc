//! 审批历史实体（只追加）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "approval_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub package_id: i64,
    pub action: String,
    pub actor_id: i64,
    pub actor_role: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub remarks: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quarter_packages::Entity",
        from = "Column::PackageId",
        to = "super::quarter_packages::Column::Id"
    )]
    Package,
}

impl Related<super::quarter_packages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Package.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_history_entry(self) -> crate::models::packages::entities::ApprovalHistoryEntry {
        use crate::models::packages::entities::{ApprovalAction, ApprovalHistoryEntry};
        use crate::models::users::entities::UserRole;
        use chrono::{DateTime, Utc};

        ApprovalHistoryEntry {
            id: self.id,
            package_id: self.package_id,
            action: self
                .action
                .parse::<ApprovalAction>()
                .unwrap_or(ApprovalAction::Submit),
            actor_id: self.actor_id,
            actor_role: self
                .actor_role
                .parse::<UserRole>()
                .unwrap_or(UserRole::Teacher),
            remarks: self.remarks,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
