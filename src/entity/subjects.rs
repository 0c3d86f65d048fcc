//! 科目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::quarter_packages::Entity")]
    QuarterPackages,
}

impl Related<super::quarter_packages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuarterPackages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_subject(self) -> crate::models::sections::entities::Subject {
        crate::models::sections::entities::Subject {
            id: self.id,
            name: self.name,
        }
    }
}
