//! 成绩分项实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "grade_components")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub section_id: i64,
    pub subject_id: Option<i64>,
    pub grading_period: String,
    pub component_type: String,
    pub score: f64,
    pub recorded_by: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::sections::Entity",
        from = "Column::SectionId",
        to = "super::sections::Column::Id"
    )]
    Section,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_grade_component(self) -> crate::models::grades::entities::GradeComponent {
        use crate::models::grades::entities::{GradeComponent, GradeComponentType};
        use crate::models::packages::entities::GradingPeriod;
        use chrono::{DateTime, Utc};

        GradeComponent {
            id: self.id,
            student_id: self.student_id,
            section_id: self.section_id,
            subject_id: self.subject_id,
            grading_period: self
                .grading_period
                .parse::<GradingPeriod>()
                .unwrap_or(GradingPeriod::Q1),
            component_type: self
                .component_type
                .parse::<GradeComponentType>()
                .unwrap_or(GradeComponentType::Written),
            score: self.score,
            recorded_by: self.recorded_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
