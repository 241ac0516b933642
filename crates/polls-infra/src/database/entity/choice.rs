//! Choice entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "choices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub question_id: Uuid,
    pub choice_text: String,
    pub votes: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::question::Entity",
        from = "Column::QuestionId",
        to = "super::question::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Question,
}

impl Related<super::question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for polls_core::domain::Choice {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            question_id: model.question_id,
            choice_text: model.choice_text,
            votes: model.votes,
        }
    }
}

impl From<polls_core::domain::Choice> for ActiveModel {
    fn from(choice: polls_core::domain::Choice) -> Self {
        Self {
            id: Set(choice.id),
            question_id: Set(choice.question_id),
            choice_text: Set(choice.choice_text),
            votes: Set(choice.votes),
        }
    }
}
