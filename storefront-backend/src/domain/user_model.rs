// src/domain/user_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    #[sea_orm(unique)]
    pub email: String,

    pub email_verified: bool,

    #[sea_orm(nullable)]
    pub image: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::upload_model::Entity")]
    Uploads,

    #[sea_orm(has_one = "super::polar_customer_model::Entity")]
    PolarCustomer,

    #[sea_orm(has_many = "super::polar_subscription_model::Entity")]
    PolarSubscriptions,
}

impl Related<super::upload_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Uploads.def()
    }
}

impl Related<super::polar_customer_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PolarCustomer.def()
    }
}

impl Related<super::polar_subscription_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PolarSubscriptions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
