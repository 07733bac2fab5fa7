//! User entity - Represents an account that may author cheese records.
//!
//! Accounts are seeded from config.toml at startup; the token column backs
//! the `session` cookie check on the create/update views.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the account
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Login name, unique across accounts
    #[sea_orm(unique)]
    pub username: String,
    /// Opaque token presented by authenticated requests
    #[sea_orm(unique)]
    pub token: String,
    /// When the account was created
    pub created_at: DateTime,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One account may have created many cheeses
    #[sea_orm(has_many = "super::cheese::Entity")]
    Cheeses,
}

impl Related<super::cheese::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cheeses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
