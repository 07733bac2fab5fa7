//! Cheese entity - Represents one catalogued cheese.
//!
//! Each cheese has a name, an optional country of origin, a firmness
//! classification, a free-text description, and a unique URL-friendly slug
//! assigned once at creation. The creator reference is nullable so that
//! removing an account leaves its cheeses in place.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Cheese database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cheeses")]
pub struct Model {
    /// Unique identifier for the cheese
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name (e.g., "Paski Sir", "Stracchino")
    pub name: String,
    /// URL-friendly identifier, derived from the name at creation and
    /// never recomputed afterwards - renaming a cheese keeps its URL
    #[sea_orm(unique)]
    pub slug: String,
    /// ISO 3166-1 alpha-2 code of the country of origin, None when unset
    pub country_of_origin: Option<String>,
    /// Free-text description, empty when the author left it blank
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Firmness classification as its wire value
    /// ("unspecified", "soft", "semi-soft", "semi-hard", "hard")
    pub firmness: String,
    /// Account that created the record, None once that account is removed
    pub creator_id: Option<i64>,
    /// When the cheese was created
    pub created_at: DateTime,
    /// When the cheese was last modified
    pub updated_at: DateTime,
}

impl Model {
    /// Canonical relative URL of this cheese's detail page.
    #[must_use]
    pub fn absolute_url(&self) -> String {
        crate::web::routes::detail_path(&self.slug)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Defines relationships between Cheese and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each cheese was created by at most one account
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
