//! Cheese business logic - create, list, look up, and update catalog records.
//!
//! All functions are async and return Result types for error handling. Slug
//! assignment happens exactly once, inside `create_cheese`; updates never
//! touch it, so a cheese keeps its URL across renames.

use crate::{
    core::{country, slug::unique_slug},
    entities::{Cheese, User, cheese, user},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use std::collections::HashSet;

/// Upper bound on cheese names.
pub const MAX_NAME_LEN: usize = 255;

/// Firmness classification of a cheese.
///
/// Persisted as its wire value (`as_str`); the label is what pages display.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Firmness {
    /// Firmness not recorded
    #[default]
    Unspecified,
    /// Soft cheeses (Brie, Stracchino)
    Soft,
    /// Semi-soft cheeses (Havarti)
    SemiSoft,
    /// Semi-hard cheeses (Gouda)
    SemiHard,
    /// Hard cheeses (Parmesan, Paski Sir)
    Hard,
}

impl Firmness {
    /// Every firmness value, in form-display order.
    pub const ALL: [Self; 5] = [
        Self::Unspecified,
        Self::Soft,
        Self::SemiSoft,
        Self::SemiHard,
        Self::Hard,
    ];

    /// The value stored in the database and submitted by forms.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::Soft => "soft",
            Self::SemiSoft => "semi-soft",
            Self::SemiHard => "semi-hard",
            Self::Hard => "hard",
        }
    }

    /// Human-readable label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unspecified => "Unspecified",
            Self::Soft => "Soft",
            Self::SemiSoft => "Semi-Soft",
            Self::SemiHard => "Semi-Hard",
            Self::Hard => "Hard",
        }
    }

    /// Parse a stored or submitted value, None for anything outside the five.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }
}

/// Fields accepted when creating a cheese.
#[derive(Debug, Clone)]
pub struct NewCheese {
    /// Name of the cheese
    pub name: String,
    /// Free-text description, may be empty
    pub description: String,
    /// Firmness classification
    pub firmness: Firmness,
    /// Optional ISO 3166-1 alpha-2 country code
    pub country_of_origin: Option<String>,
    /// Account creating the record
    pub creator_id: Option<i64>,
}

/// Fields accepted when updating a cheese. The slug is deliberately absent.
#[derive(Debug, Clone)]
pub struct CheeseUpdate {
    /// New name (the slug does not follow it)
    pub name: String,
    /// New description
    pub description: String,
    /// New firmness classification
    pub firmness: Firmness,
    /// New country code, None to clear
    pub country_of_origin: Option<String>,
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            field: "name",
            message: "Cheese name cannot be empty".to_string(),
        });
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(Error::Validation {
            field: "name",
            message: format!("Cheese name cannot exceed {MAX_NAME_LEN} characters"),
        });
    }
    Ok(())
}

fn validate_country(code: Option<&str>) -> Result<()> {
    match code {
        Some(code) if !country::is_valid(code) => Err(Error::Validation {
            field: "country_of_origin",
            message: format!("Unknown country code '{code}'"),
        }),
        _ => Ok(()),
    }
}

/// Creates a new cheese, assigning its slug from the name.
///
/// The name is validated (non-empty after trimming, bounded length) and the
/// country code checked against the fixed table. The slug is derived from
/// the trimmed name and disambiguated against every slug already stored, so
/// two cheeses with the same name end up with distinct URLs.
pub async fn create_cheese(db: &DatabaseConnection, input: NewCheese) -> Result<cheese::Model> {
    validate_name(&input.name)?;
    validate_country(input.country_of_origin.as_deref())?;

    let existing: HashSet<String> = Cheese::find()
        .select_only()
        .column(cheese::Column::Slug)
        .into_tuple::<String>()
        .all(db)
        .await?
        .into_iter()
        .collect();
    let slug = unique_slug(&input.name, &existing);

    let now = chrono::Utc::now().naive_utc();
    let cheese = cheese::ActiveModel {
        name: Set(input.name.trim().to_string()),
        slug: Set(slug),
        country_of_origin: Set(input.country_of_origin),
        description: Set(input.description),
        firmness: Set(input.firmness.as_str().to_string()),
        creator_id: Set(input.creator_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let result = cheese.insert(db).await?;
    tracing::info!(slug = %result.slug, "created cheese '{}'", result.name);
    Ok(result)
}

/// Retrieves every cheese in insertion order.
pub async fn list_cheeses(db: &DatabaseConnection) -> Result<Vec<cheese::Model>> {
    Cheese::find()
        .order_by_asc(cheese::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a cheese by its slug, returning None when it does not exist.
pub async fn get_cheese_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<Option<cheese::Model>> {
    Cheese::find()
        .filter(cheese::Column::Slug.eq(slug))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Detail lookup: the cheese together with its creator account, if any.
pub async fn get_cheese_with_creator(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<Option<(cheese::Model, Option<user::Model>)>> {
    Cheese::find()
        .filter(cheese::Column::Slug.eq(slug))
        .find_also_related(User)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Updates the cheese identified by `slug` in place.
///
/// Every editable field is replaced; the slug is left exactly as it was, so
/// the record's URL survives a rename. Unknown slugs are an error rather
/// than an upsert.
pub async fn update_cheese(
    db: &DatabaseConnection,
    slug: &str,
    input: CheeseUpdate,
) -> Result<cheese::Model> {
    validate_name(&input.name)?;
    validate_country(input.country_of_origin.as_deref())?;

    let existing = get_cheese_by_slug(db, slug)
        .await?
        .ok_or_else(|| Error::CheeseNotFound {
            slug: slug.to_string(),
        })?;

    let mut cheese: cheese::ActiveModel = existing.into();
    cheese.name = Set(input.name.trim().to_string());
    cheese.description = Set(input.description);
    cheese.firmness = Set(input.firmness.as_str().to_string());
    cheese.country_of_origin = Set(input.country_of_origin);
    cheese.updated_at = Set(chrono::Utc::now().naive_utc());

    let result = cheese.update(db).await?;
    tracing::info!(slug = %result.slug, "updated cheese '{}'", result.name);
    Ok(result)
}
