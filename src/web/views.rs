//! Request handlers for the four views.
//!
//! List and detail are public; the create and update views require a
//! `CurrentUser` and follow the form flow: valid submissions persist and
//! redirect to the detail page, invalid ones re-render the form with field
//! errors and touch nothing.

use crate::{
    core::cheese,
    errors::{Error, Result},
    web::{AppState, auth::CurrentUser, forms::CheeseForm, pages, routes},
};
use axum::{
    Form,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};

/// GET `/cheeses/` - every cheese, in insertion order.
pub async fn list_cheeses(State(state): State<AppState>) -> Result<Html<String>> {
    let cheeses = cheese::list_cheeses(&state.db).await?;
    Ok(pages::list_page(&cheeses))
}

/// GET `/cheeses/{slug}/` - one cheese's full attribute set.
pub async fn cheese_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>> {
    let (cheese, creator) = cheese::get_cheese_with_creator(&state.db, &slug)
        .await?
        .ok_or(Error::CheeseNotFound { slug })?;
    Ok(pages::detail_page(&cheese, creator.as_ref()))
}

/// GET `/cheeses/add/` - the empty create form.
pub async fn add_cheese_form(_user: CurrentUser) -> Html<String> {
    pages::form_page(
        "Add Cheese",
        routes::add_path(),
        &CheeseForm::default(),
        &[],
    )
}

/// POST `/cheeses/add/` - create a cheese and redirect to it.
pub async fn add_cheese(
    user: CurrentUser,
    State(state): State<AppState>,
    Form(form): Form<CheeseForm>,
) -> Result<Response> {
    match form.validate() {
        Ok(valid) => {
            let created = cheese::create_cheese(
                &state.db,
                cheese::NewCheese {
                    name: valid.name,
                    description: valid.description,
                    firmness: valid.firmness,
                    country_of_origin: valid.country_of_origin,
                    creator_id: Some(user.0.id),
                },
            )
            .await?;
            Ok(Redirect::to(&created.absolute_url()).into_response())
        }
        Err(errors) => {
            Ok(pages::form_page("Add Cheese", routes::add_path(), &form, &errors).into_response())
        }
    }
}

/// GET `/cheeses/{slug}/update/` - the pre-filled update form.
pub async fn update_cheese_form(
    _user: CurrentUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>> {
    let cheese = cheese::get_cheese_by_slug(&state.db, &slug)
        .await?
        .ok_or_else(|| Error::CheeseNotFound { slug: slug.clone() })?;
    Ok(pages::form_page(
        "Update Cheese",
        &routes::update_path(&slug),
        &CheeseForm::from_model(&cheese),
        &[],
    ))
}

/// POST `/cheeses/{slug}/update/` - mutate in place and redirect.
///
/// The slug never changes, even when the name does.
pub async fn update_cheese(
    _user: CurrentUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(form): Form<CheeseForm>,
) -> Result<Response> {
    // Resolve the slug first: an unknown record is 404 regardless of how
    // broken the submission is.
    cheese::get_cheese_by_slug(&state.db, &slug)
        .await?
        .ok_or_else(|| Error::CheeseNotFound { slug: slug.clone() })?;

    match form.validate() {
        Ok(valid) => {
            let updated = cheese::update_cheese(
                &state.db,
                &slug,
                cheese::CheeseUpdate {
                    name: valid.name,
                    description: valid.description,
                    firmness: valid.firmness,
                    country_of_origin: valid.country_of_origin,
                },
            )
            .await?;
            Ok(Redirect::to(&updated.absolute_url()).into_response())
        }
        Err(errors) => Ok(pages::form_page(
            "Update Cheese",
            &routes::update_path(&slug),
            &form,
            &errors,
        )
        .into_response()),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use crate::core::cheese::{Firmness, get_cheese_by_slug, list_cheeses};
    use crate::errors::Result;
    use crate::test_utils::{
        body_string, create_custom_cheese, create_test_cheese, create_test_user, get, post_form,
        setup_test_db, test_router,
    };
    use axum::http::{StatusCode, header};

    #[tokio::test]
    async fn test_good_cheese_list_view() -> Result<()> {
        let db = setup_test_db().await?;
        let app = test_router(&db);

        let response = get(&app, "/cheeses/", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("Cheese List"));
        Ok(())
    }

    #[tokio::test]
    async fn test_cheese_list_contains_2_cheeses() -> Result<()> {
        let db = setup_test_db().await?;
        let cheese1 = create_test_cheese(&db, "Stracchino").await?;
        let cheese2 = create_test_cheese(&db, "Halloumi").await?;
        let app = test_router(&db);

        let response = get(&app, "/cheeses/", None).await;
        let body = body_string(response).await;
        assert!(body.contains(&cheese1.name));
        assert!(body.contains(&cheese2.name));
        Ok(())
    }

    #[tokio::test]
    async fn test_good_cheese_detail_view() -> Result<()> {
        let db = setup_test_db().await?;
        let cheese = create_test_cheese(&db, "Stracchino").await?;
        let app = test_router(&db);

        let response = get(&app, &cheese.absolute_url(), None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains(&cheese.name));
        Ok(())
    }

    #[tokio::test]
    async fn test_detail_contains_cheese_data() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db, "tester").await?;
        let cheese = create_custom_cheese(
            &db,
            "Paski Sir",
            "A salty hard cheese",
            Firmness::Hard,
            Some("HR"),
            Some(user.id),
        )
        .await?;
        let app = test_router(&db);

        let response = get(&app, &cheese.absolute_url(), None).await;
        let body = body_string(response).await;
        assert!(body.contains("Paski Sir"));
        assert!(body.contains("Hard"));
        assert!(body.contains("Croatia"));
        assert!(body.contains("tester"));
        Ok(())
    }

    #[tokio::test]
    async fn test_detail_unknown_slug_returns_404() -> Result<()> {
        let db = setup_test_db().await?;
        let app = test_router(&db);

        let response = get(&app, "/cheeses/no-such-cheese/", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn test_good_cheese_create_view() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db, "admin").await?;
        let app = test_router(&db);

        let response = get(&app, "/cheeses/add/", Some(&user.token)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("Add Cheese"));
        Ok(())
    }

    #[tokio::test]
    async fn test_create_view_requires_authentication() -> Result<()> {
        let db = setup_test_db().await?;
        let app = test_router(&db);

        let response = get(&app, "/cheeses/add/", None).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = get(&app, "/cheeses/add/", Some("tok-unknown")).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = post_form(&app, "/cheeses/add/", None, "name=Sneaky").await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(list_cheeses(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_cheese_create_form_valid() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db, "admin").await?;
        let app = test_router(&db);

        let response = post_form(
            &app,
            "/cheeses/add/",
            Some(&user.token),
            "name=Paski+Sir&description=A+salty+hard+cheese&firmness=hard",
        )
        .await;
        assert!(response.status().is_redirection());
        assert_eq!(
            response.headers()[header::LOCATION],
            "/cheeses/paski-sir/"
        );

        let cheese = get_cheese_by_slug(&db, "paski-sir").await?.unwrap();
        assert_eq!(cheese.name, "Paski Sir");
        assert_eq!(cheese.description, "A salty hard cheese");
        assert_eq!(cheese.firmness, "hard");
        assert_eq!(cheese.creator_id, Some(user.id));
        Ok(())
    }

    #[tokio::test]
    async fn test_cheese_create_invalid_form_rerenders() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db, "admin").await?;
        let app = test_router(&db);

        let response = post_form(
            &app,
            "/cheeses/add/",
            Some(&user.token),
            "name=&description=No+name&firmness=hard",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            body_string(response)
                .await
                .contains("This field is required.")
        );
        assert!(list_cheeses(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_good_cheese_update_view() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db, "admin").await?;
        let cheese = create_test_cheese(&db, "Gruyere").await?;
        let app = test_router(&db);

        let url = format!("/cheeses/{}/update/", cheese.slug);
        let response = get(&app, &url, Some(&user.token)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains("Update Cheese"));
        // Pre-filled with the stored name
        assert!(body.contains("Gruyere"));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_view_requires_authentication() -> Result<()> {
        let db = setup_test_db().await?;
        let cheese = create_test_cheese(&db, "Protected").await?;
        let app = test_router(&db);

        let url = format!("/cheeses/{}/update/", cheese.slug);
        let response = get(&app, &url, None).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        Ok(())
    }

    #[tokio::test]
    async fn test_cheese_update() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db, "admin").await?;
        let cheese = create_custom_cheese(
            &db,
            "Paski Sir",
            "A salty hard cheese",
            Firmness::Hard,
            Some("HR"),
            None,
        )
        .await?;
        let app = test_router(&db);

        let url = format!("/cheeses/{}/update/", cheese.slug);
        let response = post_form(
            &app,
            &url,
            Some(&user.token),
            "name=Paski+Sir&description=Something+new&firmness=hard&country_of_origin=HR",
        )
        .await;
        assert!(response.status().is_redirection());
        assert_eq!(
            response.headers()[header::LOCATION],
            "/cheeses/paski-sir/"
        );

        let reloaded = get_cheese_by_slug(&db, "paski-sir").await?.unwrap();
        assert_eq!(reloaded.description, "Something new");
        assert_eq!(reloaded.name, "Paski Sir");
        assert_eq!(reloaded.slug, "paski-sir");
        assert_eq!(reloaded.firmness, "hard");
        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_slug_returns_404() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db, "admin").await?;
        let app = test_router(&db);

        let response = get(&app, "/cheeses/missing/update/", Some(&user.token)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = post_form(
            &app,
            "/cheeses/missing/update/",
            Some(&user.token),
            "name=Whatever&firmness=soft",
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn test_add_path_is_not_treated_as_slug() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db, "admin").await?;
        let app = test_router(&db);

        // The static add route must win over the dynamic detail route
        let response = get(&app, "/cheeses/add/", Some(&user.token)).await;
        assert_eq!(response.status(), StatusCode::OK);
        Ok(())
    }
}
