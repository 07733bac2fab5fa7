//! Server-side HTML rendering.
//!
//! Pages are plain strings assembled around a shared layout. Everything that
//! came from a user or the database goes through `escape` before it is
//! interpolated.

use crate::core::{cheese::Firmness, country};
use crate::entities::{cheese, user};
use crate::web::{
    forms::{CheeseForm, FieldError},
    routes,
};
use axum::response::Html;
use std::fmt::Write as _;

/// Escapes text for safe interpolation into HTML.
#[must_use]
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} - Cheeseboard</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape(title),
    ))
}

/// The list page: every cheese name, linked to its detail page.
#[must_use]
pub fn list_page(cheeses: &[cheese::Model]) -> Html<String> {
    let mut body = String::from("<h1>Cheese List</h1>\n<ul>\n");
    for cheese in cheeses {
        let _ = writeln!(
            body,
            "<li><a href=\"{url}\">{name}</a></li>",
            url = cheese.absolute_url(),
            name = escape(&cheese.name),
        );
    }
    body.push_str("</ul>\n");
    let _ = writeln!(
        body,
        "<p><a href=\"{}\">Add Cheese</a></p>",
        routes::add_path()
    );

    layout("Cheese List", &body)
}

/// The detail page: the record's full attribute set.
#[must_use]
pub fn detail_page(cheese: &cheese::Model, creator: Option<&user::Model>) -> Html<String> {
    let firmness = Firmness::parse(&cheese.firmness)
        .map_or_else(|| cheese.firmness.clone(), |f| f.label().to_string());
    let country = cheese
        .country_of_origin
        .as_deref()
        .map(|code| country::name(code).unwrap_or(code));

    let mut body = format!("<h1>{}</h1>\n<dl>\n", escape(&cheese.name));
    let _ = writeln!(body, "<dt>Firmness</dt><dd>{}</dd>", escape(&firmness));
    if let Some(country) = country {
        let _ = writeln!(
            body,
            "<dt>Country of Origin</dt><dd>{}</dd>",
            escape(country)
        );
    }
    if !cheese.description.is_empty() {
        let _ = writeln!(
            body,
            "<dt>Description</dt><dd>{}</dd>",
            escape(&cheese.description)
        );
    }
    if let Some(creator) = creator {
        let _ = writeln!(
            body,
            "<dt>Added by</dt><dd>{}</dd>",
            escape(&creator.username)
        );
    }
    body.push_str("</dl>\n");
    let _ = writeln!(
        body,
        "<p><a href=\"{update}\">Update Cheese</a> | <a href=\"{list}\">Cheese List</a></p>",
        update = routes::update_path(&cheese.slug),
        list = routes::list_path(),
    );

    layout(&cheese.name, &body)
}

fn errors_for(errors: &[FieldError], field: &str) -> String {
    let mut rendered = String::new();
    for error in errors.iter().filter(|e| e.field == field) {
        let _ = writeln!(
            rendered,
            "<p class=\"error\">{}</p>",
            escape(&error.message)
        );
    }
    rendered
}

/// The create/update form page, re-rendered with messages when invalid.
#[must_use]
pub fn form_page(
    title: &str,
    action: &str,
    form: &CheeseForm,
    errors: &[FieldError],
) -> Html<String> {
    let mut body = format!(
        "<h1>{title}</h1>\n<form method=\"post\" action=\"{action}\">\n",
        title = escape(title),
        action = action,
    );

    let _ = writeln!(
        body,
        "<label>Name of Cheese {errors}<input type=\"text\" name=\"name\" value=\"{value}\"></label>",
        errors = errors_for(errors, "name"),
        value = escape(&form.name),
    );

    let _ = writeln!(
        body,
        "<label>Description {errors}<textarea name=\"description\">{value}</textarea></label>",
        errors = errors_for(errors, "description"),
        value = escape(&form.description),
    );

    let _ = writeln!(
        body,
        "<label>Firmness {}<select name=\"firmness\">",
        errors_for(errors, "firmness")
    );
    for firmness in Firmness::ALL {
        let selected = if form.firmness == firmness.as_str()
            || (form.firmness.is_empty() && firmness == Firmness::default())
        {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            body,
            "<option value=\"{value}\"{selected}>{label}</option>",
            value = firmness.as_str(),
            label = firmness.label(),
        );
    }
    body.push_str("</select></label>\n");

    let _ = writeln!(
        body,
        "<label>Country of Origin {}<select name=\"country_of_origin\">",
        errors_for(errors, "country_of_origin")
    );
    body.push_str("<option value=\"\">---------</option>\n");
    for (code, name) in country::COUNTRIES {
        let selected = if form.country_of_origin == *code {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            body,
            "<option value=\"{code}\"{selected}>{name}</option>"
        );
    }
    body.push_str("</select></label>\n");

    body.push_str("<button type=\"submit\">Save</button>\n</form>\n");

    layout(title, &body)
}
