//! HTML pages for browsing and editing products.
//!
//! ```text
//! GET  /, /all            listing
//! GET  /form              create form
//! GET  /form/{id}         edit form
//! POST /form              save (multipart)
//! GET  /delete/{id}       delete
//! GET  /detail/{id}       detail page
//! ```
//!
//! Successful writes and misses answer `303 See Other` to `/all`.

use actix_multipart::form::MultipartForm;
use actix_web::http::header::{self, ContentType};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, post, web};
use tracing::warn;

use crate::domain::ports::{DeleteOutcome, SaveProductOutcome};
use crate::domain::{ApiResult, FieldErrors, ProductId};
use crate::inbound::http::product_form::ProductForm;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{FormFields, FormPage};

/// Location every redirect points at.
pub const LISTING_PATH: &str = "/all";

const LIST_TITLE: &str = "Product listing";
const NEW_TITLE: &str = "New product";
const EDIT_TITLE: &str = "Edit product";

fn redirect_to_listing() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, LISTING_PATH))
        .finish()
}

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

/// Parse a path id; malformed ids behave like unknown ones.
fn parse_id(raw: &str) -> Option<ProductId> {
    raw.parse().ok()
}

/// Product listing with uppercased names; served on `/` and `/all`.
pub async fn list_products(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let products = state.catalog.list_products_for_display().await?;
    let body = state.views.product_list(LIST_TITLE, &products)?;
    Ok(html(StatusCode::OK, body))
}

#[get("/form")]
pub async fn new_product_form(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let categories = state.catalog.list_categories().await?;
    let body = state.views.product_form(&FormPage {
        title: NEW_TITLE,
        fields: FormFields::default(),
        errors: &FieldErrors::default(),
        categories: &categories,
        picture: None,
    })?;
    Ok(html(StatusCode::OK, body))
}

/// Edit form; an unknown id renders an empty form.
#[get("/form/{id}")]
pub async fn edit_product_form(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let product = match parse_id(&path) {
        Some(id) => state.catalog.find_product(&id).await?,
        None => None,
    };
    let categories = state.catalog.list_categories().await?;
    let fields = product.as_ref().map(FormFields::from).unwrap_or_default();
    let body = state.views.product_form(&FormPage {
        title: EDIT_TITLE,
        fields,
        errors: &FieldErrors::default(),
        categories: &categories,
        picture: product.as_ref().and_then(|p| p.picture.as_ref()),
    })?;
    Ok(html(StatusCode::OK, body))
}

/// Save a submitted form with its optional picture.
#[post("/form")]
pub async fn save_product(
    state: web::Data<HttpState>,
    MultipartForm(form): MultipartForm<ProductForm>,
) -> ApiResult<HttpResponse> {
    let (submission, upload) = form.into_parts().await?;
    match state.products.save(submission, upload).await? {
        SaveProductOutcome::Saved(_) => Ok(redirect_to_listing()),
        SaveProductOutcome::Rejected { errors, submission } => {
            let categories = state.catalog.list_categories().await?;
            let fields = FormFields::from(&submission);
            let title = if fields.id.is_empty() { NEW_TITLE } else { EDIT_TITLE };
            let body = state.views.product_form(&FormPage {
                title,
                fields,
                errors: &errors,
                categories: &categories,
                picture: None,
            })?;
            Ok(html(StatusCode::BAD_REQUEST, body))
        }
    }
}

#[get("/delete/{id}")]
pub async fn delete_product(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let Some(id) = parse_id(&path) else {
        warn!(id = %path, "delete requested with malformed product id");
        return Ok(redirect_to_listing());
    };
    match state.products.delete(&id).await? {
        DeleteOutcome::Deleted | DeleteOutcome::NotFound => Ok(redirect_to_listing()),
    }
}

#[get("/detail/{id}")]
pub async fn product_detail(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let product = match parse_id(&path) {
        Some(id) => state.catalog.find_product(&id).await?,
        None => None,
    };
    let Some(product) = product else {
        return Ok(redirect_to_listing());
    };
    let body = state.views.product_detail(&product)?;
    Ok(html(StatusCode::OK, body))
}

/// Register the HTML pages.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["/", LISTING_PATH, "/findAllProducts"]).route(web::get().to(list_products)),
    )
    .service(new_product_form)
    .service(edit_product_form)
    .service(save_product)
    .service(delete_product)
    .service(product_detail);
}

#[cfg(test)]
#[path = "products_tests.rs"]
mod tests;
