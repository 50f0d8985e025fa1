//! Download endpoint for uploaded pictures.

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, get, web};

use crate::domain::{ApiResult, Error, PictureName};
use crate::inbound::http::state::HttpState;

/// Serve a stored picture as an attachment.
///
/// Names that are not a single plain file name are rejected with 400 and
/// never reach the store.
#[get("/uploads/img/{picture}")]
pub async fn download_picture(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let name = PictureName::parse(path.into_inner())
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    let file = state
        .catalog
        .load_picture(&name)
        .await?
        .ok_or_else(|| Error::not_found(format!("picture {name} not found")))?;

    let mime = mime_guess::from_path(file.name.as_str()).first_or_octet_stream();
    Ok(HttpResponse::Ok()
        .content_type(mime.essence_str())
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(file.name.to_string())],
        })
        .body(file.bytes))
}
