use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::error::Result;
use crate::models::CreateMessagePayload;
use crate::store::MessageStore;

pub async fn get_messages<S: MessageStore>(store: web::Data<S>) -> Result<HttpResponse> {
    let messages = store.list().await?;
    Ok(HttpResponse::Ok().json(messages))
}

pub async fn create_message<S: MessageStore>(
    store: web::Data<S>,
    payload: web::Json<CreateMessagePayload>,
) -> Result<HttpResponse> {
    let id = store.create(&payload).await?;
    log::debug!("created message {id}");

    Ok(HttpResponse::Ok().json(json!({ "id": id, "message": "success" })))
}

pub async fn delete_message<S: MessageStore>(store: web::Data<S>, path: web::Path<i64>) -> Result<HttpResponse> {
    let id = path.into_inner();
    store.delete(id).await?;
    log::debug!("deleted message {id}");

    Ok(HttpResponse::Ok().json(json!({ "message": "success" })))
}
