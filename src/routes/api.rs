use actix_web::{HttpResponse, Responder, get, post, web};
use serde_json::json;

use crate::forms::orders::PlaceOrderForm;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::menu::list_dishes;
use crate::services::orders::place_order;
use crate::services::tracking::track_order;

#[get("/v1/dishes")]
/// Return every dish on the menu as JSON.
pub async fn api_v1_dishes(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_dishes(repo.get_ref()) {
        Ok(dishes) => HttpResponse::Ok().json(dishes),
        Err(err) => {
            log::error!("Error fetching menu: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/v1/orders")]
/// Place an order from a JSON payload shaped like the order form.
///
/// Responds `201 Created` with the placed order. When a step fails the
/// response names the failed stage and any order id already committed.
pub async fn api_v1_place_order(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<PlaceOrderForm>,
) -> impl Responder {
    match place_order(repo.get_ref(), form) {
        Ok(placed) => HttpResponse::Created().json(json!({
            "message": placed.confirmation_message(),
            "order": placed,
        })),
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(ServiceError::OrderPlacement(err)) => {
            log::error!("Failed to place order: {err}");
            HttpResponse::InternalServerError().json(json!({
                "error": err.to_string(),
                "stage": err.stage(),
                "order_id": err.committed_order_id(),
            }))
        }
        Err(err) => {
            log::error!("Failed to place order: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/deliveries/{order_id}")]
/// Return the single delivery row for an order.
///
/// `404` when the order has no delivery, `409` when it has several.
pub async fn api_v1_delivery(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let order_id = path.into_inner();

    match track_order(repo.get_ref(), order_id) {
        Ok(delivery) => HttpResponse::Ok().json(delivery),
        Err(ServiceError::NotFound) => {
            log::error!("Error tracking order {order_id}: no delivery found");
            HttpResponse::NotFound().finish()
        }
        Err(ServiceError::NotUnique(count)) => {
            log::error!("Error tracking order {order_id}: {count} deliveries found");
            HttpResponse::Conflict().finish()
        }
        Err(err) => {
            log::error!("Error tracking order {order_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
