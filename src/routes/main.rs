use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::delivery::Delivery;
use crate::forms::orders::{
    OrdersPageQuery, PlaceOrderForm, TrackOrderForm, new_submission_id, parse_submission_id,
};
use crate::repository::{DeliveryReader, DieselRepository, DishReader};
use crate::routes::{base_context, redirect, render_template};
use crate::services::menu::{MenuPageData, load_menu};
use crate::services::orders::place_order;
use crate::services::tracking::track_order;

/// Menu for rendering. A failed fetch is logged and leaves the menu empty.
fn menu_or_empty<R>(repo: &R) -> MenuPageData
where
    R: DishReader + ?Sized,
{
    match load_menu(repo) {
        Ok(menu) => menu,
        Err(err) => {
            log::error!("Error fetching menu: {err}");
            MenuPageData::default()
        }
    }
}

/// Delivery for the details panel. Failed lookups are logged and leave the panel empty.
fn lookup_delivery<R>(repo: &R, form: &TrackOrderForm) -> Option<Delivery>
where
    R: DeliveryReader + ?Sized,
{
    let order_id = match form.parse_order_id() {
        Ok(Some(order_id)) => order_id,
        Ok(None) => return None,
        Err(err) => {
            log::error!("Error tracking order: {err}");
            return None;
        }
    };

    match track_order(repo, order_id) {
        Ok(delivery) => Some(delivery),
        Err(err) => {
            log::error!("Error tracking order {order_id}: {err}");
            None
        }
    }
}

#[get("/")]
pub async fn show_index(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let menu = menu_or_empty(repo.get_ref());

    let mut context = base_context(&flash_messages, "index");
    context.insert("menu", &menu);
    context.insert("submission_id", &new_submission_id());
    render_template(&tera, "main/index.html", &context)
}

#[get("/hero")]
pub async fn show_hero(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, "hero");
    render_template(&tera, "main/hero.html", &context)
}

#[get("/menu")]
pub async fn show_menu(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let menu = menu_or_empty(repo.get_ref());

    let mut context = base_context(&flash_messages, "menu");
    context.insert("menu", &menu);
    render_template(&tera, "main/menu.html", &context)
}

#[get("/orders")]
pub async fn show_orders(
    params: web::Query<OrdersPageQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let menu = menu_or_empty(repo.get_ref());

    let mut context = base_context(&flash_messages, "orders");
    context.insert("menu", &menu);
    context.insert("submission_id", &params.submission_id_or_new());
    render_template(&tera, "main/orders.html", &context)
}

#[get("/orders/track")]
pub async fn show_tracking(
    params: web::Query<TrackOrderForm>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let menu = menu_or_empty(repo.get_ref());
    let delivery = lookup_delivery(repo.get_ref(), &params);

    let mut context = base_context(&flash_messages, "orders");
    context.insert("menu", &menu);
    context.insert("submission_id", &new_submission_id());
    context.insert("order_id", &params.order_id);
    context.insert("delivery", &delivery);
    render_template(&tera, "main/orders.html", &context)
}

#[post("/orders")]
pub async fn add_order(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<PlaceOrderForm>,
) -> impl Responder {
    let submission_id = parse_submission_id(form.submission_id.as_deref());

    match place_order(repo.get_ref(), form) {
        Ok(placed) => {
            FlashMessage::success(placed.confirmation_message()).send();
            redirect("/orders")
        }
        Err(err) => {
            log::error!("Failed to place order: {err}");
            // Retrying with the same token resumes whatever was already stored.
            match submission_id {
                Some(token) => redirect(&format!("/orders?submission_id={token}")),
                None => redirect("/orders"),
            }
        }
    }
}

#[get("/register")]
pub async fn show_register(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, "register");
    render_template(&tera, "auth/register.html", &context)
}

#[get("/login")]
pub async fn show_login(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, "login");
    render_template(&tera, "auth/login.html", &context)
}
