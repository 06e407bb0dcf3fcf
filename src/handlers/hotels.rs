use actix_web::{web, HttpResponse, Responder};
use sqlx::SqlitePool;

use crate::auth::AuthenticatedUser;
use crate::errors::ApiError;
use crate::services::hotels;

pub async fn get_hotels(pool: web::Data<SqlitePool>, user: AuthenticatedUser) -> impl Responder {
    match hotels::list_hotels(pool.get_ref(), user.user_id).await {
        Ok(hotels) => HttpResponse::Ok().json(hotels),
        Err(ApiError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("listing hotels failed: {err}");
            HttpResponse::BadRequest().finish()
        }
    }
}

pub async fn get_hotel_rooms(
    pool: web::Data<SqlitePool>,
    user: AuthenticatedUser,
    path: web::Path<i64>,
) -> impl Responder {
    let hotel_id = path.into_inner();

    match hotels::get_hotel_rooms(pool.get_ref(), user.user_id, hotel_id).await {
        Ok(hotel) => HttpResponse::Ok().json(hotel),
        Err(ApiError::NotFound) => HttpResponse::NotFound().finish(),
        Err(ApiError::PaymentRequired) => HttpResponse::PaymentRequired().finish(),
        Err(err) => {
            log::error!("fetching rooms for hotel {hotel_id} failed: {err}");
            HttpResponse::BadRequest().finish()
        }
    }
}
