//! Hotel and room listing for paid in-person event attendees.

use actix_web::web;

pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod services;

/// Mounts the hotel routes; shared between the server binary and the tests.
pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/hotels")
            .route("", web::get().to(handlers::hotels::get_hotels))
            .route("/{hotelId}", web::get().to(handlers::hotels::get_hotel_rooms)),
    );
}
