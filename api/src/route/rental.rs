use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::rental::{confirm_rental, show_own_rentals};

pub fn build_rental_routers() -> Router<AppRegistry> {
    let rental_routers = Router::new()
        .route("/", post(confirm_rental))
        .route("/me", get(show_own_rentals));

    Router::new().nest("/rentals", rental_routers)
}
