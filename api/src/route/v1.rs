use axum::Router;
use registry::AppRegistry;

use super::{
    auth::build_auth_routers, health::build_health_check_routers, rental::build_rental_routers,
    space::build_space_routers,
};

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_space_routers())
        .merge(build_rental_routers())
        .merge(build_auth_routers());

    Router::new().nest("/api/v1", router)
}
