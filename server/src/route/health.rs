use crate::handler::AppModule;
use axum::routing::get;
use axum::Router;

pub trait HealthRouter {
    fn route_health(self) -> Self;
}

impl HealthRouter for Router<AppModule> {
    fn route_health(self) -> Self {
        self.route("/", get(|| async { "API is running" }))
    }
}
