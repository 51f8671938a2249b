use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::response::HotelPresenter;
use application::service::{GetHotelService, SeedService};
use axum::extract::State;
use axum::routing::{get, post};
use axum::Router;

pub trait HotelRouter {
    fn route_hotel(self) -> Self;
}

impl HotelRouter for Router<AppModule> {
    fn route_hotel(self) -> Self {
        self.route(
            "/hotels",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), HotelPresenter)
                    .bypass(|| async move { module.pgpool().get_hotels().await })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/seed",
            post(|State(module): State<AppModule>| async move {
                Controller::new((), HotelPresenter)
                    .bypass(|| async move { module.pgpool().seed_catalog().await })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
    }
}
