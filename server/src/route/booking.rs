use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{BookingTransformer, CancelBookingRequest, CreateBookingRequest};
use crate::response::{BookingPresenter, CreatedBookingPresenter};
use application::service::{CancelBookingService, CreateBookingService, GetBookingService};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};

pub trait BookingRouter {
    fn route_booking(self) -> Self;
}

impl BookingRouter for Router<AppModule> {
    fn route_booking(self) -> Self {
        self.route(
            "/bookings",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), BookingPresenter)
                    .bypass(|| async move { module.pgpool().get_my_bookings().await })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>,
                 Json(req): Json<CreateBookingRequest>| async move {
                    Controller::new(BookingTransformer, CreatedBookingPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.pgpool().create_booking(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/bookings/:id/cancel",
            post(
                // Non-numeric ids keep the JSON error body instead of the
                // extractor's plain-text rejection.
                |State(module): State<AppModule>, id: Result<Path<i64>, PathRejection>| async move {
                    let Path(id) = id.map_err(|_| ErrorStatus::validation("invalid booking id"))?;
                    Controller::new(BookingTransformer, BookingPresenter)
                        .intake(CancelBookingRequest::new(id))
                        .handle(|dto| async move { module.pgpool().cancel_booking(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
