use crate::controller::Intake;
use application::transfer::{CancelBookingDto, CreateBookingDto};
use serde::Deserialize;

/// Every field is optional on the wire. Presence is part of the workflow's
/// validation, a missing field must answer 400, not a deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    room_id: Option<i64>,
    check_in: Option<String>,
    check_out: Option<String>,
}

#[derive(Debug)]
pub struct CancelBookingRequest {
    id: i64,
}

impl CancelBookingRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

pub struct BookingTransformer;

impl Intake<CreateBookingRequest> for BookingTransformer {
    type To = CreateBookingDto;
    fn emit(&self, input: CreateBookingRequest) -> Self::To {
        CreateBookingDto {
            room_id: input.room_id,
            check_in: input.check_in,
            check_out: input.check_out,
        }
    }
}

impl Intake<CancelBookingRequest> for BookingTransformer {
    type To = CancelBookingDto;
    fn emit(&self, input: CancelBookingRequest) -> Self::To {
        CancelBookingDto { id: input.id }
    }
}

#[cfg(test)]
mod test {
    use super::CreateBookingRequest;

    #[test]
    fn missing_fields_deserialize_to_none() {
        let request: CreateBookingRequest = serde_json::from_str(r#"{"roomId": 1}"#).unwrap();
        assert_eq!(request.room_id, Some(1));
        assert!(request.check_in.is_none());
        assert!(request.check_out.is_none());
    }

    #[test]
    fn camel_case_fields_are_accepted() {
        let request: CreateBookingRequest = serde_json::from_str(
            r#"{"roomId": 1, "checkIn": "2025-12-01", "checkOut": "2025-12-03"}"#,
        )
        .unwrap();
        assert_eq!(request.check_in.as_deref(), Some("2025-12-01"));
        assert_eq!(request.check_out.as_deref(), Some("2025-12-03"));
    }
}
