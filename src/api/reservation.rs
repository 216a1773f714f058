//! # API JSON de reservas
//!
//! Acceso JSON al mismo tablero que muestra la página:
//! - `GET /api/reservations` - recarga y devuelve la lista
//! - `POST /api/reservations` - envía un borrador

use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;

use super::{AppError, AppResult};
use crate::board::{BookingStatus, DraftReservation, ReservationBoard};

/// Lista las reservas tras recargarlas del API de reservas
///
/// Si la recarga falla se registra y se devuelve la lista anterior.
///
/// # Response
/// ```json
/// [
///   {
///     "id": "66a1",
///     "guestName": "Alice",
///     "guestPhone": "5551234567",
///     "date": "2024-05-06",
///     "partySize": 4,
///     "isConfirmed": true
///   }
/// ]
/// ```
#[get("/api/reservations")]
async fn get_reservations(board: web::Data<ReservationBoard>) -> impl Responder {
    board.refresh_list().await;
    HttpResponse::Ok().json(board.reservations().await)
}

/// Envía un borrador a través del tablero
///
/// # Request
/// ```json
/// { "name": "Alice", "phone": "5551234567", "date": "2024-05-06", "party_size": "4" }
/// ```
///
/// # Errores
/// - `400 Bad Request`: el borrador no pasó la validación
/// - `502 Bad Gateway`: el API de reservas no devolvió una respuesta JSON
#[post("/api/reservations")]
async fn make_reservation(
    board: web::Data<ReservationBoard>,
    data: web::Json<DraftReservation>,
) -> AppResult<impl Responder> {
    match board.submit(data.into_inner()).await.status {
        BookingStatus::Success(message) => Ok(HttpResponse::Ok().json(json!({ "message": message }))),
        BookingStatus::ValidationError(reason) => Err(AppError::Validation(reason)),
        BookingStatus::SubmissionError(failure) => {
            Err(AppError::upstream(failure.user_message(), None))
        }
        BookingStatus::Idle => Err(AppError::Internal(
            "submission finished without an outcome".to_string(),
        )),
    }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_reservations);
    cfg.service(make_reservation);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::errors::ErrorResponse;
    use crate::board::tests::{board_with, expect_list, respond, valid_draft, TWO_RESERVATIONS};
    use crate::remote::http::MockHttpClient;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn list_returns_server_order() {
        let mut mock = MockHttpClient::new();
        expect_list(&mut mock, 1, TWO_RESERVATIONS);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(board_with(mock)))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/reservations").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["guestName"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[actix_web::test]
    async fn submit_success_returns_message() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json()
            .returning(|_, _| Box::pin(async { Ok(respond(201, r#"{"message": "See you!"}"#)) }));
        expect_list(&mut mock, 1, "[]");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(board_with(mock)))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/reservations")
            .set_json(valid_draft())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "See you!"}));
    }

    #[actix_web::test]
    async fn submit_validation_error_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(board_with(MockHttpClient::new())))
                .configure(routes),
        )
        .await;

        let mut draft = valid_draft();
        draft.party_size = "0".to_string();
        let req = test::TestRequest::post()
            .uri("/api/reservations")
            .set_json(draft)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.message, "Party size must be between 1 and 10.");
    }

    #[actix_web::test]
    async fn submit_non_json_reply_is_bad_gateway() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json()
            .returning(|_, _| Box::pin(async { Ok(respond(500, "oops")) }));
        expect_list(&mut mock, 1, "[]");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(board_with(mock)))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/reservations")
            .set_json(valid_draft())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(body.message.starts_with("Error submitting reservation. (trace: "));
    }

    #[actix_web::test]
    async fn submit_json_reply_with_error_status_returns_its_message() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json().returning(|_, _| {
            Box::pin(async { Ok(respond(409, r#"{"message": "Fully booked"}"#)) })
        });
        expect_list(&mut mock, 1, "[]");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(board_with(mock)))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/reservations")
            .set_json(valid_draft())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"message": "Fully booked"}));
    }
}
