//! # Página del tablero
//!
//! La cara HTML del tablero. Cargar la página cuenta como montar el tablero,
//! así que recarga la lista antes de renderizar. El banner y el formulario
//! son de cada petición: `GET /` siempre parte de un formulario vacío y
//! `POST /book` muestra solo su propio resultado.

use actix_web::http::header::ContentType;
use actix_web::{get, post, web, HttpResponse, Responder};

use super::view::render_board;
use crate::board::{BookingOutcome, DraftReservation, ReservationBoard};

async fn render(board: &ReservationBoard, outcome: &BookingOutcome) -> HttpResponse {
    let reservations = board.reservations().await;
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_board(&reservations, outcome))
}

/// Renderiza el tablero tras recargar la lista de reservas
#[get("/")]
async fn board_page(board: web::Data<ReservationBoard>) -> impl Responder {
    board.refresh_list().await;
    render(&board, &BookingOutcome::default()).await
}

/// Procesa el formulario y renderiza el tablero con su resultado
///
/// Los campos que faltan llegan como cadenas vacías y los detecta la validación.
#[post("/book")]
async fn book(
    board: web::Data<ReservationBoard>,
    form: web::Form<DraftReservation>,
) -> impl Responder {
    let outcome = board.submit(form.into_inner()).await;
    render(&board, &outcome).await
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(board_page);
    cfg.service(book);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AppError;
    use crate::board::tests::{board_with, expect_list, respond, TWO_RESERVATIONS};
    use crate::remote::http::MockHttpClient;
    use actix_web::body::MessageBody;
    use actix_web::dev::ServiceResponse;
    use actix_web::{test, App};

    async fn body_text<B: MessageBody>(resp: ServiceResponse<B>) -> String {
        let body = test::read_body(resp).await;
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn page_load_fetches_and_renders_cards() {
        let mut mock = MockHttpClient::new();
        expect_list(&mut mock, 1, TWO_RESERVATIONS);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(board_with(mock)))
                .configure(routes),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert!(resp.status().is_success());
        let page = body_text(resp).await;
        assert_eq!(page.matches(r#"class="reservation-card""#).count(), 2);
        assert!(page.contains("Date: Monday, May 6"));
        assert!(page.contains("Confirmed: ❌"));
    }

    #[actix_web::test]
    async fn empty_list_renders_zero_cards() {
        let mut mock = MockHttpClient::new();
        expect_list(&mut mock, 1, "[]");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(board_with(mock)))
                .configure(routes),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let page = body_text(resp).await;
        assert!(!page.contains("reservation-card"));
    }

    #[actix_web::test]
    async fn booking_form_submits_and_shows_default_message() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json()
            .withf(|_, body| body["partySize"] == serde_json::json!(2))
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(respond(200, "{}")) }));
        expect_list(&mut mock, 1, TWO_RESERVATIONS);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(board_with(mock)))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/book")
            .set_form([
                ("name", "Carol"),
                ("phone", "5550001111"),
                ("date", "2024-05-08"),
                ("party_size", "2"),
            ])
            .to_request();
        let page = body_text(test::call_service(&app, req).await).await;

        assert!(page.contains(r#"<p class="status">Reservation successful!</p>"#));
        assert!(page.contains(r#"name="name" value="""#));
        assert_eq!(page.matches(r#"class="reservation-card""#).count(), 2);
    }

    #[actix_web::test]
    async fn incomplete_form_shows_validation_message() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(board_with(MockHttpClient::new())))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/book")
            .set_form([("name", "Carol"), ("party_size", "3")])
            .to_request();
        let page = body_text(test::call_service(&app, req).await).await;

        assert!(page.contains("Please fill in all fields."));
        assert!(page.contains(r#"name="name" value="Carol""#));
    }

    #[actix_web::test]
    async fn failed_booking_is_not_shown_to_the_next_visitor() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json().times(1).returning(|_, _| {
            Box::pin(async { Err(AppError::Internal("connection reset".to_string())) })
        });
        expect_list(&mut mock, 2, "[]");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(board_with(mock)))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/book")
            .set_form([
                ("name", "Mallory"),
                ("phone", "5559998888"),
                ("date", "2024-05-08"),
                ("party_size", "2"),
            ])
            .to_request();
        let page = body_text(test::call_service(&app, req).await).await;
        assert!(page.contains(r#"<p class="status">Error submitting reservation.</p>"#));
        assert!(page.contains(r#"name="name" value="Mallory""#));

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let page = body_text(resp).await;
        assert!(page.contains(r#"<p class="status"></p>"#));
        assert!(page.contains(r#"name="name" value="""#));
        assert!(page.contains(r#"name="phone" value="""#));
        assert!(!page.contains("Mallory"));
        assert!(!page.contains("5559998888"));
    }
}
