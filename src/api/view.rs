//! Renderizado HTML del tablero en el servidor.

use crate::board::format::format_display_date;
use crate::board::BookingOutcome;
use crate::remote::Reservation;

/// Escapa texto para contenido HTML y atributos entre comillas
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn reservation_card(reservation: &Reservation) -> String {
    let party_size = reservation
        .party_size
        .map(|size| size.to_string())
        .unwrap_or_default();
    let confirmed = if reservation.is_confirmed { "✅" } else { "❌" };

    format!(
        r#"<div class="reservation-card" data-id="{}">
        <h3>{}</h3>
        <p>Date: {}</p>
        <p>Phone: {}</p>
        <p>Party size: {}</p>
        <p>Confirmed: {}</p>
      </div>"#,
        escape_html(reservation.id.as_str()),
        escape_html(&reservation.guest_name),
        escape_html(&format_display_date(&reservation.date)),
        escape_html(&reservation.guest_phone),
        escape_html(&party_size),
        confirmed,
    )
}

/// Página completa: banner y formulario de esta petición, tarjetas compartidas
pub fn render_board(reservations: &[Reservation], outcome: &BookingOutcome) -> String {
    let cards: String = reservations.iter().map(reservation_card).collect();
    let draft = &outcome.draft;

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>The restaurant</title>
    <link rel="stylesheet" href="/static/board.css">
  </head>
  <body>
    <h1>The restaurant</h1>
    <p class="status">{status}</p>
    <h2>Book a table</h2>
    <form method="post" action="/book">
      <input type="text" name="name" value="{name}" placeholder="What's your name?" minlength="4" required>
      <input type="text" name="phone" value="{phone}" placeholder="Phone number?" minlength="10" required>
      <input type="number" name="party_size" value="{party_size}" placeholder="How many?" min="1" max="10" required>
      <input type="date" name="date" value="{date}" placeholder="What date?" required>
      <button type="submit">Book now</button>
    </form>
    <h2>Reservations</h2>
    <section class="reservations">
      {cards}
    </section>
  </body>
</html>
"#,
        status = escape_html(&outcome.status.message()),
        name = escape_html(&draft.name),
        phone = escape_html(&draft.phone),
        party_size = escape_html(&draft.party_size),
        date = escape_html(&draft.date),
        cards = cards,
    )
}
