// HTTP Server Task - Serviert Dashboard, Erfolgs-Seite und JSON-Status
use defmt::info;
use embassy_net::Stack;
use embassy_time::Duration;
use heapless::String;
use picoserve::{io::embedded_io_async, response::IntoResponse, routing::get};
use spectral_core::StatusReport;
use spectral_core::dashboard::STATUS_JSON_CAPACITY;

use crate::SharedDashboard;
use crate::config::*;
use crate::web::{INDEX_HTML, SUCCESS_HTML};

/// Statische HTML-Seiten
enum HtmlPage {
    Dashboard,
    Success,
}

impl IntoResponse for HtmlPage {
    async fn write_to<
        R: embedded_io_async::Read,
        W: picoserve::response::ResponseWriter<Error = R::Error>,
    >(
        self,
        connection: picoserve::response::Connection<'_, R>,
        response_writer: W,
    ) -> Result<picoserve::ResponseSent, W::Error> {
        let body = match self {
            HtmlPage::Dashboard => INDEX_HTML,
            HtmlPage::Success => SUCCESS_HTML,
        };

        picoserve::response::Response::new(picoserve::response::StatusCode::OK, body)
            .with_header("Content-Type", "text/html; charset=utf-8")
            .with_header("Cache-Control", NO_CACHE)
            .with_header("Pragma", "no-cache")
            .write_to(connection, response_writer)
            .await
    }
}

/// `/data` Antwort: `{"r":..,"g":..,"b":..,"correctness":..,"success":..}`
struct StatusJson(String<STATUS_JSON_CAPACITY>);

impl IntoResponse for StatusJson {
    async fn write_to<
        R: embedded_io_async::Read,
        W: picoserve::response::ResponseWriter<Error = R::Error>,
    >(
        self,
        connection: picoserve::response::Connection<'_, R>,
        response_writer: W,
    ) -> Result<picoserve::ResponseSent, W::Error> {
        let json = self.0;

        picoserve::response::Response::new(picoserve::response::StatusCode::OK, json.as_str())
            .with_header("Content-Type", "application/json")
            .with_header("Cache-Control", NO_CACHE)
            .with_header("Pragma", "no-cache")
            .write_to(connection, response_writer)
            .await
    }
}

/// Aktuelle Momentaufnahme aus dem geteilten Zustand
fn snapshot(dashboard: &SharedDashboard) -> StatusReport {
    dashboard.lock(|state| state.borrow().report())
}

/// HTTP Server Task
///
/// Dieser Task stellt den HTTP-Server bereit:
/// - Serviert das Dashboard auf GET /
/// - Liefert den aktuellen Zustand als JSON auf GET /data
/// - Serviert die Erfolgs-Seite auf GET /success (vorher: Dashboard)
///
/// Es gibt genau eine Instanz, d.h. eine Verbindung zur Zeit. Jede
/// Verbindung wird nach der Antwort geschlossen.
///
/// # Parameter
/// - `stack`: embassy-net Stack für Netzwerk-Zugriff
/// - `dashboard`: Geteilter Zustand, den die Spiel-Schleife pro Tick schreibt
#[embassy_executor::task]
pub async fn http_server_task(stack: &'static Stack<'static>, dashboard: &'static SharedDashboard) {
    info!("HTTP: Server task starting on port {}...", HTTP_PORT);

    // Router-Konfiguration
    let app = picoserve::Router::new()
        .route("/", get(serve_dashboard))
        .route(
            "/data",
            get(move || async move { StatusJson(snapshot(dashboard).to_json()) }),
        )
        .route(
            "/success",
            get(move || async move {
                if snapshot(dashboard).success {
                    HtmlPage::Success
                } else {
                    HtmlPage::Dashboard
                }
            }),
        );

    // Server-Konfiguration: kein Keep-Alive → "Connection: close" nach jeder Antwort
    let config = picoserve::Config::new(picoserve::Timeouts {
        start_read_request: Some(Duration::from_secs(5)),
        read_request: Some(Duration::from_secs(1)),
        write: Some(Duration::from_secs(1)),
        persistent_start_read_request: Some(Duration::from_secs(1)),
    });

    // HTTP-Buffer für Requests/Responses
    let mut http_buffer = [0u8; HTTP_BUFFER_SIZE];

    // TCP-Buffers für Socket
    let mut rx_buffer = [0u8; TCP_RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TCP_TX_BUFFER_SIZE];

    // Server erstellen
    let server = picoserve::Server::new(&app, &config, &mut http_buffer);

    // Server starten (lauscht auf HTTP_PORT)
    let _ = server
        .listen_and_serve(0, *stack, HTTP_PORT, &mut rx_buffer, &mut tx_buffer)
        .await;

    info!("HTTP: Server task ended");
}

/// Serviert die Dashboard-Seite
async fn serve_dashboard() -> impl IntoResponse {
    HtmlPage::Dashboard
}
