// Web-Modul für den HTTP Server
// Organisiert alle Web-bezogenen Komponenten

// HTML-Dateien zur Compile-Zeit einbinden
// Die Dateien werden direkt ins Binary eingebettet

/// Dashboard: fragt alle 500 ms `/data` ab
pub const INDEX_HTML: &str = include_str!("index.html");

/// Erfolgs-Seite, sobald die Farbe gefunden wurde
pub const SUCCESS_HTML: &str = include_str!("success.html");
