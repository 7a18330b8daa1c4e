// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Spiel-Schleife und HTTP-Server teilen sich den Dashboard-Zustand.

pub mod game;
pub mod http;
pub mod wifi;

// Re-export Tasks für einfachen Import
pub use game::{GamePeripherals, game_loop_task};
pub use http::http_server_task;
pub use wifi::{access_point_task, net_task};
