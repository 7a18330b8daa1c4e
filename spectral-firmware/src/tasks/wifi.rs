// WiFi Task - Spannt den Access Point auf und hält ihn am Laufen
use defmt::{Debug2Format, error, info, warn};
use embassy_net::Runner;
use embassy_time::{Duration, Timer};
use esp_radio::wifi::{
    AccessPointConfig, AuthMethod, ModeConfig, WifiController, WifiDevice, WifiEvent,
};

use crate::config::{AP_IP_TEXT, AP_PASSWORD, AP_RESTART_DELAY_SECS, AP_SSID};

/// Access Point Task
///
/// Managed den Access Point:
/// - Konfiguriert WPA2 mit SSID/Passwort aus der Config
/// - Startet den Access Point
/// - Startet ihn neu falls er stoppt
#[embassy_executor::task]
pub async fn access_point_task(mut controller: WifiController<'static>) {
    info!("WiFi: Starting access point task");

    loop {
        if matches!(controller.is_started(), Ok(false)) {
            info!("WiFi: Configuring access point '{}'...", AP_SSID);

            let ap_config = ModeConfig::AccessPoint(
                AccessPointConfig::default()
                    .with_ssid(AP_SSID.into())
                    .with_password(AP_PASSWORD.into())
                    .with_auth_method(AuthMethod::Wpa2Personal),
            );

            if let Err(e) = controller.set_config(&ap_config) {
                error!("WiFi: Failed to set configuration: {}", Debug2Format(&e));
                Timer::after(Duration::from_secs(AP_RESTART_DELAY_SECS)).await;
                continue;
            }

            if let Err(e) = controller.start_async().await {
                error!("WiFi: Failed to start: {}", Debug2Format(&e));
                Timer::after(Duration::from_secs(AP_RESTART_DELAY_SECS)).await;
                continue;
            }

            info!(
                "WiFi: Access point up - connect to '{}' and open http://{}/",
                AP_SSID, AP_IP_TEXT
            );
        }

        // Warten bis der Access Point stoppt
        controller.wait_for_event(WifiEvent::ApStop).await;
        warn!("WiFi: Access point stopped, restarting...");

        Timer::after(Duration::from_secs(AP_RESTART_DELAY_SECS)).await;
    }
}

/// Network Task
///
/// Überwacht den Netzwerk-Stack:
/// - Prozessiert Netzwerk-Pakete
/// - Managed TCP/IP Stack
#[embassy_executor::task]
pub async fn net_task(mut runner: Runner<'static, WifiDevice<'static>>) -> ! {
    runner.run().await
}
