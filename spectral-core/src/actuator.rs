//! Motor-Aktuierung: Korrektheit (0..100 %) → zeitgesteuerte Motorbewegung
//!
//! Der Motor hat keinen Positionsgeber. Die Position wird per Koppelnavigation
//! geschätzt: eine Bewegung um `d` Prozentpunkte dauert
//! `d / 100 * full_rotation_ms` bei fester Geschwindigkeit. Deshalb läuft jede
//! gestartete Bewegung bis zu ihrer eigenen Dauer zu Ende, bevor ein neues
//! Ziel übernommen wird.
//!
//! Ab `success_threshold` startet einmalig eine volle Umdrehung, auch wenn
//! gerade eine Nachführ-Bewegung läuft (diese wird gebremst). Nach deren
//! Ende ist der Zustand dauerhaft verriegelt und `update()` ändert nichts mehr.

use crate::traits::HBridgeDriver;
use crate::types::Direction;

/// Maximales Tastverhältnis (100 %)
pub const PWM_MAX_DUTY: u16 = u16::MAX;

/// Parameter der Motor-Aktuierung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActuatorConfig {
    /// Ab dieser Korrektheit (in %) startet die Erfolgs-Umdrehung
    pub success_threshold: f32,
    /// Kleinere Abweichungen gelten als Sensorrauschen
    pub min_change: f32,
    /// Dauer einer vollen Umdrehung (entspricht 100 Prozentpunkten)
    pub full_rotation_ms: u32,
    /// Tastverhältnis während einer Bewegung in %
    pub drive_duty_percent: f32,
}

impl Default for ActuatorConfig {
    fn default() -> Self {
        Self {
            success_threshold: 97.0,
            min_change: 0.5,
            full_rotation_ms: 2000,
            drive_duty_percent: 80.0,
        }
    }
}

impl ActuatorConfig {
    /// Tastverhältnis während einer Bewegung, auf `PWM_MAX_DUTY` begrenzt
    pub fn drive_duty(&self) -> u16 {
        duty_from_percent(self.drive_duty_percent)
    }

    /// Bewegungsdauer für eine Strecke in Prozentpunkten
    ///
    /// ```
    /// # use spectral_core::ActuatorConfig;
    /// let config = ActuatorConfig::default();
    /// assert_eq!(config.move_duration_ms(25.0), 500);
    /// assert_eq!(config.move_duration_ms(-50.0), 1000);
    /// ```
    pub fn move_duration_ms(&self, distance: f32) -> u64 {
        let fraction = if distance.is_nan() {
            0.0
        } else {
            distance.abs() / 100.0
        };
        (fraction * self.full_rotation_ms as f32) as u64
    }
}

/// Rechnet Prozent in einen PWM-Wert um (begrenzt auf 0..=PWM_MAX_DUTY)
pub fn duty_from_percent(percent: f32) -> u16 {
    let scaled = percent / 100.0 * PWM_MAX_DUTY as f32;
    if !(scaled > 0.0) {
        0
    } else if scaled >= PWM_MAX_DUTY as f32 {
        PWM_MAX_DUTY
    } else {
        scaled as u16
    }
}

/// Begrenzt eine Korrektheit auf 0..=100, NaN wird zu 0
pub fn clamp_correctness(correctness: f32) -> f32 {
    if correctness.is_nan() {
        0.0
    } else {
        correctness.clamp(0.0, 100.0)
    }
}

/// Art der laufenden Bewegung
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveKind {
    /// Proportionale Bewegung zur Zielposition
    Track { target: f32 },
    /// Volle Umdrehung nach Erreichen des Schwellwerts
    Success,
}

/// Zeitgesteuerte Bewegung, die gerade läuft
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveMove {
    pub kind: MoveKind,
    pub started_at_ms: u64,
    pub duration_ms: u64,
}

impl ActiveMove {
    fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.started_at_ms) >= self.duration_ms
    }
}

/// Zustand der Motor-Aktuierung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActuatorState {
    /// Geschätzte Motorposition (0..100), nur am Ende einer Bewegung aktualisiert
    pub current_position: f32,
    pub direction: Direction,
    pub duty: u16,
    pub active_move: Option<ActiveMove>,
    pub success_started: bool,
    pub success_latched: bool,
}

impl Default for ActuatorState {
    fn default() -> Self {
        Self {
            current_position: 0.0,
            direction: Direction::Brake,
            duty: 0,
            active_move: None,
            success_started: false,
            success_latched: false,
        }
    }
}

impl ActuatorState {
    pub fn is_rotating(&self) -> bool {
        self.active_move.is_some()
    }
}

/// Zustandsübergang, den `update()` ausgelöst hat
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorEvent {
    MoveStarted {
        direction: Direction,
        target: f32,
        duration_ms: u64,
    },
    MoveCompleted {
        position: f32,
    },
    SuccessRotationStarted {
        duration_ms: u64,
    },
    SuccessLatched,
}

/// Motor-Aktuierung über eine H-Brücke
pub struct MotorActuator<H: HBridgeDriver> {
    bridge: H,
    config: ActuatorConfig,
    state: ActuatorState,
}

impl<H: HBridgeDriver> MotorActuator<H> {
    pub fn new(bridge: H, config: ActuatorConfig) -> Self {
        Self {
            bridge,
            config,
            state: ActuatorState::default(),
        }
    }

    /// Bringt die H-Brücke in den sicheren Zustand (Brake, Geschwindigkeit 0)
    ///
    /// Muss einmal vor dem ersten `update()` aufgerufen werden.
    pub fn initialize(&mut self) {
        self.apply(Direction::Brake, 0);
    }

    /// Verarbeitet eine Korrektheit pro Polling-Tick
    ///
    /// Eine laufende Bewegung wird von keinem neuen Ziel unterbrochen. Endet sie
    /// in diesem Tick, startet die nächste Bewegung erst im folgenden Tick.
    /// Einzige Ausnahme ist das erste Erreichen des Schwellwerts: eine laufende
    /// Nachführ-Bewegung wird gebremst und die Erfolgs-Umdrehung startet sofort.
    pub fn update(&mut self, correctness: f32, now_ms: u64) -> Option<ActuatorEvent> {
        if self.state.success_latched {
            return None;
        }
        let correctness = clamp_correctness(correctness);

        if correctness >= self.config.success_threshold && !self.state.success_started {
            // Laufende Nachführung abbrechen, Position nur bei abgelaufener Dauer übernehmen
            if let Some(active) = self.state.active_move.take() {
                if let MoveKind::Track { target } = active.kind {
                    if active.is_done(now_ms) {
                        self.state.current_position = target;
                    }
                }
                self.apply(Direction::Brake, 0);
            }

            let duration_ms = u64::from(self.config.full_rotation_ms);
            self.state.success_started = true;
            self.begin_move(Direction::Forward, MoveKind::Success, duration_ms, now_ms);

            let event = ActuatorEvent::SuccessRotationStarted { duration_ms };
            #[cfg(feature = "defmt")]
            defmt::info!("Motor: {}", event);
            return Some(event);
        }

        if let Some(active) = self.state.active_move {
            if !active.is_done(now_ms) {
                return None;
            }
            self.apply(Direction::Brake, 0);
            self.state.active_move = None;

            let event = match active.kind {
                MoveKind::Track { target } => {
                    self.state.current_position = target;
                    ActuatorEvent::MoveCompleted { position: target }
                }
                MoveKind::Success => {
                    self.state.current_position = 100.0;
                    self.state.success_latched = true;
                    ActuatorEvent::SuccessLatched
                }
            };
            #[cfg(feature = "defmt")]
            defmt::info!("Motor: {}", event);
            return Some(event);
        }

        let position_diff = correctness - self.state.current_position;
        if position_diff.abs() < self.config.min_change {
            return None;
        }

        let direction = if position_diff > 0.0 {
            Direction::Forward
        } else {
            Direction::Reverse
        };
        let duration_ms = self.config.move_duration_ms(position_diff);
        self.begin_move(
            direction,
            MoveKind::Track {
                target: correctness,
            },
            duration_ms,
            now_ms,
        );

        let event = ActuatorEvent::MoveStarted {
            direction,
            target: correctness,
            duration_ms,
        };
        #[cfg(feature = "defmt")]
        defmt::debug!("Motor: {}", event);
        Some(event)
    }

    /// Stoppt den Motor sofort (Geschwindigkeit 0, Brake)
    ///
    /// Bricht eine laufende Bewegung ab, ohne die Position zu übernehmen.
    /// Eine abgebrochene Erfolgs-Umdrehung darf erneut starten.
    pub fn stop(&mut self) {
        self.apply(Direction::Brake, 0);
        if let Some(active) = self.state.active_move.take() {
            if active.kind == MoveKind::Success {
                self.state.success_started = false;
            }
        }
    }

    pub fn state(&self) -> &ActuatorState {
        &self.state
    }

    pub fn config(&self) -> &ActuatorConfig {
        &self.config
    }

    pub fn is_success_latched(&self) -> bool {
        self.state.success_latched
    }

    pub fn bridge(&self) -> &H {
        &self.bridge
    }

    pub fn into_inner(self) -> H {
        self.bridge
    }

    fn begin_move(&mut self, direction: Direction, kind: MoveKind, duration_ms: u64, now_ms: u64) {
        self.state.active_move = Some(ActiveMove {
            kind,
            started_at_ms: now_ms,
            duration_ms,
        });
        self.apply(direction, self.config.drive_duty());
    }

    // Geschwindigkeit vor Richtung auf 0, Richtung vor Geschwindigkeit beim Anlaufen
    fn apply(&mut self, direction: Direction, duty: u16) {
        let duty = duty.min(PWM_MAX_DUTY);
        if duty == 0 {
            self.bridge.set_duty(0);
            self.bridge.set_direction(direction);
        } else {
            self.bridge.set_direction(direction);
            self.bridge.set_duty(duty);
        }
        self.state.direction = direction;
        self.state.duty = duty;
    }
}
