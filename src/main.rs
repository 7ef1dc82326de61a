//! camaxis - camera axis monitor
//!
//! Demo binary: wires a camera controller to a software-driven
//! VirtualLayout, sweeps the layout's controls, and logs the commanded
//! pan/tilt/spin/zoom values each frame.

use std::f64::consts::TAU;
use std::thread;
use std::time::Duration;

use camaxis::config::AppConfig;
use camaxis_control::CameraController;
use camaxis_devices::VirtualLayout;
use camaxis_input::Deadband;

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting camaxis monitor");

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let layout = VirtualLayout::new();
    let controller = CameraController::for_device(&layout);

    if config.deadband.enabled {
        controller.add_deadband(Deadband::new(config.deadband.lower, config.deadband.upper));
        log::info!(
            "Deadband active: ({}, {})",
            config.deadband.lower,
            config.deadband.upper
        );
    }

    let interval = Duration::from_millis(config.monitor.interval_ms);
    for frame in 0..config.monitor.frames {
        let elapsed_s = frame as f64 * config.monitor.interval_ms as f64 / 1000.0;
        let phase = TAU * elapsed_s / config.sweep.period_s;

        // Rotations sweep at full rate, translations at half
        layout
            .left_right_rotation
            .set_value(config.sweep.amplitude * phase.sin());
        layout
            .up_down_rotation
            .set_value(config.sweep.amplitude * phase.cos());
        layout
            .clockwise_counterclockwise_rotation
            .set_value(config.sweep.amplitude * (phase / 2.0).sin());
        layout
            .in_out_translation
            .set_value(config.sweep.amplitude * (phase / 2.0).cos());

        let command = controller.commanded();
        log::info!(
            "frame {:4}: pan {:+.3} tilt {:+.3} spin {:+.3} zoom {:+.3}",
            frame,
            command.pan,
            command.tilt,
            command.spin,
            command.zoom
        );

        thread::sleep(interval);
    }

    log::info!("Monitor finished after {} frames", config.monitor.frames);
}
