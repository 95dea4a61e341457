//! KIRA shell binary — the application shell around the avatar engine.
//!
//! Loads configuration, initializes structured logging, connects the backend
//! client, and runs the frame loop: emotion classification on interaction
//! changes, camera transitions on listening/speaking edges, and a per-frame
//! avatar tick handed to the render sink. Shuts down gracefully on
//! SIGTERM/SIGINT.
//!
//! The interaction snapshot is owned by the hosting UI in a full deployment;
//! this binary drives the engine headless with the state the host last
//! supplied, which makes it useful as a smoke harness for the whole
//! pipeline.

mod config;
mod history;
mod status;

use kira_avatar::{apply_frame, AmbientField, AvatarDriver, CameraController, RenderSink};
use kira_client::BackendClient;
use kira_emotion::EmotionDetector;
use kira_types::InteractionState;
use kira_visualizer::VoiceVisualizer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// A render sink that logs frames instead of drawing them.
///
/// Stands in for the 3D surface when running headless; the engine treats it
/// exactly like a real renderer.
struct LogSink;

impl RenderSink for LogSink {
    fn apply(&mut self, frame: &kira_avatar::AnimationFrame) -> Result<(), String> {
        tracing::trace!(
            body_scale = frame.body_scale,
            mouth_scale = frame.mouth_scale,
            blink = frame.blink_active,
            halo = frame.halo_color,
            "frame"
        );
        Ok(())
    }
}

fn resolve_config_path() -> (Option<String>, &'static str) {
    if let Some(path) = std::env::args()
        .nth(1)
        .filter(|value| !value.trim().is_empty())
    {
        return (Some(path), "cli-arg");
    }

    if let Ok(path) = std::env::var("KIRA_CONFIG_PATH") {
        if !path.trim().is_empty() {
            return (Some(path), "env-var");
        }
    }

    (None, "default")
}

#[tokio::main]
async fn main() {
    let (resolved_config_path, config_source) = resolve_config_path();
    let selected_config_path = resolved_config_path.as_deref().or(Some("kira.toml"));

    // Load configuration
    let config = config::load_config(selected_config_path)
        .expect("failed to load configuration — the shell cannot start without valid config");

    // Initialize tracing
    let filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.logging.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!(
        source = config_source,
        path = selected_config_path.unwrap_or("<none>"),
        "resolved startup configuration path"
    );

    // Backend client; the engine runs on presentational defaults while the
    // backend is down.
    let client = BackendClient::new(config.backend.base_url.clone())
        .expect("failed to build backend client — check backend.base_url in config");

    let connected = match client.check_health().await {
        Ok(health) => {
            for (service, up) in &health.services {
                tracing::info!(
                    service = kira_client::service_display_name(service),
                    status = kira_client::service_status_label(*up),
                    "backend service"
                );
            }
            health.is_healthy()
        }
        Err(e) => {
            tracing::warn!(error = %e, "health check failed, running with presentational defaults");
            false
        }
    };
    tracing::info!(
        connection = status::connection_label(connected),
        "backend status"
    );

    // Periodic health poller.
    let poll_client = client.clone();
    let poll_seconds = config.backend.health_poll_seconds.max(1);
    let health_task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(poll_seconds));
        interval.tick().await; // first tick fires immediately; skip it
        loop {
            interval.tick().await;
            match poll_client.check_health().await {
                Ok(health) => tracing::debug!(status = %health.status, "health poll"),
                Err(e) => tracing::warn!(error = %e, "health poll failed"),
            }
        }
    });

    // Conversation and engine state.
    let mut conversation = history::ConversationHistory::new();
    conversation.push_welcome();

    let interaction = InteractionState {
        last_message_text: conversation.latest_text().to_string(),
        ..Default::default()
    };

    let mut detector = EmotionDetector::new();
    let mut camera = CameraController::new();
    let mut driver = AvatarDriver::new();
    let ambient = AmbientField::new(&mut StdRng::from_entropy());
    let mut visualizer = VoiceVisualizer::new();
    let mut sink = LogSink;

    // Classifier recomputes on interaction change, not per frame.
    let emotion = detector.update(&interaction).primary;
    tracing::info!(
        emotion = %emotion,
        caption = status::avatar_caption(interaction.is_listening, interaction.is_speaking),
        "engine ready"
    );

    let frame_rate = config.animation.frame_rate.max(1);
    let mut frames = tokio::time::interval(Duration::from_secs_f64(1.0 / f64::from(frame_rate)));
    let start = Instant::now();
    let mut last_tick = start;

    tracing::info!(frame_rate, "starting animation loop");

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = frames.tick() => {
                let now = Instant::now();
                let t = now.duration_since(start).as_secs_f32();
                let dt = now.duration_since(last_tick).as_secs_f32();
                last_tick = now;

                let active = interaction.is_listening || interaction.is_speaking;
                if active && !visualizer.is_active() {
                    visualizer.activate();
                } else if !active && visualizer.is_active() {
                    visualizer.deactivate();
                }
                visualizer.set_audio_level(interaction.audio_level);

                if let Some(pose) = camera.on_state_change(
                    interaction.is_listening,
                    interaction.is_speaking,
                ) {
                    tracing::info!(
                        x = pose.position.x,
                        y = pose.position.y,
                        z = pose.position.z,
                        "camera moved"
                    );
                }

                let emotion = detector.current().primary;
                let frame = driver.tick(t, dt, &interaction, emotion);
                let _background = ambient.tick(t, active);
                apply_frame(&mut sink, &frame);
            }
            _ = &mut shutdown => break,
        }
    }

    visualizer.deactivate();
    health_task.abort();

    tracing::info!(
        status = status::status_line(interaction.is_listening, interaction.is_speaking),
        audio = %status::audio_percent(interaction.audio_level),
        "kira shell shut down"
    );
}

/// Waits for a SIGINT (Ctrl+C) or SIGTERM signal for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { tracing::info!("received SIGINT, initiating graceful shutdown"); }
        () = terminate => { tracing::info!("received SIGTERM, initiating graceful shutdown"); }
    }
}
