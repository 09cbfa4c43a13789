// Framework bootstrap for the territory server runtime.

use crate::domain::tuning::player::PlayerTuning;
use crate::frameworks::config;
use crate::interface_adapters::net::{world_update_serializer, ws_handler};
use crate::interface_adapters::state::AppState;
use crate::use_cases::{GameEvent, WorldSettings, WorldUpdate, world_task};

use axum::{Router, extract::ws::Utf8Bytes, routing::get};
use std::net::SocketAddr;
use std::{io::Result, sync::Arc};
use tokio::sync::{Notify, broadcast, mpsc, watch};

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state();

    let app = Router::new()
        .route("/ws", get(ws_handler))
        .with_state(state.clone());

    tracing::info!(%address, "listening");

    let served = axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    });
    state.shutdown.notify_one();
    served
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([127, 0, 0, 1], config::http_port()));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener).await
}

fn build_state() -> Arc<AppState> {
    // input_tx/rx: joins, leaves and inputs from every connection go to the single world task.
    let (input_tx, input_rx) = mpsc::channel::<GameEvent>(config::INPUT_CHANNEL_CAPACITY);

    // world_tx/rx: one domain update per tick.
    let (world_tx, _world_rx) = broadcast::channel::<WorldUpdate>(config::WORLD_BROADCAST_CAPACITY);

    // Serialized once, shared by all connections.
    let (world_bytes_tx, _world_bytes_rx) =
        broadcast::channel::<Utf8Bytes>(config::WORLD_BROADCAST_CAPACITY);
    let (world_latest_tx, _world_latest_rx) = watch::channel::<Utf8Bytes>(Utf8Bytes::from(""));

    let settings = WorldSettings {
        tick_interval: config::tick_interval(),
        player_tuning: PlayerTuning {
            respawn_delay: config::respawn_delay(),
        },
    };
    tracing::debug!(
        tick_interval_ms = settings.tick_interval.as_millis(),
        respawn_delay_ms = settings.player_tuning.respawn_delay.as_millis(),
        "world configured"
    );

    let state = Arc::new(AppState {
        input_tx,
        world_tx,
        world_bytes_tx,
        world_latest_tx,
        shutdown: Arc::new(Notify::new()),
    });

    // Subscribe before the world task starts so the first tick reaches the serializer.
    tokio::spawn(world_update_serializer(
        state.world_tx.subscribe(),
        state.world_bytes_tx.clone(),
        state.world_latest_tx.clone(),
    ));
    tokio::spawn(world_task(
        input_rx,
        state.world_tx.clone(),
        settings,
        state.shutdown.clone(),
    ));

    state
}
