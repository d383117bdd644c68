// src/journal.rs
//
// Journal (tracing).
// - NATIF : subscriber fmt sur stderr ; RUST_LOG prioritaire, sinon niveau de la config
// - WEB   : aucun subscriber, les événements sont ignorés

#[cfg(not(target_arch = "wasm32"))]
pub fn initialiser(niveau: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filtre = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(niveau))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // try_init : un second appel (tests) ne doit pas paniquer
    let _ = tracing_subscriber::registry()
        .with(filtre)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn initialiser(_niveau: &str) {}
