//! Journal (tracing).
//!
//! Natif : sortie console filtrée par RUST_LOG, sinon par le filtre des réglages
//! (`RUST_LOG=calculette=debug` pour voir chaque commande appliquée).
//! Web : panics vers la console du navigateur.

#[cfg(not(target_arch = "wasm32"))]
pub fn init(filtre_defaut: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filtre =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filtre_defaut));

    let console = fmt::layer().with_target(true).with_line_number(true);

    tracing_subscriber::registry()
        .with(filtre)
        .with(console)
        .init();
}

#[cfg(target_arch = "wasm32")]
pub fn init(_filtre_defaut: &str) {
    console_error_panic_hook::set_once();
}
