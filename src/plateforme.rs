// src/plateforme.rs
//
// Plateforme hôte : invite d’installation + service worker.
//
// - installation.rs : état de l’invite différée (pur, testable en natif)
// - web.rs          : beforeinstallprompt, prompt()/userChoice, serviceWorker.register
// - natif.rs        : rien à installer, bouton jamais affiché
//
// Les deux variantes exposent la même `Plateforme` :
//   demarrer(ctx, reglages), bouton_installation_visible(), lancer_installation()

pub mod installation;

#[cfg(not(target_arch = "wasm32"))]
mod natif;
#[cfg(not(target_arch = "wasm32"))]
pub use natif::Plateforme;

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
pub use web::Plateforme;
