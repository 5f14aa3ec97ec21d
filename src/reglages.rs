//! Réglages (fichier TOML optionnel).
//!
//! Natif : `CALCULETTE_CONFIG` si défini, sinon `calculette.toml` dans le
//! répertoire courant s’il existe. Web : valeurs par défaut.
//!
//! ```toml
//! duree_animation_ms = 450
//! service_worker = "sw.js"
//! journal = "calculette=debug"
//! ```

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("lecture des réglages impossible: {0}")]
    Lecture(#[from] std::io::Error),
    #[error("réglages invalides: {0}")]
    Format(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Reglages {
    /// Durée du retour visuel succès/erreur.
    pub duree_animation_ms: u64,
    /// Script du service worker (web seulement).
    pub service_worker: String,
    /// Filtre de journal si RUST_LOG est absent.
    pub journal: String,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            duree_animation_ms: 450,
            service_worker: "sw.js".to_string(),
            journal: "warn".to_string(),
        }
    }
}

impl Reglages {
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurReglages> {
        Ok(toml::from_str(texte)?)
    }

    /// Durée du retour visuel, en secondes (horloge egui).
    pub fn duree_animation(&self) -> f64 {
        self.duree_animation_ms as f64 / 1000.0
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn charger() -> Result<Self, ErreurReglages> {
        use std::path::PathBuf;

        let chemin = match std::env::var_os("CALCULETTE_CONFIG") {
            Some(p) => PathBuf::from(p),
            None => {
                let defaut = PathBuf::from("calculette.toml");
                if !defaut.exists() {
                    return Ok(Self::default());
                }
                defaut
            }
        };

        let texte = std::fs::read_to_string(&chemin)?;
        Self::depuis_toml(&texte)
    }
}
