// src/plateforme/natif.rs
//
// Natif (Linux/Windows/macOS) : pas d’installation web, pas de service worker.

use eframe::egui;

use super::installation::Installation;
use crate::reglages::Reglages;

#[derive(Debug, Default)]
pub struct Plateforme {
    // Jamais signalée disponible en natif.
    installation: Installation<()>,
}

impl Plateforme {
    pub fn demarrer(_ctx: &egui::Context, _reglages: &Reglages) -> Self {
        tracing::debug!("natif : ni invite d’installation ni service worker");
        Self::default()
    }

    pub fn bouton_installation_visible(&self) -> bool {
        self.installation.bouton_visible()
    }

    pub fn lancer_installation(&mut self) {
        if self.installation.declencher().is_some() {
            self.installation.terminer();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bouton_jamais_visible() {
        let ctx = egui::Context::default();
        let mut p = Plateforme::demarrer(&ctx, &Reglages::default());
        assert!(!p.bouton_installation_visible());
        p.lancer_installation();
        assert!(!p.bouton_installation_visible());
    }
}
