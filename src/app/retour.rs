//! src/app/retour.rs
//!
//! Retour visuel succès/erreur : un effet minuté qui se retire tout seul
//! à la fin de sa durée (équivalent d’un `animationend`).

use crate::noyau::Signal;

#[derive(Clone, Debug)]
pub struct RetourVisuel {
    actif: Option<(Signal, f64)>, // (signal, début en secondes)
    duree: f64,
}

impl RetourVisuel {
    pub fn new(duree: f64) -> Self {
        Self {
            actif: None,
            duree: duree.max(0.0),
        }
    }

    /// Démarre l’effet (remplace un effet encore en cours).
    pub fn declencher(&mut self, signal: Signal, maintenant: f64) {
        self.actif = Some((signal, maintenant));
    }

    /// Signal en cours + progression dans [0, 1). `None` une fois l’effet terminé.
    pub fn etat(&mut self, maintenant: f64) -> Option<(Signal, f32)> {
        let (signal, debut) = self.actif?;
        let ecoule = (maintenant - debut).max(0.0);

        if ecoule >= self.duree {
            self.actif = None;
            return None;
        }
        Some((signal, (ecoule / self.duree) as f32))
    }

    pub fn est_actif(&self) -> bool {
        self.actif.is_some()
    }
}
