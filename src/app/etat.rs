//! src/app/etat.rs
//!
//! État UI : le contrôleur du tampon, le retour visuel, la plateforme.
//!
//! Contrats :
//! - Une seule calculatrice par fenêtre/page ; l’état vit dans `AppCalc`
//!   (aucun état global).
//! - Chaque commande est appliquée entièrement avant la suivante.

use crate::noyau::{Commande, Controleur};
use crate::plateforme::Plateforme;
use crate::reglages::Reglages;

use super::retour::RetourVisuel;

pub struct AppCalc {
    pub controleur: Controleur,
    pub retour: RetourVisuel,
    pub plateforme: Plateforme,
}

impl AppCalc {
    pub fn new(reglages: &Reglages, plateforme: Plateforme) -> Self {
        Self {
            controleur: Controleur::new(),
            retour: RetourVisuel::new(reglages.duree_animation()),
            plateforme,
        }
    }

    /// Applique une commande (pavé ou clavier) ; une évaluation déclenche le retour visuel.
    pub fn executer(&mut self, commande: Commande, maintenant: f64) {
        if let Some(signal) = self.controleur.appliquer(commande) {
            self.retour.declencher(signal, maintenant);
        }
    }
}
