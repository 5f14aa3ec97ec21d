//! Invite d’installation différée (application web installable).
//!
//! Cycle :
//!   Indisponible --signaler_disponible(p)--> Disponible(p)
//!   Disponible(p) --declencher()--> EnCours   (p rendu une seule fois)
//!   EnCours --terminer()--> Indisponible
//!
//! `P` est la poignée de la plateforme (l’événement `beforeinstallprompt` côté web).

#[derive(Debug)]
pub enum Installation<P> {
    Indisponible,
    Disponible(P),
    EnCours,
}

// Sans borne `P: Default` (l’événement web n’en a pas).
impl<P> Default for Installation<P> {
    fn default() -> Self {
        Installation::Indisponible
    }
}

impl<P> Installation<P> {
    /// La plateforme signale que l’application est installable.
    /// Une nouvelle invite remplace l’ancienne (nouvelle fenêtre de disponibilité).
    pub fn signaler_disponible(&mut self, invite: P) {
        *self = Installation::Disponible(invite);
    }

    /// Clic sur "Installer" : rend l’invite différée, une seule fois.
    pub fn declencher(&mut self) -> Option<P> {
        match std::mem::replace(self, Installation::EnCours) {
            Installation::Disponible(p) => Some(p),
            autre => {
                *self = autre;
                None
            }
        }
    }

    /// L’utilisateur a répondu (accepté ou refusé) : l’invite est consommée.
    pub fn terminer(&mut self) {
        *self = Installation::Indisponible;
    }

    pub fn bouton_visible(&self) -> bool {
        !matches!(self, Installation::Indisponible)
    }
}
