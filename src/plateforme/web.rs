// src/plateforme/web.rs
//
// Web (wasm32) :
// - `beforeinstallprompt` : preventDefault, invite gardée, bouton "Installer" affiché
// - clic : prompt() puis attente de userChoice (tâche spawn_local), bouton caché ensuite
// - service worker : enregistré une fois au démarrage ; un échec est journalisé, rien d’autre
//
// web-sys ne lie pas BeforeInstallPromptEvent : prompt()/userChoice passent par Reflect.

use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{console, Event, ServiceWorkerContainer, ServiceWorkerRegistration};

use super::installation::Installation;
use crate::reglages::Reglages;

pub struct Plateforme {
    // Partagée avec l’écouteur `beforeinstallprompt` et la tâche userChoice (thread UI seul).
    installation: Rc<RefCell<Installation<Event>>>,
    ctx: egui::Context,
}

impl Plateforme {
    pub fn demarrer(ctx: &egui::Context, reglages: &Reglages) -> Self {
        let installation = Rc::new(RefCell::new(Installation::default()));

        if let Err(e) = ecouter_invite(ctx.clone(), Rc::clone(&installation)) {
            avertir("écoute de beforeinstallprompt impossible", &e);
        }
        enregistrer_service_worker(&reglages.service_worker);

        Self {
            installation,
            ctx: ctx.clone(),
        }
    }

    pub fn bouton_installation_visible(&self) -> bool {
        self.installation.borrow().bouton_visible()
    }

    pub fn lancer_installation(&mut self) {
        let Some(invite) = self.installation.borrow_mut().declencher() else {
            return;
        };

        let installation = Rc::clone(&self.installation);
        let ctx = self.ctx.clone();

        spawn_local(async move {
            match afficher_invite(&invite).await {
                Ok(issue) => tracing::info!(%issue, "choix d’installation"),
                Err(e) => avertir("invite d’installation échouée", &e),
            }
            installation.borrow_mut().terminer();
            ctx.request_repaint();
        });
    }
}

/* ------------------------ Invite d’installation ------------------------ */

fn ecouter_invite(
    ctx: egui::Context,
    installation: Rc<RefCell<Installation<Event>>>,
) -> Result<(), JsValue> {
    let fenetre = web_sys::window().ok_or_else(|| JsValue::from_str("window() indisponible"))?;

    let rappel = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        ev.prevent_default();
        installation.borrow_mut().signaler_disponible(ev);
        ctx.request_repaint();
    });

    fenetre.add_event_listener_with_callback(
        "beforeinstallprompt",
        rappel.as_ref().unchecked_ref(),
    )?;

    // L’écouteur vit aussi longtemps que la page.
    rappel.forget();
    Ok(())
}

/// prompt() puis `await userChoice` ; retourne `outcome` ("accepted" / "dismissed").
async fn afficher_invite(invite: &Event) -> Result<String, JsValue> {
    let prompt: Function = Reflect::get(invite, &JsValue::from_str("prompt"))?.dyn_into()?;
    prompt.call0(invite)?;

    let choix: Promise = Reflect::get(invite, &JsValue::from_str("userChoice"))?.dyn_into()?;
    let reponse = JsFuture::from(choix).await?;

    let issue = Reflect::get(&reponse, &JsValue::from_str("outcome"))?;
    Ok(issue.as_string().unwrap_or_default())
}

/* ------------------------ Service worker ------------------------ */

fn enregistrer_service_worker(script: &str) {
    let Some(fenetre) = web_sys::window() else {
        return;
    };

    // `navigator.serviceWorker` est absent hors contexte sécurisé (http non local).
    let navigateur = fenetre.navigator();
    if !Reflect::has(&navigateur, &JsValue::from_str("serviceWorker")).unwrap_or(false) {
        tracing::debug!("serviceWorker absent du navigateur");
        return;
    }
    let conteneur = navigateur.service_worker();

    let script = script.to_string();
    spawn_local(async move {
        if let Err(e) = enregistrer(&conteneur, &script).await {
            avertir("SW register failed", &e);
        }
    });
}

async fn enregistrer(conteneur: &ServiceWorkerContainer, script: &str) -> Result<(), JsValue> {
    let inscription: ServiceWorkerRegistration =
        JsFuture::from(conteneur.register(script)).await?.dyn_into()?;

    tracing::debug!(script, portee = %inscription.scope(), "service worker enregistré");
    Ok(())
}

/* ------------------------ Journal ------------------------ */

fn avertir(message: &str, erreur: &JsValue) {
    tracing::warn!(?erreur, "{message}");
    console::warn_2(&JsValue::from_str(message), erreur);
}
