//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le tampon sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariant clé : Evaluer donne soit (Error, Erreur), soit (nombre, Succes)
//! - invariant clé : un résultat fini, ré-évalué, redonne le même texte

use std::time::{Duration, Instant};

use super::commande::Commande;
use super::eval::evaluer;
use super::tampon::{Controleur, Signal, MARQUEUR_ERREUR};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

fn gen_commande(rng: &mut Rng) -> Commande {
    match rng.pick(12) {
        0 => Commande::Effacer,
        1 => Commande::Retour,
        2 => Commande::Parenthese,
        3 => Commande::Point,
        4 => Commande::Negation,
        5 => {
            let ops = ["+", "-", "*", "/"];
            Commande::Operateur(ops[rng.pick(4) as usize].to_string())
        }
        6 => Commande::Evaluer,
        7 => {
            let saisies = ['+', '-', '*', '/', '(', ')', '.'];
            Commande::Saisie(saisies[rng.pick(7) as usize])
        }
        _ => Commande::Chiffre(rng.pick(10).to_string()),
    }
}

/// Chaîne dans l’alphabet (tout ce que le clavier peut taper + espaces).
fn gen_alphabet(rng: &mut Rng, longueur: usize) -> String {
    const ALPHABET: [char; 18] = [
        '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '+', '-', '*', '/', '(', ')', '.', ' ',
    ];
    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

fn est_resultat_numerique(s: &str) -> bool {
    s == "NaN"
        || s == "Infinity"
        || s == "-Infinity"
        || s.parse::<f64>().is_ok()
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_sequences_de_commandes() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..400 {
        budget(start, max);
        let mut c = Controleur::new();

        for _ in 0..(1 + rng.pick(40)) {
            let cmd = gen_commande(&mut rng);
            let evaluation = cmd == Commande::Evaluer;
            let signal = c.appliquer(cmd);

            if !evaluation {
                assert_eq!(signal, None);
                continue;
            }
            match signal {
                Some(Signal::Erreur) => assert_eq!(c.texte(), MARQUEUR_ERREUR),
                Some(Signal::Succes) => assert!(
                    est_resultat_numerique(c.texte()),
                    "résultat non numérique: {:?}",
                    c.texte()
                ),
                None => panic!("Evaluer doit toujours signaler"),
            }
        }

        assert!(!c.affichage().is_empty());
    }
}

#[test]
fn fuzz_alphabet_sans_panique() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(42);

    let mut succes = 0usize;
    for _ in 0..3000 {
        budget(start, max);
        let longueur = 1 + rng.pick(16) as usize;
        let s = gen_alphabet(&mut rng, longueur);

        let mut c = Controleur::new();
        c.appliquer(Commande::Chiffre(s.clone()));
        if c.appliquer(Commande::Evaluer) == Some(Signal::Succes) {
            succes += 1;
        }
    }

    // Des chaînes aléatoires valides existent ("7", "1+2"…)
    assert!(succes > 0);
}

#[test]
fn fuzz_resultat_stable() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(7);

    for _ in 0..2000 {
        budget(start, max);
        let longueur = 1 + rng.pick(12) as usize;
        let s = gen_alphabet(&mut rng, longueur);

        let Ok(v) = evaluer(&s) else { continue };
        if !v.is_finite() {
            continue;
        }

        let mut c = Controleur::new();
        c.appliquer(Commande::Chiffre(s.clone()));
        c.appliquer(Commande::Evaluer);
        let premier = c.texte().to_string();

        // exposant "e" : hors alphabet, ré-évaluation refusée (comme l’hôte)
        if premier.contains('e') {
            continue;
        }

        assert_eq!(
            c.appliquer(Commande::Evaluer),
            Some(Signal::Succes),
            "expr={s:?} résultat={premier:?}"
        );
        assert_eq!(c.texte(), premier, "expr={s:?}");
    }
}
