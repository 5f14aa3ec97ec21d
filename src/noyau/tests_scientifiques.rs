//! Tests scientifiques : propriétés du tampon + de l’évaluateur.
//!
//! - chemin pointeur (chiffres + opérateurs espacés) : résultat == calcul f64 direct
//! - précédence : a + b * c, a - b - c
//! - alphabet : toute lettre => Error, sans évaluation
//! - négation : imbrication textuelle, valeur opposée
//! - format : tout résultat fini relu donne la même valeur

use proptest::prelude::*;

use super::commande::Commande;
use super::eval::evaluer;
use super::format::nombre_en_texte;
use super::tampon::{Controleur, Signal, MARQUEUR_ERREUR};

/// Saisit `a op b` comme le ferait le pavé.
fn saisir_pave(c: &mut Controleur, termes: &[u32], ops: &[&str]) {
    for (i, t) in termes.iter().enumerate() {
        if i > 0 {
            c.appliquer(Commande::Operateur(ops[i - 1].to_string()));
        }
        for chiffre in t.to_string().chars() {
            c.appliquer(Commande::Chiffre(chiffre.to_string()));
        }
    }
}

fn operateur() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("+"), Just("-"), Just("*"), Just("/")]
}

fn appliquer_op(op: &str, a: f64, b: f64) -> f64 {
    match op {
        "+" => a + b,
        "-" => a - b,
        "*" => a * b,
        _ => a / b,
    }
}

proptest! {
    #[test]
    fn prop_binaire_comme_f64(a in 0u32..100_000, b in 0u32..100_000, op in operateur()) {
        let mut c = Controleur::new();
        saisir_pave(&mut c, &[a, b], &[op]);
        prop_assert_eq!(c.appliquer(Commande::Evaluer), Some(Signal::Succes));
        let attendu = nombre_en_texte(appliquer_op(op, a as f64, b as f64));
        prop_assert_eq!(c.texte(), attendu.as_str());
    }

    #[test]
    fn prop_multiplication_avant_addition(a in 0u32..1000, b in 0u32..1000, d in 1u32..1000) {
        let mut c = Controleur::new();
        saisir_pave(&mut c, &[a, b, d], &["+", "*"]);
        c.appliquer(Commande::Evaluer);
        let attendu = nombre_en_texte(a as f64 + (b as f64 * d as f64));
        prop_assert_eq!(c.texte(), attendu.as_str());
    }

    #[test]
    fn prop_soustraction_a_gauche(a in 0u32..1000, b in 0u32..1000, d in 0u32..1000) {
        let mut c = Controleur::new();
        saisir_pave(&mut c, &[a, b, d], &["-", "-"]);
        c.appliquer(Commande::Evaluer);
        let attendu = nombre_en_texte((a as f64 - b as f64) - d as f64);
        prop_assert_eq!(c.texte(), attendu.as_str());
    }

    #[test]
    fn prop_lettre_refusee(avant in "[0-9+*/ ]{0,8}", lettre in "[a-zA-Z]", apres in "[0-9]{0,4}") {
        let mut c = Controleur::new();
        c.appliquer(Commande::Chiffre(format!("{avant}{lettre}{apres}")));
        prop_assert_eq!(c.appliquer(Commande::Evaluer), Some(Signal::Erreur));
        prop_assert_eq!(c.texte(), MARQUEUR_ERREUR);
    }

    #[test]
    fn prop_negation_opposee(a in 1u32..1_000_000, n in 1usize..6) {
        let mut c = Controleur::new();
        saisir_pave(&mut c, &[a], &[]);
        for _ in 0..n {
            c.appliquer(Commande::Negation);
        }
        prop_assert_eq!(c.texte().matches("(-1)*(").count(), n);
        c.appliquer(Commande::Evaluer);
        let attendu = nombre_en_texte(if n % 2 == 0 { a as f64 } else { -(a as f64) });
        prop_assert_eq!(c.texte(), attendu.as_str());
    }

    #[test]
    fn prop_retour_annule_chiffre(base in "[0-9+() ]{0,12}", d in 0u8..10) {
        let mut c = Controleur::new();
        c.appliquer(Commande::Chiffre(base.clone()));
        c.appliquer(Commande::Chiffre(d.to_string()));
        c.appliquer(Commande::Retour);
        prop_assert_eq!(c.texte(), base.as_str());
    }

    #[test]
    fn prop_format_relu(x in any::<f64>().prop_filter("fini", |x| x.is_finite())) {
        let texte = nombre_en_texte(x);
        let relu: f64 = texte.parse().unwrap_or(f64::NAN);
        // -0 s’affiche "0"
        prop_assert!(relu == x || (x == 0.0 && relu == 0.0), "{} -> {}", x, texte);
    }
}

#[test]
fn sci_precedence_puissance() {
    assert_eq!(evaluer("2**3**2"), Ok(512.0));
    assert_eq!(evaluer("(-2)**2"), Ok(4.0));
    assert_eq!(evaluer("2**-1"), Ok(0.5));
    assert!(evaluer("-2**2").is_err());
}

#[test]
fn sci_non_finis() {
    let mut c = Controleur::new();
    for (expr, attendu) in [("0/0", "NaN"), ("-1/0", "-Infinity"), ("1/0", "Infinity")] {
        c.appliquer(Commande::Effacer);
        c.appliquer(Commande::Chiffre(expr.into()));
        assert_eq!(c.appliquer(Commande::Evaluer), Some(Signal::Succes), "expr={expr:?}");
        assert_eq!(c.texte(), attendu, "expr={expr:?}");
    }
}

#[test]
fn sci_flottants() {
    let mut c = Controleur::new();
    c.appliquer(Commande::Chiffre("0.1+0.2".into()));
    c.appliquer(Commande::Evaluer);
    assert_eq!(c.texte(), "0.30000000000000004");

    c.appliquer(Commande::Effacer);
    c.appliquer(Commande::Chiffre("1000000000000 * 1000000000".into()));
    c.appliquer(Commande::Evaluer);
    assert_eq!(c.texte(), "1e+21");
}
