// src/noyau/format.rs
//
// Rendu d’un f64 comme le fait Number.prototype.toString() (base 10) :
// - NaN, Infinity, -Infinity
// - ±0 -> "0"
// - chiffres les plus courts qui relisent la même valeur
// - notation simple si l’exposant décimal est dans ]-7, 21[, sinon d.ddde±n

/* ------------------------ Décomposition chiffres / exposant ------------------------ */

/// x > 0, fini. Retourne (chiffres significatifs sans point, n) tels que
/// x = 0.chiffres × 10^n.
fn chiffres_et_exposant(x: f64) -> (String, i32) {
    // `{:e}` donne déjà la représentation la plus courte : "1.2345e3", "5e-7"
    let sci = format!("{x:e}");
    let (mantisse, exposant) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));

    let chiffres: String = mantisse.chars().filter(|c| c.is_ascii_digit()).collect();
    let e: i32 = exposant.parse().unwrap_or(0);

    (chiffres, e + 1)
}

fn zeros(n: usize) -> String {
    "0".repeat(n)
}

/* ------------------------ API ------------------------ */

/// Texte d’un nombre, identique à `String(x)` côté navigateur.
pub fn nombre_en_texte(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x == 0.0 {
        // couvre aussi -0
        return "0".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x < 0.0 {
        return format!("-{}", nombre_en_texte(-x));
    }

    let (s, n) = chiffres_et_exposant(x);
    let k = s.len() as i32;

    // entier (éventuellement complété de zéros)
    if k <= n && n <= 21 {
        return format!("{s}{}", zeros((n - k) as usize));
    }

    // point décimal à l’intérieur des chiffres
    if 0 < n && n <= 21 {
        let (int, frac) = s.split_at(n as usize);
        return format!("{int}.{frac}");
    }

    // 0.000ddd
    if -6 < n && n <= 0 {
        return format!("0.{}{s}", zeros((-n) as usize));
    }

    // notation exponentielle
    let e = n - 1;
    let signe = if e < 0 { '-' } else { '+' };
    let abs_e = e.abs();

    if k == 1 {
        format!("{s}e{signe}{abs_e}")
    } else {
        let (tete, reste) = s.split_at(1);
        format!("{tete}.{reste}e{signe}{abs_e}")
    }
}
