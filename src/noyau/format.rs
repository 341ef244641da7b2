// src/noyau/format.rs
//
// Affichage canonique d’un résultat flottant.
// - arrondi à 10 décimales (petite poussée epsilon contre les erreurs binaires)
// - forme exponentielle => 10 chiffres significatifs
// - forme décimale trop longue (> 12 caractères) => 12 chiffres significatifs
// - zéros de queue retirés (4.50000 -> 4.5 ; 10.00 -> 10)
//
// Utilisé pour l’aperçu ET pour le résultat validé : format(parse(format(v))) == format(v).

/// Texte affiché pour un résultat non fini.
pub const ERREUR: &str = "Error";

/// Longueur maximale d’un rendu décimal avant passage à 12 chiffres significatifs.
const LONGUEUR_MAX: usize = 12;

pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return ERREUR.to_string();
    }

    let rounded = arrondi_10_decimales(value);
    let mut text = nombre_en_texte(rounded);

    if text.contains('e') {
        text = en_precision(rounded, 10);
    } else if text.len() > LONGUEUR_MAX {
        text = en_precision(rounded, 12);
    }

    if text.contains('.') && !text.contains('e') {
        text = text.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    text
}

/* ------------------------ Arrondi ------------------------ */

fn arrondi_10_decimales(value: f64) -> f64 {
    let r = arrondi_demi_haut((value + f64::EPSILON) * 1e10) / 1e10;
    // |value| ~ 1e298 : l’échelle déborde, arrondir n’a plus de sens
    if r.is_finite() {
        r
    } else {
        value
    }
}

/// Entier le plus proche, demi vers +∞ (-2.5 -> -2).
fn arrondi_demi_haut(x: f64) -> f64 {
    let f = x.floor();
    if x - f >= 0.5 {
        f + 1.0
    } else {
        f
    }
}

/* ------------------------ Rendu texte ------------------------ */

/// Découpe un rendu `{:e}` de Rust ("-1.25e-7") en (négatif, chiffres, exposant).
fn decompose(exp: &str) -> (bool, String, i32) {
    let (negatif, reste) = match exp.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, exp),
    };
    let (mantisse, exposant) = reste.split_once('e').unwrap_or((reste, "0"));
    let chiffres: String = mantisse.chars().filter(|c| c.is_ascii_digit()).collect();
    (negatif, chiffres, exposant.parse().unwrap_or(0))
}

/// d.ddde±N
fn notation_exp(chiffres: &str, exposant: i32) -> String {
    let mut s = String::with_capacity(chiffres.len() + 6);
    s.push_str(&chiffres[..1]);
    if chiffres.len() > 1 {
        s.push('.');
        s.push_str(&chiffres[1..]);
    }
    s.push('e');
    s.push(if exposant >= 0 { '+' } else { '-' });
    s.push_str(&exposant.abs().to_string());
    s
}

/// Rendu “naturel” : chiffres les plus courts qui relisent la même valeur,
/// décimal pour 1e-7 < |x| < 1e21, exponentiel sinon.
fn nombre_en_texte(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }

    let (negatif, chiffres, exposant) = decompose(&format!("{x:e}"));
    let k = chiffres.len() as i32;
    let n = exposant + 1; // position du point décimal

    let mut s = String::new();
    if negatif {
        s.push('-');
    }

    if k <= n && n <= 21 {
        s.push_str(&chiffres);
        s.push_str(&"0".repeat((n - k) as usize));
    } else if 0 < n && n <= 21 {
        s.push_str(&chiffres[..n as usize]);
        s.push('.');
        s.push_str(&chiffres[n as usize..]);
    } else if -6 < n && n <= 0 {
        s.push_str("0.");
        s.push_str(&"0".repeat((-n) as usize));
        s.push_str(&chiffres);
    } else {
        s.push_str(&notation_exp(&chiffres, n - 1));
    }
    s
}

/// `p` chiffres significatifs : exponentiel si l’exposant sort de [-6, p), décimal sinon.
fn en_precision(x: f64, p: usize) -> String {
    let (negatif, chiffres, e) = decompose(&format!("{:.*e}", p - 1, x));

    let mut s = String::new();
    if negatif {
        s.push('-');
    }

    if e < -6 || e >= p as i32 {
        s.push_str(&notation_exp(&chiffres, e));
    } else if e >= 0 {
        let n = (e + 1) as usize;
        s.push_str(&chiffres[..n]);
        if n < chiffres.len() {
            s.push('.');
            s.push_str(&chiffres[n..]);
        }
    } else {
        s.push_str("0.");
        s.push_str(&"0".repeat((-e - 1) as usize));
        s.push_str(&chiffres);
    }
    s
}
