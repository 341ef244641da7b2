//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le noyau sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur d’expression bornée
//! - budget temps global
//! - invariants : jamais de panique, Succes => valeur finie,
//!   format idempotent, aperçu sans opérateur final

use std::time::{Duration, Instant};

use super::{
    apply_unary, evaluate, format_result, insert_literal, last_numeral, preview_expression,
    replace_last_numeral, tokenize, trailing_binary_operator, Issue, ERREUR,
};
use super::jetons::is_operator;

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

/* ------------------------ Générateurs ------------------------ */

const CLAVIER: &[u8] = b"0123456789.+-*/";

/// Suite de touches quelconque (souvent mal formée : c’est voulu).
fn gen_saisie(rng: &mut Rng, max_len: u32) -> String {
    let n = rng.pick(max_len + 1);
    (0..n)
        .map(|_| CLAVIER[rng.pick(CLAVIER.len() as u32) as usize] as char)
        .collect()
}

/// Flottant fini sur des ordres de grandeur variés (1e-12 .. 1e25), signe aléatoire.
fn gen_valeur(rng: &mut Rng) -> f64 {
    let mantisse = rng.next_u32() as f64 / u32::MAX as f64 * 10.0;
    let exposant = rng.pick(38) as i32 - 12;
    let v = mantisse * 10f64.powi(exposant);
    if rng.pick(2) == 0 {
        v
    } else {
        -v
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_evaluation_sans_panique() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0x5EED_CA1C);

    for _ in 0..20_000 {
        budget(start, max);
        let s = gen_saisie(&mut rng, 14);

        let issue = evaluate(&s);
        if let Issue::Succes(v) = issue {
            assert!(v.is_finite(), "expr={s:?} v={v}");
            assert!(tokenize(&s).is_ok(), "Succes sans jetons ? expr={s:?}");
        }

        // l’aperçu ne finit jamais par un opérateur
        let apercu = preview_expression(&s);
        assert!(
            !apercu.chars().last().is_some_and(is_operator),
            "expr={s:?} aperçu={apercu:?}"
        );

        // opérateur binaire final => dernier caractère est cet opérateur
        if let Some(op) = trailing_binary_operator(&s) {
            assert_eq!(s.chars().last(), Some(op.symbole()), "expr={s:?}");
        }

        // le dernier nombre est bien un suffixe
        let dernier = last_numeral(&s);
        assert!(s.ends_with(dernier), "expr={s:?} dernier={dernier:?}");
        if !dernier.is_empty() {
            assert_eq!(replace_last_numeral(&s, dernier), s, "expr={s:?}");
        }
    }
}

#[test]
fn fuzz_format_idempotent() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(42);

    for _ in 0..20_000 {
        budget(start, max);
        let v = gen_valeur(&mut rng);

        let f = format_result(v);
        assert_ne!(f, ERREUR, "v={v}");
        let relu: f64 = f
            .parse()
            .unwrap_or_else(|e| panic!("format illisible {f:?} (v={v}): {e}"));
        assert_eq!(format_result(relu), f, "v={v}");

        // jamais de zéro de queue après un point (hors exponentiel)
        if f.contains('.') && !f.contains('e') {
            assert!(!f.ends_with('0') && !f.ends_with('.'), "v={v} f={f:?}");
        }
    }
}

#[test]
fn fuzz_unaire_et_insertion() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(7);

    for _ in 0..10_000 {
        budget(start, max);
        let s = gen_saisie(&mut rng, 10);

        // x -> x : si Ok, la valeur est finie et l’expression finit par sa forme formatée
        if let Ok(u) = apply_unary(&s, |x| x) {
            assert!(u.valeur.is_finite());
            assert!(u.expression.ends_with(&format_result(u.valeur)), "expr={s:?} u={u:?}");
        }

        let v = gen_valeur(&mut rng);
        let inseree = insert_literal(&s, v);
        assert!(inseree.starts_with(&s), "expr={s:?}");
        assert!(inseree.ends_with(&format_result(v)), "expr={s:?} v={v}");
    }
}
