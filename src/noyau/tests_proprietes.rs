//! Propriétés attendues du noyau, vues de l’extérieur (API publique du module).

use super::{
    apply_unary, evaluate, format_result, insert_literal, preview_expression, tokenize, Issue,
    Jeton,
};
use super::rpn::{reduce_rpn, to_rpn};

#[test]
fn prop_precedence() {
    assert_eq!(evaluate("5+3*2"), Issue::Succes(11.0));
}

#[test]
fn prop_moins_unaire() {
    assert_eq!(evaluate("-5+2"), Issue::Succes(-3.0));
}

#[test]
fn prop_division_par_zero_distincte_d_invalide() {
    let i = evaluate("9/0");
    assert!(i.is_valid());
    assert_eq!(i, Issue::DivisionParZero);

    for s in ["+5", "*5", "/5"] {
        assert_eq!(evaluate(s), Issue::Invalide, "expr={s:?}");
    }
}

#[test]
fn prop_zeros_de_queue() {
    assert_eq!(format_result(10.0), "10");
    assert_eq!(format_result(4.50000), "4.5");
    assert_eq!(format_result(4.25), "4.25");
}

#[test]
fn prop_insertion_pi() {
    assert!(insert_literal("2", std::f64::consts::PI).starts_with("2*"));
}

#[test]
fn prop_unaire_carre() {
    let u = apply_unary("4", |x| x * x).unwrap();
    assert_eq!(u.expression, "16");
}

#[test]
fn prop_apercu() {
    assert_eq!(preview_expression("12+"), "12");
    assert_eq!(preview_expression("-"), "");
}

#[test]
fn prop_nombre_seul_aller_retour() {
    for s in ["0", "7", "-7", "3.25", "-0.5", "12.", ".75", "1000000"] {
        let jetons = tokenize(s).unwrap();
        assert_eq!(jetons, vec![Jeton::Nombre(s.to_string())]);
        let v = reduce_rpn(&to_rpn(&jetons)).unwrap();
        assert_eq!(v, s.parse::<f64>().unwrap(), "s={s:?}");
    }
}

#[test]
fn prop_apercu_toujours_evaluable_ou_vide() {
    // Une saisie typique : chaque préfixe donne un aperçu vide ou bien formé.
    let saisie = "12+3*-4.5/2-";
    for fin in 0..=saisie.len() {
        let apercu = preview_expression(&saisie[..fin]);
        if apercu.is_empty() {
            continue;
        }
        assert!(evaluate(apercu).is_valid(), "aperçu={apercu:?}");
    }
}
