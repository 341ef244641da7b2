// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Jeton en RPN (postfix)
// - Puis réduire la RPN sur une pile de f64
//
// Règles:
// - pas de parenthèses : seule la précédence compte
// - précédence égale => on dépile (associativité à gauche)
// - le moins unaire est déjà replié dans le texte du nombre par le tokenizer

use super::erreur::ErreurNoyau;
use super::jetons::{Jeton, Operateur};

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [5, +, 3, *, 2]
///   rpn:    [5, 3, 2, *, +]
pub fn to_rpn(tokens: &[Jeton]) -> Vec<Jeton> {
    let mut out: Vec<Jeton> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Operateur> = Vec::new();

    for tok in tokens {
        match tok {
            Jeton::Nombre(_) => out.push(tok.clone()),
            Jeton::Op(op) => {
                while let Some(top) = ops.last() {
                    if top.precedence() >= op.precedence() {
                        out.push(Jeton::Op(*top));
                        ops.pop();
                    } else {
                        break;
                    }
                }
                ops.push(*op);
            }
        }
    }

    // vide la pile ops (LIFO)
    while let Some(op) = ops.pop() {
        out.push(Jeton::Op(op));
    }

    out
}

/// Réduit une RPN en valeur.
///
/// - un nombre est lu en f64 et empilé
/// - un opérateur dépile b puis a et empile `a op b`
/// - division par un zéro exact : arrêt immédiat (DivisionParZero)
/// - à la fin, la pile doit contenir exactement une valeur finie
pub fn reduce_rpn(rpn: &[Jeton]) -> Result<f64, ErreurNoyau> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Jeton::Nombre(n) => {
                let v = n
                    .parse::<f64>()
                    .map_err(|_| ErreurNoyau::NombreMalforme)?;
                st.push(v);
            }
            Jeton::Op(op) => {
                let b = st.pop().ok_or(ErreurNoyau::OperandesInsuffisantes)?;
                let a = st.pop().ok_or(ErreurNoyau::OperandesInsuffisantes)?;

                let v = match op {
                    Operateur::Plus => a + b,
                    Operateur::Moins => a - b,
                    Operateur::Fois => a * b,
                    Operateur::Divise => {
                        if b == 0.0 {
                            tracing::trace!(dividende = a, "division par zéro");
                            return Err(ErreurNoyau::DivisionParZero);
                        }
                        a / b
                    }
                };
                st.push(v);
            }
        }
    }

    match st.as_slice() {
        [v] if v.is_finite() => Ok(*v),
        [_] => Err(ErreurNoyau::ResultatNonFini),
        [] => Err(ErreurNoyau::ExpressionVide),
        _ => Err(ErreurNoyau::OperandesInsuffisantes),
    }
}
