// src/noyau/erreur.rs
//
// Erreurs du noyau.
// Aucune ne “tue” le processus : l’appelant décide de l’affichage
// (ex: écran figé sur "Error" jusqu’à un effacement explicite).

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    /// Deux points dans un même nombre, "-" seul, littéral illisible.
    #[error("nombre mal formé")]
    NombreMalforme,

    #[error("expression vide")]
    ExpressionVide,

    /// La suite de jetons se termine par un opérateur binaire.
    #[error("opérateur sans opérande droit")]
    OperateurFinal,

    #[error("opérandes insuffisants")]
    OperandesInsuffisantes,

    /// Expression bien formée, mais division par un zéro exact.
    #[error("division par zéro")]
    DivisionParZero,

    /// Infini ou NaN hors du cas division par zéro.
    #[error("résultat non fini")]
    ResultatNonFini,

    /// Une fonction unaire a produit une valeur non finie (ex: √-1).
    #[error("résultat invalide")]
    ResultatInvalide,
}
