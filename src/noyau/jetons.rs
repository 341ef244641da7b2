// src/noyau/jetons.rs

use std::fmt;

use super::erreur::ErreurNoyau;

/// Les quatre opérateurs binaires du clavier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn from_char(c: char) -> Option<Operateur> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    /// + et - : 1 ; * et / : 2.
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

/// Vrai si `c` est l’un de + - * /.
pub fn is_operator(c: char) -> bool {
    Operateur::from_char(c).is_some()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    /// Littéral décimal signé, gardé sous forme texte (ex: "-3.5", "12.").
    Nombre(String),
    Op(Operateur),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Precedent {
    Nombre,
    Operateur,
}

/// Tokenize une expression du clavier.
///
/// - chiffres et '.' s’accumulent dans le nombre courant (un seul '.')
/// - '-' en début d’entrée ou après un opérateur = signe du nombre qui suit
/// - tout autre opérateur exige un nombre complet avant lui
/// - les autres caractères sont ignorés
pub fn tokenize(expr: &str) -> Result<Vec<Jeton>, ErreurNoyau> {
    let mut out = Vec::new();
    let mut nombre = String::new();
    // Début d’entrée : comme après un opérateur (le '-' initial est unaire).
    let mut precedent = Precedent::Operateur;

    for c in expr.chars() {
        if c.is_ascii_digit() {
            nombre.push(c);
            precedent = Precedent::Nombre;
            continue;
        }

        if c == '.' {
            if nombre.contains('.') {
                return Err(ErreurNoyau::NombreMalforme);
            }
            nombre.push(c);
            precedent = Precedent::Nombre;
            continue;
        }

        let Some(op) = Operateur::from_char(c) else {
            continue;
        };

        if op == Operateur::Moins && precedent == Precedent::Operateur {
            nombre.push('-');
            precedent = Precedent::Nombre;
            continue;
        }

        if nombre.is_empty() || nombre == "-" {
            return Err(ErreurNoyau::NombreMalforme);
        }
        out.push(Jeton::Nombre(std::mem::take(&mut nombre)));
        out.push(Jeton::Op(op));
        precedent = Precedent::Operateur;
    }

    if nombre == "-" {
        return Err(ErreurNoyau::NombreMalforme);
    }
    if !nombre.is_empty() {
        out.push(Jeton::Nombre(nombre));
    }

    Ok(out)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Jeton]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        match t {
            Jeton::Nombre(n) => out.push(n.clone()),
            Jeton::Op(op) => out.push(op.to_string()),
        }
    }
    out.join(" ")
}
