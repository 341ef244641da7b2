// src/noyau/fonctions.rs
//
// Fonctions unaires (touches √, x², 1/x, %, ±, sin, cos, tan) + constantes.
// - appliquées au dernier nombre de l’expression via edition::apply_unary
// - trig : l’angle est lu en degrés ou en radians selon ModeAngle

use serde::{Deserialize, Serialize};

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

impl ModeAngle {
    pub fn en_radians(self, angle: f64) -> f64 {
        match self {
            ModeAngle::Degres => degrees_to_radians(angle),
            ModeAngle::Radians => angle,
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            ModeAngle::Degres => "DEG",
            ModeAngle::Radians => "RAD",
        }
    }

    pub fn bascule(self) -> ModeAngle {
        match self {
            ModeAngle::Degres => ModeAngle::Radians,
            ModeAngle::Radians => ModeAngle::Degres,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionUnaire {
    Racine,
    Carre,
    Inverse,
    Pourcentage,
    Oppose,
    Sin,
    Cos,
    Tan,
}

impl FonctionUnaire {
    pub const TOUTES: [FonctionUnaire; 8] = [
        FonctionUnaire::Racine,
        FonctionUnaire::Carre,
        FonctionUnaire::Inverse,
        FonctionUnaire::Pourcentage,
        FonctionUnaire::Oppose,
        FonctionUnaire::Sin,
        FonctionUnaire::Cos,
        FonctionUnaire::Tan,
    ];

    /// Peut rendre NaN/∞ (√-1, 1/0) : l’appelant vérifie.
    pub fn appliquer(self, x: f64, mode: ModeAngle) -> f64 {
        match self {
            FonctionUnaire::Racine => x.sqrt(),
            FonctionUnaire::Carre => x * x,
            FonctionUnaire::Inverse => 1.0 / x,
            FonctionUnaire::Pourcentage => x / 100.0,
            FonctionUnaire::Oppose => -x,
            FonctionUnaire::Sin => mode.en_radians(x).sin(),
            FonctionUnaire::Cos => mode.en_radians(x).cos(),
            FonctionUnaire::Tan => mode.en_radians(x).tan(),
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            FonctionUnaire::Racine => "√",
            FonctionUnaire::Carre => "x²",
            FonctionUnaire::Inverse => "1/x",
            FonctionUnaire::Pourcentage => "%",
            FonctionUnaire::Oppose => "±",
            FonctionUnaire::Sin => "sin",
            FonctionUnaire::Cos => "cos",
            FonctionUnaire::Tan => "tan",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => std::f64::consts::PI,
            Constante::E => std::f64::consts::E,
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            Constante::Pi => "π",
            Constante::E => "e",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::format::format_result;

    #[test]
    fn degres_vers_radians() {
        assert!((degrees_to_radians(180.0) - std::f64::consts::PI).abs() < 1e-15);
        assert_eq!(degrees_to_radians(0.0), 0.0);
        assert!((degrees_to_radians(90.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn trig_en_degres_arrondie_a_l_affichage() {
        let s = FonctionUnaire::Sin.appliquer(30.0, ModeAngle::Degres);
        assert_eq!(format_result(s), "0.5");
        // sin(180°) vaut ~1.2e-16 en flottant : l’arrondi affiche 0
        let s = FonctionUnaire::Sin.appliquer(180.0, ModeAngle::Degres);
        assert_eq!(format_result(s), "0");
        let c = FonctionUnaire::Cos.appliquer(60.0, ModeAngle::Degres);
        assert_eq!(format_result(c), "0.5");
    }

    #[test]
    fn trig_en_radians() {
        let c = FonctionUnaire::Cos.appliquer(0.0, ModeAngle::Radians);
        assert_eq!(c, 1.0);
        let t = FonctionUnaire::Tan.appliquer(std::f64::consts::FRAC_PI_4, ModeAngle::Radians);
        assert_eq!(format_result(t), "1");
    }

    #[test]
    fn fonctions_simples() {
        let m = ModeAngle::Degres;
        assert_eq!(FonctionUnaire::Racine.appliquer(16.0, m), 4.0);
        assert_eq!(FonctionUnaire::Carre.appliquer(-3.0, m), 9.0);
        assert_eq!(FonctionUnaire::Inverse.appliquer(4.0, m), 0.25);
        assert_eq!(FonctionUnaire::Pourcentage.appliquer(50.0, m), 0.5);
        assert_eq!(FonctionUnaire::Oppose.appliquer(2.0, m), -2.0);
    }

    #[test]
    fn domaines_hors_limites() {
        let m = ModeAngle::Radians;
        assert!(FonctionUnaire::Racine.appliquer(-1.0, m).is_nan());
        assert!(FonctionUnaire::Inverse.appliquer(0.0, m).is_infinite());
    }

    #[test]
    fn bascule_mode() {
        assert_eq!(ModeAngle::default(), ModeAngle::Degres);
        assert_eq!(ModeAngle::Degres.bascule(), ModeAngle::Radians);
        assert_eq!(ModeAngle::Radians.bascule().libelle(), "DEG");
    }
}
