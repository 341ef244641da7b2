//! src/app/historique.rs
//!
//! Historique des calculs validés : le plus récent d’abord, taille bornée.
//! Sérialisé comme une simple suite ordonnée de paires {expression, result}.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Nombre maximal d’entrées conservées.
pub const HISTORIQUE_MAX: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntreeHistorique {
    pub expression: String,
    pub result: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Historique {
    entrees: VecDeque<EntreeHistorique>,
}

impl Historique {
    /// Ajoute en tête ; la plus ancienne entrée tombe au-delà de HISTORIQUE_MAX.
    pub fn ajouter(&mut self, expression: impl Into<String>, result: impl Into<String>) {
        self.entrees.push_front(EntreeHistorique {
            expression: expression.into(),
            result: result.into(),
        });
        self.entrees.truncate(HISTORIQUE_MAX);
    }

    pub fn entrees(&self) -> impl Iterator<Item = &EntreeHistorique> {
        self.entrees.iter()
    }

    /// 0 = plus récent.
    pub fn get(&self, index: usize) -> Option<&EntreeHistorique> {
        self.entrees.get(index)
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    /// Un blob relu peut dépasser la borne (ancienne version) : on la réapplique.
    pub fn borne(mut self) -> Self {
        self.entrees.truncate(HISTORIQUE_MAX);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_recent_d_abord() {
        let mut h = Historique::default();
        h.ajouter("1+1", "2");
        h.ajouter("2*3", "6");
        assert_eq!(h.len(), 2);
        assert_eq!(h.get(0).unwrap().expression, "2*3");
        assert_eq!(h.get(1).unwrap().result, "2");
    }

    #[test]
    fn taille_bornee() {
        let mut h = Historique::default();
        for i in 0..(HISTORIQUE_MAX + 5) {
            h.ajouter(format!("{i}+0"), i.to_string());
        }
        assert_eq!(h.len(), HISTORIQUE_MAX);
        // les 5 plus anciennes sont tombées
        let derniere = h.entrees().last().unwrap();
        assert_eq!(derniere.result, "5");
    }

    #[test]
    fn vider() {
        let mut h = Historique::default();
        h.ajouter("1", "1");
        h.vider();
        assert!(h.is_empty());
    }

    #[test]
    fn serialise_en_suite_ordonnee() {
        let mut h = Historique::default();
        h.ajouter("1+1", "2");
        h.ajouter("9/3", "3");
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(
            json,
            r#"[{"expression":"9/3","result":"3"},{"expression":"1+1","result":"2"}]"#
        );

        let relu: Historique = serde_json::from_str(&json).unwrap();
        assert_eq!(relu, h);
    }

    #[test]
    fn borne_apres_relecture() {
        let entrees: Vec<_> = (0..HISTORIQUE_MAX + 3)
            .map(|i| EntreeHistorique {
                expression: i.to_string(),
                result: i.to_string(),
            })
            .collect();
        let json = serde_json::to_string(&entrees).unwrap();
        let h: Historique = serde_json::from_str(&json).unwrap();
        assert_eq!(h.borne().len(), HISTORIQUE_MAX);
    }
}
