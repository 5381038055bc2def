// src/math/alpha/ranking.rs

use crate::math::{
    geometry::{TriangulatedPointSet, circumradius::triangle_circumradius_sq_with_tolerance},
    utils::constants,
};

/// Ausschluss-Flags pro Dreieck; `true` heißt "nicht im Shape".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Mask(Vec<bool>);

impl Mask {
    /// Keine Ausschlüsse.
    pub fn all_included(len: usize) -> Self {
        Self(vec![false; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_excluded(&self, triangle: usize) -> bool {
        self.0.get(triangle).copied().unwrap_or(true)
    }

    pub fn excluded_count(&self) -> usize {
        self.0.iter().filter(|&&excluded| excluded).count()
    }

    /// Indizes der nicht ausgeschlossenen Dreiecke, aufsteigend.
    pub fn selected(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(index, &excluded)| (!excluded).then_some(index))
            .collect()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<bool> {
        self.0
    }
}

impl From<Vec<bool>> for Mask {
    fn from(flags: Vec<bool>) -> Self {
        Self(flags)
    }
}

/// Umkreisradius-Tabelle und aufsteigende Rangfolge aller Dreiecke.
///
/// Wird einmal bei der Konstruktion berechnet und danach nicht verändert.
#[derive(Debug, Clone)]
pub struct AlphaRanking {
    circumradii_sq: Vec<f64>,
    rank_order: Vec<usize>,
}

impl AlphaRanking {
    pub fn new(point_set: &TriangulatedPointSet) -> Self {
        Self::with_tolerance(point_set, constants::DEGENERACY_TOLERANCE)
    }

    pub fn with_tolerance(point_set: &TriangulatedPointSet, tolerance: f64) -> Self {
        let circumradii_sq: Vec<f64> = point_set
            .iter()
            .map(|[a, b, c]| triangle_circumradius_sq_with_tolerance(a, b, c, tolerance))
            .collect();

        // `sort_by` ist stabil: Gleichstände bleiben nach Dreiecksindex sortiert.
        let mut rank_order: Vec<usize> = (0..circumradii_sq.len()).collect();
        rank_order.sort_by(|&a, &b| circumradii_sq[a].total_cmp(&circumradii_sq[b]));

        Self {
            circumradii_sq,
            rank_order,
        }
    }

    pub fn len(&self) -> usize {
        self.circumradii_sq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circumradii_sq.is_empty()
    }

    /// Quadrierte Umkreisradien, indiziert nach Dreieck.
    pub fn circumradii_sq(&self) -> &[f64] {
        &self.circumradii_sq
    }

    /// Dreiecksindizes, aufsteigend nach Umkreisradius.
    pub fn rank_order(&self) -> &[usize] {
        &self.rank_order
    }

    /// Quadrierte Umkreisradien in Rangfolge.
    pub fn sorted_circumradii_sq(&self) -> Vec<f64> {
        self.rank_order
            .iter()
            .map(|&t| self.circumradii_sq[t])
            .collect()
    }

    /// Die `n` kleinsten Dreiecke (gekappt auf die Gesamtzahl).
    pub fn ranked_prefix(&self, n: usize) -> &[usize] {
        &self.rank_order[..n.min(self.rank_order.len())]
    }

    /// Dreieck *i* ist ausgeschlossen, wenn `r_i^2 > 1 / alpha^2`.
    /// `alpha <= 0` schließt nichts aus.
    pub fn mask_for(&self, alpha: f64) -> Mask {
        if alpha <= 0.0 {
            return Mask::all_included(self.len());
        }
        let limit = 1.0 / (alpha * alpha);
        Mask(self.circumradii_sq.iter().map(|&r| r > limit).collect())
    }

    pub fn selected_triangles(&self, alpha: f64) -> Vec<usize> {
        self.mask_for(alpha).selected()
    }

    /// Alpha, das das Dreieck auf Rang `n` gerade noch einschließt.
    ///
    /// Ist dieses Dreieck entartet, ergibt sich ein Wert `<= 0`, also die
    /// volle Triangulation.
    pub fn alpha_for_rank(&self, n: usize, epsilon: f64) -> Option<f64> {
        let triangle = *self.rank_order.get(n)?;
        Some(1.0 / self.circumradii_sq[triangle].sqrt() - epsilon)
    }
}
