// src/math/alpha/shaper.rs

use crate::math::{
    alpha::{
        assembler::ShapeAssembler,
        config::AlphaShaperConfig,
        optimizer::CoverageOptimizer,
        ranking::{AlphaRanking, Mask},
        shape::Shape,
    },
    error::{AlphaError, AlphaResult},
    geometry::{
        GeoUnion, Normalization, PolygonUnion, SpadeTriangulator, TriangulatedPointSet,
        Triangulator,
    },
    types::*,
    utils::constants,
};
use tracing::{debug, info};

/// Ergebnis von [`AlphaShaper::optimize`].
#[derive(Debug, Clone)]
pub struct Optimum {
    /// Größtes Alpha, bei dem noch jeder Punkt von einem Dreieck berührt wird.
    pub alpha: f64,
    /// Rang des letzten benötigten Dreiecks; `rank_order[..=boundary_rank]` deckt alles ab.
    pub boundary_rank: usize,
    /// Shape aus den `boundary_rank + 1` kleinsten Dreiecken.
    pub shape: Shape,
}

impl Optimum {
    pub fn triangle_count(&self) -> usize {
        self.boundary_rank + 1
    }
}

/// Alpha-Shape-Engine über einer triangulierten Punktmenge.
///
/// Die Punktmenge wird (optional normalisiert) trianguliert und einmalig nach
/// Umkreisradius sortiert. Danach liefert die Engine Shapes für beliebige
/// Alpha-Werte und sucht das optimale Alpha, bei dem kein Punkt isoliert bleibt.
/// Koordinaten aller Shapes liegen immer im Maßstab der Eingabe; Alpha selbst
/// bezieht sich bei aktivierter Normalisierung auf die normalisierten Punkte.
pub struct AlphaShaper {
    config: AlphaShaperConfig,
    point_set: TriangulatedPointSet,
    ranking: AlphaRanking,
    normalization: Option<Normalization>,
    mask: Mask,
    union: Box<dyn PolygonUnion>,
}

impl AlphaShaper {
    /// Standard-Konfiguration: Normalisierung an, Delaunay über `spade`,
    /// Union über `geo`.
    pub fn new<I, C>(points: I) -> AlphaResult<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Point2D>,
    {
        Self::with_config(points, AlphaShaperConfig::default())
    }

    pub fn with_config<I, C>(points: I, config: AlphaShaperConfig) -> AlphaResult<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Point2D>,
    {
        Self::with_providers(points, config, &SpadeTriangulator, Box::new(GeoUnion))
    }

    pub fn with_providers<I, C>(
        points: I,
        config: AlphaShaperConfig,
        triangulator: &dyn Triangulator,
        union: Box<dyn PolygonUnion>,
    ) -> AlphaResult<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Point2D>,
    {
        let points: Vec<Point2D> = points.into_iter().map(Into::into).collect();
        Self::build(points, config, union, |working| {
            TriangulatedPointSet::new(working, triangulator)
        })
    }

    /// Übernimmt eine extern berechnete Triangulation über `points`.
    ///
    /// `deduplicate` ist hier nicht erlaubt, da es die Indizes der Dreiecke
    /// ungültig machen würde.
    pub fn from_triangulation(
        points: Vec<Point2D>,
        triangles: Vec<TriangleIndices>,
        config: AlphaShaperConfig,
    ) -> AlphaResult<Self> {
        if config.deduplicate {
            return Err(AlphaError::InvalidConfiguration {
                message: "deduplicate cannot be combined with a precomputed triangulation"
                    .to_string(),
            });
        }
        Self::build(points, config, Box::new(GeoUnion), |working| {
            TriangulatedPointSet::from_triangles(working, triangles)
        })
    }

    fn build<F>(
        mut points: Vec<Point2D>,
        config: AlphaShaperConfig,
        union: Box<dyn PolygonUnion>,
        triangulate: F,
    ) -> AlphaResult<Self>
    where
        F: FnOnce(Vec<Point2D>) -> AlphaResult<TriangulatedPointSet>,
    {
        config.validate()?;

        // Vor jeder Triangulation prüfen
        if points.len() < constants::MIN_POINTS {
            return Err(AlphaError::NotEnoughPoints {
                expected: constants::MIN_POINTS,
                actual: points.len(),
            });
        }

        if config.deduplicate {
            let (kept, removed) = dedup_points(&points);
            if removed > 0 {
                info!("AlphaShaper: removed {} duplicate point(s)", removed);
            }
            points = kept;
        }

        let normalization = if config.normalize {
            Some(Normalization::fit(&points)?)
        } else {
            None
        };

        let working = match &normalization {
            Some(norm) => norm.normalize_points(&points),
            None => points,
        };

        let point_set = triangulate(working)?;
        let ranking = AlphaRanking::with_tolerance(&point_set, config.degeneracy_tolerance);

        // Radien bleiben normalisiert, Geometrie geht zurück in den Eingabe-Maßstab.
        let point_set = match &normalization {
            Some(norm) => point_set.map_points(|p| norm.denormalize_coord(p)),
            None => point_set,
        };

        debug!(
            "AlphaShaper: {} points, {} triangles, {} isolated, normalized: {}",
            point_set.num_points(),
            point_set.len(),
            point_set.isolated_points().len(),
            normalization.is_some()
        );

        let mask = Mask::all_included(ranking.len());
        Ok(Self {
            config,
            point_set,
            ranking,
            normalization,
            mask,
            union,
        })
    }

    fn assemble(&self, triangles: &[usize]) -> AlphaResult<Shape> {
        ShapeAssembler::new(&self.point_set, self.union.as_ref()).assemble(triangles)
    }

    /// Shape bei gegebenem Alpha. `alpha <= 0` liefert die volle Triangulation.
    pub fn get_shape(&self, alpha: f64) -> AlphaResult<Shape> {
        self.assemble(&self.ranking.selected_triangles(alpha))
    }

    /// Shape aus den `n` kleinsten Dreiecken.
    pub fn nth_shape(&self, n: usize) -> AlphaResult<Shape> {
        self.assemble(self.ranking.ranked_prefix(n))
    }

    /// Shape aus den aktuell aktiven (nicht maskierten) Dreiecken.
    pub fn current_shape(&self) -> AlphaResult<Shape> {
        self.assemble(&self.mask.selected())
    }

    /// Sucht das größte Alpha, bei dem jeder Punkt noch Ecke eines
    /// ausgewählten Dreiecks ist, und setzt die aktive Maske entsprechend.
    ///
    /// Fails with [`AlphaError::OptimizationFailure`] if the triangulation
    /// left points untouched (usually duplicates); deduplicate the input.
    pub fn optimize(&mut self) -> AlphaResult<Optimum> {
        let boundary_rank = CoverageOptimizer::minimal_covering_rank(&self.point_set, &self.ranking)?;
        let alpha = self
            .ranking
            .alpha_for_rank(boundary_rank, self.config.alpha_epsilon)
            .ok_or(AlphaError::TriangleIndexOutOfRange {
                triangle: boundary_rank,
                count: self.ranking.len(),
            })?;

        let shape = self.nth_shape(boundary_rank + 1)?;
        self.set_mask_at_alpha(alpha);

        info!(
            "AlphaShaper: optimal alpha {:.6e} uses {} of {} triangles ({} active)",
            alpha,
            boundary_rank + 1,
            self.ranking.len(),
            self.mask.len() - self.mask.excluded_count()
        );

        Ok(Optimum {
            alpha,
            boundary_rank,
            shape,
        })
    }

    pub fn mask_for(&self, alpha: f64) -> Mask {
        self.ranking.mask_for(alpha)
    }

    pub fn selected_triangles(&self, alpha: f64) -> Vec<usize> {
        self.ranking.selected_triangles(alpha)
    }

    /// Aktive Maske. Für einen Schnappschuss klonen.
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn active_triangles(&self) -> Vec<usize> {
        self.mask.selected()
    }

    pub fn set_mask(&mut self, mask: Mask) -> AlphaResult<&mut Self> {
        if mask.len() != self.ranking.len() {
            return Err(AlphaError::MaskLength {
                expected: self.ranking.len(),
                actual: mask.len(),
            });
        }
        self.mask = mask;
        Ok(self)
    }

    pub fn set_mask_at_alpha(&mut self, alpha: f64) -> &mut Self {
        self.mask = self.ranking.mask_for(alpha);
        self
    }

    /// Dreiecke in Rangfolge (kleinster Umkreis zuerst).
    pub fn sorted_triangles(&self) -> Vec<TriangleIndices> {
        self.ranking
            .rank_order()
            .iter()
            .map(|&t| self.point_set.triangles()[t])
            .collect()
    }

    /// Punkte, die in keinem Dreieck der Triangulation vorkommen.
    pub fn uncovered_points(&self) -> Vec<usize> {
        self.point_set.isolated_points()
    }

    pub fn config(&self) -> &AlphaShaperConfig {
        &self.config
    }

    pub fn point_set(&self) -> &TriangulatedPointSet {
        &self.point_set
    }

    pub fn ranking(&self) -> &AlphaRanking {
        &self.ranking
    }

    pub fn normalization(&self) -> Option<&Normalization> {
        self.normalization.as_ref()
    }

    /// Anzahl der Dreiecke.
    pub fn len(&self) -> usize {
        self.point_set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.point_set.is_empty()
    }
}
