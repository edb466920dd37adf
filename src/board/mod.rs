mod config;
mod measurement;

pub use config::BoardConfig;
pub use measurement::{AngleLabel, Measurement, MeasurementId};

use crate::error::{MeasureError, Result};
use crate::geometry::{AngleTriple, Corner};
use crate::math::Point3;
use slotmap::SlotMap;

/// What happened after a point was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// The point was queued; `count` points are waiting for a triple.
    Pending { count: usize },
    /// The point completed a triple, now stored under this id.
    Completed(MeasurementId),
}

/// Collects picked points into angle measurements.
///
/// Every three consecutive picks form one measurement (`A`, `B`, `C` in
/// pick order, `B` being the vertex). Measurements are owned by the board
/// and referenced via typed IDs (generational indices), so a caller can
/// keep its own displayed objects keyed by [`MeasurementId`] and replace
/// them when the measurement's revision changes.
#[derive(Debug, Default)]
pub struct MeasurementBoard {
    config: BoardConfig,
    measurements: SlotMap<MeasurementId, Measurement>,
    pending: Vec<Point3>,
}

impl MeasurementBoard {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn new(config: BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Returns the board configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Adds a picked point.
    ///
    /// # Errors
    ///
    /// Returns an error if the completed measurement cannot be built. The
    /// pending points are left untouched in that case.
    pub fn pick(&mut self, point: Point3) -> Result<PickOutcome> {
        if self.pending.len() < 2 {
            self.pending.push(point);
            return Ok(PickOutcome::Pending {
                count: self.pending.len(),
            });
        }

        let triple = AngleTriple::new(self.pending[0], self.pending[1], point);
        let measurement = Measurement::build(triple, &self.config, 0)?;
        let degrees = measurement.angle().degrees();
        self.pending.clear();

        let id = self.measurements.insert(measurement);
        tracing::debug!(?id, "angle at vertex (pick): {degrees:.2}°");
        Ok(PickOutcome::Completed(id))
    }

    /// Moves one point of a measurement and rebuilds it.
    ///
    /// # Errors
    ///
    /// Returns an error if the measurement is not found or cannot be rebuilt.
    pub fn drag(&mut self, id: MeasurementId, corner: Corner, point: Point3) -> Result<&Measurement> {
        let current = self
            .measurements
            .get_mut(id)
            .ok_or(MeasureError::MeasurementNotFound)?;

        let mut triple = *current.triple();
        triple.set(corner, point);
        *current = Measurement::build(triple, &self.config, current.revision() + 1)?;

        tracing::debug!(?id, "angle at vertex (drag): {:.2}°", current.angle().degrees());
        Ok(&*current)
    }

    /// Moves a point that is not yet part of a measurement.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` does not refer to a pending point.
    pub fn move_pending(&mut self, index: usize, point: Point3) -> Result<()> {
        let len = self.pending.len();
        let slot = self
            .pending
            .get_mut(index)
            .ok_or(MeasureError::PendingIndexOutOfRange { index, len })?;
        *slot = point;
        Ok(())
    }

    /// Returns the points waiting to complete a triple, in pick order.
    #[must_use]
    pub fn pending(&self) -> &[Point3] {
        &self.pending
    }

    /// Returns a measurement, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the measurement is not on the board.
    pub fn get(&self, id: MeasurementId) -> Result<&Measurement> {
        Ok(self
            .measurements
            .get(id)
            .ok_or(MeasureError::MeasurementNotFound)?)
    }

    /// Removes a measurement from the board.
    ///
    /// # Errors
    ///
    /// Returns an error if the measurement is not on the board.
    pub fn remove(&mut self, id: MeasurementId) -> Result<Measurement> {
        Ok(self
            .measurements
            .remove(id)
            .ok_or(MeasureError::MeasurementNotFound)?)
    }

    /// Clears all measurements and pending points.
    pub fn reset(&mut self) {
        tracing::debug!(
            measurements = self.measurements.len(),
            pending = self.pending.len(),
            "board reset"
        );
        self.measurements.clear();
        self.pending.clear();
    }

    /// Iterates over all measurements.
    pub fn iter(&self) -> impl Iterator<Item = (MeasurementId, &Measurement)> {
        self.measurements.iter()
    }

    /// Returns the number of completed measurements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// Returns `true` if the board holds no completed measurement.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::ProtractorError;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn pick_all(board: &mut MeasurementBoard, points: &[Point3]) -> Vec<PickOutcome> {
        points.iter().map(|pt| board.pick(*pt).unwrap()).collect()
    }

    fn completed(outcome: PickOutcome) -> MeasurementId {
        match outcome {
            PickOutcome::Completed(id) => id,
            PickOutcome::Pending { .. } => panic!("expected a completed measurement"),
        }
    }

    #[test]
    fn third_pick_completes_measurement() {
        let mut board = MeasurementBoard::default();
        let outcomes = pick_all(&mut board, &[p(1.0, 0.0, 0.0), p(0.0, 0.0, 0.0), p(0.0, 0.0, 1.0)]);
        assert_eq!(outcomes[0], PickOutcome::Pending { count: 1 });
        assert_eq!(outcomes[1], PickOutcome::Pending { count: 2 });
        let id = completed(outcomes[2]);

        assert!(board.pending().is_empty());
        assert_eq!(board.len(), 1);
        let m = board.get(id).unwrap();
        assert_abs_diff_eq!(m.angle().degrees(), 90.0, epsilon = 1e-9);
        assert_eq!(m.triple().vertex, Point3::origin());
    }

    #[test]
    fn picks_group_in_threes() {
        let mut board = MeasurementBoard::default();
        let outcomes = pick_all(
            &mut board,
            &[
                p(1.0, 0.0, 0.0),
                p(0.0, 0.0, 0.0),
                p(-1.0, 0.0, 0.0),
                p(2.0, 0.0, 0.0),
                p(2.0, 1.0, 0.0),
            ],
        );
        assert!(matches!(outcomes[2], PickOutcome::Completed(_)));
        assert_eq!(outcomes[4], PickOutcome::Pending { count: 2 });
        assert_eq!(board.len(), 1);
        assert_eq!(board.pending(), &[p(2.0, 0.0, 0.0), p(2.0, 1.0, 0.0)]);
    }

    #[test]
    fn drag_rebuilds_measurement() {
        let mut board = MeasurementBoard::default();
        let outcomes = pick_all(&mut board, &[p(1.0, 0.0, 0.0), p(0.0, 0.0, 0.0), p(0.0, 0.0, 1.0)]);
        let id = completed(outcomes[2]);

        let m = board.drag(id, Corner::End, p(-1.0, 0.0, 0.0)).unwrap();
        assert_abs_diff_eq!(m.angle().degrees(), 180.0, epsilon = 1e-9);
        assert_eq!(m.revision(), 1);
        assert_eq!(m.label().text, "180.0°");
        assert_eq!(m.arc().segments(), 18);
        assert_eq!(m.rays()[1].points, vec![p(-1.0, 0.0, 0.0), Point3::origin()]);

        let m = board.drag(id, Corner::Vertex, p(0.0, 0.0, 5.0)).unwrap();
        assert_eq!(m.revision(), 2);
        assert_eq!(m.arc().center, p(0.0, 0.0, 5.0));
    }

    #[test]
    fn drag_onto_vertex_is_degenerate_not_fatal() {
        let mut board = MeasurementBoard::default();
        let outcomes = pick_all(&mut board, &[p(1.0, 0.0, 0.0), p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0)]);
        let id = completed(outcomes[2]);

        let m = board.drag(id, Corner::Start, Point3::origin()).unwrap();
        assert!(m.angle().is_degenerate());
        assert_eq!(m.label().text, "0.0°");
    }

    #[test]
    fn move_pending_replaces_point() {
        let mut board = MeasurementBoard::default();
        board.pick(p(1.0, 0.0, 0.0)).unwrap();
        board.move_pending(0, p(3.0, 0.0, 0.0)).unwrap();
        assert_eq!(board.pending(), &[p(3.0, 0.0, 0.0)]);

        let err = board.move_pending(1, p(0.0, 0.0, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            ProtractorError::Measure(MeasureError::PendingIndexOutOfRange { index: 1, len: 1 })
        ));
    }

    #[test]
    fn removed_measurement_is_not_found() {
        let mut board = MeasurementBoard::default();
        let outcomes = pick_all(&mut board, &[p(1.0, 0.0, 0.0), p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0)]);
        let id = completed(outcomes[2]);

        board.remove(id).unwrap();
        assert!(board.is_empty());
        assert!(board.get(id).is_err());
        assert!(board.drag(id, Corner::End, Point3::origin()).is_err());
        assert!(board.remove(id).is_err());
    }

    #[test]
    fn reset_clears_everything() {
        let mut board = MeasurementBoard::default();
        pick_all(
            &mut board,
            &[p(1.0, 0.0, 0.0), p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(5.0, 5.0, 5.0)],
        );
        assert_eq!(board.len(), 1);
        assert_eq!(board.pending().len(), 1);

        board.reset();
        assert!(board.is_empty());
        assert!(board.pending().is_empty());
        assert_eq!(board.iter().count(), 0);
    }

    #[test]
    fn stale_id_after_reset_is_rejected() {
        let mut board = MeasurementBoard::default();
        let outcomes = pick_all(&mut board, &[p(1.0, 0.0, 0.0), p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0)]);
        let old = completed(outcomes[2]);
        board.reset();

        let outcomes = pick_all(&mut board, &[p(1.0, 0.0, 0.0), p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0)]);
        let new = completed(outcomes[2]);
        assert_ne!(old, new);
        assert!(board.get(old).is_err());
        assert!(board.get(new).is_ok());
    }

    #[test]
    fn custom_config_is_applied() {
        let config = BoardConfig {
            arc_radius: 1.5,
            label_precision: 3,
            ..BoardConfig::default()
        };
        let mut board = MeasurementBoard::new(config).unwrap();
        let outcomes = pick_all(&mut board, &[p(1.0, 0.0, 0.0), p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0)]);
        let m = board.get(completed(outcomes[2])).unwrap();
        assert_eq!(m.label().text, "90.000°");
        assert_abs_diff_eq!(m.arc().vertices[1].coords.norm(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = BoardConfig {
            arc_radius: -0.2,
            ..BoardConfig::default()
        };
        assert!(MeasurementBoard::new(config).is_err());
    }
}
