//! Trajectory data type.

use std::collections::BTreeMap;

use lz_core::Point;
use serde::{Deserialize, Serialize};

use crate::{ResultsError, ResultsResult};

/// Ordered mapping from step index to point.
///
/// Built by appending: each push takes the next index, so an index is
/// never rewritten. Serializes as `{"0": [x, y, z], "1": [...], ...}` in
/// ascending step order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory {
    points: BTreeMap<u64, Point>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the next push will use.
    pub fn next_step(&self) -> u64 {
        self.points
            .last_key_value()
            .map(|(step, _)| step + 1)
            .unwrap_or(0)
    }

    /// Append `point` at the next step index and return that index.
    pub fn push(&mut self, point: Point) -> ResultsResult<u64> {
        let step = self.next_step();
        if !point.is_finite() {
            return Err(ResultsError::NonFinite { step });
        }
        self.points.insert(step, point);
        Ok(step)
    }

    /// Collect points as steps `0..n`, failing on the first non-finite one.
    pub fn try_from_points(points: impl IntoIterator<Item = Point>) -> ResultsResult<Self> {
        let mut trajectory = Trajectory::new();
        for point in points {
            trajectory.push(point)?;
        }
        Ok(trajectory)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, step: u64) -> Option<Point> {
        self.points.get(&step).copied()
    }

    pub fn first(&self) -> Option<(u64, Point)> {
        self.points.first_key_value().map(|(s, p)| (*s, *p))
    }

    pub fn last(&self) -> Option<(u64, Point)> {
        self.points.last_key_value().map(|(s, p)| (*s, *p))
    }

    /// Entries in ascending step order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, Point)> + '_ {
        self.points.iter().map(|(s, p)| (*s, *p))
    }

    /// True when the steps are exactly `0..len`.
    pub fn is_contiguous(&self) -> bool {
        self.points
            .keys()
            .enumerate()
            .all(|(i, step)| i as u64 == *step)
    }

    pub fn to_json(&self) -> ResultsResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(content: &str) -> ResultsResult<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_consecutive_steps() {
        let mut t = Trajectory::new();
        assert_eq!(t.next_step(), 0);
        assert_eq!(t.push(Point::new(0.0, 20.0, 12.0)).unwrap(), 0);
        assert_eq!(t.push(Point::new(0.2, 19.98, 11.968)).unwrap(), 1);
        assert_eq!(t.len(), 2);
        assert!(t.is_contiguous());
        assert_eq!(t.last().unwrap().0, 1);
    }

    #[test]
    fn push_rejects_non_finite() {
        let mut t = Trajectory::new();
        t.push(Point::ORIGIN).unwrap();
        let err = t.push(Point::new(f64::NAN, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, ResultsError::NonFinite { step: 1 }));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn json_layout() {
        let points = [Point::new(0.0, 20.0, 12.0), Point::new(0.2, 19.98, 11.968)];
        let t = Trajectory::try_from_points(points).unwrap();
        assert_eq!(
            t.to_json().unwrap(),
            r#"{"0":[0.0,20.0,12.0],"1":[0.2,19.98,11.968]}"#
        );
    }

    #[test]
    fn keys_are_ordered_numerically_not_lexically() {
        let t = Trajectory::try_from_points((0..12).map(|i| Point::new(i as f64, 0.0, 0.0)))
            .unwrap();
        let json = t.to_json().unwrap();
        let pos_2 = json.find("\"2\":").unwrap();
        let pos_10 = json.find("\"10\":").unwrap();
        assert!(pos_2 < pos_10);
    }

    #[test]
    fn parse_accepts_any_key_order() {
        let t = Trajectory::from_json(r#"{"2":[3,3,3],"0":[1,1,1],"1":[2,2,2]}"#).unwrap();
        let steps: Vec<u64> = t.iter().map(|(s, _)| s).collect();
        assert_eq!(steps, vec![0, 1, 2]);
        assert_eq!(t.get(2), Some(Point::new(3.0, 3.0, 3.0)));
    }

    #[test]
    fn parse_rejects_malformed_entries() {
        for bad in [
            r#"{"0":[1,2]}"#,
            r#"{"0":[1,2,3,4]}"#,
            r#"{"zero":[1,2,3]}"#,
            r#"{"-1":[1,2,3]}"#,
            r#"{"0":[1,"2",3]}"#,
            r#"{"0":[1,2,3],"1":null}"#,
            r#"[[1,2,3]]"#,
        ] {
            assert!(Trajectory::from_json(bad).is_err(), "accepted {bad}");
        }
    }

    #[test]
    fn try_from_points_stops_at_non_finite() {
        let points = [Point::ORIGIN, Point::new(0.0, f64::INFINITY, 0.0), Point::ORIGIN];
        let err = Trajectory::try_from_points(points).unwrap_err();
        assert!(matches!(err, ResultsError::NonFinite { step: 1 }));
    }

    #[test]
    fn gaps_are_kept_and_reported() {
        let t = Trajectory::from_json(r#"{"0":[1,1,1],"5":[2,2,2]}"#).unwrap();
        assert!(!t.is_contiguous());
        assert_eq!(t.next_step(), 6);
    }
}
