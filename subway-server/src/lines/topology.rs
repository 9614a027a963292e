//! Ordered line sequences and adjacency lookup.

use std::collections::BTreeMap;

use crate::domain::{Direction, StopId};
use crate::stations::StationDirectory;

use super::error::TopologyError;

/// Per-line ordered station sequences.
///
/// Each line maps to the stop ids it visits, stored in north-to-south
/// travel order. A stop id may appear in several lines (interchanges
/// like Hoyt-Schermerhorn sit on A, C and G).
///
/// The model is a linear approximation: branches and express skip
/// patterns cannot be represented, so an express service shows the
/// local sequence. This is a known limitation of the source data, kept
/// as-is rather than silently re-modelled as a graph.
#[derive(Debug, Clone, Default)]
pub struct LineTopology {
    /// Line name → stop ids, north to south.
    lines: BTreeMap<String, Vec<StopId>>,
}

impl LineTopology {
    /// Start building a topology.
    pub fn builder() -> LineTopologyBuilder {
        LineTopologyBuilder::default()
    }

    /// Every line whose sequence contains `stop`, in name order.
    ///
    /// An empty result is not an error: plenty of valid stations sit on
    /// no line in this simplified model.
    pub fn lines_serving(&self, stop: &StopId) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(_, stops)| stops.contains(stop))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// The station one step from `stop` when travelling `direction` on
    /// `line`.
    ///
    /// Returns `None` for an unknown line, a stop not on that line, or
    /// a terminal with nothing further in that direction. Callers probe
    /// speculatively, so none of these are errors.
    pub fn adjacent(&self, stop: &StopId, line: &str, direction: Direction) -> Option<&StopId> {
        let stops = self.lines.get(line)?;
        let index = stops.iter().position(|s| s == stop)?;

        // Sequences are stored north to south, so heading north steps
        // backwards through the sequence and heading south steps
        // forwards. Keep the two branches explicit; the inversion is
        // the easiest thing in this file to get backwards.
        let target = match direction {
            Direction::Northbound => index.checked_sub(1)?,
            Direction::Southbound => index + 1,
        };

        stops.get(target)
    }

    /// The full sequence for a line, north to south.
    pub fn line(&self, name: &str) -> Option<&[StopId]> {
        self.lines.get(name).map(Vec::as_slice)
    }

    /// All line names, in name order.
    pub fn line_names(&self) -> impl Iterator<Item = &str> {
        self.lines.keys().map(String::as_str)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether there are no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Verify that every stop in every line exists in the directory.
    ///
    /// The line tables are hand-curated and the dataset comes from a
    /// separate export; run this at startup so a typo fails the process
    /// instead of surfacing as phantom adjacencies.
    pub fn check_against(&self, directory: &StationDirectory) -> Result<(), TopologyError> {
        for (name, stops) in &self.lines {
            for stop in stops {
                if !directory.contains(stop) {
                    return Err(TopologyError::UnknownStop {
                        line: name.clone(),
                        stop: stop.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Builder for a [`LineTopology`].
#[derive(Debug, Default)]
pub struct LineTopologyBuilder {
    lines: BTreeMap<String, Vec<StopId>>,
    error: Option<TopologyError>,
}

impl LineTopologyBuilder {
    /// Add a line with its stop ids in north-to-south order.
    ///
    /// An unparseable stop id is remembered and reported by `build`;
    /// it is never silently dropped from the sequence.
    pub fn line(mut self, name: &str, stops: &[&str]) -> Self {
        if self.error.is_some() {
            return self;
        }

        let mut sequence = Vec::with_capacity(stops.len());
        for raw in stops {
            match StopId::parse(raw) {
                Ok(stop) => sequence.push(stop),
                Err(e) => {
                    self.error = Some(TopologyError::InvalidStop {
                        line: name.to_string(),
                        stop: (*raw).to_string(),
                        message: e.to_string(),
                    });
                    return self;
                }
            }
        }
        self.lines.insert(name.to_string(), sequence);
        self
    }

    /// Build the topology, failing on the first invalid stop id.
    pub fn build(self) -> Result<LineTopology, TopologyError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(LineTopology { lines: self.lines }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stations::StationRecord;

    fn stop(s: &str) -> StopId {
        StopId::parse(s).unwrap()
    }

    fn three_stop_line() -> LineTopology {
        LineTopology::builder()
            .line("L", &["L01", "L02", "L03"])
            .build()
            .unwrap()
    }

    #[test]
    fn northbound_is_previous_southbound_is_next() {
        let topology = three_stop_line();

        assert_eq!(
            topology.adjacent(&stop("L02"), "L", Direction::Northbound),
            Some(&stop("L01"))
        );
        assert_eq!(
            topology.adjacent(&stop("L02"), "L", Direction::Southbound),
            Some(&stop("L03"))
        );
    }

    #[test]
    fn terminals_have_no_further_neighbor() {
        let topology = three_stop_line();

        assert_eq!(
            topology.adjacent(&stop("L01"), "L", Direction::Northbound),
            None
        );
        assert_eq!(
            topology.adjacent(&stop("L03"), "L", Direction::Southbound),
            None
        );
    }

    #[test]
    fn unknown_line_is_none_not_an_error() {
        let topology = three_stop_line();
        assert_eq!(
            topology.adjacent(&stop("L02"), "Q", Direction::Northbound),
            None
        );
    }

    #[test]
    fn stop_not_on_line_is_none() {
        let topology = three_stop_line();
        assert_eq!(
            topology.adjacent(&stop("A46"), "L", Direction::Southbound),
            None
        );
    }

    #[test]
    fn round_trip_returns_to_origin() {
        let topology = three_stop_line();

        let north = topology
            .adjacent(&stop("L02"), "L", Direction::Northbound)
            .unwrap();
        let back = topology
            .adjacent(north, "L", Direction::Southbound)
            .unwrap();
        assert_eq!(back, &stop("L02"));
    }

    #[test]
    fn lines_serving_finds_interchanges() {
        let topology = LineTopology::builder()
            .line("A", &["A41", "A42", "A43"])
            .line("C", &["A41", "A42"])
            .line("G", &["G36", "A42", "F20"])
            .build()
            .unwrap();

        assert_eq!(topology.lines_serving(&stop("A42")), vec!["A", "C", "G"]);
        assert_eq!(topology.lines_serving(&stop("A43")), vec!["A"]);
    }

    #[test]
    fn lines_serving_unserved_stop_is_empty() {
        let topology = three_stop_line();
        assert!(topology.lines_serving(&stop("A46")).is_empty());
    }

    #[test]
    fn builder_rejects_invalid_stop_id() {
        let result = LineTopology::builder().line("L", &["L01", "L-2"]).build();
        assert!(matches!(
            result,
            Err(TopologyError::InvalidStop { line, stop, .. }) if line == "L" && stop == "L-2"
        ));
    }

    #[test]
    fn check_against_accepts_complete_directory() {
        let topology = three_stop_line();
        let directory = StationDirectory::new(
            ["L01", "L02", "L03"]
                .iter()
                .map(|id| StationRecord {
                    id: stop(id),
                    name: id.to_string(),
                    latitude: 40.7,
                    longitude: -73.9,
                    parent_station: None,
                })
                .collect(),
        )
        .unwrap();

        assert!(topology.check_against(&directory).is_ok());
    }

    #[test]
    fn check_against_flags_missing_stop() {
        let topology = three_stop_line();
        let directory = StationDirectory::new(vec![StationRecord {
            id: stop("L01"),
            name: "8 Av".to_string(),
            latitude: 40.7,
            longitude: -74.0,
            parent_station: None,
        }])
        .unwrap();

        let result = topology.check_against(&directory);
        assert!(matches!(
            result,
            Err(TopologyError::UnknownStop { line, stop: s }) if line == "L" && s == stop("L02")
        ));
    }

    #[test]
    fn line_names_sorted() {
        let topology = LineTopology::builder()
            .line("G", &["G22"])
            .line("A", &["A02"])
            .line("C", &["A09"])
            .build()
            .unwrap();

        let names: Vec<_> = topology.line_names().collect();
        assert_eq!(names, vec!["A", "C", "G"]);
        assert_eq!(topology.len(), 3);
    }
}
