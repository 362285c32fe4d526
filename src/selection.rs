use crate::{BisectionError, CandidateSolution, Graph, Result};

/// Which of the equal-size candidates becomes the result of a run.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum SelectionPolicy {
    /// The first valid candidate in the order the solver reported them.
    #[default]
    FirstValid,
    /// The valid candidate with the lowest energy. Earlier candidates win ties.
    LowestEnergy,
    /// The valid candidate that was read most often. Earlier candidates win ties.
    MostFrequent,
}

/// Two vertex groups and the number of edges running between them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bisection {
    /// Vertices whose spin is `-1`, in graph order.
    pub first: Vec<u32>,
    /// Vertices whose spin is `+1`, in graph order.
    pub second: Vec<u32>,
    pub edge_cut: u32,
}

impl Bisection {
    /// A bisection only counts if both groups have the same size.
    pub fn is_valid(&self) -> bool {
        self.first.len() == self.second.len()
    }
}

/// Splits `vertices` by spin: `-1` goes to the first group, everything else to the second.
pub fn group_vertices(spins: &[i8], vertices: &[u32]) -> (Vec<u32>, Vec<u32>) {
    let mut first = vec![];
    let mut second = vec![];
    for (&spin, &v) in spins.iter().zip(vertices) {
        if spin == -1 {
            first.push(v);
        } else {
            second.push(v);
        }
    }
    (first, second)
}

impl Graph {
    /// Turns the solver candidates into groups, drops the unequal splits and picks one of the
    /// remaining according to `policy`. The edge cut is counted on the graph.
    ///
    /// Every candidate must carry one spin per vertex; `SpinCountMismatch` reports the
    /// 1-based position of the first one that does not.
    pub fn select_bisection(
        &self,
        candidates: &[CandidateSolution],
        policy: SelectionPolicy,
    ) -> Result<Bisection> {
        let mut best: Option<(&CandidateSolution, Vec<u32>, Vec<u32>)> = None;

        for (idx, candidate) in candidates.iter().enumerate() {
            if candidate.spins.len() != self.vertex_count() {
                return Err(BisectionError::SpinCountMismatch {
                    line: idx + 1,
                    expected: self.vertex_count(),
                    found: candidate.spins.len(),
                });
            }
            let (first, second) = group_vertices(&candidate.spins, self.vertices());
            if first.len() != second.len() {
                log::trace!(
                    "dropping candidate with groups of {} and {}",
                    first.len(),
                    second.len()
                );
                continue;
            }

            let replace = match (&best, policy) {
                (None, _) => true,
                (Some(_), SelectionPolicy::FirstValid) => break,
                (Some((current, ..)), SelectionPolicy::LowestEnergy) => {
                    candidate.energy < current.energy
                }
                (Some((current, ..)), SelectionPolicy::MostFrequent) => {
                    candidate.occurrences > current.occurrences
                }
            };
            if replace {
                best = Some((candidate, first, second));
            }
        }

        let Some((candidate, first, second)) = best else {
            return Err(BisectionError::NoValidPartition {
                candidates: candidates.len(),
            });
        };
        log::debug!(
            "picked candidate with energy {} (read {} times) out of {}",
            candidate.energy,
            candidate.occurrences,
            candidates.len()
        );

        let edge_cut = self.calculate_edge_cut(&first, &second);
        Ok(Bisection {
            first,
            second,
            edge_cut,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(spins: &str, occurrences: u32, energy: f64) -> CandidateSolution {
        CandidateSolution {
            spins: spins.chars().map(|c| if c == '+' { 1 } else { -1 }).collect(),
            occurrences,
            energy,
        }
    }

    fn six_vertices() -> Graph {
        Graph::from_edges(&[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)]).unwrap()
    }

    #[test]
    fn groups_keep_vertex_order() {
        let (first, second) = group_vertices(&[1, -1, -1, 1], &[3, 5, 8, 13]);
        assert_eq!(first, vec![5, 8]);
        assert_eq!(second, vec![3, 13]);
    }

    #[test]
    fn unequal_groups_are_dropped_and_first_valid_wins() {
        let graph = six_vertices();
        let candidates = vec![
            candidate("--++++", 500, -9.0),
            candidate("---+++", 300, -4.0),
            candidate("+-+-+-", 200, -8.0),
        ];
        let bisection = graph
            .select_bisection(&candidates, SelectionPolicy::FirstValid)
            .unwrap();
        assert_eq!(bisection.first, vec![0, 1, 2]);
        assert_eq!(bisection.second, vec![3, 4, 5]);
        assert_eq!(bisection.edge_cut, 2);
        assert!(bisection.is_valid());
    }

    #[test]
    fn first_of_two_equal_splits_is_accepted() {
        let graph = six_vertices();
        let candidates = vec![
            candidate("-+-+-+", 10, -1.0),
            candidate("--++++", 10, -5.0),
            candidate("---+++", 10, -3.0),
        ];
        let bisection = graph
            .select_bisection(&candidates, SelectionPolicy::FirstValid)
            .unwrap();
        assert_eq!(bisection.first, vec![0, 2, 4]);
        assert_eq!(bisection.second, vec![1, 3, 5]);
        assert_eq!(bisection.edge_cut, 6);
    }

    #[test]
    fn other_policies_pick_among_valid_candidates() {
        let graph = six_vertices();
        let candidates = vec![
            candidate("-+-+-+", 10, -1.0),
            candidate("------", 900, -50.0),
            candidate("---+++", 40, -3.0),
            candidate("+++---", 40, -3.0),
        ];
        let lowest = graph
            .select_bisection(&candidates, SelectionPolicy::LowestEnergy)
            .unwrap();
        assert_eq!(lowest.first, vec![0, 1, 2]);

        let frequent = graph
            .select_bisection(&candidates, SelectionPolicy::MostFrequent)
            .unwrap();
        assert_eq!(frequent.first, vec![0, 1, 2]);
    }

    #[test]
    fn edge_cut_is_orientation_agnostic() {
        let graph = Graph::from_edges(&[(0, 1), (1, 3), (2, 0)]).unwrap();
        let bisection = graph
            .select_bisection(&[candidate("-++-", 1, 0.0)], SelectionPolicy::FirstValid)
            .unwrap();
        assert_eq!(bisection.first, vec![0, 3]);
        assert_eq!(bisection.second, vec![1, 2]);
        // (0, 1), (1, 3) and (2, 0) all cross
        assert_eq!(bisection.edge_cut, 3);
    }

    #[test]
    fn short_spin_vectors_are_rejected() {
        let graph = Graph::from_edges(&[(0, 1), (1, 3), (2, 0)]).unwrap();
        let candidates = vec![candidate("-+-+", 5, -2.0), candidate("-+", 900, -3.0)];
        let err = graph
            .select_bisection(&candidates, SelectionPolicy::LowestEnergy)
            .unwrap_err();
        assert!(matches!(
            err,
            BisectionError::SpinCountMismatch {
                line: 2,
                expected: 4,
                found: 2
            }
        ));

        let err = graph
            .select_bisection(&[candidate("-+-+--", 1, 0.0)], SelectionPolicy::FirstValid)
            .unwrap_err();
        assert!(matches!(err, BisectionError::SpinCountMismatch { found: 6, .. }));
    }

    #[test]
    fn no_equal_split_is_an_error() {
        let graph = Graph::from_edges(&[(0, 1), (1, 3), (2, 0)]).unwrap();
        let candidates = vec![candidate("----", 600, -2.0), candidate("-+++", 400, -1.0)];
        let err = graph
            .select_bisection(&candidates, SelectionPolicy::FirstValid)
            .unwrap_err();
        assert!(matches!(err, BisectionError::NoValidPartition { candidates: 2 }));

        let err = graph
            .select_bisection(&[], SelectionPolicy::LowestEnergy)
            .unwrap_err();
        assert!(matches!(err, BisectionError::NoValidPartition { candidates: 0 }));
    }
}
