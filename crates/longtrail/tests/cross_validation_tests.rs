mod test_utils;

use longtrail::{
    TrailSolver,
    brute_force::{ExhaustiveMatching, longest_trails_brute},
};
use rand::{SeedableRng, rngs::StdRng};

use crate::test_utils::{RandomGraphParams, assert_trail_parity, random_graph};

const GRAPHS: u64 = 300;

fn assert_bounded_by_brute(params: &RandomGraphParams, graphs: u64) {
    for seed in 0..graphs {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(&mut rng, params);
        let mut solver = TrailSolver::new(&graph);

        for s in graph.node_ids() {
            let brute = longest_trails_brute(&graph, s).unwrap();

            for t in graph.node_ids() {
                let query = solver.query(s, t).unwrap();
                let Some(query) = query else {
                    assert!(!brute.contains_key(&t), "seed {seed}: ({s}, {t}) is reachable");
                    continue;
                };

                let best = brute[&t];
                assert!(
                    query.weight <= best,
                    "seed {seed}: ({s}, {t}) found {} over the optimum {best}",
                    query.weight
                );
                if query.dropped_weight == 0 {
                    assert_eq!(query.weight, best, "seed {seed}: ({s}, {t}) on {graph:?}");
                }
            }
        }
    }
}

#[test]
fn test_fast_never_exceeds_brute() {
    assert_bounded_by_brute(&RandomGraphParams::default(), GRAPHS);
}

#[test]
fn test_zero_weight_edges_against_brute() {
    assert_bounded_by_brute(&RandomGraphParams::with_zero_weights(), 2000);
}

#[test]
fn test_zero_weight_eulerization() {
    let params = RandomGraphParams::with_zero_weights();

    for seed in 0..2000 {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(&mut rng, &params);
        let mut blossom = TrailSolver::new(&graph);
        let mut exhaustive = TrailSolver::with_matcher(&graph, ExhaustiveMatching);

        for s in graph.node_ids() {
            for t in graph.node_ids() {
                let Some(eulerization) = blossom.eulerize(s, t).unwrap() else {
                    continue;
                };
                let expected = exhaustive.eulerize(s, t).unwrap().unwrap();

                assert_eq!(
                    eulerization.removed_weight(),
                    expected.removed_weight(),
                    "seed {seed}: ({s}, {t}) on {graph:?}"
                );
                assert_trail_parity(&graph, eulerization.marks(), s, t);
            }
        }
    }
}

#[test]
fn test_eulerization_parity() {
    let params = RandomGraphParams::default();

    for seed in 0..GRAPHS {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(&mut rng, &params);
        let mut solver = TrailSolver::new(&graph);

        for s in graph.node_ids() {
            for t in graph.node_ids() {
                let Some(eulerization) = solver.eulerize(s, t).unwrap() else {
                    continue;
                };

                assert_eq!(eulerization.exposed().len() % 2, 0);
                assert_eq!(
                    eulerization.removed_weight(),
                    eulerization.marks().marked_weight(&graph)
                );
                assert_trail_parity(&graph, eulerization.marks(), s, t);
            }
        }
    }
}

#[test]
fn test_exact_answers_are_symmetric() {
    let params = RandomGraphParams::default();

    for seed in 0..GRAPHS {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(&mut rng, &params);
        let mut solver = TrailSolver::new(&graph);

        for s in graph.node_ids() {
            for t in graph.node_ids() {
                let (Some(forward), Some(backward)) =
                    (solver.query(s, t).unwrap(), solver.query(t, s).unwrap())
                else {
                    continue;
                };

                if forward.dropped_weight == 0 && backward.dropped_weight == 0 {
                    assert_eq!(forward.weight, backward.weight, "seed {seed}: ({s}, {t})");
                }
            }
        }
    }
}

#[test]
fn test_matchers_agree_on_removed_weight() {
    let params = RandomGraphParams::default();

    for seed in 0..GRAPHS {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(&mut rng, &params);
        let mut blossom = TrailSolver::new(&graph);
        let mut exhaustive = TrailSolver::with_matcher(&graph, ExhaustiveMatching);

        for s in graph.node_ids() {
            for t in graph.node_ids() {
                let removed = |eulerization: Option<longtrail::eulerize::Eulerization>| {
                    eulerization.map(|eulerization| eulerization.removed_weight())
                };

                assert_eq!(
                    removed(blossom.eulerize(s, t).unwrap()),
                    removed(exhaustive.eulerize(s, t).unwrap()),
                    "seed {seed}: ({s}, {t})"
                );
            }
        }
    }
}
