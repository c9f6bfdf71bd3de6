use std::collections::HashSet;

use rand::{thread_rng, Rng, SeedableRng};

use maze::{
    geometry::{wall_segments, ALONG_X, ALONG_Y},
    prim, scatter, Bounds, FrontierKind, Grid, MazeConfig, ScatterConfig, WallDims, WyRand,
};

fn random_maze_config(rng: &mut impl Rng) -> MazeConfig {
    MazeConfig {
        seed: rng.gen(),
        grid_size: rng.gen_range(1..20),
        cell_size: rng.gen_range(0.1..2.),
        wall_thickness: rng.gen_range(0.01..0.2),
        wall_height: rng.gen_range(0.5..3.),
        frontier: if rng.gen() {
            FrontierKind::Multiset
        } else {
            FrontierKind::Set
        },
    }
}

#[test]
fn mazes_are_spanning_trees() {
    let mut rng = thread_rng();
    for _ in 0..100 {
        let config = random_maze_config(&mut rng);
        let (maze, _) = config.generate().unwrap();
        let n = config.grid_size;
        assert_eq!(maze.passages().count(), n * n - 1, "{config:?}");
        assert!(maze.is_spanning_tree(), "{config:?}");
    }
}

#[test]
fn one_segment_per_standing_wall_plus_boundary() {
    let mut rng = thread_rng();
    for _ in 0..100 {
        let config = random_maze_config(&mut rng);
        let (maze, segments) = config.generate().unwrap();
        let standing = maze.present_walls().count();
        assert_eq!(segments.len(), standing + 4, "{config:?}");
        for s in &segments[..standing] {
            assert_eq!(s.length, config.cell_size);
            assert!(s.orientation == ALONG_X || s.orientation == ALONG_Y);
        }
        let side = config.grid_size as f64 * config.cell_size;
        for s in &segments[standing..] {
            assert!((s.length - side).abs() < 1e-9);
        }
        assert!(segments.iter().all(|s| s.length > 0.));
    }
}

#[test]
fn segments_are_not_duplicated() {
    let (_, segments) = MazeConfig {
        seed: 11,
        grid_size: 12,
        ..Default::default()
    }
    .generate()
    .unwrap();
    let keys: HashSet<_> = segments
        .iter()
        .map(|s| {
            (
                (s.position.x * 1000.).round() as i64,
                (s.position.y * 1000.).round() as i64,
                (s.orientation * 1000.).round() as i64,
            )
        })
        .collect();
    assert_eq!(keys.len(), segments.len());
}

#[test]
fn three_by_three_scenario() {
    let grid = Grid::new(3).unwrap();
    let maze = prim::generate(grid, FrontierKind::Multiset, &mut WyRand::seed_from_u64(2024));
    assert_eq!(maze.passages().count(), 8);
    assert!(maze.is_spanning_tree());
    // every cell can be reached, so none is closed on all sides
    assert!(grid
        .cells()
        .all(|c| maze.cell_walls(c) != maze::Walls::all()));

    let segments = wall_segments(&maze, &WallDims::default());
    let standing = grid.internal_walls() - 8;
    assert_eq!(standing, 4);
    assert_eq!(segments.len(), standing + 4);
    let boundary: Vec<_> = segments[standing..].iter().map(|s| s.orientation).collect();
    assert_eq!(boundary, [ALONG_X, ALONG_X, ALONG_Y, ALONG_Y]);
}

#[test]
fn generation_is_deterministic() {
    let maze_config = MazeConfig {
        seed: 99,
        ..Default::default()
    };
    let (a, sa) = maze_config.generate().unwrap();
    let (b, sb) = maze_config.generate().unwrap();
    assert_eq!(a, b);
    assert_eq!(sa, sb);
    assert_eq!(a.to_string(), b.to_string());

    let scatter_config = ScatterConfig {
        seed: 99,
        count: 6,
        ..Default::default()
    };
    assert_eq!(scatter_config.generate(), scatter_config.generate());
}

#[test]
fn cell_center_is_a_bijection() {
    let grid = Grid::new(9).unwrap();
    let dims = WallDims {
        cell_size: 0.3,
        ..Default::default()
    };
    let centers: HashSet<_> = grid
        .cells()
        .map(|c| {
            let p = dims.cell_center(grid, c);
            ((p.x * 1e6).round() as i64, (p.y * 1e6).round() as i64)
        })
        .collect();
    assert_eq!(centers.len(), grid.len());
}

#[test]
fn heat_source_scenario() {
    let config = ScatterConfig {
        count: 3,
        bounds: Bounds {
            minx: -2.,
            maxx: 2.,
            miny: -2.,
            maxy: 2.,
        },
        min_distance: 0.5,
        max_attempts: 1_000,
        ..Default::default()
    };
    for seed in 0..200 {
        let points = scatter::scatter(&config, &mut WyRand::seed_from_u64(seed)).unwrap();
        assert_eq!(points.len(), 3);
        for (i, p) in points.iter().enumerate() {
            assert!(config.bounds.contains(p));
            for q in &points[..i] {
                assert!(p.distance(q) >= 0.5);
            }
        }
    }
}

#[test]
fn random_scatters_respect_separation() {
    let mut rng = thread_rng();
    for _ in 0..50 {
        let config = ScatterConfig {
            seed: rng.gen(),
            count: rng.gen_range(0..8),
            min_distance: rng.gen_range(0.05..0.4),
            ..Default::default()
        };
        let points = config.generate().unwrap();
        assert_eq!(points.len(), config.count);
        for (i, p) in points.iter().enumerate() {
            assert!(config.bounds.contains(p));
            for q in &points[..i] {
                assert!(p.distance(q) >= config.min_distance, "{config:?}");
            }
        }
    }
}
