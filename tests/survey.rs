use hub_shot_calculator::ballistics::compute_envelope;
use hub_shot_calculator::config::{GoalConfig, GridConfig};
use hub_shot_calculator::survey::{self, EnvelopeCache, HEATMAP_DATASET_VERSION};

fn small_grid() -> GridConfig {
    GridConfig {
        x_start_m: -4.0,
        x_stop_m: -3.5,
        x_step_m: 0.1,
        y_start_m: 0.4,
        y_stop_m: 0.6,
        y_step_m: 0.1,
    }
}

#[test]
fn survey_covers_the_full_grid() {
    let goal = GoalConfig::default();
    let grid = small_grid();
    let cache = EnvelopeCache::with_default_capacity();

    let cells = survey::generate(&goal, &grid, &cache);
    assert_eq!(cells.len(), 5 * 2);

    let dataset = survey::compute_dataset(&goal, &grid, &cells);
    assert_eq!(dataset.version, HEATMAP_DATASET_VERSION);
    assert_eq!(dataset.x.len(), 5);
    assert_eq!(dataset.y.len(), 2);
    assert_eq!(dataset.z.len(), 2);
    for row in &dataset.z {
        assert_eq!(row.len(), 5);
        for &v in row {
            assert!(v.is_finite());
        }
    }
}

#[test]
fn default_grid_matches_the_legacy_survey_shape() {
    let grid = GridConfig::default();
    let goal = GoalConfig::default();
    let cache = EnvelopeCache::with_default_capacity();

    let cells = survey::generate(&goal, &grid, &cache);
    let dataset = survey::compute_dataset(&goal, &grid, &cells);

    // arange semantics: [-6, -1) by 0.1 and [0.2, 1.25) by 0.1.
    assert_eq!(dataset.x.len(), 50);
    assert_eq!(dataset.y.len(), 11);
    assert_eq!(cells.len(), 550);
    assert!((dataset.x[0] + 6.0).abs() < 1e-9);
    assert!((dataset.y[10] - 1.2).abs() < 1e-9);
}

#[test]
fn score_is_area_weighted_by_apparent_goal_width() {
    let goal = GoalConfig::default();
    let grid = small_grid();
    let cache = EnvelopeCache::with_default_capacity();

    let cells = survey::generate(&goal, &grid, &cache);
    for cell in &cells {
        let envelope = compute_envelope(&goal, cell.x_m, cell.y_m);
        let expected = envelope.area * goal.rim_width_m.atan2(cell.x_m.abs());
        assert!(
            (cell.score - expected).abs() < 1e-12,
            "score mismatch at ({}, {})",
            cell.x_m,
            cell.y_m
        );
    }
}

#[test]
fn best_cell_tracks_the_maximum_score() {
    let goal = GoalConfig::default();
    let grid = small_grid();
    let cache = EnvelopeCache::with_default_capacity();

    let cells = survey::generate(&goal, &grid, &cache);
    let dataset = survey::compute_dataset(&goal, &grid, &cells);

    let max = cells
        .iter()
        .map(|c| c.score)
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(dataset.best_score, Some(max));
}

#[test]
fn dataset_round_trips_through_json() {
    let goal = GoalConfig::default();
    let grid = small_grid();
    let cache = EnvelopeCache::with_default_capacity();

    let cells = survey::generate(&goal, &grid, &cache);
    let dataset = survey::compute_dataset(&goal, &grid, &cells);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("heatmap.json");
    survey::save_dataset(&path, &dataset).expect("save");
    let loaded = survey::load_dataset(&path).expect("load");

    assert_eq!(loaded.version, dataset.version);
    assert_eq!(loaded.generated_utc, dataset.generated_utc);
    assert_eq!(loaded.x, dataset.x);
    assert_eq!(loaded.y, dataset.y);
    assert_eq!(loaded.z, dataset.z);
}

#[test]
fn cache_hits_on_repeat_and_quantized_positions() {
    let goal = GoalConfig::default();
    let cache = EnvelopeCache::new(16);

    let first = cache.get_or_compute(-3.0, 0.5, || compute_envelope(&goal, -3.0, 0.5));
    let second = cache.get_or_compute(-3.0, 0.5, || compute_envelope(&goal, -3.0, 0.5));
    assert_eq!(first.area, second.area);

    // 0.4 mm away quantizes onto the same millimetre key.
    cache.get_or_compute(-3.0004, 0.5, || compute_envelope(&goal, -3.0004, 0.5));

    let stats = cache.stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 2);
    assert_eq!(cache.len(), 1);
}

#[test]
fn cache_evicts_oldest_beyond_capacity() {
    let goal = GoalConfig::default();
    let cache = EnvelopeCache::new(2);

    cache.get_or_compute(-3.0, 0.5, || compute_envelope(&goal, -3.0, 0.5));
    cache.get_or_compute(-3.1, 0.5, || compute_envelope(&goal, -3.1, 0.5));
    cache.get_or_compute(-3.2, 0.5, || compute_envelope(&goal, -3.2, 0.5));
    assert_eq!(cache.len(), 2);

    // The first entry is the oldest and must have been evicted.
    cache.get_or_compute(-3.0, 0.5, || compute_envelope(&goal, -3.0, 0.5));
    assert_eq!(cache.stats().misses, 4);
}

#[test]
fn repeat_surveys_reuse_the_cache() {
    let goal = GoalConfig::default();
    let grid = small_grid();
    let cache = EnvelopeCache::with_default_capacity();

    survey::generate(&goal, &grid, &cache);
    let misses_after_first = cache.stats().misses;
    survey::generate(&goal, &grid, &cache);

    let stats = cache.stats();
    assert_eq!(stats.misses, misses_after_first);
    assert!(stats.hits >= misses_after_first);
}
