use ordbench::eval::{self, height_structures, heights_of, Config, Structure, Table};
use ordbench::util::random::workload;
use rand::{rngs::StdRng, SeedableRng};
use std::fs;

fn small_config() -> Config {
    Config {
        min_exp: 4,
        max_exp: 6,
        trials: 2,
        seed: 1,
    }
}

fn csv_of(table: &Table) -> String {
    let mut out = Vec::new();
    table.write_csv(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn assert_rows(table: &Table, config: &Config) {
    let sizes: Vec<usize> = table.rows().iter().map(|(n, _)| *n).collect();
    assert_eq!(sizes, config.sizes());

    for (_, values) in table.rows() {
        assert_eq!(values.len() + 1, table.header().len());
        assert!(values.iter().all(|value| value.is_finite() && *value >= 0.0));
    }
}

#[test]
fn test_sizes() {
    assert_eq!(small_config().sizes(), vec![16, 32, 64]);
    assert_eq!(Config::default().sizes().len(), 11);
}

#[test]
fn test_insert_time_header() {
    let config = small_config();
    let table = eval::insert_time(&config);

    assert!(csv_of(&table).starts_with(
        "n,BST_us_per_insert,AVL_us_per_insert,Treap_us_per_insert,SkipList_p0.5_us_per_insert\n"
    ));
    assert_rows(&table, &config);
}

#[test]
fn test_search_time_header() {
    let config = small_config();
    let table = eval::search_time(&config);

    assert!(csv_of(&table).starts_with(
        "n,BST_us_per_search,AVL_us_per_search,Treap_us_per_search,SkipList_p0.5_us_per_search\n"
    ));
    assert_rows(&table, &config);
}

#[test]
fn test_height_table() {
    let config = small_config();
    let table = eval::height(&config, &eval::HEIGHT_PROBABILITIES);

    assert!(csv_of(&table).starts_with(
        "n,BST_height,AVL_height,Treap_height,SkipList_p0.5_height,SkipList_p0.75_height,SkipList_p0.25_height,AVL_BF3_height\n"
    ));
    assert_rows(&table, &config);

    for (n, values) in table.rows() {
        assert!(values.iter().all(|value| *value >= 1.0));
        // BST chains are bounded by n, AVL (column 1) by ~1.44 log2(n + 2)
        assert!(values[0] <= *n as f64);
        assert!(values[1] <= 1.45 * ((*n + 2) as f64).log2());
    }
}

#[test]
fn test_height_is_reproducible() {
    let config = small_config();

    assert_eq!(
        eval::height(&config, &[0.5]),
        eval::height(&config, &[0.5])
    );
}

#[test]
fn test_baseline_tables() {
    let config = small_config();

    let table = eval::baseline_insert(&config);
    assert!(csv_of(&table).starts_with("n,BST_insert,HT_insert\n"));
    assert_rows(&table, &config);

    let table = eval::baseline_search(&config, 100);
    assert!(csv_of(&table).starts_with("n,BST_search,HT_search\n"));
    assert_rows(&table, &config);
}

#[test]
fn test_structure_labels() {
    let labels: Vec<String> = height_structures(&[0.5, 0.25])
        .iter()
        .map(|structure| structure.to_string())
        .collect();

    assert_eq!(
        labels,
        vec![
            "BST",
            "AVL",
            "Treap",
            "SkipList_p0.5",
            "SkipList_p0.25",
            "AVL_BF3"
        ]
    );
}

#[test]
fn test_heights_of() {
    let data = workload(&mut StdRng::seed_from_u64(3), 1000);
    let heights = heights_of(&[Structure::Avl, Structure::AvlBf3], &data, 0);

    assert_eq!(heights.len(), 2);
    assert!(heights.iter().all(|height| *height >= 10));
    assert!(heights[0] as f64 <= 1.45 * 1002f64.log2());
}

#[test]
fn test_save_creates_directories() {
    let dir = std::env::temp_dir().join(format!("ordbench-eval-{}", std::process::id()));
    let path = dir.join("nested").join("table.csv");

    let mut table = Table::new(["BST_height"]);
    table.push_row(16, vec![5.0]);
    table.save(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "n,BST_height\n16,5\n");

    fs::remove_dir_all(&dir).unwrap();
}
