use cecbench_cec2005::*;
use common::*;
use ndarray::Array2;
use std::path::Path;
use tempfile::tempdir;

mod common;

fn rows_of(m: &Array2<f64>) -> Vec<Vec<f64>> {
    m.rows().into_iter().map(|r| r.to_vec()).collect()
}

/// Published-style tree for F1, F5, F12 and F16 with rows longer than D = 2
fn write_tree(root: &Path) -> (Array2<f64>, Vec<Array2<f64>>) {
    let input = root.join("input_data");
    write_rows(
        &input.join("f01/shift_D50.txt"),
        &[vec![1.25, -3.5, 7.0, 9.0]],
    );
    write_rows(
        &input.join("f05/shift_D50.txt"),
        &[
            vec![10.0, 20.0, 30.0],
            vec![1.0, 2.0, 99.0],
            vec![3.0, -1.0, 99.0],
            vec![99.0, 99.0, 99.0],
        ],
    );
    write_rows(
        &input.join("f12/bias_D50.txt"),
        &[
            vec![3.0, -7.0, 1.0],
            vec![0.5, 2.0, -4.0],
            vec![9.0, 0.0, 6.0],
            vec![-1.0, 5.0, 2.0],
            vec![8.0, -3.0, 0.0],
            vec![1.0, 1.0, -6.0],
            vec![0.4, -1.2, 2.5],
        ],
    );

    let shifts = spread_shifts(10, 3);
    write_rows(&input.join("f15/shift_D50.txt"), &rows_of(&shifts));
    // file matrices are for row-vector products: store the transposes
    let engine = rotations(10, 2);
    let mut stacked = Vec::new();
    for m in &engine {
        stacked.extend(rows_of(&m.t().to_owned()));
    }
    write_rows(&input.join("f16/rot_D2.txt"), &stacked);

    let d2 = shifts.slice(ndarray::s![.., ..2]).to_owned();
    (d2, engine)
}

#[test]
fn test_load_single_and_truncate() {
    init_logger();
    let dir = tempdir().unwrap();
    write_tree(dir.path());
    let store = DirectoryParameterStore::open(dir.path()).unwrap();
    assert!(store.manifest().is_none());

    let f1 = Problem::setup(1, 2, &store).unwrap();
    assert_eq!(f1.optimum(), &point(&[1.25, -3.5]));
    assert_eq!(f1.evaluate(&point(&[1.25, -3.5])).unwrap(), -450.0);
    assert_eq!(f1.evaluate(&point(&[2.25, -3.5])).unwrap(), 1.0 - 450.0);
}

#[test]
fn test_load_schwefel_problems() {
    let dir = tempdir().unwrap();
    write_tree(dir.path());
    let store = DirectoryParameterStore::open(dir.path()).unwrap();

    let f5 = Problem::setup(5, 2, &store).unwrap();
    // both coordinates moved to the upper bound at D = 2
    assert_eq!(f5.optimum(), &point(&[100.0, 100.0]));
    assert_eq!(f5.evaluate(f5.optimum()).unwrap(), -310.0);
    // A = [[1, 2], [3, -1]], B = (300, 200)
    assert_eq!(f5.evaluate(&point(&[0.0, 0.0])).unwrap(), -10.0);

    let f12 = Problem::setup(12, 2, &store).unwrap();
    // a, b blocks of three rows; alpha is the last row
    assert_eq!(f12.optimum(), &point(&[0.4, -1.2]));
    assert_eq!(f12.evaluate(f12.optimum()).unwrap(), -460.0);
    assert!(f12.evaluate(&point(&[0.0, 0.0])).unwrap() > -460.0);
}

#[test]
fn test_directory_matches_memory_store() {
    let dir = tempdir().unwrap();
    let (shifts, engine) = write_tree(dir.path());
    let disk = DirectoryParameterStore::open(dir.path()).unwrap();
    let mut memory = MemoryParameterStore::new();
    memory
        .insert_raw(16, shifts, Some(engine), Auxiliary::None)
        .unwrap();

    let from_disk = Problem::setup(16, 2, &disk).unwrap();
    let from_memory = Problem::setup(16, 2, &memory).unwrap();
    assert_eq!(from_disk.components(), from_memory.components());
    for x in [[0.0, 0.0], [1.3, -2.2], [-4.9, 4.9]] {
        assert_eq!(
            from_disk.evaluate(&point(&x)).unwrap(),
            from_memory.evaluate(&point(&x)).unwrap()
        );
    }
}

#[test]
fn test_missing_files() {
    let dir = tempdir().unwrap();
    write_tree(dir.path());
    let store = DirectoryParameterStore::open(dir.path()).unwrap();
    // no f02 folder
    assert!(matches!(
        Problem::setup(2, 2, &store),
        Err(CecError::MissingParameterData { id: 2, dimension: 2, .. })
    ));
    // f16 rotations exist for D = 2 only
    assert!(matches!(
        Problem::setup(16, 10, &store),
        Err(CecError::CorruptParameterData { .. }) | Err(CecError::MissingParameterData { .. })
    ));
    assert!(matches!(
        Problem::setup(16, 7, &store),
        Err(CecError::UnsupportedDimension { id: 16, dimension: 7 })
    ));
}

#[test]
fn test_corrupt_rows() {
    let dir = tempdir().unwrap();
    write_tree(dir.path());
    let input = dir.path().join("input_data");
    // nine optima for a ten component problem
    let shifts = spread_shifts(9, 3);
    write_rows(&input.join("f15/shift_D50.txt"), &rows_of(&shifts));
    let store = DirectoryParameterStore::open(dir.path()).unwrap();
    assert!(matches!(
        Problem::setup(15, 2, &store),
        Err(CecError::CorruptParameterData { .. })
    ));

    std::fs::write(input.join("f01/shift_D50.txt"), "1.0 nan? 2.0\n").unwrap();
    assert!(matches!(
        Problem::setup(1, 2, &store),
        Err(CecError::CorruptParameterData { .. })
    ));
}

#[test]
fn test_manifest_renames_rotation_files() {
    let dir = tempdir().unwrap();
    let (shifts, engine) = write_tree(dir.path());
    let input = dir.path().join("input_data");
    std::fs::rename(input.join("f16/rot_D2.txt"), input.join("f16/matrix_2.txt")).unwrap();
    std::fs::write(
        input.join("meta_2005.json"),
        r#"{"functions": {"f16": {"files": {"rotation": "f16/matrix_{D}.txt"}}}}"#,
    )
    .unwrap();

    let store = DirectoryParameterStore::open(dir.path()).unwrap();
    assert!(store.manifest().is_some());
    let problem = Problem::setup(16, 2, &store).unwrap();
    let mut memory = MemoryParameterStore::new();
    memory
        .insert_raw(16, shifts, Some(engine), Auxiliary::None)
        .unwrap();
    let expected = Problem::setup(16, 2, &memory).unwrap();
    assert_eq!(problem.components(), expected.components());

    std::fs::write(input.join("meta_2005.json"), "{ not json").unwrap();
    assert!(matches!(
        DirectoryParameterStore::open(dir.path()),
        Err(CecError::Json(_))
    ));
}

#[test]
fn test_from_env() {
    let dir = tempdir().unwrap();
    write_tree(dir.path());
    // only test in this binary touching the variable
    unsafe {
        std::env::set_var("CEC2005_DATA_DIR", dir.path());
    }
    let store = DirectoryParameterStore::from_env().unwrap();
    assert_eq!(store.input_data(), dir.path().join("input_data"));
    unsafe {
        std::env::remove_var("CEC2005_DATA_DIR");
    }
    assert!(matches!(
        DirectoryParameterStore::from_env(),
        Err(CecError::Env(_))
    ));
}
