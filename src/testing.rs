use super::{errors::InvariantCheck, io::*, matrix::*, utils::Tour};
use glob::glob;
use rand::Rng;
use regex::Regex;

/// Loads all instances matching `pattern` whose filename encodes the optimal cost as
/// `_opt<cost>_`, e.g. `n004_opt000080_symmetric.txt`.
pub fn get_test_matrices_with_cost(
    pattern: &str,
) -> impl Iterator<Item = (String, DistanceMatrix, Cost)> {
    let opt_regex = Regex::new(r"_opt(\d+)_").unwrap();

    let files: Vec<_> = glob(pattern)
        .expect("Failed to glob")
        .map(|r| r.expect("Failed to access globbed path"))
        .collect();

    assert!(!files.is_empty(), "no instances match {pattern}");

    files.into_iter().map(move |file| {
        let filename = String::from(file.to_str().unwrap());
        let opt = opt_regex
            .captures(&filename)
            .unwrap_or_else(|| panic!("no optimal cost in filename {filename}"))[1]
            .parse()
            .unwrap();

        let matrix = DistanceMatrix::try_read_matrix_file(&file)
            .unwrap_or_else(|e| panic!("Cannot read {filename}: {e}"));

        (filename, matrix, opt)
    })
}

/// Generates a random matrix over `n` cities; `variant` selects between asymmetric,
/// symmetric and euclidean costs.
pub fn random_matrix(rng: &mut impl Rng, n: NumNodes, variant: usize) -> DistanceMatrix {
    match variant % 3 {
        0 => DistanceMatrix::random_uniform(rng, n, 100),
        1 => DistanceMatrix::random_symmetric(rng, n, 20),
        _ => DistanceMatrix::random_euclidean(rng, n, 100.0),
    }
}

/// Asserts that `tour` is a closed permutation starting at 0 whose cost matches `matrix`
pub fn assert_valid_tour(matrix: &DistanceMatrix, tour: &Tour) {
    assert!(tour.is_correct().is_ok(), "invalid tour: {tour:?}");
    assert_eq!(tour.path().len(), matrix.len() + 1);
    assert_eq!(tour.path().first(), Some(&0));
    assert_eq!(tour.path().last(), Some(&0));
    assert_eq!(tour.cost(), tour.compute_cost(matrix));
}
