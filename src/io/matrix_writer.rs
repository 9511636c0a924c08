use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use itertools::Itertools;

use crate::matrix::DistanceMatrix;

/// Writes a matrix in the format understood by [`super::MatrixReader`]
pub trait MatrixWriter {
    fn try_write_matrix<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;
    fn try_write_matrix_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error>;
}

impl MatrixWriter for DistanceMatrix {
    fn try_write_matrix<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        writeln!(writer, "{}", self.number_of_nodes())?;

        let width = self.max_cost().unwrap_or(0).to_string().len();
        for row in self.rows() {
            writeln!(
                writer,
                "{}",
                row.iter().map(|c| format!("{c:>width$}")).join(" ")
            )?;
        }

        writer.flush()
    }

    fn try_write_matrix_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_matrix(writer)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{io::MatrixReader, matrix::RandomMatrix};
    use rand::SeedableRng;
    use regex::Regex;

    #[test]
    fn hard_coded() {
        let matrix = DistanceMatrix::from_rows(vec![vec![0, 5], vec![120, 0]]).unwrap();

        let output = {
            let mut buffer: Vec<u8> = Vec::new();
            matrix.try_write_matrix(&mut buffer).expect("Failed to write");
            String::from_utf8(buffer).unwrap()
        };

        assert_eq!(output, "2\n  0   5\n120   0\n");
    }

    #[test]
    fn transcribe() {
        let mut rng = rand_pcg::Pcg64::seed_from_u64(1234);
        let line = Regex::new(r"^(\s*\d+)+$").unwrap();

        for n in 0..30 {
            let org = DistanceMatrix::random_uniform(&mut rng, n, 1000);

            let mut buffer: Vec<u8> = Vec::new();
            org.try_write_matrix(&mut buffer).expect("Failed to write");

            let text = String::from_utf8(buffer.clone()).unwrap();
            assert!(text.lines().all(|l| line.is_match(l)), "Output: {text}");

            let read = DistanceMatrix::try_read_matrix(buffer.as_slice()).expect("Failed to read");
            assert_eq!(org, read);
        }
    }

    #[test]
    fn to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matrix.txt");

        let matrix = DistanceMatrix::from_rows(vec![vec![0, 1], vec![2, 0]]).unwrap();
        matrix.try_write_matrix_file(&path).unwrap();

        assert_eq!(DistanceMatrix::try_read_matrix_file(&path).unwrap(), matrix);
    }
}
