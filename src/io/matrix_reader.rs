use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines},
    path::Path,
};

use log::warn;

use crate::matrix::{Cost, DistanceMatrix, NumNodes};

pub type Result<T> = std::io::Result<T>;

/// Reads a distance matrix given as the number of cities `n` followed by `n` rows of `n`
/// non-negative integers. Tokens may be separated by arbitrary whitespace including line
/// breaks.
///
/// # Example
/// ```
/// use tsp::{io::MatrixReader, matrix::DistanceMatrix};
/// let matrix = DistanceMatrix::try_read_matrix("2\n0 5\n7 0\n".as_bytes()).unwrap();
/// assert_eq!(matrix.cost(1, 0), 7);
/// ```
pub trait MatrixReader: Sized {
    fn try_read_matrix<R: BufRead>(reader: R) -> Result<Self>;
    fn try_read_matrix_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

impl MatrixReader for DistanceMatrix {
    fn try_read_matrix<R: BufRead>(reader: R) -> Result<Self> {
        let mut tokens = TokenReader::new(reader);

        let header = tokens.next_token()?;
        raise_error_unless!(
            header.is_some(),
            ErrorKind::InvalidData,
            "No header found; expected the number of cities"
        );
        let header = header.unwrap_or_default();
        raise_error_unless!(
            !header.starts_with('-'),
            ErrorKind::InvalidData,
            format!("Number of cities must not be negative; found {header}")
        );
        let n: NumNodes = parse_value!(header, "Header>Number of cities", tokens.line_number());

        // the header is not trusted for allocations; rows grow with the data actually read
        let mut rows: Vec<Vec<Cost>> = Vec::new();
        for u in 0..n {
            let mut row = Vec::new();
            for v in 0..n {
                let token = tokens.next_token()?;
                raise_error_unless!(
                    token.is_some(),
                    ErrorKind::InvalidData,
                    format!("Premature end of data when parsing entry ({u}, {v})")
                );
                let token = token.unwrap_or_default();

                raise_error_unless!(
                    !token.starts_with('-'),
                    ErrorKind::InvalidData,
                    format!(
                        "Negative cost {token} for entry ({u}, {v}) in line {}",
                        tokens.line_number()
                    )
                );

                let cost: Cost = parse_value!(
                    token,
                    format!("entry ({u}, {v})"),
                    tokens.line_number()
                );
                row.push(cost);
            }
            rows.push(row);
        }

        if let Some(token) = tokens.next_token()? {
            warn!(
                "Ignoring trailing data starting with {token:?} in line {}",
                tokens.line_number()
            );
        }

        DistanceMatrix::from_rows(rows)
            .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))
    }

    fn try_read_matrix_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = File::open(path)?;
        let buf_reader = BufReader::new(reader);
        Self::try_read_matrix(buf_reader)
    }
}

/// Splits the input into whitespace-separated tokens while keeping track of line numbers
struct TokenReader<R> {
    lines: Lines<R>,
    pending: Vec<String>,
    line_number: usize,
}

impl<R: BufRead> TokenReader<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            pending: Vec::new(),
            line_number: 0,
        }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            match self.lines.next() {
                None => return Ok(None),
                Some(line) => {
                    self.line_number += 1;
                    self.pending = line?.split_whitespace().rev().map(String::from).collect();
                }
            }
        }

        Ok(self.pending.pop())
    }

    fn line_number(&self) -> usize {
        self.line_number
    }
}
