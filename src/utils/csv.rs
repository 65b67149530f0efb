use std::fs;
use crate::component::{DistanceGraph, Matrix};
use super::error::Error;

/// Loads a comma-delimited N×N distance table. Rejects ragged or
/// non-square tables and tables with fewer than 2 nodes, before any
/// colony state is built.
pub fn load_matrix(path: &str) -> Result<DistanceGraph, Error> {
    let text = fs::read_to_string(path)
        .map_err(|source| Error::UnreadableFile(path.to_owned(), source))?;
    parse_matrix(&text)
}

fn parse_matrix(text: &str) -> Result<DistanceGraph, Error> {
    let rows = parse_rows(text)?;
    let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    if rows.len() != cols || rows.iter().any(|row| row.len() != cols) {
        return Err(Error::NotSquare { rows: rows.len(), cols });
    }
    if cols < 2 {
        return Err(Error::TooFewNodes(cols));
    }
    Ok(DistanceGraph::new(Matrix::from_rows(rows)))
}

fn parse_rows(text: &str) -> Result<Vec<Vec<f64>>, Error> {
    let mut rows = vec![];
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line.split(',')
            .map(str::trim)
            .map(|token| token.parse().map_err(|_| Error::MalformedNumber {
                line: index + 1,
                token: token.to_owned(),
            }))
            .collect::<Result<Vec<f64>, Error>>()?;
        rows.push(row);
    }
    Ok(rows)
}
