//! Tab-delimited trajectory files.

use crate::errors::StorageError;
use crate::simulation::Trajectory;
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use std::path::Path;

fn writer<P: AsRef<Path>>(path: P) -> Result<csv::Writer<std::fs::File>, StorageError> {
    Ok(WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .from_path(path)?)
}

fn reader<P: AsRef<Path>>(path: P) -> Result<csv::Reader<std::fs::File>, StorageError> {
    Ok(ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_path(path)?)
}

/// Write a single trajectory: header `x`, one allele count per row.
pub fn write_trajectory<P: AsRef<Path>>(
    path: P,
    trajectory: &Trajectory,
) -> Result<(), StorageError> {
    let mut writer = writer(path)?;

    writer.write_record(["x"])?;
    for count in trajectory {
        writer.write_record([count.to_string()])?;
    }
    writer.flush()?;

    Ok(())
}

/// Write replicate trajectories side by side: header `x1..xR`, one row per
/// generation.
///
/// All trajectories must have the same length (replicates of one parameter
/// set always do).
pub fn write_replicates<P: AsRef<Path>>(
    path: P,
    trajectories: &[Trajectory],
) -> Result<(), StorageError> {
    let first = trajectories.first().ok_or(StorageError::Empty)?;
    let generations = first.len();

    for traj in trajectories {
        if traj.len() != generations {
            return Err(StorageError::LengthMismatch {
                expected: generations,
                found: traj.len(),
            });
        }
    }

    let mut writer = writer(path)?;

    let header: Vec<String> = (1..=trajectories.len()).map(|i| format!("x{i}")).collect();
    writer.write_record(&header)?;

    for generation in 0..generations {
        let row: Vec<String> = trajectories
            .iter()
            .map(|traj| traj.counts()[generation].to_string())
            .collect();
        writer.write_record(&row)?;
    }
    writer.flush()?;

    Ok(())
}

fn parse_count(field: &str, line: usize) -> Result<u64, StorageError> {
    field.trim().parse::<u64>().map_err(|_| StorageError::Parse {
        line,
        value: field.to_string(),
    })
}

/// Read a single-column trajectory file back into an ordered count sequence.
pub fn read_trajectory<P: AsRef<Path>>(path: P) -> Result<Vec<u64>, StorageError> {
    let mut reader = reader(path)?;
    let mut counts = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        // Header is line 1, first data row is line 2
        let line = index + 2;
        let field = record.get(0).ok_or(StorageError::Parse {
            line,
            value: String::new(),
        })?;
        counts.push(parse_count(field, line)?);
    }

    if counts.is_empty() {
        return Err(StorageError::Empty);
    }
    Ok(counts)
}

/// Read a replicate matrix file back as one count sequence per column.
pub fn read_replicates<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<u64>>, StorageError> {
    // Flexible parsing so ragged rows reach the column check below and get
    // reported with their line number instead of as an opaque csv error
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let columns = reader.headers()?.len();
    let mut replicates: Vec<Vec<u64>> = vec![Vec::new(); columns];

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let line = index + 2;
        if record.len() != columns {
            return Err(StorageError::ColumnMismatch {
                line,
                expected: columns,
                found: record.len(),
            });
        }
        for (column, field) in record.iter().enumerate() {
            replicates[column].push(parse_count(field, line)?);
        }
    }

    if replicates.iter().any(|counts| counts.is_empty()) {
        return Err(StorageError::Empty);
    }
    Ok(replicates)
}
