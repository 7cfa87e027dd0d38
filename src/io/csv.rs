use std::io::Write;
use std::path::Path;

use crate::dynamics::state::TrajectorySample;

/// Write trajectory samples as CSV.
///
/// Columns: time, x, y
pub fn write_trajectory<W: Write>(writer: W, samples: &[TrajectorySample]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for s in samples {
        wtr.serialize(s)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write trajectory samples to a CSV file at the given path.
pub fn write_trajectory_file<P: AsRef<Path>>(path: P, samples: &[TrajectorySample]) -> csv::Result<()> {
    let file = std::fs::File::create(path)?;
    write_trajectory(file, samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_output_has_header_and_rows() {
        let samples = vec![
            TrajectorySample { time: 0.0, x: 0.0, y: 0.0 },
            TrajectorySample { time: 0.5, x: 7.25, y: 3.5 },
        ];

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &samples).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "time,x,y");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "0.5,7.25,3.5");
    }

    #[test]
    fn rows_read_back() {
        let samples = vec![TrajectorySample { time: 1.25, x: -2.0, y: 9.5 }];
        let mut buf = Vec::new();
        write_trajectory(&mut buf, &samples).unwrap();

        let mut rdr = csv::Reader::from_reader(buf.as_slice());
        let back: Vec<TrajectorySample> = rdr.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(back, samples);
    }
}
