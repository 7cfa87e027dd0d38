use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::dynamics::state::LaunchParameters;
use crate::physics::vacuum::VacuumEstimate;
use crate::sim::FlightReport;

#[derive(Serialize)]
struct ReportDocument<'a> {
    launch: &'a LaunchParameters,
    performance: &'a FlightReport,
    vacuum_reference: VacuumEstimate,
}

/// Write the flight report, its inputs and the drag-free reference as JSON.
pub fn write_report<W: Write>(
    writer: &mut W,
    params: &LaunchParameters,
    report: &FlightReport,
) -> io::Result<()> {
    let doc = ReportDocument {
        launch: params,
        performance: report,
        vacuum_reference: VacuumEstimate::for_launch(params),
    };
    serde_json::to_writer_pretty(&mut *writer, &doc)?;
    writeln!(writer)?;
    Ok(())
}

/// Write the flight report JSON to a file.
pub fn write_report_file<P: AsRef<Path>>(
    path: P,
    params: &LaunchParameters,
    report: &FlightReport,
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_report(&mut file, params, report)
}
