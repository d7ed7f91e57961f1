//! Results export adapters.

mod csv_exporter;

pub use csv_exporter::CsvExporter;
