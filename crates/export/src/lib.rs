//! Export helpers for CSV and JSON artifacts.

pub mod track {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    const HEADER: &str = "body,sample,t_seconds,x_au,y_au,z_au";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard orbit-track CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the track exporter.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub body: &'a str,
        pub sample: usize,
        pub t_seconds: f64,
        pub x_au: f64,
        pub y_au: f64,
        pub z_au: f64,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{},{:.3},{:.9},{:.9},{:.9}",
                self.body, self.sample, self.t_seconds, self.x_au, self.y_au, self.z_au,
            )
        }
    }
}

pub mod report {
    use std::io::{self, Write};

    use serde::Serialize;

    /// Serialize any report to pretty JSON.
    pub fn to_json_string<T: Serialize>(value: &T) -> serde_json::Result<String> {
        serde_json::to_string_pretty(value)
    }

    /// Write a report as pretty JSON followed by a trailing newline.
    pub fn write_json<T: Serialize, W: Write>(writer: &mut W, value: &T) -> io::Result<()> {
        let rendered = to_json_string(value).map_err(io::Error::other)?;
        writeln!(writer, "{rendered}")
    }
}
