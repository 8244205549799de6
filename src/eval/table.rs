use std::{
    fs::{create_dir_all, File},
    io::{self, BufWriter, Write},
    path::Path,
};

/// One CSV file: a header naming every column, then one row per problem size.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<(usize, Vec<f64>)>,
}

impl Table {
    /// The first column is always `n`.
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        let mut header = vec!["n".to_string()];
        header.extend(columns.into_iter().map(Into::into));

        Table {
            header,
            rows: Vec::new(),
        }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[(usize, Vec<f64>)] {
        &self.rows
    }

    pub fn push_row(&mut self, n: usize, values: Vec<f64>) {
        assert_eq!(
            values.len() + 1,
            self.header.len(),
            "row for n={} does not match the header",
            n
        );
        self.rows.push((n, values));
    }

    pub fn write_csv<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.header.join(","))?;

        for (n, values) in &self.rows {
            write!(out, "{}", n)?;
            for value in values {
                write!(out, ",{}", value)?;
            }
            writeln!(out)?;
        }

        out.flush()
    }

    /// Write the table to `path`, creating the parent directories if needed.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            create_dir_all(parent)?;
        }

        self.write_csv(&mut BufWriter::new(File::create(path)?))
    }
}
