/// Output writers: CSV and aligned text behind a shared header/line/footer contract.
use std::io::{self, Write};

use comfy_table::{Table, presets::NOTHING};

use super::args::OutputFormat;
use crate::types::{ChannelLine, UserLine};

/// Gap between aligned columns.
const COLUMN_GAP: u16 = 2;

/// Writes the channel report.
///
/// Callers emit `header` once, then any number of `write_line`, then `footer`.
/// Nothing is guaranteed to reach the sink before `footer`.
pub trait Outputter {
    /// Emit the channel column headers.
    ///
    /// # Errors
    ///
    /// Returns the sink's I/O error.
    fn header(&mut self) -> io::Result<()>;

    /// Emit one channel row.
    ///
    /// # Errors
    ///
    /// Returns the sink's I/O error.
    fn write_line(&mut self, line: &ChannelLine) -> io::Result<()>;

    /// Flush everything buffered so far.
    ///
    /// # Errors
    ///
    /// Returns the sink's I/O error.
    fn footer(&mut self) -> io::Result<()>;
}

/// Writes the user report; `footer` is shared with the channel report.
pub trait UserInfoOutputter: Outputter {
    /// Emit the user column headers.
    ///
    /// # Errors
    ///
    /// Returns the sink's I/O error.
    fn user_header(&mut self) -> io::Result<()>;

    /// Emit one user row.
    ///
    /// # Errors
    ///
    /// Returns the sink's I/O error.
    fn write_user_line(&mut self, line: &UserLine) -> io::Result<()>;
}

/// Build the writer for `format` over `out`.
#[must_use]
pub fn writer<'a, W: Write + 'a>(
    format: OutputFormat,
    out: W,
) -> Box<dyn UserInfoOutputter + 'a> {
    match format {
        OutputFormat::Csv => Box::new(CsvOut::new(out)),
        OutputFormat::Table => Box::new(TableOut::new(out)),
    }
}

// --- CSV ---

/// RFC 4180 CSV, buffered by the `csv` writer until `footer`.
pub struct CsvOut<W: Write> {
    w: csv::Writer<W>,
}

impl<W: Write> CsvOut<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            w: csv::Writer::from_writer(out),
        }
    }
}

impl<W: Write> Outputter for CsvOut<W> {
    fn header(&mut self) -> io::Result<()> {
        Ok(self.w.write_record(ChannelLine::HEADER)?)
    }

    fn write_line(&mut self, line: &ChannelLine) -> io::Result<()> {
        Ok(self.w.write_record(line.fields())?)
    }

    fn footer(&mut self) -> io::Result<()> {
        self.w.flush()
    }
}

impl<W: Write> UserInfoOutputter for CsvOut<W> {
    fn user_header(&mut self) -> io::Result<()> {
        Ok(self.w.write_record(UserLine::HEADER)?)
    }

    fn write_user_line(&mut self, line: &UserLine) -> io::Result<()> {
        Ok(self.w.write_record(line.fields())?)
    }
}

// --- Aligned text ---

/// Space-aligned columns without borders. Rows are collected so column widths
/// are known, then rendered at `footer`.
pub struct TableOut<W: Write> {
    out: W,
    table: Table,
}

impl<W: Write> TableOut<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        let mut table = Table::new();
        table.load_preset(NOTHING);
        Self { out, table }
    }
}

impl<W: Write> Outputter for TableOut<W> {
    fn header(&mut self) -> io::Result<()> {
        self.table.set_header(ChannelLine::HEADER);
        Ok(())
    }

    fn write_line(&mut self, line: &ChannelLine) -> io::Result<()> {
        self.table.add_row(line.fields());
        Ok(())
    }

    fn footer(&mut self) -> io::Result<()> {
        for column in self.table.column_iter_mut() {
            column.set_padding((0, COLUMN_GAP));
        }
        writeln!(self.out, "{}", self.table.trim_fmt())?;
        self.out.flush()
    }
}

impl<W: Write> UserInfoOutputter for TableOut<W> {
    fn user_header(&mut self) -> io::Result<()> {
        self.table.set_header(UserLine::HEADER);
        Ok(())
    }

    fn write_user_line(&mut self, line: &UserLine) -> io::Result<()> {
        self.table.add_row(line.fields());
        Ok(())
    }
}
