//!
//! XLSX worksheet for a benchmark suite.
//!

use std::collections::HashMap;

///
/// XLSX worksheet for a benchmark suite, with a row per bench and a column
/// per commit.
///
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// Bench rows in the worksheet.
    pub rows: HashMap<String, Row>,
    /// Header names and their column widths.
    pub headers: Vec<(&'static str, usize)>,
}

///
/// A bench row and the commit columns its values span.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    /// The zero-based row index.
    pub index: u32,
    /// The column of the oldest value.
    pub first_column: u16,
    /// The column of the newest value.
    pub last_column: u16,
}

impl Worksheet {
    /// Width of columns that contain values.
    const VALUE_COLUMN_WIDTH: usize = 14;

    /// The number of columns in an Excel worksheet.
    pub const MAX_COLUMNS: usize = 16_384;

    ///
    /// Creates a new worksheet with the given name.
    ///
    pub fn new(name: &str, headers: Vec<(&'static str, usize)>) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(name)?;

        for (header_index, (header_name, column_width)) in headers.iter().enumerate() {
            worksheet.write_with_format(
                0,
                header_index as u16,
                header_name.to_owned(),
                &Self::worksheet_caption_format(),
            )?;
            worksheet.set_column_width(header_index as u16, *column_width as f64)?;
        }
        worksheet.set_freeze_panes(1, headers.len() as u16)?;

        Ok(Self {
            worksheet,
            rows: HashMap::new(),
            headers,
        })
    }

    ///
    /// Returns the number of commit columns that fit next to the headers and
    /// the `Change` column.
    ///
    pub fn commit_capacity(&self) -> usize {
        Self::MAX_COLUMNS.saturating_sub(self.headers.len() + 1)
    }

    ///
    /// Adds a new column for a commit.
    ///
    pub fn add_commit_column(&mut self, caption: &str, commit_index: u16) -> anyhow::Result<()> {
        let column_index = (self.headers.len() as u16) + commit_index;
        self.worksheet
            .set_column_width(column_index, Self::VALUE_COLUMN_WIDTH as f64)?;
        self.worksheet.write_with_format(
            0,
            column_index,
            caption,
            &Self::column_header_format(),
        )?;
        Ok(())
    }

    ///
    /// Writes a bench value, adding a new row for the bench if necessary.
    ///
    pub fn write_bench_value(
        &mut self,
        bench: &str,
        unit: &str,
        commit_index: u16,
        value: f64,
    ) -> anyhow::Result<()> {
        let column_index = (self.headers.len() as u16) + commit_index;
        let row_index = match self.rows.get_mut(bench) {
            Some(row) => {
                row.last_column = column_index;
                row.index
            }
            None => {
                let row_index = (self.rows.len() as u32) + 1;
                self.rows.insert(
                    bench.to_owned(),
                    Row {
                        index: row_index,
                        first_column: column_index,
                        last_column: column_index,
                    },
                );

                self.worksheet
                    .write_with_format(row_index, 0, bench, &Self::row_header_format())?;
                self.worksheet
                    .write_with_format(row_index, 1, unit, &Self::row_header_format())?;
                row_index
            }
        };

        self.worksheet
            .write_with_format(row_index, column_index, value, &Self::value_format())?;
        Ok(())
    }

    ///
    /// Adds a column with the newest to oldest value ratio of each bench.
    ///
    pub fn set_changes(&mut self, commit_count: u16) -> anyhow::Result<()> {
        if self.rows.is_empty() {
            return Ok(());
        }

        let column_index = (self.headers.len() as u16) + commit_count;
        self.worksheet.write_with_format(
            0,
            column_index,
            "Change",
            &Self::column_header_format(),
        )?;
        self.worksheet
            .set_column_width(column_index, Self::VALUE_COLUMN_WIDTH as f64)?;

        let rows: Vec<Row> = self.rows.values().copied().collect();
        for row in rows.into_iter() {
            self.worksheet.write_formula_with_format(
                row.index,
                column_index,
                Self::change_formula(row).as_str(),
                &Self::ratio_format(),
            )?;
        }

        Ok(())
    }

    ///
    /// Returns the formula dividing the newest value of the row by its oldest one.
    ///
    pub fn change_formula(row: Row) -> String {
        let row_number = row.index + 1;
        let first = format!("{}{row_number}", Self::column_identifier(row.first_column));
        let last = format!("{}{row_number}", Self::column_identifier(row.last_column));
        format!(r#"=IF({first}<>0, {last}/{first}, "")"#)
    }

    ///
    /// Finalizes the worksheet and returns its inner object.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Returns the alphabetical column identifier by its zero-based index.
    ///
    pub fn column_identifier(index: u16) -> String {
        let mut identifier = String::new();
        let mut number = (index as u32) + 1;

        while number > 0 {
            number -= 1;
            let letter = (b'A' + (number % 26) as u8) as char;
            identifier.insert(0, letter);
            number /= 26;
        }

        identifier
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn worksheet_caption_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_bold()
            .set_font_size(14)
            .set_font_color("#FFFFFF")
            .set_background_color("#4C6EF5")
            .set_align(rust_xlsxwriter::FormatAlign::Center)
            .set_align(rust_xlsxwriter::FormatAlign::VerticalCenter)
            .set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn column_header_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_bold()
            .set_font_size(11)
            .set_font_color("#1E1E1E")
            .set_background_color("#EEF3FF")
            .set_align(rust_xlsxwriter::FormatAlign::Center)
            .set_text_wrap()
            .set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_font_size(12)
            .set_font_color("#1E1E1E")
            .set_background_color("#DDE6FF")
            .set_align(rust_xlsxwriter::FormatAlign::Left)
            .set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_font_size(12)
            .set_font_color("#000000")
            .set_align(rust_xlsxwriter::FormatAlign::Right)
            .set_num_format("#,##0.###")
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn ratio_format() -> rust_xlsxwriter::Format {
        Self::value_format().set_num_format("0.000")
    }
}

#[cfg(test)]
mod tests {
    use super::Row;
    use super::Worksheet;

    #[test]
    fn column_identifier() {
        assert_eq!(Worksheet::column_identifier(0), "A");
        assert_eq!(Worksheet::column_identifier(25), "Z");
        assert_eq!(Worksheet::column_identifier(26), "AA");
        assert_eq!(Worksheet::column_identifier(701), "ZZ");
        assert_eq!(Worksheet::column_identifier(702), "AAA");
    }

    #[test]
    fn change_formula() {
        let row = Row {
            index: 3,
            first_column: 3,
            last_column: 4,
        };
        assert_eq!(Worksheet::change_formula(row), r#"=IF(D4<>0, E4/D4, "")"#);
    }

    #[test]
    fn commit_capacity() {
        let worksheet = Worksheet::new("Rust Benchmark", vec![("Bench", 60), ("Unit", 10)])
            .expect("Always valid");
        assert_eq!(worksheet.commit_capacity(), Worksheet::MAX_COLUMNS - 3);
    }
}
