use std::io::IsTerminal;

use polars::prelude::*;

pub fn print_md(s: impl AsRef<str>) {
    let mut printer = MarkdownPrinter::new();
    printer.add(s);
    printer.dump();
}

pub struct MarkdownPrinter {
    content: String,
}

impl MarkdownPrinter {
    pub fn new() -> Self {
        Self {
            content: String::new(),
        }
    }

    fn is_tty(&self) -> bool {
        std::io::stdout().is_terminal()
    }

    pub fn dump(&self) {
        if self.is_tty() {
            let mut skin = termimad::MadSkin::default();
            for i in 0..8 {
                skin.headers[i].align = termimad::Alignment::Left;
                skin.headers[i].add_attr(termimad::crossterm::style::Attribute::Bold);
                skin.headers[i].set_fg(termimad::crossterm::style::Color::Blue);
            }
            skin.headers[0].set_bg(termimad::crossterm::style::Color::Blue);
            skin.headers[0].add_attr(termimad::crossterm::style::Attribute::NoUnderline);
            skin.print_text(&self.content);
        } else {
            println!("{}", self.content);
        }
    }

    pub fn add(&mut self, s: impl AsRef<str>) {
        self.content.push_str(s.as_ref());
    }

    pub fn add_dataframe(&mut self, df: &DataFrame) {
        let md_table = self.df_to_markdown(df);
        self.content.push_str(&md_table);
    }

    fn fmt_value(&self, v: &AnyValue) -> String {
        match v {
            AnyValue::Null => String::new(),
            AnyValue::Float32(v) => format!("{:.6}", v),
            AnyValue::Float64(v) => format!("{:.6}", v),
            AnyValue::UInt32(v) => format!("{}", v),
            AnyValue::UInt64(v) => format!("{}", v),
            AnyValue::Int32(v) => format!("{}", v),
            AnyValue::Int64(v) => format!("{}", v),
            _ => match v.get_str() {
                Some(v) => v.to_owned(),
                None => format!("{}", v),
            },
        }
    }

    /// Numeric columns are right-aligned.
    fn df_to_markdown(&self, df: &DataFrame) -> String {
        // Collect cell strings by columns
        let mut cols = vec![];
        let mut align_r = vec![];
        for col in df.get_columns() {
            let mut c = vec![col.name().to_owned()];
            for i in 0..col.len() {
                c.push(match col.get(i) {
                    Ok(v) => self.fmt_value(&v),
                    Err(_) => String::new(),
                });
            }
            cols.push(c);
            align_r.push(col.dtype().is_numeric());
        }
        if cols.is_empty() {
            return String::new();
        }
        // Each column's max width
        let widths = cols
            .iter()
            .map(|c| c.iter().map(|s| s.len()).max().unwrap_or(0))
            .collect::<Vec<_>>();
        let pad = |c: &str, n: usize| c.repeat(n);
        let build_row = |i: usize| {
            let mid = cols
                .iter()
                .enumerate()
                .map(|(j, c)| {
                    let v = &c[i];
                    if align_r[j] {
                        pad(" ", widths[j] - v.len()) + v.as_str()
                    } else {
                        v.clone() + pad(" ", widths[j] - v.len()).as_str()
                    }
                })
                .collect::<Vec<_>>()
                .join(" | ");
            "| ".to_string() + mid.as_str() + " |\n"
        };
        let separator = |align: bool| {
            if !align {
                let mid = widths
                    .iter()
                    .map(|w| pad("-", *w))
                    .collect::<Vec<_>>()
                    .join(" | ");
                return "| ".to_string() + mid.as_str() + " |\n";
            }
            let mut s = "|".to_string();
            for (j, w) in widths.iter().enumerate() {
                s += if align_r[j] { " " } else { ":" };
                s += &pad("-", *w);
                s += if align_r[j] { ":" } else { " " };
                s += "|";
            }
            s + "\n"
        };
        let rows = cols[0].len();
        let mut md = String::new();
        if self.is_tty() {
            md += &separator(false);
        }
        for i in 0..rows {
            md += &build_row(i);
            if i == 0 {
                md += &separator(true);
            } else if self.is_tty() && i == rows - 1 {
                md += &separator(false);
            }
        }
        md
    }
}

#[macro_export]
macro_rules! print_md {
    ($($arg:tt)*) => {
        $crate::utils::md::print_md(format!($($arg)*));
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataframe_table_aligns_numbers_right() -> anyhow::Result<()> {
        let df = df!(
            "Algorithm" => &["QuickSort", "HeapSort"],
            "Time" => &[Some(0.5), None],
        )?;
        let md = MarkdownPrinter::new().df_to_markdown(&df);
        assert!(md.contains("| Algorithm |     Time |\n"));
        assert!(md.contains("|:--------- | --------:|\n"));
        assert!(md.contains("| QuickSort | 0.500000 |\n"));
        assert!(md.contains("| HeapSort  |          |\n"));
        Ok(())
    }
}
