use std::fmt;
use std::io::{self, Write};

/// Header line printed before the parts of every product.
pub const HEADER: &str = "Product Parts -------";

/// The object under construction: part labels in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    parts: Vec<String>,
}

impl Product {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Appends a part. Parts are never removed or reordered.
    pub fn add(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Writes the listing (blank line, header, one part per line) to `out`.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// Prints the listing to stdout.
    pub fn show(&self) {
        print!("{self}");
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{HEADER}")?;
        for part in &self.parts {
            writeln!(f, "{part}")?;
        }
        Ok(())
    }
}
