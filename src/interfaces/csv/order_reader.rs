use crate::domain::order::WashOrder;
use crate::error::{Result, WashError};
use std::io::Read;

/// Reads wash orders from a CSV source with an `order,prewash,dry,wax` header.
///
/// Whitespace around fields is trimmed and rows are read lazily, so a malformed
/// row surfaces as one `Err` without stopping the stream.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    /// Creates a new `OrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn orders(self) -> impl Iterator<Item = Result<WashOrder>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(WashError::from))
    }
}
