use std::io::Write;

use super::error::IoError;
use crate::domain::Operation;

/// Write dispatched operations to CSV format (`seq,operation`, 1-based)
pub fn write_invocations<W: Write>(operations: &[Operation], writer: W) -> Result<(), IoError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["seq", "operation"])?;
    for (index, operation) in operations.iter().enumerate() {
        let seq = (index + 1).to_string();
        csv_writer.write_record([seq.as_str(), operation.as_str()])?;
    }

    csv_writer.flush()?;
    Ok(())
}
