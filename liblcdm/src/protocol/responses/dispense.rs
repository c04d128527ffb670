// liblcdm-rs/liblcdm/src/protocol/responses/dispense.rs

use crate::Result;
use crate::protocol::parser;
use crate::types::{
    CashboxStatus, CountEncoding, DispenseCounts, DispenseReport, DualDispenseReport, StatusCode,
};

/// Decode an Upper/LowerDispense response payload
/// Layout: check_count(2) + exit_count(2) + status(1) + cashbox(1)
pub fn decode_single_dispense(data: &[u8], encoding: CountEncoding) -> Result<DispenseReport> {
    const LEN: usize = 2 + 2 + 1 + 1;
    parser::ensure_len(data, LEN)?;

    let counts = counts_at(data, 0, encoding)?;
    Ok(DispenseReport {
        status: StatusCode::from(parser::byte_at(data, 4)?),
        cashbox: CashboxStatus::from(parser::byte_at(data, 5)?),
        counts,
    })
}

/// Decode a dual Dispense response payload
/// Layout: upper_check(2) + upper_exit(2) + lower_check(2) + lower_exit(2)
///         + status(1) + cashbox(1)
pub fn decode_dual_dispense(data: &[u8], encoding: CountEncoding) -> Result<DualDispenseReport> {
    const LEN: usize = 4 * 2 + 1 + 1;
    parser::ensure_len(data, LEN)?;

    Ok(DualDispenseReport {
        status: StatusCode::from(parser::byte_at(data, 8)?),
        cashbox: CashboxStatus::from(parser::byte_at(data, 9)?),
        upper: counts_at(data, 0, encoding)?,
        lower: counts_at(data, 4, encoding)?,
    })
}

fn counts_at(data: &[u8], idx: usize, encoding: CountEncoding) -> Result<DispenseCounts> {
    Ok(DispenseCounts {
        check: parser::count_at(data, idx, encoding)?,
        exit: parser::count_at(data, idx + 2, encoding)?,
    })
}
