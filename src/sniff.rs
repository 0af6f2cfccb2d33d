/// Compound binary file signature that opens every legacy `.xls` workbook.
pub const XLS_SIGNATURE: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Checks whether `data` starts like an XLS file.
pub fn is_file_xls(data: &[u8]) -> bool {
    data.starts_with(&XLS_SIGNATURE)
}
