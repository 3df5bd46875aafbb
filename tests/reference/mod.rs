//! Reference channel numbering, transcribed from the module's channel tables.
//!
//! Each layout gets its own function, written out longhand without reusing
//! anything from the library so the property tests compare two independent
//! derivations. Only the offset values are shared, as data.
#![allow(dead_code)] // Each test binary uses a subset

/// A reference numbering function for one layout/wiring pair.
pub type Reference = Box<dyn Fn(u32, u32) -> String>;

/// 4x32: rows occupy odd hundreds, the four banks follow each other by 32.
pub fn numbering_function_4x32(wiring_config: &str) -> Reference {
    let offset: u32 = match wiring_config {
        "M1H" => 0,
        "M2H" => 32,
        "M1L" => 64,
        "M2L" => 96,
        other => panic!("no 4x32 wiring {other}"),
    };

    Box::new(move |row, col| {
        let n = 100 * (2 * row - 1) + col + offset;
        n.to_string()
    })
}

/// 4x64: odd hundreds, low bank starts 64 channels in.
pub fn numbering_function_4x64(wiring_config: &str) -> Reference {
    let offset: u32 = match wiring_config {
        "MH" => 0,
        "ML" => 64,
        other => panic!("no 4x64 wiring {other}"),
    };

    Box::new(move |row, col| {
        let n = 100 * (2 * row - 1) + col + offset;
        n.to_string()
    })
}

/// 4x128: odd hundreds, columns run straight through 128.
pub fn numbering_function_4x128() -> Reference {
    Box::new(|row, col| {
        let n = 100 * (2 * row - 1) + col;
        n.to_string()
    })
}

/// 8x32: one hundred per row, low bank starts 32 channels in.
pub fn numbering_function_8x32(wiring_config: &str) -> Reference {
    let offset: u32 = match wiring_config {
        "MH" => 0,
        "ML" => 32,
        other => panic!("no 8x32 wiring {other}"),
    };

    Box::new(move |row, col| {
        let n = 100 * row + col + offset;
        n.to_string()
    })
}

/// 8x64: one hundred per row.
pub fn numbering_function_8x64() -> Reference {
    Box::new(|row, col| {
        let n = 100 * row + col;
        n.to_string()
    })
}

/// 16x32: fifty per row, row 1 starting at 101.
pub fn numbering_function_16x32() -> Reference {
    Box::new(|row, col| {
        let n = 50 * (row + 1) + col;
        n.to_string()
    })
}
