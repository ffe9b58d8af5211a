//! Gamma lookup tables
//!
//! The three 8-bit tables are generated at compile time by build.rs from the
//! exact IEC 61966-2-1 formulas, rounded half up.

include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));
