use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// IEC 61966-2-1 exact formula: sRGB to linear
fn srgb_to_linear_exact(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// IEC 61966-2-1 exact formula: linear to sRGB
fn linear_to_srgb_exact(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Scale a normalized value to an integer channel, rounding half up.
fn quantize(value: f64, max: f64) -> u64 {
    (value.clamp(0.0, 1.0) * max + 0.5).floor() as u64
}

fn write_table(
    file: &mut File,
    doc: &str,
    name: &str,
    ty: &str,
    f: impl Fn(f64) -> f64,
    out_max: f64,
) {
    writeln!(file, "/// {doc}").unwrap();
    writeln!(file, "pub static {name}: [{ty}; 256] = [").unwrap();
    for i in 0..256 {
        if i > 0 && i % 16 == 0 {
            writeln!(file).unwrap();
        }
        write!(file, " {},", quantize(f(i as f64 / 255.0), out_max)).unwrap();
    }
    writeln!(file, "\n];").unwrap();
    writeln!(file).unwrap();
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("gamma_lut.rs");
    let mut file = File::create(&dest_path).unwrap();

    write_table(
        &mut file,
        "Index: 8-bit linear value, Value: 8-bit sRGB value",
        "LINEAR8_TO_SRGB8",
        "u8",
        linear_to_srgb_exact,
        255.0,
    );
    write_table(
        &mut file,
        "Index: 8-bit sRGB value, Value: 8-bit linear value",
        "SRGB8_TO_LINEAR8",
        "u8",
        srgb_to_linear_exact,
        255.0,
    );
    write_table(
        &mut file,
        "Index: 8-bit sRGB value, Value: 16-bit linear value",
        "SRGB8_TO_LINEAR16",
        "u16",
        srgb_to_linear_exact,
        65535.0,
    );

    println!("cargo::rerun-if-changed=build.rs");
}
