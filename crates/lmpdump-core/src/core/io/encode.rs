use byteorder::{NativeEndian, WriteBytesExt};
use std::io::{self, Write};

/// Sequential emission of fixed-width scalars in host-native byte order.
///
/// The consuming formats are defined in terms of the producing machine's
/// native layout (typically little-endian), with no alignment padding between
/// fields. All framing decisions belong to the encoder; this trait only puts
/// scalars on the wire, one after another.
pub(crate) trait EmitScalar: Write {
    fn emit_i32(&mut self, value: i32) -> io::Result<()> {
        self.write_i32::<NativeEndian>(value)
    }

    fn emit_i64(&mut self, value: i64) -> io::Result<()> {
        self.write_i64::<NativeEndian>(value)
    }

    fn emit_f64(&mut self, value: f64) -> io::Result<()> {
        self.write_f64::<NativeEndian>(value)
    }

    /// Emits a contiguous run of `i32` values, equivalent to emitting each
    /// element in order.
    fn emit_i32_run(&mut self, values: &[i32]) -> io::Result<()> {
        for &value in values {
            self.emit_i32(value)?;
        }
        Ok(())
    }

    /// Emits a contiguous run of `f64` values, equivalent to emitting each
    /// element in order.
    fn emit_f64_run(&mut self, values: &[f64]) -> io::Result<()> {
        for &value in values {
            self.emit_f64(value)?;
        }
        Ok(())
    }
}

impl<W: Write + ?Sized> EmitScalar for W {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_i32_writes_four_native_bytes() {
        let mut buffer = Vec::new();
        buffer.emit_i32(0x0A0B0C0D).unwrap();
        assert_eq!(buffer, 0x0A0B0C0Di32.to_ne_bytes());
    }

    #[test]
    fn emit_i64_writes_eight_native_bytes() {
        let mut buffer = Vec::new();
        buffer.emit_i64(-42).unwrap();
        assert_eq!(buffer, (-42i64).to_ne_bytes());
    }

    #[test]
    fn emit_f64_is_bit_exact() {
        let mut buffer = Vec::new();
        buffer.emit_f64(-1.5).unwrap();
        assert_eq!(buffer, (-1.5f64).to_ne_bytes());
    }

    #[test]
    fn runs_match_element_wise_emission() {
        let mut run_buffer = Vec::new();
        run_buffer.emit_f64_run(&[1.0, 2.5, -1.5]).unwrap();
        run_buffer.emit_i32_run(&[4, 1]).unwrap();

        let mut element_buffer = Vec::new();
        for value in [1.0, 2.5, -1.5] {
            element_buffer.emit_f64(value).unwrap();
        }
        element_buffer.emit_i32(4).unwrap();
        element_buffer.emit_i32(1).unwrap();

        assert_eq!(run_buffer, element_buffer);
    }
}
