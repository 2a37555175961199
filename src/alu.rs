//! ALU implementation. See spec §4.1.

use crate::bitvec::Wire;

/// Performs the ALU operation selected by `alu_control` on `a` and `b`.
/// Returns `(result, zero)`.
pub fn alu(alu_control: Wire<4>, a: Wire<32>, b: Wire<32>) -> (Wire<32>, Wire<1>) {
    let (a, b) = (a.to_u32(), b.to_u32());
    let result = match alu_control.to_u32() {
        0x0 => a & b,
        0x1 => a | b,
        0x2 => a.wrapping_add(b),
        0x6 => a.wrapping_sub(b),
        0x7 => (a < b) as u32,
        0xC => !(a | b),
        _ => 0,
    };
    let result = Wire::<32>::new(result);
    let zero = Wire::<1>::from_bool(result.to_u32() == 0);
    (result, zero)
}
