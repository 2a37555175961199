//! Stateless combinational helpers: adder, sign-extend, 2:1 and 3:1 muxes.
//! See spec §4.5. Ported from the original's `Adder`/`SignExtend`/`MUX2`/
//! `MUX3` templates as free functions rather than stateful components
//! (the `DigitalCircuit` base class is not needed — see REDESIGN FLAGS).

use crate::bitvec::Wire;

/// 32-bit add, wrapping.
pub fn adder32(a: Wire<32>, b: Wire<32>) -> Wire<32> {
    Wire::new(a.to_u32().wrapping_add(b.to_u32()))
}

/// Sign-extends a 16-bit immediate to 32 bits.
pub fn sign_extend16(imm: Wire<16>) -> Wire<32> {
    Wire::new(((imm.to_u32() as i16) as i32) as u32)
}

/// 2:1 multiplexer: `input0` when `select` is 0, else `input1`.
pub fn mux2<const N: usize>(
    input0: Wire<N>,
    input1: Wire<N>,
    select: Wire<1>,
) -> Wire<N> {
    match select.to_u32() {
        0 => input0,
        1 => input1,
        s => unreachable!("MUX2 select out of range: {s}"),
    }
}

/// 3:1 multiplexer: 0 -> `input0`, 1 -> `input1`, 2 -> `input2`.
/// A select value of 3 is an implementation fault (spec §4.5).
pub fn mux3<const N: usize>(
    input0: Wire<N>,
    input1: Wire<N>,
    input2: Wire<N>,
    select: Wire<2>,
) -> Wire<N> {
    match select.to_u32() {
        0 => input0,
        1 => input1,
        2 => input2,
        s => panic!("MUX3 select out of range: {s}"),
    }
}
