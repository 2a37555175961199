//! ALU Control: (ALUOp, funct) -> 4-bit ALU operation code. See spec §4.2.

use crate::bitvec::Wire;

pub fn alu_control(alu_op: Wire<2>, funct: Wire<6>) -> Wire<4> {
    let low_funct = funct.to_u32() & 0xF;
    let code = match alu_op.to_u32() {
        0b00 => 0b0010, // lw/sw: ADD
        0b01 => 0b0110, // beq: SUB
        0b10 => match low_funct {
            0x0 => 0b0010, // ADD
            0x2 => 0b0110, // SUB
            0x4 => 0b0000, // AND
            0x5 => 0b0001, // OR
            0xA => 0b0111, // SLT
            _ => 0b0000,
        },
        _ => 0b0000,
    };
    Wire::new(code)
}
