//! Main control unit: opcode -> primary control signals. See spec §4.3.

use crate::bitvec::Wire;

/// Primary control signals decoded from an opcode.
#[derive(Clone, Copy, Debug, Default)]
pub struct Controls {
    pub reg_dst: Wire<1>,
    pub alu_src: Wire<1>,
    pub mem_to_reg: Wire<1>,
    pub reg_write: Wire<1>,
    pub mem_read: Wire<1>,
    pub mem_write: Wire<1>,
    pub branch: Wire<1>,
    pub alu_op: Wire<2>,
}

pub const OPCODE_R_TYPE: u32 = 0b000000;
pub const OPCODE_LW: u32 = 0b100011;
pub const OPCODE_SW: u32 = 0b101011;
pub const OPCODE_BEQ: u32 = 0b000100;

pub fn control(opcode: Wire<6>) -> Controls {
    match opcode.to_u32() {
        OPCODE_R_TYPE => Controls {
            reg_dst: Wire::new(1),
            alu_src: Wire::new(0),
            mem_to_reg: Wire::new(0),
            reg_write: Wire::new(1),
            mem_read: Wire::new(0),
            mem_write: Wire::new(0),
            branch: Wire::new(0),
            alu_op: Wire::new(0b10),
        },
        OPCODE_LW => Controls {
            reg_dst: Wire::new(0),
            alu_src: Wire::new(1),
            mem_to_reg: Wire::new(1),
            reg_write: Wire::new(1),
            mem_read: Wire::new(1),
            mem_write: Wire::new(0),
            branch: Wire::new(0),
            alu_op: Wire::new(0b00),
        },
        OPCODE_SW => Controls {
            reg_dst: Wire::new(0),
            alu_src: Wire::new(1),
            mem_to_reg: Wire::new(0),
            reg_write: Wire::new(0),
            mem_read: Wire::new(0),
            mem_write: Wire::new(1),
            branch: Wire::new(0),
            alu_op: Wire::new(0b00),
        },
        OPCODE_BEQ => Controls {
            reg_dst: Wire::new(0),
            alu_src: Wire::new(0),
            mem_to_reg: Wire::new(0),
            reg_write: Wire::new(0),
            mem_read: Wire::new(0),
            mem_write: Wire::new(0),
            branch: Wire::new(1),
            alu_op: Wire::new(0b01),
        },
        // Undefined opcode: all-zero signals, by design (spec §7).
        _ => Controls::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn r_type() {
        let c = control(Wire::new(OPCODE_R_TYPE));
        assert_eq!(c.reg_dst.to_u32(), 1);
        assert_eq!(c.alu_src.to_u32(), 0);
        assert_eq!(c.reg_write.to_u32(), 1);
        assert_eq!(c.alu_op.to_u32(), 0b10);
    }

    #[test]
    fn lw() {
        let c = control(Wire::new(OPCODE_LW));
        assert_eq!(c.mem_read.to_u32(), 1);
        assert_eq!(c.mem_to_reg.to_u32(), 1);
        assert_eq!(c.reg_write.to_u32(), 1);
        assert_eq!(c.alu_src.to_u32(), 1);
    }

    #[test]
    fn sw() {
        let c = control(Wire::new(OPCODE_SW));
        assert_eq!(c.mem_write.to_u32(), 1);
        assert_eq!(c.reg_write.to_u32(), 0);
    }

    #[test]
    fn beq() {
        let c = control(Wire::new(OPCODE_BEQ));
        assert_eq!(c.branch.to_u32(), 1);
        assert_eq!(c.alu_op.to_u32(), 0b01);
    }

    #[test]
    fn undefined_opcode_is_all_zero_nop() {
        let c = control(Wire::new(0b111111));
        assert_eq!(c.reg_write.to_u32(), 0);
        assert_eq!(c.mem_read.to_u32(), 0);
        assert_eq!(c.mem_write.to_u32(), 0);
        assert_eq!(c.branch.to_u32(), 0);
    }
}
