//! EX-stage operand bypass. See spec §4.8.
//!
//! Reproduces the original's literal `else if` precedence within each
//! priority class rather than the canonical MIPS forwarding unit's
//! independent assignment of `forward_a`/`forward_b` (spec §9, open
//! question #1: "Forwarding precedence bug"). This is intentional — see
//! `forwarding_precedence_is_literal_not_canonical` below.

use crate::bitvec::Wire;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ForwardSelect {
    pub forward_a: Wire<2>,
    pub forward_b: Wire<2>,
}

pub struct ForwardingInputs {
    pub idex_rs: Wire<5>,
    pub idex_rt: Wire<5>,
    pub exmem_reg_write: Wire<1>,
    pub exmem_reg_dst_idx: Wire<5>,
    pub memwb_reg_write: Wire<1>,
    pub memwb_reg_dst_idx: Wire<5>,
}

pub fn forwarding_unit(inputs: &ForwardingInputs) -> ForwardSelect {
    let mut forward_a = Wire::new(0b00);
    let mut forward_b = Wire::new(0b00);

    // EX hazard: bypass from EX/MEM.
    if inputs.exmem_reg_write.to_bool() && inputs.exmem_reg_dst_idx.to_u32() != 0 {
        if inputs.exmem_reg_dst_idx == inputs.idex_rs {
            forward_a = Wire::new(0b01);
        } else if inputs.exmem_reg_dst_idx == inputs.idex_rt {
            forward_b = Wire::new(0b01);
        }
    }

    // MEM hazard: bypass from MEM/WB. Can override an EX-hazard forward,
    // matching the original's literal (non-independent) control flow.
    if inputs.memwb_reg_write.to_bool() && inputs.memwb_reg_dst_idx.to_u32() != 0 {
        if inputs.memwb_reg_dst_idx == inputs.idex_rs {
            forward_a = Wire::new(0b10);
        } else if inputs.memwb_reg_dst_idx == inputs.idex_rt {
            forward_b = Wire::new(0b10);
        }
    }

    ForwardSelect { forward_a, forward_b }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ForwardingInputs {
        ForwardingInputs {
            idex_rs: Wire::new(0),
            idex_rt: Wire::new(0),
            exmem_reg_write: Wire::new(0),
            exmem_reg_dst_idx: Wire::new(0),
            memwb_reg_write: Wire::new(0),
            memwb_reg_dst_idx: Wire::new(0),
        }
    }

    #[test]
    fn no_hazard_no_forward() {
        let sel = forwarding_unit(&base());
        assert_eq!(sel.forward_a.to_u32(), 0b00);
        assert_eq!(sel.forward_b.to_u32(), 0b00);
    }

    #[test]
    fn ex_hazard_forwards_a() {
        let inputs = ForwardingInputs {
            idex_rs: Wire::new(3),
            exmem_reg_write: Wire::new(1),
            exmem_reg_dst_idx: Wire::new(3),
            ..base()
        };
        assert_eq!(forwarding_unit(&inputs).forward_a.to_u32(), 0b01);
    }

    #[test]
    fn ex_hazard_forwards_b() {
        let inputs = ForwardingInputs {
            idex_rt: Wire::new(3),
            exmem_reg_write: Wire::new(1),
            exmem_reg_dst_idx: Wire::new(3),
            ..base()
        };
        assert_eq!(forwarding_unit(&inputs).forward_b.to_u32(), 0b01);
    }

    #[test]
    fn mem_hazard_overrides_ex_hazard_for_same_operand() {
        let inputs = ForwardingInputs {
            idex_rs: Wire::new(3),
            exmem_reg_write: Wire::new(1),
            exmem_reg_dst_idx: Wire::new(3),
            memwb_reg_write: Wire::new(1),
            memwb_reg_dst_idx: Wire::new(3),
            ..base()
        };
        assert_eq!(forwarding_unit(&inputs).forward_a.to_u32(), 0b10);
    }

    #[test]
    fn r0_destination_never_forwards() {
        let inputs = ForwardingInputs {
            idex_rs: Wire::new(0),
            exmem_reg_write: Wire::new(1),
            exmem_reg_dst_idx: Wire::new(0),
            ..base()
        };
        assert_eq!(forwarding_unit(&inputs).forward_a.to_u32(), 0b00);
    }

    /// Documents spec §9's open question: when an EX-hazard instruction's
    /// destination equals IDEX.rs AND a *different* MEM-hazard
    /// instruction's destination equals IDEX.rt, the literal control flow
    /// (two independent `if` blocks, each with an internal `else if`)
    /// still lets both forwards fire — one per priority class, on
    /// different operands. The bug is specifically that *within* a single
    /// priority class, only one of forward_a/forward_b can be set even
    /// when both rs and rt independently match that class's source.
    #[test]
    fn forwarding_precedence_is_literal_not_canonical() {
        // Within the EX-hazard class, both rs and rt match the same
        // EX/MEM destination register. The canonical (independent)
        // design would set forward_a = forward_b = 01. The literal
        // ported design only sets forward_a, because the rt check is
        // an `else if` guarded by the rs check having failed.
        let inputs = ForwardingInputs {
            idex_rs: Wire::new(5),
            idex_rt: Wire::new(5),
            exmem_reg_write: Wire::new(1),
            exmem_reg_dst_idx: Wire::new(5),
            ..base()
        };
        let sel = forwarding_unit(&inputs);
        assert_eq!(sel.forward_a.to_u32(), 0b01);
        assert_eq!(sel.forward_b.to_u32(), 0b00, "literal else-if drops the rt match");
    }
}
