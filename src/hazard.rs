//! Load-use stall detection. See spec §4.9. Requires forwarding to be
//! enabled (§6: the three legal overlay configurations).

use crate::bitvec::Wire;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HazardControl {
    /// Mirrors the original signal list; unused by the stage functions.
    /// PC holding during a stall falls out for free here because
    /// `instruction_fetch` leaves `pc_plus4_pending` untouched when
    /// `ifid_write` is low, so MEM's PC mux keeps re-selecting the same
    /// pending value next cycle without a separate gate on the PC itself.
    pub pc_write: Wire<1>,
    pub ifid_write: Wire<1>,
    pub idex_ctrl_write: Wire<1>,
}

impl Default for HazardControl {
    fn default() -> Self {
        // Proceed (no stall) by default.
        Self { pc_write: Wire::new(1), ifid_write: Wire::new(1), idex_ctrl_write: Wire::new(1) }
    }
}

pub struct HazardInputs {
    pub ifid_rs: Wire<5>,
    pub ifid_rt: Wire<5>,
    pub idex_rt: Wire<5>,
    pub idex_mem_read: Wire<1>,
}

pub fn hazard_detection_unit(inputs: &HazardInputs) -> HazardControl {
    let load_use = inputs.idex_mem_read.to_bool()
        && (inputs.idex_rt == inputs.ifid_rs || inputs.idex_rt == inputs.ifid_rt);

    if load_use {
        HazardControl {
            pc_write: Wire::new(0),
            ifid_write: Wire::new(0),
            idex_ctrl_write: Wire::new(0),
        }
    } else {
        HazardControl::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_stall_when_no_load() {
        let inputs = HazardInputs {
            ifid_rs: Wire::new(1),
            ifid_rt: Wire::new(2),
            idex_rt: Wire::new(2),
            idex_mem_read: Wire::new(0),
        };
        let ctrl = hazard_detection_unit(&inputs);
        assert_eq!(ctrl.pc_write.to_u32(), 1);
        assert_eq!(ctrl.ifid_write.to_u32(), 1);
        assert_eq!(ctrl.idex_ctrl_write.to_u32(), 1);
    }

    #[test]
    fn stall_on_load_use_via_rs() {
        let inputs = HazardInputs {
            ifid_rs: Wire::new(2),
            ifid_rt: Wire::new(9),
            idex_rt: Wire::new(2),
            idex_mem_read: Wire::new(1),
        };
        let ctrl = hazard_detection_unit(&inputs);
        assert_eq!(ctrl.pc_write.to_u32(), 0);
        assert_eq!(ctrl.ifid_write.to_u32(), 0);
        assert_eq!(ctrl.idex_ctrl_write.to_u32(), 0);
    }

    #[test]
    fn stall_on_load_use_via_rt() {
        let inputs = HazardInputs {
            ifid_rs: Wire::new(9),
            ifid_rt: Wire::new(2),
            idex_rt: Wire::new(2),
            idex_mem_read: Wire::new(1),
        };
        assert_eq!(hazard_detection_unit(&inputs).pc_write.to_u32(), 0);
    }

    #[test]
    fn no_stall_when_mem_read_but_no_overlap() {
        let inputs = HazardInputs {
            ifid_rs: Wire::new(1),
            ifid_rt: Wire::new(4),
            idex_rt: Wire::new(2),
            idex_mem_read: Wire::new(1),
        };
        assert_eq!(hazard_detection_unit(&inputs).pc_write.to_u32(), 1);
    }
}
