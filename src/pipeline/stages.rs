//! IF/ID/EX/MEM/WB stage bodies. See spec §4.10. Each function takes the
//! CPU by mutable reference and reads/writes exactly the latches named in
//! its stage; `cpu.advance_cycle()` calls these in reverse pipeline order.

use crate::alu::alu;
use crate::alu_control::alu_control;
use crate::bitvec::Wire;
use crate::combinational::{adder32, mux2, mux3, sign_extend16};
use crate::control::control;
use crate::forwarding::{forwarding_unit, ForwardingInputs};
use crate::hazard::{hazard_detection_unit, HazardControl, HazardInputs};
use crate::pipeline::cpu::PipelineCpu;
use crate::pipeline::latches::{CtrlEx, CtrlMem, CtrlWb, MemWb};

/// The original skips the register-file write whenever the selected
/// writeback value equals this sentinel, regardless of `regWrite` (spec
/// §9, open question #2 — reproduced literally; the source of the magic
/// constant is unknown).
const WB_SUPPRESS_SENTINEL: u32 = 0xFFFF_F6E1;

pub fn write_back(cpu: &mut PipelineCpu) {
    let writeback_value = mux2(
        cpu.mem_wb.alu_result,
        cpu.mem_wb.data_mem_read_data,
        cpu.mem_wb.ctrl_wb.mem_to_reg,
    );

    if cpu.mem_wb.ctrl_wb.reg_write.to_bool() && writeback_value.to_u32() != WB_SUPPRESS_SENTINEL {
        cpu.reg_file.write(cpu.mem_wb.reg_dst_idx, writeback_value);
    }
}

pub fn memory_access(cpu: &mut PipelineCpu) {
    let pc_src = Wire::<1>::from_bool(
        cpu.ex_mem.ctrl_mem.branch.to_bool() && cpu.ex_mem.alu_zero.to_bool(),
    );
    cpu.pc = mux2(cpu.pc_plus4_pending, cpu.ex_mem.branch_target_addr, pc_src);

    let data = cpu.data_mem.access(
        cpu.ex_mem.alu_result.to_u32(),
        cpu.ex_mem.read_data2.to_u32(),
        cpu.ex_mem.ctrl_mem.mem_read.to_bool(),
        cpu.ex_mem.ctrl_mem.mem_write.to_bool(),
    );

    cpu.mem_wb.data_mem_read_data = Wire::new(data);
    cpu.mem_wb.alu_result = cpu.ex_mem.alu_result;
    cpu.mem_wb.reg_dst_idx = cpu.ex_mem.reg_dst_idx;
    cpu.mem_wb.ctrl_wb = cpu.ex_mem.ctrl_wb;
}

pub fn execute(cpu: &mut PipelineCpu, mem_wb_snapshot: MemWb) {
    let funct = Wire::<6>::new(cpu.id_ex.sign_ext_imm.to_u32() & 0x3F);
    let alu_op_code = alu_control(cpu.id_ex.ctrl_ex.alu_op, funct);

    let (op1, op2) = if cpu.overlay.forwarding_enabled() {
        let select = forwarding_unit(&ForwardingInputs {
            idex_rs: cpu.id_ex.rs,
            idex_rt: cpu.id_ex.rt,
            exmem_reg_write: cpu.ex_mem.ctrl_wb.reg_write,
            exmem_reg_dst_idx: cpu.ex_mem.reg_dst_idx,
            memwb_reg_write: mem_wb_snapshot.ctrl_wb.reg_write,
            memwb_reg_dst_idx: mem_wb_snapshot.reg_dst_idx,
        });
        let writeback_value = mux2(
            mem_wb_snapshot.alu_result,
            mem_wb_snapshot.data_mem_read_data,
            mem_wb_snapshot.ctrl_wb.mem_to_reg,
        );
        let a = mux3(cpu.id_ex.read_data1, cpu.ex_mem.alu_result, writeback_value, select.forward_a);
        let b = mux3(cpu.id_ex.read_data2, cpu.ex_mem.alu_result, writeback_value, select.forward_b);
        (a, b)
    } else {
        (cpu.id_ex.read_data1, cpu.id_ex.read_data2)
    };

    let alu_src_b = mux2(op2, cpu.id_ex.sign_ext_imm, cpu.id_ex.ctrl_ex.alu_src);
    let (alu_result, alu_zero) = alu(alu_op_code, op1, alu_src_b);

    let shifted_imm = Wire::<32>::new(cpu.id_ex.sign_ext_imm.to_u32() << 2);
    let branch_target_addr = adder32(cpu.id_ex.pc_plus4, shifted_imm);
    let reg_dst_idx = mux2(cpu.id_ex.rt, cpu.id_ex.rd, cpu.id_ex.ctrl_ex.reg_dst);

    cpu.ex_mem.alu_result = alu_result;
    cpu.ex_mem.alu_zero = alu_zero;
    cpu.ex_mem.branch_target_addr = branch_target_addr;
    cpu.ex_mem.read_data2 = op2;
    cpu.ex_mem.reg_dst_idx = reg_dst_idx;
    cpu.ex_mem.ctrl_wb = cpu.id_ex.ctrl_wb;
    cpu.ex_mem.ctrl_mem = cpu.id_ex.ctrl_mem;
}

pub fn instruction_decode(cpu: &mut PipelineCpu) -> HazardControl {
    let instruction = cpu.if_id.instruction.to_u32();
    let opcode = Wire::<6>::new(instruction >> 26);
    let rs = Wire::<5>::new(instruction >> 21);
    let rt = Wire::<5>::new(instruction >> 16);
    let rd = Wire::<5>::new(instruction >> 11);
    let imm = Wire::<16>::new(instruction);

    let ctrl = control(opcode);
    let read_data1 = cpu.reg_file.read(rs);
    let read_data2 = cpu.reg_file.read(rt);
    let sign_ext_imm = sign_extend16(imm);

    // The ID/EX latch still holds its pre-update value here: its data
    // fields describe the instruction currently in EX this cycle, which
    // is exactly what the hazard unit needs to compare against the
    // instruction now entering ID.
    let hazard_ctrl = if cpu.overlay.hazard_detection_enabled() {
        hazard_detection_unit(&HazardInputs {
            ifid_rs: rs,
            ifid_rt: rt,
            idex_rt: cpu.id_ex.rt,
            idex_mem_read: cpu.id_ex.ctrl_mem.mem_read,
        })
    } else {
        HazardControl::default()
    };

    cpu.id_ex.pc_plus4 = cpu.if_id.pc_plus4;
    cpu.id_ex.read_data1 = read_data1;
    cpu.id_ex.read_data2 = read_data2;
    cpu.id_ex.sign_ext_imm = sign_ext_imm;
    cpu.id_ex.rs = rs;
    cpu.id_ex.rt = rt;
    cpu.id_ex.rd = rd;
    cpu.id_ex.ctrl_wb = CtrlWb { mem_to_reg: ctrl.mem_to_reg, reg_write: ctrl.reg_write };
    cpu.id_ex.ctrl_mem = CtrlMem { branch: ctrl.branch, mem_read: ctrl.mem_read, mem_write: ctrl.mem_write };
    cpu.id_ex.ctrl_ex = CtrlEx { reg_dst: ctrl.reg_dst, alu_op: ctrl.alu_op, alu_src: ctrl.alu_src };

    if !hazard_ctrl.idex_ctrl_write.to_bool() {
        if cpu.verbose {
            eprintln!("[VERBOSE] cycle {}: load-use hazard, injecting bubble into ID/EX", cpu.cycle());
        }
        cpu.id_ex.zero_controls();
    }

    hazard_ctrl
}

pub fn instruction_fetch(cpu: &mut PipelineCpu, ifid_write: bool) {
    if !ifid_write {
        // Stalled: neither the adder nor the instruction memory re-runs,
        // so `pc_plus4_pending` and `if_id` keep last cycle's values.
        if cpu.verbose {
            eprintln!("[VERBOSE] cycle {}: IF stalled, PC held at {:#010x}", cpu.cycle(), cpu.pc.to_u32());
        }
        return;
    }

    let pc_plus4 = adder32(cpu.pc, Wire::new(4));
    let instruction = Wire::new(cpu.inst_mem.word_read(cpu.pc.to_u32()));

    if cpu.verbose {
        eprintln!(
            "[VERBOSE] cycle {}: IF fetched {:#010x} from PC {:#010x}",
            cpu.cycle(),
            instruction.to_u32(),
            cpu.pc.to_u32()
        );
    }

    cpu.pc_plus4_pending = pc_plus4;
    cpu.if_id.pc_plus4 = pc_plus4;
    cpu.if_id.instruction = instruction;
}
