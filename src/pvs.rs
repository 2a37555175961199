//! Processor Visible State printer. See spec §5, §6.
//!
//! Label strings, field order and widths are ported verbatim from
//! `original_source/PipelinedCPU.h::printPVS` for golden-output fidelity:
//! numeric fields print as `0x%08x`, single/multi-bit control signals print
//! as `0b` followed by the bits (MSB first, zero-padded to the field
//! width), matching `std::bitset::to_string()`.

use crate::pipeline::cpu::PipelineCpu;

fn bits(value: u32, width: u32) -> String {
    format!("{:0width$b}", value, width = width as usize)
}

pub fn print_pvs(cpu: &PipelineCpu) {
    println!("==================== Cycle {} ====================", cpu.cycle());
    println!("PC = {:#010x}", cpu.pc.to_u32());

    println!("Registers:");
    for i in 0..32 {
        println!("  R{:<2} = {:#010x}", i, cpu.reg_file.raw(i).to_u32());
    }

    println!("Data Memory:");
    print_memory(&cpu.data_mem);
    println!("Instruction Memory:");
    print_memory(&cpu.inst_mem);

    println!("Latches:");
    println!("  IF-ID Latch:");
    println!("    pcPlus4          = {:#010x}", cpu.if_id.pc_plus4.to_u32());
    println!("    instruction      = {:#010x}", cpu.if_id.instruction.to_u32());

    println!("  ID-EX Latch:");
    println!("    ctrlWBMemToReg   = 0b{}", bits(cpu.id_ex.ctrl_wb.mem_to_reg.to_u32(), 1));
    println!("    ctrlWBRegWrite   = 0b{}", bits(cpu.id_ex.ctrl_wb.reg_write.to_u32(), 1));
    println!("    ctrlMEMBranch    = 0b{}", bits(cpu.id_ex.ctrl_mem.branch.to_u32(), 1));
    println!("    ctrlMEMMemRead   = 0b{}", bits(cpu.id_ex.ctrl_mem.mem_read.to_u32(), 1));
    println!("    ctrlMEMMemWrite  = 0b{}", bits(cpu.id_ex.ctrl_mem.mem_write.to_u32(), 1));
    println!("    ctrlEXRegDst     = 0b{}", bits(cpu.id_ex.ctrl_ex.reg_dst.to_u32(), 1));
    println!("    ctrlEXALUOp      = 0b{}", bits(cpu.id_ex.ctrl_ex.alu_op.to_u32(), 2));
    println!("    ctrlEXALUSrc     = 0b{}", bits(cpu.id_ex.ctrl_ex.alu_src.to_u32(), 1));
    println!("    pcPlus4          = {:#010x}", cpu.id_ex.pc_plus4.to_u32());
    println!("    regFileReadData1 = {:#010x}", cpu.id_ex.read_data1.to_u32());
    println!("    regFileReadData2 = {:#010x}", cpu.id_ex.read_data2.to_u32());
    println!("    signExtImmediate = {:#010x}", cpu.id_ex.sign_ext_imm.to_u32());
    println!("    rs               = 0b{}", bits(cpu.id_ex.rs.to_u32(), 5));
    println!("    rt               = 0b{}", bits(cpu.id_ex.rt.to_u32(), 5));
    println!("    rd               = 0b{}", bits(cpu.id_ex.rd.to_u32(), 5));

    println!("  EX-MEM Latch:");
    println!("    ctrlWBMemToReg   = 0b{}", bits(cpu.ex_mem.ctrl_wb.mem_to_reg.to_u32(), 1));
    println!("    ctrlWBRegWrite   = 0b{}", bits(cpu.ex_mem.ctrl_wb.reg_write.to_u32(), 1));
    println!("    ctrlMEMBranch    = 0b{}", bits(cpu.ex_mem.ctrl_mem.branch.to_u32(), 1));
    println!("    ctrlMEMMemRead   = 0b{}", bits(cpu.ex_mem.ctrl_mem.mem_read.to_u32(), 1));
    println!("    ctrlMEMMemWrite  = 0b{}", bits(cpu.ex_mem.ctrl_mem.mem_write.to_u32(), 1));
    println!("    branchTargetAddr = {:#010x}", cpu.ex_mem.branch_target_addr.to_u32());
    println!("    aluZero          = 0b{}", bits(cpu.ex_mem.alu_zero.to_u32(), 1));
    println!("    aluResult        = {:#010x}", cpu.ex_mem.alu_result.to_u32());
    println!("    regFileReadData2 = {:#010x}", cpu.ex_mem.read_data2.to_u32());
    println!("    regDstIdx        = 0b{}", bits(cpu.ex_mem.reg_dst_idx.to_u32(), 5));

    println!("  MEM-WB Latch:");
    println!("    ctrlWBMemToReg   = 0b{}", bits(cpu.mem_wb.ctrl_wb.mem_to_reg.to_u32(), 1));
    println!("    ctrlWBRegWrite   = 0b{}", bits(cpu.mem_wb.ctrl_wb.reg_write.to_u32(), 1));
    println!("    dataMemReadData  = {:#010x}", cpu.mem_wb.data_mem_read_data.to_u32());
    println!("    aluResult        = {:#010x}", cpu.mem_wb.alu_result.to_u32());
    println!("    regDstIdx        = 0b{}", bits(cpu.mem_wb.reg_dst_idx.to_u32(), 5));
}

fn print_memory(mem: &crate::memory::Memory) {
    let words = mem.len() / 4;
    for i in 0..words {
        let addr = (i * 4) as u32;
        println!("  [{:#010x}] = {:#010x}", addr, mem.word_read(addr));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_zero_pads_to_width() {
        assert_eq!(bits(0b1, 5), "00001");
        assert_eq!(bits(0b11, 2), "11");
    }
}
