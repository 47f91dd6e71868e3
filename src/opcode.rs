//! The 256-entry opcode table: each byte maps to a mnemonic, its
//! addressing mode, and the handler that implements it. Built as a
//! compile-time perfect-hash map rather than a match over 256 arms, which
//! gives better inlining at the same clarity.

use phf::phf_map;

use crate::addressing::AddressingMode;
use crate::cpu::Cpu;

pub(crate) type Handler = fn(&mut Cpu, Option<u8>, Option<u16>) -> u8;

#[derive(Clone, Copy)]
pub(crate) struct Opcode {
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    pub base_cycles: u8,
    pub illegal: bool,
    pub handler: Handler,
}

macro_rules! op {
    ($mnemonic:expr, $handler:expr, $mode:ident, $cycles:expr) => {
        Opcode {
            mnemonic: $mnemonic,
            mode: AddressingMode::$mode,
            base_cycles: $cycles,
            illegal: false,
            handler: $handler,
        }
    };
}

macro_rules! illegal_op {
    ($mnemonic:expr, $handler:expr, $mode:ident, $cycles:expr) => {
        Opcode {
            mnemonic: $mnemonic,
            mode: AddressingMode::$mode,
            base_cycles: $cycles,
            illegal: true,
            handler: $handler,
        }
    };
}

pub(crate) static OPCODES: phf::Map<u8, Opcode> = phf_map! {
    // ADC
    0x69u8 => op!("ADC", Cpu::handle_adc, Immediate, 2),
    0x65u8 => op!("ADC", Cpu::handle_adc, ZeroPage, 3),
    0x75u8 => op!("ADC", Cpu::handle_adc, ZeroPageX, 4),
    0x6Du8 => op!("ADC", Cpu::handle_adc, Absolute, 4),
    0x7Du8 => op!("ADC", Cpu::handle_adc, AbsoluteX, 4),
    0x79u8 => op!("ADC", Cpu::handle_adc, AbsoluteY, 4),
    0x61u8 => op!("ADC", Cpu::handle_adc, IndirectX, 6),
    0x71u8 => op!("ADC", Cpu::handle_adc, IndirectY, 5),

    // AND
    0x29u8 => op!("AND", Cpu::handleAND, Immediate, 2),
    0x25u8 => op!("AND", Cpu::handleAND, ZeroPage, 3),
    0x35u8 => op!("AND", Cpu::handleAND, ZeroPageX, 4),
    0x2Du8 => op!("AND", Cpu::handleAND, Absolute, 4),
    0x3Du8 => op!("AND", Cpu::handleAND, AbsoluteX, 4),
    0x39u8 => op!("AND", Cpu::handleAND, AbsoluteY, 4),
    0x21u8 => op!("AND", Cpu::handleAND, IndirectX, 6),
    0x31u8 => op!("AND", Cpu::handleAND, IndirectY, 5),

    // ASL
    0x0Au8 => op!("ASL", Cpu::handleASL, Accumulator, 2),
    0x06u8 => op!("ASL", Cpu::handleASL, ZeroPage, 5),
    0x16u8 => op!("ASL", Cpu::handleASL, ZeroPageX, 6),
    0x0Eu8 => op!("ASL", Cpu::handleASL, Absolute, 6),
    0x1Eu8 => op!("ASL", Cpu::handleASL, AbsoluteX, 7),

    // Branches
    0x90u8 => op!("BCC", Cpu::handleBCC, Relative, 2),
    0xB0u8 => op!("BCS", Cpu::handleBCS, Relative, 2),
    0xF0u8 => op!("BEQ", Cpu::handleBEQ, Relative, 2),
    0x30u8 => op!("BMI", Cpu::handleBMI, Relative, 2),
    0xD0u8 => op!("BNE", Cpu::handleBNE, Relative, 2),
    0x10u8 => op!("BPL", Cpu::handleBPL, Relative, 2),
    0x50u8 => op!("BVC", Cpu::handleBVC, Relative, 2),
    0x70u8 => op!("BVS", Cpu::handleBVS, Relative, 2),

    // BIT
    0x24u8 => op!("BIT", Cpu::handleBit, ZeroPage, 3),
    0x2Cu8 => op!("BIT", Cpu::handleBit, Absolute, 4),

    // BRK
    0x00u8 => op!("BRK", Cpu::handleBRK, Implied, 7),

    // Flag clear/set
    0x18u8 => op!("CLC", Cpu::handleCLC, Implied, 2),
    0xD8u8 => op!("CLD", Cpu::handleCLD, Implied, 2),
    0x58u8 => op!("CLI", Cpu::handle_cli, Implied, 2),
    0xB8u8 => op!("CLV", Cpu::handleCLV, Implied, 2),
    0x38u8 => op!("SEC", Cpu::handleSEC, Implied, 2),
    0xF8u8 => op!("SED", Cpu::handleSED, Implied, 2),
    0x78u8 => op!("SEI", Cpu::handle_sei, Implied, 2),

    // CMP
    0xC9u8 => op!("CMP", Cpu::handleCMP, Immediate, 2),
    0xC5u8 => op!("CMP", Cpu::handleCMP, ZeroPage, 3),
    0xD5u8 => op!("CMP", Cpu::handleCMP, ZeroPageX, 4),
    0xCDu8 => op!("CMP", Cpu::handleCMP, Absolute, 4),
    0xDDu8 => op!("CMP", Cpu::handleCMP, AbsoluteX, 4),
    0xD9u8 => op!("CMP", Cpu::handleCMP, AbsoluteY, 4),
    0xC1u8 => op!("CMP", Cpu::handleCMP, IndirectX, 6),
    0xD1u8 => op!("CMP", Cpu::handleCMP, IndirectY, 5),

    // CPX / CPY
    0xE0u8 => op!("CPX", Cpu::handleCPX, Immediate, 2),
    0xE4u8 => op!("CPX", Cpu::handleCPX, ZeroPage, 3),
    0xECu8 => op!("CPX", Cpu::handleCPX, Absolute, 4),
    0xC0u8 => op!("CPY", Cpu::handleCPY, Immediate, 2),
    0xC4u8 => op!("CPY", Cpu::handleCPY, ZeroPage, 3),
    0xCCu8 => op!("CPY", Cpu::handleCPY, Absolute, 4),

    // DEC / DEX / DEY
    0xC6u8 => op!("DEC", Cpu::handleDEC, ZeroPage, 5),
    0xD6u8 => op!("DEC", Cpu::handleDEC, ZeroPageX, 6),
    0xCEu8 => op!("DEC", Cpu::handleDEC, Absolute, 6),
    0xDEu8 => op!("DEC", Cpu::handleDEC, AbsoluteX, 7),
    0xCAu8 => op!("DEX", Cpu::handleDEX, Implied, 2),
    0x88u8 => op!("DEY", Cpu::handleDEY, Implied, 2),

    // EOR
    0x49u8 => op!("EOR", Cpu::handleEOR, Immediate, 2),
    0x45u8 => op!("EOR", Cpu::handleEOR, ZeroPage, 3),
    0x55u8 => op!("EOR", Cpu::handleEOR, ZeroPageX, 4),
    0x4Du8 => op!("EOR", Cpu::handleEOR, Absolute, 4),
    0x5Du8 => op!("EOR", Cpu::handleEOR, AbsoluteX, 4),
    0x59u8 => op!("EOR", Cpu::handleEOR, AbsoluteY, 4),
    0x41u8 => op!("EOR", Cpu::handleEOR, IndirectX, 6),
    0x51u8 => op!("EOR", Cpu::handleEOR, IndirectY, 5),

    // INC / INX / INY
    0xE6u8 => op!("INC", Cpu::handleINC, ZeroPage, 5),
    0xF6u8 => op!("INC", Cpu::handleINC, ZeroPageX, 6),
    0xEEu8 => op!("INC", Cpu::handleINC, Absolute, 6),
    0xFEu8 => op!("INC", Cpu::handleINC, AbsoluteX, 7),
    0xE8u8 => op!("INX", Cpu::handleINX, Implied, 2),
    0xC8u8 => op!("INY", Cpu::handle_iny, Implied, 2),

    // JMP / JSR
    0x4Cu8 => op!("JMP", Cpu::handle_jmp, Absolute, 3),
    0x6Cu8 => op!("JMP", Cpu::handle_jmp, Indirect, 5),
    0x20u8 => op!("JSR", Cpu::handle_jsr, Absolute, 6),

    // LDA / LDX / LDY
    0xA9u8 => op!("LDA", Cpu::handle_lda, Immediate, 2),
    0xA5u8 => op!("LDA", Cpu::handle_lda, ZeroPage, 3),
    0xB5u8 => op!("LDA", Cpu::handle_lda, ZeroPageX, 4),
    0xADu8 => op!("LDA", Cpu::handle_lda, Absolute, 4),
    0xBDu8 => op!("LDA", Cpu::handle_lda, AbsoluteX, 4),
    0xB9u8 => op!("LDA", Cpu::handle_lda, AbsoluteY, 4),
    0xA1u8 => op!("LDA", Cpu::handle_lda, IndirectX, 6),
    0xB1u8 => op!("LDA", Cpu::handle_lda, IndirectY, 5),
    0xA2u8 => op!("LDX", Cpu::handleLDX, Immediate, 2),
    0xA6u8 => op!("LDX", Cpu::handleLDX, ZeroPage, 3),
    0xB6u8 => op!("LDX", Cpu::handleLDX, ZeroPageY, 4),
    0xAEu8 => op!("LDX", Cpu::handleLDX, Absolute, 4),
    0xBEu8 => op!("LDX", Cpu::handleLDX, AbsoluteY, 4),
    0xA0u8 => op!("LDY", Cpu::handle_ldy, Immediate, 2),
    0xA4u8 => op!("LDY", Cpu::handle_ldy, ZeroPage, 3),
    0xB4u8 => op!("LDY", Cpu::handle_ldy, ZeroPageX, 4),
    0xACu8 => op!("LDY", Cpu::handle_ldy, Absolute, 4),
    0xBCu8 => op!("LDY", Cpu::handle_ldy, AbsoluteX, 4),

    // LSR
    0x4Au8 => op!("LSR", Cpu::handleLSR, Accumulator, 2),
    0x46u8 => op!("LSR", Cpu::handleLSR, ZeroPage, 5),
    0x56u8 => op!("LSR", Cpu::handleLSR, ZeroPageX, 6),
    0x4Eu8 => op!("LSR", Cpu::handleLSR, Absolute, 6),
    0x5Eu8 => op!("LSR", Cpu::handleLSR, AbsoluteX, 7),

    // NOP
    0xEAu8 => op!("NOP", Cpu::handle_nop, Implied, 2),

    // ORA
    0x09u8 => op!("ORA", Cpu::handle_ora, Immediate, 2),
    0x05u8 => op!("ORA", Cpu::handle_ora, ZeroPage, 3),
    0x15u8 => op!("ORA", Cpu::handle_ora, ZeroPageX, 4),
    0x0Du8 => op!("ORA", Cpu::handle_ora, Absolute, 4),
    0x1Du8 => op!("ORA", Cpu::handle_ora, AbsoluteX, 4),
    0x19u8 => op!("ORA", Cpu::handle_ora, AbsoluteY, 4),
    0x01u8 => op!("ORA", Cpu::handle_ora, IndirectX, 6),
    0x11u8 => op!("ORA", Cpu::handle_ora, IndirectY, 5),

    // Stack
    0x48u8 => op!("PHA", Cpu::handle_pha, Implied, 3),
    0x08u8 => op!("PHP", Cpu::handlePHP, Implied, 3),
    0x68u8 => op!("PLA", Cpu::handle_pla, Implied, 4),
    0x28u8 => op!("PLP", Cpu::handlePLP, Implied, 4),

    // ROL / ROR
    0x2Au8 => op!("ROL", Cpu::handle_rol, Accumulator, 2),
    0x26u8 => op!("ROL", Cpu::handle_rol, ZeroPage, 5),
    0x36u8 => op!("ROL", Cpu::handle_rol, ZeroPageX, 6),
    0x2Eu8 => op!("ROL", Cpu::handle_rol, Absolute, 6),
    0x3Eu8 => op!("ROL", Cpu::handle_rol, AbsoluteX, 7),
    0x6Au8 => op!("ROR", Cpu::handle_ror, Accumulator, 2),
    0x66u8 => op!("ROR", Cpu::handle_ror, ZeroPage, 5),
    0x76u8 => op!("ROR", Cpu::handle_ror, ZeroPageX, 6),
    0x6Eu8 => op!("ROR", Cpu::handle_ror, Absolute, 6),
    0x7Eu8 => op!("ROR", Cpu::handle_ror, AbsoluteX, 7),

    // RTI / RTS
    0x40u8 => op!("RTI", Cpu::handle_rti, Implied, 6),
    0x60u8 => op!("RTS", Cpu::handleRTS, Implied, 6),

    // SBC
    0xE9u8 => op!("SBC", Cpu::handle_sbc, Immediate, 2),
    0xE5u8 => op!("SBC", Cpu::handle_sbc, ZeroPage, 3),
    0xF5u8 => op!("SBC", Cpu::handle_sbc, ZeroPageX, 4),
    0xEDu8 => op!("SBC", Cpu::handle_sbc, Absolute, 4),
    0xFDu8 => op!("SBC", Cpu::handle_sbc, AbsoluteX, 4),
    0xF9u8 => op!("SBC", Cpu::handle_sbc, AbsoluteY, 4),
    0xE1u8 => op!("SBC", Cpu::handle_sbc, IndirectX, 6),
    0xF1u8 => op!("SBC", Cpu::handle_sbc, IndirectY, 5),

    // STA / STX / STY
    0x85u8 => op!("STA", Cpu::handle_sta, ZeroPage, 3),
    0x95u8 => op!("STA", Cpu::handle_sta, ZeroPageX, 4),
    0x8Du8 => op!("STA", Cpu::handle_sta, Absolute, 4),
    0x9Du8 => op!("STA", Cpu::handle_sta, AbsoluteX, 5),
    0x99u8 => op!("STA", Cpu::handle_sta, AbsoluteY, 5),
    0x81u8 => op!("STA", Cpu::handle_sta, IndirectX, 6),
    0x91u8 => op!("STA", Cpu::handle_sta, IndirectY, 6),
    0x86u8 => op!("STX", Cpu::handleSTX, ZeroPage, 3),
    0x96u8 => op!("STX", Cpu::handleSTX, ZeroPageY, 4),
    0x8Eu8 => op!("STX", Cpu::handleSTX, Absolute, 4),
    0x84u8 => op!("STY", Cpu::handleSTY, ZeroPage, 3),
    0x94u8 => op!("STY", Cpu::handleSTY, ZeroPageX, 4),
    0x8Cu8 => op!("STY", Cpu::handleSTY, Absolute, 4),

    // Register transfers
    0xAAu8 => op!("TAX", Cpu::handleTAX, Implied, 2),
    0xA8u8 => op!("TAY", Cpu::handle_tay, Implied, 2),
    0xBAu8 => op!("TSX", Cpu::handle_tsx, Implied, 2),
    0x8Au8 => op!("TXA", Cpu::handleTXA, Implied, 2),
    0x9Au8 => op!("TXS", Cpu::handle_txs, Implied, 2),
    0x98u8 => op!("TYA", Cpu::handleTYA, Implied, 2),

    // --- Illegal / unofficial opcodes (enabled via `include_illegal`) ---

    // SLO: ASL then ORA on memory.
    0x07u8 => illegal_op!("SLO", Cpu::handle_slo, ZeroPage, 5),
    0x17u8 => illegal_op!("SLO", Cpu::handle_slo, ZeroPageX, 6),
    0x0Fu8 => illegal_op!("SLO", Cpu::handle_slo, Absolute, 6),
    0x1Fu8 => illegal_op!("SLO", Cpu::handle_slo, AbsoluteX, 7),
    0x1Bu8 => illegal_op!("SLO", Cpu::handle_slo, AbsoluteY, 7),
    0x03u8 => illegal_op!("SLO", Cpu::handle_slo, IndirectX, 8),
    0x13u8 => illegal_op!("SLO", Cpu::handle_slo, IndirectY, 8),

    // RLA: ROL then AND on memory.
    0x27u8 => illegal_op!("RLA", Cpu::handle_rla, ZeroPage, 5),
    0x37u8 => illegal_op!("RLA", Cpu::handle_rla, ZeroPageX, 6),
    0x2Fu8 => illegal_op!("RLA", Cpu::handle_rla, Absolute, 6),
    0x3Fu8 => illegal_op!("RLA", Cpu::handle_rla, AbsoluteX, 7),
    0x3Bu8 => illegal_op!("RLA", Cpu::handle_rla, AbsoluteY, 7),
    0x23u8 => illegal_op!("RLA", Cpu::handle_rla, IndirectX, 8),
    0x33u8 => illegal_op!("RLA", Cpu::handle_rla, IndirectY, 8),

    // SRE: LSR then EOR on memory.
    0x47u8 => illegal_op!("SRE", Cpu::handle_sre, ZeroPage, 5),
    0x57u8 => illegal_op!("SRE", Cpu::handle_sre, ZeroPageX, 6),
    0x4Fu8 => illegal_op!("SRE", Cpu::handle_sre, Absolute, 6),
    0x5Fu8 => illegal_op!("SRE", Cpu::handle_sre, AbsoluteX, 7),
    0x5Bu8 => illegal_op!("SRE", Cpu::handle_sre, AbsoluteY, 7),
    0x43u8 => illegal_op!("SRE", Cpu::handle_sre, IndirectX, 8),
    0x53u8 => illegal_op!("SRE", Cpu::handle_sre, IndirectY, 8),

    // RRA: ROR then ADC on memory.
    0x67u8 => illegal_op!("RRA", Cpu::handle_rra, ZeroPage, 5),
    0x77u8 => illegal_op!("RRA", Cpu::handle_rra, ZeroPageX, 6),
    0x6Fu8 => illegal_op!("RRA", Cpu::handle_rra, Absolute, 6),
    0x7Fu8 => illegal_op!("RRA", Cpu::handle_rra, AbsoluteX, 7),
    0x7Bu8 => illegal_op!("RRA", Cpu::handle_rra, AbsoluteY, 7),
    0x63u8 => illegal_op!("RRA", Cpu::handle_rra, IndirectX, 8),
    0x73u8 => illegal_op!("RRA", Cpu::handle_rra, IndirectY, 8),

    // SAX: store A & X.
    0x87u8 => illegal_op!("SAX", Cpu::handle_sax, ZeroPage, 3),
    0x97u8 => illegal_op!("SAX", Cpu::handle_sax, ZeroPageY, 4),
    0x8Fu8 => illegal_op!("SAX", Cpu::handle_sax, Absolute, 4),
    0x83u8 => illegal_op!("SAX", Cpu::handle_sax, IndirectX, 6),

    // LAX: LDA then LDX from the same operand.
    0xA7u8 => illegal_op!("LAX", Cpu::handle_lax, ZeroPage, 3),
    0xB7u8 => illegal_op!("LAX", Cpu::handle_lax, ZeroPageY, 4),
    0xAFu8 => illegal_op!("LAX", Cpu::handle_lax, Absolute, 4),
    0xBFu8 => illegal_op!("LAX", Cpu::handle_lax, AbsoluteY, 4),
    0xA3u8 => illegal_op!("LAX", Cpu::handle_lax, IndirectX, 6),
    0xB3u8 => illegal_op!("LAX", Cpu::handle_lax, IndirectY, 5),

    // DCP: DEC then CMP on memory.
    0xC7u8 => illegal_op!("DCP", Cpu::handle_dcp, ZeroPage, 5),
    0xD7u8 => illegal_op!("DCP", Cpu::handle_dcp, ZeroPageX, 6),
    0xCFu8 => illegal_op!("DCP", Cpu::handle_dcp, Absolute, 6),
    0xDFu8 => illegal_op!("DCP", Cpu::handle_dcp, AbsoluteX, 7),
    0xDBu8 => illegal_op!("DCP", Cpu::handle_dcp, AbsoluteY, 7),
    0xC3u8 => illegal_op!("DCP", Cpu::handle_dcp, IndirectX, 8),
    0xD3u8 => illegal_op!("DCP", Cpu::handle_dcp, IndirectY, 8),

    // ISB: INC then SBC on memory.
    0xE7u8 => illegal_op!("ISB", Cpu::handle_isb, ZeroPage, 5),
    0xF7u8 => illegal_op!("ISB", Cpu::handle_isb, ZeroPageX, 6),
    0xEFu8 => illegal_op!("ISB", Cpu::handle_isb, Absolute, 6),
    0xFFu8 => illegal_op!("ISB", Cpu::handle_isb, AbsoluteX, 7),
    0xFBu8 => illegal_op!("ISB", Cpu::handle_isb, AbsoluteY, 7),
    0xE3u8 => illegal_op!("ISB", Cpu::handle_isb, IndirectX, 8),
    0xF3u8 => illegal_op!("ISB", Cpu::handle_isb, IndirectY, 8),

    // ANC: AND, then copy the result's bit 7 into Carry.
    0x0Bu8 => illegal_op!("ANC", Cpu::handle_anc, Immediate, 2),
    0x2Bu8 => illegal_op!("ANC", Cpu::handle_anc, Immediate, 2),

    // ASR (a.k.a. ALR): AND then LSR on the accumulator.
    0x4Bu8 => illegal_op!("ASR", Cpu::handle_asr, Immediate, 2),

    // ARR: AND then ROR on the accumulator, with its own C/V rule.
    0x6Bu8 => illegal_op!("ARR", Cpu::handle_arr, Immediate, 2),

    // SBX (a.k.a. AXS): X = (A & X) - operand, no decimal mode, sets C like CMP.
    0xCBu8 => illegal_op!("SBX", Cpu::handle_sbx, Immediate, 2),

    // LAS (a.k.a. LAR): AND memory with SP; store into A, X and SP.
    0xBBu8 => illegal_op!("LAS", Cpu::handle_las, AbsoluteY, 4),
};
