//! Instruction handlers and the registration list the opcode table is
//! built from. Adding an instruction means writing a handler and listing
//! each of its opcodes below; the engine needs no change.

use super::addressing::AddressingMode::{self, *};
use super::opcodes::Handler::{Modify, Read, Write};
use super::opcodes::{Descriptor, Handler};
use super::{Registers, StatusFlags};

const fn op(
    opcode: u8,
    mnemonic: &'static str,
    mode: AddressingMode,
    handler: Handler,
    description: &'static str,
) -> Descriptor {
    Descriptor::new(opcode, mnemonic, mode, handler, description)
}

pub static INSTRUCTIONS: &[Descriptor] = &[
    // Logical
    op(0x29, "AND", Immediate, Read(and), "AND memory with accumulator"),
    op(0x25, "AND", ZeroPage, Read(and), "AND memory with accumulator"),
    op(0x35, "AND", ZeroPageX, Read(and), "AND memory with accumulator"),
    op(0x2D, "AND", Absolute, Read(and), "AND memory with accumulator"),
    op(0x3D, "AND", AbsoluteX, Read(and), "AND memory with accumulator"),
    op(0x39, "AND", AbsoluteY, Read(and), "AND memory with accumulator"),
    op(0x09, "ORA", Immediate, Read(ora), "OR memory with accumulator"),
    op(0x05, "ORA", ZeroPage, Read(ora), "OR memory with accumulator"),
    op(0x15, "ORA", ZeroPageX, Read(ora), "OR memory with accumulator"),
    op(0x0D, "ORA", Absolute, Read(ora), "OR memory with accumulator"),
    op(0x1D, "ORA", AbsoluteX, Read(ora), "OR memory with accumulator"),
    op(0x19, "ORA", AbsoluteY, Read(ora), "OR memory with accumulator"),
    op(0x49, "EOR", Immediate, Read(eor), "Exclusive-OR memory with accumulator"),
    op(0x45, "EOR", ZeroPage, Read(eor), "Exclusive-OR memory with accumulator"),
    op(0x55, "EOR", ZeroPageX, Read(eor), "Exclusive-OR memory with accumulator"),
    op(0x4D, "EOR", Absolute, Read(eor), "Exclusive-OR memory with accumulator"),
    op(0x5D, "EOR", AbsoluteX, Read(eor), "Exclusive-OR memory with accumulator"),
    op(0x59, "EOR", AbsoluteY, Read(eor), "Exclusive-OR memory with accumulator"),
    // Arithmetic
    op(0x69, "ADC", Immediate, Read(adc), "Add memory to accumulator with carry"),
    op(0x65, "ADC", ZeroPage, Read(adc), "Add memory to accumulator with carry"),
    op(0x75, "ADC", ZeroPageX, Read(adc), "Add memory to accumulator with carry"),
    op(0x6D, "ADC", Absolute, Read(adc), "Add memory to accumulator with carry"),
    op(0x7D, "ADC", AbsoluteX, Read(adc), "Add memory to accumulator with carry"),
    op(0x79, "ADC", AbsoluteY, Read(adc), "Add memory to accumulator with carry"),
    op(0xE9, "SBC", Immediate, Read(sbc), "Subtract memory from accumulator with borrow"),
    op(0xE5, "SBC", ZeroPage, Read(sbc), "Subtract memory from accumulator with borrow"),
    op(0xF5, "SBC", ZeroPageX, Read(sbc), "Subtract memory from accumulator with borrow"),
    op(0xED, "SBC", Absolute, Read(sbc), "Subtract memory from accumulator with borrow"),
    op(0xFD, "SBC", AbsoluteX, Read(sbc), "Subtract memory from accumulator with borrow"),
    op(0xF9, "SBC", AbsoluteY, Read(sbc), "Subtract memory from accumulator with borrow"),
    // Loads
    op(0xA9, "LDA", Immediate, Read(lda), "Load accumulator with memory"),
    op(0xA5, "LDA", ZeroPage, Read(lda), "Load accumulator with memory"),
    op(0xB5, "LDA", ZeroPageX, Read(lda), "Load accumulator with memory"),
    op(0xAD, "LDA", Absolute, Read(lda), "Load accumulator with memory"),
    op(0xBD, "LDA", AbsoluteX, Read(lda), "Load accumulator with memory"),
    op(0xB9, "LDA", AbsoluteY, Read(lda), "Load accumulator with memory"),
    op(0xA2, "LDX", Immediate, Read(ldx), "Load index X with memory"),
    op(0xA6, "LDX", ZeroPage, Read(ldx), "Load index X with memory"),
    op(0xB6, "LDX", ZeroPageY, Read(ldx), "Load index X with memory"),
    op(0xAE, "LDX", Absolute, Read(ldx), "Load index X with memory"),
    op(0xBE, "LDX", AbsoluteY, Read(ldx), "Load index X with memory"),
    op(0xA0, "LDY", Immediate, Read(ldy), "Load index Y with memory"),
    op(0xA4, "LDY", ZeroPage, Read(ldy), "Load index Y with memory"),
    op(0xB4, "LDY", ZeroPageX, Read(ldy), "Load index Y with memory"),
    op(0xAC, "LDY", Absolute, Read(ldy), "Load index Y with memory"),
    op(0xBC, "LDY", AbsoluteX, Read(ldy), "Load index Y with memory"),
    // Stores
    op(0x85, "STA", ZeroPage, Write(sta), "Store accumulator in memory"),
    op(0x95, "STA", ZeroPageX, Write(sta), "Store accumulator in memory"),
    op(0x8D, "STA", Absolute, Write(sta), "Store accumulator in memory"),
    op(0x9D, "STA", AbsoluteX, Write(sta), "Store accumulator in memory"),
    op(0x99, "STA", AbsoluteY, Write(sta), "Store accumulator in memory"),
    op(0x86, "STX", ZeroPage, Write(stx), "Store index X in memory"),
    op(0x96, "STX", ZeroPageY, Write(stx), "Store index X in memory"),
    op(0x8E, "STX", Absolute, Write(stx), "Store index X in memory"),
    op(0x84, "STY", ZeroPage, Write(sty), "Store index Y in memory"),
    op(0x94, "STY", ZeroPageX, Write(sty), "Store index Y in memory"),
    op(0x8C, "STY", Absolute, Write(sty), "Store index Y in memory"),
    // Memory increment/decrement
    op(0xE6, "INC", ZeroPage, Modify(inc), "Increment memory by one"),
    op(0xF6, "INC", ZeroPageX, Modify(inc), "Increment memory by one"),
    op(0xEE, "INC", Absolute, Modify(inc), "Increment memory by one"),
    op(0xFE, "INC", AbsoluteX, Modify(inc), "Increment memory by one"),
    op(0xC6, "DEC", ZeroPage, Modify(dec), "Decrement memory by one"),
    op(0xD6, "DEC", ZeroPageX, Modify(dec), "Decrement memory by one"),
    op(0xCE, "DEC", Absolute, Modify(dec), "Decrement memory by one"),
    op(0xDE, "DEC", AbsoluteX, Modify(dec), "Decrement memory by one"),
    // Register increment/decrement and transfers
    op(0xE8, "INX", Implied, Handler::Implied(inx), "Increment index X by one"),
    op(0xC8, "INY", Implied, Handler::Implied(iny), "Increment index Y by one"),
    op(0xCA, "DEX", Implied, Handler::Implied(dex), "Decrement index X by one"),
    op(0x88, "DEY", Implied, Handler::Implied(dey), "Decrement index Y by one"),
    op(0xAA, "TAX", Implied, Handler::Implied(tax), "Transfer accumulator to index X"),
    op(0xA8, "TAY", Implied, Handler::Implied(tay), "Transfer accumulator to index Y"),
    op(0x8A, "TXA", Implied, Handler::Implied(txa), "Transfer index X to accumulator"),
    op(0x98, "TYA", Implied, Handler::Implied(tya), "Transfer index Y to accumulator"),
    // Flags
    op(0x18, "CLC", Implied, Handler::Implied(clc), "Clear carry flag"),
    op(0x38, "SEC", Implied, Handler::Implied(sec), "Set carry flag"),
    op(0x58, "CLI", Implied, Handler::Implied(cli), "Clear interrupt disable bit"),
    op(0x78, "SEI", Implied, Handler::Implied(sei), "Set interrupt disable status"),
    op(0xB8, "CLV", Implied, Handler::Implied(clv), "Clear overflow flag"),
    op(0xD8, "CLD", Implied, Handler::Implied(cld), "Clear decimal mode"),
    op(0xF8, "SED", Implied, Handler::Implied(sed), "Set decimal mode"),
    op(0xEA, "NOP", Implied, Handler::Implied(nop), "No operation"),
];

fn and(regs: &mut Registers, value: u8) {
    regs.a &= value;
    regs.set_zero_negative(regs.a);
}

fn ora(regs: &mut Registers, value: u8) {
    regs.a |= value;
    regs.set_zero_negative(regs.a);
}

fn eor(regs: &mut Registers, value: u8) {
    regs.a ^= value;
    regs.set_zero_negative(regs.a);
}

// Binary mode only. The decimal flag has no effect on the 2A03.
fn adc(regs: &mut Registers, value: u8) {
    let carry = regs.status.contains(StatusFlags::CARRY) as u16;
    let sum = regs.a as u16 + value as u16 + carry;
    let result = sum as u8;
    regs.status.set(StatusFlags::CARRY, sum > 0xFF);
    regs.status.set(
        StatusFlags::OVERFLOW,
        (regs.a ^ result) & (value ^ result) & 0x80 != 0,
    );
    regs.a = result;
    regs.set_zero_negative(result);
}

fn sbc(regs: &mut Registers, value: u8) {
    adc(regs, !value);
}

fn lda(regs: &mut Registers, value: u8) {
    regs.a = value;
    regs.set_zero_negative(value);
}

fn ldx(regs: &mut Registers, value: u8) {
    regs.x = value;
    regs.set_zero_negative(value);
}

fn ldy(regs: &mut Registers, value: u8) {
    regs.y = value;
    regs.set_zero_negative(value);
}

fn sta(regs: &Registers) -> u8 {
    regs.a
}

fn stx(regs: &Registers) -> u8 {
    regs.x
}

fn sty(regs: &Registers) -> u8 {
    regs.y
}

fn inc(regs: &mut Registers, value: u8) -> u8 {
    let result = value.wrapping_add(1);
    regs.set_zero_negative(result);
    result
}

fn dec(regs: &mut Registers, value: u8) -> u8 {
    let result = value.wrapping_sub(1);
    regs.set_zero_negative(result);
    result
}

fn inx(regs: &mut Registers) {
    regs.x = regs.x.wrapping_add(1);
    regs.set_zero_negative(regs.x);
}

fn iny(regs: &mut Registers) {
    regs.y = regs.y.wrapping_add(1);
    regs.set_zero_negative(regs.y);
}

fn dex(regs: &mut Registers) {
    regs.x = regs.x.wrapping_sub(1);
    regs.set_zero_negative(regs.x);
}

fn dey(regs: &mut Registers) {
    regs.y = regs.y.wrapping_sub(1);
    regs.set_zero_negative(regs.y);
}

fn tax(regs: &mut Registers) {
    regs.x = regs.a;
    regs.set_zero_negative(regs.x);
}

fn tay(regs: &mut Registers) {
    regs.y = regs.a;
    regs.set_zero_negative(regs.y);
}

fn txa(regs: &mut Registers) {
    regs.a = regs.x;
    regs.set_zero_negative(regs.a);
}

fn tya(regs: &mut Registers) {
    regs.a = regs.y;
    regs.set_zero_negative(regs.a);
}

fn clc(regs: &mut Registers) {
    regs.status.remove(StatusFlags::CARRY);
}

fn sec(regs: &mut Registers) {
    regs.status.insert(StatusFlags::CARRY);
}

fn cli(regs: &mut Registers) {
    regs.status.remove(StatusFlags::INTERRUPT_DISABLE);
}

fn sei(regs: &mut Registers) {
    regs.status.insert(StatusFlags::INTERRUPT_DISABLE);
}

fn clv(regs: &mut Registers) {
    regs.status.remove(StatusFlags::OVERFLOW);
}

fn cld(regs: &mut Registers) {
    regs.status.remove(StatusFlags::DECIMAL);
}

fn sed(regs: &mut Registers) {
    regs.status.insert(StatusFlags::DECIMAL);
}

fn nop(_regs: &mut Registers) {}
