//! One module per mnemonic, each adding its `handle_*` method to `Cpu` via
//! an inherent `impl Cpu` block. Split this way (rather than one big match
//! in `cpu.rs`) so each instruction's tests sit next to its implementation.

mod adc;
mod and;
mod asl;
mod bcc;
mod bcs;
mod beq;
mod bit;
mod bmi;
mod bne;
mod bpl;
mod brk;
mod bvc;
mod bvs;
mod clc;
mod cld;
mod cli;
mod clv;
mod cmp;
mod cpx;
mod cpy;
mod dec;
mod dex;
mod dey;
mod eor;
mod inc;
mod inx;
mod iny;
mod jmp;
mod jsr;
mod lda;
mod ldx;
mod ldy;
mod lsr;
mod nop;
mod ora;
mod pha;
mod php;
mod pla;
mod plp;
mod rol;
mod ror;
mod rti;
mod rts;
mod sbc;
mod sec;
mod sed;
mod sei;
mod sta;
mod stx;
mod sty;
mod tax;
mod tay;
mod tsx;
mod txa;
mod txs;
mod tya;

mod anc;
mod arr;
mod asr;
mod dcp;
mod isb;
mod las;
mod lax;
mod rla;
mod rra;
mod sax;
mod sbx;
mod slo;
mod sre;
