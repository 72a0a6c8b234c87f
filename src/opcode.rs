/// The 6809E instruction mnemonics. Addressing mode is a separate axis, carried alongside each
/// opcode in the `InstructionSignature` tables (see `instruction.rs`) rather than folded into
/// the variant name, since most mnemonics here are legal in several addressing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    // ---- single-operand read-modify-write ----
    Neg,
    Com,
    Lsr,
    Ror,
    Asr,
    Asl,
    Rol,
    Dec,
    Inc,
    Tst,
    Clr,
    Jmp,

    // ---- accumulator loads/stores/arithmetic (A and B share mnemonics, register picked by the signature) ----
    Suba,
    Subb,
    Cmpa,
    Cmpb,
    Sbca,
    Sbcb,
    Anda,
    Andb,
    Bita,
    Bitb,
    Lda,
    Ldb,
    Sta,
    Stb,
    Eora,
    Eorb,
    Adca,
    Adcb,
    Ora,
    Orb,
    Adda,
    Addb,

    // ---- 16-bit loads/stores/arithmetic ----
    Subd,
    Addd,
    Cmpd,
    Cmpx,
    Cmpy,
    Cmpu,
    Cmps,
    Ldd,
    Std,
    Ldx,
    Stx,
    Ldy,
    Sty,
    Ldu,
    Stu,
    Lds,
    Sts,

    // ---- effective-address loads ----
    Leax,
    Leay,
    Leas,
    Leau,

    // ---- branches ----
    Bra,
    Brn,
    Bhi,
    Bls,
    Bcc,
    Bcs,
    Bne,
    Beq,
    Bvc,
    Bvs,
    Bpl,
    Bmi,
    Bge,
    Blt,
    Bgt,
    Ble,
    Lbra,
    Lbrn,
    Lbhi,
    Lbls,
    Lbcc,
    Lbcs,
    Lbne,
    Lbeq,
    Lbvc,
    Lbvs,
    Lbpl,
    Lbmi,
    Lbge,
    Lblt,
    Lbgt,
    Lble,

    // ---- calls/returns ----
    Bsr,
    Lbsr,
    Jsr,
    Rts,
    Rti,

    // ---- stack ----
    Pshs,
    Puls,
    Pshu,
    Pulu,

    // ---- register moves ----
    Exg,
    Tfr,

    // ---- system ----
    Nop,
    Sync,
    Daa,
    Orcc,
    Andcc,
    Sex,
    Swi,
    Swi2,
    Swi3,
    Cwai,
    Mul,
    Abx,
}
