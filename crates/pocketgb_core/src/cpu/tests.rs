use super::*;

struct TestBus {
    memory: Box<[u8; 0x10000]>,
    cycles: u64,
}

impl Default for TestBus {
    fn default() -> Self {
        Self {
            memory: Box::new([0; 0x10000]),
            cycles: 0,
        }
    }
}

impl TestBus {
    fn with_program(program: &[u8]) -> Self {
        let mut bus = Self::default();
        bus.memory[..program.len()].copy_from_slice(program);
        bus
    }
}

impl Bus for TestBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.cycles += 4;
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.cycles += 4;
        self.memory[addr as usize] = value;
    }

    fn idle(&mut self) {
        self.cycles += 4;
    }

    fn cycles(&self) -> u64 {
        self.cycles
    }

    fn interrupt_flag(&self) -> u8 {
        self.memory[0xFF0F]
    }

    fn set_interrupt_flag(&mut self, value: u8) {
        self.memory[0xFF0F] = value;
    }

    fn interrupt_enable(&self) -> u8 {
        self.memory[0xFFFF]
    }
}

/// CPU positioned at address 0 with a clean flag register.
fn cpu_at_zero() -> Cpu {
    let mut cpu = Cpu::default();
    cpu.regs.pc = 0x0000;
    cpu.regs.f = 0;
    cpu
}

#[test]
fn power_on_state_matches_dmg_boot() {
    let cpu = Cpu::default();
    assert_eq!(cpu.regs.bc(), 0x0013);
    assert_eq!(cpu.regs.de(), 0x00D8);
    assert_eq!(cpu.regs.hl(), 0x014D);
    assert_eq!(cpu.regs.af(), 0x01B0);
    assert_eq!(cpu.regs.pc, 0x0100);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert!(!cpu.ime);
    assert!(!cpu.halted);
    assert_eq!(cpu.dispatch(), InterruptDispatch::SingleVector);
}

#[test]
fn nop_advances_pc() {
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::with_program(&[0x00]);

    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0001);
}

#[test]
fn unused_opcodes_and_stop_are_single_byte_nops() {
    let holes = [
        0x10, 0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
    ];
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::with_program(&holes);

    for (i, _) in holes.iter().enumerate() {
        assert_eq!(cpu.step(&mut bus), 4);
        assert_eq!(cpu.regs.pc as usize, i + 1);
    }
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn register_pairs_compose_named_fields() {
    let mut regs = Registers::default();
    regs.set_bc(0x1234);
    regs.set_rp(1, 0x5678);
    regs.set_rp2(3, 0x9AFF);

    assert_eq!((regs.b, regs.c), (0x12, 0x34));
    assert_eq!((regs.d, regs.e), (0x56, 0x78));
    assert_eq!(regs.a, 0x9A);
    assert_eq!(regs.f, 0xF0);
    assert_eq!(regs.reg8(7), 0x9A);
    assert_eq!(regs.rp(3), regs.sp);
}

#[test]
fn set_flags_keeps_masked_bits_and_clears_low_nibble() {
    let mut regs = Registers {
        f: 0xFF,
        ..Registers::default()
    };
    regs.set_flags(Flag::C.mask(), false, false, true, false);
    assert_eq!(regs.f, 0x30);
}

#[test]
fn inc_dec_8bit_update_flags_and_preserve_c() {
    let mut cpu = cpu_at_zero();
    // INC B; DEC B; INC A; DEC A
    let mut bus = TestBus::with_program(&[0x04, 0x05, 0x3C, 0x3D]);
    cpu.regs.b = 0x0F;
    cpu.regs.a = 0xFF;
    cpu.regs.f = Flag::C.mask();

    // INC B: 0x0F -> 0x10, H=1, Z=0, N=0, C unchanged.
    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.b, 0x10);
    assert!(!cpu.regs.flag(Flag::Z));
    assert!(!cpu.regs.flag(Flag::N));
    assert!(cpu.regs.flag(Flag::H));
    assert!(cpu.regs.flag(Flag::C));

    // DEC B: 0x10 -> 0x0F, H=1, N=1.
    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.b, 0x0F);
    assert!(cpu.regs.flag(Flag::N));
    assert!(cpu.regs.flag(Flag::H));
    assert!(cpu.regs.flag(Flag::C));

    // INC A: 0xFF -> 0x00, Z=1, H=1.
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.regs.flag(Flag::Z));
    assert!(cpu.regs.flag(Flag::H));

    // DEC A: 0x00 -> 0xFF, Z=0, H=1, N=1.
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0xFF);
    assert!(!cpu.regs.flag(Flag::Z));
    assert!(cpu.regs.flag(Flag::N));
    assert!(cpu.regs.flag(Flag::H));
    assert!(cpu.regs.flag(Flag::C));
}

#[test]
fn inc_dec_on_hl_memory() {
    let mut cpu = cpu_at_zero();
    // INC (HL); DEC (HL)
    let mut bus = TestBus::with_program(&[0x34, 0x35]);
    cpu.regs.set_hl(0xC000);

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(bus.memory[0xC000], 0x01);

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(bus.memory[0xC000], 0x00);
    assert!(cpu.regs.flag(Flag::Z));
}

#[test]
fn ld_immediates_and_indirect_forms() {
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::with_program(&[
        0x21, 0x00, 0xC0, // LD HL, 0xC000
        0x06, 0x42, // LD B, 0x42
        0x36, 0x99, // LD (HL), 0x99
        0x3E, 0x11, // LD A, 0x11
        0x22, // LD (HL+), A
        0x3A, // LD A, (HL-)
        0x70, // LD (HL), B
    ]);

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.hl(), 0xC000);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.b, 0x42);

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(bus.memory[0xC000], 0x99);

    cpu.step(&mut bus);
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(bus.memory[0xC000], 0x11);
    assert_eq!(cpu.regs.hl(), 0xC001);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.hl(), 0xC000);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(bus.memory[0xC000], 0x42);
}

#[test]
fn ld_high_page_and_absolute() {
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::with_program(&[
        0xE0, 0x80, // LDH (0x80), A
        0xF2, // LD A, (C)
        0xEA, 0x00, 0xD0, // LD (0xD000), A
        0x08, 0x10, 0xD0, // LD (0xD010), SP
    ]);
    cpu.regs.a = 0x42;
    cpu.regs.c = 0x81;
    bus.memory[0xFF81] = 0x24;

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(bus.memory[0xFF80], 0x42);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.a, 0x24);

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(bus.memory[0xD000], 0x24);

    assert_eq!(cpu.step(&mut bus), 20);
    assert_eq!(bus.memory[0xD010], 0xFE);
    assert_eq!(bus.memory[0xD011], 0xFF);
}

#[test]
fn inc_dec_16bit_and_add_hl_rr_behaviour() {
    let mut cpu = cpu_at_zero();
    // INC BC; DEC DE; ADD HL, BC
    let mut bus = TestBus::with_program(&[0x03, 0x1B, 0x09]);
    cpu.regs.set_bc(0xFFFF);
    cpu.regs.set_de(0x0000);
    cpu.regs.set_hl(0x0FFF);
    cpu.regs.f = Flag::Z.mask();

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.bc(), 0x0000);
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.de(), 0xFFFF);
    assert_eq!(cpu.regs.f, Flag::Z.mask());

    cpu.regs.set_bc(0x0001);
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.hl(), 0x1000);
    assert!(cpu.regs.flag(Flag::Z));
    assert!(cpu.regs.flag(Flag::H));
    assert!(!cpu.regs.flag(Flag::C));
    assert!(!cpu.regs.flag(Flag::N));
}

#[test]
fn sp_relative_arithmetic() {
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::with_program(&[
        0xF8, 0x02, // LD HL, SP+2
        0xE8, 0xFF, // ADD SP, -1
        0xF9, // LD SP, HL
    ]);
    cpu.regs.sp = 0xFFF8;

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.hl(), 0xFFFA);
    assert_eq!(cpu.regs.f, 0x00);

    cpu.regs.sp = 0x0001;
    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.sp, 0x0000);
    assert!(cpu.regs.flag(Flag::H));
    assert!(cpu.regs.flag(Flag::C));
    assert!(!cpu.regs.flag(Flag::Z));

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.sp, 0xFFFA);
}

#[test]
fn alu_group_sets_flags_and_cp_does_not_store() {
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::with_program(&[
        0x80, // ADD A, B
        0xD6, 0x3E, // SUB 0x3E
        0xFE, 0x40, // CP 0x40
        0x9F, // SBC A, A
        0xE6, 0x0F, // AND 0x0F
    ]);

    cpu.regs.a = 0x3A;
    cpu.regs.b = 0xC6;
    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.regs.flag(Flag::Z));
    assert!(cpu.regs.flag(Flag::H));
    assert!(cpu.regs.flag(Flag::C));

    cpu.regs.a = 0x3E;
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.regs.flag(Flag::Z));
    assert!(cpu.regs.flag(Flag::N));
    assert!(!cpu.regs.flag(Flag::C));

    cpu.regs.a = 0x3C;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x3C);
    assert!(cpu.regs.flag(Flag::C));
    assert!(cpu.regs.flag(Flag::N));
    assert!(!cpu.regs.flag(Flag::Z));

    // SBC A, A with carry set: 0x3C - 0x3C - 1 = 0xFF, borrow out.
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0xFF);
    assert!(cpu.regs.flag(Flag::C));
    assert!(cpu.regs.flag(Flag::H));

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x0F);
    assert_eq!(cpu.regs.f, Flag::H.mask());
}

#[test]
fn daa_adjusts_after_add_and_subtract() {
    let mut cpu = cpu_at_zero();
    // DAA; SUB 0x06; DAA
    let mut bus = TestBus::with_program(&[0x27, 0xD6, 0x06, 0x27]);

    cpu.regs.a = 0x9A;
    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.regs.flag(Flag::Z));
    assert!(cpu.regs.flag(Flag::C));
    assert!(!cpu.regs.flag(Flag::H));

    cpu.regs.a = 0x45;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x3F);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x39);
    assert!(cpu.regs.flag(Flag::N));
    assert!(!cpu.regs.flag(Flag::H));
    assert!(!cpu.regs.flag(Flag::C));
}

#[test]
fn cpl_scf_ccf() {
    let mut cpu = cpu_at_zero();
    // CPL; SCF; CCF
    let mut bus = TestBus::with_program(&[0x2F, 0x37, 0x3F]);
    cpu.regs.a = 0x35;
    cpu.regs.f = Flag::Z.mask();

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0xCA);
    assert_eq!(
        cpu.regs.f,
        Flag::Z.mask() | Flag::N.mask() | Flag::H.mask()
    );

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.f, Flag::Z.mask() | Flag::C.mask());

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.f, Flag::Z.mask());
}

#[test]
fn accumulator_rotates_force_zero_clear() {
    let mut cpu = cpu_at_zero();
    // RLCA; RLA; CB RLC A
    let mut bus = TestBus::with_program(&[0x07, 0x17, 0xCB, 0x07]);
    cpu.regs.a = 0x00;

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(!cpu.regs.flag(Flag::Z));

    cpu.regs.a = 0x80;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.regs.flag(Flag::C));
    assert!(!cpu.regs.flag(Flag::Z));

    assert_eq!(cpu.step(&mut bus), 8);
    assert!(cpu.regs.flag(Flag::Z));
    assert!(!cpu.regs.flag(Flag::C));
}

#[test]
fn cb_rotates_shifts_and_bit_ops() {
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::with_program(&[
        0xCB, 0x37, // SWAP A
        0xCB, 0x28, // SRA B
        0xCB, 0x7C, // BIT 7, H
        0xCB, 0x86, // RES 0, (HL)
        0xCB, 0xFE, // SET 7, (HL)
        0xCB, 0x46, // BIT 0, (HL)
    ]);
    cpu.regs.a = 0xF1;
    cpu.regs.b = 0x81;
    cpu.regs.set_hl(0xC0FF);
    bus.memory[0xC0FF] = 0x01;

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.a, 0x1F);
    assert_eq!(cpu.regs.f, 0x00);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.b, 0xC0);
    assert!(cpu.regs.flag(Flag::C));

    // BIT 7, H where H = 0xC0: bit set, Z clear, H set, C kept.
    cpu.step(&mut bus);
    assert!(!cpu.regs.flag(Flag::Z));
    assert!(cpu.regs.flag(Flag::H));
    assert!(cpu.regs.flag(Flag::C));

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(bus.memory[0xC0FF], 0x00);

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(bus.memory[0xC0FF], 0x80);

    assert_eq!(cpu.step(&mut bus), 12);
    assert!(cpu.regs.flag(Flag::Z));
}

#[test]
fn jr_minus_two_loops_on_itself() {
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::with_program(&[0x18, 0xFE]);

    for _ in 0..4 {
        assert_eq!(cpu.step(&mut bus), 12);
        assert_eq!(cpu.regs.pc, 0x0000);
    }
}

#[test]
fn conditional_jumps_charge_idle_only_when_taken() {
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::with_program(&[
        0x20, 0x10, // JR NZ, +0x10 (Z set, not taken)
        0xCA, 0x00, 0x20, // JP Z, 0x2000 (taken)
    ]);
    cpu.regs.f = Flag::Z.mask();

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.pc, 0x0002);

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x2000);
}

#[test]
fn call_ret_and_conditional_variants() {
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::with_program(&[
        0xCD, 0x00, 0x10, // CALL 0x1000
        0xD4, 0x00, 0x10, // CALL NC, 0x1000 (C set, not taken)
    ]);
    bus.memory[0x1000] = 0xD0; // RET NC (not taken)
    bus.memory[0x1001] = 0xC9; // RET
    cpu.regs.sp = 0xD000;
    cpu.regs.f = Flag::C.mask();

    assert_eq!(cpu.step(&mut bus), 24);
    assert_eq!(cpu.regs.pc, 0x1000);
    assert_eq!(cpu.regs.sp, 0xCFFE);
    assert_eq!(bus.memory[0xCFFE], 0x03);
    assert_eq!(bus.memory[0xCFFF], 0x00);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.pc, 0x1001);

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x0003);
    assert_eq!(cpu.regs.sp, 0xD000);

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0006);
}

#[test]
fn rst_pushes_and_jumps() {
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::with_program(&[0x00, 0xEF]);
    cpu.regs.sp = 0xD000;

    cpu.step(&mut bus);
    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x0028);
    assert_eq!(bus.memory[0xCFFE], 0x02);
}

#[test]
fn push_and_pop_roundtrip_and_pop_af_masks_low_flags() {
    let mut cpu = cpu_at_zero();
    // PUSH BC; POP AF; PUSH AF; POP DE
    let mut bus = TestBus::with_program(&[0xC5, 0xF1, 0xF5, 0xD1]);
    cpu.regs.sp = 0xD000;
    cpu.regs.set_bc(0x12FF);

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.a, 0x12);
    assert_eq!(cpu.regs.f, 0xF0);

    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.de(), 0x12F0);
    assert_eq!(cpu.regs.sp, 0xD000);
}

#[test]
fn halt_reads_hl_then_idles_until_serviced() {
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::with_program(&[0x76]);
    cpu.regs.sp = 0xD000;

    assert_eq!(cpu.step(&mut bus), 8);
    assert!(cpu.halted);
    assert_eq!(cpu.regs.pc, 0x0001);

    // A pending request without IME does not wake the CPU.
    bus.memory[0xFFFF] = 0x01;
    bus.memory[0xFF0F] = 0x01;
    assert_eq!(cpu.step(&mut bus), 4);
    assert!(cpu.halted);
    assert_eq!(cpu.regs.pc, 0x0001);

    cpu.ime = true;
    assert_eq!(cpu.step(&mut bus), 20);
    assert!(!cpu.halted);
    assert!(!cpu.ime);
    assert_eq!(cpu.regs.pc, 0x0040);
    assert_eq!(bus.memory[0xFF0F], 0x00);
    assert_eq!(bus.memory[0xCFFE], 0x01);
    assert_eq!(bus.memory[0xCFFF], 0x00);
}

#[test]
fn single_vector_dispatch_clears_every_request() {
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::with_program(&[0x00]);
    cpu.regs.sp = 0xD000;
    cpu.ime = true;
    bus.memory[0xFFFF] = 0x1F;
    bus.memory[0xFF0F] = 0x06;

    assert_eq!(cpu.step(&mut bus), 20);
    assert_eq!(cpu.regs.pc, 0x0040);
    assert_eq!(bus.memory[0xFF0F], 0x00);
}

#[test]
fn vectored_dispatch_services_lowest_pending_bit() {
    let mut cpu = Cpu::new(InterruptDispatch::Vectored);
    cpu.regs.pc = 0x0000;
    let mut bus = TestBus::with_program(&[0x00]);
    cpu.regs.sp = 0xD000;
    cpu.ime = true;
    bus.memory[0xFFFF] = 0x1C;
    bus.memory[0xFF0F] = 0x07;

    // Bits 0 and 1 are not enabled, so bit 2 wins.
    assert_eq!(cpu.step(&mut bus), 20);
    assert_eq!(cpu.regs.pc, 0x0050);
    assert_eq!(bus.memory[0xFF0F], 0x03);
}

#[test]
fn ei_is_immediate_and_reti_restores_ime() {
    let mut cpu = cpu_at_zero();
    // EI
    let mut bus = TestBus::with_program(&[0xFB]);
    bus.memory[0x0040] = 0xD9; // RETI
    cpu.regs.sp = 0xD000;
    bus.memory[0xFFFF] = 0x01;
    bus.memory[0xFF0F] = 0x01;

    assert_eq!(cpu.step(&mut bus), 4);
    assert!(cpu.ime);

    assert_eq!(cpu.step(&mut bus), 20);
    assert_eq!(cpu.regs.pc, 0x0040);
    assert!(!cpu.ime);

    assert_eq!(cpu.step(&mut bus), 16);
    assert!(cpu.ime);
    assert_eq!(cpu.regs.pc, 0x0001);
}

#[test]
fn single_vector_dispatch_services_upper_request_bits() {
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::with_program(&[0x00]);
    cpu.regs.sp = 0xD000;
    cpu.ime = true;
    bus.memory[0xFFFF] = 0x20;
    bus.memory[0xFF0F] = 0x20;

    assert_eq!(cpu.step(&mut bus), 20);
    assert_eq!(cpu.regs.pc, 0x0040);
    assert_eq!(bus.memory[0xFF0F], 0x00);
    assert!(!cpu.ime);
}

#[test]
fn vectored_dispatch_ignores_bits_without_a_vector() {
    let mut cpu = Cpu::new(InterruptDispatch::Vectored);
    cpu.regs.pc = 0x0000;
    let mut bus = TestBus::with_program(&[0x00]);
    cpu.regs.sp = 0xD000;
    cpu.ime = true;
    bus.memory[0xFFFF] = 0xE0;
    bus.memory[0xFF0F] = 0xE0;

    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0001);
    assert_eq!(bus.memory[0xFF0F], 0xE0);
    assert!(cpu.ime);
}
