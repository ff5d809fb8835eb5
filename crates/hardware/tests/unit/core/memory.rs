//! Memory Access Tests.
//!
//! Addresses of any value wrap modulo the RAM size and stored values wrap
//! modulo `2^N`.

use proptest::prelude::*;
use twelvebit_core::Word;
use twelvebit_core::sim::image::{ImportStatus, import_ram};

use crate::common::harness::TestContext;

#[test]
fn test_last_word_is_call_slot() {
    let ctx = TestContext::new();
    assert_eq!(ctx.engine.ram_words(), 64);
    assert_eq!(ctx.engine.call_address(), 63);
}

#[test]
fn test_negative_address_wraps() {
    let mut ctx = TestContext::new();
    ctx.engine.put_word_at(-1, 0o1111);
    assert_eq!(ctx.mem(63), 0o1111);
    assert_eq!(ctx.mem(-65), 0o1111);
    assert_eq!(ctx.mem(i64::MAX), ctx.mem(63));
}

#[test]
fn test_changed_addresses_are_deduplicated() {
    let mut ctx = TestContext::new().load_program(&[]);
    assert!(ctx.engine.changed_addresses().is_empty());

    ctx.engine.put_word_at(5, 1);
    ctx.engine.put_word_at(69, 2);
    ctx.engine.put_word_at(6, 0);
    assert_eq!(ctx.engine.changed_addresses(), &[5]);

    ctx.engine.sync_observation();
    assert!(ctx.engine.changed_addresses().is_empty());
}

#[test]
fn test_full_image_import_tracks_every_word() {
    let mut config = TestContext::config();
    config.machine.word_bits = 16;
    config.machine.ram_words = 65536;
    let mut ctx = TestContext::with_config(config);

    let zeros = vec!["000000"; 65536].join(" ");
    let ones = vec!["000001"; 65536].join(" ");
    assert_eq!(import_ram(&mut ctx.engine, &zeros), ImportStatus::Loaded(65536));
    ctx.engine.sync_observation();

    assert_eq!(import_ram(&mut ctx.engine, &ones), ImportStatus::Loaded(65536));
    assert_eq!(ctx.engine.changed_addresses().len(), 65536);
    assert_eq!(ctx.engine.changed_addresses()[65535], 65535);

    ctx.engine.sync_observation();
    assert_eq!(import_ram(&mut ctx.engine, &ones), ImportStatus::Loaded(65536));
    assert!(ctx.engine.changed_addresses().is_empty());

    ctx.engine.put_word_at(7, 2);
    ctx.engine.put_word_at(7, 3);
    assert_eq!(ctx.engine.changed_addresses(), &[7]);
}

#[test]
fn test_sync_observation_records_registers() {
    let mut ctx = TestContext::new().load_program(&[]);
    ctx.engine.regs.a = 1;
    ctx.engine.sync_observation();
    ctx.engine.regs.a = 0o1234;
    assert_eq!(ctx.engine.previous().regs.a, 1);
    ctx.engine.sync_observation();
    assert_eq!(ctx.engine.previous().regs.a, 0o1234);
    assert_eq!(*ctx.engine.previous(), ctx.engine.registers());
}

proptest! {
    #[test]
    fn prop_address_wraparound(address in any::<i64>(), value in 0u64..4096) {
        let mut ctx = TestContext::new();
        let wrapped = ((address % 64) + 64) % 64;
        ctx.engine.put_word_at(address, value);
        prop_assert_eq!(ctx.mem(wrapped), value as Word);
        prop_assert_eq!(ctx.mem(address), ctx.mem(wrapped));
    }

    #[test]
    fn prop_word_truncation(address in 0i64..64, value in any::<u64>()) {
        let mut ctx = TestContext::new();
        ctx.engine.put_word_at(address, value);
        prop_assert_eq!(u64::from(ctx.mem(address)), value % 4096);
    }
}
